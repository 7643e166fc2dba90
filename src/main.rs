use clap::Parser;
use std::error::Error;
use subnet_tree::cli::{run, Args};
use subnet_tree::config::Settings;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let settings = Settings::from_env();
    if let Err(e) = log4rs::init_file(&settings.log_config, Default::default()) {
        eprintln!(
            "Logging disabled, could not load {}: {e}",
            settings.log_config.display()
        );
    }
    log::info!("#Start main()");

    let args = Args::parse();
    run(&args, &settings)?;

    Ok(())
}
