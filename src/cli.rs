//! Command line surface.
//!
//! Turns user strings into the integers the partitioner takes and prints the
//! results. Everything here is a caller of the library, not part of it.

use crate::config::Settings;
use crate::models::SubnetResult;
use crate::output::{
    colorize_tree, format_network_table, format_summary, networks_to_csv, save_tree,
    timestamped_tree_file,
};
use crate::processing::{host_flsm, host_vlsm, networks_flsm, ordered_host_vlsm};
use crate::tree::build_subnet_tree;
use clap::{Parser, Subcommand, ValueEnum};
use regex::Regex;
use std::error::Error;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Separators accepted between host counts: commas and/or whitespace.
static HOST_SPLIT_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_host_split_regex() -> &'static Regex {
    HOST_SPLIT_REGEX.get_or_init(|| Regex::new(r"[,\s]+").expect("Invalid Regex"))
}

#[derive(Parser, Debug)]
#[command(version, about = "FLSM/VLSM subnet planner with subnetting tree output")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// How to print the network list
    #[arg(long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,

    /// Print the subnetting tree as ASCII art
    #[arg(long, global = true)]
    pub tree: bool,

    /// Write the ASCII tree to a file (defaults to SUBNET_TREE_EXPORT_FILE or tree.txt)
    #[arg(long, num_args = 0..=1, global = true)]
    pub export: Option<Option<PathBuf>>,

    /// Show binary forms of base addresses and masks in the table
    #[arg(long, global = true)]
    pub binary: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Equal blocks holding at least MIN_HOSTS usable hosts each
    FlsmHosts {
        ip: String,
        mask: String,
        min_hosts: String,
    },
    /// At least MIN_NETWORKS equal blocks
    FlsmNetworks {
        ip: String,
        mask: String,
        min_networks: String,
    },
    /// One block per host count, in the given order
    Vlsm {
        ip: String,
        mask: String,
        #[arg(required = true)]
        hosts: Vec<String>,
    },
    /// One block per host count, biggest first
    VlsmOrdered {
        ip: String,
        mask: String,
        #[arg(required = true)]
        hosts: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Table,
    Csv,
    Json,
}

/// Parse a count, truncating any fractional part ("12.7" -> 12).
pub fn parse_count(value: &str) -> Result<u64, Box<dyn Error>> {
    let value = value.trim();
    let integral = value.split('.').next().unwrap_or(value);
    integral
        .parse::<u64>()
        .map_err(|_| format!("Invalid number '{value}'").into())
}

/// Parse a prefix length.
pub fn parse_mask(value: &str) -> Result<u8, Box<dyn Error>> {
    let mask = parse_count(value)?;
    u8::try_from(mask).map_err(|_| format!("Invalid mask '{value}'").into())
}

/// Parse host counts given as separate arguments and/or comma separated lists.
pub fn parse_host_list(values: &[String]) -> Result<Vec<u64>, Box<dyn Error>> {
    values
        .iter()
        .flat_map(|v| get_host_split_regex().split(v.trim()))
        .filter(|s| !s.is_empty())
        .map(parse_count)
        .collect()
}

/// Run the partition the subcommand asks for.
pub fn partition(command: &Command) -> Result<SubnetResult, Box<dyn Error>> {
    let result = match command {
        Command::FlsmHosts {
            ip,
            mask,
            min_hosts,
        } => host_flsm(ip, parse_mask(mask)?, parse_count(min_hosts)?)?,
        Command::FlsmNetworks {
            ip,
            mask,
            min_networks,
        } => networks_flsm(ip, parse_mask(mask)?, parse_count(min_networks)?)?,
        Command::Vlsm { ip, mask, hosts } => {
            host_vlsm(ip, parse_mask(mask)?, &parse_host_list(hosts)?)?
        }
        Command::VlsmOrdered { ip, mask, hosts } => {
            ordered_host_vlsm(ip, parse_mask(mask)?, &parse_host_list(hosts)?)?
        }
    };
    Ok(result)
}

/// Partition, render and print according to `args`.
pub fn run(args: &Args, settings: &Settings) -> Result<(), Box<dyn Error>> {
    log::info!("#Start run() {:?}", args.command);
    let result = build_subnet_tree(partition(&args.command)?);

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        Format::Csv => print!("{}", networks_to_csv(&result.networks)),
        Format::Table => {
            println!("{}", format_summary(&result.subnet_info));
            println!("{}", format_network_table(&result.networks, args.binary));
        }
    }

    if args.tree {
        print!("{}", colorize_tree(&result.tree_str));
    }

    if let Some(export) = &args.export {
        let path = match export {
            Some(path) => path.clone(),
            None if settings.timestamped_export() => timestamped_tree_file(),
            None => settings.export_file.clone(),
        };
        let written = save_tree(&result.tree_str, Some(&path))?;
        log::info!("Exported tree to {}", written.display());
    }

    Ok(())
}
