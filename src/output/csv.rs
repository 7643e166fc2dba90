//! CSV output formatting for network lists.

use crate::models::Network;

use super::terminal::format_field;

const CSV_HEADER: &str =
    r#""name",         "subnet",  "mask",      "first_ip",       "last_ip",     "broadcast",  "hosts""#;

/// Render networks as CSV with quoted, right-aligned fields.
pub fn networks_to_csv(networks: &[Network]) -> String {
    log::debug!("networks_to_csv() {} rows", networks.len());
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for net in networks {
        out.push_str(&csv_row(net));
        out.push('\n');
    }
    out
}

fn csv_row(net: &Network) -> String {
    format!(
        "{name},{subnet},{mask},{first_ip},{last_ip},{broadcast},{hosts}",
        name = format_field(&net.name, 8),
        subnet = format_field(net.subnet, 17),
        mask = format_field(net.mask, 6),
        first_ip = format_field(net.first_ip, 17),
        last_ip = format_field(net.last_ip, 17),
        broadcast = format_field(net.broadcast, 17),
        hosts = format_field(net.usable_hosts(), 8),
    )
}
