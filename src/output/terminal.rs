//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::{netmask, to_binary, Network, SubnetInfo, Scheme, DUMMY_NET, FREE_NET};
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// One line summary of a partition run.
pub fn format_summary(info: &SubnetInfo) -> String {
    let head = format!("{}/{}", info.initial_ip, info.initial_mask);
    match &info.scheme {
        Scheme::Flsm {
            n,
            m,
            number_of_networks,
            number_of_hosts,
        } => format!(
            "FLSM {head}: n={n} m={m}, {number_of_networks} networks of {number_of_hosts} addresses"
        ),
        Scheme::Vlsm {
            initial_host_per_network,
            host_per_network,
        } => format!(
            "VLSM {head}: hosts [{}] -> blocks [{}]",
            initial_host_per_network.iter().join(", "),
            host_per_network.iter().join(", ")
        ),
    }
}

/// Render the network list as an aligned table.
///
/// With `binary` set, each block's base address and netmask get a second line in binary.
pub fn format_network_table(networks: &[Network], binary: bool) -> String {
    let mut lines = vec![format!(
        "{:<8} {:<18} {:<16} {:<16} {:<16} {:>10}",
        "name", "subnet", "first_ip", "last_ip", "broadcast", "hosts"
    )];

    for net in networks {
        lines.push(format!(
            "{:<8} {:<18} {:<16} {:<16} {:<16} {:>10}",
            net.name,
            net.cidr(),
            net.first_ip.to_string(),
            net.last_ip.to_string(),
            net.broadcast.to_string(),
            net.usable_hosts()
        ));
        if binary {
            let mask_bits = netmask(net.mask)
                .map(to_binary)
                .unwrap_or_else(|e| e.to_string());
            lines.push(format!(
                "{:<8} {}  mask {}",
                "",
                to_binary(net.subnet),
                mask_bits
            ));
        }
    }
    lines.join("\n")
}

/// Highlight synthetic leaves in a rendered tree.
pub fn colorize_tree(tree_str: &str) -> String {
    tree_str
        .lines()
        .map(|line| {
            if line.ends_with(FREE_NET) {
                line.green().to_string()
            } else if line.ends_with(DUMMY_NET) {
                line.red().to_string()
            } else {
                line.to_string()
            }
        })
        .map(|line| line + "\n")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{networks_flsm, ordered_host_vlsm};

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("Net 12", 5), "\"Net 12\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(26, 6), "  \"26\"");
    }

    #[test]
    fn test_format_summary() {
        let result = networks_flsm("192.168.0.0", 24, 4).unwrap();
        assert_eq!(
            format_summary(&result.subnet_info),
            "FLSM 192.168.0.0/24: n=2 m=6, 4 networks of 64 addresses"
        );

        let result = ordered_host_vlsm("10.0.0.0", 24, &[10, 60]).unwrap();
        assert_eq!(
            format_summary(&result.subnet_info),
            "VLSM 10.0.0.0/24: hosts [60, 10] -> blocks [64, 16]"
        );
    }

    #[test]
    fn test_format_network_table() {
        let result = networks_flsm("192.168.0.0", 24, 2).unwrap();
        let table = format_network_table(&result.networks, false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Net 1    192.168.0.0/25"));
        assert!(lines[2].contains("192.168.0.255"));
        assert!(lines[2].trim_end().ends_with("126"));

        let table = format_network_table(&result.networks, true);
        assert_eq!(table.lines().count(), 5);
        assert!(table.contains("11000000.10101000.00000000.10000000"));
        assert!(table.contains("mask 11111111.11111111.11111111.10000000"));
    }

    #[test]
    fn test_colorize_tree_keeps_lines() {
        colored::control::set_override(false);
        let text = "    .——— 25-Free Net\n——— 24\n    `——— 25-Net 1\n";
        assert_eq!(colorize_tree(text), text);
    }
}
