//! Command implementations.

pub mod claim;
pub mod events;
pub mod handover;
pub mod list;
pub mod report;
pub mod scan;
pub mod show;

use colored::{ColoredString, Colorize};

/// Render a report status with its conventional color.
pub(crate) fn status_label(status: &str) -> ColoredString {
    match status {
        "open" => status.yellow(),
        "matched" => status.cyan(),
        "claimed" | "closed" => status.green(),
        other => other.normal(),
    }
}

/// One-line rendering of a report JSON object.
pub(crate) fn report_line(report: &serde_json::Value) -> String {
    format!(
        "#{:<4} {:<6} {:<10} {:<24} {}",
        report["id"].as_u64().unwrap_or_default(),
        report["kind"].as_str().unwrap_or("?"),
        status_label(report["status"].as_str().unwrap_or("?")),
        report["category"].as_str().unwrap_or(""),
        report["location"].as_str().unwrap_or("").dimmed(),
    )
}
