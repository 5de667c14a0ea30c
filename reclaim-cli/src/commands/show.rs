//! Single-report display command.

use anyhow::Result;
use colored::Colorize;

use crate::client::ApiClient;
use crate::commands::status_label;

/// Execute the show command.
pub async fn execute(client: &ApiClient, id: u64, json_output: bool) -> Result<()> {
    let report = client.get(&format!("/api/v1/reports/{id}")).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} ({})",
        format!("Report #{id}").bold(),
        report["kind"].as_str().unwrap_or("?"),
        status_label(report["status"].as_str().unwrap_or("?"))
    );
    println!(
        "   {} {}",
        "Category:".dimmed(),
        report["category"].as_str().unwrap_or("")
    );
    println!(
        "   {} {}",
        "Description:".dimmed(),
        report["description"].as_str().unwrap_or("")
    );
    println!(
        "   {} {}",
        "Location:".dimmed(),
        report["location"].as_str().unwrap_or("")
    );
    println!(
        "   {} {}",
        "Reporter:".dimmed(),
        report["reporter"].as_str().unwrap_or("")
    );
    println!(
        "   {} {}",
        "Confidence:".dimmed(),
        report["confidence"].as_u64().unwrap_or_default()
    );
    println!(
        "   {} {}",
        "Media:".dimmed(),
        report["media_ref"].as_str().unwrap_or("")
    );
    println!(
        "   {} {}",
        "Digest:".dimmed(),
        report["feature_digest"].as_str().unwrap_or("")
    );
    println!(
        "   {} {}",
        "Created:".dimmed(),
        report["created_at"].as_str().unwrap_or("")
    );

    if let Some(counterpart) = report["matched_with"].as_u64() {
        println!("   {} #{counterpart}", "Matched with:".dimmed());
    }
    Ok(())
}
