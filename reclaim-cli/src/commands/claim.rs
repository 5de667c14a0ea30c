//! Claim initiation command.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use crate::client::ApiClient;
use crate::commands::status_label;

/// Execute the claim command.
pub async fn execute(client: &ApiClient, lost: u64, found: u64, json_output: bool) -> Result<()> {
    let body = json!({ "lost_id": lost, "found_id": found });
    let response = client.post("/api/v1/claims", &body, true).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "{} claim initiated: lost {} ↔ found {}",
        "✓".green().bold(),
        format!("#{lost}").cyan(),
        format!("#{found}").cyan()
    );
    println!(
        "   both reports are now {}",
        status_label(response["lost_status"].as_str().unwrap_or("matched"))
    );
    println!(
        "   {} confirm with {} once the item changes hands",
        "→".dimmed(),
        format!("reclaim handover --lost {lost} --found {found}").bold()
    );
    Ok(())
}
