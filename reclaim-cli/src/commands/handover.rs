//! Handover confirmation command.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use crate::client::ApiClient;
use crate::commands::status_label;

/// Execute the handover command.
pub async fn execute(client: &ApiClient, lost: u64, found: u64, json_output: bool) -> Result<()> {
    let body = json!({ "lost_id": lost, "found_id": found });
    let response = client.post("/api/v1/handovers", &body, true).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "{} item returned: lost {} is {}, found {} is {}",
        "✓".green().bold(),
        format!("#{lost}").cyan(),
        status_label(response["lost_status"].as_str().unwrap_or("claimed")),
        format!("#{found}").cyan(),
        status_label(response["found_status"].as_str().unwrap_or("closed")),
    );
    Ok(())
}
