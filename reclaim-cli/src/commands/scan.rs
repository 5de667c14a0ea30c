//! Match scan command.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use crate::client::ApiClient;

/// Execute the scan command.
///
/// The scan itself returns nothing; matches surface on the event stream,
/// so the command follows up with an events read and prints any
/// `potential_match` entries involving the scanned report.
pub async fn execute(client: &ApiClient, id: u64, json_output: bool) -> Result<()> {
    client
        .post(&format!("/api/v1/reports/{id}/scan"), &json!({}), false)
        .await?;

    let events = client.get("/api/v1/events?limit=1000").await?;

    let matches: Vec<_> = events["events"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .filter(|event| {
            event["type"] == "potential_match"
                && (event["lost_id"].as_u64() == Some(id) || event["found_id"].as_u64() == Some(id))
        })
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("{} no potential matches for report #{id}", "·".dimmed());
        return Ok(());
    }

    println!(
        "{} {} potential match(es) for report #{id}",
        "✓".green().bold(),
        matches.len()
    );
    for entry in &matches {
        println!(
            "   lost {} ↔ found {} {}",
            format!("#{}", entry["lost_id"].as_u64().unwrap_or_default()).cyan(),
            format!("#{}", entry["found_id"].as_u64().unwrap_or_default()).cyan(),
            format!("(score {})", entry["score"].as_u64().unwrap_or_default()).dimmed()
        );
    }
    Ok(())
}
