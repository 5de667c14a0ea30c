//! Event stream polling command.

use anyhow::Result;
use colored::Colorize;

use crate::client::ApiClient;

/// Execute the events command.
pub async fn execute(
    client: &ApiClient,
    after: u64,
    limit: usize,
    json_output: bool,
) -> Result<()> {
    let response = client
        .get(&format!("/api/v1/events?after={after}&limit={limit}"))
        .await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let events = response["events"].as_array().cloned().unwrap_or_default();
    if events.is_empty() {
        println!("{}", "no events".dimmed());
        return Ok(());
    }

    for event in &events {
        let seq = event["seq"].as_u64().unwrap_or_default();
        let detail = match event["type"].as_str().unwrap_or("?") {
            "report_created" => format!(
                "{} report #{} by {}",
                "report_created".blue(),
                event["id"].as_u64().unwrap_or_default(),
                event["reporter"].as_str().unwrap_or("?")
            ),
            "potential_match" => format!(
                "{} lost #{} ↔ found #{} (score {})",
                "potential_match".yellow(),
                event["lost_id"].as_u64().unwrap_or_default(),
                event["found_id"].as_u64().unwrap_or_default(),
                event["score"].as_u64().unwrap_or_default()
            ),
            "claim_initiated" => format!(
                "{} lost #{} ↔ found #{} by {}",
                "claim_initiated".cyan(),
                event["lost_id"].as_u64().unwrap_or_default(),
                event["found_id"].as_u64().unwrap_or_default(),
                event["claimant"].as_str().unwrap_or("?")
            ),
            "item_returned" => format!(
                "{} lost #{} ↔ found #{}",
                "item_returned".green(),
                event["lost_id"].as_u64().unwrap_or_default(),
                event["found_id"].as_u64().unwrap_or_default()
            ),
            other => other.to_owned(),
        };
        println!("{:>5}  {detail}", format!("{seq}").dimmed());
    }

    println!(
        "{}",
        format!(
            "next cursor: {}",
            response["next_after"].as_u64().unwrap_or(after)
        )
        .dimmed()
    );
    Ok(())
}
