//! Report submission command.

use anyhow::{ensure, Context, Result};
use colored::Colorize;
use reclaim_core::{FeatureDigest, CONFIDENCE_SCALE};
use serde_json::json;
use tracing::info;

use crate::client::ApiClient;

/// Execute the report command.
#[allow(clippy::too_many_arguments)]
pub async fn execute(
    client: &ApiClient,
    kind: String,
    category: String,
    description: String,
    media_ref: String,
    digest: String,
    confidence: u16,
    location: String,
    json_output: bool,
) -> Result<()> {
    // Validate locally before the round trip; the server enforces the same
    // rules again.
    digest
        .parse::<FeatureDigest>()
        .context("Invalid feature digest")?;
    ensure!(
        confidence <= CONFIDENCE_SCALE,
        "confidence {confidence} exceeds the {CONFIDENCE_SCALE} fixed-point scale"
    );

    let body = json!({
        "kind": kind,
        "category": category,
        "description": description,
        "media_ref": media_ref,
        "feature_digest": digest,
        "confidence": confidence,
        "location": location,
    });

    let response = client.post("/api/v1/reports", &body, true).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let id = response["id"].as_u64().unwrap_or_default();
    info!(id, kind = %kind, "Report submitted");

    println!(
        "{} {} report {} submitted ({})",
        "✓".green().bold(),
        kind,
        format!("#{id}").cyan(),
        category
    );
    println!(
        "  {} run {} to look for counterparts",
        "→".dimmed(),
        format!("reclaim scan {id}").bold()
    );
    Ok(())
}
