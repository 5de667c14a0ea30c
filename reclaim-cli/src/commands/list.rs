//! Report listing command.

use anyhow::Result;
use colored::Colorize;

use crate::client::ApiClient;
use crate::commands::report_line;

/// Execute the list command.
pub async fn execute(
    client: &ApiClient,
    kind: Option<String>,
    status: Option<String>,
    page: u64,
    limit: u64,
    json_output: bool,
) -> Result<()> {
    let mut query = vec![format!("page={page}"), format!("limit={limit}")];
    if let Some(kind) = kind {
        query.push(format!("kind={kind}"));
    }
    if let Some(status) = status {
        query.push(format!("status={status}"));
    }

    let response = client
        .get(&format!("/api/v1/reports?{}", query.join("&")))
        .await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let reports = response["reports"].as_array().cloned().unwrap_or_default();
    let total = response["total"].as_u64().unwrap_or_default();

    if reports.is_empty() {
        println!("{}", "no reports".dimmed());
        return Ok(());
    }

    for report in &reports {
        println!("{}", report_line(report));
    }
    println!(
        "{}",
        format!("page {page} · showing {} of {total}", reports.len()).dimmed()
    );
    Ok(())
}
