//! `linkprobe check <url>...` – probe URLs and report broken ones.

use anyhow::{Context, Result};
use linkprobe_core::config::ProberConfig;
use linkprobe_core::{ErrorDetail, LinkChecker, ReferenceContext};

/// Outcome for one URL as printed by the CLI.
struct Report {
    url: String,
    valid: bool,
    detail: Option<ErrorDetail>,
}

fn print_text(report: &Report) {
    match &report.detail {
        None => println!("OK      {}", report.url),
        Some(detail) => println!(
            "BROKEN  {}  [{}] {}",
            report.url, detail.kind, detail.rendered_message
        ),
    }
}

fn print_json(report: &Report) -> Result<()> {
    let value = serde_json::json!({
        "url": report.url,
        "valid": report.valid,
        "error": report.detail,
    });
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}

/// Runs every URL through one checker (one run, one cache). Returns `true`
/// when all links are valid.
pub async fn run_check(
    cfg: &ProberConfig,
    urls: Vec<String>,
    json: bool,
    source: Option<String>,
) -> Result<bool> {
    let cfg = cfg.clone();
    let reports = tokio::task::spawn_blocking(move || -> Result<Vec<Report>> {
        let mut checker = LinkChecker::from_config(&cfg)?;
        let context = ReferenceContext {
            source: source.or_else(|| Some("cli".to_string())),
            field: None,
        };
        let reports = urls
            .into_iter()
            .map(|url| {
                let valid = checker.check_link(&url, &context);
                let detail = checker.last_error(&url).cloned();
                Report { url, valid, detail }
            })
            .collect();
        tracing::info!(
            checked = checker.cache().len(),
            broken = checker.cache().broken_count(),
            "link check finished"
        );
        Ok(reports)
    })
    .await
    .context("check task join")??;

    for report in &reports {
        if json {
            print_json(report)?;
        } else {
            print_text(report);
        }
    }
    Ok(reports.iter().all(|r| r.valid))
}
