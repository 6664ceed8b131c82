mod catalog;
mod config;
mod error;
mod links;
mod page;
mod report;
mod suites;
mod verify;
mod webdriver;

use clap::Parser;
use tracing::{error, info, warn};

use config::{CliArgs, RunConfig, SuiteName, TenantConfig};
use links::HttpStatusFetcher;
use webdriver::WebDriverPage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitecheck=info".into()),
        )
        .init();

    let args = CliArgs::parse();
    let tenant = TenantConfig::from_env(args.tenant.as_deref());

    info!("Starting sitecheck v{}", env!("CARGO_PKG_VERSION"));
    info!("Tenant: {}", tenant.tenant_id);
    if tenant.base_url.is_empty() {
        warn!("Base URL is empty; navigation will fail fast");
    } else {
        info!("Base URL: {}", tenant.base_url);
    }
    info!("WebDriver endpoint: {}", args.webdriver);

    let cfg = RunConfig::new(tenant);
    let selected: Vec<SuiteName> = if args.suites.is_empty() {
        SuiteName::all().to_vec()
    } else {
        args.suites.clone()
    };

    let driver = WebDriverPage::connect(&args.webdriver).await?;
    let fetcher = HttpStatusFetcher::new()?;

    let mut reports = Vec::new();
    for suite in &selected {
        info!("Running suite: {}", suite.as_str());
        let suite_report = match suite {
            SuiteName::Schedule => suites::schedule::run(&driver, &cfg).await,
            SuiteName::Roster => suites::roster::run(&driver, &fetcher, &cfg).await,
            SuiteName::Links => suites::links::run(&driver, &fetcher, &cfg).await,
            SuiteName::Images => suites::images::run(&driver, &fetcher, &cfg).await,
        };

        if suite_report.passed {
            info!("Suite {} passed", suite_report.suite);
        } else {
            error!(
                "Suite {} failed ({} annotations)",
                suite_report.suite,
                suite_report.annotations.len()
            );
        }
        reports.push(suite_report);
    }

    if let Err(e) = driver.close().await {
        warn!("Failed to close WebDriver session: {}", e);
    }

    if let Some(path) = &args.report_file {
        report::save_report(path, &reports);
        info!("Report written to {:?}", path);
    }

    let failed = reports.iter().filter(|r| !r.passed).count();
    if failed > 0 {
        error!("{} of {} suites failed", failed, reports.len());
        std::process::exit(1);
    }

    info!("All {} suites passed", reports.len());
    Ok(())
}
