use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;

use release_lines::cli::Cli;
use release_lines::config::Config;
use release_lines::parser::spec_file::read_spec_file;
use release_lines::runner::Runner;
use release_lines::version::registries::GitHubReleases;

fn main() -> anyhow::Result<()> {
    let config = Config::from(Cli::parse());
    let _guard = release_lines::logging::init(config.log_format);

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(config))
}

async fn run(config: Config) -> anyhow::Result<()> {
    let content = read_spec_file(&config.input)?;
    let fetcher = GitHubReleases::from_config(&config.fetch)?;
    let runner = Runner::new(Arc::new(fetcher), config.failure_policy);

    let mut stdout = std::io::stdout().lock();
    let summary = runner
        .run(&content, &mut stdout)
        .await
        .with_context(|| format!("processing {}", config.input.display()))?;

    if !summary.is_success() {
        for failure in &summary.failures {
            eprintln!("{}", failure);
        }
        bail!(
            "{} of {} repositories failed",
            summary.failures.len(),
            summary.failures.len() + summary.succeeded
        );
    }

    Ok(())
}
