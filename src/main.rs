mod cli;

use mkvretag::batch::{BatchPlan, BatchRunner};
use mkvretag::scan;
use mkvretag_av::{Mkvpropedit, ToolRegistry, MKVPROPEDIT};
use mkvretag_core::Container;

use anyhow::{Context, Result};
use cli::{Cli, USAGE_EXIT_CODE};
use std::sync::Arc;

async fn run(cli: Cli) -> Result<()> {
    let job = match cli.job_input() {
        Ok(job) => job,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(USAGE_EXIT_CODE);
        }
    };

    let container = Container::Mkv;
    let files = match scan::scan_directory(&job.directory, container).await {
        Ok(files) => files,
        Err(e) => {
            tracing::error!("{e}");
            return Ok(());
        }
    };

    if files.is_empty() {
        tracing::info!("No .{} files found.", container.extension());
        return Ok(());
    }

    let tools_config = cli.tools_config();
    let registry = ToolRegistry::discover(&tools_config);
    if let Some(version) = registry.version(MKVPROPEDIT).await {
        tracing::debug!("Using {version}");
    }
    let editor = Mkvpropedit::from_registry(
        &registry,
        tools_config.mkvpropedit_path.as_deref(),
        tools_config.timeout(),
    );

    let plan = BatchPlan::new(&job, files);
    let report = BatchRunner::new(Arc::new(editor))
        .dry_run(cli.dry_run)
        .run(plan)
        .await;

    report.log_summary();

    if cli.json {
        let json_str =
            serde_json::to_string_pretty(&report).context("Failed to serialize batch report")?;
        println!("{}", json_str);
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse_or_exit();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag.
    // Logs go to stderr so `--json` output stays machine readable.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mkvretag=debug,mkvretag_av=debug,mkvretag_core=debug".to_string()
        } else {
            "mkvretag=info,mkvretag_av=info,mkvretag_core=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // All file tasks run on this single thread.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    rt.block_on(run(cli))
}
