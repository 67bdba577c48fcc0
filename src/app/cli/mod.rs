//! CLI Adapter.

mod expose;
mod host;
mod install;

use clap::{Parser, Subcommand};

use crate::app::{api, observability};
use crate::domain::{AppError, ProvisionOutcome, TaskResult};
use crate::ports::PipelineHost;

pub use host::HostKind;

#[derive(Parser)]
#[command(name = "habitat-tasks")]
#[command(version)]
#[command(about = "Habitat build pipeline steps", long_about = None)]
struct Cli {
    /// Pipeline host receiving variables and results (default: detected)
    #[arg(long, global = true, env = "HABITAT_TASKS_HOST", value_enum)]
    host: Option<HostKind>,
    /// Enable debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish last_build.env package metadata as pipeline variables
    #[clap(visible_alias = "ebv")]
    ExposeBuildVars(expose::ExposeArgs),
    /// Install the hab CLI if it is not already present
    #[clap(visible_alias = "i")]
    Install(install::InstallArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    observability::init_tracing(cli.verbose);

    let host_kind = cli.host.unwrap_or_else(HostKind::detect);
    tracing::debug!(?host_kind, "selected pipeline host");
    let host = host_kind.build();

    let result: Result<(), AppError> = match cli.command {
        Commands::ExposeBuildVars(args) => {
            api::expose_build_vars(args.into(), host.as_ref()).map(|report| {
                tracing::debug!(published = report.published.len(), "build variables exposed");
            })
        }
        Commands::Install(args) => {
            let (inputs, downloader) = args.into_parts();
            api::install(inputs, downloader, host.as_ref()).map(|outcome| match outcome {
                ProvisionOutcome::AlreadyInstalled { habitat } => {
                    tracing::debug!(habitat = %habitat.display(), "install skipped");
                }
                ProvisionOutcome::Installed { unpack_path } => {
                    tracing::debug!(unpack_path = %unpack_path.display(), "install complete");
                }
            })
        }
    };

    report(host.as_ref(), &result);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Report the task status to the host exactly once.
fn report(host: &dyn PipelineHost, result: &Result<(), AppError>) {
    let reported = match result {
        Ok(()) => host.set_result(TaskResult::Succeeded, ""),
        Err(e) => host.set_result(TaskResult::Failed, &e.to_string()),
    };
    if let Err(e) = reported {
        eprintln!("Error: failed to report task result: {}", e);
    }
}
