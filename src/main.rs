//! podup - CocoaPods dependency update checker CLI
//!
//! Reads Podfile and Podfile.lock, queries the trunk registry and git
//! remotes, and reports which pods an update would change. Never modifies
//! the project or the lockfile.

use clap::Parser;
use podup::cli::CliArgs;
use podup::error::AppError;
use podup::output::{create_formatter, OutputConfig};
use podup::progress::Progress;
use podup::report::{only_outdated, ReportBuilder};
use podup::resolver::{Resolver, SystemRunner};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("podup v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Project: {}", args.path.display());
    }

    let podfile = read_project_file(&args.podfile_path(), FileKind::Podfile)?;
    let lockfile = read_project_file(&args.lockfile_path(), FileKind::Lockfile)?;

    let manifest = podup::parser::parse_podfile(&podfile);
    let lock = podup::parser::parse_lockfile(&lockfile);

    let runner = SystemRunner::with_timeout(Duration::from_secs(args.timeout));
    let resolver = Arc::new(Resolver::new(Arc::new(runner)).with_verbose(args.verbose));
    let builder = ReportBuilder::new(resolver, args.prerelease);

    // the bar draws on stderr; keep it off in JSON mode anyway
    let mut progress = Progress::new(!args.json);
    let mut rows = builder.build(&manifest, &lock, &mut progress).await;

    if args.outdated {
        rows = only_outdated(rows);
    }

    let formatter = create_formatter(OutputConfig::from_cli(args.json, args.no_emoji));
    let mut stdout = io::stdout().lock();
    formatter.format(&rows, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}

enum FileKind {
    Podfile,
    Lockfile,
}

/// Reads a required project file, mapping absence to a descriptive error
fn read_project_file(path: &Path, kind: FileKind) -> Result<String, AppError> {
    if !path.exists() {
        return Err(match kind {
            FileKind::Podfile => AppError::PodfileNotFound {
                path: path.to_path_buf(),
            },
            FileKind::Lockfile => AppError::LockfileNotFound {
                path: path.to_path_buf(),
            },
        });
    }

    std::fs::read_to_string(path).map_err(|source| AppError::ReadError {
        path: path.to_path_buf(),
        source,
    })
}
