use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use version_gate::cli::{self, CheckArgs, TagArgs};
use version_gate::config;
use version_gate::git::Git2Fetcher;
use version_gate::ui;
use version_gate::VersionGateError;

#[derive(clap::Parser)]
#[command(
    name = "version-gate",
    version,
    about = "Check that a project version was bumped by exactly one step"
)]
struct Args {
    #[arg(long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare the working-copy version with the version on a branch
    Check {
        #[arg(long, help = "Branch to compare the version with [default: main]")]
        branch: Option<String>,

        #[arg(long, help = "Remote holding the branch [default: origin]")]
        remote: Option<String>,

        #[arg(
            long,
            help = "File to read the version from (.toml, .json, .yml) [default: pyproject.toml]"
        )]
        file: Option<String>,

        #[arg(
            long,
            help = "Path inside the file to extract the version [default: project/version]"
        )]
        path: Option<String>,

        #[arg(long, help = "Fetch the branch from the remote before comparing")]
        fetch: bool,

        #[arg(long, value_name = "KEY", help = "Export the current version as KEY")]
        export: Option<String>,

        #[arg(long, help = "File to append exports to [default: $GITHUB_ENV]")]
        env_file: Option<PathBuf>,
    },

    /// Export the working-copy version for later CI steps
    Tag {
        #[arg(
            long,
            help = "File to extract the version from (.toml, .json, .yml) [default: pyproject.toml]"
        )]
        file: Option<String>,

        #[arg(
            long,
            help = "Path inside the file to extract the version [default: project/version]"
        )]
        path: Option<String>,

        #[arg(long, help = "Name of the exported variable [default: VERSION]")]
        env_key: Option<String>,

        #[arg(long, help = "File to append exports to [default: $GITHUB_ENV]")]
        env_file: Option<PathBuf>,
    },
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let args = Args::parse();
    init_tracing();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        if let Some(VersionGateError::Policy(policy)) = e.downcast_ref::<VersionGateError>() {
            ui::display_policy_hint(policy);
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config =
        config::load_config(args.config.as_deref()).context("Failed to load configuration")?;
    debug!(?config, "resolved configuration");

    match args.command {
        Command::Check {
            branch,
            remote,
            file,
            path,
            fetch,
            export,
            env_file,
        } => {
            let check_args = CheckArgs {
                branch: branch.unwrap_or(config.branch),
                remote: remote.unwrap_or(config.remote),
                file: PathBuf::from(file.unwrap_or(config.file)),
                path: path.unwrap_or(config.path),
                fetch,
                export,
                env_file,
            };
            run_check(&check_args)
        }
        Command::Tag {
            file,
            path,
            env_key,
            env_file,
        } => {
            let tag_args = TagArgs {
                file: PathBuf::from(file.unwrap_or(config.file)),
                path: path.unwrap_or(config.path),
                env_key: env_key.unwrap_or(config.env_key),
                env_file,
            };
            run_tag(&tag_args)
        }
    }
}

fn run_check(args: &CheckArgs) -> Result<()> {
    let fetcher = Git2Fetcher::discover(".").context("Failed to open the git repository")?;

    if args.fetch {
        ui::display_status(&format!(
            "Fetching '{}' from remote '{}'...",
            args.branch, args.remote
        ));
    }

    let report = cli::run_check(args, &fetcher)?;

    for warning in &report.warnings {
        ui::display_boundary_warning(warning);
    }

    let current = report.current.to_string();
    let baseline = report.baseline.to_string();
    ui::display_versions(&current, &baseline, &args.branch);
    ui::display_increment(report.increment, &baseline, &current);

    if let Some(key) = &args.export {
        ui::display_export(
            key,
            &report.current_raw,
            &export_target(args.env_file.as_ref()),
        );
    }

    ui::display_success("Version is correctly updated.");
    Ok(())
}

fn run_tag(args: &TagArgs) -> Result<()> {
    let report = cli::run_tag(args)
        .with_context(|| format!("Failed to export {}", args.env_key))?;
    ui::display_export(
        &report.key,
        &report.version,
        &report.target.display().to_string(),
    );
    Ok(())
}

fn export_target(env_file: Option<&PathBuf>) -> String {
    match env_file {
        Some(path) => path.display().to_string(),
        None => "$GITHUB_ENV".to_string(),
    }
}
