//! Check and tag workflows
//!
//! Both workflows are plain functions over resolved arguments so they can be
//! driven from tests without clap or a terminal. Printing is left to the caller;
//! progress is reported through `tracing`.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::boundary::BoundaryWarning;
use crate::document::{self, VersionPath};
use crate::domain::{policy, Increment, SemanticVersion};
use crate::env_export::EnvExporter;
use crate::error::Result;
use crate::git::{remote_reference, ReferenceFetcher};

/// Arguments for the check workflow
#[derive(Debug, Clone, PartialEq)]
pub struct CheckArgs {
    /// Branch holding the baseline version
    pub branch: String,

    /// Remote whose tracking branch is read
    pub remote: String,

    /// Project file containing the version
    pub file: PathBuf,

    /// Slash-delimited key path to the version
    pub path: String,

    /// Update the remote-tracking branch before reading it
    pub fetch: bool,

    /// Export the current version under this name after a successful check
    pub export: Option<String>,

    /// Export target; `$GITHUB_ENV` when unset
    pub env_file: Option<PathBuf>,
}

/// Result of a successful check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Version text as found in the working copy
    pub current_raw: String,
    pub current: SemanticVersion,
    pub baseline: SemanticVersion,
    pub increment: Increment,
    pub warnings: Vec<BoundaryWarning>,
}

/// Arguments for the tag workflow
#[derive(Debug, Clone, PartialEq)]
pub struct TagArgs {
    /// Project file containing the version
    pub file: PathBuf,

    /// Slash-delimited key path to the version
    pub path: String,

    /// Name of the exported variable
    pub env_key: String,

    /// Export target; `$GITHUB_ENV` when unset
    pub env_file: Option<PathBuf>,
}

/// Result of a successful tag run
#[derive(Debug, Clone, PartialEq)]
pub struct TagReport {
    pub version: String,
    pub key: String,
    pub target: PathBuf,
}

fn exporter_for(env_file: Option<&Path>) -> Result<EnvExporter> {
    match env_file {
        Some(path) => Ok(EnvExporter::to_file(path)),
        None => EnvExporter::from_env(),
    }
}

/// Reads the version at `path` from the working copy, without surrounding whitespace.
fn read_local_version(file: &Path, path: &VersionPath) -> Result<String> {
    info!(file = %file.display(), "reading version from working copy");
    let document = document::load_local(file)?;
    Ok(path.locate(&document)?.trim().to_string())
}

fn metadata_warning(version: &SemanticVersion) -> Option<BoundaryWarning> {
    version
        .metadata
        .as_ref()
        .map(|metadata| BoundaryWarning::MetadataIgnored {
            version: version.to_string(),
            metadata: metadata.clone(),
        })
}

/// Compares the working-copy version against the baseline branch
///
/// 1. Read the current version from the local file
/// 2. Optionally fetch `<remote>/<branch>`
/// 3. Read the baseline version from the same file at `<remote>/<branch>`
/// 4. Require a strict increase of exactly one step
/// 5. Optionally export the current version
///
/// # Returns
///
/// The parsed versions and the accepted increment, or the first error met.
pub fn run_check<F: ReferenceFetcher>(args: &CheckArgs, fetcher: &F) -> Result<CheckReport> {
    let version_path = VersionPath::parse(&args.path)?;
    let mut warnings = Vec::new();

    let current_raw = read_local_version(&args.file, &version_path)?;

    if args.fetch {
        if let Err(e) = fetcher.fetch_remote(&args.remote, &args.branch) {
            let warning = BoundaryWarning::FetchFailed {
                remote: args.remote.clone(),
                branch: args.branch.clone(),
                reason: e.to_string(),
            };
            warn!("{}", warning);
            warnings.push(warning);
        }
    }

    let reference = remote_reference(&args.remote, &args.branch);
    info!(file = %args.file.display(), %reference, "fetching baseline file");
    let content = fetcher.read_file_at(&reference, &args.file)?;
    let baseline_raw = version_path.locate(&document::parse_document(&args.file, &content)?)?;

    info!(version = %current_raw, "current branch version");
    info!(version = %baseline_raw, branch = %args.branch, "baseline branch version");

    let current = SemanticVersion::parse(&current_raw)?;
    let baseline = SemanticVersion::parse(&baseline_raw)?;
    warnings.extend(metadata_warning(&current));
    warnings.extend(metadata_warning(&baseline));

    let increment = policy::evaluate(&current, &baseline, &args.branch)?;
    info!(%increment, "version is correctly updated");

    if let Some(key) = &args.export {
        exporter_for(args.env_file.as_deref())?.export(key, &current_raw)?;
    }

    Ok(CheckReport {
        current_raw,
        current,
        baseline,
        increment,
        warnings,
    })
}

/// Reads the working-copy version and exports it for later CI steps
///
/// The value is exported as found in the file (trimmed); it is not required to
/// parse as a version.
pub fn run_tag(args: &TagArgs) -> Result<TagReport> {
    let version_path = VersionPath::parse(&args.path)?;
    let version = read_local_version(&args.file, &version_path)?;

    info!(
        file = %args.file.display(),
        path = %version_path,
        %version,
        "extracted version"
    );

    let exporter = exporter_for(args.env_file.as_deref())?;
    exporter.export(&args.env_key, &version)?;

    Ok(TagReport {
        version,
        key: args.env_key.clone(),
        target: exporter.target().to_path_buf(),
    })
}
