use crate::CoreError;
use clap::{Parser, Subcommand};
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SOURCE_SUFFIX: &str = ".java";

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    about = "Strip nullness annotations from Java sources (main arguments)"
)]
pub struct StripArgs {
    #[clap(
        long = "src_directory",
        value_name = "PATH",
        default_value = "./src",
        help = "The source directory to process"
    )]
    pub src_directory: PathBuf,

    #[clap(
        long = "remove_suppress_warnings",
        help = "Also remove @SuppressWarnings(...) annotations"
    )]
    pub remove_suppress_warnings: bool,
}

impl Default for StripArgs {
    fn default() -> Self {
        StripArgs {
            src_directory: PathBuf::from("./src"),
            remove_suppress_warnings: false,
        }
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    #[clap(about = "Generate shell completion scripts")]
    Completion(CompletionArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct CompletionArgs {
    #[clap(value_parser = clap::value_parser!(clap_complete::Shell))]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "nullstrip",
    version = "0.1.0",
    about = "Remove specific annotations from Java files",
    long_about = "Walks a source tree and strips @Nullable, @NonNull, @Nonnull, @Notnull, @NotNull and\n@MonotonicNonNull annotations in place, optionally @SuppressWarnings(...) as well.",
    propagate_version = true
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[clap(flatten)]
    pub main_opts: StripArgs,
}

/// Settings for one run, fixed once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub src_directory: PathBuf,
    pub remove_suppress_warnings: bool,
}

impl From<&StripArgs> for RunConfig {
    fn from(args: &StripArgs) -> Self {
        RunConfig {
            src_directory: args.src_directory.clone(),
            remove_suppress_warnings: args.remove_suppress_warnings,
        }
    }
}

pub fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.as_encoded_bytes().ends_with(SOURCE_SUFFIX.as_bytes()))
}

/// Every `.java` file under `root`, sorted. Hidden and ignored files are included,
/// as are symlinks to files; symlinked directories are not descended into.
pub fn find_files(root: &Path) -> Result<Vec<PathBuf>, CoreError> {
    if !root.exists() {
        return Err(CoreError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CoreError::NotADirectory(root.to_path_buf()));
    }

    let mut w = WalkBuilder::new(root);
    w.standard_filters(false);
    w.follow_links(false);

    let mut files = Vec::new();
    for entry in w.build() {
        let entry = entry.map_err(|e| CoreError::Walk(e.to_string()))?;
        if is_target_entry(&entry) {
            files.push(entry.into_path());
        } else {
            debug!(path = %entry.path().display(), "skipping");
        }
    }
    files.sort();
    Ok(files)
}

fn is_target_entry(e: &DirEntry) -> bool {
    let is_file = match e.file_type() {
        Some(ft) if ft.is_symlink() => e.path().is_file(),
        Some(ft) => ft.is_file(),
        None => false,
    };
    is_file && is_source_file(e.path())
}
