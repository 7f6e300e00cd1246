use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zipsweep")]
#[command(version)]
#[command(about = "Extract every ZIP archive in a directory and remove the originals", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipsweep                 sweep all .zip files in the current directory\n  \
  zipsweep -C ~/Downloads  sweep a different directory\n  \
  zipsweep -k              extract but keep the archives")]
pub struct Cli {
    /// Sweep DIR instead of the current directory
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Keep archives after extraction (do not delete)
    #[arg(short = 'k', long = "keep")]
    pub keep: bool,

    /// Quiet mode: suppress status lines (errors still print)
    #[arg(short = 'q')]
    pub quiet: bool,
}

impl Cli {
    /// Directory the sweep operates on.
    pub fn target_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}
