// CLI module for argument parsing and configuration

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// pswp - sort a folder of photos from the terminal
///
/// Swipe through the images in a directory: keep what you love, delete what
/// you don't. Nothing is erased; images are moved into kept/ and deleted/.
#[derive(Parser, Debug, Clone)]
#[command(name = "pswp")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the images to sort
    ///
    /// If not specified, defaults to the current directory.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Show the welcome screen even if it has been seen before
    #[arg(long = "welcome", action = ArgAction::SetTrue)]
    pub show_welcome: bool,

    /// Directory for the log file (defaults to the user cache directory)
    #[arg(long = "log-dir")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the arguments and return any errors
    pub fn validate(&self) -> Result<(), String> {
        if !self.directory.exists() {
            return Err(format!(
                "Directory does not exist: {}",
                self.directory.display()
            ));
        }

        if !self.directory.is_dir() {
            return Err(format!(
                "Path is not a directory: {}",
                self.directory.display()
            ));
        }

        if let Some(ref log_dir) = self.log_dir {
            if log_dir.exists() && !log_dir.is_dir() {
                return Err(format!(
                    "Log directory is not a directory: {}",
                    log_dir.display()
                ));
            }
        }

        Ok(())
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub directory: PathBuf,
    pub show_welcome: bool,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Log directory used when none is given on the command line
    pub fn default_log_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("pswp")
    }
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        AppConfig {
            directory: args.directory,
            show_welcome: args.show_welcome,
            log_dir: args.log_dir.unwrap_or_else(Self::default_log_dir),
        }
    }
}
