use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};

use crate::delay::DEFAULT_WAIT;

#[derive(Clone, Debug, Subcommand)]
pub enum Action {
    /// Block for a fixed interval.
    Wait {
        /// Interval in milliseconds (defaults to 2000).
        #[arg(short = 'm', long = "millis")]
        millis: Option<u64>,
    },
    /// Log the parent and current PIDs.
    DebugPid,
    /// Log the PIDs, then wait.
    All {
        /// Interval in milliseconds (defaults to 2000).
        #[arg(short = 'm', long = "millis")]
        millis: Option<u64>,
    },
}

#[derive(Clone, Debug, Parser)]
#[command(version, about = "pidwait: pause and report process identity")]
pub struct Options {
    #[command(subcommand)]
    pub action: Action,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Options {
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.log_file
            && path.is_dir()
        {
            return Err(anyhow!("log file {:?} is a directory", path));
        }
        Ok(())
    }

    pub fn wait_interval(&self) -> Duration {
        match self.action {
            Action::Wait { millis: Some(ms) } | Action::All { millis: Some(ms) } => {
                Duration::from_millis(ms)
            }
            _ => DEFAULT_WAIT,
        }
    }
}
