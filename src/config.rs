//! Command line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::auth::AdminAuth;
use crate::data::{DEFAULT_QUESTIONS_PATH, QuestionStore};

pub const DEFAULT_LOG_FILE: &str = "lernquest.log";

#[derive(Parser, Debug)]
#[command(version, about = "Terminal quiz with an admin area for the question bank", long_about = None)]
pub struct Args {
    /// JSON file holding the question catalog
    #[arg(short, long, env = "LERNQUEST_QUESTIONS", default_value = DEFAULT_QUESTIONS_PATH)]
    pub questions: PathBuf,

    /// Password for the admin area (falls back to an insecure default)
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: Option<String>,

    /// File the interactive quiz writes its log to
    #[arg(long, env = "LERNQUEST_LOG", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the score and category breakdown of an exported answer list
    Report {
        /// Query string containing `answers=...`
        query: String,
    },
    /// Print the question catalog
    List,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub questions_path: PathBuf,
    pub admin_password: Option<String>,
    pub log_file: PathBuf,
    pub command: Option<Command>,
}

impl Config {
    pub fn store(&self) -> QuestionStore {
        QuestionStore::open(&self.questions_path)
    }

    pub fn auth(&self) -> AdminAuth {
        AdminAuth::new(self.admin_password.clone())
    }

    /// True when the terminal UI runs, i.e. no subcommand was given.
    pub fn is_interactive(&self) -> bool {
        self.command.is_none()
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            questions_path: args.questions,
            admin_password: args.admin_password,
            log_file: args.log_file,
            command: args.command,
        }
    }
}
