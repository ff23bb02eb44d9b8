//! Logger setup.
//!
//! The interactive quiz owns the terminal, so its log goes to a file. The
//! one-shot commands log to stderr. `RUST_LOG` overrides the default `info`
//! level in both cases.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};

pub fn init_to_file(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    builder().target(Target::Pipe(Box::new(file))).init();
    Ok(())
}

pub fn init_to_stderr() {
    builder().target(Target::Stderr).init();
}

fn builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or("info"))
}
