// logging.rs - env_logger setup writing to a file
//
// The terminal is in raw mode on the alternate screen while the editor
// runs, so records never go to stderr.

use crate::config::VimiConfig;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Builds the logger from config and `RUST_LOG` (which wins). Without a
/// writable log file no logger is installed and records are dropped.
pub fn init(config: &VimiConfig) -> Option<PathBuf> {
    let path = config.log_path()?;
    let file = open_log_file(&path)?;

    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Warn);
    if let Some(level) = &config.log_level {
        builder.parse_filters(level);
    }
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.target(Target::Pipe(Box::new(file)));

    // A logger installed earlier (tests) is left in place
    let _ = builder.try_init();
    Some(path)
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
