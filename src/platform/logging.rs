//! Log setup
//!
//! The UI owns stdout and stderr while it runs, so records are appended to a
//! file instead.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

fn builder(file: File) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.target(Target::Pipe(Box::new(file)));
    builder
}

/// Install the global logger, appending to `path`.
///
/// On error nothing is installed and logging stays off.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    builder(file).try_init().map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Record};

    #[test]
    fn test_records_go_to_file() {
        let path = std::env::temp_dir().join(format!(
            "trade_of_life_log_{}.log",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();

        let logger = builder(file).build();
        logger.log(
            &Record::builder()
                .args(format_args!("store write failed"))
                .level(Level::Error)
                .target("trade_of_life")
                .build(),
        );
        logger.flush();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("store write failed"));
        let _ = std::fs::remove_file(&path);
    }
}
