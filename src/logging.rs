use std::fs::OpenOptions;
use std::io::Write;

use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::error::Result;

/// Installs the global logger.
///
/// `RUST_LOG` takes precedence over the default level (`debug` with `debug = true`,
/// `info` otherwise). With `log_file` set, records are appended to that file instead
/// of stderr.
pub fn init(debug: bool, log_file: Option<&str>) -> Result<()> {
    let mut builder = builder(debug);

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}

fn builder(debug: bool) -> Builder {
    let level = default_level(debug);
    let mut builder = Builder::from_env(Env::default().default_filter_or(level.as_str()));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        )
    });
    builder
}

fn default_level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
