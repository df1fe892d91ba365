use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Send log output to `path`; the terminal belongs to the UI.
///
/// `RUST_LOG` sets the filter, defaulting to `info`.
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();
    Ok(())
}
