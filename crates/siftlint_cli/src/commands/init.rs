//! Init command implementation

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use tracing::info;

use siftlint_core::LinterConfig;

const DEFAULT_CONFIG: &str = r#"{
  "include": [],
  "exclude": [],
  "output_dir": "build",
  "cache": true
}
"#;

pub fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(LinterConfig::CONFIG_FILES[0]);

    loop {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create_new(true);

        match options.open(&config_path) {
            Ok(mut file) => {
                use std::io::Write;
                file.write_all(DEFAULT_CONFIG.as_bytes()).into_diagnostic()?;
                info!("Created {}", config_path.display());
                return Ok(());
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                if !force {
                    return Err(miette::miette!(
                        "Config file already exists. Use --force to overwrite."
                    ));
                }

                // Remove the existing file (or symlink) and retry; racing
                // removals just loop again
                if std::fs::symlink_metadata(&config_path).is_ok() {
                    std::fs::remove_file(&config_path).into_diagnostic()?;
                }
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }
}
