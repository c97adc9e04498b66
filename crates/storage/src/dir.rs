use std::{fs, io, path::PathBuf};

use directories::BaseDirs;

/// Resolves the directory outputs are written to, creating it if needed.
///
/// Uses `data_dir` when given, otherwise `<system data dir>/<app_name>`.
pub fn setup_data_dir(app_name: &str, data_dir: Option<PathBuf>) -> io::Result<PathBuf> {
    let data_dir = match data_dir {
        Some(data_dir) => data_dir,
        None => BaseDirs::new()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Base directories not found"))?
            .data_dir()
            .join(app_name),
    };

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)?;
    }
    Ok(data_dir)
}
