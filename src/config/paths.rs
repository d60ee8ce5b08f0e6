// src/config/paths.rs
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::{DATA_ENV, DATA_FILE_NAME};

/// Locate the data file: `GUILD_TAG_DATA`, then next to the executable,
/// then the working directory.
pub fn data_file() -> PathBuf {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));
    resolve_data_file(env::var_os(DATA_ENV), exe_dir.as_deref())
}

pub fn resolve_data_file(env_value: Option<OsString>, exe_dir: Option<&Path>) -> PathBuf {
    if let Some(v) = env_value.filter(|v| !v.is_empty()) {
        return PathBuf::from(v);
    }
    if let Some(dir) = exe_dir {
        let beside = dir.join(DATA_FILE_NAME);
        if beside.is_file() {
            return beside;
        }
    }
    PathBuf::from(DATA_FILE_NAME)
}
