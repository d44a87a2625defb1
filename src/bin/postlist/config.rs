use std::env;
use std::path::PathBuf;

use postlist::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let mut candidates = vec![];
    if let Some(exe_dir) = env::current_exe().ok().and_then(|p| p.parent().map(|d| d.to_path_buf())) {
        candidates.push(exe_dir.join(CFG_FILE_NAME));
    }
    if let Ok(cur_dir) = env::current_dir() {
        candidates.push(cur_dir.join(CFG_FILE_NAME));
    }
    if let Some(cfg_dir) = dirs::config_dir() {
        candidates.push(cfg_dir.join(CFG_FILE_NAME));
    }

    candidates.into_iter().find(|path| path.exists())
}

/// An explicit path has to exist. Otherwise the usual places are searched and
/// the built-in defaults are used when nothing is found.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        None => {
            eprintln!("No {} found. Using defaults", CFG_FILE_NAME);
            return Ok(Config::default());
        }
        Some(x) => x,
    };

    eprintln!("Reading config from {}", config_path.display());
    read_config(&config_path).map_err(|e| e.to_string())
}
