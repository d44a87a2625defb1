use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

use crate::post_list::ListingOrder;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Paths {
    pub posts_dir: Option<PathBuf>,
    pub template_dir: Option<PathBuf>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Defaults {
    pub listing_order: ListingOrder,
    pub container_class: Option<String>,
}

#[derive(Deserialize)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Server {
            address: "0.0.0.0".to_string(),
            port: 8001,
        }
    }
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub defaults: Defaults,
    pub server: Server,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    let str_path = path.to_string_lossy();
    if path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe()?;
        let exe_dir = cur_exe.parent().unwrap_or(cur_exe.as_path());
        Ok(PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy())))
    } else if path.starts_with("${cwd}") {
        let cur_dir = env::current_dir()?;
        Ok(PathBuf::from(str_path.replace("${cwd}", &cur_dir.to_string_lossy())))
    } else {
        Ok(path)
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        posts_dir: cfg.paths.posts_dir.map(parse_path).transpose()?,
        template_dir: cfg.paths.template_dir.map(parse_path).transpose()?,
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
[paths]
posts_dir = "${cwd}/content/posts"
template_dir = "template"

[defaults]
listing_order = "name"
container_class = "posts"

[server]
address = "127.0.0.1"
port = 9000

[log]
level = "Debug"
log_to_console = true
"#;

    #[test]
    fn test_full_config() {
        let cfg = parse_config(FULL_CONFIG).unwrap();
        let cur_dir = env::current_dir().unwrap();
        assert_eq!(cfg.paths.posts_dir, Some(cur_dir.join("content/posts")));
        assert_eq!(cfg.paths.template_dir, Some(PathBuf::from("template")));
        assert_eq!(cfg.defaults.listing_order, ListingOrder::Name);
        assert_eq!(cfg.defaults.container_class.as_deref(), Some("posts"));
        assert_eq!(cfg.server.address, "127.0.0.1");
        assert_eq!(cfg.server.port, 9000);

        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(log.log_to_console);
        assert!(log.location.is_none());
    }

    #[test]
    fn test_empty_config() {
        let cfg = parse_config("").unwrap();
        assert!(cfg.paths.posts_dir.is_none());
        assert_eq!(cfg.defaults.listing_order, ListingOrder::Listing);
        assert_eq!(cfg.server.address, "0.0.0.0");
        assert_eq!(cfg.server.port, 8001);
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_invalid_config() {
        let err = parse_config("[defaults]\nlisting_order = \"random\"\n").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_read_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config(&dir.path().join("postlist.toml")).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().starts_with("Error opening configuration file"));
    }
}
