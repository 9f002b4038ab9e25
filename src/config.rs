use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Paths {
    pub build_dir: PathBuf,
    pub source_dir: PathBuf,
    pub source_extension: String,
    pub index_file: String,
}

#[derive(Deserialize)]
pub struct RssFeed {
    pub title: String,
    pub site_url: String,
    pub subtitle: String,
    pub language: String,
    pub file_name: String,
    pub utc_offset: String,
}

#[derive(Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub paths: Paths,
    pub rss_feed: RssFeed,
    pub author: Author,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> PathBuf {
    if path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe().unwrap();
        let exe_dir = cur_exe.parent().unwrap().to_str().unwrap();
        let str_path = path.to_str().unwrap();
        PathBuf::from(str_path.replace("${exe_dir}", exe_dir))
    } else {
        path
    }
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.to_str().unwrap(), e))),
    };

    let mut cfg: Config = match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths.build_dir = parse_path(cfg.paths.build_dir);
    cfg.paths.source_dir = parse_path(cfg.paths.source_dir);

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const CFG_DATA: &str = r#"
[paths]
build_dir = "build"
source_dir = "src"
source_extension = "Rmd"
index_file = "index.html"

[rss_feed]
title = "Ken Kellner's Blog"
site_url = "https://kenkellner.com/blog/"
subtitle = " "
language = "en"
file_name = "feed.xml"
utc_offset = "-0500"

[author]
name = "Ken Kellner"
email = "contact@kenkellner.com"
"#;

    #[test]
    fn test_read_config() -> io::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(CFG_DATA.as_bytes())?;

        let cfg = read_config(&file.path().to_path_buf())?;
        assert_eq!(cfg.paths.build_dir, PathBuf::from("build"));
        assert_eq!(cfg.paths.source_dir, PathBuf::from("src"));
        assert_eq!(cfg.paths.source_extension, "Rmd");
        assert_eq!(cfg.paths.index_file, "index.html");
        assert_eq!(cfg.rss_feed.title, "Ken Kellner's Blog");
        assert_eq!(cfg.rss_feed.site_url, "https://kenkellner.com/blog/");
        assert_eq!(cfg.rss_feed.subtitle, " ");
        assert_eq!(cfg.rss_feed.language, "en");
        assert_eq!(cfg.rss_feed.file_name, "feed.xml");
        assert_eq!(cfg.rss_feed.utc_offset, "-0500");
        assert_eq!(cfg.author.name, "Ken Kellner");
        assert_eq!(cfg.author.email, "contact@kenkellner.com");
        assert!(cfg.log.is_none());
        Ok(())
    }

    #[test]
    fn test_read_config_missing_file() {
        let res = read_config(&PathBuf::from("/nonexistent/blogfeed.toml"));
        assert!(res.is_err());
    }

    #[test]
    fn test_read_config_bad_toml() -> io::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"[paths]\nbuild_dir = 42\n")?;

        let res = read_config(&file.path().to_path_buf());
        let err = res.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        Ok(())
    }
}
