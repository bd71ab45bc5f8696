use std::env::var;
use std::path::PathBuf;

use dotenvy::dotenv;

const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub data_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Self::from_lookup(|key| var(key).ok())
    }

    /// Builds the config from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, &'static str>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("compact") => LogFormat::Compact,
            Some("json") => LogFormat::Json,
            Some(_) => return Err("LOG_FORMAT must be either `compact` or `json`"),
        };

        Ok(Config {
            port: lookup("PORT")
                .ok_or("An error occured while getting PORT env param")?
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            scheme: lookup("SCHEME").ok_or("An error occured while getting SCHEME env param")?,
            host: lookup("HOST").ok_or("An error occured while getting HOST env param")?,
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            log_format,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}
