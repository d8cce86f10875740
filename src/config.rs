use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const RC_FILE_NAME: &str = ".minishrc";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub prompt: String,
    pub ignore_interrupts: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "> ".to_string(),
            ignore_interrupts: true,
            log_filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// `$HOME/.minishrc`, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(RC_FILE_NAME))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&src)
    }

    /// Parses `key = value` lines. Blank lines and `#` comments are skipped.
    ///
    /// The prompt value keeps everything after the `=` except one leading
    /// space, so `prompt = $ ` yields `"$ "`.
    pub fn load_from_str(src: &str) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        for (idx, raw) in src.lines().enumerate() {
            let lineno = idx + 1;
            if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
                continue;
            }
            let Some((key, value)) = raw.split_once('=') else {
                return Err(parse_error(lineno, format!("no '=' found: {}", raw)));
            };

            match key.trim() {
                "prompt" => {
                    config.prompt = value.strip_prefix(' ').unwrap_or(value).to_string();
                }
                "ignore_interrupts" => {
                    config.ignore_interrupts = match value.trim() {
                        "true" | "yes" | "on" => true,
                        "false" | "no" | "off" => false,
                        other => {
                            return Err(parse_error(lineno, format!("invalid boolean: {}", other)));
                        }
                    };
                }
                "log_filter" => config.log_filter = value.trim().to_string(),
                other => return Err(parse_error(lineno, format!("unknown key: {}", other))),
            }
        }

        Ok(config)
    }
}

fn parse_error(line: usize, message: String) -> ConfigError {
    ConfigError::Parse { line, message }
}
