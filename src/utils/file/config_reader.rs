use log::{error, info};
use regex::Regex;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;
use crate::config_err_res;
use crate::error::NicotubeError;
use crate::model::AppConfig;

pub const CONFIG_FILE: &str = "config.yml";

static RE_ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{env:(?P<var>[a-zA-Z_][a-zA-Z0-9_]*)}").unwrap());

pub fn resolve_env_var(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    RE_ENV_VAR.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|e| {
            error!("Could not resolve env var '{var_name}': {e}");
            format!("${{env:{var_name}}}")
        })
    }).to_string()
}

pub fn parse_config(content: &str) -> Result<AppConfig, NicotubeError> {
    let resolved = resolve_env_var(content);
    if resolved.trim().is_empty() {
        let mut config = AppConfig::default();
        config.prepare()?;
        return Ok(config);
    }
    match serde_yaml::from_str::<AppConfig>(&resolved) {
        Ok(mut config) => {
            config.prepare()?;
            Ok(config)
        }
        Err(err) => config_err_res!("cant read config file: {err}"),
    }
}

/// Reads the yaml config, a missing file yields the defaults.
pub fn read_config(config_file: &str) -> Result<AppConfig, NicotubeError> {
    let path = Path::new(config_file);
    match fs::read_to_string(path) {
        Ok(content) => {
            info!("Config file: {}", path.display());
            parse_config(&content)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("Config file {} not found, using defaults", path.display());
            parse_config("")
        }
        Err(err) => config_err_res!("cant read config file {}: {err}", path.display()),
    }
}
