use env_logger::{Builder, Target};
use log::{error, info, LevelFilter};
use std::fs;
use crate::model::LogLevelConfig;

pub const LOG_ENV_VAR: &str = "NICOTUBE_LOG";

const LOG_ERROR_LEVEL_MOD: &[&str] = &[
    "reqwest::async_impl::client",
    "reqwest::connect",
    "hyper_util::client",
    "rustls",
];


fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        // "info" => LevelFilter::Info,
        _ => LevelFilter::Info,
    }
}

fn read_config_log_level(config_file: &str) -> Option<String> {
    fs::read_to_string(config_file).ok()
        .and_then(|content| serde_yaml::from_str::<LogLevelConfig>(&content)
            .map_err(|e| error!("Failed to parse log config file: {e}"))
            .ok())
        .and_then(|cfg| cfg.log.and_then(|l| l.log_level))
}

// Splits "info,nicotube::search=debug" into a default level and module filters.
fn parse_log_levels(log_level: &str) -> (Option<LevelFilter>, Vec<(String, LevelFilter)>) {
    let mut default_level = None;
    let mut modules = vec![];
    for pair in log_level.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if pair.contains('=') {
            let mut kv_iter = pair.split('=').map(str::trim);
            if let (Some(module), Some(level)) = (kv_iter.next(), kv_iter.next()) {
                modules.push((module.to_string(), get_log_level(level)));
            }
        } else {
            default_level = Some(get_log_level(pair));
        }
    }
    (default_level, modules)
}

pub fn init_logger(user_log_level: Option<&String>, config_file: &str) {
    let env_log_level = std::env::var(LOG_ENV_VAR).ok();

    let mut log_builder = Builder::from_default_env();
    // stdout carries the search results
    log_builder.target(Target::Stderr);

    // priority  CLI-Argument, Env-Var, Config, Default
    let log_level = user_log_level
        .map(std::string::ToString::to_string) // cli-argument
        .or(env_log_level) // env
        .or_else(|| read_config_log_level(config_file)) // config
        .unwrap_or_else(|| "info".to_string()); // Default

    let (default_level, modules) = parse_log_levels(&log_level);
    let mut log_levels = vec![];
    if let Some(level) = default_level {
        log_levels.push(level.to_string());
        log_builder.filter_level(level);
    }
    for (module, level) in &modules {
        log_levels.push(format!("{module}={level}"));
        log_builder.filter_module(module, *level);
    }
    for module in LOG_ERROR_LEVEL_MOD {
        log_builder.filter_module(module, LevelFilter::Error);
    }
    // init fails when a logger is already set, e.g. in tests
    if log_builder.try_init().is_ok() {
        info!("Log Level {}", &log_levels.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_levels() {
        let (default_level, modules) = parse_log_levels("warn, nicotube::search = trace,hyper=error");
        assert_eq!(default_level, Some(LevelFilter::Warn));
        assert_eq!(modules, vec![
            ("nicotube::search".to_string(), LevelFilter::Trace),
            ("hyper".to_string(), LevelFilter::Error),
        ]);
        assert_eq!(parse_log_levels("bogus").0, Some(LevelFilter::Info));
    }
}
