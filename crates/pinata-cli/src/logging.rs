// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::config::Config;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILTER_ENV: &str = "PINATA_LOG";

/// Installs the file logger when `[log].file` is set. Stdout belongs to the
/// terminal UI, so without a file nothing is recorded.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = config.log_file() else {
        return Ok(false);
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(level_filter(config.log_level())?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| anyhow!("install log subscriber: {error}"))?;
    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}

fn level_filter(configured: &str) -> Result<EnvFilter> {
    let directive = env::var(LOG_FILTER_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| configured.to_owned());
    EnvFilter::try_new(&directive).with_context(|| {
        format!("invalid log filter {directive:?}; set [log].level or {LOG_FILTER_ENV}")
    })
}

#[cfg(test)]
mod tests {
    use super::{LOG_FILTER_ENV, init, level_filter};
    use crate::config::Config;
    use anyhow::Result;
    use std::sync::{Mutex, OnceLock};

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn no_log_file_means_no_subscriber() -> Result<()> {
        assert!(!init(&Config::default())?);
        Ok(())
    }

    #[test]
    fn configured_level_is_used_without_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var(LOG_FILTER_ENV);
        }
        assert_eq!(level_filter("warn")?.to_string(), "warn");
        Ok(())
    }

    #[test]
    fn env_override_beats_configured_level() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var(LOG_FILTER_ENV, "debug");
        }
        let filter = level_filter("warn");
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var(LOG_FILTER_ENV);
        }
        assert_eq!(filter?.to_string(), "debug");
        Ok(())
    }

    #[test]
    fn invalid_level_is_reported() {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var(LOG_FILTER_ENV);
        }
        let error = level_filter("pinata=loud").expect_err("bad level should fail");
        assert!(error.to_string().contains("invalid log filter"));
    }
}
