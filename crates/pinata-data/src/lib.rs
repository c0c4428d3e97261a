// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod demo;

use anyhow::{Context, Result, anyhow, bail};
use pinata_app::Catalog;
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub use demo::demo_catalog;

pub const APP_NAME: &str = "pinata";
pub const DATA_FILE_NAME: &str = "updated_data.json";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the catalog comes from: a local file or a single HTTP(S) GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(Url),
}

impl CatalogSource {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            bail!("catalog source must not be empty");
        }

        if let Some(index) = trimmed.find("://")
            && index > 0
        {
            let scheme = &trimmed[..index];
            if scheme.chars().all(char::is_alphabetic) {
                let url = Url::parse(trimmed)
                    .with_context(|| format!("parse catalog URL {trimmed:?}"))?;
                return match url.scheme() {
                    "http" | "https" => Ok(Self::Url(url)),
                    "file" => url.to_file_path().map(Self::File).map_err(|()| {
                        anyhow!("catalog URL {trimmed:?} does not name a local file")
                    }),
                    other => Err(anyhow!(
                        "unsupported catalog scheme {other}://; use a file path or an http(s) URL"
                    )),
                };
            }
        }

        Ok(Self::File(PathBuf::from(trimmed)))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// One attempt, no retry. The whole document must parse or nothing loads.
pub fn load_catalog(source: &CatalogSource, timeout: Duration) -> Result<Catalog> {
    tracing::info!(%source, "loading catalog");
    let raw = match source {
        CatalogSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("read catalog file {}", path.display()))?,
        CatalogSource::Url(url) => fetch_catalog_text(url, timeout)?,
    };

    let catalog =
        Catalog::from_json_str(&raw).with_context(|| format!("decode catalog from {source}"))?;
    tracing::info!(%source, items = catalog.len(), "catalog loaded");
    Ok(catalog)
}

fn fetch_catalog_text(url: &Url, timeout: Duration) -> Result<String> {
    let http = HttpClient::builder()
        .timeout(timeout)
        .build()
        .context("build HTTP client")?;

    let response = http
        .get(url.clone())
        .send()
        .map_err(|error| connection_error(url, error))?;

    let status = response.status();
    if !status.is_success() {
        return Err(status_error(url, status));
    }

    response
        .text()
        .with_context(|| format!("read catalog body from {url}"))
}

fn connection_error(url: &Url, error: reqwest::Error) -> anyhow::Error {
    if error.is_timeout() {
        return anyhow!("timed out fetching catalog from {url}");
    }
    anyhow!("cannot reach {url} ({error})")
}

fn status_error(url: &Url, status: StatusCode) -> anyhow::Error {
    match status.canonical_reason() {
        Some(reason) => anyhow!(
            "catalog request to {url} failed: {} {reason}",
            status.as_u16()
        ),
        None => anyhow!("catalog request to {url} failed: {}", status.as_u16()),
    }
}

pub fn default_catalog_path() -> Result<PathBuf> {
    if let Some(override_path) = env::var_os("PINATA_DATA_PATH") {
        return Ok(PathBuf::from(override_path));
    }

    let data_root = dirs::data_local_dir().ok_or_else(|| {
        anyhow!("cannot resolve data directory; set PINATA_DATA_PATH to the catalog file")
    })?;
    Ok(data_root.join(APP_NAME).join(DATA_FILE_NAME))
}
