// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use pinata_app::Catalog;
use pinata_data::CatalogSource;
use pinata_tui::InternalEvent;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    Source(CatalogSource),
    Demo,
}

pub struct DataRuntime {
    origin: CatalogOrigin,
    timeout: Duration,
}

impl DataRuntime {
    pub fn new(source: CatalogSource, timeout: Duration) -> Self {
        Self {
            origin: CatalogOrigin::Source(source),
            timeout,
        }
    }

    pub fn demo() -> Self {
        Self {
            origin: CatalogOrigin::Demo,
            timeout: pinata_data::DEFAULT_TIMEOUT,
        }
    }
}

fn load_from(origin: &CatalogOrigin, timeout: Duration) -> Result<Catalog> {
    match origin {
        CatalogOrigin::Source(source) => pinata_data::load_catalog(source, timeout),
        CatalogOrigin::Demo => pinata_data::demo_catalog(),
    }
}

impl pinata_tui::AppRuntime for DataRuntime {
    fn load_catalog(&mut self) -> Result<Catalog> {
        load_from(&self.origin, self.timeout)
    }

    fn source_label(&self) -> String {
        match &self.origin {
            CatalogOrigin::Source(source) => source.to_string(),
            CatalogOrigin::Demo => "demo catalog".to_owned(),
        }
    }

    fn spawn_catalog_load(&mut self, tx: Sender<InternalEvent>) -> Result<()> {
        let origin = self.origin.clone();
        let timeout = self.timeout;
        thread::Builder::new()
            .name("catalog-load".to_owned())
            .spawn(move || {
                let event = InternalEvent::from_load(load_from(&origin, timeout));
                let _ = tx.send(event);
            })
            .context("spawn catalog load thread")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DataRuntime;
    use anyhow::{Result, bail};
    use pinata_data::{CatalogSource, DEFAULT_TIMEOUT};
    use pinata_testkit::{garden_catalog_json, write_catalog_file};
    use pinata_tui::{AppRuntime, InternalEvent};
    use std::sync::mpsc;
    use std::time::Duration;

    const RECV_TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn file_runtime_loads_catalog_synchronously() -> Result<()> {
        let file = write_catalog_file(&garden_catalog_json())?;
        let mut runtime = DataRuntime::new(CatalogSource::File(file.path.clone()), DEFAULT_TIMEOUT);
        let catalog = runtime.load_catalog()?;
        assert_eq!(catalog.len(), 14);
        assert_eq!(runtime.source_label(), file.path.display().to_string());
        Ok(())
    }

    #[test]
    fn background_load_delivers_catalog_event() -> Result<()> {
        let file = write_catalog_file(&garden_catalog_json())?;
        let mut runtime = DataRuntime::new(CatalogSource::File(file.path.clone()), DEFAULT_TIMEOUT);
        let (tx, rx) = mpsc::channel();
        runtime.spawn_catalog_load(tx)?;

        match rx.recv_timeout(RECV_TIMEOUT)? {
            InternalEvent::CatalogLoaded(catalog) => {
                assert!(catalog.find_by_name("Lonely Lickatoad").is_some());
            }
            other => bail!("expected a loaded catalog, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn background_load_reports_missing_file() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("gone.json");
        let mut runtime = DataRuntime::new(CatalogSource::File(path.clone()), DEFAULT_TIMEOUT);
        let (tx, rx) = mpsc::channel();
        runtime.spawn_catalog_load(tx)?;

        match rx.recv_timeout(RECV_TIMEOUT)? {
            InternalEvent::CatalogFailed { error } => {
                assert!(error.contains(&path.display().to_string()), "got {error}");
            }
            other => bail!("expected a load failure, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn demo_runtime_needs_no_source() -> Result<()> {
        let mut runtime = DataRuntime::demo();
        assert_eq!(runtime.source_label(), "demo catalog");
        assert_eq!(runtime.load_catalog()?.len(), 6);
        Ok(())
    }
}
