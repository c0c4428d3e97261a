// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use pinata_app::Catalog;
use serde_json::{Value, json};
use std::path::PathBuf;

const GARDEN_SPECIES: [&str; 12] = [
    "Whirlm",
    "Sparrowmint",
    "Syrupent",
    "Mousemallow",
    "Rashberry",
    "Buzzlegum",
    "Taffly",
    "Raisant",
    "Cinnamonkey",
    "Fudgehog",
    "Pretztail",
    "Quackberry",
];

const APPEAR_HINTS: [&str; 6] = [
    "Flowers in garden",
    "Dirt path",
    "Pond nearby",
    "Tall grass",
    "Fruit tree",
    "Fence post",
];

/// The two-item catalog used throughout the behavioural tests.
pub fn scenario_catalog_json() -> Value {
    json!([
        {"Name": "Buzzo", "Cost": 5, "Trick1": "Flip", "Related": ["Goggles"]},
        {"Name": "Goggles", "Cost": 3, "Related": ["Buzzo"]},
    ])
}

pub fn scenario_catalog() -> Result<Catalog> {
    Catalog::from_json_value(scenario_catalog_json()).context("build scenario catalog")
}

/// A deterministic catalog exercising every field shape: list values,
/// trick and note fields, numeric and text costs, dangling relations, and one
/// entry without a `Name`.
pub fn garden_catalog_json() -> Value {
    let count = GARDEN_SPECIES.len();
    let mut entries = GARDEN_SPECIES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let next = GARDEN_SPECIES[(index + 1) % count];
            let prev = GARDEN_SPECIES[(index + count - 1) % count];
            let mut entry = json!({
                "Name": name,
                "Cost": (index as i64 + 1) * 25,
                "Appear": [APPEAR_HINTS[index % APPEAR_HINTS.len()]],
                "Visit": format!("Eat {} seeds", index + 2),
                "Related": [next, prev],
            });
            if index % 3 == 0 {
                entry["Romance Trick"] = json!(format!("Feed {name} a sweet"));
            }
            if index % 4 == 0 {
                entry["Notes"] = json!(["Sours easily", format!("Pairs with {next}")]);
            }
            entry
        })
        .collect::<Vec<_>>();

    entries.push(json!({"Name": "Lonely Lickatoad", "Cost": "free", "Related": ["Missingno"]}));
    entries.push(json!({"Cost": 1, "Appear": "Unlabelled"}));
    Value::Array(entries)
}

pub fn garden_catalog() -> Result<Catalog> {
    Catalog::from_json_value(garden_catalog_json()).context("build garden catalog")
}

pub struct CatalogFile {
    _dir: tempfile::TempDir,
    pub path: PathBuf,
}

pub fn write_catalog_file(value: &Value) -> Result<CatalogFile> {
    write_raw_catalog_file(&serde_json::to_string_pretty(value)?)
}

pub fn write_raw_catalog_file(raw: &str) -> Result<CatalogFile> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("updated_data.json");
    std::fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(CatalogFile { _dir: dir, path })
}
