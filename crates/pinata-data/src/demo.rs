// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use pinata_app::Catalog;

const DEMO_CATALOG: &str = r#"[
  {
    "Name": "Whirlm",
    "Cost": 10,
    "Appear": ["Dirt path in garden"],
    "Visit": ["Garden is at least 25% grass"],
    "Resident": ["Eat 2 Sunflower seeds"],
    "Romance": ["Eat 1 Sunflower seed"],
    "Trick1": "Wiggle out of the ground when watered",
    "Notes": "Eaten by Sparrowmints",
    "Related": ["Sparrowmint", "Syrupent"]
  },
  {
    "Name": "Sparrowmint",
    "Cost": 25,
    "Appear": ["Garden has at least 1 tree"],
    "Visit": ["Whirlm resident in garden"],
    "Resident": ["Eat 1 Whirlm"],
    "Romance": ["Eat 2 Whirlms", "Eat 1 Sunflower seed"],
    "Trick1": "Ride on a bird table",
    "Related": ["Whirlm", "Mousemallow"]
  },
  {
    "Name": "Syrupent",
    "Cost": 60,
    "Appear": ["Whirlm resident in garden"],
    "Visit": ["Any fruit in garden"],
    "Resident": ["Eat 2 Whirlms"],
    "Romance": ["Eat 1 Sparrowmint egg"],
    "Notes": ["Fights Sparrowmints", "Hibernates in winter"],
    "Related": ["Whirlm"]
  },
  {
    "Name": "Mousemallow",
    "Cost": 90,
    "Appear": ["Garden has a pond"],
    "Visit": ["Eat a Sparrowmint egg"],
    "Resident": ["Eat a Whirlm"],
    "Romance": ["Eat a Wheat"],
    "Romance Trick": "Be hit by a Sparrowmint",
    "Related": ["Sparrowmint", "Rashberry"]
  },
  {
    "Name": "Rashberry",
    "Cost": "Special",
    "Appear": ["Eat a Mousemallow"],
    "Visit": "Garden is at least 25% long grass",
    "Notes": "Sours other pinatas",
    "Related": ["Mousemallow", "Chewnicorn"]
  },
  {
    "Name": "Taffly",
    "Cost": 40,
    "Appear": ["Garden has flowers"],
    "Visit": ["Any flower blooming"],
    "Resident": ["Eat 1 Nectar"],
    "Romance": ["Eat 2 Nectar"],
    "Related": []
  }
]"#;

/// A small built-in catalog for running without a data file.
pub fn demo_catalog() -> Result<Catalog> {
    Catalog::from_json_str(DEMO_CATALOG).context("decode built-in demo catalog")
}
