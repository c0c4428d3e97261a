// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::fmt;

pub const NAME_FIELD: &str = "Name";
pub const COST_FIELD: &str = "Cost";
pub const RELATED_FIELD: &str = "Related";
pub const NOTES_FIELD: &str = "Notes";
pub const UNNAMED_LABEL: &str = "(unnamed)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(usize);

impl ItemId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Text(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl Scalar {
    fn from_json(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Number(number) => Self::Number(number),
            Value::Bool(flag) => Self::Bool(flag),
            Value::Null => Self::Null,
            nested @ (Value::Array(_) | Value::Object(_)) => Self::Text(nested.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write_number(f, number),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Null => Ok(()),
        }
    }
}

/// Whole-valued floats print without a fraction, so `5.0` reads as `5`.
fn write_number(f: &mut fmt::Formatter<'_>, number: &Number) -> fmt::Result {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e21 => {
            if value == 0.0 {
                f.write_str("0")
            } else {
                write!(f, "{value:.0}")
            }
        }
        _ => write!(f, "{number}"),
    }
}

/// A field value as it appears in the data file: one scalar, or an ordered
/// list of scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl FieldValue {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(values) => Self::List(values.into_iter().map(Scalar::from_json).collect()),
            other => Self::Scalar(Scalar::from_json(other)),
        }
    }

    /// Text used for search matching. Lists join their elements with commas.
    pub fn search_text(&self) -> String {
        match self {
            Self::Scalar(scalar) => scalar.to_string(),
            Self::List(values) => values
                .iter()
                .map(Scalar::to_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// One display line per element for lists, a single line for scalars.
    pub fn display_lines(&self) -> Vec<String> {
        match self {
            Self::Scalar(scalar) => vec![scalar.to_string()],
            Self::List(values) => values.iter().map(Scalar::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    fields: Vec<(String, FieldValue)>,
}

impl Item {
    pub fn from_json_map(map: Map<String, Value>) -> Self {
        Self {
            fields: map
                .into_iter()
                .map(|(key, value)| (key, FieldValue::from_json(value)))
                .collect(),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    /// The join key for relation lookups. Only a text `Name` qualifies.
    pub fn name(&self) -> Option<&str> {
        match self.field(NAME_FIELD)? {
            FieldValue::Scalar(scalar) => scalar.as_text(),
            FieldValue::List(_) => None,
        }
    }

    pub fn label(&self) -> String {
        match self.field(NAME_FIELD) {
            Some(value) => {
                let text = value.search_text();
                if text.is_empty() {
                    UNNAMED_LABEL.to_owned()
                } else {
                    text
                }
            }
            None => UNNAMED_LABEL.to_owned(),
        }
    }

    pub fn cost(&self) -> Option<String> {
        self.field(COST_FIELD).map(FieldValue::search_text)
    }

    pub fn related(&self) -> Vec<String> {
        match self.field(RELATED_FIELD) {
            Some(FieldValue::List(values)) => values.iter().map(Scalar::to_string).collect(),
            Some(FieldValue::Scalar(Scalar::Null)) | None => Vec::new(),
            Some(FieldValue::Scalar(scalar)) => vec![scalar.to_string()],
        }
    }
}


/// The full, ordered set of items for a session. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "Value")]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).context("parse catalog JSON")?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        let Value::Array(entries) = value else {
            return Err(anyhow!(
                "catalog must be a JSON array of objects, got {}",
                json_kind(&value)
            ));
        };

        let items = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Object(map) => Ok(Item::from_json_map(map)),
                other => Err(anyhow!(
                    "catalog entry {index} must be an object, got {}",
                    json_kind(&other)
                )),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.get())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (ItemId::new(index), item))
    }

    /// First item whose `Name` equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Option<ItemId> {
        self.iter()
            .find(|(_, item)| item.name() == Some(name))
            .map(|(id, _)| id)
    }
}

impl TryFrom<Value> for Catalog {
    type Error = anyhow::Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json_value(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
