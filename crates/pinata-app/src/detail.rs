// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::filter::FieldVisibility;
use crate::model::{COST_FIELD, Item, NAME_FIELD, RELATED_FIELD};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub heading: String,
    pub lines: Vec<String>,
}

/// What the detail panel shows for one selected item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub title: String,
    pub cost: Option<String>,
    pub sections: Vec<DetailSection>,
    pub related: Vec<String>,
}

impl DetailPanel {
    /// The search query plays no part here: only the toggles decide which
    /// fields appear. `related` ignores the toggles as well.
    pub fn for_item(item: &Item, visibility: FieldVisibility) -> Self {
        let sections = item
            .fields()
            .filter(|(key, _)| !is_header_field(key) && !visibility.hides(key))
            .map(|(key, value)| DetailSection {
                heading: key.to_owned(),
                lines: value.display_lines(),
            })
            .collect();

        Self {
            title: item.label(),
            cost: item.cost(),
            sections,
            related: item.related(),
        }
    }

    pub fn has_related(&self) -> bool {
        !self.related.is_empty()
    }
}

fn is_header_field(key: &str) -> bool {
    matches!(key, NAME_FIELD | COST_FIELD | RELATED_FIELD)
}
