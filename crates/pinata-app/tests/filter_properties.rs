// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Property tests for the catalog filter:
//!
//! 1. The visible list is an order-preserving subsequence of the catalog.
//! 2. Turning a toggle on never removes an item for a fixed query.
//! 3. An empty query with both toggles off shows every item that has a Name.

use pinata_app::{Catalog, FieldVisibility, ItemId, visible_items};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

const KEYS: [&str; 6] = ["Name", "Cost", "Trick1", "Notes", "Appear", "Visit"];

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-zA-Z ]{0,8}".prop_map(Value::String),
        (0i64..500).prop_map(|n| json!(n)),
    ]
}

fn field_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => scalar_strategy(),
        1 => prop::collection::vec(scalar_strategy(), 0..3).prop_map(Value::Array),
    ]
}

fn item_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec((0..KEYS.len(), field_strategy()), 0..5).prop_map(|fields| {
        let mut map = Map::new();
        for (key, value) in fields {
            map.insert(KEYS[key].to_owned(), value);
        }
        Value::Object(map)
    })
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(item_strategy(), 0..12)
        .prop_map(|items| Catalog::from_json_value(Value::Array(items)).expect("objects only"))
}

fn visibility_strategy() -> impl Strategy<Value = FieldVisibility> {
    (any::<bool>(), any::<bool>()).prop_map(|(show_tricks, show_notes)| FieldVisibility {
        show_tricks,
        show_notes,
    })
}

fn is_strictly_increasing(ids: &[ItemId]) -> bool {
    ids.windows(2).all(|pair| pair[0] < pair[1])
}

proptest! {
    #[test]
    fn visible_list_is_ordered_subsequence(
        catalog in catalog_strategy(),
        query in "[a-zA-Z]{0,3}",
        visibility in visibility_strategy(),
    ) {
        let visible = visible_items(&catalog, &query, visibility);
        prop_assert!(is_strictly_increasing(&visible));
        prop_assert!(visible.iter().all(|id| catalog.get(*id).is_some()));
    }
}

proptest! {
    #[test]
    fn showing_tricks_only_adds_items(
        catalog in catalog_strategy(),
        query in "[a-zA-Z0-9]{0,3}",
        show_notes in any::<bool>(),
    ) {
        let hidden = visible_items(&catalog, &query, FieldVisibility { show_tricks: false, show_notes });
        let shown = visible_items(&catalog, &query, FieldVisibility { show_tricks: true, show_notes });
        prop_assert!(hidden.iter().all(|id| shown.contains(id)));
    }
}

proptest! {
    #[test]
    fn showing_notes_only_adds_items(
        catalog in catalog_strategy(),
        query in "[a-zA-Z0-9]{0,3}",
        show_tricks in any::<bool>(),
    ) {
        let hidden = visible_items(&catalog, &query, FieldVisibility { show_tricks, show_notes: false });
        let shown = visible_items(&catalog, &query, FieldVisibility { show_tricks, show_notes: true });
        prop_assert!(hidden.iter().all(|id| shown.contains(id)));
    }
}

proptest! {
    #[test]
    fn empty_query_shows_every_named_item(catalog in catalog_strategy()) {
        let visible = visible_items(&catalog, "", FieldVisibility::default());
        for (id, item) in catalog.iter() {
            if item.field("Name").is_some() {
                prop_assert!(visible.contains(&id), "item {:?} should be visible", id);
            }
        }
    }
}

proptest! {
    #[test]
    fn query_case_does_not_change_result(
        catalog in catalog_strategy(),
        query in "[a-z]{0,3}",
        visibility in visibility_strategy(),
    ) {
        prop_assert_eq!(
            visible_items(&catalog, &query, visibility),
            visible_items(&catalog, &query.to_uppercase(), visibility)
        );
    }
}
