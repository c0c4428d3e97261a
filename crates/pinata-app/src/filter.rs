// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::{Catalog, Item, ItemId, NOTES_FIELD};

const TRICK_MARKER: &str = "trick";

/// Toggle policy shared by list filtering and the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldVisibility {
    pub show_tricks: bool,
    pub show_notes: bool,
}

impl FieldVisibility {
    pub fn hides(&self, key: &str) -> bool {
        if !self.show_tricks && is_trick_field(key) {
            return true;
        }
        !self.show_notes && key == NOTES_FIELD
    }
}

pub fn is_trick_field(key: &str) -> bool {
    key.to_lowercase().contains(TRICK_MARKER)
}

/// True when at least one field that `visibility` does not hide contains
/// `query`, compared case-insensitively.
pub fn item_matches(item: &Item, query: &str, visibility: FieldVisibility) -> bool {
    let needle = query.to_lowercase();
    item_matches_lowered(item, &needle, visibility)
}

fn item_matches_lowered(item: &Item, needle: &str, visibility: FieldVisibility) -> bool {
    item.fields().any(|(key, value)| {
        !visibility.hides(key) && value.search_text().to_lowercase().contains(needle)
    })
}

pub fn visible_items(catalog: &Catalog, query: &str, visibility: FieldVisibility) -> Vec<ItemId> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|(_, item)| item_matches_lowered(item, &needle, visibility))
        .map(|(id, _)| id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{FieldVisibility, is_trick_field, item_matches, visible_items};
    use crate::model::{Catalog, ItemId};
    use anyhow::Result;

    fn hidden() -> FieldVisibility {
        FieldVisibility::default()
    }

    #[test]
    fn trick_marker_is_case_insensitive_substring() {
        assert!(is_trick_field("Trick1"));
        assert!(is_trick_field("Romance Tricks"));
        assert!(is_trick_field("TRICKY"));
        assert!(!is_trick_field("Tri ck"));
    }

    #[test]
    fn notes_gate_is_exact_key() {
        let visibility = hidden();
        assert!(visibility.hides("Notes"));
        assert!(!visibility.hides("notes"));
        assert!(!visibility.hides("Notes2"));
        assert!(
            !FieldVisibility {
                show_notes: true,
                ..hidden()
            }
            .hides("Notes")
        );
    }

    #[test]
    fn hidden_fields_never_match() -> Result<()> {
        let catalog = Catalog::from_json_str(
            r#"[{"Name":"Fudgehog","Notes":"prickly","Trick":"Roll up"}]"#,
        )?;
        let item = catalog.get(ItemId::new(0)).expect("item");

        assert!(!item_matches(item, "prickly", hidden()));
        assert!(!item_matches(item, "roll", hidden()));
        assert!(item_matches(
            item,
            "PRICKLY",
            FieldVisibility {
                show_notes: true,
                ..hidden()
            }
        ));
        assert!(item_matches(
            item,
            "Roll",
            FieldVisibility {
                show_tricks: true,
                ..hidden()
            }
        ));
        Ok(())
    }

    #[test]
    fn cost_and_related_are_searchable() -> Result<()> {
        let catalog = Catalog::from_json_str(
            r#"[{"Name":"Quazzle","Cost":1250,"Related":["Bunnycomb"]},{"Name":"Bunnycomb","Cost":80}]"#,
        )?;
        assert_eq!(
            visible_items(&catalog, "125", hidden()),
            vec![ItemId::new(0)]
        );
        assert_eq!(
            visible_items(&catalog, "bunny", hidden()),
            vec![ItemId::new(0), ItemId::new(1)]
        );
        Ok(())
    }

    #[test]
    fn item_with_only_hidden_fields_disappears_on_empty_query() -> Result<()> {
        let catalog = Catalog::from_json_str(r#"[{"Notes":"just a note"},{"Name":"Pieena"}]"#)?;
        assert_eq!(visible_items(&catalog, "", hidden()), vec![ItemId::new(1)]);
        assert_eq!(
            visible_items(
                &catalog,
                "",
                FieldVisibility {
                    show_notes: true,
                    ..hidden()
                }
            ),
            vec![ItemId::new(0), ItemId::new(1)]
        );
        Ok(())
    }

    #[test]
    fn list_values_match_across_the_comma_join() -> Result<()> {
        let catalog =
            Catalog::from_json_str(r#"[{"Name":"Salamango","Appear":["Fruit","Hot Sauce"]}]"#)?;
        assert_eq!(
            visible_items(&catalog, "fruit,hot", hidden()),
            vec![ItemId::new(0)]
        );
        Ok(())
    }
}
