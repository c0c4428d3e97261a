// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::detail::DetailPanel;
use crate::filter::{FieldVisibility, visible_items};
use crate::model::{Catalog, Item, ItemId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    catalog: Catalog,
    search_query: String,
    visibility: FieldVisibility,
    selected: Option<ItemId>,
    visible: Vec<ItemId>,
    pub status_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    ReplaceCatalog(Catalog),
    SetQuery(String),
    PushQueryChar(char),
    PopQueryChar,
    ClearQuery,
    ToggleTricks,
    ToggleNotes,
    Select(ItemId),
    FollowRelated(String),
    ClearSelection,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CatalogReplaced { items: usize },
    VisibleChanged { count: usize },
    SelectionChanged(Option<ItemId>),
    TricksVisibilityChanged(bool),
    NotesVisibilityChanged(bool),
    RelatedNotFound(String),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn new(catalog: Catalog, visibility: FieldVisibility) -> Self {
        let mut state = Self {
            catalog,
            visibility,
            ..Self::default()
        };
        state.visible = visible_items(&state.catalog, &state.search_query, state.visibility);
        state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn visibility(&self) -> FieldVisibility {
        self.visibility
    }

    pub fn visible(&self) -> &[ItemId] {
        &self.visible
    }

    pub fn visible_items(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.visible
            .iter()
            .filter_map(|id| self.catalog.get(*id).map(|item| (*id, item)))
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    pub fn detail_panel(&self) -> Option<DetailPanel> {
        self.selected_item()
            .map(|item| DetailPanel::for_item(item, self.visibility))
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::ReplaceCatalog(catalog) => {
                let items = catalog.len();
                self.catalog = catalog;
                let mut events = vec![AppEvent::CatalogReplaced { items }];
                events.extend(self.set_selected(None));
                events.extend(self.refilter());
                events
            }
            AppCommand::SetQuery(query) => {
                if query == self.search_query {
                    return Vec::new();
                }
                self.search_query = query;
                self.refilter()
            }
            AppCommand::PushQueryChar(ch) => {
                self.search_query.push(ch);
                self.refilter()
            }
            AppCommand::PopQueryChar => {
                if self.search_query.pop().is_none() {
                    return Vec::new();
                }
                self.refilter()
            }
            AppCommand::ClearQuery => self.dispatch(AppCommand::SetQuery(String::new())),
            AppCommand::ToggleTricks => {
                self.visibility.show_tricks = !self.visibility.show_tricks;
                tracing::debug!(show_tricks = self.visibility.show_tricks, "toggle tricks");
                let label = if self.visibility.show_tricks {
                    "tricks shown"
                } else {
                    "tricks hidden"
                };
                let mut events = vec![AppEvent::TricksVisibilityChanged(
                    self.visibility.show_tricks,
                )];
                events.extend(self.refilter());
                events.push(self.set_status(label));
                events
            }
            AppCommand::ToggleNotes => {
                self.visibility.show_notes = !self.visibility.show_notes;
                tracing::debug!(show_notes = self.visibility.show_notes, "toggle notes");
                let label = if self.visibility.show_notes {
                    "notes shown"
                } else {
                    "notes hidden"
                };
                let mut events = vec![AppEvent::NotesVisibilityChanged(
                    self.visibility.show_notes,
                )];
                events.extend(self.refilter());
                events.push(self.set_status(label));
                events
            }
            AppCommand::Select(id) => {
                if self.catalog.get(id).is_none() {
                    return Vec::new();
                }
                self.set_selected(Some(id))
            }
            AppCommand::FollowRelated(name) => match self.catalog.find_by_name(&name) {
                Some(id) => self.set_selected(Some(id)),
                None => {
                    tracing::warn!(related = %name, "related pinata not in catalog");
                    let message = format!("no pinata named {name:?}");
                    vec![AppEvent::RelatedNotFound(name), self.set_status(&message)]
                }
            },
            AppCommand::ClearSelection => self.set_selected(None),
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn refilter(&mut self) -> Vec<AppEvent> {
        let visible = visible_items(&self.catalog, &self.search_query, self.visibility);
        if visible == self.visible {
            return Vec::new();
        }
        self.visible = visible;
        vec![AppEvent::VisibleChanged {
            count: self.visible.len(),
        }]
    }

    fn set_selected(&mut self, selected: Option<ItemId>) -> Vec<AppEvent> {
        if self.selected == selected {
            return Vec::new();
        }
        self.selected = selected;
        vec![AppEvent::SelectionChanged(selected)]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState};
    use crate::filter::FieldVisibility;
    use crate::model::{Catalog, ItemId};

    fn catalog() -> Catalog {
        Catalog::from_json_str(
            r#"[
                {"Name":"Whirlm","Cost":1,"Related":["Sparrowmint"]},
                {"Name":"Sparrowmint","Cost":2,"Related":["Whirlm","Nobody"]},
                {"Name":"Syrupent","Cost":3}
            ]"#,
        )
        .expect("fixture catalog parses")
    }

    #[test]
    fn new_state_shows_whole_catalog_and_no_selection() {
        let state = AppState::new(catalog(), FieldVisibility::default());
        assert_eq!(state.visible().len(), 3);
        assert_eq!(state.selected(), None);
        assert_eq!(state.detail_panel(), None);
    }

    #[test]
    fn keystrokes_refilter_immediately() {
        let mut state = AppState::new(catalog(), FieldVisibility::default());

        let events = state.dispatch(AppCommand::PushQueryChar('y'));
        assert_eq!(events, vec![AppEvent::VisibleChanged { count: 2 }]);
        assert_eq!(state.search_query(), "y");

        state.dispatch(AppCommand::PushQueryChar('r'));
        assert_eq!(state.visible(), &[ItemId::new(2)]);

        state.dispatch(AppCommand::PopQueryChar);
        state.dispatch(AppCommand::PopQueryChar);
        assert_eq!(state.visible().len(), 3);
        assert_eq!(state.dispatch(AppCommand::PopQueryChar), Vec::new());
    }

    #[test]
    fn toggle_tricks_updates_status() {
        let mut state = AppState::new(catalog(), FieldVisibility::default());

        let events = state.dispatch(AppCommand::ToggleTricks);
        assert!(state.visibility().show_tricks);
        assert_eq!(
            events,
            vec![
                AppEvent::TricksVisibilityChanged(true),
                AppEvent::StatusUpdated("tricks shown".to_owned()),
            ],
        );

        state.dispatch(AppCommand::ToggleNotes);
        assert!(state.visibility().show_notes);
        assert_eq!(state.status_line.as_deref(), Some("notes shown"));
    }

    #[test]
    fn selection_survives_filtering_it_out() {
        let mut state = AppState::new(catalog(), FieldVisibility::default());
        state.dispatch(AppCommand::Select(ItemId::new(2)));
        state.dispatch(AppCommand::SetQuery("whirlm".to_owned()));

        assert_eq!(state.visible(), &[ItemId::new(0), ItemId::new(1)]);
        assert_eq!(state.selected(), Some(ItemId::new(2)));
        assert_eq!(
            state.detail_panel().map(|panel| panel.title),
            Some("Syrupent".to_owned())
        );
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut state = AppState::new(catalog(), FieldVisibility::default());
        assert_eq!(state.dispatch(AppCommand::Select(ItemId::new(99))), Vec::new());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn follow_related_round_trip_returns_to_origin() {
        let mut state = AppState::new(catalog(), FieldVisibility::default());
        state.dispatch(AppCommand::Select(ItemId::new(0)));
        let original = state.detail_panel();

        state.dispatch(AppCommand::FollowRelated("Sparrowmint".to_owned()));
        assert_eq!(state.selected(), Some(ItemId::new(1)));

        state.dispatch(AppCommand::FollowRelated("Whirlm".to_owned()));
        assert_eq!(state.selected(), Some(ItemId::new(0)));
        assert_eq!(state.detail_panel(), original);
    }

    #[test]
    fn follow_related_miss_keeps_selection() {
        let mut state = AppState::new(catalog(), FieldVisibility::default());
        state.dispatch(AppCommand::Select(ItemId::new(1)));

        let events = state.dispatch(AppCommand::FollowRelated("Nobody".to_owned()));
        assert_eq!(state.selected(), Some(ItemId::new(1)));
        assert_eq!(
            events,
            vec![
                AppEvent::RelatedNotFound("Nobody".to_owned()),
                AppEvent::StatusUpdated("no pinata named \"Nobody\"".to_owned()),
            ]
        );
    }

    #[test]
    fn replace_catalog_resets_selection_and_keeps_query() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SetQuery("syrup".to_owned()));
        assert!(state.visible().is_empty());

        let events = state.dispatch(AppCommand::ReplaceCatalog(catalog()));
        assert_eq!(
            events,
            vec![
                AppEvent::CatalogReplaced { items: 3 },
                AppEvent::VisibleChanged { count: 1 },
            ]
        );
        assert_eq!(state.visible(), &[ItemId::new(2)]);
    }

    #[test]
    fn clear_status() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SetStatus("hello".to_owned()));
        assert_eq!(state.status_line.as_deref(), Some("hello"));

        let events = state.dispatch(AppCommand::ClearStatus);
        assert_eq!(state.status_line, None);
        assert_eq!(events, vec![AppEvent::StatusCleared]);
    }
}
