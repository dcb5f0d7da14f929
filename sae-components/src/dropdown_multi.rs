//! Multi-select dropdown.
//!
//! The host supplies two getters (current selection and current values)
//! through [`SelectionSource`]; the component emits a single `submit` event
//! carrying the selection map.

use sae_utils::lookup::{self, LookupEntry, LookupTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Search term paired with the text shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupItem {
    pub term: String,
    pub display: String,
}

impl LookupEntry for LookupItem {
    fn lookup_id(&self) -> &str {
        &self.term
    }

    fn lookup_value(&self) -> &str {
        &self.display
    }
}

/// One selectable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionItem {
    pub id: String,
    pub value: String,
}

impl SelectionItem {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

impl LookupEntry for SelectionItem {
    fn lookup_id(&self) -> &str {
        &self.id
    }

    fn lookup_value(&self) -> &str {
        &self.value
    }
}

/// Selection state keyed by item id.
pub type SelectedItems = BTreeMap<String, bool>;

/// Ids currently marked as selected, in id order.
pub fn selected_ids(items: &SelectedItems) -> impl Iterator<Item = &str> + '_ {
    items
        .iter()
        .filter(|(_, selected)| **selected)
        .map(|(id, _)| id.as_str())
}

/// Host-provided getters for the dropdown's live state.
pub trait SelectionSource {
    fn selection(&self) -> SelectedItems;
    fn values(&self) -> Vec<SelectionItem>;
}

/// Props for the multi-select dropdown.
#[derive(Debug, Clone)]
pub struct DropdownMultiProps<S> {
    pub source: S,
    pub values: Vec<SelectionItem>,
}

impl<S: SelectionSource> DropdownMultiProps<S> {
    pub fn new(source: S, values: Vec<SelectionItem>) -> Self {
        Self { source, values }
    }

    /// Labels for the static `values` followed by the source's values.
    /// Static values win on duplicate ids.
    pub fn lookup_table(&self) -> LookupTable {
        let table = lookup::build(&self.values, LookupTable::new());
        lookup::build(self.source.values(), table)
    }

    pub fn submit_event(&self) -> DropdownMultiEvent {
        DropdownMultiEvent::Submit(self.source.selection())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail", rename_all = "lowercase")]
pub enum DropdownMultiEvent {
    Submit(SelectedItems),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource {
        selection: SelectedItems,
        values: Vec<SelectionItem>,
    }

    impl SelectionSource for FixedSource {
        fn selection(&self) -> SelectedItems {
            self.selection.clone()
        }

        fn values(&self) -> Vec<SelectionItem> {
            self.values.clone()
        }
    }

    fn source() -> FixedSource {
        let mut selection = SelectedItems::new();
        selection.insert("SHA".to_string(), true);
        selection.insert("ORO".to_string(), false);
        selection.insert("FOL".to_string(), true);
        FixedSource {
            selection,
            values: vec![
                SelectionItem::new("ORO", "Oroville (live)"),
                SelectionItem::new("FOL", "Folsom"),
            ],
        }
    }

    #[test]
    fn test_selected_ids() {
        let s = source();
        let ids: Vec<&str> = selected_ids(&s.selection).collect();
        assert_eq!(ids, vec!["FOL", "SHA"]);
    }

    #[test]
    fn test_lookup_table_prefers_static_values() {
        let props = DropdownMultiProps::new(
            source(),
            vec![
                SelectionItem::new("SHA", "Shasta"),
                SelectionItem::new("ORO", "Oroville"),
            ],
        );
        let table = props.lookup_table();
        assert_eq!(table.len(), 3);
        assert_eq!(table["ORO"], "Oroville");
        assert_eq!(table["FOL"], "Folsom");
    }

    #[test]
    fn test_submit_event_serializes_selection() {
        let props = DropdownMultiProps::new(source(), Vec::new());
        let event = props.submit_event();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "submit");
        assert_eq!(json["detail"]["SHA"], true);
        assert_eq!(json["detail"]["ORO"], false);
    }

    #[test]
    fn test_lookup_items_as_entries() {
        let items = vec![
            LookupItem {
                term: "sha".to_string(),
                display: "Shasta Dam".to_string(),
            },
            LookupItem {
                term: "sha".to_string(),
                display: "ignored".to_string(),
            },
        ];
        let table = lookup::build(&items, LookupTable::new());
        assert_eq!(table.len(), 1);
        assert_eq!(table["sha"], "Shasta Dam");
    }
}
