//! Searchable single-select dropdown.

use sae_utils::lookup::{self, LookupEntry, LookupTable};
use serde::{Deserialize, Serialize};

/// One option in the search list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOption {
    pub id: String,
    pub value: String,
}

impl LookupEntry for SearchOption {
    fn lookup_id(&self) -> &str {
        &self.id
    }

    fn lookup_value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownSearchProps {
    pub values: Vec<SearchOption>,
}

impl DropdownSearchProps {
    /// Id -> label table for the current options, first occurrence wins.
    pub fn lookup_table(&self) -> LookupTable {
        lookup::build(&self.values, LookupTable::new())
    }
}
