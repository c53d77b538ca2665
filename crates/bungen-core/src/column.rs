use serde::{Deserialize, Serialize};

/// One column as reported by the catalog: raw name and raw SQL type string.
///
/// Both fields are plain strings decoded at the query-result boundary, so
/// nothing downstream has to care how the driver surfaced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ColumnInfo {
    pub name: String,
    pub sql_type: String,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
        }
    }
}

/// Trim surrounding whitespace from a catalog identifier.
///
/// A whitespace-only identifier cleans to the empty string; callers drop the
/// corresponding field from output.
pub fn clean_identifier(input: &str) -> &str {
    input.trim()
}
