use crate::column::{ColumnInfo, clean_identifier};
use crate::mapping::{GoType, map_sql_type};

/// A single struct field: cleaned column name plus mapped Go type.
///
/// The cleaned name doubles as the bun tag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub field_name: String,
    pub go_type: GoType,
}

/// A table's struct, ready to render. Field order follows catalog column
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    pub table: String,
    pub fields: Vec<FieldMapping>,
}

impl StructDef {
    /// Derive the field list for `table` from raw catalog columns.
    ///
    /// Columns whose cleaned name is empty are dropped without a diagnostic,
    /// so a `StructDef` only ever holds renderable fields.
    pub fn from_columns(table: &str, columns: &[ColumnInfo]) -> Self {
        let fields = columns
            .iter()
            .filter_map(|col| {
                let field_name = clean_identifier(&col.name);
                if field_name.is_empty() {
                    return None;
                }
                Some(FieldMapping {
                    field_name: field_name.to_string(),
                    go_type: map_sql_type(&col.sql_type),
                })
            })
            .collect();

        Self {
            table: table.to_string(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_columns_maps_in_catalog_order() {
        let columns = vec![
            ColumnInfo::new("id", "integer"),
            ColumnInfo::new("name", "text"),
            ColumnInfo::new("created_at", "timestamp without time zone"),
        ];

        let def = StructDef::from_columns("users", &columns);

        assert_eq!(def.table, "users");
        assert_eq!(
            def.fields,
            vec![
                FieldMapping {
                    field_name: "id".into(),
                    go_type: GoType::Int,
                },
                FieldMapping {
                    field_name: "name".into(),
                    go_type: GoType::String,
                },
                FieldMapping {
                    field_name: "created_at".into(),
                    go_type: GoType::Time,
                },
            ]
        );
    }

    #[test]
    fn from_columns_trims_padded_names() {
        let columns = vec![ColumnInfo::new("  email ", "character varying")];
        let def = StructDef::from_columns("accounts", &columns);
        assert_eq!(def.fields.len(), 1);
        assert_eq!(def.fields[0].field_name, "email");
    }

    #[test]
    fn from_columns_drops_whitespace_only_names() {
        let columns = vec![
            ColumnInfo::new("id", "integer"),
            ColumnInfo::new("  ", "text"),
            ColumnInfo::new("", "boolean"),
        ];

        let def = StructDef::from_columns("users", &columns);

        assert_eq!(def.fields.len(), 1);
        assert_eq!(def.fields[0].field_name, "id");
    }

    #[test]
    fn from_columns_with_no_columns_yields_empty_fields() {
        let def = StructDef::from_columns("audit_log", &[]);
        assert_eq!(def.table, "audit_log");
        assert!(def.fields.is_empty());
    }

    #[test]
    fn unknown_types_still_produce_a_field() {
        let columns = vec![ColumnInfo::new("payload", "jsonb")];
        let def = StructDef::from_columns("events", &columns);
        assert_eq!(def.fields[0].go_type, GoType::Any);
    }
}
