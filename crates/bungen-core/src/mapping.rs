/// Go type produced for a SQL column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoType {
    Int,
    Int64,
    String,
    Bool,
    Time,
    /// Fallback for types outside the fixed mapping table.
    Any,
}

impl GoType {
    /// The Go source spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoType::Int => "int",
            GoType::Int64 => "int64",
            GoType::String => "string",
            GoType::Bool => "bool",
            GoType::Time => "time.Time",
            GoType::Any => "interface{}",
        }
    }
}

/// Map a raw catalog type name to its Go counterpart.
///
/// Total over all inputs: anything outside the fixed table falls back to
/// [`GoType::Any`] and loses its precise shape.
pub fn map_sql_type(sql_type: &str) -> GoType {
    match sql_type {
        "integer" => GoType::Int,
        "bigint" => GoType::Int64,
        "text" | "character varying" => GoType::String,
        "boolean" => GoType::Bool,
        "timestamp without time zone" | "date" => GoType::Time,
        _ => GoType::Any,
    }
}
