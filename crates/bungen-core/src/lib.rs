pub mod column;
pub mod mapping;
pub mod structdef;

pub use column::{ColumnInfo, clean_identifier};
pub use mapping::{GoType, map_sql_type};
pub use structdef::{FieldMapping, StructDef};
