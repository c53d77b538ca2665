//! Helpers to render introspected table definitions into Go source files
//! carrying `uptrace/bun` model structs.

pub mod error;
pub mod gobun;
pub mod persist;

pub use error::ExportError;
pub use gobun::{render_struct, struct_file_name};
pub use persist::persist;
