use bungen_core::StructDef;

/// Render a single table into a Go struct declaration.
///
/// One line per field: tab indent, field name, mapped Go type, and a bun tag
/// carrying the cleaned column name. The same definition always renders to
/// byte-identical text. An empty field list yields a declaration with an
/// empty body.
pub fn render_struct(def: &StructDef) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("type {} struct {{", def.table));

    for field in &def.fields {
        lines.push(format!(
            "\t{} {} `bun:\"{}\"`",
            field.field_name,
            field.go_type.as_str(),
            field.field_name
        ));
    }

    lines.push("}".into());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// File name for a table's generated struct.
pub fn struct_file_name(table: &str) -> String {
    format!("{table}_struct.go")
}
