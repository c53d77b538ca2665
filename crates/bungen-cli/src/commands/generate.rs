use std::path::PathBuf;

use anyhow::{Context, Result};
use bungen_core::StructDef;
use bungen_exporter::{persist, render_struct, struct_file_name};
use bungen_introspect::SchemaReader;
use colored::Colorize;

use crate::utils::{load_config, resolve_connection_string, resolve_output_dir};

/// Run the full pipeline: list tables, fetch columns, render and write one
/// Go file per table. Any failure aborts the run; files already written stay
/// on disk.
pub async fn cmd_generate(
    connection_string: Option<String>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let config = load_config()?;
    let connection_string = resolve_connection_string(connection_string, &config);
    let output_dir = resolve_output_dir(output_dir, &config);

    let reader = SchemaReader::connect(&connection_string)
        .await
        .context("open database connection")?;

    let tables = reader.list_tables(config.schema()).await?;
    if tables.is_empty() {
        println!(
            "{} {}",
            "No tables found.".bright_yellow(),
            format!("Schema '{}' is empty; nothing to generate.", config.schema()).bright_white()
        );
        return Ok(());
    }

    for table in &tables {
        let columns = reader.list_columns(table).await?;
        let def = StructDef::from_columns(table, &columns);
        let code = render_struct(&def);
        let path = persist(
            &output_dir,
            &struct_file_name(table),
            config.package(),
            &code,
        )?;
        println!(
            "{} {} -> {}",
            "generated".bright_green(),
            table.bright_cyan(),
            path.display()
        );
    }

    println!(
        "{} {}",
        "Done:".bright_cyan().bold(),
        format!("{} file(s) in {}", tables.len(), output_dir.display()).bright_white()
    );
    Ok(())
}
