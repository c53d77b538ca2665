use anyhow::{Context, Result};
use bungen_introspect::SchemaReader;
use colored::Colorize;
use serde_json::json;

use crate::utils::{load_config, resolve_connection_string};

/// Print the introspected schema without writing any files.
pub async fn cmd_inspect(connection_string: Option<String>, json_output: bool) -> Result<()> {
    let config = load_config()?;
    let connection_string = resolve_connection_string(connection_string, &config);

    let reader = SchemaReader::connect(&connection_string)
        .await
        .context("open database connection")?;

    let tables = reader.list_tables(config.schema()).await?;

    if json_output {
        let mut entries = Vec::new();
        for table in &tables {
            let columns = reader.list_columns(table).await?;
            entries.push(json!({ "table": table, "columns": columns }));
        }
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Schema:".bright_cyan().bold(),
        config.schema().bright_magenta()
    );
    println!(
        "{} {}",
        "Tables:".bright_cyan(),
        tables.len().to_string().bright_yellow()
    );
    println!();

    for table in &tables {
        let columns = reader.list_columns(table).await?;
        println!("{}", table.bright_green().bold());
        for col in &columns {
            println!("  {} {}", col.name.bright_white(), col.sql_type);
        }
        println!();
    }

    Ok(())
}
