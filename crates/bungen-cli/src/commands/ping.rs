use anyhow::{Context, Result};
use bungen_introspect::SchemaReader;
use colored::Colorize;

use crate::utils::{load_config, resolve_connection_string};

pub async fn cmd_ping(connection_string: Option<String>) -> Result<()> {
    let config = load_config()?;
    let connection_string = resolve_connection_string(connection_string, &config);

    let reader = SchemaReader::connect(&connection_string)
        .await
        .context("open database connection")?;
    reader.ping().await?;

    println!("{}", "database connection ok".bright_green());
    Ok(())
}
