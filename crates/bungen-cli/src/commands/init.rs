use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use bungen_config::BungenConfig;

pub fn cmd_init() -> Result<()> {
    let path = PathBuf::from("bungen.json");
    if path.exists() {
        bail!("bungen.json already exists");
    }

    let config = BungenConfig::default();
    let json = serde_json::to_string_pretty(&config).context("serialize default config")?;
    fs::write(&path, json).context("write bungen.json")?;
    println!("created {:?}", path);
    Ok(())
}
