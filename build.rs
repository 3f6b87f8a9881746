//! Build script for chartlist.
//!
//! Places the configuration template next to the `.env` file chartlist
//! reads at startup, so users can copy it instead of looking up variable
//! names:
//!
//! - Linux: `~/.local/share/chartlist/.env.example`
//! - macOS: `~/Library/Application Support/chartlist/.env.example`
//! - Windows: `%LOCALAPPDATA%/chartlist/.env.example`
//!
//! A missing template only produces a cargo warning. An existing `.env` is
//! never touched.

use std::{env, fs, path::PathBuf};

const TEMPLATE: &str = ".env.example";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={}", TEMPLATE);

    let template = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?).join(TEMPLATE);
    if !template.is_file() {
        println!(
            "cargo:warning={} not found at {}",
            TEMPLATE,
            template.display()
        );
        return Ok(());
    }

    let mut data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.push("chartlist");
    fs::create_dir_all(&data_dir)?;

    fs::copy(&template, data_dir.join(TEMPLATE))?;
    Ok(())
}
