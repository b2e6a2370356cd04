//! Build script for the chart snapshot CLI.
//!
//! Copies the `.env.example` template from the crate root into the user's
//! local data directory, next to where `config::load_env` looks for `.env`.
//!
//! - Linux: `~/.local/share/chartsnap/.env.example`
//! - macOS: `~/Library/Application Support/chartsnap/.env.example`
//! - Windows: `%LOCALAPPDATA%/chartsnap/.env.example`
//!
//! Any failure only produces a cargo warning.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=.env.example");

    if let Err(e) = copy_env_template() {
        println!("cargo:warning=could not copy .env.example: {}", e);
    }
}

fn copy_env_template() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("chartsnap");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
