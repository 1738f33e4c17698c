//! Values loader demo binary.
//!
//! Responsibilities:
//! - Load a values file against a fixed demo schema.
//! - Print every loaded value, or every accumulated error and unassigned identifier.
//!
//! Does NOT handle:
//! - Command-line arguments. The file is `values.txt` unless
//!   `VALUES_LOADER_FILE` names another one.
//!
//! Invariants:
//! - Logging goes to stderr and is filtered by `RUST_LOG`.
//! - Exits non-zero when the load is not fully successful.

mod env;

use std::path::PathBuf;

use anyhow::bail;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use values_loader::constants::{DEFAULT_VALUES_FILE, VALUES_FILE_ENV_VAR};
use values_loader::{Schema, ValueType, ValuesLoader};

fn demo_schema() -> Schema {
    Schema::new()
        .with_entry("real1", ValueType::Float)
        .with_entry("real2", ValueType::Float)
        .with_entry("real3", ValueType::Float)
        .with_entry("invalid_real", ValueType::Float)
        .with_entry("boolean1", ValueType::Boolean)
        .with_entry("boolean2", ValueType::Boolean)
        .with_entry("boolean3", ValueType::Boolean)
        .with_entry("boolean4", ValueType::Boolean)
        .with_entry("invalid_boolean", ValueType::Boolean)
        .with_entry("integer1", ValueType::Integer)
        .with_entry("integer2", ValueType::Integer)
        .with_entry("integer3", ValueType::Integer)
        .with_entry("invalid_integer", ValueType::Integer)
        .with_entry("str1", ValueType::String)
        .with_entry("str2", ValueType::String)
        .with_entry("str3", ValueType::String)
        .with_entry("str4", ValueType::String)
        .with_entry("str5", ValueType::String)
        .with_entry("empty_string", ValueType::String)
        .with_entry("not_found", ValueType::Boolean)
}

fn values_file_path() -> PathBuf {
    env::env_var_or_none(VALUES_FILE_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_VALUES_FILE))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = values_file_path();
    tracing::info!(path = %path.display(), "Loading values file");

    let result = ValuesLoader::new(demo_schema()).load(&path);

    for (identifier, value) in result.values() {
        println!("{identifier} = {value}");
    }

    if !result.is_success() {
        for error in result.errors() {
            eprintln!("{error}");
        }
        for identifier in result.missing_identifiers() {
            eprintln!("No value was given for '{identifier}'.");
        }
        bail!(
            "loading '{}' failed with {} error(s) and {} unassigned identifier(s)",
            path.display(),
            result.load_errors().len(),
            result.missing_identifiers().len()
        );
    }

    Ok(())
}
