// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::catalog::Catalog;
use crate::config::options::ExportOptions;
use crate::error::CatalogError;

/// Write every file `export.format` asks for. Returns the paths written,
/// in write order.
pub fn write_export(export: &ExportOptions, catalog: &Catalog) -> Result<Vec<PathBuf>, CatalogError> {
    ensure_directory(export.out_dir())?;
    let mut written = Vec::new();

    if export.format.wants_json() {
        let path = export.path_for("json");
        write_catalog_json(&path, catalog)?;
        written.push(path);
    }
    if export.format.wants_csv() {
        let path = export.path_for("csv");
        write_catalog_csv(&path, catalog)?;
        written.push(path);
    }
    Ok(written)
}

/// Pretty-printed JSON; create/truncate.
pub fn write_catalog_json(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let mut out = create(path)?;
    serde_json::to_writer_pretty(&mut out, catalog)?;
    writeln!(out)?;
    out.flush()?;
    tracing::info!("wrote {} resource(s) to {}", catalog.total_resources, path.display());
    Ok(())
}

/// Header plus one row per resource; create/truncate.
pub fn write_catalog_csv(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let mut out = create(path)?;
    crate::csv::write_catalog(&mut out, catalog)?;
    out.flush()?;
    tracing::info!("wrote {} row(s) to {}", catalog.total_resources, path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), CatalogError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(CatalogError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/* ---------- helpers ---------- */

fn create(path: &Path) -> Result<BufWriter<File>, CatalogError> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}
