// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::data::{ResultTable, SearchQuery};
use crate::error::Result;

/// Render `table` in `format` and write it next to the other exports.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    query: &SearchQuery,
    table: &ResultTable,
    format: ExportFormat,
) -> Result<PathBuf> {
    let path = export.out_path(query, format);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = match format {
        ExportFormat::Csv => crate::csv::to_export_string(table)?,
        ExportFormat::Html => crate::html::render(table, &query.text)?,
    };

    fs::write(&path, contents)?;
    info!(path = %path.display(), rows = table.len(), ?format, "export written");
    Ok(path)
}

/// Write each requested format; stops at the first failure.
pub fn write_exports(
    export: &ExportOptions,
    query: &SearchQuery,
    table: &ResultTable,
    formats: &[ExportFormat],
) -> Result<Vec<PathBuf>> {
    formats
        .iter()
        .map(|&f| write_export(export, query, table, f))
        .collect()
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
