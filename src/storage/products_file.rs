use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use crate::product::TrackedProduct;

/// Reads the tracked product list. A missing file is an error.
pub fn read_products(path: &Path) -> Result<Vec<TrackedProduct>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read products file {}", path.display()))?;
    let products = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse products file {}", path.display()))?;
    Ok(products)
}

/// Like [`read_products`], but a missing file reads as an empty list.
pub fn read_products_or_default(path: &Path) -> Result<Vec<TrackedProduct>> {
    match fs::metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        _ => read_products(path),
    }
}

/// Writes the list as 4-space indented JSON, replacing the file atomically.
pub fn write_products(path: &Path, products: &[TrackedProduct]) -> Result<()> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    products
        .serialize(&mut serializer)
        .context("Failed to serialize products")?;
    buffer.push(b'\n');

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(&buffer)
        .context("Failed to write products to temporary file")?;
    file.persist(path)
        .with_context(|| format!("Failed to write products file {}", path.display()))?;

    Ok(())
}
