//! Catalog manifests on disk (TOML or JSON).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{Module, TypeInfo};

/// Errors that can occur when loading a catalog manifest.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No manifest file or directory at '{path}'")]
    NotFound { path: PathBuf },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse manifest '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported manifest format '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid manifest '{path}': {message}")]
    Invalid { path: PathBuf, message: String },
}

#[derive(Debug, Deserialize)]
struct ModuleManifest {
    name: String,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    types: Vec<TypeManifest>,
}

#[derive(Debug, Deserialize)]
struct TypeManifest {
    name: String,
    #[serde(default)]
    namespace: Option<String>,
    #[serde(default)]
    element: bool,
    #[serde(default)]
    template: Option<String>,
}

#[derive(Clone, Copy)]
enum Format {
    Toml,
    Json,
}

fn format_of(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("toml") {
        Some(Format::Toml)
    } else if ext.eq_ignore_ascii_case("json") {
        Some(Format::Json)
    } else {
        None
    }
}

/// Whether `path` has a manifest extension.
pub fn is_manifest(path: &Path) -> bool {
    format_of(path).is_some()
}

/// Manifest files directly inside `dir`, sorted by path.
pub fn manifest_files(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let read_err = |source| CatalogError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && is_manifest(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load one manifest file into a [`Module`].
pub fn load_manifest(path: &Path) -> Result<Module, CatalogError> {
    let format = format_of(path).ok_or_else(|| CatalogError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let manifest: ModuleManifest = match format {
        Format::Toml => toml::from_str(&content).map_err(|e| CatalogError::ParseToml {
            path: path.to_path_buf(),
            source: e,
        })?,
        Format::Json => serde_json::from_str(&content).map_err(|e| CatalogError::ParseJson {
            path: path.to_path_buf(),
            source: e,
        })?,
    };

    into_module(manifest).map_err(|message| CatalogError::Invalid {
        path: path.to_path_buf(),
        message,
    })
}

fn into_module(manifest: ModuleManifest) -> Result<Module, String> {
    if manifest.name.trim().is_empty() {
        return Err("module name must not be empty".to_string());
    }
    let full_name = manifest
        .full_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| manifest.name.clone());

    let mut types = Vec::with_capacity(manifest.types.len());
    for (index, ty) in manifest.types.into_iter().enumerate() {
        if ty.name.trim().is_empty() {
            return Err(format!("type #{} has an empty name", index + 1));
        }
        types.push(TypeInfo {
            name: ty.name,
            namespace: ty.namespace.filter(|ns| !ns.is_empty()),
            module: full_name.clone(),
            element: ty.element,
            template: ty.template,
        });
    }

    Ok(Module {
        name: manifest.name,
        full_name,
        types,
    })
}
