// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog export and settings import.
//!
//! Both directions support YAML and JSON, picked by file extension.

use crate::models::catalog::Catalog;
use crate::settings::Settings;
use anyhow::{bail, Result};
use std::path::Path;

/// Serialization format, derived from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

/// Export the catalog's projects to YAML format.
pub fn export_yaml(catalog: &Catalog, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(catalog.projects())?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export the catalog's projects to JSON format.
pub fn export_json(catalog: &Catalog, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.projects())?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Export the catalog, choosing the format from the extension of `path`.
pub fn export_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    match Format::from_path(path)? {
        Format::Yaml => export_yaml(catalog, path),
        Format::Json => export_json(catalog, path),
    }
}

/// Import settings from a YAML or JSON file.
pub fn import_settings(path: &Path) -> Result<Settings> {
    let format = Format::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    let settings = match format {
        Format::Yaml => serde_yaml::from_str(&text)?,
        Format::Json => serde_json::from_str(&text)?,
    };
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::Project;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.yml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.yaml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.json")).unwrap(), Format::Json);
        assert!(Format::from_path(Path::new("a.txt")).is_err());
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_export_json_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let catalog = Catalog::builtin().unwrap();

        export_catalog(&catalog, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let projects: Vec<Project> = serde_json::from_str(&text).unwrap();
        assert_eq!(Catalog::new(projects).unwrap(), catalog);
    }

    #[test]
    fn test_export_yaml_uses_original_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");

        export_catalog(&Catalog::builtin().unwrap(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("githubUrl: https://github.com/kechprog/dwl"));
        assert!(text.contains("keyFeatures:"));
    }

    #[test]
    fn test_export_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        assert!(export_catalog(&Catalog::builtin().unwrap(), &path).is_err());
        assert!(!path.exists());
    }
}
