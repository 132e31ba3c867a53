// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project records shown in the carousel and on the projects page.

use serde::{Deserialize, Serialize};

/// A showcased project. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub extended_description: String,
    /// Cover image URI. Never fetched; cards use generated artwork.
    pub image: String,
    pub key_features: Vec<String>,
    pub tech_stack: Vec<String>,
    pub github_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

impl Project {
    /// Create a project with the required fields; lists start empty.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        github_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            extended_description: String::new(),
            image: String::new(),
            key_features: Vec::new(),
            tech_stack: Vec::new(),
            github_url: github_url.into(),
            live_url: None,
        }
    }

    pub fn with_extended_description(mut self, text: impl Into<String>) -> Self {
        self.extended_description = text.into();
        self
    }

    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image = uri.into();
        self
    }

    pub fn with_key_features(mut self, features: &[&str]) -> Self {
        self.key_features = features.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_tech_stack(mut self, tags: &[&str]) -> Self {
        self.tech_stack = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_live_url(mut self, url: impl Into<String>) -> Self {
        self.live_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_and_skips_missing_live_url() {
        let project = Project::new("dwl", "dwl", "window manager", "https://github.com/x/dwl")
            .with_tech_stack(&["C"]);
        let json = serde_json::to_string(&project).unwrap();

        assert!(json.contains("\"githubUrl\""));
        assert!(json.contains("\"techStack\":[\"C\"]"));
        assert!(json.contains("\"extendedDescription\""));
        assert!(!json.contains("liveUrl"));
    }

    #[test]
    fn test_parses_original_field_names() {
        let json = r#"{
            "id": "trends",
            "title": "trends",
            "description": "ML model",
            "extendedDescription": "Longer text",
            "image": "https://example.com/a.jpg",
            "keyFeatures": ["fast"],
            "techStack": ["Python"],
            "githubUrl": "https://github.com/x/trends",
            "liveUrl": "https://trends.example"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.key_features, vec!["fast"]);
        assert_eq!(project.live_url.as_deref(), Some("https://trends.example"));
    }
}
