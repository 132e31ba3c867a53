// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The static project catalog.
//!
//! Built once at startup, validated (non-empty, unique ids) and never
//! modified afterwards.

use super::project::Project;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one project")]
    Empty,
    #[error("duplicate project id '{0}'")]
    DuplicateId(String),
}

/// Ordered, read-only list of projects.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        if projects.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }

        Ok(Self { projects })
    }

    /// The projects shipped with the application.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_projects())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Never true for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    /// Look a project up by id.
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn builtin_projects() -> Vec<Project> {
    vec![
        Project::new(
            "portfolio_optimizer",
            "portfolio_optimizer",
            "Portfolio optimization using Modern Portfolio Theory with historical data analysis",
            "https://github.com/kechprog/portfolio_optimizer",
        )
        .with_extended_description(
            "A comprehensive portfolio optimization tool implementing Modern Portfolio Theory \
             to help investors make data-driven allocation decisions based on historical \
             performance data.",
        )
        .with_image("https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=800&h=400&fit=crop")
        .with_key_features(&[
            "Multiple allocation strategies (equal weight, minimum variance, maximum Sharpe ratio)",
            "Configurable rebalancing periods",
            "Excel export functionality for analysis",
        ])
        .with_tech_stack(&["Python", "Pandas", "NumPy"])
        .with_live_url("https://portfolio-optimizer.app"),
        Project::new(
            "trends",
            "trends",
            "ML model for market regime classification with 71% OOS accuracy",
            "https://github.com/kechprog/trends",
        )
        .with_extended_description(
            "A machine learning model that classifies market regimes with impressive \
             out-of-sample accuracy, helping traders identify trend directions and durations.",
        )
        .with_image("https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=400&fit=crop")
        .with_key_features(&[
            "71% out-of-sample accuracy",
            "±2 day duration accuracy",
            "10-17 day average trend predictions",
        ])
        .with_tech_stack(&["Python", "PyTorch", "Transformers"]),
        Project::new(
            "trading_strat",
            "trading_strat",
            "Advanced backtesting framework with interactive visualizations",
            "https://github.com/kechprog/trading_strat",
        )
        .with_extended_description(
            "A sophisticated backtesting framework designed for systematic trading strategy \
             development, featuring comprehensive visualization tools and performance analytics.",
        )
        .with_image("https://images.unsplash.com/photo-1642790106117-e829e14a795f?w=800&h=400&fit=crop")
        .with_key_features(&[
            "Interactive HTML visualizations",
            "Comprehensive equity curve analysis",
            "Multiple strategy support and comparison",
        ])
        .with_tech_stack(&["Python", "Pandas"]),
        Project::new(
            "chess_engine",
            "chess_engine",
            "High-performance chess engine built with Rust and OpenGL rendering",
            "https://github.com/kechprog/chess_engine",
        )
        .with_extended_description(
            "A modern chess engine implementation combining Rust's performance with OpenGL \
             graphics for smooth, real-time gameplay visualization.",
        )
        .with_image("https://images.unsplash.com/photo-1529699211952-734e80c4d42b?w=800&h=400&fit=crop")
        .with_key_features(&[
            "Complete chess rules implementation",
            "Move validation and legal move generation",
            "OpenGL-based rendering for smooth graphics",
        ])
        .with_tech_stack(&["Rust", "OpenGL"])
        .with_live_url("https://kechprog.github.io/chess_engine/"),
        Project::new(
            "dwl",
            "dwl",
            "Customized fork of dwl Wayland window manager",
            "https://github.com/kechprog/dwl",
        )
        .with_extended_description(
            "A personalized fork of the dwl Wayland compositor, featuring custom patches and \
             configurations for an optimized Linux desktop environment.",
        )
        .with_image("https://images.unsplash.com/photo-1629654297299-c8506221ca97?w=800&h=400&fit=crop")
        .with_key_features(&[
            "Custom patches and modifications",
            "Lightweight and performant",
            "2 GitHub stars",
        ])
        .with_tech_stack(&["C"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin().unwrap();
        assert_eq!(builtin.len(), 5);
        assert!(!builtin.is_empty());
        assert_eq!(builtin.get(0).map(|p| p.id.as_str()), Some("portfolio_optimizer"));
        assert!(builtin.get(5).is_none());
    }

    #[test]
    fn test_builtin_order() {
        let ids: Vec<_> = Catalog::builtin().unwrap().iter().map(|p| p.id.clone()).collect();
        assert_eq!(
            ids,
            vec!["portfolio_optimizer", "trends", "trading_strat", "chess_engine", "dwl"]
        );
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::builtin().unwrap();
        let chess = catalog.find("chess_engine").unwrap();
        assert_eq!(chess.tech_stack, vec!["Rust", "OpenGL"]);
        assert!(chess.live_url.is_some());
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = Project::new("same", "A", "first", "https://github.com/x/a");
        let b = Project::new("same", "B", "second", "https://github.com/x/b");
        assert_eq!(
            Catalog::new(vec![a, b]),
            Err(CatalogError::DuplicateId("same".to_string()))
        );
    }
}
