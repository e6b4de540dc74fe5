//! Content catalog data structures
//!
//! This module contains the core data structures for loading and working
//! with the catalog.json content tree: brand, services, achievements,
//! testimonials, timeline eras, and portfolio projects.

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default catalog as fallback
const EMBEDDED_CATALOG: &str = include_str!("../../catalog.json");

/// Brand identity shown on the landing hero
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
}

/// Short introduction used across screens
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct About {
    pub description: String,
}

/// A service offering (imagefilm, werbefilm, social media content)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// A headline number for the achievements row
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Achievement {
    pub number: String,
    pub label: String,
    pub description: String,
    pub icon: String,
}

/// A client quote with a star rating
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub position: String,
    pub company: String,
    pub quote: String,
    pub rating: u8,
}

/// One era of the journey timeline
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TimelineEntry {
    pub title: String,
    pub year: String,
    pub description: String,
    #[serde(default)]
    pub details: Option<String>,
    pub icon: String,
}

/// A portfolio project; video playback is delegated to an external player
/// via `video_url`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub client: String,
    pub description: String,
    pub video_url: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub views: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Portfolio {
    pub projects: Vec<Project>,
}

/// Read-only content tree consumed by all screens. Loaded once at startup
/// and replaced wholesale when the backing file changes.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Catalog {
    pub brand: Brand,
    pub about: About,
    pub services: Vec<Service>,
    pub achievements: Vec<Achievement>,
    pub testimonials: Vec<Testimonial>,
    pub timeline: Vec<TimelineEntry>,
    pub portfolio: Portfolio,
}

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Parse the embedded default catalog
    pub fn embedded() -> io::Result<Self> {
        serde_json::from_str(EMBEDDED_CATALOG)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Resolve the catalog in order of priority:
    /// 1. Explicit `--catalog` path (must load; errors are surfaced)
    /// 2. ./catalog.json (local project customization)
    /// 3. `<config dir>/shortmedia/catalog.json` (global user config)
    /// 4. Embedded default
    ///
    /// Returns the catalog plus the path it came from, or `None` for the
    /// embedded fallback (nothing to watch in that case).
    pub fn find(explicit: Option<&Path>) -> io::Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            let catalog = Self::load(path)?;
            return Ok((catalog, Some(path.to_path_buf())));
        }

        let local_path = PathBuf::from("catalog.json");
        if local_path.exists() {
            if let Ok(catalog) = Self::load(&local_path) {
                return Ok((catalog, Some(local_path)));
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_path = config_dir.join("shortmedia").join("catalog.json");
            if global_path.exists() {
                if let Ok(catalog) = Self::load(&global_path) {
                    return Ok((catalog, Some(global_path)));
                }
            }
        }

        Ok((Self::embedded()?, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_temp_catalog_file(content: &str) -> (tempfile::NamedTempFile, PathBuf) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    const MINIMAL_CATALOG: &str = r#"{
        "brand": {"name": "Shortmedia", "tagline": "Cinematic Storytelling"},
        "about": {"description": "Videographer."},
        "services": [
            {"title": "Imagefilme", "description": "Corporate films", "icon": "camera"}
        ],
        "achievements": [
            {"number": "50+", "label": "Projects", "description": "Productions", "icon": "projects"}
        ],
        "testimonials": [
            {"name": "Sarah", "position": "Director", "company": "Tech GmbH", "quote": "Great.", "rating": 5}
        ],
        "timeline": [
            {"title": "First Camera", "year": "2013", "description": "The beginning.", "icon": "camera"}
        ],
        "portfolio": {
            "projects": [
                {
                    "id": 1,
                    "title": "Identity Film",
                    "client": "Tech GmbH",
                    "description": "Brand story.",
                    "videoUrl": "https://example.com/embed/1",
                    "tags": ["Imagefilm"],
                    "duration": "3:45"
                }
            ]
        }
    }"#;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.brand.name, "Shortmedia");
        assert_eq!(catalog.services.len(), 3);
        assert_eq!(catalog.achievements.len(), 4);
        assert_eq!(catalog.testimonials.len(), 3);
        assert_eq!(catalog.timeline.len(), 4);
        assert_eq!(catalog.portfolio.projects.len(), 3);
    }

    #[test]
    fn test_catalog_load_success() {
        let (_file, path) = create_temp_catalog_file(MINIMAL_CATALOG);

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.brand.tagline, "Cinematic Storytelling");
        assert_eq!(catalog.timeline[0].title, "First Camera");
        assert_eq!(catalog.timeline[0].details, None);
        assert_eq!(
            catalog.portfolio.projects[0].video_url,
            "https://example.com/embed/1"
        );
        assert_eq!(catalog.portfolio.projects[0].year, None);
    }

    #[test]
    fn test_catalog_load_file_not_found() {
        let path = PathBuf::from("/nonexistent/path/catalog.json");
        let result = Catalog::load(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_catalog_load_invalid_json() {
        let (_file, path) = create_temp_catalog_file("{ invalid json }");

        let result = Catalog::load(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_catalog_load_missing_required_field() {
        // Missing 'brand' field
        let json = r#"{
            "about": {"description": "Videographer."},
            "services": [],
            "achievements": [],
            "testimonials": [],
            "timeline": [],
            "portfolio": {"projects": []}
        }"#;
        let (_file, path) = create_temp_catalog_file(json);

        let result = Catalog::load(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_find_prefers_explicit_path() {
        let (_file, path) = create_temp_catalog_file(MINIMAL_CATALOG);

        let (catalog, source) = Catalog::find(Some(&path)).unwrap();
        assert_eq!(catalog.timeline.len(), 1);
        assert_eq!(source, Some(path));
    }

    #[test]
    fn test_find_explicit_path_must_exist() {
        let path = PathBuf::from("/nonexistent/path/catalog.json");
        let result = Catalog::find(Some(&path));
        assert!(result.is_err());
    }
}
