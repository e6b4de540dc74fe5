//! Project filtering for the portfolio gallery
//!
//! A filter holds one active tag (or the "All" sentinel) and narrows the
//! project list to entries carrying that tag. An unknown tag is not an
//! error; it simply matches nothing.

use super::catalog::Project;

/// Sentinel filter value that shows every project
pub const ALL_PROJECTS: &str = "All";

/// Active tag selection for the portfolio screen
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    active: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            active: ALL_PROJECTS.to_string(),
        }
    }
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Set the active tag. Any string is accepted; filtering with a tag no
    /// project carries yields an empty list.
    pub fn set(&mut self, tag: &str) {
        self.active = tag.to_string();
    }

    /// Projects visible under the active tag
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        if self.active == ALL_PROJECTS {
            return projects.iter().collect();
        }
        projects
            .iter()
            .filter(|p| p.tags.iter().any(|t| t == &self.active))
            .collect()
    }

    /// Filter bar options: "All" plus each project's leading tag, in
    /// first-seen order
    pub fn options(projects: &[Project]) -> Vec<String> {
        let mut options = vec![ALL_PROJECTS.to_string()];
        for project in projects {
            if let Some(tag) = project.tags.first() {
                if !options.iter().any(|o| o == tag) {
                    options.push(tag.clone());
                }
            }
        }
        options
    }

    /// Advance to the next option in the filter bar, wrapping around
    pub fn cycle(&mut self, options: &[String]) {
        if options.is_empty() {
            return;
        }
        let current = options.iter().position(|o| o == &self.active).unwrap_or(0);
        self.set(&options[(current + 1) % options.len()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, title: &str, tags: &[&str]) -> Project {
        Project {
            id,
            title: title.to_string(),
            client: "Client".to_string(),
            description: "Description".to_string(),
            video_url: "https://example.com/embed".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            duration: None,
            year: None,
            views: None,
        }
    }

    fn sample_projects() -> Vec<Project> {
        vec![
            project(1, "Identity Film", &["Imagefilm", "Corporate"]),
            project(2, "Launch Campaign", &["Werbefilm", "Product"]),
            project(3, "Fashion Series", &["Social Media", "Fashion"]),
        ]
    }

    #[test]
    fn test_filter_matches_single_tag() {
        let projects = sample_projects();
        let mut filter = ProjectFilter::new();
        filter.set("Social Media");

        let visible = filter.apply(&projects);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Fashion Series");
    }

    #[test]
    fn test_filter_all_shows_everything() {
        let projects = sample_projects();
        let filter = ProjectFilter::new();
        assert_eq!(filter.active(), ALL_PROJECTS);
        assert_eq!(filter.apply(&projects).len(), 3);
    }

    #[test]
    fn test_filter_unknown_tag_is_empty_not_an_error() {
        let projects = sample_projects();
        let mut filter = ProjectFilter::new();
        filter.set("Nonexistent");
        assert!(filter.apply(&projects).is_empty());
    }

    #[test]
    fn test_filter_matches_non_leading_tags() {
        let projects = sample_projects();
        let mut filter = ProjectFilter::new();
        filter.set("Fashion");
        assert_eq!(filter.apply(&projects).len(), 1);
    }

    #[test]
    fn test_options_derive_from_leading_tags() {
        let projects = sample_projects();
        let options = ProjectFilter::options(&projects);
        assert_eq!(options, vec!["All", "Imagefilm", "Werbefilm", "Social Media"]);
    }

    #[test]
    fn test_options_deduplicate() {
        let projects = vec![
            project(1, "A", &["Imagefilm"]),
            project(2, "B", &["Imagefilm"]),
        ];
        let options = ProjectFilter::options(&projects);
        assert_eq!(options, vec!["All", "Imagefilm"]);
    }

    #[test]
    fn test_cycle_wraps_around() {
        let projects = sample_projects();
        let options = ProjectFilter::options(&projects);
        let mut filter = ProjectFilter::new();

        filter.cycle(&options);
        assert_eq!(filter.active(), "Imagefilm");
        filter.cycle(&options);
        filter.cycle(&options);
        assert_eq!(filter.active(), "Social Media");
        filter.cycle(&options);
        assert_eq!(filter.active(), ALL_PROJECTS);
    }
}
