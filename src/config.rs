use std::num::NonZeroUsize;
use std::rc::Rc;

use serde::Deserialize;

use crate::error::ConfigError;

/// Duration of the project card opacity/scale transition.
pub const CARD_TRANSITION_MS: u32 = 700;

/// How long the carousel stays locked after a slide request. Derived from the
/// card transition so the two cannot drift apart.
pub const SETTLE_DELAY_MS: u32 = CARD_TRANSITION_MS / 2;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "-50px 0px";

pub const SECTION_OFFSET_PX: f64 = 60.0;
pub const SECTION_DURATION_SECS: f64 = 0.8;
pub const SECTION_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

pub const TEXT_OFFSET_PX: f64 = 30.0;
pub const TOKEN_OFFSET_PX: f64 = 20.0;
pub const TEXT_DURATION_SECS: f64 = 0.6;
pub const TEXT_EASING: &str = "ease-out";
pub const STAGGER_STEP_SECS: f64 = 0.1;

const PROJECTS_JSON: &str = include_str!("../assets/projects.json");

#[cfg(debug_assertions)]
fn asset_base() -> &'static str {
    "/assets" // `trunk serve` mounts assets at the site root
}

#[cfg(not(debug_assertions))]
fn asset_base() -> &'static str {
    "assets" // relative, so a release build can be hosted under any sub-path
}

pub fn asset_url(name: &str) -> String {
    format!("{}/{}", asset_base(), name)
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Fixed, non-empty list of featured projects. Cheap to clone.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectList(Rc<[Project]>);

impl ProjectList {
    pub fn new(projects: Vec<Project>) -> Result<Self, ConfigError> {
        if projects.is_empty() {
            return Err(ConfigError::Empty);
        }
        Ok(Self(projects.into()))
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let projects: Vec<Project> = serde_json::from_str(raw)?;
        Self::new(projects)
    }

    pub fn len(&self) -> NonZeroUsize {
        // non-empty is checked in `new`
        NonZeroUsize::new(self.0.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn get(&self, index: usize) -> &Project {
        &self.0[index % self.0.len()]
    }

    /// The two projects shown for a given carousel window.
    pub fn pair(&self, window: [usize; 2]) -> [&Project; 2] {
        [self.get(window[0]), self.get(window[1])]
    }
}

pub fn load_projects() -> Result<ProjectList, ConfigError> {
    ProjectList::from_json(PROJECTS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_projects_load() {
        let projects = load_projects().unwrap();
        assert_eq!(projects.len().get(), 3);
        assert_eq!(projects.get(0).title, "Green Valley Commons");
        assert_eq!(projects.get(2).image, "project3.png");
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(ProjectList::from_json("[]"), Err(ConfigError::Empty)));
    }

    #[test]
    fn malformed_list_is_rejected() {
        let err = ProjectList::from_json(r#"[{"title": "x"}]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn settle_delay_tracks_card_transition() {
        assert_eq!(SETTLE_DELAY_MS, 350);
        assert!(SETTLE_DELAY_MS <= CARD_TRANSITION_MS);
    }

    #[test]
    fn asset_url_joins_base() {
        assert_eq!(asset_url("logo.png"), format!("{}/logo.png", asset_base()));
        assert!(!asset_url("logo.png").contains("//"));
        #[cfg(debug_assertions)]
        assert_eq!(asset_url("logo.png"), "/assets/logo.png");
    }
}
