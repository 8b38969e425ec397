//! Maps a scroll offset to the navigation item that should be highlighted.
//!
//! Geometry is never read here. The host measures the page into a
//! [`SectionRegistry`] and feeds scroll samples in; the resolver only
//! compares numbers.

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub order: usize,
    pub top_offset: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, order: usize, top_offset: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            order,
            top_offset,
            height,
        }
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, position: f64) -> bool {
        self.top_offset <= position && position < self.top_offset + self.height
    }
}

/// Snapshot of the page sections in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(mut sections: Vec<Section>) -> Self {
        sections.sort_by_key(|s| s.order);
        Self { sections }
    }

    /// Builds a registry from the configured ids, asking `probe` for the
    /// `(top, height)` of each one. Ids the page does not have are skipped.
    pub fn measure<I, S, F>(ids: I, mut probe: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&str) -> Option<(f64, f64)>,
    {
        let sections = ids
            .into_iter()
            .enumerate()
            .filter_map(|(order, id)| {
                let id = id.as_ref();
                match probe(id) {
                    Some((top, height)) => Some(Section::new(id, order, top, height)),
                    None => {
                        debug!("scroll spy: no element for section '{}', skipping", id);
                        None
                    }
                }
            })
            .collect();
        Self::new(sections)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }
}

/// First section (in document order) containing `scroll_y + offset` wins.
/// With no match the previous id is kept.
pub fn resolve<'a>(
    scroll_y: f64,
    sections: &'a [Section],
    offset: f64,
    previous: &'a str,
) -> &'a str {
    let position = scroll_y + offset;
    sections
        .iter()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
        .unwrap_or(previous)
}

pub fn past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollSpyConfig {
    /// How far past a section's top edge the viewport must be before the
    /// section counts as entered. Absorbs the fixed header.
    pub offset: f64,
    pub default_id: String,
    pub section_ids: Vec<String>,
    pub scrolled_threshold: f64,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            offset: 100.0,
            default_id: "home".to_string(),
            section_ids: ["home", "about", "skills", "projects", "contact"]
                .iter()
                .map(|id| id.to_string())
                .collect(),
            scrolled_threshold: 50.0,
        }
    }
}

/// Per-mount scroll spy state.
///
/// `active_id` is always either `default_id` or an id from the registry
/// most recently observed.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    offset: f64,
    default_id: String,
    active_id: String,
    stopped: bool,
}

impl ScrollSpy {
    pub fn new(config: &ScrollSpyConfig) -> Self {
        Self {
            offset: config.offset,
            default_id: config.default_id.clone(),
            active_id: config.default_id.clone(),
            stopped: false,
        }
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn is_home(&self) -> bool {
        self.active_id == self.default_id
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Feeds one scroll sample. Returns the new id only when it changed.
    pub fn observe(&mut self, scroll_y: f64, registry: &SectionRegistry) -> Option<&str> {
        if self.stopped {
            return None;
        }

        let next = if registry.is_empty() {
            self.default_id.as_str()
        } else {
            let resolved = resolve(scroll_y, registry.sections(), self.offset, &self.active_id);
            if resolved == self.active_id && !registry.contains_id(resolved) {
                // previous id vanished on re-measure
                self.default_id.as_str()
            } else {
                resolved
            }
        };

        if next == self.active_id {
            return None;
        }
        self.active_id = next.to_string();
        Some(self.active_id.as_str())
    }

    /// Jump straight to a section, as a nav click does.
    pub fn select(&mut self, id: &str, registry: &SectionRegistry) -> bool {
        if self.stopped || !(id == self.default_id || registry.contains_id(id)) {
            return false;
        }
        self.active_id = id.to_string();
        true
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }
}
