//! Predicate filters over a decoded show listing.
//!
//! Filters take ownership of the listing and return the shows they keep.
//! They only ever remove shows, and survivors keep their relative order.

use crate::models::Show;
use tracing::debug;

/// A single removal step in a [`FilterPipeline`].
pub trait ShowFilter: Send + Sync {
    /// Returns the name of this filter (for logging)
    fn name(&self) -> &str;

    fn apply(&self, shows: Vec<Show>) -> Vec<Show>;
}

/// Keeps shows that have DRM enabled.
pub struct DrmFilter;

impl ShowFilter for DrmFilter {
    fn name(&self) -> &str {
        "DrmFilter"
    }

    fn apply(&self, shows: Vec<Show>) -> Vec<Show> {
        shows.into_iter().filter(|show| show.drm).collect()
    }
}

/// Keeps shows with at least one episode. Zero and negative counts are
/// both treated as having no episodes.
pub struct HasEpisodesFilter;

impl ShowFilter for HasEpisodesFilter {
    fn name(&self) -> &str {
        "HasEpisodesFilter"
    }

    fn apply(&self, shows: Vec<Show>) -> Vec<Show> {
        shows.into_iter().filter(Show::has_episodes).collect()
    }
}

pub fn filter_drm(shows: Vec<Show>) -> Vec<Show> {
    DrmFilter.apply(shows)
}

pub fn filter_has_episodes(shows: Vec<Show>) -> Vec<Show> {
    HasEpisodesFilter.apply(shows)
}

/// Chains filters; each one sees only what the previous one kept.
pub struct FilterPipeline {
    filters: Vec<Box<dyn ShowFilter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// DRM filter first, then the episode filter.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(DrmFilter)
            .add_filter(HasEpisodesFilter)
    }

    pub fn add_filter(mut self, filter: impl ShowFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn apply(&self, shows: Vec<Show>) -> Vec<Show> {
        let mut current = shows;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current);
            debug!(
                "Filter applied: {} ({} -> {} shows)",
                filter.name(),
                before,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
