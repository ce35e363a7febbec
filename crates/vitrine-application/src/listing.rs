//! Listing view state.
//!
//! One reusable state holder for the product, service, order, and news
//! listings: it owns the materialized collection and the filter criteria,
//! and implements the empty-result reset policy.

use vitrine_core::catalog::filter::{filter, DimensionSelection, FilterCriteria, Filterable};

/// State of one filterable listing view.
#[derive(Debug, Clone, Default)]
pub struct Listing<T> {
    items: Vec<T>,
    criteria: FilterCriteria,
}

impl<T: Filterable> Listing<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            criteria: FilterCriteria::new(),
        }
    }

    /// Pre-registers the selectable dimensions so the view can render their
    /// selectors before any selection is made.
    pub fn with_dimensions(dimensions: &[&str]) -> Self {
        let mut listing = Self::new();
        for name in dimensions {
            listing
                .criteria
                .select((*name).to_string(), DimensionSelection::All);
        }
        listing
    }

    /// Replaces the materialized collection; criteria are kept.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
    }

    pub fn select_dimension(&mut self, name: impl Into<String>, selection: DimensionSelection) {
        self.criteria.select(name, selection);
    }

    /// The entities currently visible, in collection order.
    pub fn visible(&self) -> Vec<&T> {
        filter(&self.items, &self.criteria)
    }

    /// True when the filters hide every item of a non-empty collection —
    /// the state in which the view offers its single reset action.
    pub fn is_empty_result(&self) -> bool {
        !self.items.is_empty() && self.visible().is_empty()
    }

    /// The reset action: restores the default criteria (empty search term,
    /// every dimension back to "all") in one atomic state update.
    pub fn reset_filters(&mut self) {
        self.criteria.reset();
    }
}
