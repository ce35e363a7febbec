//! Generic listing filter.
//!
//! One predicate combinator serves the product, service, order, and news
//! listings. Entities participate by implementing [`Filterable`], which
//! designates the searchable field(s) and the categorical dimensions; the
//! filter itself never inspects concrete entity types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Selection state of one categorical dimension.
///
/// `All` is the sentinel meaning "no constraint"; it is also what an absent
/// dimension entry means.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DimensionSelection {
    #[default]
    All,
    Value(String),
}

impl DimensionSelection {
    /// Builds a selection, folding the literal `"all"` into [`Self::All`].
    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        if value == "all" {
            Self::All
        } else {
            Self::Value(value)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<String> for DimensionSelection {
    fn from(value: String) -> Self {
        Self::from_value(value)
    }
}

impl From<DimensionSelection> for String {
    fn from(selection: DimensionSelection) -> Self {
        match selection {
            DimensionSelection::All => "all".to_string(),
            DimensionSelection::Value(v) => v,
        }
    }
}

/// Search text plus per-dimension selections for one listing view.
///
/// A pure input value: the filter never mutates it, and it is owned by the
/// listing view that built it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the searchable field(s)
    pub search_term: String,
    /// Selected value per dimension name; absent entries mean `All`
    pub dimensions: HashMap<String, DimensionSelection>,
}

impl FilterCriteria {
    /// Criteria that match everything.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_dimension(mut self, name: impl Into<String>, selection: DimensionSelection) -> Self {
        self.dimensions.insert(name.into(), selection);
        self
    }

    /// Updates one dimension selection in place.
    pub fn select(&mut self, name: impl Into<String>, selection: DimensionSelection) {
        self.dimensions.insert(name.into(), selection);
    }

    /// Restores the match-everything state: empty search term, every known
    /// dimension back to `All`. One call, one atomic state update.
    pub fn reset(&mut self) {
        self.search_term.clear();
        for selection in self.dimensions.values_mut() {
            *selection = DimensionSelection::All;
        }
    }

    /// True when the criteria constrain nothing.
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.trim().is_empty() && self.dimensions.values().all(|s| s.is_all())
    }
}

/// Accessor seam that lets heterogeneous records share one filter.
pub trait Filterable {
    /// The designated searchable field(s) of this record.
    fn search_text(&self) -> Vec<&str>;

    /// The record's value for a categorical dimension, if it has one.
    fn dimension(&self, name: &str) -> Option<&str>;
}

/// True when the entity satisfies the search term and every active
/// dimension selection.
pub fn matches<T: Filterable>(entity: &T, criteria: &FilterCriteria) -> bool {
    let term = criteria.search_term.trim();
    if !term.is_empty() {
        let needle = term.to_lowercase();
        let hit = entity
            .search_text()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
        if !hit {
            return false;
        }
    }

    criteria.dimensions.iter().all(|(name, selection)| match selection {
        DimensionSelection::All => true,
        // Exact equality; an entity without the selected dimension cannot match.
        DimensionSelection::Value(value) => entity.dimension(name) == Some(value.as_str()),
    })
}

/// Filters a materialized collection against the criteria.
///
/// Stable (preserves the relative order of `collection`), pure (mutates
/// neither input), and total for any `Filterable` entity shape.
pub fn filter<'a, T: Filterable>(collection: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    collection
        .iter()
        .filter(|entity| matches(*entity, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::{Order, OrderStatus, DIM_STATUS};
    use chrono::Utc;

    fn order(id: &str, customer: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer_name: customer.to_string(),
            status,
            total_cents: 1_000,
            placed_at: Utc::now(),
        }
    }

    fn sample_orders() -> Vec<Order> {
        vec![
            order("ord-1", "Alice Martin", OrderStatus::Processing),
            order("ord-2", "Bob Leroy", OrderStatus::Accepted),
            order("ord-3", "Alicia Bern", OrderStatus::Accepted),
        ]
    }

    #[test]
    fn test_identity_law() {
        let orders = sample_orders();
        let criteria = FilterCriteria::new()
            .with_dimension(DIM_STATUS, DimensionSelection::All);
        let result = filter(&orders, &criteria);
        let expected: Vec<&Order> = orders.iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_idempotence() {
        let orders = sample_orders();
        let criteria = FilterCriteria::new().with_search("ali");
        let once: Vec<Order> = filter(&orders, &criteria).into_iter().cloned().collect();
        let twice: Vec<Order> = filter(&once, &criteria).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dimension_selection_scenario() {
        let orders = vec![
            order("1", "a", OrderStatus::Processing),
            order("2", "b", OrderStatus::Accepted),
        ];
        let criteria = FilterCriteria::new()
            .with_dimension(DIM_STATUS, DimensionSelection::from_value("accepted"));
        let result = filter(&orders, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let orders = sample_orders();
        let criteria = FilterCriteria::new().with_search("MARTIN");
        let result = filter(&orders, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "ord-1");
    }

    #[test]
    fn test_search_and_dimension_combine() {
        let orders = sample_orders();
        let criteria = FilterCriteria::new()
            .with_search("ali")
            .with_dimension(DIM_STATUS, DimensionSelection::from_value("accepted"));
        let result = filter(&orders, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "ord-3");
    }

    #[test]
    fn test_selected_dimension_the_entity_lacks_excludes_it() {
        let orders = sample_orders();
        let criteria = FilterCriteria::new()
            .with_dimension("warehouse", DimensionSelection::from_value("north"));
        assert!(filter(&orders, &criteria).is_empty());
    }

    #[test]
    fn test_preserves_relative_order() {
        let orders = sample_orders();
        let criteria = FilterCriteria::new()
            .with_dimension(DIM_STATUS, DimensionSelection::from_value("accepted"));
        let ids: Vec<&str> = filter(&orders, &criteria)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["ord-2", "ord-3"]);
    }

    #[test]
    fn test_reset_restores_unconstrained_state() {
        let mut criteria = FilterCriteria::new()
            .with_search("ali")
            .with_dimension(DIM_STATUS, DimensionSelection::from_value("accepted"));
        assert!(!criteria.is_unconstrained());

        criteria.reset();
        assert!(criteria.is_unconstrained());
        // The dimension key survives, reset to the sentinel.
        assert_eq!(criteria.dimensions.get(DIM_STATUS), Some(&DimensionSelection::All));
    }

    #[test]
    fn test_all_sentinel_parses_from_string() {
        assert!(DimensionSelection::from_value("all").is_all());
        let parsed: DimensionSelection = serde_json::from_str("\"all\"").unwrap();
        assert!(parsed.is_all());
        let parsed: DimensionSelection = serde_json::from_str("\"accepted\"").unwrap();
        assert_eq!(parsed, DimensionSelection::Value("accepted".to_string()));
    }
}
