//! Complaint catalog — canned customer-complaint scenarios keyed by category.
//!
//! The catalog is read-only for the life of the process. Records are created
//! once from static literals and never mutated; no lifecycle management.

use crate::{
    error::{DatasetError, DatasetResult},
    targets::DifficultyWeightTable,
    types::Difficulty,
};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::collections::HashSet;

/// One canned complaint scenario for a mock customer-service exercise.
#[derive(Debug, Clone, serde::Serialize, Deserialize)]
pub struct ComplaintRecord {
    /// Stable identifier, unique across the whole catalog.
    pub id: String,
    /// Short label for the complaint class, e.g. "Speed Issues".
    #[serde(rename = "type")]
    pub kind: String,
    /// Situation briefing for the trainee.
    pub scenario: String,
    /// The customer's opening utterance.
    pub initial_complaint: String,
    pub difficulty: Difficulty,
    /// Free-text description of the impact on the customer's business.
    pub business_impact: String,
    /// Response guidelines, in the order a good agent would apply them.
    pub expected_responses: Vec<String>,
}

/// Ordered mapping from category name to its complaint records.
///
/// Category order and record order within a category are part of the data
/// and preserved on iteration.
#[derive(Debug, Clone)]
pub struct ComplaintCatalog {
    categories: Vec<(String, Vec<ComplaintRecord>)>,
}

impl ComplaintCatalog {
    pub fn new(categories: Vec<(String, Vec<ComplaintRecord>)>) -> Self {
        Self { categories }
    }

    /// Category names in catalog order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Records for one category, or None for an unknown name.
    pub fn category(&self, name: &str) -> Option<&[ComplaintRecord]> {
        self.categories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, records)| records.as_slice())
    }

    /// All records across every category, in catalog order.
    pub fn records(&self) -> impl Iterator<Item = &ComplaintRecord> {
        self.categories.iter().flat_map(|(_, records)| records)
    }

    /// Lookup by globally-unique record id.
    pub fn find(&self, id: &str) -> Option<&ComplaintRecord> {
        self.records().find(|record| record.id == id)
    }

    /// Total record count across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|(_, records)| records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check catalog invariants: record ids are globally unique, and every
    /// referenced difficulty carries a positive weight.
    ///
    /// The severity ordering of resolution-time targets is deliberately NOT
    /// checked here; see `targets`.
    pub fn verify(&self, weights: &DifficultyWeightTable) -> DatasetResult<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (category, records) in &self.categories {
            for record in records {
                if !seen.insert(record.id.as_str()) {
                    return Err(DatasetError::DuplicateRecordId {
                        id: record.id.clone(),
                        category: category.clone(),
                    });
                }
                let weight = weights.weight(record.difficulty);
                if weight <= 0.0 {
                    return Err(DatasetError::NonPositiveWeight {
                        difficulty: record.difficulty,
                        value: weight,
                    });
                }
            }
        }
        Ok(())
    }
}

// Serialized as a JSON object keyed by category, matching the shape the
// training app consumes.
impl Serialize for ComplaintCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (name, records) in &self.categories {
            map.serialize_entry(name, records)?;
        }
        map.end()
    }
}
