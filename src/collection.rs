//! Collection aggregation
//!
//! Collections are derived from directory structure, not note metadata.
//! Aggregation preserves the order collections are first encountered in.

use std::collections::HashMap;

use serde::Serialize;

use crate::note::NoteRecord;

/// A collection of notes and how many it holds
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub count: usize,
}

/// Tally of collections, first-seen ordered, with by-name lookup
#[derive(Debug, Default)]
pub struct CollectionTally {
    positions: HashMap<String, usize>,
    ordered: Vec<Collection>,
}

impl CollectionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one note belonging to `name`
    pub fn observe(&mut self, name: &str) {
        if let Some(&idx) = self.positions.get(name) {
            self.ordered[idx].count += 1;
        } else {
            self.positions.insert(name.to_string(), self.ordered.len());
            self.ordered.push(Collection {
                name: name.to_string(),
                count: 1,
            });
        }
    }

    pub fn count_of(&self, name: &str) -> Option<usize> {
        self.positions.get(name).map(|&idx| self.ordered[idx].count)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Collections in the order first encountered
    pub fn into_ordered(self) -> Vec<Collection> {
        self.ordered
    }
}

/// Aggregate records into collections, preserving discovery order
pub fn aggregate(records: &[NoteRecord]) -> CollectionTally {
    let mut tally = CollectionTally::new();
    for record in records {
        tally.observe(&record.collection);
    }
    tally
}
