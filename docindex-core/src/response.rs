//! Batch response values.
//!
//! Both responses partition the submitted identifiers: every id lands in
//! exactly one of `succeeded` or `failed`, once per occurrence in the input.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::vector::DocumentId;

/// Outcome of an upsert batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertResponse {
    /// Ids that were stored.
    pub succeeded: Vec<DocumentId>,
    /// Ids that could not be stored.
    pub failed: Vec<DocumentId>,
}

/// Outcome of a delete batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Ids that were removed.
    pub succeeded: Vec<DocumentId>,
    /// Ids that were unknown or could not be removed.
    pub failed: Vec<DocumentId>,
}

macro_rules! impl_response {
    ($ty:ident) => {
        impl $ty {
            /// Creates an empty response.
            pub fn new() -> Self {
                Self::default()
            }

            /// Creates a response from both lists.
            pub fn from_parts(succeeded: Vec<DocumentId>, failed: Vec<DocumentId>) -> Self {
                Self { succeeded, failed }
            }

            /// Records a successful id.
            pub fn succeed(&mut self, id: impl Into<DocumentId>) {
                self.succeeded.push(id.into());
            }

            /// Records a failed id.
            pub fn fail(&mut self, id: impl Into<DocumentId>) {
                self.failed.push(id.into());
            }

            /// Total number of ids reported.
            pub fn len(&self) -> usize {
                self.succeeded.len() + self.failed.len()
            }

            pub fn is_empty(&self) -> bool {
                self.succeeded.is_empty() && self.failed.is_empty()
            }

            /// Returns true if nothing failed.
            pub fn is_complete(&self) -> bool {
                self.failed.is_empty()
            }

            /// Checks that this response partitions exactly `submitted`.
            pub fn is_partition_of(&self, submitted: &[DocumentId]) -> bool {
                is_partition(&self.succeeded, &self.failed, submitted)
            }
        }
    };
}

impl_response!(UpsertResponse);
impl_response!(DeleteResponse);

/// Multiset comparison of `succeeded + failed` against `submitted`.
fn is_partition(succeeded: &[DocumentId], failed: &[DocumentId], submitted: &[DocumentId]) -> bool {
    if succeeded.len() + failed.len() != submitted.len() {
        return false;
    }

    let mut remaining: HashMap<&str, usize> = HashMap::new();
    for id in submitted {
        *remaining.entry(id.as_str()).or_default() += 1;
    }

    for id in succeeded.iter().chain(failed) {
        match remaining.get_mut(id.as_str()) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}
