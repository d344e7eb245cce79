//! Attribute-match conditions

use crate::store::{Attributes, Value};
use std::ops::{BitAnd, BitAndAssign};

/// A conjunction of `field == value` predicates
///
/// Combine two sets of conditions with `&`. The result requires every
/// predicate of both operands; when both name the same field, the right-hand
/// value replaces the left-hand one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryConditions {
    /// Required field values
    pub attributes: Attributes,
}

impl QueryConditions {
    /// Create conditions from a mapping of required values
    pub fn new(attributes: Attributes) -> Self {
        QueryConditions { attributes }
    }

    /// Conditions that match every record
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a `field == value` predicate
    pub fn and_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(field, value);
        self
    }

    /// True when no predicate is set
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Check whether `record` satisfies every predicate
    pub fn matches(&self, record: &Attributes) -> bool {
        super::matcher::dict_contains(record, &self.attributes)
    }
}

impl From<Attributes> for QueryConditions {
    fn from(attributes: Attributes) -> Self {
        QueryConditions::new(attributes)
    }
}

impl BitAnd for QueryConditions {
    type Output = QueryConditions;

    fn bitand(mut self, rhs: QueryConditions) -> QueryConditions {
        self &= rhs;
        self
    }
}

impl BitAnd<&QueryConditions> for &QueryConditions {
    type Output = QueryConditions;

    fn bitand(self, rhs: &QueryConditions) -> QueryConditions {
        let mut attributes = self.attributes.clone();
        attributes.extend_from(&rhs.attributes);
        QueryConditions { attributes }
    }
}

impl BitAndAssign for QueryConditions {
    fn bitand_assign(&mut self, rhs: QueryConditions) {
        self.attributes.extend(rhs.attributes);
    }
}
