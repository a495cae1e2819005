//! Structured filters over document metadata.
//!
//! A [`Filter`] is a predicate tree such as "source = 'wiki' AND year >= 2024".
//! [`FilterSpec`] is the wider set of shapes a caller may hand to a filtered
//! get or delete.

mod spec;

pub use spec::FilterSpec;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metadata::Metadata;

/// A structured predicate that can be evaluated against document metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filter {
    condition: FilterCondition,
}

impl Filter {
    /// Starts a condition on a metadata field.
    ///
    /// # Example
    ///
    /// ```
    /// use docindex_core::{Filter, Metadata};
    ///
    /// let filter = Filter::field("source").eq("wiki");
    /// assert!(filter.matches(&Metadata::new().with_field("source", "wiki")));
    /// ```
    pub fn field(name: &str) -> FieldFilter {
        FieldFilter {
            field: name.to_owned(),
        }
    }

    pub fn from_condition(condition: FilterCondition) -> Self {
        Self { condition }
    }

    pub fn and(self, other: Filter) -> Self {
        Self::from_condition(FilterCondition::And(
            Box::new(self.condition),
            Box::new(other.condition),
        ))
    }

    pub fn or(self, other: Filter) -> Self {
        Self::from_condition(FilterCondition::Or(
            Box::new(self.condition),
            Box::new(other.condition),
        ))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn negate(self) -> Self {
        Self::from_condition(FilterCondition::Not(Box::new(self.condition)))
    }

    /// Returns true if the metadata satisfies the filter.
    pub fn matches(&self, metadata: &Metadata) -> bool {
        self.condition.matches(metadata)
    }

    /// Returns the root condition.
    pub fn condition(&self) -> &FilterCondition {
        &self.condition
    }
}

/// Builder returned by [`Filter::field`].
#[derive(Debug)]
pub struct FieldFilter {
    field: String,
}

impl FieldFilter {
    fn build(self, make: impl FnOnce(String) -> FilterCondition) -> Filter {
        Filter::from_condition(make(self.field))
    }

    pub fn eq<V: Into<Value>>(self, value: V) -> Filter {
        self.build(|f| FilterCondition::Eq(f, value.into()))
    }

    pub fn ne<V: Into<Value>>(self, value: V) -> Filter {
        self.build(|f| FilterCondition::Ne(f, value.into()))
    }

    pub fn gt<V: Into<Value>>(self, value: V) -> Filter {
        self.build(|f| FilterCondition::Gt(f, value.into()))
    }

    pub fn gte<V: Into<Value>>(self, value: V) -> Filter {
        self.build(|f| FilterCondition::Gte(f, value.into()))
    }

    pub fn lt<V: Into<Value>>(self, value: V) -> Filter {
        self.build(|f| FilterCondition::Lt(f, value.into()))
    }

    pub fn lte<V: Into<Value>>(self, value: V) -> Filter {
        self.build(|f| FilterCondition::Lte(f, value.into()))
    }

    /// Field value is one of `values`.
    pub fn contained_in<V: Into<Value>>(self, values: Vec<V>) -> Filter {
        let values = values.into_iter().map(Into::into).collect();
        self.build(|f| FilterCondition::In(f, values))
    }

    /// String field contains `needle`.
    pub fn contains(self, needle: &str) -> Filter {
        self.build(|f| FilterCondition::Contains(f, needle.to_owned()))
    }

    /// Field is present in the metadata.
    pub fn exists(self) -> Filter {
        self.build(FilterCondition::Exists)
    }
}

/// Predicate tree nodes. Leaves name a metadata field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterCondition {
    Eq(String, Value),
    Ne(String, Value),
    Gt(String, Value),
    Gte(String, Value),
    Lt(String, Value),
    Lte(String, Value),
    In(String, Vec<Value>),
    Contains(String, String),
    Exists(String),
    And(Box<FilterCondition>, Box<FilterCondition>),
    Or(Box<FilterCondition>, Box<FilterCondition>),
    Not(Box<FilterCondition>),
}

impl FilterCondition {
    /// Evaluates this condition against document metadata.
    pub fn matches(&self, metadata: &Metadata) -> bool {
        match self {
            Self::Eq(field, value) => metadata.get(field) == Some(value),
            Self::Ne(field, value) => metadata.get(field) != Some(value),
            Self::Gt(field, value) => compare_values(metadata.get(field), value, |a, b| a > b),
            Self::Gte(field, value) => compare_values(metadata.get(field), value, |a, b| a >= b),
            Self::Lt(field, value) => compare_values(metadata.get(field), value, |a, b| a < b),
            Self::Lte(field, value) => compare_values(metadata.get(field), value, |a, b| a <= b),
            Self::In(field, values) => metadata.get(field).is_some_and(|v| values.contains(v)),
            Self::Contains(field, needle) => metadata
                .get_str(field)
                .is_some_and(|s| s.contains(needle.as_str())),
            Self::Exists(field) => metadata.contains_key(field),
            Self::And(a, b) => a.matches(metadata) && b.matches(metadata),
            Self::Or(a, b) => a.matches(metadata) || b.matches(metadata),
            Self::Not(inner) => !inner.matches(metadata),
        }
    }
}

/// Numeric comparison; false unless both sides are numbers.
fn compare_values<F>(field_value: Option<&Value>, target: &Value, cmp: F) -> bool
where
    F: Fn(f64, f64) -> bool,
{
    match (field_value.and_then(Value::as_f64), target.as_f64()) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}
