//! Requests for filtered get and delete.
//!
//! A [`Selection`] carries identifiers, an optional filter, and any extra
//! backend-specific options. Backends that cannot honor filters fall back to
//! [`Selection::into_ids_only`], which enforces the identifier-only policy and
//! reports what it dropped through an [`Advisory`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::filter::FilterSpec;
use crate::vector::DocumentId;

/// Key under which a folded-in filter appears among the ignored arguments.
pub const FILTERS_KEY: &str = "filters";

/// Which documents a filtered get or delete applies to.
///
/// # Example
///
/// ```
/// use docindex_core::{FilterSpec, Selection};
///
/// let selection = Selection::ids(["a", "b"])
///     .with_filter(FilterSpec::mapping([("lang", "en")]))
///     .with_option("limit", 10);
///
/// assert_eq!(selection.ids.as_deref().map(<[_]>::len), Some(2));
/// assert_eq!(selection.ignored_arguments().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Identifiers to act on. `None` means "not supplied".
    #[serde(default)]
    pub ids: Option<Vec<DocumentId>>,
    /// Structured filter, if any.
    #[serde(default)]
    pub filter: Option<FilterSpec>,
    /// Extra backend-specific arguments.
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl Selection {
    /// A selection with nothing supplied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects documents by identifier.
    pub fn ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<DocumentId>,
    {
        Self::new().with_ids(ids)
    }

    /// Selects documents by filter only.
    pub fn filter(filter: impl Into<FilterSpec>) -> Self {
        Self::new().with_filter(filter)
    }

    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<DocumentId>,
    {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_filter(mut self, filter: impl Into<FilterSpec>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Adds a backend-specific option. Chainable.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Everything an identifier-only backend would ignore: the options, with a
    /// non-empty filter folded in under [`FILTERS_KEY`]. An explicit option of
    /// the same name wins.
    pub fn ignored_arguments(&self) -> Map<String, Value> {
        let mut ignored = Map::new();
        if let Some(filter) = self.filter.as_ref().filter(|f| !f.is_empty()) {
            ignored.insert(FILTERS_KEY.to_owned(), filter.to_value());
        }
        ignored.extend(self.options.clone());
        ignored
    }

    /// Reduces the selection to its identifiers.
    ///
    /// Fails with [`Error::MissingIds`] when no identifiers were supplied. When
    /// a filter or options were supplied, returns them as an [`Advisory`]
    /// alongside the ids; the caller decides how to surface it.
    pub fn into_ids_only(
        self,
        operation: &'static str,
    ) -> Result<(Vec<DocumentId>, Option<Advisory>)> {
        let ignored = self.ignored_arguments();
        let ids = self.ids.ok_or(Error::MissingIds { operation })?;
        let advisory = (!ignored.is_empty()).then(|| Advisory { operation, ignored });
        Ok((ids, advisory))
    }
}

/// Non-fatal notice that a request was served with reduced capability.
#[derive(Debug, Clone, PartialEq)]
pub struct Advisory {
    /// Operation that degraded, e.g. `"get"`.
    pub operation: &'static str,
    /// Arguments that were not honored.
    pub ignored: Map<String, Value>,
}

impl Advisory {
    /// Logs the advisory at `warn` level.
    pub fn emit(&self) {
        let ignored = Value::Object(self.ignored.clone());
        tracing::warn!(
            target: "docindex::contract",
            operation = self.operation,
            ignored = %ignored,
            "{}",
            self
        );
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "only {} by ids is supported by this backend, all other arguments are ignored; received {}",
            self.operation,
            Value::Object(self.ignored.clone())
        )
    }
}

/// Applies the identifier-only policy and emits the advisory, if any.
pub(crate) fn ids_only(selection: Selection, operation: &'static str) -> Result<Vec<DocumentId>> {
    let (ids, advisory) = selection.into_ids_only(operation)?;
    if let Some(advisory) = advisory {
        advisory.emit();
    }
    Ok(ids)
}
