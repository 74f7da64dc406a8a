// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Typed record requests and their validation.
//!
//! A request captures the raw positional arguments of one CLI invocation.
//! The namespace is normalized at construction time (an absent namespace
//! becomes [`DEFAULT_NAMESPACE`]), which keeps [`SetRequest::validate`] and
//! [`DeleteRequest::validate`] pure predicates over an already-normalized
//! value.
//!
//! Validation aggregates every violation instead of stopping at the first,
//! so `kubectl pdns set "" "" "" ""` reports all four blank fields at once.

use crate::constants::DEFAULT_NAMESPACE;
use crate::crd::{Record, RecordSpec};
use crate::errors::{ValidationError, Violation};

/// A validated-on-demand request to create or update a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetRequest {
    /// DNS zone the record belongs to
    pub zone: String,
    /// Host/label name of the record
    pub name: String,
    /// DNS resource record type (e.g., `A`)
    pub record_type: String,
    /// Raw comma-separated record values, split by [`SetRequest::to_spec`]
    pub raw_contents: String,
    /// Target namespace, already defaulted
    pub namespace: String,
}

impl SetRequest {
    /// Build a set request, defaulting the namespace when none is given.
    #[must_use]
    pub fn new(
        zone: impl Into<String>,
        name: impl Into<String>,
        record_type: impl Into<String>,
        raw_contents: impl Into<String>,
        namespace: Option<String>,
    ) -> Self {
        Self {
            zone: zone.into(),
            name: name.into(),
            record_type: record_type.into(),
            raw_contents: raw_contents.into(),
            namespace: normalize_namespace(namespace),
        }
    }

    /// Validate the request, aggregating all violations.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every blank required field:
    /// zone, name, type, and contents.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        if self.zone.is_empty() {
            violations.push(Violation::BlankZone);
        }
        if self.name.is_empty() {
            violations.push(Violation::BlankName);
        }
        if self.record_type.is_empty() {
            violations.push(Violation::BlankType);
        }
        if self.raw_contents.is_empty() {
            violations.push(Violation::BlankContents);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }

    /// Derive the object key: `<name>-<lowercased type>`.
    ///
    /// Two requests with the same name and type (case-insensitively) address
    /// the same stored object regardless of zone or values. Only meaningful
    /// after validation.
    #[must_use]
    pub fn object_key(&self) -> String {
        object_key(&self.name, &self.record_type)
    }

    /// Build the record spec from this request.
    ///
    /// The raw contents are split on commas with order preserved; no
    /// trimming and no deduplication, so `"a,b,a"` yields `["a", "b", "a"]`.
    #[must_use]
    pub fn to_spec(&self) -> RecordSpec {
        RecordSpec {
            zone: self.zone.clone(),
            name: self.name.clone(),
            r#type: self.record_type.clone(),
            value: self.raw_contents.split(',').map(String::from).collect(),
        }
    }

    /// Build a fresh `Record` object for the create path: derived key,
    /// target namespace, and the full spec from [`SetRequest::to_spec`].
    #[must_use]
    pub fn to_record(&self) -> Record {
        let mut record = Record::new(&self.object_key(), self.to_spec());
        record.metadata.namespace = Some(self.namespace.clone());
        record
    }
}

/// A validated-on-demand request to delete a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteRequest {
    /// DNS zone the record belongs to
    pub zone: String,
    /// Host/label name of the record
    pub name: String,
    /// DNS resource record type
    pub record_type: String,
    /// Target namespace, already defaulted
    pub namespace: String,
}

impl DeleteRequest {
    /// Build a delete request, defaulting the namespace when none is given.
    #[must_use]
    pub fn new(
        zone: impl Into<String>,
        name: impl Into<String>,
        record_type: impl Into<String>,
        namespace: Option<String>,
    ) -> Self {
        Self {
            zone: zone.into(),
            name: name.into(),
            record_type: record_type.into(),
            namespace: normalize_namespace(namespace),
        }
    }

    /// Validate the request, aggregating all violations.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every blank required field:
    /// zone, name, and type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        if self.zone.is_empty() {
            violations.push(Violation::BlankZone);
        }
        if self.name.is_empty() {
            violations.push(Violation::BlankName);
        }
        if self.record_type.is_empty() {
            violations.push(Violation::BlankType);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }

    /// Derive the object key: `<name>-<lowercased type>`.
    #[must_use]
    pub fn object_key(&self) -> String {
        object_key(&self.name, &self.record_type)
    }
}

/// Shared key derivation. The type is lowercased so `A` and `a` address the
/// same stored object; the name is used as-is.
fn object_key(name: &str, record_type: &str) -> String {
    format!("{}-{}", name, record_type.to_lowercase())
}

fn normalize_namespace(namespace: Option<String>) -> String {
    match namespace {
        Some(ns) if !ns.is_empty() => ns,
        _ => DEFAULT_NAMESPACE.to_string(),
    }
}
