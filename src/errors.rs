// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for pdnsctl.
//!
//! This module provides the error taxonomy for:
//! - Request validation (aggregated field-level violations)
//! - Object store operations against the Kubernetes API
//! - The set (upsert) and delete command paths
//! - Client bootstrap (kubeconfig discovery and client construction)
//!
//! Every error that crosses a component boundary wraps its cause with a short
//! stage-identifying message, preserving the original error for diagnostics.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A single field-level validation violation.
///
/// Violations are collected rather than short-circuited, so a request with
/// several blank fields reports all of them at once.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The zone field is blank
    #[error("zone is blank")]
    BlankZone,

    /// The record name field is blank
    #[error("name is blank")]
    BlankName,

    /// The record type field is blank
    #[error("type is blank")]
    BlankType,

    /// The raw contents field is blank (set requests only)
    #[error("contents are blank")]
    BlankContents,
}

/// Aggregated validation failure for a record request.
///
/// Carries every violation found, not just the first, so callers and tests
/// can inspect which fields failed independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// All violations found in the request
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Whether a specific violation was reported.
    #[must_use]
    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid request: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Errors returned by the record object store.
///
/// `NotFound` and `Conflict` are modeled as their own variants because the
/// upsert engine branches on them: `NotFound` on lookup selects the create
/// path, and `Conflict` on update drives the retry loop.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record with the given key exists in the namespace (HTTP 404)
    #[error("record '{key}' not found in namespace '{namespace}'")]
    NotFound {
        /// The object key that was looked up
        key: String,
        /// The namespace that was searched
        namespace: String,
    },

    /// The record's resource version no longer matches; a concurrent writer
    /// modified the object between read and write (HTTP 409)
    #[error("record '{key}' was modified concurrently (resource version conflict)")]
    Conflict {
        /// The object key that was being updated
        key: String,
    },

    /// Any other Kubernetes API failure
    #[error("kubernetes api request failed: {source}")]
    Api {
        /// The underlying kube client error
        #[from]
        source: kube::Error,
    },
}

impl StoreError {
    /// Whether this error is an optimistic-concurrency conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }

    /// Whether this error is a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Errors from the set (create-or-update) path.
///
/// Each variant identifies the stage that failed and wraps the cause.
#[derive(Error, Debug)]
pub enum SetError {
    /// The request failed validation; no store access was attempted
    #[error("validate request: {0}")]
    Validation(#[from] ValidationError),

    /// The existence check for the record failed with a non-404 error
    #[error("check for existing record: {0}")]
    Lookup(#[source] StoreError),

    /// The record did not exist and creating it failed
    #[error("create record: {0}")]
    Create(#[source] StoreError),

    /// The record existed but updating it failed, either with a non-conflict
    /// error or by exhausting the conflict retry budget
    #[error("update record: {0}")]
    Update(#[source] StoreError),
}

/// Errors from the delete path.
#[derive(Error, Debug)]
pub enum DeleteError {
    /// The request failed validation; no store access was attempted
    #[error("validate request: {0}")]
    Validation(#[from] ValidationError),

    /// The store delete call failed. Deleting a record that does not exist
    /// is reported here as a wrapped [`StoreError::NotFound`].
    #[error("delete record: {0}")]
    Delete(#[source] StoreError),
}

/// Errors raised while bootstrapping the Kubernetes client.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Neither `KUBECONFIG` nor a home directory was available
    #[error("unable to determine kubeconfig path: KUBECONFIG is unset and no home directory was found")]
    NoKubeconfigPath,

    /// The kubeconfig file could not be read or parsed
    #[error("read kubeconfig {}: {source}", .path.display())]
    ReadKubeconfig {
        /// Path of the kubeconfig file that failed to load
        path: PathBuf,
        /// The underlying kubeconfig error
        #[source]
        source: kube::config::KubeconfigError,
    },

    /// The client configuration could not be built from the kubeconfig
    #[error("build client configuration: {source}")]
    BuildConfig {
        /// The underlying kubeconfig error
        #[source]
        source: kube::config::KubeconfigError,
    },

    /// The Kubernetes client could not be constructed
    #[error("create kubernetes client: {source}")]
    CreateClient {
        /// The underlying kube client error
        #[source]
        source: kube::Error,
    },
}
