// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Record object store boundary.
//!
//! [`RecordStore`] is the seam between the upsert engine and the Kubernetes
//! API: get-by-key, create, optimistic-concurrency replace, and cascading
//! delete, all scoped to one namespace. The production implementation
//! ([`KubeRecordStore`]) wraps a namespaced `Api<Record>`; tests substitute
//! a scripted in-memory store.
//!
//! Error mapping is done here so the engine never inspects HTTP status
//! codes: 404 becomes [`StoreError::NotFound`] and 409 becomes
//! [`StoreError::Conflict`].

use async_trait::async_trait;
use kube::api::{Api, DeleteParams, PostParams};
use kube::{Client, ResourceExt};
use tracing::debug;

use crate::crd::Record;
use crate::errors::StoreError;

/// A namespaced, keyed store of `Record` objects.
///
/// `update` must perform an optimistic-concurrency replace: the passed
/// object's resource version is compared server-side, and a stale version
/// fails with [`StoreError::Conflict`].
#[async_trait]
pub trait RecordStore {
    /// Fetch the record with the given object key.
    async fn get(&self, key: &str) -> Result<Record, StoreError>;

    /// Create a new record. The record carries its own key and namespace in
    /// its metadata.
    async fn create(&self, record: &Record) -> Result<Record, StoreError>;

    /// Replace an existing record. The record's resource version must match
    /// the stored object's or the call fails with a conflict.
    async fn update(&self, record: &Record) -> Result<Record, StoreError>;

    /// Delete the record with the given object key, with foreground
    /// (cascading) propagation: dependents are removed before the delete is
    /// considered complete.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Kubernetes-backed record store for a single namespace.
pub struct KubeRecordStore {
    api: Api<Record>,
    namespace: String,
}

impl KubeRecordStore {
    /// Build a store scoped to `namespace`.
    #[must_use]
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
            namespace: namespace.to_string(),
        }
    }

    fn classify(&self, err: kube::Error, key: &str) -> StoreError {
        classify_kube_error(err, key, &self.namespace)
    }
}

#[async_trait]
impl RecordStore for KubeRecordStore {
    async fn get(&self, key: &str) -> Result<Record, StoreError> {
        debug!(key = %key, namespace = %self.namespace, "Fetching record");
        self.api
            .get(key)
            .await
            .map_err(|err| self.classify(err, key))
    }

    async fn create(&self, record: &Record) -> Result<Record, StoreError> {
        let key = record.name_any();
        debug!(key = %key, namespace = %self.namespace, "Creating record");
        self.api
            .create(&PostParams::default(), record)
            .await
            .map_err(|err| self.classify(err, &key))
    }

    async fn update(&self, record: &Record) -> Result<Record, StoreError> {
        let key = record.name_any();
        debug!(
            key = %key,
            namespace = %self.namespace,
            resource_version = ?record.metadata.resource_version,
            "Replacing record"
        );
        self.api
            .replace(&key, &PostParams::default(), record)
            .await
            .map_err(|err| self.classify(err, &key))
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        debug!(key = %key, namespace = %self.namespace, "Deleting record (foreground cascade)");
        self.api
            .delete(key, &DeleteParams::foreground())
            .await
            .map(|_| ())
            .map_err(|err| self.classify(err, key))
    }
}

/// Map a kube client error onto the store taxonomy.
///
/// HTTP 404 and 409 get dedicated variants because the engine branches on
/// them; everything else is passed through as [`StoreError::Api`].
pub fn classify_kube_error(err: kube::Error, key: &str, namespace: &str) -> StoreError {
    match err {
        kube::Error::Api(ref response) if response.code == 404 => StoreError::NotFound {
            key: key.to_string(),
            namespace: namespace.to_string(),
        },
        kube::Error::Api(ref response) if response.code == 409 => StoreError::Conflict {
            key: key.to_string(),
        },
        other => StoreError::Api { source: other },
    }
}
