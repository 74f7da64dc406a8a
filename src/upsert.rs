// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Create-or-update engine for PowerDNS records.
//!
//! The Kubernetes API has no upsert primitive and no transaction spanning a
//! read and a write, so [`set`] implements the standard two-phase protocol:
//! look the object up by its derived key, create it when absent, and
//! otherwise replace its spec under an optimistic-concurrency retry loop.
//!
//! The retry loop re-reads the object before every repeated attempt. This is
//! what makes the loop converge: a conflict means another writer won the
//! race and bumped the resource version, so retrying with the stale object
//! would fail forever. Each attempt therefore carries the latest resource
//! version and the caller's full spec, guaranteeing that on success the
//! stored spec is exactly this invocation's intent.

use tracing::{debug, info, warn};

use crate::crd::Record;
use crate::errors::{DeleteError, SetError};
use crate::request::{DeleteRequest, SetRequest};
use crate::retry::RetryPolicy;
use crate::store::RecordStore;

/// Create or update the record described by `request`.
///
/// # Arguments
///
/// * `store` - Record store scoped to the request's namespace
/// * `request` - The record to write
/// * `policy` - Conflict retry policy for the update path
///
/// # Returns
///
/// The stored record as returned by the API server.
///
/// # Errors
///
/// - [`SetError::Validation`] when required fields are blank; the store is
///   never contacted
/// - [`SetError::Lookup`] when the existence check fails with anything
///   other than not-found
/// - [`SetError::Create`] when the record is absent and creating it fails
/// - [`SetError::Update`] when replacing the record fails with a
///   non-conflict error, or conflicts persist through the entire retry
///   budget
pub async fn set<S>(store: &S, request: &SetRequest, policy: &RetryPolicy) -> Result<Record, SetError>
where
    S: RecordStore + Sync + ?Sized,
{
    request.validate()?;

    let key = request.object_key();
    debug!(key = %key, namespace = %request.namespace, "Checking for existing record");

    let existing = match store.get(&key).await {
        Ok(record) => record,
        Err(err) if err.is_not_found() => {
            debug!(key = %key, "Record does not exist, creating");
            let created = store
                .create(&request.to_record())
                .await
                .map_err(SetError::Create)?;
            info!(key = %key, namespace = %request.namespace, "Created record");
            return Ok(created);
        }
        Err(err) => return Err(SetError::Lookup(err)),
    };

    update_with_retry(store, request, policy, existing).await
}

/// Replace the record's spec, retrying on resource version conflicts.
///
/// The first attempt reuses the object fetched by the existence check;
/// every subsequent attempt re-fetches to pick up the version written by
/// whichever writer won the previous race.
async fn update_with_retry<S>(
    store: &S,
    request: &SetRequest,
    policy: &RetryPolicy,
    existing: Record,
) -> Result<Record, SetError>
where
    S: RecordStore + Sync + ?Sized,
{
    let key = request.object_key();
    let mut backoff = policy.backoff();
    let mut current = existing;
    let mut attempt = 1;

    loop {
        // Full spec replace, never a field merge.
        current.spec = request.to_spec();

        match store.update(&current).await {
            Ok(updated) => {
                if attempt > 1 {
                    debug!(key = %key, attempt, "Record update succeeded after retries");
                }
                info!(key = %key, namespace = %request.namespace, "Updated record");
                return Ok(updated);
            }
            Err(err) if err.is_conflict() => {
                if attempt >= policy.max_attempts {
                    warn!(key = %key, attempt, "Conflict retry budget exhausted, giving up");
                    return Err(SetError::Update(err));
                }

                let delay = backoff.next_interval();
                warn!(
                    key = %key,
                    attempt,
                    retry_after = ?delay,
                    "Record was modified concurrently, will retry"
                );
                tokio::time::sleep(delay).await;

                current = store.get(&key).await.map_err(SetError::Update)?;
                attempt += 1;
            }
            Err(err) => return Err(SetError::Update(err)),
        }
    }
}

/// Delete the record described by `request` with foreground cascade.
///
/// Deleting a record that does not exist is a hard error: the not-found
/// condition surfaces as [`DeleteError::Delete`] wrapping
/// [`crate::errors::StoreError::NotFound`] rather than being treated as
/// success.
///
/// # Errors
///
/// - [`DeleteError::Validation`] when required fields are blank
/// - [`DeleteError::Delete`] when the store delete fails for any reason
pub async fn delete<S>(store: &S, request: &DeleteRequest) -> Result<(), DeleteError>
where
    S: RecordStore + Sync + ?Sized,
{
    request.validate()?;

    let key = request.object_key();
    debug!(key = %key, namespace = %request.namespace, "Deleting record");

    store.delete(&key).await.map_err(DeleteError::Delete)?;
    info!(key = %key, namespace = %request.namespace, "Deleted record");
    Ok(())
}
