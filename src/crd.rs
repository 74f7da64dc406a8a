// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Custom Resource Definition (CRD) for PowerDNS records.
//!
//! This module defines the `Record` custom resource written by pdnsctl and
//! consumed by the cluster-side PowerDNS controller. The CLI only creates,
//! replaces, and deletes these objects; turning them into actual DNS records
//! is the controller's job.
//!
//! # Example: Creating a Record
//!
//! ```rust,no_run
//! use pdnsctl::crd::{Record, RecordSpec};
//!
//! let spec = RecordSpec {
//!     zone: "example.com".to_string(),
//!     name: "www".to_string(),
//!     r#type: "A".to_string(),
//!     value: vec!["192.0.2.1".to_string(), "192.0.2.2".to_string()],
//! };
//!
//! let record = Record::new("www-a", spec);
//! ```
//!
//! # Wire Format
//!
//! ```yaml
//! apiVersion: pdns.bryanl.dev/v1alpha1
//! kind: Record
//! metadata:
//!   name: www-a
//!   namespace: default
//! spec:
//!   zone: example.com
//!   name: www
//!   type: A
//!   value:
//!     - 192.0.2.1
//! ```

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `Record` defines a single DNS resource record set to be provisioned by
/// the PowerDNS controller.
///
/// The object name is always derived from the record name and lowercased
/// record type (`<name>-<type>`), so a record is identified by name and type
/// regardless of its zone or values.
#[derive(CustomResource, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "pdns.bryanl.dev",
    version = "v1alpha1",
    kind = "Record",
    plural = "records",
    namespaced
)]
pub struct RecordSpec {
    /// DNS zone the record belongs to (e.g., `example.com`).
    pub zone: String,

    /// Host/label name of the record within the zone (e.g., `www`).
    pub name: String,

    /// DNS resource record type (e.g., `A`, `AAAA`, `CNAME`, `TXT`).
    pub r#type: String,

    /// Ordered record values. Multiple entries form a multi-value RRset;
    /// order is preserved as given by the caller.
    pub value: Vec<String>,
}
