// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for pdnsctl.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Constants
// ============================================================================

/// API group for the PowerDNS Record CRD
pub const API_GROUP: &str = "pdns.bryanl.dev";

/// API version for the PowerDNS Record CRD
pub const API_VERSION: &str = "v1alpha1";

/// Fully qualified API version (group/version)
pub const API_GROUP_VERSION: &str = "pdns.bryanl.dev/v1alpha1";

/// Kind name for the `Record` resource
pub const KIND_RECORD: &str = "Record";

/// Plural resource name for `Record`
pub const RECORD_PLURAL: &str = "records";

// ============================================================================
// Namespace Constants
// ============================================================================

/// Namespace used when the caller does not specify one
pub const DEFAULT_NAMESPACE: &str = "default";

// ============================================================================
// Client Bootstrap Constants
// ============================================================================

/// Environment variable naming the kubeconfig file to use
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

// ============================================================================
// Conflict Retry Constants
// ============================================================================

/// Maximum number of update attempts when racing concurrent writers
pub const RETRY_MAX_ATTEMPTS: u32 = 5;

/// Initial interval between conflict retries (10ms)
pub const RETRY_INITIAL_INTERVAL_MILLIS: u64 = 10;

/// Maximum interval between conflict retries (2 seconds)
pub const RETRY_MAX_INTERVAL_SECS: u64 = 2;

/// Backoff multiplier (exponential growth factor)
pub const RETRY_BACKOFF_MULTIPLIER: f64 = 2.0;

/// Randomization factor to prevent thundering herd (±10%)
pub const RETRY_RANDOMIZATION_FACTOR: f64 = 0.1;

// ============================================================================
// Runtime Constants
// ============================================================================

/// Number of worker threads for the Tokio runtime
pub const TOKIO_WORKER_THREADS: usize = 2;

/// Binary name, as installed on the PATH for kubectl plugin discovery
pub const BIN_NAME: &str = "kubectl-pdns";
