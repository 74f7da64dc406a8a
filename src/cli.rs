// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Command-line interface definition.
//!
//! Installed as `kubectl-pdns` on the PATH, the binary is discovered by
//! kubectl as the `pdns` plugin, so the commands read as
//! `kubectl pdns set ...` and `kubectl pdns delete ...`.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::constants::BIN_NAME;

/// Helper for managing PowerDNS records on Kubernetes.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about = "Manage PowerDNS Record resources on Kubernetes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set a DNS value, creating or updating the backing Record resource
    Set {
        /// DNS zone the record belongs to (e.g., example.com)
        zone: String,

        /// Host/label name of the record (e.g., www)
        name: String,

        /// DNS resource record type (e.g., A, CNAME)
        #[arg(value_name = "RR_TYPE")]
        record_type: String,

        /// Record contents as a single comma-separated string
        contents: String,

        /// Namespace to store the Record resource in
        #[arg(short = 'n', long)]
        namespace: Option<String>,
    },

    /// Delete a DNS value by removing the backing Record resource
    Delete {
        /// DNS zone the record belongs to (e.g., example.com)
        zone: String,

        /// Host/label name of the record (e.g., www)
        name: String,

        /// DNS resource record type (e.g., A, CNAME)
        #[arg(value_name = "RR_TYPE")]
        record_type: String,

        /// Namespace the Record resource is stored in
        #[arg(short = 'n', long)]
        namespace: Option<String>,
    },

    /// Generate shell completions to stdout
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
