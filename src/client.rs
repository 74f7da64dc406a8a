// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Kubernetes client bootstrap.
//!
//! The plugin connects with whatever kubeconfig the surrounding kubectl
//! session uses: the `KUBECONFIG` environment variable when set, otherwise
//! `$HOME/.kube/config`. Failing to resolve either path is a fatal startup
//! error; in-cluster service account configuration is deliberately not
//! attempted, since this is an operator-facing CLI.

use std::env;
use std::path::{Path, PathBuf};

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::debug;

use crate::constants::KUBECONFIG_ENV;
use crate::errors::BootstrapError;

/// Resolve the kubeconfig path: `KUBECONFIG` if set and non-empty, else
/// `$HOME/.kube/config`.
///
/// # Errors
///
/// Returns [`BootstrapError::NoKubeconfigPath`] when the environment
/// variable is unset and no home directory can be determined.
pub fn kubeconfig_path() -> Result<PathBuf, BootstrapError> {
    if let Ok(path) = env::var(KUBECONFIG_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    dirs::home_dir()
        .map(|home| home.join(".kube").join("config"))
        .ok_or(BootstrapError::NoKubeconfigPath)
}

/// Build a Kubernetes client from the resolved kubeconfig.
///
/// # Errors
///
/// Returns a [`BootstrapError`] when the path cannot be resolved, the file
/// cannot be read, or the client cannot be constructed from it.
pub async fn build_client() -> Result<Client, BootstrapError> {
    let path = kubeconfig_path()?;
    build_client_from(&path).await
}

/// Build a Kubernetes client from an explicit kubeconfig file.
///
/// # Errors
///
/// Returns a [`BootstrapError`] when the file cannot be read or parsed, or
/// the client configuration cannot be built from it.
pub async fn build_client_from(path: &Path) -> Result<Client, BootstrapError> {
    debug!(path = %path.display(), "Loading kubeconfig");

    let kubeconfig = Kubeconfig::read_from(path).map_err(|source| BootstrapError::ReadKubeconfig {
        path: path.to_path_buf(),
        source,
    })?;

    let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|source| BootstrapError::BuildConfig { source })?;

    Client::try_from(config).map_err(|source| BootstrapError::CreateClient { source })
}
