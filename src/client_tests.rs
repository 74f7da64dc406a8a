// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `client.rs` - kubeconfig discovery and client bootstrap.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use crate::client::{build_client_from, kubeconfig_path};
    use crate::constants::KUBECONFIG_ENV;
    use crate::errors::BootstrapError;

    /// Minimal kubeconfig pointing at a cluster that is never contacted.
    const MINIMAL_KUBECONFIG: &str = r#"
apiVersion: v1
kind: Config
clusters:
  - name: test
    cluster:
      server: https://127.0.0.1:6443
contexts:
  - name: test
    context:
      cluster: test
      user: test
current-context: test
users:
  - name: test
    user: {}
"#;

    /// KUBECONFIG wins when set; the home fallback applies otherwise.
    ///
    /// Both cases live in one test because they mutate the same process-wide
    /// environment variable.
    #[test]
    fn test_kubeconfig_path_resolution() {
        std::env::set_var(KUBECONFIG_ENV, "/tmp/pdnsctl-test-kubeconfig");
        let path = kubeconfig_path().expect("path should resolve from the environment");
        assert_eq!(path, PathBuf::from("/tmp/pdnsctl-test-kubeconfig"));

        // An empty value does not count as set.
        std::env::set_var(KUBECONFIG_ENV, "");
        let fallback = kubeconfig_path();
        std::env::remove_var(KUBECONFIG_ENV);

        match dirs::home_dir() {
            Some(home) => {
                assert_eq!(
                    fallback.expect("home fallback should resolve"),
                    home.join(".kube").join("config")
                );
            }
            None => {
                assert!(
                    matches!(fallback, Err(BootstrapError::NoKubeconfigPath)),
                    "no home directory should be a fatal bootstrap error"
                );
            }
        }
    }

    /// A missing kubeconfig file is a read error naming the path
    #[tokio::test]
    async fn test_build_client_from_missing_file_fails() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("does-not-exist");

        let err = match build_client_from(&path).await {
            Ok(_) => panic!("a missing kubeconfig should fail"),
            Err(err) => err,
        };

        match err {
            BootstrapError::ReadKubeconfig { path: reported, .. } => {
                assert_eq!(reported, path, "the error should name the failing path");
            }
            other => panic!("expected ReadKubeconfig, got {other:?}"),
        }
    }

    /// A syntactically valid kubeconfig yields a client without contacting
    /// the cluster
    #[tokio::test]
    async fn test_build_client_from_minimal_kubeconfig() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile should be created");
        file.write_all(MINIMAL_KUBECONFIG.as_bytes())
            .expect("kubeconfig should be written");

        build_client_from(file.path())
            .await
            .expect("a minimal kubeconfig should produce a client");
    }
}
