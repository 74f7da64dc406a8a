// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::Result;
use clap::{CommandFactory, Parser};
use kube::ResourceExt;
use pdnsctl::{
    cli::{Cli, Command},
    client,
    constants::{BIN_NAME, TOKIO_WORKER_THREADS},
    request::{DeleteRequest, SetRequest},
    retry::RetryPolicy,
    store::KubeRecordStore,
    upsert,
};
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    // Build Tokio runtime with custom thread names
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(TOKIO_WORKER_THREADS)
        .thread_name(BIN_NAME)
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    // Each store call is a single atomic API request, so aborting between
    // calls never leaves a partially applied record behind.
    tokio::select! {
        result = run(cli.command) => result,
        _ = tokio::signal::ctrl_c() => {
            warn!("Received interrupt, aborting");
            anyhow::bail!("interrupted before the operation completed")
        }
    }
}

/// Initialize logging.
///
/// Respects the `RUST_LOG` environment variable if set, otherwise defaults
/// to WARN level so normal plugin output stays quiet.
///
/// Respects the `RUST_LOG_FORMAT` environment variable for output format.
/// Example: `RUST_LOG_FORMAT=json kubectl pdns set ...`
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_writer(std::io::stderr)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .compact()
                .init();
        }
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Set {
            zone,
            name,
            record_type,
            contents,
            namespace,
        } => {
            let request = SetRequest::new(zone, name, record_type, contents, namespace);
            // Fail on bad input before touching the kubeconfig or cluster.
            request.validate()?;

            debug!("Initializing Kubernetes client");
            let client = client::build_client().await?;
            let store = KubeRecordStore::new(client, &request.namespace);

            let record = upsert::set(&store, &request, &RetryPolicy::default()).await?;
            info!(
                record = %record.name_any(),
                namespace = %request.namespace,
                "Record is set"
            );
            println!("record {}/{} set", request.namespace, record.name_any());
            Ok(())
        }

        Command::Delete {
            zone,
            name,
            record_type,
            namespace,
        } => {
            let request = DeleteRequest::new(zone, name, record_type, namespace);
            request.validate()?;

            debug!("Initializing Kubernetes client");
            let client = client::build_client().await?;
            let store = KubeRecordStore::new(client, &request.namespace);

            upsert::delete(&store, &request).await?;
            info!(
                record = %request.object_key(),
                namespace = %request.namespace,
                "Record is deleted"
            );
            println!("record {}/{} deleted", request.namespace, request.object_key());
            Ok(())
        }

        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
            Ok(())
        }
    }
}
