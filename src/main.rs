// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Brandscope CLI entrypoint.
//!
//! Resolves the initial report from the page location (inline `data` token, external `url`,
//! or the built-in report) and serves the preview host at `http://127.0.0.1:<port>/api`.

use std::error::Error;

use brandscope::host::{self, HostState};
use brandscope::loader::{HttpFetcher, Loader};
use brandscope::store::ReportStore;
use reqwest::Url;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_HTTP_PORT: u16 = 27436;
const LOG_ENV: &str = "BRANDSCOPE_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--http-port <port>] [--location <url>]\n  {program} [--http-port <port>] [<url>]\n\nServes the report preview host at `http://127.0.0.1:<port>/api`.\n--http-port selects the port (0 = ephemeral; default {DEFAULT_HTTP_PORT}).\n\n--location/<url> is the page address the report is loaded from: a `data` query parameter\ncarries an inline report, a `url` parameter points at an external JSON document.\nWithout it the built-in report is shown and share links are built on the host address.\n\nLogging is controlled by {LOG_ENV} (default `info`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    http_port: Option<u16>,
    location: Option<Url>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--http-port" => {
                if options.http_port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.http_port = Some(port);
            }
            "--location" => {
                if options.location.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.location = Some(Url::parse(&raw).map_err(|_| ())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.location.is_some() {
                    return Err(());
                }
                options.location = Some(Url::parse(&arg).map_err(|_| ())?);
            }
        }
    }

    Ok(options)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ =
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "brandscope".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();

        let http_port = options.http_port.unwrap_or(DEFAULT_HTTP_PORT);
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", http_port)).await?;
            let addr = listener.local_addr()?;
            let location = match options.location {
                Some(location) => location,
                None => Url::parse(&format!("http://{addr}/"))?,
            };

            let store = ReportStore::new();
            let fetcher = HttpFetcher::new()?;
            let load = Loader::new(store.clone(), fetcher).start(&location);
            let state = HostState::new(store, load.subscribe(), location);

            info!(%addr, "serving report preview at http://{addr}/api/report");
            host::serve(listener, state, shutdown_signal()).await?;

            drop(load);
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("brandscope: {err}");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "unable to listen for ctrl-c; serving until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
