// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use reqwest::Url;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::fetch::{DocumentFetcher, NetworkError};
use super::source::LoadSource;
use crate::codec::decode_from_url;
use crate::model::{default_document, ReportDocument};
use crate::store::ReportStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Inline,
    External,
    BuiltIn,
}

/// User-visible notice that the requested report could not be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    CorruptedLink,
    ExternalUnavailable,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CorruptedLink => {
                f.write_str("Il link sembra corrotto o incompleto. Caricamento dati di default.")
            }
            Self::ExternalUnavailable => {
                f.write_str("Impossibile caricare il JSON dall'URL esterno fornito.")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    pub source: SourceKind,
    /// Set when the requested source failed and the default document was stored instead.
    pub advisory: Option<Advisory>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready(LoadOutcome),
}

impl LoadStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Resolves the session's initial document. Consumed by [`start`](Self::start), so it runs once.
#[derive(Debug)]
pub struct Loader<F> {
    store: ReportStore,
    fetcher: F,
}

impl<F> Loader<F>
where
    F: DocumentFetcher + Send + Sync + 'static,
{
    pub fn new(store: ReportStore, fetcher: F) -> Self {
        Self { store, fetcher }
    }

    /// Tries exactly one source named by `location`.
    ///
    /// Inline and built-in sources complete before this returns. An external source is fetched
    /// on a spawned task (so this must run inside a tokio runtime); the returned handle reports
    /// `Loading` until it resolves and aborts the task when dropped.
    pub fn start(self, location: &Url) -> LoadHandle {
        match LoadSource::from_location(location) {
            LoadSource::Inline(token) => LoadHandle::ready(self.load_inline(&token)),
            LoadSource::BuiltIn => {
                self.store.set(default_document());
                info!("no report source given, using the built-in report");
                LoadHandle::ready(LoadOutcome { source: SourceKind::BuiltIn, advisory: None })
            }
            LoadSource::External(locator) => match location.join(&locator) {
                Ok(url) => self.spawn_external(url),
                Err(err) => {
                    let err = NetworkError::InvalidLocator { locator, reason: err.to_string() };
                    LoadHandle::ready(fall_back(&self.store, SourceKind::External, &err))
                }
            },
        }
    }

    fn load_inline(&self, token: &str) -> LoadOutcome {
        match decode_from_url(token) {
            Ok(doc) => {
                self.store.set(doc);
                info!(token_len = token.len(), "report loaded from inline payload");
                LoadOutcome { source: SourceKind::Inline, advisory: None }
            }
            Err(err) => fall_back(&self.store, SourceKind::Inline, &err),
        }
    }

    fn spawn_external(self, url: Url) -> LoadHandle {
        let (status_tx, status_rx) = watch::channel(LoadStatus::Loading);
        let Self { store, fetcher } = self;

        let task = tokio::spawn(async move {
            let outcome = match fetch_document(&fetcher, &url).await {
                Ok(doc) => {
                    store.set(doc);
                    info!(%url, "report loaded from external document");
                    LoadOutcome { source: SourceKind::External, advisory: None }
                }
                Err(err) => fall_back(&store, SourceKind::External, &err),
            };
            let _ = status_tx.send(LoadStatus::Ready(outcome));
        });

        LoadHandle { status: status_rx, task: Some(task) }
    }
}

async fn fetch_document<F: DocumentFetcher>(
    fetcher: &F,
    url: &Url,
) -> Result<ReportDocument, NetworkError> {
    let value = fetcher.fetch(url).await?;
    ReportDocument::from_value(value)
        .map_err(|source| NetworkError::Shape { url: url.clone(), source })
}

fn fall_back(store: &ReportStore, source: SourceKind, err: &dyn std::error::Error) -> LoadOutcome {
    let advisory = match source {
        SourceKind::Inline => Advisory::CorruptedLink,
        SourceKind::External | SourceKind::BuiltIn => Advisory::ExternalUnavailable,
    };
    warn!(?source, error = %err, "report source failed, using the built-in report");
    store.set(default_document());
    LoadOutcome { source, advisory: Some(advisory) }
}

/// Observes a running load. Dropping it cancels a pending external fetch.
#[derive(Debug)]
pub struct LoadHandle {
    status: watch::Receiver<LoadStatus>,
    task: Option<JoinHandle<()>>,
}

impl LoadHandle {
    fn ready(outcome: LoadOutcome) -> Self {
        let (_status_tx, status) = watch::channel(LoadStatus::Ready(outcome));
        Self { status, task: None }
    }

    pub fn status(&self) -> LoadStatus {
        *self.status.borrow()
    }

    /// A receiver that keeps reporting the final status after the handle is gone.
    pub fn subscribe(&self) -> watch::Receiver<LoadStatus> {
        self.status.clone()
    }

    /// Waits for the load to resolve. `None` when it was cancelled first.
    pub async fn finished(&mut self) -> Option<LoadOutcome> {
        let status = self.status.wait_for(LoadStatus::is_ready).await.ok()?;
        match *status {
            LoadStatus::Ready(outcome) => Some(outcome),
            LoadStatus::Loading => None,
        }
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
