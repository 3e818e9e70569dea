// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Url;
use serde_json::{json, Value};
use tokio::sync::Notify;

use super::*;
use crate::codec::encode_for_url;
use crate::model::{default_document, ReportDocument};
use crate::store::ReportStore;

#[derive(Debug, Clone)]
enum Reply {
    Json(Value),
    Status(u16),
}

#[derive(Debug, Clone)]
struct ScriptedFetcher {
    reply: Reply,
    calls: Arc<Mutex<Vec<Url>>>,
}

impl ScriptedFetcher {
    fn new(reply: Reply) -> Self {
        Self { reply, calls: Arc::new(Mutex::new(Vec::new())) }
    }

    fn calls(&self) -> Vec<Url> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl DocumentFetcher for ScriptedFetcher {
    async fn fetch(&self, url: &Url) -> Result<Value, NetworkError> {
        self.calls.lock().expect("calls lock").push(url.clone());
        match &self.reply {
            Reply::Json(value) => Ok(value.clone()),
            Reply::Status(status) => {
                Err(NetworkError::Status { url: url.clone(), status: *status })
            }
        }
    }
}

/// Answers only once the gate is opened.
#[derive(Debug, Clone)]
struct GatedFetcher {
    gate: Arc<Notify>,
    value: Value,
}

impl DocumentFetcher for GatedFetcher {
    async fn fetch(&self, _url: &Url) -> Result<Value, NetworkError> {
        self.gate.notified().await;
        Ok(self.value.clone())
    }
}

fn doc_for(brand: &str) -> ReportDocument {
    ReportDocument::from_value(json!({
        "metadata": { "brand_analyzed": brand },
        "report_strategico": { "key_positioning_indicators": { "global_index": { "value": 71 } } }
    }))
    .expect("document")
}

fn location(params: &[(&str, &str)]) -> Url {
    Url::parse_with_params("https://reports.example/view", params).expect("location")
}

fn brand_in(store: &ReportStore) -> String {
    store.get().as_value()["metadata"]["brand_analyzed"].as_str().unwrap_or_default().to_owned()
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

fn direct_http_fetcher() -> HttpFetcher {
    HttpFetcher::with_client(reqwest::Client::builder().no_proxy().build().expect("client"))
}

#[tokio::test]
async fn no_source_stores_default_synchronously() {
    let store = ReportStore::with_document(doc_for("Stale"));
    let fetcher = ScriptedFetcher::new(Reply::Status(500));

    let handle = Loader::new(store.clone(), fetcher.clone()).start(&location(&[]));

    assert_eq!(
        handle.status(),
        LoadStatus::Ready(LoadOutcome { source: SourceKind::BuiltIn, advisory: None })
    );
    assert_eq!(*store.get(), default_document());
    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn inline_payload_is_decoded_into_the_store() {
    let store = ReportStore::new();
    let token = encode_for_url(&doc_for("Caffè ☕ Srl"));

    let handle = Loader::new(store.clone(), ScriptedFetcher::new(Reply::Status(500)))
        .start(&location(&[("data", &token)]));

    assert_eq!(
        handle.status(),
        LoadStatus::Ready(LoadOutcome { source: SourceKind::Inline, advisory: None })
    );
    assert_eq!(brand_in(&store), "Caffè ☕ Srl");
    assert_eq!(store.rev(), 1);
}

#[tokio::test]
async fn inline_payload_wins_and_external_is_never_fetched() {
    let store = ReportStore::new();
    let fetcher = ScriptedFetcher::new(Reply::Json(doc_for("External").into_value()));
    let token = encode_for_url(&doc_for("Inline"));

    let mut handle = Loader::new(store.clone(), fetcher.clone())
        .start(&location(&[("url", "https://cdn.example/report.json"), ("data", &token)]));
    let outcome = handle.finished().await.expect("outcome");
    tokio::task::yield_now().await;

    assert_eq!(outcome.source, SourceKind::Inline);
    assert_eq!(brand_in(&store), "Inline");
    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn corrupted_inline_payload_falls_back_with_advisory() {
    let store = ReportStore::with_document(doc_for("Previous"));
    let fetcher = ScriptedFetcher::new(Reply::Json(doc_for("External").into_value()));

    let handle = Loader::new(store.clone(), fetcher.clone()).start(&location(&[
        ("data", "eyJtZXRhZGF0YSI6e30sInJlcG9ydF9zdHJh"),
        ("url", "https://cdn.example/report.json"),
    ]));

    assert_eq!(
        handle.status(),
        LoadStatus::Ready(LoadOutcome {
            source: SourceKind::Inline,
            advisory: Some(Advisory::CorruptedLink)
        })
    );
    assert_eq!(*store.get(), default_document());
    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn inline_payload_without_required_fields_falls_back() {
    let store = ReportStore::new();
    let token = "eyJtZXRhZGF0YSI6e319"; // {"metadata":{}}

    let handle = Loader::new(store.clone(), ScriptedFetcher::new(Reply::Status(500)))
        .start(&location(&[("data", token)]));

    let LoadStatus::Ready(outcome) = handle.status() else {
        panic!("inline loads resolve synchronously");
    };
    assert_eq!(outcome.advisory, Some(Advisory::CorruptedLink));
    assert_eq!(*store.get(), default_document());
}

#[tokio::test]
async fn external_document_is_fetched_once() {
    let store = ReportStore::new();
    let fetcher = ScriptedFetcher::new(Reply::Json(doc_for("External").into_value()));

    let mut handle = Loader::new(store.clone(), fetcher.clone())
        .start(&location(&[("url", "https://cdn.example/report.json")]));

    assert_eq!(handle.status(), LoadStatus::Loading);
    let outcome = handle.finished().await.expect("outcome");

    assert_eq!(outcome, LoadOutcome { source: SourceKind::External, advisory: None });
    assert_eq!(brand_in(&store), "External");
    assert_eq!(fetcher.calls(), vec![Url::parse("https://cdn.example/report.json").unwrap()]);
}

#[tokio::test]
async fn relative_locator_resolves_against_location() {
    let fetcher = ScriptedFetcher::new(Reply::Json(doc_for("Relative").into_value()));

    let mut handle = Loader::new(ReportStore::new(), fetcher.clone())
        .start(&location(&[("url", "reports/acme.json")]));
    handle.finished().await.expect("outcome");

    assert_eq!(
        fetcher.calls(),
        vec![Url::parse("https://reports.example/reports/acme.json").unwrap()]
    );
}

#[tokio::test]
async fn external_failure_falls_back_with_advisory() {
    let store = ReportStore::with_document(doc_for("Previous"));
    let fetcher = ScriptedFetcher::new(Reply::Status(404));

    let mut handle = Loader::new(store.clone(), fetcher.clone())
        .start(&location(&[("url", "https://cdn.example/missing.json")]));
    let outcome = handle.finished().await.expect("outcome");

    assert_eq!(outcome.advisory, Some(Advisory::ExternalUnavailable));
    assert_eq!(*store.get(), default_document());
    assert_eq!(fetcher.calls().len(), 1);
}

#[tokio::test]
async fn external_document_with_wrong_shape_falls_back() {
    let store = ReportStore::new();
    let fetcher = ScriptedFetcher::new(Reply::Json(json!({ "metadata": {} })));

    let mut handle = Loader::new(store.clone(), fetcher)
        .start(&location(&[("url", "https://cdn.example/partial.json")]));
    let outcome = handle.finished().await.expect("outcome");

    assert_eq!(outcome.advisory, Some(Advisory::ExternalUnavailable));
    assert_eq!(*store.get(), default_document());
}

#[tokio::test]
async fn invalid_locator_falls_back_without_fetching() {
    let store = ReportStore::with_document(doc_for("Previous"));
    let fetcher = ScriptedFetcher::new(Reply::Json(doc_for("External").into_value()));

    let handle = Loader::new(store.clone(), fetcher.clone())
        .start(&location(&[("url", "http://[zz]/report.json")]));

    assert_eq!(
        handle.status(),
        LoadStatus::Ready(LoadOutcome {
            source: SourceKind::External,
            advisory: Some(Advisory::ExternalUnavailable)
        })
    );
    assert_eq!(*store.get(), default_document());
    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn dropping_the_handle_discards_a_late_result() {
    let store = ReportStore::with_document(doc_for("Before"));
    let gate = Arc::new(Notify::new());
    let fetcher = GatedFetcher { gate: gate.clone(), value: doc_for("Late").into_value() };

    let handle = Loader::new(store.clone(), fetcher)
        .start(&location(&[("url", "https://cdn.example/slow.json")]));
    let mut status = handle.subscribe();
    assert_eq!(handle.status(), LoadStatus::Loading);

    drop(handle);
    gate.notify_one();
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }

    assert_eq!(brand_in(&store), "Before");
    assert_eq!(store.rev(), 0);
    assert_eq!(*status.borrow_and_update(), LoadStatus::Loading);
    assert!(status.changed().await.is_err());
}

#[tokio::test]
async fn gated_fetch_completes_once_released() {
    let store = ReportStore::new();
    let gate = Arc::new(Notify::new());
    let fetcher = GatedFetcher { gate: gate.clone(), value: doc_for("Released").into_value() };

    let mut handle = Loader::new(store.clone(), fetcher)
        .start(&location(&[("url", "https://cdn.example/slow.json")]));
    gate.notify_one();

    assert_eq!(handle.finished().await.map(|outcome| outcome.advisory), Some(None));
    assert_eq!(brand_in(&store), "Released");
    assert!(handle.status().is_ready());
}

#[tokio::test]
async fn advisories_read_as_user_messages() {
    assert!(Advisory::CorruptedLink.to_string().contains("corrotto o incompleto"));
    assert!(Advisory::ExternalUnavailable.to_string().contains("URL esterno"));
}

#[tokio::test]
async fn http_fetcher_loads_from_a_live_server() {
    let addr = serve(Router::new().route(
        "/reports/acme.json",
        get(|| async { Json(doc_for("Served").into_value()) }),
    ))
    .await;
    let store = ReportStore::new();
    let location = Url::parse(&format!("http://{addr}/view?url=reports%2Facme.json")).unwrap();

    let mut handle = Loader::new(store.clone(), direct_http_fetcher()).start(&location);
    let outcome = handle.finished().await.expect("outcome");

    assert_eq!(outcome, LoadOutcome { source: SourceKind::External, advisory: None });
    assert_eq!(brand_in(&store), "Served");
}

#[tokio::test]
async fn http_fetcher_reports_status_and_body_failures() {
    let addr = serve(
        Router::new()
            .route("/missing.json", get(|| async { StatusCode::NOT_FOUND }))
            .route("/page.html", get(|| async { "<html>not json</html>" })),
    )
    .await;
    let fetcher = direct_http_fetcher();

    let missing = Url::parse(&format!("http://{addr}/missing.json")).unwrap();
    let err = fetcher.fetch(&missing).await.unwrap_err();
    assert!(matches!(err, NetworkError::Status { status: 404, .. }), "{err:?}");

    let page = Url::parse(&format!("http://{addr}/page.html")).unwrap();
    let err = fetcher.fetch(&page).await.unwrap_err();
    assert!(matches!(err, NetworkError::Body { .. }), "{err:?}");
}

#[tokio::test]
async fn http_fetcher_reports_connection_failures() {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let url = Url::parse(&format!("http://{addr}/report.json")).unwrap();
    let err = direct_http_fetcher().fetch(&url).await.unwrap_err();
    assert!(matches!(err, NetworkError::Request { .. }), "{err:?}");
}
