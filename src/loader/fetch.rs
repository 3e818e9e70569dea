// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::future::Future;

use reqwest::header::ACCEPT;
use reqwest::Url;
use serde_json::Value;
use thiserror::Error;

use crate::model::SchemaError;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("invalid document locator `{locator}`: {reason}")]
    InvalidLocator { locator: String, reason: String },
    #[error("request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP status {status}")]
    Status { url: Url, status: u16 },
    #[error("{url} did not return a JSON document: {message}")]
    Body { url: Url, message: String },
    #[error("{url} returned an unusable report: {source}")]
    Shape {
        url: Url,
        #[source]
        source: SchemaError,
    },
}

/// Retrieves an external report as a JSON tree.
///
/// A single attempt per call: implementations must not retry.
pub trait DocumentFetcher {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Value, NetworkError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("brandscope/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Value, NetworkError> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| NetworkError::Request { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status { url: url.clone(), status: status.as_u16() });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| NetworkError::Request { url: url.clone(), source })?;
        serde_json::from_slice(&body)
            .map_err(|err| NetworkError::Body { url: url.clone(), message: err.to_string() })
    }
}
