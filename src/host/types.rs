// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::Schema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{ShareLink, TextError};
use crate::editor::EditorSession;
use crate::loader::{LoadStatus, SourceKind};
use crate::model::{ReportDocument, ReportView};

#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub status: &'static str,
    pub source: Option<&'static str>,
    pub advisory: Option<String>,
    pub rev: u64,
    pub document: Value,
    pub view: ReportView,
}

impl ReportResponse {
    pub fn new(status: LoadStatus, rev: u64, document: &ReportDocument) -> Self {
        let (status, source, advisory) = match status {
            LoadStatus::Loading => ("loading", None, None),
            LoadStatus::Ready(outcome) => (
                "ready",
                Some(source_name(outcome.source)),
                outcome.advisory.map(|advisory| advisory.to_string()),
            ),
        };
        Self {
            status,
            source,
            advisory,
            rev,
            document: document.as_value().clone(),
            view: ReportView::resolve(document.report()),
        }
    }
}

fn source_name(source: SourceKind) -> &'static str {
    match source {
        SourceKind::Inline => "inline",
        SourceKind::External => "external",
        SourceKind::BuiltIn => "built_in",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemaResponse {
    pub document: Schema,
    pub view: Schema,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditTextParams {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditorResponse {
    pub state: &'static str,
    pub text: String,
    pub error: Option<EditorIssue>,
    pub share_link: Option<ShareLinkResponse>,
}

impl EditorResponse {
    pub fn from_session(session: &EditorSession) -> Self {
        Self {
            state: session.state().as_str(),
            text: session.text().into_owned(),
            error: session.error().map(EditorIssue::from),
            share_link: session.share_link().map(ShareLinkResponse::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EditorIssue {
    pub kind: &'static str,
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub missing_fields: Vec<&'static str>,
}

impl From<&TextError> for EditorIssue {
    fn from(err: &TextError) -> Self {
        let (line, column, missing_fields) = match err {
            TextError::Parse(parse) => (Some(parse.line()), Some(parse.column()), Vec::new()),
            TextError::Schema(schema) => (None, None, schema.missing_fields().to_vec()),
        };
        Self { kind: err.kind(), message: err.to_string(), line, column, missing_fields }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareLinkResponse {
    pub url: String,
    pub token_len: usize,
    pub warning: Option<String>,
}

impl From<&ShareLink> for ShareLinkResponse {
    fn from(link: &ShareLink) -> Self {
        Self {
            url: link.url.to_string(),
            token_len: link.token_len,
            warning: link.warning.map(|warning| warning.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
