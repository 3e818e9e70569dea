// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_json::Value;
use thiserror::Error;

use crate::model::{ReportDocument, SchemaError};

/// Malformed editable text, with the position serde_json reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid JSON at line {line}, column {column}: {message}")]
pub struct ParseError {
    line: usize,
    column: usize,
    message: String,
}

impl ParseError {
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();
        // serde_json appends " at line L column C"; the position is kept separately.
        let full = err.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_owned(),
            None => full,
        };
        Self { line, column, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl TextError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse",
            Self::Schema(_) => "schema",
        }
    }
}

/// Two-space indented JSON, keys in document order.
pub fn to_editable_text(doc: &ReportDocument) -> String {
    format!("{:#}", doc.as_value())
}

pub fn from_editable_text(text: &str) -> Result<ReportDocument, TextError> {
    let value: Value = serde_json::from_str(text).map_err(ParseError::from)?;
    Ok(ReportDocument::from_value(value)?)
}
