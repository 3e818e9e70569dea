// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde_json::Value;
use thiserror::Error;

use crate::model::{ReportDocument, SchemaError};

/// Standard alphabet, padding optional. Tokens are always written padded.
const TOLERANT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("token is not valid base64: {0}")]
    Encoding(#[source] base64::DecodeError),
    #[error("token does not decode to UTF-8 text: {0}")]
    Utf8(#[source] std::string::FromUtf8Error),
    #[error("token does not decode to a JSON document: {0}")]
    Json(String),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Encodes a document as an ASCII token for the `data` query parameter.
///
/// The document is written as compact JSON, taken as UTF-8 bytes, then base64 encoded with the
/// standard alphabet. Nothing is truncated, whatever the size.
pub fn encode_for_url(doc: &ReportDocument) -> String {
    let json = doc.as_value().to_string();
    STANDARD.encode(json.as_bytes())
}

pub fn decode_from_url(token: &str) -> Result<ReportDocument, DecodeError> {
    let normalized = normalize_token(token);
    let bytes = TOLERANT.decode(normalized.as_bytes()).map_err(DecodeError::Encoding)?;
    let text = String::from_utf8(bytes).map_err(DecodeError::Utf8)?;
    let value: Value =
        serde_json::from_str(&text).map_err(|err| DecodeError::Json(err.to_string()))?;
    Ok(ReportDocument::from_value(value)?)
}

/// Undoes transport damage that has exactly one reading: whitespace from line wrapping, `+`
/// turned into a space by form decoding, and the URL-safe alphabet.
fn normalize_token(token: &str) -> String {
    token
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '\n' | '\r' | '\t'))
        .map(|ch| match ch {
            ' ' | '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect()
}
