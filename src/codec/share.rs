// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use reqwest::Url;

use super::url_token::encode_for_url;
use crate::model::ReportDocument;

/// Query parameter carrying the inline token.
pub const DATA_PARAM: &str = "data";

/// Tokens longer than this risk truncation by browsers and intermediaries.
pub const SHARE_TOKEN_WARN_LEN: usize = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub url: Url,
    pub token_len: usize,
    pub warning: Option<ShareWarning>,
}

/// Non-blocking advisory attached to a share link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareWarning {
    LongUrl { token_len: usize, threshold: usize },
}

impl fmt::Display for ShareWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LongUrl { token_len, threshold } => write!(
                f,
                "Attenzione: il report codificato è lungo {token_len} caratteri (oltre \
                 {threshold}). Alcuni browser potrebbero tagliare l'URL."
            ),
        }
    }
}

/// Builds the share link for `doc` on top of the hosting `location`.
///
/// Only the `data` parameter is touched: an existing one is replaced in place (later duplicates
/// are dropped), otherwise it is appended. Every other parameter keeps its position and its exact
/// encoding, and the fragment is preserved.
pub fn share_link(doc: &ReportDocument, location: &Url) -> ShareLink {
    let token = encode_for_url(doc);
    let token_len = token.len();
    let warning = (token_len > SHARE_TOKEN_WARN_LEN)
        .then_some(ShareWarning::LongUrl { token_len, threshold: SHARE_TOKEN_WARN_LEN });

    ShareLink { url: with_query_param(location, DATA_PARAM, &token), token_len, warning }
}

fn with_query_param(location: &Url, key: &str, value: &str) -> Url {
    let replacement = format!("{key}={}", percent_encode(value));
    let mut pairs: Vec<&str> = Vec::new();
    let mut replaced = false;

    for pair in location.query().unwrap_or_default().split('&') {
        if pair.is_empty() {
            continue;
        }
        let name = pair.split_once('=').map_or(pair, |(name, _)| name);
        if name == key {
            if !replaced {
                pairs.push(&replacement);
                replaced = true;
            }
            continue;
        }
        pairs.push(pair);
    }
    if !replaced {
        pairs.push(&replacement);
    }

    let mut url = location.clone();
    url.set_query(Some(&pairs.join("&")));
    url
}

fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
