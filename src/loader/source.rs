// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use reqwest::Url;

use crate::codec::DATA_PARAM;

/// Query parameter naming an external JSON document to load.
pub const URL_PARAM: &str = "url";

/// Where the initial document comes from, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    Inline(String),
    External(String),
    BuiltIn,
}

impl LoadSource {
    /// Picks the source named by the hosting location's query.
    ///
    /// Only the first occurrence of each parameter counts, and an empty value counts as absent.
    pub fn from_location(location: &Url) -> Self {
        let mut inline: Option<String> = None;
        let mut external: Option<String> = None;

        for (key, value) in location.query_pairs() {
            if key == DATA_PARAM && inline.is_none() {
                inline = Some(value.into_owned());
            } else if key == URL_PARAM && external.is_none() {
                external = Some(value.into_owned());
            }
        }

        match (inline, external) {
            (Some(token), _) if !token.is_empty() => Self::Inline(token),
            (_, Some(locator)) if !locator.is_empty() => Self::External(locator),
            _ => Self::BuiltIn,
        }
    }
}
