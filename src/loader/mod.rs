// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Startup resolution of the initial report.
//!
//! Sources are tried in priority order (inline `data` token, external `url`, built-in default)
//! and exactly one is attempted. Failures never abort startup: the default document is stored and
//! an [`Advisory`] is recorded instead.

pub mod fetch;
pub mod source;
pub mod startup;

pub use fetch::{DocumentFetcher, HttpFetcher, NetworkError};
pub use source::{LoadSource, URL_PARAM};
pub use startup::{Advisory, LoadHandle, LoadOutcome, LoadStatus, Loader, SourceKind};

#[cfg(test)]
mod tests;
