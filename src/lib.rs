// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Brandscope: state and data interchange for brand-reputation reports.
//!
//! A report travels as JSON: pretty-printed for editing, base64 in a `data` URL parameter for
//! sharing. One [`store::ReportStore`] holds the report on display, [`loader`] fills it once at
//! startup, and [`editor`] is the only path that replaces it afterwards.

// The built-in report is a single large `json!` literal.
#![recursion_limit = "512"]

pub mod codec;
pub mod editor;
pub mod host;
pub mod loader;
pub mod model;
pub mod store;
