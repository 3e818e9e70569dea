// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Local HTTP preview host.
//!
//! Exposes the current report, its resolved view and one editor session as JSON under `/api`.

mod server;
mod types;

pub use server::{router, serve, HostError, HostState};
pub use types::{EditorResponse, ReportResponse};
