// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Session state for the current report.
//!
//! The store is an explicit handle owned by the composition root and passed to the loader, the
//! editor and the host; there is no global instance.

pub mod report_store;

pub use report_store::ReportStore;
