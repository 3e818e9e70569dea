// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Report data model.
//!
//! A [`ReportDocument`] owns the raw JSON tree and a lenient typed [`Report`] derived from it;
//! [`ReportView`] resolves display fallbacks on top of that.

mod default_report;
pub mod document;
pub mod report;
pub mod view;

pub use default_report::default_document;
pub use document::{ReportDocument, SchemaError, METADATA_FIELD, STRATEGIC_REPORT_FIELD};
pub use report::{
    BrandMention, CompetitiveAnalysis, ExecutiveSummary, KeyPositioningIndicators, Kpi, Metadata,
    NarrativeItem, PerceptionAnalysis, PositioningMap, Report, SentimentDistribution,
    StrategicImplication, StrategicReport,
};
pub use view::{format_report_date, ReportView};
