// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Display-ready view of a report.
//!
//! All presentation fallbacks are resolved here, once, so renderers read plain values.

use chrono::{DateTime, Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::Serialize;

use super::report::{
    BrandMention, Kpi, NarrativeItem, Report, SentimentDistribution, StrategicImplication,
};

pub const FALLBACK_BRAND: &str = "Brand";
pub const FALLBACK_LABEL: &str = "N/A";
pub const TOP_MENTIONS: usize = 5;

const ITALIAN_MONTHS: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ReportView {
    pub header: HeaderView,
    pub summary: SummaryView,
    pub indicators: IndicatorsView,
    /// Absent when the document has no competitive analysis at all.
    pub competition: Option<CompetitionView>,
    /// Absent when the document has no sentiment distribution.
    pub sentiment: Option<SentimentView>,
    pub narrative_assets: Vec<NarrativeView>,
    pub narrative_frictions: Vec<NarrativeView>,
    pub implications: Vec<ImplicationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct HeaderView {
    pub report_id: String,
    pub brand: String,
    pub country: String,
    pub sector: String,
    pub offerings: String,
    pub generated_on: String,
    pub model_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SummaryView {
    pub diagnosis: String,
    pub main_vector: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct IndicatorsView {
    pub global_index: KpiView,
    pub perception_index: KpiView,
    pub share_of_voice: KpiView,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct KpiView {
    pub value: f64,
    pub context: String,
    /// Bar fill in percent, clamped to `0..=100`.
    pub bar_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CompetitionView {
    pub leaders: Vec<MentionView>,
    pub quadrant: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct MentionView {
    pub brand_name: String,
    pub mention_percentage: f64,
    /// Mentions are scaled by two for visibility, capped at 100.
    pub bar_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SentimentView {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct NarrativeView {
    pub theme: String,
    pub evidence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ImplicationView {
    pub title: String,
    pub insight: String,
    pub imperative: String,
}

impl ReportView {
    pub fn resolve(report: &Report) -> Self {
        let metadata = report.metadata.clone().unwrap_or_default();
        let strat = report.report_strategico.clone().unwrap_or_default();
        let summary = strat.executive_summary.unwrap_or_default();
        let kpis = strat.key_positioning_indicators.unwrap_or_default();
        let perception = strat.perception_analysis.unwrap_or_default();

        Self {
            header: HeaderView {
                report_id: non_empty_or(metadata.report_id, FALLBACK_LABEL),
                brand: non_empty_or(metadata.brand_analyzed, FALLBACK_BRAND),
                country: metadata.country_iso2.unwrap_or_default(),
                sector: metadata.sector.unwrap_or_default(),
                offerings: metadata.offerings.unwrap_or_default(),
                generated_on: metadata
                    .generation_timestamp
                    .as_deref()
                    .map(format_report_date)
                    .unwrap_or_default(),
                model_label: non_empty_or(metadata.tipo_llm, FALLBACK_LABEL),
            },
            summary: SummaryView {
                diagnosis: summary.diagnosi_strategica.unwrap_or_default(),
                main_vector: summary.vettore_principale.unwrap_or_default(),
            },
            indicators: IndicatorsView {
                global_index: KpiView::resolve(kpis.global_index),
                perception_index: KpiView::resolve(kpis.perception_index),
                share_of_voice: KpiView::resolve(kpis.share_of_voice),
            },
            competition: strat.competitive_analysis.map(|analysis| {
                let positioning = analysis.positioning_map.unwrap_or_default();
                CompetitionView {
                    leaders: analysis
                        .quantitative_overview
                        .unwrap_or_default()
                        .into_iter()
                        .take(TOP_MENTIONS)
                        .map(MentionView::resolve)
                        .collect(),
                    quadrant: positioning.quadrant.unwrap_or_default(),
                    explanation: positioning.explanation.unwrap_or_default(),
                }
            }),
            sentiment: perception.sentiment_distribution.map(SentimentView::resolve),
            narrative_assets: resolve_narratives(perception.narrative_assets),
            narrative_frictions: resolve_narratives(perception.narrative_frictions),
            implications: strat
                .strategic_implications
                .unwrap_or_default()
                .into_iter()
                .map(ImplicationView::resolve)
                .collect(),
        }
    }
}

impl KpiView {
    fn resolve(kpi: Option<Kpi>) -> Self {
        let kpi = kpi.unwrap_or_default();
        let value = kpi.value.unwrap_or(0.0);
        Self { value, context: kpi.context.unwrap_or_default(), bar_width: value.clamp(0.0, 100.0) }
    }
}

impl MentionView {
    fn resolve(mention: BrandMention) -> Self {
        let mention_percentage = mention.mention_percentage.unwrap_or(0.0);
        Self {
            brand_name: mention.brand_name.unwrap_or_default(),
            mention_percentage,
            bar_width: (mention_percentage * 2.0).clamp(0.0, 100.0),
        }
    }
}

impl SentimentView {
    fn resolve(distribution: SentimentDistribution) -> Self {
        Self {
            positive: distribution.positive_percentage.unwrap_or(0.0),
            neutral: distribution.neutral_percentage.unwrap_or(0.0),
            negative: distribution.negative_percentage.unwrap_or(0.0),
        }
    }
}

impl ImplicationView {
    fn resolve(implication: StrategicImplication) -> Self {
        Self {
            title: implication.title.unwrap_or_default(),
            insight: implication.insight_and_implication.unwrap_or_default(),
            imperative: implication.strategic_imperative.unwrap_or_default(),
        }
    }
}

fn resolve_narratives(items: Option<Vec<NarrativeItem>>) -> Vec<NarrativeView> {
    items
        .unwrap_or_default()
        .into_iter()
        .map(|item| NarrativeView {
            theme: item.theme.unwrap_or_default(),
            evidence: item.supporting_evidence.unwrap_or_default(),
        })
        .collect()
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value.filter(|text| !text.is_empty()).unwrap_or_else(|| fallback.to_owned())
}

/// Formats an ISO-8601 timestamp as an Italian long date (`29 gennaio 2026`).
///
/// The calendar date is taken in the timestamp's own offset. Text that is not a timestamp is
/// returned unchanged.
pub fn format_report_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date = DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"));

    match date {
        Ok(date) => {
            format!("{} {} {}", date.day(), ITALIAN_MONTHS[date.month0() as usize], date.year())
        }
        Err(_) => raw.to_owned(),
    }
}
