// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Typed, lenient view of a report document.
//!
//! Every field is optional. Extraction never fails: a value of the wrong JSON type reads as
//! `None`, numbers written as numeric strings are accepted, and sequence elements that are not
//! objects become empty records so that counts and order match the source.

use schemars::JsonSchema;
use serde_json::{Map, Value};

/// Root of the report document.
#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct Report {
    pub metadata: Option<Metadata>,
    pub report_strategico: Option<StrategicReport>,
}

/// Identification and context of the analysis.
#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct Metadata {
    pub report_id: Option<String>,
    pub brand_analyzed: Option<String>,
    /// ISO-8601 timestamp.
    pub generation_timestamp: Option<String>,
    pub country_iso2: Option<String>,
    pub sector: Option<String>,
    pub offerings: Option<String>,
    /// Label of the model that produced the analysis.
    #[schemars(rename = "tipo_LLM")]
    pub tipo_llm: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct StrategicReport {
    pub executive_summary: Option<ExecutiveSummary>,
    pub key_positioning_indicators: Option<KeyPositioningIndicators>,
    pub competitive_analysis: Option<CompetitiveAnalysis>,
    pub perception_analysis: Option<PerceptionAnalysis>,
    pub strategic_implications: Option<Vec<StrategicImplication>>,
}

#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct ExecutiveSummary {
    pub diagnosi_strategica: Option<String>,
    pub vettore_principale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct KeyPositioningIndicators {
    pub global_index: Option<Kpi>,
    pub perception_index: Option<Kpi>,
    pub share_of_voice: Option<Kpi>,
}

/// A named indicator, conventionally in `0..=100`.
#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct Kpi {
    pub value: Option<f64>,
    pub context: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct CompetitiveAnalysis {
    pub quantitative_overview: Option<Vec<BrandMention>>,
    pub positioning_map: Option<PositioningMap>,
}

#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct BrandMention {
    pub brand_name: Option<String>,
    pub mention_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct PositioningMap {
    pub quadrant: Option<String>,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct PerceptionAnalysis {
    pub sentiment_distribution: Option<SentimentDistribution>,
    pub narrative_assets: Option<Vec<NarrativeItem>>,
    pub narrative_frictions: Option<Vec<NarrativeItem>>,
}

/// Percentages conventionally sum to 100; this is not checked.
#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct SentimentDistribution {
    pub positive_percentage: Option<f64>,
    pub neutral_percentage: Option<f64>,
    pub negative_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct NarrativeItem {
    pub theme: Option<String>,
    pub supporting_evidence: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct StrategicImplication {
    pub title: Option<String>,
    pub insight_and_implication: Option<String>,
    pub strategic_imperative: Option<String>,
}

pub(crate) trait Extract: Sized {
    fn extract(value: &Value) -> Option<Self>;
}

fn field<T: Extract>(object: &Map<String, Value>, key: &str) -> Option<T> {
    object.get(key).and_then(T::extract)
}

impl Extract for String {
    fn extract(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl Extract for f64 {
    fn extract(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }
}

impl<T: Extract + Default> Extract for Vec<T> {
    fn extract(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        Some(items.iter().map(|item| T::extract(item).unwrap_or_default()).collect())
    }
}

impl Report {
    pub(crate) fn extract(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            metadata: field(object, "metadata"),
            report_strategico: field(object, "report_strategico"),
        }
    }
}

impl Extract for Metadata {
    fn extract(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            report_id: field(object, "report_id"),
            brand_analyzed: field(object, "brand_analyzed"),
            generation_timestamp: field(object, "generation_timestamp"),
            country_iso2: field(object, "country_iso2"),
            sector: field(object, "sector"),
            offerings: field(object, "offerings"),
            tipo_llm: field(object, "tipo_LLM"),
        })
    }
}

impl Extract for StrategicReport {
    fn extract(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            executive_summary: field(object, "executive_summary"),
            key_positioning_indicators: field(object, "key_positioning_indicators"),
            competitive_analysis: field(object, "competitive_analysis"),
            perception_analysis: field(object, "perception_analysis"),
            strategic_implications: field(object, "strategic_implications"),
        })
    }
}

impl Extract for ExecutiveSummary {
    fn extract(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            diagnosi_strategica: field(object, "diagnosi_strategica"),
            vettore_principale: field(object, "vettore_principale"),
        })
    }
}

impl Extract for KeyPositioningIndicators {
    fn extract(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            global_index: field(object, "global_index"),
            perception_index: field(object, "perception_index"),
            share_of_voice: field(object, "share_of_voice"),
        })
    }
}

impl Extract for Kpi {
    fn extract(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self { value: field(object, "value"), context: field(object, "context") })
    }
}

impl Extract for CompetitiveAnalysis {
    fn extract(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            quantitative_overview: field(object, "quantitative_overview"),
            positioning_map: field(object, "positioning_map"),
        })
    }
}

impl Extract for BrandMention {
    fn extract(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            brand_name: field(object, "brand_name"),
            mention_percentage: field(object, "mention_percentage"),
        })
    }
}

impl Extract for PositioningMap {
    fn extract(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self { quadrant: field(object, "quadrant"), explanation: field(object, "explanation") })
    }
}

impl Extract for PerceptionAnalysis {
    fn extract(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            sentiment_distribution: field(object, "sentiment_distribution"),
            narrative_assets: field(object, "narrative_assets"),
            narrative_frictions: field(object, "narrative_frictions"),
        })
    }
}

impl Extract for SentimentDistribution {
    fn extract(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            positive_percentage: field(object, "positive_percentage"),
            neutral_percentage: field(object, "neutral_percentage"),
            negative_percentage: field(object, "negative_percentage"),
        })
    }
}

impl Extract for NarrativeItem {
    fn extract(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            theme: field(object, "theme"),
            supporting_evidence: field(object, "supporting_evidence"),
        })
    }
}

impl Extract for StrategicImplication {
    fn extract(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            title: field(object, "title"),
            insight_and_implication: field(object, "insight_and_implication"),
            strategic_imperative: field(object, "strategic_imperative"),
        })
    }
}
