// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_json::Value;
use thiserror::Error;

use super::report::Report;

pub const METADATA_FIELD: &str = "metadata";
pub const STRATEGIC_REPORT_FIELD: &str = "report_strategico";

const REQUIRED_FIELDS: [&str; 2] = [METADATA_FIELD, STRATEGIC_REPORT_FIELD];

/// A report document that passed the top-level presence check.
///
/// The raw JSON tree is kept verbatim, including fields the typed model does not know about and
/// the key order of the source, and is what every codec writes back out. The typed [`Report`] is
/// derived from it once, at construction, so readers never re-walk the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    raw: Value,
    report: Report,
}

impl ReportDocument {
    pub fn from_value(raw: Value) -> Result<Self, SchemaError> {
        check_required_fields(&raw)?;
        Ok(Self::from_checked(raw))
    }

    /// Callers must have run the presence check (or own a document known to pass it).
    pub(crate) fn from_checked(raw: Value) -> Self {
        let report = Report::extract(&raw);
        Self { raw, report }
    }

    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    pub fn into_value(self) -> Value {
        self.raw
    }

    pub fn report(&self) -> &Report {
        &self.report
    }
}

impl TryFrom<Value> for ReportDocument {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("report document must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("report document is missing required field(s): {}", .missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },
}

impl SchemaError {
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::NotAnObject { .. } => &REQUIRED_FIELDS,
            Self::MissingFields { missing } => missing,
        }
    }
}

fn check_required_fields(raw: &Value) -> Result<(), SchemaError> {
    let Value::Object(object) = raw else {
        return Err(SchemaError::NotAnObject { found: json_type_name(raw) });
    };

    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| object.get(*field).map_or(true, is_blank))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::MissingFields { missing })
    }
}

/// `null`, `false`, zero and `""` do not count as a present field.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
