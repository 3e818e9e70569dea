// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use brandscope::codec::{decode_from_url, encode_for_url, from_editable_text, to_editable_text};
use brandscope::model::{default_document, ReportDocument, ReportView};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use serde_json::{json, Value};

/// The built-in report with its narrative lists repeated until the payload passes ~100 KB.
fn large_document() -> ReportDocument {
    let mut raw = default_document().into_value();
    let strategic = &mut raw["report_strategico"];
    for key in ["narrative_assets", "narrative_frictions"] {
        let items = strategic["perception_analysis"][key].as_array().cloned().unwrap_or_default();
        let mut grown = Vec::new();
        for round in 0..100 {
            for item in &items {
                let mut item = item.clone();
                let theme = item["theme"].as_str().unwrap_or_default().to_owned();
                item["theme"] = json!(format!("{theme} #{round}"));
                grown.push(item);
            }
        }
        strategic["perception_analysis"][key] = Value::Array(grown);
    }
    ReportDocument::from_value(raw).expect("large document")
}

// Benchmark identity (keep stable):
// - Group names: `codec.url_token`, `codec.editable`, `model.view`
// - Case IDs: `default`, `large`
fn benches_codec(c: &mut Criterion) {
    let cases = [("default", default_document()), ("large", large_document())];

    {
        let mut group = c.benchmark_group("codec.url_token");
        for (case_id, doc) in &cases {
            let token = encode_for_url(doc);
            group.throughput(Throughput::Bytes(token.len() as u64));
            group.bench_function(format!("encode/{case_id}"), |b| {
                b.iter(|| black_box(encode_for_url(black_box(doc))).len())
            });
            group.bench_function(format!("decode/{case_id}"), |b| {
                b.iter(|| decode_from_url(black_box(&token)).expect("decode_from_url"))
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("codec.editable");
        for (case_id, doc) in &cases {
            let text = to_editable_text(doc);
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_function(format!("parse/{case_id}"), |b| {
                b.iter(|| from_editable_text(black_box(&text)).expect("from_editable_text"))
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("model.view");
        for (case_id, doc) in &cases {
            group.bench_function(*case_id, |b| {
                b.iter(|| black_box(ReportView::resolve(black_box(doc.report()))))
            });
        }
        group.finish();
    }
}

criterion_group!(benches, benches_codec);
criterion_main!(benches);
