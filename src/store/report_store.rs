// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::model::{default_document, ReportDocument};

#[derive(Debug)]
struct Slot {
    document: Arc<ReportDocument>,
    rev: u64,
}

/// Holder of the current report document for one session.
///
/// Clones share the same slot; separately constructed stores are independent. Writers replace the
/// whole document, so a reader sees either the old or the new one, never a mix.
#[derive(Debug, Clone)]
pub struct ReportStore {
    slot: Arc<RwLock<Slot>>,
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportStore {
    /// A store holding the built-in default document.
    pub fn new() -> Self {
        Self::with_document(default_document())
    }

    pub fn with_document(document: ReportDocument) -> Self {
        Self { slot: Arc::new(RwLock::new(Slot { document: Arc::new(document), rev: 0 })) }
    }

    pub fn get(&self) -> Arc<ReportDocument> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.document.clone()
    }

    /// Returns the current document together with the revision it was set at.
    pub fn snapshot(&self) -> (u64, Arc<ReportDocument>) {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        (slot.rev, slot.document.clone())
    }

    pub fn set(&self, document: ReportDocument) {
        let document = Arc::new(document);
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        slot.document = document;
        slot.rev = slot.rev.wrapping_add(1);
        debug!(rev = slot.rev, "report store replaced");
    }

    /// Bumped on every [`set`](Self::set), starting at 0.
    pub fn rev(&self) -> u64 {
        self.slot.read().unwrap_or_else(PoisonError::into_inner).rev
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::ReportStore;
    use crate::model::{default_document, ReportDocument};

    fn doc_for(brand: &str) -> ReportDocument {
        ReportDocument::from_value(json!({
            "metadata": { "brand_analyzed": brand },
            "report_strategico": {}
        }))
        .expect("document")
    }

    #[test]
    fn new_store_holds_default_document() {
        let store = ReportStore::new();
        assert_eq!(*store.get(), default_document());
        assert_eq!(store.rev(), 0);
    }

    #[test]
    fn set_replaces_document_and_bumps_rev() {
        let store = ReportStore::new();
        store.set(doc_for("Acme"));

        let (rev, doc) = store.snapshot();
        assert_eq!(rev, 1);
        assert_eq!(doc.as_value()["metadata"]["brand_analyzed"], "Acme");
    }

    #[test]
    fn earlier_reads_are_unaffected_by_later_sets() {
        let store = ReportStore::with_document(doc_for("Before"));
        let before = store.get();
        store.set(doc_for("After"));

        assert_eq!(before.as_value()["metadata"]["brand_analyzed"], "Before");
        assert_eq!(store.get().as_value()["metadata"]["brand_analyzed"], "After");
    }

    #[test]
    fn clones_share_state_but_instances_do_not() {
        let store = ReportStore::new();
        let handle = store.clone();
        let other = ReportStore::new();

        handle.set(doc_for("Shared"));

        assert_eq!(store.get().as_value()["metadata"]["brand_analyzed"], "Shared");
        assert_eq!(*other.get(), default_document());
        assert_eq!(other.rev(), 0);
    }

    #[test]
    fn readers_never_observe_partial_documents() {
        let store = ReportStore::with_document(doc_for("brand-0"));
        let writer = {
            let store = store.clone();
            std::thread::spawn(move || {
                for idx in 1..200 {
                    store.set(doc_for(&format!("brand-{idx}")));
                }
            })
        };

        for _ in 0..200 {
            let doc: Arc<ReportDocument> = store.get();
            let brand = doc.as_value()["metadata"]["brand_analyzed"].as_str().expect("brand");
            let typed = doc.report().metadata.as_ref().and_then(|m| m.brand_analyzed.as_deref());
            assert_eq!(typed, Some(brand));
        }

        writer.join().expect("writer thread");
        assert_eq!(store.rev(), 199);
    }
}
