// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;

use reqwest::Url;
use thiserror::Error;
use tracing::{debug, info};

use crate::codec::{from_editable_text, share_link, to_editable_text, ShareLink, TextError};
use crate::model::{default_document, ReportDocument};
use crate::store::ReportStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Text mirrors the store, including writes made after the session opened.
    Idle,
    Editing,
    /// The current text parsed and passed the presence check.
    Valid,
    /// Like `Editing`, with the last validation error on display.
    Invalid,
    /// Terminal: the validated document replaced the store's value.
    Committed,
}

impl EditorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Editing => "editing",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Committed => "committed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Text(#[from] TextError),
    #[error("the report text must be validated before it can be applied")]
    NotValidated,
    #[error("the editor session was committed and is closed")]
    Closed,
}

/// Interactive edit of a candidate report, committed to the store only after validation.
///
/// Nothing but [`commit`](Self::commit) writes to the store; validation failures stay inside
/// the session.
#[derive(Debug)]
pub struct EditorSession {
    store: ReportStore,
    /// Store revision `text` was rendered from.
    rev: u64,
    text: String,
    state: EditorState,
    validated: Option<ReportDocument>,
    error: Option<TextError>,
    share_link: Option<ShareLink>,
}

impl EditorSession {
    pub fn open(store: ReportStore) -> Self {
        let (rev, document) = store.snapshot();
        let text = to_editable_text(&document);
        Self {
            store,
            rev,
            text,
            state: EditorState::Idle,
            validated: None,
            error: None,
            share_link: None,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn text(&self) -> Cow<'_, str> {
        match self.stale_store_text() {
            Some((_, text)) => Cow::Owned(text),
            None => Cow::Borrowed(&self.text),
        }
    }

    pub fn error(&self) -> Option<&TextError> {
        self.error.as_ref()
    }

    pub fn share_link(&self) -> Option<&ShareLink> {
        if self.state == EditorState::Idle && self.store.rev() != self.rev {
            return None;
        }
        self.share_link.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.state == EditorState::Committed
    }

    /// Replaces the text; any earlier validation, error and share link are discarded.
    pub fn edit(&mut self, text: impl Into<String>) -> Result<(), EditorError> {
        self.ensure_open()?;
        self.text = text.into();
        self.enter_editing();
        Ok(())
    }

    pub fn validate(&mut self) -> Result<ReportDocument, EditorError> {
        self.ensure_open()?;
        self.sync_with_store();
        match from_editable_text(&self.text) {
            Ok(doc) => {
                self.state = EditorState::Valid;
                self.error = None;
                self.validated = Some(doc.clone());
                Ok(doc)
            }
            Err(err) => {
                debug!(kind = err.kind(), error = %err, "editor text rejected");
                self.state = EditorState::Invalid;
                self.validated = None;
                self.error = Some(err.clone());
                Err(err.into())
            }
        }
    }

    /// Stores the validated document and closes the session.
    pub fn commit(&mut self) -> Result<(), EditorError> {
        self.ensure_open()?;
        if self.state != EditorState::Valid {
            return Err(EditorError::NotValidated);
        }
        let Some(doc) = self.validated.take() else {
            return Err(EditorError::NotValidated);
        };

        self.store.set(doc);
        self.state = EditorState::Committed;
        self.share_link = None;
        info!(rev = self.store.rev(), "editor committed a new report");
        Ok(())
    }

    /// Loads the built-in report into the text, whatever the validation state.
    pub fn reset(&mut self) -> Result<(), EditorError> {
        self.ensure_open()?;
        self.text = to_editable_text(&default_document());
        self.enter_editing();
        Ok(())
    }

    /// Builds a share link for the current text on top of `location`.
    ///
    /// The text is validated first unless it already is. A long-URL warning does not fail the
    /// call; it travels on the returned link.
    pub fn generate_share_link(&mut self, location: &Url) -> Result<ShareLink, EditorError> {
        self.sync_with_store();
        let validated = match self.state {
            EditorState::Valid => self.validated.clone(),
            _ => None,
        };
        let doc = match validated {
            Some(doc) => doc,
            None => self.validate()?,
        };

        let link = share_link(&doc, location);
        if let Some(warning) = &link.warning {
            info!(token_len = link.token_len, "{warning}");
        }
        self.share_link = Some(link.clone());
        Ok(link)
    }

    fn ensure_open(&self) -> Result<(), EditorError> {
        if self.is_closed() {
            return Err(EditorError::Closed);
        }
        Ok(())
    }

    /// Current store text when the session is idle and the store moved on since `rev`.
    fn stale_store_text(&self) -> Option<(u64, String)> {
        if self.state != EditorState::Idle || self.store.rev() == self.rev {
            return None;
        }
        let (rev, document) = self.store.snapshot();
        Some((rev, to_editable_text(&document)))
    }

    fn sync_with_store(&mut self) {
        if let Some((rev, text)) = self.stale_store_text() {
            debug!(from = self.rev, to = rev, "idle editor picked up a newer report");
            self.rev = rev;
            self.text = text;
            self.share_link = None;
        }
    }

    fn enter_editing(&mut self) {
        self.state = EditorState::Editing;
        self.validated = None;
        self.error = None;
        self.share_link = None;
    }
}
