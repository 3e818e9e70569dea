// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Brandscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Brandscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Transcoding between report documents and their textual forms.
//!
//! Two forms exist: the compact URL token carried by share links, and the indented text shown in
//! the editor. Both are lossless.

pub mod editable;
pub mod share;
pub mod url_token;

pub use editable::{from_editable_text, to_editable_text, ParseError, TextError};
pub use share::{share_link, ShareLink, ShareWarning, DATA_PARAM, SHARE_TOKEN_WARN_LEN};
pub use url_token::{decode_from_url, encode_for_url, DecodeError};
