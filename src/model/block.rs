// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::Serialize;
use smol_str::SmolStr;

use super::tree::{ExtraBag, Tree};

/// Non-fatal problems found while reading a block. The offending line is kept in the extra bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseWarning {
    #[error("malformed token id on line {line_no}: {line}")]
    MalformedLine { line_no: usize, line: String },
    #[error("invalid style dictionary for '{label}' on line {line_no}: {reason}")]
    InvalidStyle { line_no: usize, label: SmolStr, reason: String },
}

/// One parsed sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    tree: Tree,
    extras: ExtraBag,
    sentence: String,
    source: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    function_styles: BTreeMap<SmolStr, serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<ParseWarning>,
}

impl Block {
    pub fn new(tree: Tree, extras: ExtraBag, sentence: String, source: String) -> Self {
        Self {
            tree,
            extras,
            sentence,
            source,
            function_styles: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn extras(&self) -> &ExtraBag {
        &self.extras
    }

    /// Surface sentence rebuilt from the token column.
    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// Raw block text as it was handed to the parser.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Styling dictionaries attached to function labels with the `label::{...}` notation.
    pub fn function_styles(&self) -> &BTreeMap<SmolStr, serde_json::Value> {
        &self.function_styles
    }

    pub fn function_styles_mut(&mut self) -> &mut BTreeMap<SmolStr, serde_json::Value> {
        &mut self.function_styles
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    pub fn warnings_mut(&mut self) -> &mut Vec<ParseWarning> {
        &mut self.warnings
    }
}
