// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use indexmap::IndexMap;
use serde::Serialize;
use smol_str::SmolStr;

use super::token::Token;

/// Extra-bag key used for lines seen before the first token.
pub const BEFORE_FIRST_TOKEN: &str = "0";

/// Dependency graph of one sentence, keyed by token id in insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Tree {
    tokens: IndexMap<SmolStr, Token>,
}

impl Tree {
    /// Inserts `token`, replacing any token with the same id without moving it.
    pub fn insert(&mut self, token: Token) {
        self.tokens.insert(SmolStr::new(token.id()), token);
    }

    pub fn get(&self, id: &str) -> Option<&Token> {
        self.tokens.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Token> {
        self.tokens.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tokens.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in insertion order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(SmolStr::as_str)
    }

    /// Reading order used for layout: integer ids ascending, then every other id in insertion
    /// order.
    pub fn natural_order(&self) -> Vec<&Token> {
        let mut integers = Vec::new();
        let mut others = Vec::new();
        for token in self.tokens.values() {
            match integer_key(token.id()) {
                Some(key) => integers.push((key, token)),
                None => others.push(token),
            }
        }
        integers.sort_by_key(|(key, _)| *key);
        integers.into_iter().map(|(_, token)| token).chain(others).collect()
    }
}

fn integer_key(id: &str) -> Option<u32> {
    if id.is_empty() || (id.len() > 1 && id.starts_with('0')) {
        return None;
    }
    if !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}

/// Comment, metadata and non-graph lines of one block, keyed by the last token id seen before
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ExtraBag {
    entries: IndexMap<SmolStr, Vec<String>>,
}

impl ExtraBag {
    pub fn push(&mut self, position: impl Into<SmolStr>, line: impl Into<String>) {
        self.entries.entry(position.into()).or_default().push(line.into());
    }

    pub fn get(&self, position: &str) -> Option<&[String]> {
        self.entries.get(position).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(position, lines)| (position.as_str(), lines.as_slice()))
    }

    /// Number of distinct positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Metadata of the form `# key = value`, e.g. `sent_id` or `text`.
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.entries.values().flatten().find_map(|line| {
            let rest = line.strip_prefix('#')?;
            let (found, value) = rest.split_once('=')?;
            (found.trim() == key).then(|| value.trim())
        })
    }
}
