// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::ser::{Serialize, SerializeMap, Serializer};
use smallvec::SmallVec;
use smol_str::SmolStr;

/// Governor id that marks the sentence root.
pub const ROOT_GOVERNOR: &str = "0";

/// How a governor id found in a token's governor mapping is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernorRef<'a> {
    /// `0`: the dependent is attached to the sentence root.
    Root,
    /// `_`, `-1` or empty: no governor, nothing is drawn.
    None,
    /// Any other value names another token of the same tree.
    Token(&'a str),
}

impl<'a> GovernorRef<'a> {
    pub fn classify(governor: &'a str) -> Self {
        match governor {
            ROOT_GOVERNOR => Self::Root,
            "" | "_" | "-1" => Self::None,
            other => Self::Token(other),
        }
    }
}

/// Ordered `governor id -> dependency label` mapping of one token.
///
/// Most tokens have exactly one governor; enhanced annotations add a few more, so the entries
/// live inline. Absence of governance is absence of a key, never a placeholder value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Governors {
    entries: SmallVec<[(SmolStr, SmolStr); 2]>,
}

impl Governors {
    /// Inserts or overwrites the label for `governor`. Overwriting keeps the original position.
    pub fn insert(&mut self, governor: impl Into<SmolStr>, label: impl Into<SmolStr>) {
        let governor = governor.into();
        let label = label.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == governor) {
            Some((_, existing_label)) => *existing_label = label,
            None => self.entries.push((governor, label)),
        }
    }

    pub fn get(&self, governor: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == governor)
            .map(|(_, label)| label.as_str())
    }

    pub fn contains(&self, governor: &str) -> bool {
        self.get(governor).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(governor, label)| (governor.as_str(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Governors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (governor, label) in &self.entries {
            map.serialize_entry(governor.as_str(), label.as_str())?;
        }
        map.end()
    }
}
