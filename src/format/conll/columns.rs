// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColumnFormatError {
    #[error("unsupported column count {count} (expected 4, 10, 14 or more than 14)")]
    UnsupportedColumnCount { count: usize },
}

/// Column indices of the semantic fields of one tabular dialect.
///
/// Fields a dialect does not carry are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnLayout {
    pub field_count: usize,
    pub id: Option<usize>,
    pub token: usize,
    pub lemma: usize,
    pub category: usize,
    pub xpos: Option<usize>,
    pub morph: Option<usize>,
    pub governor: Option<usize>,
    pub function: Option<usize>,
    pub secondary_governors: Option<usize>,
    pub gloss: Option<usize>,
}

// token, category, governor, function; the lemma falls back to the token column.
// Although this is the narrowest dialect, it still carries governor and function columns, so its
// tokens get governor edges like the wider ones.
const COMPACT: ColumnLayout = ColumnLayout {
    field_count: 4,
    id: None,
    token: 0,
    lemma: 0,
    category: 1,
    xpos: None,
    morph: None,
    governor: Some(2),
    function: Some(3),
    secondary_governors: None,
    gloss: None,
};

const CONLLU: ColumnLayout = ColumnLayout {
    field_count: 10,
    id: Some(0),
    token: 1,
    lemma: 2,
    category: 3,
    xpos: Some(4),
    morph: Some(5),
    governor: Some(6),
    function: Some(7),
    secondary_governors: Some(8),
    gloss: Some(9),
};

const CONLL_2009: ColumnLayout = ColumnLayout {
    field_count: 14,
    id: Some(0),
    token: 1,
    lemma: 3,
    category: 5,
    xpos: None,
    morph: None,
    governor: Some(9),
    function: Some(11),
    secondary_governors: None,
    gloss: None,
};

/// The tabular dialects the parser understands, keyed by their column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColumnFormat {
    /// 4 columns without an id column; ids are counted.
    Compact,
    /// 10 columns (CoNLL-U): the only dialect with extended POS, morphology, enhanced governors
    /// and a gloss/misc column.
    ConllU,
    /// 14 columns (CoNLL 2009).
    Conll2009,
}

impl ColumnFormat {
    pub const ALL: [Self; 3] = [Self::Compact, Self::ConllU, Self::Conll2009];

    /// Resolves the dialect of a record with `field_count` tab-separated fields.
    ///
    /// Records wider than the widest dialect are read as that dialect and records narrower than
    /// the narrowest one as the narrowest; every other unknown count is rejected.
    pub fn resolve(field_count: usize) -> Result<Self, ColumnFormatError> {
        let widest = Self::Conll2009;
        let narrowest = Self::Compact;
        if field_count > widest.field_count() {
            return Ok(widest);
        }
        if field_count < narrowest.field_count() {
            return Ok(narrowest);
        }
        Self::ALL
            .into_iter()
            .find(|format| format.field_count() == field_count)
            .ok_or(ColumnFormatError::UnsupportedColumnCount { count: field_count })
    }

    pub fn columns(self) -> &'static ColumnLayout {
        match self {
            Self::Compact => &COMPACT,
            Self::ConllU => &CONLLU,
            Self::Conll2009 => &CONLL_2009,
        }
    }

    pub fn field_count(self) -> usize {
        self.columns().field_count
    }

    /// Whether ids come from a column rather than from a running counter.
    pub fn has_id_column(self) -> bool {
        self.columns().id.is_some()
    }
}
