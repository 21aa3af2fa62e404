// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tab-separated treebank dialects (4-column, CoNLL-U, CoNLL 2009).

pub mod block;
pub mod columns;

pub use block::{parse_block, ConllParseError, NO_SPACE_AFTER, PLACEHOLDER};
pub use columns::{ColumnFormat, ColumnFormatError, ColumnLayout};
