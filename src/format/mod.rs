// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Treebank format parsing.
//!
//! Input is split into blank-line-delimited blocks; each block is read into a dependency tree.

pub mod conll;

pub use conll::{parse_block, ColumnFormat, ColumnFormatError, ConllParseError};
