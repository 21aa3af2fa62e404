// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Arbor: CoNLL dependency treebanks to arc diagrams.
//!
//! Blocks of tab-separated annotation are parsed into dependency trees ([`format`], [`model`]),
//! laid out as tokens on a line with Bezier arcs between governors and dependents ([`layout`]),
//! and rendered to SVG ([`render`]). [`pipeline`] drives whole treebanks, progressively or in
//! parallel.

pub mod config;
pub mod format;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod stats;

pub use config::{Config, ConfigError};
pub use format::{parse_block, ColumnFormat, ColumnFormatError, ConllParseError};
pub use layout::{layout_tree, LayoutOptions, MonospaceMetrics, Style, TextMeasure, TreeLayout};
pub use model::{Block, Token, Tree};
pub use pipeline::{BlockFailure, LaidOutBlock, Pipeline, PipelineOutput};
