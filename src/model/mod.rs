// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A block of annotation parses into a [`Block`]: the dependency [`Tree`], the [`ExtraBag`] of
//! comment and non-graph lines, and the reconstructed sentence.

pub mod block;
pub mod governors;
pub mod token;
pub mod tree;

pub use block::{Block, ParseWarning};
pub use governors::{GovernorRef, Governors, ROOT_GOVERNOR};
pub use token::{Feature, Placement, Token};
pub use tree::{ExtraBag, Tree, BEFORE_FIRST_TOKEN};
