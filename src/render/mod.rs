// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering of laid-out trees.
//!
//! The layout engine only produces coordinates; this module turns them into SVG documents with
//! the CSS classes the surrounding tooling styles (`token`, `curve`, `arrowhead`, `deprel`, and
//! one class per feature row).

pub mod svg;
pub(crate) mod text;

pub use svg::{render_svg, write_svg};
pub use text::escape_xml;
