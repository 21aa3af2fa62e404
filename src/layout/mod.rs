// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout of dependency trees.
//!
//! Tokens are placed on a single line; every dependency becomes a cubic Bezier arc from the
//! governor to the dependent, with its label centered above the arc's tight bounding box.

pub mod bezier;
pub mod dependency;
pub mod measure;
pub mod style;

pub use bezier::{bounding_box, BoundingBox, CubicBezier, Point};
pub use dependency::{
    layout_tree, Annotation, Arrowhead, EdgeGeometry, EdgeLabel, LayoutOptions, LayoutWarning,
    TokenPlacement, TreeLayout,
};
pub use measure::{MonospaceMetrics, TextMeasure};
pub use style::Style;
