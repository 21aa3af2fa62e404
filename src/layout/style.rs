// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// Numeric styling constants consumed by the layout engine.
///
/// The engine takes these as given; [`Style::default`] only provides values that look reasonable
/// with [`super::MonospaceMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    /// Height of the drawing area before it is shrunk to fit the arcs.
    pub canvas_height: f64,
    pub font_size: f64,
    /// Horizontal gap between two tokens.
    pub word_distance: f64,
    /// Highest an arc may climb above the top of the canvas.
    pub tok_dep_dist: f64,
    /// Extra lift applied to every arc.
    pub dep_min_height: f64,
    /// Extra lift per token spanned by an arc.
    pub word_distance_factor: f64,
    /// Horizontal shift of an arc's start away from the governor's center.
    pub start_offset: f64,
    /// Gap between an arc's apex and its label.
    pub func_curve_dist: f64,
    pub label_font_size: f64,
    /// Vertical advance of each feature row under the tokens.
    pub feature_row_height: f64,
    pub arrow_size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            canvas_height: 500.0,
            font_size: 16.0,
            word_distance: 20.0,
            tok_dep_dist: 200.0,
            dep_min_height: 15.0,
            word_distance_factor: 10.0,
            start_offset: 5.0,
            func_curve_dist: 3.0,
            label_font_size: 12.0,
            feature_row_height: 16.0,
            arrow_size: 5.0,
        }
    }
}

impl Style {
    /// Y of the line arcs start from and end at.
    pub fn arc_baseline(&self) -> f64 {
        self.canvas_height - self.font_size * 2.0
    }

    /// Y of the token text.
    pub fn token_baseline(&self) -> f64 {
        self.canvas_height - self.font_size
    }
}

#[cfg(test)]
mod tests {
    use super::Style;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let style: Style = serde_json::from_str(r#"{"wordDistance": 5, "fontSize": 10}"#)
            .expect("style");
        assert_eq!(style.word_distance, 5.0);
        assert_eq!(style.font_size, 10.0);
        assert_eq!(style.canvas_height, Style::default().canvas_height);
        assert_eq!(style.arc_baseline(), 480.0);
        assert_eq!(style.token_baseline(), 490.0);
    }
}
