// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::render::text::text_len;

/// Text metrics supplied by whatever surface ends up drawing the layout.
pub trait TextMeasure {
    /// Advance width of `text` in layout units.
    fn text_width(&self, text: &str) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f64,
{
    fn text_width(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Fixed advance per character; good enough for terminals and monospace SVG fonts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    glyph_width: f64,
}

impl MonospaceMetrics {
    pub fn new(glyph_width: f64) -> Self {
        Self { glyph_width }
    }

    /// Approximation for a proportional font rendered at `font_size`.
    pub fn for_font_size(font_size: f64) -> Self {
        Self::new(font_size * 0.6)
    }

    pub fn glyph_width(&self) -> f64 {
        self.glyph_width
    }
}

impl TextMeasure for MonospaceMetrics {
    fn text_width(&self, text: &str) -> f64 {
        text_len(text) as f64 * self.glyph_width
    }
}

#[cfg(test)]
mod tests {
    use super::{MonospaceMetrics, TextMeasure};

    #[test]
    fn monospace_counts_chars_not_bytes() {
        let metrics = MonospaceMetrics::new(10.0);
        assert_eq!(metrics.text_width("dog"), 30.0);
        assert_eq!(metrics.text_width("été"), 30.0);
        assert_eq!(metrics.text_width(""), 0.0);
    }

    #[test]
    fn closures_measure_text() {
        let measure = |text: &str| if text == "wide" { 100.0 } else { 1.0 };
        assert_eq!(measure.text_width("wide"), 100.0);
        assert_eq!(measure.text_width("x"), 1.0);
    }
}
