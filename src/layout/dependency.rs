// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use serde::Serialize;
use smol_str::SmolStr;

use super::bezier::{BoundingBox, CubicBezier, Point};
use super::measure::TextMeasure;
use super::style::Style;
use crate::model::governors::GovernorRef;
use crate::model::token::{Feature, Placement, Token};
use crate::model::tree::Tree;

/// Annotations wider than the token by more than this are pulled left.
const ANNOTATION_OVERHANG: f64 = 10.0;

/// Arc endpoints stop this far above the baseline so the arrowhead tip stays sharp.
const ARROW_TIP_GAP: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    pub reverse_mode: bool,
    pub shown_features: Vec<Feature>,
}

impl LayoutOptions {
    pub fn new(reverse_mode: bool, shown_features: Vec<Feature>) -> Self {
        Self { reverse_mode, shown_features }
    }

    /// Shown features drawn as rows under the token text.
    fn feature_rows(&self) -> impl Iterator<Item = Feature> + '_ {
        self.shown_features.iter().copied().filter(|feature| *feature != Feature::Text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenPlacement {
    pub id: SmolStr,
    pub text: SmolStr,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub highlighted: bool,
}

/// Small triangular marker drawn where an arc meets its dependent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arrowhead {
    pub tip: Point,
    pub size: f64,
}

impl Arrowhead {
    /// Relative SVG path data of the marker, anchored at its tip.
    pub fn to_svg_path(&self) -> String {
        let s = self.size;
        format!(
            "M{},{}c0,0 {},{} {},{}c{},{} {},{} {},0z",
            self.tip.x,
            self.tip.y,
            -s / 2.0,
            -s * 1.5,
            -s / 2.0,
            -s * 1.5,
            s / 2.0,
            s / 2.0,
            s / 2.0,
            s / 2.0,
            s
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeLabel {
    pub text: SmolStr,
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EdgeGeometry {
    /// Vertical stub from the dependent up to the top of the canvas.
    Root { dependent: SmolStr, x: f64, from_y: f64, to_y: f64, arrowhead: Arrowhead, highlighted: bool },
    Arc {
        dependent: SmolStr,
        governor: SmolStr,
        curve: CubicBezier,
        bbox: BoundingBox,
        arrowhead: Arrowhead,
        label: EdgeLabel,
        highlighted: bool,
    },
}

impl EdgeGeometry {
    pub fn dependent(&self) -> &str {
        match self {
            Self::Root { dependent, .. } | Self::Arc { dependent, .. } => dependent,
        }
    }

    pub fn arrowhead(&self) -> &Arrowhead {
        match self {
            Self::Root { arrowhead, .. } | Self::Arc { arrowhead, .. } => arrowhead,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        match self {
            Self::Root { highlighted, .. } | Self::Arc { highlighted, .. } => *highlighted,
        }
    }

    /// SVG path data of the stub or arc.
    pub fn to_svg_path(&self) -> String {
        match self {
            Self::Root { x, from_y, to_y, .. } => format!("M{x},{from_y}L{x},{to_y}"),
            Self::Arc { curve, .. } => curve.to_svg_path(),
        }
    }
}

/// One feature row entry (lemma, category, ...) under a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub token: SmolStr,
    pub feature: Feature,
    pub text: SmolStr,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutWarning {
    DanglingGovernor { dependent: SmolStr, governor: SmolStr },
}

/// Coordinates of one laid-out tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeLayout {
    tokens: Vec<TokenPlacement>,
    edges: Vec<EdgeGeometry>,
    annotations: Vec<Annotation>,
    width: f64,
    height: f64,
    top: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<LayoutWarning>,
}

impl TreeLayout {
    /// Tokens in drawing order (left to right).
    pub fn tokens(&self) -> &[TokenPlacement] {
        &self.tokens
    }

    pub fn edges(&self) -> &[EdgeGeometry] {
        &self.edges
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Running total of token widths plus spacing.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height once shrunk to the highest label.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Smallest y reached by a label; translate by `-top` to bring it into view.
    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn translate_y(&self) -> f64 {
        -self.top
    }

    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }
}

#[derive(Debug, Clone, Copy)]
struct Anchor {
    placement: Placement,
    position: f64,
}

/// Arc from the governor to the dependent.
///
/// The control height rises with the horizontal span and with the number of tokens spanned, is
/// capped at `tok_dep_dist` above the canvas top, never dips below the baseline and is lifted by
/// `dep_min_height`.
fn dependency_curve(
    governor: Anchor,
    dependent: Anchor,
    baseline: f64,
    style: &Style,
    reverse_mode: bool,
) -> CubicBezier {
    let (word_distance_factor, start_offset) = if reverse_mode {
        (-style.word_distance_factor.abs(), -style.start_offset.abs())
    } else {
        (style.word_distance_factor, style.start_offset)
    };
    let start_shift =
        if governor.position - dependent.position > 0.0 { -start_offset } else { start_offset };

    let x1 = governor.placement.center() + start_shift;
    let x2 = dependent.placement.center();
    let half_span = (x1 - x2).abs() / 2.0;
    let distance = (dependent.position - governor.position).abs();

    let height = (baseline - half_span - word_distance_factor * distance).max(-style.tok_dep_dist);
    let height = height.min(baseline) - style.dep_min_height;

    CubicBezier::new(
        Point::new(x1, baseline),
        Point::new(x1, height),
        Point::new(x2, height),
        Point::new(x2, baseline - ARROW_TIP_GAP),
    )
}

/// Width of `text` drawn at the label font size.
///
/// The measure works at the token font, so widths are scaled by `label_font_size / font_size`.
fn label_width<M>(measure: &M, style: &Style, text: &str) -> f64
where
    M: TextMeasure + ?Sized,
{
    let width = measure.text_width(text);
    if style.font_size > 0.0 {
        width * style.label_font_size / style.font_size
    } else {
        width
    }
}

/// Places tokens left to right and computes arcs, labels and feature rows.
///
/// Each token's x is the running total of the previous widths plus `word_distance`; the measured
/// width and x are also stored on the token. Tokens are visited in the tree's natural order,
/// reversed under reverse mode. Governors that name no token produce a [`LayoutWarning`] instead
/// of an edge.
pub fn layout_tree<M>(tree: &mut Tree, measure: &M, style: &Style, options: &LayoutOptions) -> TreeLayout
where
    M: TextMeasure + ?Sized,
{
    let mut order = tree.natural_order().into_iter().map(|token| SmolStr::new(token.id())).collect::<Vec<_>>();
    if options.reverse_mode {
        order.reverse();
    }

    let token_y = style.token_baseline();
    let mut running_width = 0.0;
    let mut tokens = Vec::with_capacity(order.len());
    for id in &order {
        let Some(token) = tree.get_mut(id) else {
            continue;
        };
        let width = measure.text_width(token.text());
        let x = running_width;
        running_width += width + style.word_distance;
        token.set_placement(Placement { x, width });
        tokens.push(TokenPlacement {
            id: id.clone(),
            text: SmolStr::new(token.text()),
            x,
            y: token_y,
            width,
            highlighted: token.is_highlighted(),
        });
    }

    let tree: &Tree = tree;
    let layout_index = order
        .iter()
        .enumerate()
        .map(|(index, id)| (id.as_str(), index))
        .collect::<HashMap<_, _>>();
    let anchor = |token: &Token| -> Option<Anchor> {
        let placement = token.placement()?;
        let position = token.position().unwrap_or_else(|| {
            layout_index.get(token.id()).copied().unwrap_or_default() as f64
        });
        Some(Anchor { placement, position })
    };

    let baseline = style.arc_baseline();
    let mut top = style.canvas_height;
    let mut edges = Vec::new();
    let mut warnings = Vec::new();
    for id in &order {
        let Some(dependent) = tree.get(id) else {
            continue;
        };
        let Some(dependent_anchor) = anchor(dependent) else {
            continue;
        };
        let x = dependent_anchor.placement.center();
        let arrowhead = Arrowhead { tip: Point::new(x, baseline), size: style.arrow_size };
        let highlighted = dependent.highlights_dependencies();

        for (governor_id, label) in dependent.governors().iter() {
            match GovernorRef::classify(governor_id) {
                GovernorRef::None => {}
                GovernorRef::Root => edges.push(EdgeGeometry::Root {
                    dependent: id.clone(),
                    x,
                    from_y: baseline - ARROW_TIP_GAP,
                    to_y: 0.0,
                    arrowhead,
                    highlighted,
                }),
                GovernorRef::Token(governor_id) => {
                    let Some(governor_anchor) = tree.get(governor_id).and_then(anchor) else {
                        log::warn!("token {id} names unknown governor {governor_id}");
                        warnings.push(LayoutWarning::DanglingGovernor {
                            dependent: id.clone(),
                            governor: SmolStr::new(governor_id),
                        });
                        continue;
                    };

                    let curve = dependency_curve(
                        governor_anchor,
                        dependent_anchor,
                        baseline,
                        style,
                        options.reverse_mode,
                    );
                    let bbox = curve.bounding_box();
                    let label_width = label_width(measure, style, label);
                    let label = EdgeLabel {
                        text: SmolStr::new(label),
                        x: bbox.min.x + bbox.width() / 2.0 - label_width / 2.0,
                        y: bbox.min.y - style.func_curve_dist,
                        width: label_width,
                    };
                    top = f64::min(top, label.y - style.label_font_size);
                    edges.push(EdgeGeometry::Arc {
                        dependent: id.clone(),
                        governor: SmolStr::new(governor_id),
                        curve,
                        bbox,
                        arrowhead,
                        label,
                        highlighted,
                    });
                }
            }
        }
    }

    let mut annotations = Vec::new();
    let mut rows = 0usize;
    for feature in options.feature_rows() {
        rows += 1;
        let y = token_y + rows as f64 * style.feature_row_height;
        for placed in &tokens {
            let Some(text) = tree.get(&placed.id).and_then(|token| token.feature(feature)) else {
                continue;
            };
            let width = label_width(measure, style, text);
            let x = if width > placed.width + ANNOTATION_OVERHANG {
                placed.x - width / 3.0
            } else {
                placed.x
            };
            annotations.push(Annotation {
                token: placed.id.clone(),
                feature,
                text: SmolStr::new(text),
                x,
                y,
            });
        }
    }

    let height =
        style.canvas_height - top + rows as f64 * style.feature_row_height + style.font_size;

    TreeLayout { tokens, edges, annotations, width: running_width, height, top, warnings }
}
