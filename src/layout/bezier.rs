// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cubic Bezier geometry and tight bounding boxes.
//!
//! Rendering surfaces disagree about the bounding box of a curved path (some return the control
//! polygon's box), so label placement computes the box analytically: the extrema of each axis are
//! the roots of the derivative, a quadratic in `t`.

use serde::Serialize;
use smallvec::SmallVec;

const EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    fn empty() -> Self {
        Self {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    fn expand_x(&mut self, x: f64) {
        self.min.x = self.min.x.min(x);
        self.max.x = self.max.x.max(x);
    }

    fn expand_y(&mut self, y: f64) {
        self.min.y = self.min.y.min(y);
        self.max.y = self.max.y.max(y);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// A cubic Bezier: start `p0`, control points `p1` and `p2`, end `p3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBezier {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    pub fn point_at(&self, t: f64) -> Point {
        Point::new(
            cubic_at(self.p0.x, self.p1.x, self.p2.x, self.p3.x, t),
            cubic_at(self.p0.y, self.p1.y, self.p2.y, self.p3.y, t),
        )
    }

    pub fn bounding_box(&self) -> BoundingBox {
        bounding_box(self.p0, self.p1, self.p2, self.p3)
    }

    /// Absolute SVG path data: `M x0,y0 C x1,y1 x2,y2 x3,y3`.
    pub fn to_svg_path(&self) -> String {
        format!(
            "M{},{} C{},{} {},{} {},{}",
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x, self.p3.y
        )
    }
}

fn cubic_at(a0: f64, a1: f64, a2: f64, a3: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * mt * a0 + 3.0 * mt * mt * t * a1 + 3.0 * mt * t * t * a2 + t * t * t * a3
}

/// Parameters in `(0, 1)` where the derivative of one axis vanishes.
fn extremum_parameters(a0: f64, a1: f64, a2: f64, a3: f64) -> SmallVec<[f64; 2]> {
    let a = -3.0 * a0 + 9.0 * a1 - 9.0 * a2 + 3.0 * a3;
    let b = 6.0 * a0 - 12.0 * a1 + 6.0 * a2;
    let c = 3.0 * a1 - 3.0 * a0;
    let inside = |t: f64| 0.0 < t && t < 1.0;

    let mut roots = SmallVec::new();
    if a.abs() < EPSILON {
        // Derivative is linear (or constant); a constant derivative has no interior extremum.
        if b.abs() >= EPSILON {
            let t = -c / b;
            if inside(t) {
                roots.push(t);
            }
        }
        return roots;
    }

    let discriminant = b * b - 4.0 * c * a;
    if discriminant < 0.0 {
        return roots;
    }
    let sqrt = discriminant.sqrt();
    for t in [(-b + sqrt) / (2.0 * a), (-b - sqrt) / (2.0 * a)] {
        if inside(t) {
            roots.push(t);
        }
    }
    roots
}

/// Tight axis-aligned bounding box of the cubic Bezier `p0, p1, p2, p3`.
///
/// Each axis is bounded by the endpoints plus the curve evaluated at the interior roots of that
/// axis' derivative.
pub fn bounding_box(p0: Point, p1: Point, p2: Point, p3: Point) -> BoundingBox {
    let mut bbox = BoundingBox::empty();
    for end in [p0, p3] {
        bbox.expand_x(end.x);
        bbox.expand_y(end.y);
    }
    for t in extremum_parameters(p0.x, p1.x, p2.x, p3.x) {
        bbox.expand_x(cubic_at(p0.x, p1.x, p2.x, p3.x, t));
    }
    for t in extremum_parameters(p0.y, p1.y, p2.y, p3.y) {
        bbox.expand_y(cubic_at(p0.y, p1.y, p2.y, p3.y, t));
    }
    bbox
}
