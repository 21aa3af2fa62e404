// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dependency distance and branching statistics over trees and treebanks.

use std::fmt;
use std::iter::Sum;
use std::ops::AddAssign;

use serde::Serialize;

use crate::model::governors::GovernorRef;
use crate::model::tree::Tree;

/// Core syntactic functions; a label counts as syntactic when its part before `:` is listed.
pub const SYNTACTIC_FUNCTIONS: [&str; 24] = [
    "nsubj", "csubj", "subj", "obj", "iobj", "ccomp", "xcomp", "aux", "cop", "case", "mark", "cc",
    "advmod", "advcl", "obl", "dislocated", "vocative", "expl", "nummod", "nmod", "amod",
    "discourse", "acl", "det",
];

const SKIPPED_FUNCTIONS: [&str; 1] = ["root"];

fn base_function(label: &str) -> &str {
    label.split(':').next().unwrap_or(label)
}

pub fn is_syntactic(label: &str) -> bool {
    SYNTACTIC_FUNCTIONS.contains(&base_function(label))
}

/// Running sums; means and percentages are derived on demand so partial results merge exactly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeStats {
    pub trees: usize,
    pub relations: usize,
    pub syntactic_relations: usize,
    distance_sum: f64,
    syntactic_distance_sum: f64,
    right_branching: usize,
    syntactic_right_branching: usize,
}

impl TreeStats {
    /// Counts every dependency between two numbered tokens, skipping `root` relations.
    pub fn of(tree: &Tree) -> Self {
        let mut stats = Self { trees: 1, ..Self::default() };
        for dependent in tree.tokens() {
            let Some(position) = dependent.position() else {
                continue;
            };
            for (governor, label) in dependent.governors().iter() {
                let GovernorRef::Token(governor) = GovernorRef::classify(governor) else {
                    continue;
                };
                if SKIPPED_FUNCTIONS.contains(&base_function(label)) {
                    continue;
                }
                let Some(governor_position) = tree.get(governor).and_then(|token| token.position())
                else {
                    continue;
                };

                let distance = (position - governor_position).abs();
                let rightward = position > governor_position;
                stats.relations += 1;
                stats.distance_sum += distance;
                stats.right_branching += usize::from(rightward);
                if is_syntactic(label) {
                    stats.syntactic_relations += 1;
                    stats.syntactic_distance_sum += distance;
                    stats.syntactic_right_branching += usize::from(rightward);
                }
            }
        }
        stats
    }

    pub fn mean_distance(&self) -> f64 {
        ratio(self.distance_sum, self.relations)
    }

    pub fn syntactic_mean_distance(&self) -> f64 {
        ratio(self.syntactic_distance_sum, self.syntactic_relations)
    }

    /// Share of relations whose dependent follows its governor, in percent.
    pub fn right_branching_percent(&self) -> f64 {
        ratio(self.right_branching as f64, self.relations) * 100.0
    }

    pub fn syntactic_right_branching_percent(&self) -> f64 {
        ratio(self.syntactic_right_branching as f64, self.syntactic_relations) * 100.0
    }
}

fn ratio(sum: f64, count: usize) -> f64 {
    sum / count.max(1) as f64
}

impl AddAssign for TreeStats {
    fn add_assign(&mut self, other: Self) {
        self.trees += other.trees;
        self.relations += other.relations;
        self.syntactic_relations += other.syntactic_relations;
        self.distance_sum += other.distance_sum;
        self.syntactic_distance_sum += other.syntactic_distance_sum;
        self.right_branching += other.right_branching;
        self.syntactic_right_branching += other.syntactic_right_branching;
    }
}

impl Sum for TreeStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut total, stats| {
            total += stats;
            total
        })
    }
}

impl<'a> Sum<&'a Tree> for TreeStats {
    fn sum<I: Iterator<Item = &'a Tree>>(iter: I) -> Self {
        iter.map(Self::of).sum()
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "trees\t{}", self.trees)?;
        writeln!(f, "relations\t{}", self.relations)?;
        writeln!(f, "syntactic relations\t{}", self.syntactic_relations)?;
        writeln!(f, "mean distance\t{:.3}", self.mean_distance())?;
        writeln!(f, "syntactic mean distance\t{:.3}", self.syntactic_mean_distance())?;
        writeln!(f, "right branching %\t{:.2}", self.right_branching_percent())?;
        write!(f, "syntactic right branching %\t{:.2}", self.syntactic_right_branching_percent())
    }
}
