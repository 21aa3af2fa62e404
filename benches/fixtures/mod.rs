// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use arbor::layout::{EdgeGeometry, TreeLayout};
use arbor::model::Block;

const LABELS: [&str; 8] = ["nsubj", "obj", "det", "amod", "advmod", "obl:tmod", "case", "conj"];
const CATEGORIES: [&str; 6] = ["NOUN", "VERB", "DET", "ADJ", "ADV", "ADP"];

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub sentences: usize,
    pub tokens: usize,
    /// Every n-th token also carries a secondary governor (0 = never).
    pub secondary_every: usize,
    /// Every n-th token is preceded by a multi-word range line (0 = never).
    pub range_every: usize,
    pub word_len: usize,
}

impl Params {
    pub const fn new(
        sentences: usize,
        tokens: usize,
        secondary_every: usize,
        range_every: usize,
        word_len: usize,
    ) -> Self {
        Self { sentences, tokens, secondary_every, range_every, word_len }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    LargeLongWords,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LargeLongWords => "large_long_words",
        }
    }

    pub const fn params(self) -> Params {
        match self {
            Self::Small => Params::new(1, 8, 0, 0, 4),
            Self::Medium => Params::new(1, 40, 5, 11, 8),
            Self::LargeLongWords => Params::new(1, 160, 3, 7, 24),
        }
    }
}

/// Governor of token `id` (1-based): token 1 is the root, every other token hangs off an earlier
/// one at a varying distance.
fn governor(id: usize) -> usize {
    if id == 1 {
        0
    } else {
        (id * 7) % (id - 1) + 1
    }
}

/// One CoNLL-U block with `params.tokens` tokens.
pub fn sentence(params: Params, index: usize) -> String {
    let mut lines = Vec::with_capacity(params.tokens + 2);
    lines.push(format!("# sent_id = bench-{index:04}"));

    for id in 1..=params.tokens {
        let word = ascii_repeat_to_len(&format!("w{index}_{id}"), 'o', params.word_len);
        if params.range_every > 0 && id % params.range_every == 0 && id < params.tokens {
            lines.push(format!("{id}-{}\t{word}{word}\t_\t_\t_\t_\t_\t_\t_\t_", id + 1));
        }

        let gov = governor(id);
        let label = if gov == 0 { "root" } else { LABELS[id % LABELS.len()] };
        let category = CATEGORIES[id % CATEGORIES.len()];
        let deps = if params.secondary_every > 0 && id % params.secondary_every == 0 && gov > 1 {
            format!("{}:conj|{gov}:{label}", gov - 1)
        } else {
            "_".to_owned()
        };
        let misc = if id % 4 == 0 { "SpaceAfter=No" } else { "_" };
        lines.push(format!(
            "{id}\t{word}\t{}\t{category}\t_\tNumber=Sing\t{gov}\t{label}\t{deps}\t{misc}",
            word.to_lowercase()
        ));
    }

    lines.join("\n")
}

/// A treebank of `params.sentences` blocks separated by blank lines.
pub fn treebank(params: Params) -> String {
    (0..params.sentences)
        .map(|index| sentence(params, index))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn fixture(case: Case) -> String {
    sentence(case.params(), 0)
}

pub fn checksum_block(block: &Block) -> u64 {
    let mut acc = 0u64;
    for token in block.tree().tokens() {
        acc = acc.wrapping_mul(131).wrapping_add(token.id().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(token.text().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(token.governors().len() as u64);
    }
    acc = acc.wrapping_mul(131).wrapping_add(block.extras().len() as u64);
    acc.wrapping_mul(131).wrapping_add(block.sentence().len() as u64)
}

pub fn checksum_layout(layout: &TreeLayout) -> u64 {
    let mut acc = 0u64;
    for token in layout.tokens() {
        acc = acc.wrapping_mul(131).wrapping_add(token.x.to_bits());
    }
    for edge in layout.edges() {
        acc = match edge {
            EdgeGeometry::Root { x, .. } => acc.wrapping_mul(131).wrapping_add(x.to_bits()),
            EdgeGeometry::Arc { bbox, label, .. } => acc
                .wrapping_mul(131)
                .wrapping_add(bbox.min.y.to_bits())
                .wrapping_mul(131)
                .wrapping_add(label.x.to_bits()),
        };
    }
    acc.wrapping_mul(131).wrapping_add(layout.height().to_bits())
}
