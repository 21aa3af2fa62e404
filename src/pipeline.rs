// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drives parsing and layout over a whole treebank.
//!
//! One unit of work is one block: parsed and laid out completely before it is handed out. The
//! progressive driver yields between units and lets the caller stop at any boundary; the batch
//! driver processes every block in parallel and returns them in input order.

use std::ops::ControlFlow;
use std::sync::OnceLock;

use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;

use crate::config::Config;
use crate::format::conll::{parse_block, ConllParseError};
use crate::layout::{layout_tree, LayoutOptions, MonospaceMetrics, TextMeasure, TreeLayout};
use crate::model::Block;

fn block_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"\n\s*\n\s*\n*").expect("valid block separator"))
}

/// Splits `input` into blocks on blank lines. Whitespace-only blocks are dropped.
pub fn split_blocks(input: &str) -> impl Iterator<Item = &str> {
    block_separator().split(input.trim()).filter(|block| !block.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaidOutBlock {
    pub index: usize,
    pub block: Block,
    pub layout: TreeLayout,
}

/// A block that could not be parsed; the remaining blocks are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("block {index}: {error}")]
pub struct BlockFailure {
    pub index: usize,
    #[source]
    pub error: ConllParseError,
}

pub type Unit = Result<LaidOutBlock, BlockFailure>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineOutput {
    pub blocks: Vec<LaidOutBlock>,
    pub failures: Vec<BlockFailure>,
}

impl PipelineOutput {
    fn push(&mut self, unit: Unit) {
        match unit {
            Ok(block) => self.blocks.push(block),
            Err(failure) => self.failures.push(failure),
        }
    }
}

impl FromIterator<Unit> for PipelineOutput {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        let mut output = Self::default();
        for unit in iter {
            output.push(unit);
        }
        output
    }
}

pub struct Pipeline<M> {
    config: Config,
    options: LayoutOptions,
    measure: M,
}

impl Pipeline<MonospaceMetrics> {
    /// Pipeline measuring text with a monospace approximation of the configured font size.
    pub fn monospace(config: Config) -> Self {
        let measure = MonospaceMetrics::for_font_size(config.style.font_size);
        Self::new(config, measure)
    }
}

impl<M: TextMeasure> Pipeline<M> {
    pub fn new(config: Config, measure: M) -> Self {
        let options = config.layout_options();
        Self { config, options, measure }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses and lays out one block.
    pub fn process_block(&self, index: usize, text: &str) -> Unit {
        let mut block = parse_block(text, self.config.reverse_mode)
            .map_err(|error| BlockFailure { index, error })?;
        let layout = layout_tree(block.tree_mut(), &self.measure, &self.config.style, &self.options);
        log::debug!(
            "block {index}: {} tokens, {} edges",
            block.tree().len(),
            layout.edges().len()
        );
        Ok(LaidOutBlock { index, block, layout })
    }

    /// Lazily processes `input`, one block per item.
    pub fn stream<'p, 'a>(&'p self, input: &'a str) -> BlockStream<'p, 'a, M> {
        BlockStream { pipeline: self, blocks: Box::new(split_blocks(input)), next_index: 0 }
    }

    /// Processes blocks one at a time, calling `on_unit` after each completed unit.
    ///
    /// Returning [`ControlFlow::Break`] abandons the remaining blocks; everything delivered so far
    /// is kept in the output.
    pub fn run_progressive<F>(&self, input: &str, mut on_unit: F) -> PipelineOutput
    where
        F: FnMut(&Unit) -> ControlFlow<()>,
    {
        let mut output = PipelineOutput::default();
        for unit in self.stream(input) {
            let flow = on_unit(&unit);
            output.push(unit);
            if flow.is_break() {
                log::debug!("stopped after {} blocks", output.blocks.len() + output.failures.len());
                break;
            }
        }
        output
    }
}

impl<M: TextMeasure + Sync> Pipeline<M> {
    /// Processes every block in parallel; results keep input order.
    pub fn run_batch(&self, input: &str) -> PipelineOutput {
        let blocks = split_blocks(input).collect::<Vec<_>>();
        log::debug!("processing {} blocks in parallel", blocks.len());
        let units = blocks
            .par_iter()
            .enumerate()
            .map(|(index, text)| self.process_block(index, text))
            .collect::<Vec<_>>();
        units.into_iter().collect()
    }

    /// Progressive or batch processing, as configured.
    pub fn run(&self, input: &str) -> PipelineOutput {
        if self.config.progressive_loading {
            self.run_progressive(input, |_| ControlFlow::Continue(()))
        } else {
            self.run_batch(input)
        }
    }
}

/// Iterator over processed blocks. Dropping it between items cancels the rest.
pub struct BlockStream<'p, 'a, M> {
    pipeline: &'p Pipeline<M>,
    blocks: Box<dyn Iterator<Item = &'a str> + 'a>,
    next_index: usize,
}

impl<M: TextMeasure> Iterator for BlockStream<'_, '_, M> {
    type Item = Unit;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.blocks.next()?;
        let index = self.next_index;
        self.next_index += 1;
        let unit = self.pipeline.process_block(index, text);
        if let Err(failure) = &unit {
            log::warn!("skipping {failure}");
        }
        Some(unit)
    }
}
