// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Arbor CLI entrypoint.
//!
//! Reads a CoNLL treebank from a file or stdin and writes SVG drawings, JSON layouts,
//! reconstructed sentences or treebank statistics to stdout.

use std::error::Error;
use std::io::{self, Read, Write};
use std::ops::ControlFlow;

use arbor::config::Config;
use arbor::pipeline::{LaidOutBlock, Pipeline};
use arbor::render::render_svg;
use arbor::stats::TreeStats;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <svg|json|sentences|stats> [--reverse] [--batch] [--config <file>] [<file>|-]\n\nReads UTF-8 CoNLL from <file>, or stdin when omitted or `-`.\n\nsvg        one SVG document per sentence\njson       one JSON layout per line\nsentences  reconstructed sentence text, one per line\nstats      dependency distance and branching statistics\n\n--reverse  right-to-left input (also ARBOR_REVERSE_MODE=1)\n--batch    lay out all sentences in parallel before writing (also ARBOR_PROGRESSIVE_LOADING=0)\n--config   JSON configuration (reverseMode, progressiveLoading, shownFeatures, style)\n\nLog verbosity follows RUST_LOG."
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Svg,
    Json,
    Sentences,
    Stats,
}

impl Command {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "svg" => Some(Self::Svg),
            "json" => Some(Self::Json),
            "sentences" => Some(Self::Sentences),
            "stats" => Some(Self::Stats),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Command,
    reverse: bool,
    batch: bool,
    config: Option<String>,
    input: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let command = args.next().as_deref().and_then(Command::parse).ok_or(())?;
    let mut options =
        CliOptions { command, reverse: false, batch: false, config: None, input: None };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--reverse" => {
                if options.reverse {
                    return Err(());
                }
                options.reverse = true;
            }
            "--batch" => {
                if options.batch {
                    return Err(());
                }
                options.batch = true;
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.config = Some(path);
            }
            "-" if options.input.is_none() => options.input = Some(arg),
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    Ok(options)
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        None | Some("-") => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

fn emit(
    command: Command,
    unit: &LaidOutBlock,
    config: &Config,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Svg => {
            out.write_all(render_svg(&unit.block, &unit.layout, &config.style).as_bytes())?;
        }
        Command::Json => {
            serde_json::to_writer(&mut *out, unit)?;
            writeln!(out)?;
        }
        Command::Sentences => writeln!(out, "{}", unit.block.sentence().trim_end())?,
        Command::Stats => {}
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "arbor".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let config = match options.config.as_deref() {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        let mut config = config.with_env_overrides()?;
        if options.reverse {
            config.reverse_mode = true;
        }
        if options.batch {
            config.progressive_loading = false;
        }

        let input = read_input(options.input.as_deref())?;
        let pipeline = Pipeline::monospace(config);
        let config = pipeline.config();

        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());

        let output = if config.progressive_loading {
            let mut emit_error = None;
            let output = pipeline.run_progressive(&input, |unit| {
                let Ok(unit) = unit else {
                    return ControlFlow::Continue(());
                };
                match emit(options.command, unit, config, &mut out) {
                    Ok(()) => ControlFlow::Continue(()),
                    Err(err) => {
                        emit_error = Some(err);
                        ControlFlow::Break(())
                    }
                }
            });
            if let Some(err) = emit_error {
                return Err(err);
            }
            output
        } else {
            let output = pipeline.run_batch(&input);
            for unit in &output.blocks {
                emit(options.command, unit, config, &mut out)?;
            }
            output
        };

        if options.command == Command::Stats {
            let stats: TreeStats = output.blocks.iter().map(|unit| unit.block.tree()).sum();
            writeln!(out, "{stats}")?;
        }
        out.flush()?;

        for failure in &output.failures {
            eprintln!("{program}: skipped {failure}");
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("arbor: {err}");
        std::process::exit(1);
    }
}
