// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use super::columns::{ColumnFormat, ColumnFormatError, ColumnLayout};
use crate::model::block::{Block, ParseWarning};
use crate::model::token::Token;
use crate::model::tree::{ExtraBag, Tree, BEFORE_FIRST_TOKEN};

/// Value of the gloss/misc (or morphology) column meaning "no space after this token".
pub const NO_SPACE_AFTER: &str = "SpaceAfter=No";

/// Placeholder for an empty field.
pub const PLACEHOLDER: &str = "_";

const STYLE_MARKER: &str = "::";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConllParseError {
    #[error("line {line_no}: {source}")]
    UnsupportedColumnCount {
        line_no: usize,
        #[source]
        source: ColumnFormatError,
    },
}

impl ConllParseError {
    pub fn line_no(&self) -> usize {
        match self {
            Self::UnsupportedColumnCount { line_no, .. } => *line_no,
        }
    }
}

fn is_comment_line(trimmed: &str) -> bool {
    trimmed.starts_with('#')
}

/// Numeric value of an id the way the sentence reconstruction compares it.
fn id_value(id: &str) -> f64 {
    id.trim().parse::<f64>().unwrap_or(f64::NAN)
}

fn range_end(end: &str) -> f64 {
    end.trim().parse::<i64>().map_or(f64::NAN, |value| value as f64)
}

struct Record<'a> {
    fields: Vec<&'a str>,
    columns: &'static ColumnLayout,
}

impl<'a> Record<'a> {
    fn field(&self, index: usize) -> &'a str {
        self.fields.get(index).copied().unwrap_or("")
    }

    fn optional(&self, index: Option<usize>) -> Option<&'a str> {
        index.map(|index| self.field(index))
    }
}

/// Per-call parser state; nothing survives past one `parse_block` invocation.
struct BlockParser {
    reverse_mode: bool,
    tree: Tree,
    extras: ExtraBag,
    words: Vec<SmolStr>,
    warnings: Vec<ParseWarning>,
    function_styles: Vec<(SmolStr, SmolStr, usize)>,
    last_id: SmolStr,
    current_id: SmolStr,
    counter: usize,
    skip_until: f64,
}

impl BlockParser {
    fn new(reverse_mode: bool) -> Self {
        Self {
            reverse_mode,
            tree: Tree::default(),
            extras: ExtraBag::default(),
            words: Vec::new(),
            warnings: Vec::new(),
            function_styles: Vec::new(),
            last_id: SmolStr::new_static(BEFORE_FIRST_TOKEN),
            current_id: SmolStr::new_static(BEFORE_FIRST_TOKEN),
            counter: 0,
            skip_until: 0.0,
        }
    }

    fn line(&mut self, line_no: usize, raw_line: &str) -> Result<(), ConllParseError> {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        if is_comment_line(trimmed) {
            self.extras.push(self.last_id.clone(), trimmed);
            return Ok(());
        }

        let fields = trimmed.split('\t').collect::<Vec<_>>();
        let format = ColumnFormat::resolve(fields.len()).map_err(|source| {
            log::warn!("line {line_no}: {source}");
            ConllParseError::UnsupportedColumnCount { line_no, source }
        })?;
        let record = Record { fields, columns: format.columns() };

        self.current_id = match record.columns.id {
            Some(index) => SmolStr::new(record.field(index)),
            None => {
                if record.field(record.columns.token) != PLACEHOLDER {
                    self.counter += 1;
                }
                SmolStr::new(itoa::Buffer::new().format(self.counter))
            }
        };

        // A token repeated on consecutive lines only contributes another governor.
        if self.current_id != self.last_id {
            self.token_line(line_no, trimmed, format, &record);
        }

        self.governor(line_no, &record);
        self.last_id = self.current_id.clone();
        Ok(())
    }

    fn token_line(&mut self, line_no: usize, line: &str, format: ColumnFormat, record: &Record<'_>) {
        let id = self.current_id.clone();
        let parts = id.split('-').collect::<Vec<_>>();
        let text = record.field(record.columns.token);

        match parts.as_slice() {
            [single] if !single.is_empty() => {
                let mut token = Token::new(
                    id.clone(),
                    text,
                    record.field(record.columns.lemma),
                    record.field(record.columns.category),
                );
                if id_value(&id) > self.skip_until {
                    self.words.push(SmolStr::new(text));
                }
                if format == ColumnFormat::ConllU {
                    self.enhanced_columns(&mut token, record);
                }
                self.tree.insert(token);
            }
            [_, end] => {
                self.skip_until = range_end(end);
                self.words.push(SmolStr::new(text));
                self.extras.push(self.last_id.clone(), line);
            }
            _ => {
                log::warn!("line {line_no}: malformed token id {id:?}");
                self.extras.push(self.last_id.clone(), line);
                self.warnings.push(ParseWarning::MalformedLine { line_no, line: line.to_owned() });
            }
        }
    }

    fn enhanced_columns(&mut self, token: &mut Token, record: &Record<'_>) {
        let mut morph = record.optional(record.columns.morph);
        let mut gloss = record.optional(record.columns.gloss);
        if gloss == Some(NO_SPACE_AFTER) {
            gloss = Some(PLACEHOLDER);
            token.set_space_after(false);
        }
        if morph == Some(NO_SPACE_AFTER) {
            morph = Some(PLACEHOLDER);
            token.set_space_after(false);
        }
        token.set_xpos(record.optional(record.columns.xpos));
        token.set_morph(morph);
        token.set_gloss(gloss);

        let Some(secondary) = record.optional(record.columns.secondary_governors) else {
            return;
        };
        if !secondary.contains(':') {
            return;
        }
        for pair in secondary.split('|') {
            // Labels may contain colons themselves (`nmod:poss`).
            if let Some((governor, label)) = pair.split_once(':') {
                token.governors_mut().insert(governor, label);
            }
        }
    }

    fn governor(&mut self, line_no: usize, record: &Record<'_>) {
        let Some(governor_index) = record.columns.governor else {
            return;
        };
        let mut governor = record.field(governor_index);
        if governor.is_empty() || governor == PLACEHOLDER {
            return;
        }
        if governor == "-1" {
            // Dialect quirk: the real governor sits one column further right.
            governor = record.field(governor_index + 1);
        }

        let mut label = record.optional(record.columns.function).unwrap_or("");
        if let Some(marker) = label.find(STYLE_MARKER) {
            let style = &label[marker + STYLE_MARKER.len()..];
            label = &label[..marker];
            if !style.is_empty() {
                self.function_styles.push((SmolStr::new(label), SmolStr::new(style), line_no));
            }
        }

        match self.tree.get_mut(&self.current_id) {
            Some(token) => token.governors_mut().insert(governor, label),
            None => log::debug!(
                "line {line_no}: governor {governor:?} on non-token id {:?} ignored",
                self.current_id
            ),
        }
    }

    fn sentence(&self) -> String {
        let mut sentence = String::new();
        let mut buffer = itoa::Buffer::new();
        for (index, word) in self.words.iter().enumerate() {
            sentence.push_str(word);
            if self.reverse_mode {
                sentence.push(' ');
                continue;
            }
            let position = buffer.format(index + 1);
            if self.tree.get(position).is_some_and(Token::space_after) {
                sentence.push(' ');
            }
        }
        sentence
    }

    fn finish(self, source: &str) -> Block {
        let sentence = self.sentence();
        let mut block = Block::new(self.tree, self.extras, sentence, source.to_owned());
        block.warnings_mut().extend(self.warnings);

        for (label, style, line_no) in self.function_styles {
            match serde_json::from_str::<serde_json::Value>(&style) {
                Ok(value) => {
                    block.function_styles_mut().insert(label, value);
                }
                Err(err) => {
                    log::warn!("line {line_no}: ignoring style dictionary for {label:?}: {err}");
                    block.warnings_mut().push(ParseWarning::InvalidStyle {
                        line_no,
                        label,
                        reason: err.to_string(),
                    });
                }
            }
        }

        log::debug!(
            "parsed block: {} tokens, {} extra positions, {} warnings",
            block.tree().len(),
            block.extras().len(),
            block.warnings().len()
        );
        block
    }
}

/// Parses one blank-line-delimited block of tab-separated records.
///
/// - `#` lines are filed in the extra bag under the last token id seen (`0` before any token).
/// - Record dialects are resolved per line from the field count (see [`ColumnFormat::resolve`]).
/// - `a-b` range ids contribute their surface text to the sentence once and are filed as extras;
///   their constituents stay in the tree but are not repeated in the sentence.
/// - Any other unreadable id is filed as an extra and reported as a [`ParseWarning`].
///
/// With `reverse_mode`, line order is reversed before anything else and every reconstructed word
/// is followed by a space.
///
/// Only a record whose field count maps to no dialect fails the whole block.
pub fn parse_block(text: &str, reverse_mode: bool) -> Result<Block, ConllParseError> {
    let mut lines = text.lines().enumerate().map(|(idx, line)| (idx + 1, line)).collect::<Vec<_>>();
    if reverse_mode {
        lines.reverse();
    }

    let mut parser = BlockParser::new(reverse_mode);
    for (line_no, line) in lines {
        parser.line(line_no, line)?;
    }
    Ok(parser.finish(text))
}

#[cfg(test)]
mod tests {
    use super::{parse_block, ConllParseError};
    use crate::format::conll::columns::ColumnFormatError;
    use crate::model::block::ParseWarning;
    use crate::model::token::Token;

    fn ids(block: &crate::model::block::Block) -> Vec<&str> {
        block.tree().ids().collect()
    }

    fn governors<'a>(block: &'a crate::model::block::Block, id: &str) -> Vec<(&'a str, &'a str)> {
        block.tree().get(id).expect("token").governors().iter().collect()
    }

    #[test]
    fn parses_two_token_conllu_block() {
        let input = "1\tThe\tthe\tDET\t_\t_\t2\tdet\t_\t_\n2\tdog\tdog\tNOUN\t_\t_\t0\troot\t_\t_";
        let block = parse_block(input, false).expect("parse");

        assert_eq!(ids(&block), vec!["1", "2"]);
        assert_eq!(governors(&block, "1"), vec![("2", "det")]);
        assert_eq!(governors(&block, "2"), vec![("0", "root")]);
        assert_eq!(block.sentence(), "The dog ");
        assert_eq!(block.source(), input);

        let the = block.tree().get("1").expect("token");
        assert_eq!(the.lemma(), "the");
        assert_eq!(the.category(), "DET");
        assert_eq!(the.xpos(), Some("_"));
        assert_eq!(the.morph(), Some("_"));
        assert_eq!(the.gloss(), Some("_"));
        assert!(the.space_after());
        assert!(the.placement().is_none());
    }

    #[test]
    fn space_after_marker_is_normalized_and_drops_the_space() {
        let input = "1\tHello\thello\tINTJ\t_\t_\t0\troot\t_\tSpaceAfter=No\n2\t!\t!\tPUNCT\t_\t_\t1\tpunct\t_\t_";
        let block = parse_block(input, false).expect("parse");

        let hello = block.tree().get("1").expect("token");
        assert!(!hello.space_after());
        assert_eq!(hello.gloss(), Some("_"));
        assert_eq!(block.sentence(), "Hello! ");
    }

    #[test]
    fn space_after_marker_in_morphology_column_is_recognized() {
        let input = "1\tHello\thello\tINTJ\t_\tSpaceAfter=No\t0\troot\t_\t_\n2\t!\t!\tPUNCT\t_\t_\t1\tpunct\t_\t_";
        let block = parse_block(input, false).expect("parse");

        let hello = block.tree().get("1").expect("token");
        assert!(!hello.space_after());
        assert_eq!(hello.morph(), Some("_"));
        assert_eq!(block.sentence(), "Hello! ");
    }

    #[test]
    fn placeholder_and_empty_governors_add_no_edge() {
        let input = "1\tA\ta\tX\t_\t_\t_\t_\t_\t_\n2\tB\tb\tX\t_\t_\t\tdep\t_\t_";
        let block = parse_block(input, false).expect("parse");
        assert!(block.tree().get("1").expect("token").governors().is_empty());
        assert!(block.tree().get("2").expect("token").governors().is_empty());
    }

    #[test]
    fn secondary_governors_are_split_on_pipe_and_first_colon() {
        let input = "1\tshe\tshe\tPRON\t_\t_\t3\tnsubj\t2:nsubj|5:obj\t_";
        let block = parse_block(input, false).expect("parse");

        let token = block.tree().get("1").expect("token");
        assert_eq!(token.governors().get("2"), Some("nsubj"));
        assert_eq!(token.governors().get("5"), Some("obj"));
        assert_eq!(token.governors().get("3"), Some("nsubj"));
        assert_eq!(token.governors().len(), 3);

        let input = "1\tits\tits\tPRON\t_\t_\t_\t_\t4:nmod:poss|junk\t_";
        let block = parse_block(input, false).expect("parse");
        assert_eq!(governors(&block, "1"), vec![("4", "nmod:poss")]);
    }

    #[test]
    fn secondary_governor_field_without_colon_is_ignored() {
        let input = "1\tx\tx\tX\t_\t_\t0\troot\t_|3\t_";
        let block = parse_block(input, false).expect("parse");
        assert_eq!(governors(&block, "1"), vec![("0", "root")]);
    }

    #[test]
    fn multiword_range_contributes_surface_text_once() {
        let input = [
            "1\tIl\til\tPRON\t_\t_\t2\tnsubj\t_\t_",
            "2\tparle\tparler\tVERB\t_\t_\t0\troot\t_\t_",
            "3-4\tdu\t_\t_\t_\t_\t_\t_\t_\t_",
            "3\tde\tde\tADP\t_\t_\t5\tcase\t_\t_",
            "4\tle\tle\tDET\t_\t_\t5\tdet\t_\t_",
            "5\tvin\tvin\tNOUN\t_\t_\t2\tobl\t_\t_",
        ]
        .join("\n");
        let block = parse_block(&input, false).expect("parse");

        assert!(!block.tree().contains("3-4"));
        assert_eq!(ids(&block), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(block.extras().get("2"), Some(&["3-4\tdu\t_\t_\t_\t_\t_\t_\t_\t_".to_owned()][..]));
        assert_eq!(block.sentence().matches("du").count(), 1);
        assert!(!block.sentence().contains(" de "));
        assert!(block.sentence().starts_with("Il parle du"));
    }

    #[test]
    fn comments_are_keyed_by_last_token_id() {
        let input = "# sent_id = s1\n1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n# inner\n2\tb\tb\tX\t_\t_\t1\tdep\t_\t_";
        let block = parse_block(input, false).expect("parse");

        assert_eq!(block.extras().get("0"), Some(&["# sent_id = s1".to_owned()][..]));
        assert_eq!(block.extras().get("1"), Some(&["# inner".to_owned()][..]));
        assert_eq!(block.tree().len(), 2);
    }

    #[test]
    fn malformed_id_is_filed_as_extra_and_parsing_continues() {
        let input = "1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n1-2-3\tb\tb\tX\t_\t_\t_\t_\t_\t_\n2\tc\tc\tX\t_\t_\t1\tdep\t_\t_";
        let block = parse_block(input, false).expect("parse");

        assert_eq!(ids(&block), vec!["1", "2"]);
        assert_eq!(block.extras().get("1").map(<[String]>::len), Some(1));
        assert!(matches!(
            block.warnings(),
            [ParseWarning::MalformedLine { line_no: 2, .. }]
        ));
    }

    #[test]
    fn repeated_id_lines_add_governors_to_the_same_token() {
        let input = "1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n2\tb\tb\tX\t_\t_\t1\tobj\t_\t_\n2\tb\tb\tX\t_\t_\t3\tsubj\t_\t_\n3\tc\tc\tX\t_\t_\t1\tdep\t_\t_";
        let block = parse_block(input, false).expect("parse");

        assert_eq!(block.tree().len(), 3);
        assert_eq!(governors(&block, "2"), vec![("1", "obj"), ("3", "subj")]);
        assert_eq!(block.sentence(), "a b c ");
    }

    #[test]
    fn minus_one_governor_reads_the_next_column() {
        let input = "1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n2\tb\tb\tX\t_\t_\t-1\t1\t_\t_";
        let block = parse_block(input, false).expect("parse");
        assert_eq!(governors(&block, "2"), vec![("1", "1")]);
    }

    #[test]
    fn style_dictionary_is_split_off_the_function_label() {
        let input = "1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n2\tb\tb\tX\t_\t_\t1\tobj::{\"stroke\":\"red\"}\t_\t_";
        let block = parse_block(input, false).expect("parse");

        assert_eq!(governors(&block, "2"), vec![("1", "obj")]);
        assert_eq!(
            block.function_styles().get("obj"),
            Some(&serde_json::json!({ "stroke": "red" }))
        );
    }

    #[test]
    fn invalid_style_dictionary_is_reported_not_fatal() {
        let input = "1\ta\ta\tX\t_\t_\t0\troot::{nope\t_\t_";
        let block = parse_block(input, false).expect("parse");

        assert_eq!(governors(&block, "1"), vec![("0", "root")]);
        assert!(block.function_styles().is_empty());
        assert!(matches!(block.warnings(), [ParseWarning::InvalidStyle { line_no: 1, .. }]));
    }

    #[test]
    fn compact_format_counts_ids_and_keeps_governors() {
        let input = "The\tDET\t2\tdet\ndog\tNOUN\t3\tnsubj\nbarks\tVERB\t0\troot";
        let block = parse_block(input, false).expect("parse");

        assert_eq!(ids(&block), vec!["1", "2", "3"]);
        let dog = block.tree().get("2").expect("token");
        assert_eq!(dog.text(), "dog");
        assert_eq!(dog.lemma(), "dog");
        assert_eq!(dog.category(), "NOUN");
        assert_eq!(dog.xpos(), None);
        assert_eq!(governors(&block, "2"), vec![("3", "nsubj")]);
        assert_eq!(block.sentence(), "The dog barks ");
    }

    #[test]
    fn compact_placeholder_token_continues_the_previous_token() {
        let input = "eats\tVERB\t0\troot\n_\t_\t3\tconj\napples\tNOUN\t1\tobj";
        let block = parse_block(input, false).expect("parse");

        assert_eq!(ids(&block), vec!["1", "2"]);
        assert_eq!(governors(&block, "1"), vec![("0", "root"), ("3", "conj")]);
    }

    #[test]
    fn conll2009_columns_are_mapped() {
        let fields = ["1", "Dogs", "dog", "dog", "NNS", "NNS", "_", "_", "2", "2", "SBJ", "SBJ", "_", "_"];
        let block = parse_block(&fields.join("\t"), false).expect("parse");

        let dogs = block.tree().get("1").expect("token");
        assert_eq!(dogs.text(), "Dogs");
        assert_eq!(dogs.lemma(), "dog");
        assert_eq!(dogs.category(), "NNS");
        assert_eq!(dogs.xpos(), None);
        assert_eq!(governors(&block, "1"), vec![("2", "SBJ")]);
    }

    #[test]
    fn records_wider_than_fourteen_read_like_fourteen() {
        let fields = ["1", "Dogs", "dog", "dog", "NNS", "NNS", "_", "_", "2", "2", "SBJ", "SBJ", "_", "_"];
        let narrow = parse_block(&fields.join("\t"), false).expect("parse 14");
        let wide = parse_block(&format!("{}\textra\tmore", fields.join("\t")), false).expect("parse 16");

        assert_eq!(narrow.tree(), wide.tree());
        assert_eq!(narrow.sentence(), wide.sentence());
    }

    #[test]
    fn unsupported_column_count_fails_the_block() {
        let input = "1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n2\tb\tb\tX\t1\tdep";
        assert_eq!(
            parse_block(input, false),
            Err(ConllParseError::UnsupportedColumnCount {
                line_no: 2,
                source: ColumnFormatError::UnsupportedColumnCount { count: 6 },
            })
        );
    }

    #[test]
    fn reverse_mode_reverses_lines_and_always_appends_spaces() {
        let input = "1\tHello\thello\tINTJ\t_\t_\t0\troot\t_\tSpaceAfter=No\n2\t!\t!\tPUNCT\t_\t_\t1\tpunct\t_\t_";
        let block = parse_block(input, true).expect("parse");

        assert_eq!(ids(&block), vec!["2", "1"]);
        assert_eq!(block.sentence(), "! Hello ");
        assert_eq!(governors(&block, "2"), vec![("1", "punct")]);
    }

    #[test]
    fn reversing_twice_matches_forward_parsing() {
        let input = "# text = The dog\n1\tThe\tthe\tDET\t_\t_\t2\tdet\t_\t_\n2\tdog\tdog\tNOUN\t_\t_\t0\troot\t_\t_";
        let reversed = input.lines().rev().collect::<Vec<_>>().join("\n");

        let forward = parse_block(input, false).expect("forward");
        let twice = parse_block(&reversed, true).expect("reverse of reversed");

        assert_eq!(forward.tree(), twice.tree());
        assert_eq!(forward.sentence(), twice.sentence());
        assert_eq!(forward.extras(), twice.extras());
    }

    #[test]
    fn blank_lines_inside_a_block_are_skipped() {
        let input = "1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n   \n2\tb\tb\tX\t_\t_\t1\tdep\t_\t_";
        let block = parse_block(input, false).expect("parse");
        assert_eq!(block.tree().tokens().map(Token::text).collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
