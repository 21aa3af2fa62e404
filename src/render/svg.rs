// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde_json::Value;

use super::text::escape_xml;
use crate::layout::{EdgeGeometry, Style, TreeLayout};
use crate::model::Block;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

fn class_list(base: &'static str, extra: &'static str, enabled: bool) -> String {
    if enabled {
        format!("{base} {extra}")
    } else {
        base.to_owned()
    }
}

/// Extra attributes for a function label taken from the block's style dictionary.
fn style_attributes(style: Option<&Value>) -> String {
    let Some(Value::Object(entries)) = style else {
        return String::new();
    };

    let mut out = String::new();
    for (name, value) in entries {
        let valid_name = !name.is_empty()
            && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !valid_name {
            continue;
        }
        let value = match value {
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            _ => continue,
        };
        out.push_str(&format!(" {name}=\"{}\"", escape_xml(&value)));
    }
    out
}

/// Writes a standalone SVG document for one laid-out block.
pub fn write_svg<W: fmt::Write>(
    out: &mut W,
    block: &Block,
    layout: &TreeLayout,
    style: &Style,
) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="{SVG_NAMESPACE}" version="1.1" width="{}" height="{}">"#,
        layout.width(),
        layout.height()
    )?;
    writeln!(out, "  <title>{}</title>", escape_xml(block.sentence().trim_end()))?;
    writeln!(out, r#"  <g transform="translate(0,{})">"#, layout.translate_y())?;

    for token in layout.tokens() {
        writeln!(
            out,
            r#"    <text class="{}" x="{}" y="{}" font-size="{}">{}</text>"#,
            class_list("token", "highlight", token.highlighted),
            token.x,
            token.y,
            style.font_size,
            escape_xml(&token.text)
        )?;
    }

    for annotation in layout.annotations() {
        writeln!(
            out,
            r#"    <text class="{}" x="{}" y="{}" font-size="{}">{}</text>"#,
            annotation.feature.css_class(),
            annotation.x,
            annotation.y,
            style.label_font_size,
            escape_xml(&annotation.text)
        )?;
    }

    for edge in layout.edges() {
        let highlighted = edge.is_highlighted();
        writeln!(
            out,
            r#"    <path class="{}" d="{}" fill="none" stroke="black"/>"#,
            class_list("curve", "curvehighlight", highlighted),
            edge.to_svg_path()
        )?;
        writeln!(
            out,
            r#"    <path class="{}" d="{}"/>"#,
            class_list("arrowhead", "curvehighlight", highlighted),
            edge.arrowhead().to_svg_path()
        )?;
        if let EdgeGeometry::Arc { label, .. } = edge {
            writeln!(
                out,
                r#"    <text class="{}" x="{}" y="{}" font-size="{}"{}>{}</text>"#,
                class_list("deprel", "dephighlight", highlighted),
                label.x,
                label.y,
                style.label_font_size,
                style_attributes(block.function_styles().get(label.text.as_str())),
                escape_xml(&label.text)
            )?;
        }
    }

    writeln!(out, "  </g>")?;
    writeln!(out, "</svg>")
}

/// Renders one laid-out block to an SVG document string.
pub fn render_svg(block: &Block, layout: &TreeLayout, style: &Style) -> String {
    let mut out = String::new();
    write_svg(&mut out, block, layout, style).expect("writing to a String cannot fail");
    out
}
