//! Bundled documentation
//!
//! The documentation view renders the project README, selected by
//! language. Both README files are embedded at compile time and parsed
//! once into a small line-oriented block model; anything the parser does
//! not recognize degrades to a plain paragraph.

use once_cell::sync::Lazy;

use crate::i18n::Language;

/// One rendered block of a markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocBlock {
    /// A heading with level 1-3
    Heading { level: u8, text: String },
    /// A bullet list item
    Bullet(String),
    /// A fenced code block, fences stripped
    Code(String),
    /// A plain paragraph line
    Paragraph(String),
}

/// Parse a markdown source into blocks
///
/// Line-oriented on purpose: headings `#`..`###`, `-` bullets, and
/// triple-backtick fences are recognized; everything else is a paragraph.
/// An unterminated fence swallows the rest of the document as code.
pub fn parse(source: &str) -> Vec<DocBlock> {
    let mut blocks = Vec::new();
    let mut code: Option<Vec<String>> = None;

    for line in source.lines() {
        if line.trim_start().starts_with("```") {
            match code.take() {
                Some(lines) => blocks.push(DocBlock::Code(lines.join("\n"))),
                None => code = Some(Vec::new()),
            }
            continue;
        }
        if let Some(lines) = code.as_mut() {
            lines.push(line.to_string());
            continue;
        }

        if let Some(text) = line.strip_prefix("### ") {
            blocks.push(DocBlock::Heading { level: 3, text: text.to_string() });
        } else if let Some(text) = line.strip_prefix("## ") {
            blocks.push(DocBlock::Heading { level: 2, text: text.to_string() });
        } else if let Some(text) = line.strip_prefix("# ") {
            blocks.push(DocBlock::Heading { level: 1, text: text.to_string() });
        } else if let Some(text) = line.strip_prefix("- ") {
            blocks.push(DocBlock::Bullet(text.to_string()));
        } else if !line.trim().is_empty() {
            blocks.push(DocBlock::Paragraph(line.to_string()));
        }
    }

    if let Some(lines) = code {
        blocks.push(DocBlock::Code(lines.join("\n")));
    }
    blocks
}

static README_EN: Lazy<Vec<DocBlock>> = Lazy::new(|| parse(include_str!("../README.md")));
static README_ZH: Lazy<Vec<DocBlock>> = Lazy::new(|| parse(include_str!("../README.zh.md")));

/// The bundled README for a language, parsed once
pub fn readme(lang: Language) -> &'static [DocBlock] {
    match lang {
        Language::Zh => &README_ZH,
        Language::En => &README_EN,
    }
}
