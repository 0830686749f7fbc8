//! Plain-text rendering of phrases
//!
//! Optional fields only produce output when they carry a value: no source,
//! no "Source" section; no tags, no "Tags" section.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::phrases::Phrase;

/// Content of a labelled section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Text(String),
    List(Vec<String>),
}

/// A labelled block of the phrase detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: &'static str,
    pub body: SectionBody,
}

impl Section {
    fn text(label: &'static str, value: &str) -> Self {
        Self {
            label,
            body: SectionBody::Text(value.to_string()),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Meanings on one line
pub fn meanings_line(phrase: &Phrase) -> String {
    phrase.meanings.join(" / ")
}

/// Labelled sections of the detail view, in display order
pub fn detail_sections(phrase: &Phrase) -> Vec<Section> {
    let mut sections = Vec::new();

    match phrase.meanings.as_slice() {
        [] => {}
        [only] => sections.push(Section::text("Meaning", only)),
        many => sections.push(Section {
            label: "Meanings",
            body: SectionBody::List(many.to_vec()),
        }),
    }

    if let Some(source) = present(&phrase.source) {
        sections.push(Section::text("Source", source));
    }

    if !phrase.tags.is_empty() {
        sections.push(Section {
            label: "Tags",
            body: SectionBody::List(phrase.tags.clone()),
        });
    }

    if let Some(memo) = present(&phrase.memo) {
        sections.push(Section::text("Memo", memo));
    }

    sections
}

/// Compact summary used in lists and search results
pub fn card(phrase: &Phrase) -> String {
    let mut out = format!("{}\n  {}", phrase.phrase, meanings_line(phrase));
    if let Some(source) = present(&phrase.source) {
        let _ = write!(out, "\n  {source}");
    }
    if !phrase.tags.is_empty() {
        let tags: Vec<String> = phrase.tags.iter().map(|t| format!("#{t}")).collect();
        let _ = write!(out, "\n  {}", tags.join(" "));
    }
    out
}

/// Full detail view
pub fn detail(phrase: &Phrase) -> String {
    let mut out = phrase.phrase.clone();
    for section in detail_sections(phrase) {
        match section.body {
            SectionBody::Text(text) => {
                let _ = write!(out, "\n\n{}\n  {}", section.label, text);
            }
            SectionBody::List(items) if section.label == "Tags" => {
                let _ = write!(out, "\n\n{}\n  {}", section.label, items.join(", "));
            }
            SectionBody::List(items) => {
                let _ = write!(out, "\n\n{}", section.label);
                for item in items {
                    let _ = write!(out, "\n  - {item}");
                }
            }
        }
    }
    let _ = write!(
        out,
        "\n\nCreated: {} | Updated: {}",
        timestamp(&phrase.created_at),
        timestamp(&phrase.updated_at)
    );
    out
}

/// One table row: phrase and meanings
pub fn table_row(phrase: &Phrase) -> String {
    format!("{}\t{}", phrase.phrase, meanings_line(phrase))
}

/// Label/value lines of an expanded table row
pub fn expanded_row(phrase: &Phrase) -> Vec<(&'static str, String)> {
    let mut lines = Vec::new();
    if let Some(source) = present(&phrase.source) {
        lines.push(("Source", source.to_string()));
    }
    if !phrase.tags.is_empty() {
        lines.push(("Tags", phrase.tags.join(", ")));
    }
    if let Some(memo) = present(&phrase.memo) {
        lines.push(("Memo", memo.to_string()));
    }
    lines.push(("Added", added_date(&phrase.created_at)));
    for (i, meaning) in phrase.meanings.iter().enumerate() {
        lines.push(("Meanings", format!("{}. {}", i + 1, meaning)));
    }
    lines
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// `January 1, 2025`
pub fn added_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}
