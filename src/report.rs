use crate::model::{Block, ChecklistBlock, ParagraphBlock, TableBlock};

const BULLET: char = '\u{2022}';

/// Split a raw report into typed blocks.
///
/// Sections are delimited by blank lines (empty after trimming, so CRLF and
/// whitespace-only delimiter lines behave the same). Each section is matched
/// against an ordered predicate chain; the first match wins:
///
/// 1. a `|` on the first line makes the section a table — even if bullet
///    characters appear further down;
/// 2. a `•` anywhere makes it a checklist;
/// 3. everything else is a paragraph.
///
/// Pure and total: malformed content (ragged table rows, items without
/// bullets) is kept as-is rather than rejected.
pub fn classify(raw: &str) -> Vec<Block> {
    sections(raw).into_iter().map(classify_section).collect()
}

/// Group lines into non-empty sections at blank-line boundaries.
fn sections(raw: &str) -> Vec<Vec<&str>> {
    let mut out: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in raw.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn classify_section(lines: Vec<&str>) -> Block {
    let first = lines[0];

    if first.contains('|') {
        let split_row = |line: &str| -> Vec<String> {
            line.split('|').map(|cell| cell.trim().to_string()).collect()
        };
        return Block::Table(TableBlock {
            headers: split_row(first),
            rows: lines[1..].iter().map(|&l| split_row(l)).collect(),
        });
    }

    if lines.iter().any(|l| l.contains(BULLET)) {
        return Block::Checklist(ChecklistBlock {
            title: first.trim().to_string(),
            items: lines[1..]
                .iter()
                .map(|l| l.trim().trim_start_matches(BULLET).trim().to_string())
                .collect(),
        });
    }

    Block::Paragraph(ParagraphBlock {
        title: first.to_string(),
        lines: lines[1..].iter().map(|l| l.to_string()).collect(),
    })
}
