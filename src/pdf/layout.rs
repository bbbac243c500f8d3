use crate::model::Block;

/// A4 portrait, in points.
const A4_WIDTH: f32 = 595.28;
const A4_HEIGHT: f32 = 841.89;

/// Named layout constants for one render. Column width and margins are
/// configuration here, not magic numbers scattered through draw calls.
#[derive(Clone, Debug)]
pub struct LayoutPolicy {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    /// Fixed table column width; column `i` starts at `margin + i * column_width`.
    /// Cells whose index places them past the right edge are drawn there
    /// anyway (not clipped, not wrapped) — accepted limitation of the
    /// fixed-width scheme.
    pub column_width: f32,
    pub line_height: f32,
    pub emphasis_size: f32,
    pub body_size: f32,
    /// Extra indent for checklist items, relative to the left margin.
    pub bullet_indent: f32,
    /// Blank lines of separator spacing after every block.
    pub block_gap_lines: f32,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            margin: 48.0,
            column_width: 120.0,
            line_height: 14.0,
            emphasis_size: 11.0,
            body_size: 10.0,
            bullet_indent: 12.0,
            block_gap_lines: 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Bold face, used for section titles and table headers.
    Emphasis,
    Body,
}

/// Receiver for draw instructions. `y` is measured from the top edge of the
/// current page; backends that count from the bottom (PDF) flip the axis.
/// A sink starts with one open page; `start_page` begins the next one.
pub trait DrawSink {
    fn start_page(&mut self);
    fn text(&mut self, x: f32, y: f32, style: TextStyle, text: &str);
}

/// Mutable layout state: current page and vertical position. Advances
/// monotonically within a page and resets to the top margin on page break.
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    pub page_index: usize,
    pub y: f32,
    pub page_height: f32,
    pub margin: f32,
}

impl Cursor {
    pub fn new(policy: &LayoutPolicy) -> Self {
        Self {
            page_index: 0,
            y: policy.margin,
            page_height: policy.page_height,
            margin: policy.margin,
        }
    }

    /// Claim vertical room for one drawn line and return the y to draw it at.
    /// If the line would pass `page_height - margin`, the page is broken
    /// first and the line lands at the top of the new page.
    pub fn line(&mut self, height: f32, sink: &mut dyn DrawSink) -> f32 {
        if self.y + height > self.page_height - self.margin {
            self.page_index += 1;
            self.y = self.margin;
            sink.start_page();
        }
        let top = self.y;
        self.y += height;
        top
    }

    /// Advance past undrawn space. Gaps never break the page themselves; an
    /// oversized `y` is resolved by the next `line` call, so a trailing gap
    /// after the last block cannot produce an empty page.
    pub fn gap(&mut self, height: f32) {
        self.y += height;
    }
}

/// Lay one block out onto the page, emitting draw instructions to `sink` and
/// advancing `cursor`. Greedy and non-lookahead: a block's lines are placed
/// one at a time and may straddle a page boundary. Never fails, whatever the
/// block contains.
pub fn place(
    block: &Block,
    cursor: &mut Cursor,
    sink: &mut dyn DrawSink,
    policy: &LayoutPolicy,
) {
    let lh = policy.line_height;
    match block {
        Block::Table(table) => {
            let y = cursor.line(lh, sink);
            for (i, header) in table.headers.iter().enumerate() {
                sink.text(
                    policy.margin + i as f32 * policy.column_width,
                    y,
                    TextStyle::Emphasis,
                    header,
                );
            }
            for row in &table.rows {
                let y = cursor.line(lh, sink);
                for (i, cell) in row.iter().enumerate() {
                    sink.text(
                        policy.margin + i as f32 * policy.column_width,
                        y,
                        TextStyle::Body,
                        cell,
                    );
                }
            }
        }
        Block::Checklist(list) => {
            let y = cursor.line(lh, sink);
            sink.text(policy.margin, y, TextStyle::Emphasis, &list.title);
            cursor.gap(lh);
            for item in &list.items {
                let y = cursor.line(lh, sink);
                let line = format!("\u{2022} {item}");
                sink.text(policy.margin + policy.bullet_indent, y, TextStyle::Body, &line);
            }
        }
        Block::Paragraph(para) => {
            let y = cursor.line(lh, sink);
            sink.text(policy.margin, y, TextStyle::Emphasis, &para.title);
            cursor.gap(lh);
            for line in &para.lines {
                let y = cursor.line(lh, sink);
                sink.text(policy.margin, y, TextStyle::Body, line);
            }
        }
    }
    cursor.gap(policy.block_gap_lines * lh);
}
