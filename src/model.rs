/// One classified structural unit of a generated report.
///
/// Reports arrive as loosely structured text; the classifier maps each
/// blank-line-delimited section onto exactly one of these variants, in
/// reading order. Table rows are intentionally not validated against the
/// header count: the upstream generator sometimes emits ragged rows and the
/// renderer tolerates them.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Table(TableBlock),
    Checklist(ChecklistBlock),
    Paragraph(ParagraphBlock),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableBlock {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChecklistBlock {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphBlock {
    pub title: String,
    /// Content lines, verbatim apart from the line split itself.
    pub lines: Vec<String>,
}
