// WHY: Table regions scanned as fragments of a document pass
// Header detection and footnote skipping decide how a table is scanned, or whether it is at all

/// Plain-text content of one table, rows separated by line breaks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFragment {
    text: String,
    row_count: usize,
    has_header_row: bool,
    following_paragraph: Option<String>,
}

impl TableFragment {
    /// Build from region text; `\r\n`, `\n` and `\r` all end a row
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut rows = text.split(['\r', '\n']).filter(|row| !row.trim().is_empty());
        let first_row = rows.next();
        let row_count = first_row.map_or(0, |_| 1 + rows.count());
        let has_header_row = row_count > 1 && first_row.is_some_and(is_header_row);

        Self {
            text,
            row_count,
            has_header_row,
            following_paragraph: None,
        }
    }

    /// Attach the paragraph that follows the table in the host document
    pub fn with_following_paragraph(mut self, paragraph: impl Into<String>) -> Self {
        self.following_paragraph = Some(paragraph.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn has_header_row(&self) -> bool {
        self.has_header_row
    }

    /// Why this table should not be scanned, if it should not
    pub fn skip_reason(&self) -> Option<&'static str> {
        if self.row_count <= 1 {
            return Some("table has at most one row");
        }
        if self.following_paragraph.as_deref().is_some_and(is_abbreviation_footnote) {
            return Some("table already has an abbreviations footnote");
        }
        None
    }
}

/// A row that reads the same when uppercased
pub fn is_header_row(row: &str) -> bool {
    row.to_uppercase() == row
}

/// Paragraph text that is an existing "Abbreviations: X - def; ..." footnote
pub fn is_abbreviation_footnote(paragraph: &str) -> bool {
    let trimmed = paragraph.trim();
    trimmed.starts_with("Abbreviations")
        && trimmed != "Abbreviations"
        && (trimmed.contains('-') || trimmed.contains(';'))
}
