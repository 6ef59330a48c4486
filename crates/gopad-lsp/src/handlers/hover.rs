use gopad_lsp_core::{hover, registry, word_at};
use tower_lsp::lsp_types::*;

use crate::document::{char_column, utf16_column, Document};

/// Get hover information for a position in the document
pub fn get_hover(doc: &Document, position: Position) -> Option<Hover> {
    let text = doc.line(position.line)?;
    let (word, span) = word_at(text, char_column(text, position.character))?;
    let info = hover(registry(), &word)?;

    Some(Hover {
        contents: HoverContents::Array(
            info.contents
                .into_iter()
                .map(MarkedString::from_markdown)
                .collect(),
        ),
        range: Some(Range::new(
            Position::new(position.line, utf16_column(text, span.start)),
            Position::new(position.line, utf16_column(text, span.end)),
        )),
    })
}
