use gopad_lsp_core::{complete_at, registry, CompletionCandidate, CompletionKind};
use tower_lsp::lsp_types::*;

use crate::document::{char_column, utf16_column, Document};

/// Convert a core completion candidate to an LSP completion item
fn convert_to_lsp_completion(candidate: &CompletionCandidate, line: u32, text: &str) -> CompletionItem {
    let kind = match candidate.kind {
        CompletionKind::Function => CompletionItemKind::FUNCTION,
        CompletionKind::Constant => CompletionItemKind::CONSTANT,
        CompletionKind::Variable => CompletionItemKind::VARIABLE,
        CompletionKind::Snippet => CompletionItemKind::SNIPPET,
        CompletionKind::Keyword => CompletionItemKind::KEYWORD,
        CompletionKind::TypeParameter => CompletionItemKind::TYPE_PARAMETER,
        CompletionKind::Module => CompletionItemKind::MODULE,
    };

    let insert_text_format = if candidate.is_snippet() {
        InsertTextFormat::SNIPPET
    } else {
        InsertTextFormat::PLAIN_TEXT
    };

    let range = Range::new(
        Position::new(line, utf16_column(text, candidate.range.start)),
        Position::new(line, utf16_column(text, candidate.range.end)),
    );

    CompletionItem {
        label: candidate.label.clone(),
        kind: Some(kind),
        detail: candidate.detail.clone(),
        insert_text_format: Some(insert_text_format),
        text_edit: Some(CompletionTextEdit::Edit(TextEdit::new(
            range,
            candidate.insert_text.clone(),
        ))),
        ..Default::default()
    }
}

/// Get completion items for a position in the document
pub fn get_completions(doc: &Document, position: Position) -> Vec<CompletionItem> {
    // Past the last line there is nothing typed yet
    let text = doc.line(position.line).unwrap_or_default();
    let column = char_column(text, position.character);

    complete_at(registry(), text, column)
        .iter()
        .map(|c| convert_to_lsp_completion(c, position.line, text))
        .collect()
}
