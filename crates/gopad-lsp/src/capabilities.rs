use tower_lsp::lsp_types::*;

/// Define the server capabilities for the Go intelligence server
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        // Full text sync; requests only ever look at one line
        text_document_sync: Some(TextDocumentSyncCapability::Kind(
            TextDocumentSyncKind::FULL,
        )),

        // Function signatures, keywords and built-in types
        hover_provider: Some(HoverProviderCapability::Simple(true)),

        // Typing '.' after a package name re-triggers completion
        completion_provider: Some(CompletionOptions {
            trigger_characters: Some(vec![".".to_string()]),
            ..Default::default()
        }),

        ..Default::default()
    }
}
