use dashmap::DashMap;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use tracing::{debug, info, warn};

use crate::capabilities;
use crate::document::Document;
use crate::handlers;

/// Options a client may pass in `initializationOptions`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerOptions {
    /// Only documents opened with this language id are tracked
    pub language_id: String,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            language_id: "go".to_string(),
        }
    }
}

pub struct Backend {
    client: Client,
    documents: DashMap<Url, Document>,
    options: OnceCell<ServerOptions>,
    debug: bool,
}

impl Backend {
    pub fn new(client: Client, debug: bool) -> Self {
        Self {
            client,
            documents: DashMap::new(),
            options: OnceCell::new(),
            debug,
        }
    }

    fn options(&self) -> &ServerOptions {
        self.options.get_or_init(ServerOptions::default)
    }

    async fn log_debug(&self, message: &str) {
        debug!("{}", message);
        if self.debug {
            self.client
                .log_message(MessageType::INFO, format!("[DEBUG] {}", message))
                .await;
        }
    }
}

fn parse_options(raw: Option<serde_json::Value>) -> ServerOptions {
    match raw {
        Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
            warn!("Ignoring malformed initializationOptions: {}", err);
            ServerOptions::default()
        }),
        None => ServerOptions::default(),
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let options = parse_options(params.initialization_options);
        info!(language_id = %options.language_id, "Initializing gopad LSP server");
        let _ = self.options.set(options);

        // Build the symbol table now rather than on the first keystroke
        let packages = gopad_lsp_core::registry().packages().len();
        self.log_debug(&format!("Symbol registry ready ({} packages)", packages))
            .await;

        Ok(InitializeResult {
            capabilities: capabilities::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "gopad-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.log_debug("Server initialized successfully").await;
        self.client
            .log_message(MessageType::INFO, "gopad LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.log_debug("Shutting down server").await;
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;

        if params.text_document.language_id != self.options().language_id {
            self.log_debug(&format!(
                "Ignoring {} ({})",
                uri, params.text_document.language_id
            ))
            .await;
            return;
        }

        self.log_debug(&format!("Document opened: {}", uri)).await;
        self.documents
            .insert(uri, Document::new(params.text_document.text));
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        let tracked = match self.documents.get_mut(&uri) {
            Some(mut doc) => {
                // Full sync: the last change holds the whole text
                for change in params.content_changes {
                    doc.update_text(change.text);
                }
                true
            }
            None => false,
        };

        if tracked {
            self.log_debug(&format!("Document changed: {}", uri)).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.log_debug(&format!("Document closed: {}", uri)).await;
        self.documents.remove(&uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        self.log_debug(&format!("Hover request at {:?}", position))
            .await;

        Ok(self
            .documents
            .get(uri)
            .and_then(|doc| handlers::hover::get_hover(&doc, position)))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        self.log_debug(&format!("Completion request at {:?}", position))
            .await;

        let items = match self.documents.get(uri) {
            Some(doc) => handlers::completion::get_completions(&doc, position),
            None => return Ok(None),
        };

        debug!(count = items.len(), "Completion items");
        Ok(Some(CompletionResponse::Array(items)))
    }
}
