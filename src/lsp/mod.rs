//! GLSL Language Server Protocol implementation.
//!
//! Provides completion, hover, and signature help for shader sources. All
//! answers come from the symbol database plus lexical scans of the buffer.

pub mod completion;
pub mod document;
pub mod hover;
pub mod scan;
pub mod signature;
pub mod util;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};

use crate::config::Config;
use crate::glsl::SymbolRegistry;

use completion::CompletionProvider;
use document::Document;
use hover::HoverProvider;
use signature::SignatureHelpProvider;

/// Language identifier the server registers for.
pub const LANGUAGE_ID: &str = "glsl";

/// The three providers over one shared registry.
pub struct Intelligence {
    pub completion: CompletionProvider,
    pub hover: HoverProvider,
    pub signature: SignatureHelpProvider,
}

impl Intelligence {
    pub fn new(registry: Arc<SymbolRegistry>, lookback_lines: u32) -> Self {
        Self {
            completion: CompletionProvider::new(registry.clone()),
            hover: HoverProvider::new(registry.clone()),
            signature: SignatureHelpProvider::with_lookback(registry, lookback_lines),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let registry = if config.uniforms.is_empty() {
            SymbolRegistry::builtin()
        } else {
            Arc::new(config.registry())
        };
        Self::new(registry, config.signature_help.lookback_lines)
    }
}

pub struct ShaderLsp {
    client: Client,
    config: Config,
    intelligence: Intelligence,
    documents: Mutex<HashMap<Url, Document>>,
}

/// Capabilities announced in `initialize`.
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        text_document_sync: Some(TextDocumentSyncCapability::Kind(
            TextDocumentSyncKind::FULL,
        )),
        hover_provider: Some(HoverProviderCapability::Simple(true)),
        completion_provider: Some(CompletionOptions::default()),
        signature_help_provider: Some(SignatureHelpOptions {
            trigger_characters: Some(vec!["(".to_string()]),
            retrigger_characters: Some(vec![",".to_string()]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for ShaderLsp {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(info) = &params.client_info {
            log::info!("client: {} {}", info.name, info.version.as_deref().unwrap_or(""));
        }
        Ok(InitializeResult {
            capabilities: server_capabilities(),
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "shaderlab initialized")
            .await;
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        let by_extension = doc
            .uri
            .to_file_path()
            .is_ok_and(|path| self.config.is_shader_file(&path));
        if doc.language_id != LANGUAGE_ID && !by_extension {
            log::debug!("ignoring {} ({})", doc.uri, doc.language_id);
            return;
        }
        log::debug!("open {}", doc.uri);
        self.documents().insert(doc.uri, Document::new(doc.text));
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        if let Some(change) = params.content_changes.into_iter().last() {
            let mut documents = self.documents();
            if let Some(doc) = documents.get_mut(&uri) {
                *doc = Document::new(change.text);
            }
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents().remove(&params.text_document.uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let pos = params.text_document_position_params.position;
        let Some(doc) = self.snapshot(uri) else {
            return Ok(None);
        };
        Ok(self
            .intelligence
            .hover
            .hover(&doc, pos)
            .map(|info| info.to_lsp()))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let pos = params.text_document_position.position;
        let Some(doc) = self.snapshot(uri) else {
            return Ok(None);
        };
        let completions = self.intelligence.completion.complete(&doc, pos);
        Ok(Some(CompletionResponse::Array(
            completions.to_completion_items(),
        )))
    }

    async fn signature_help(&self, params: SignatureHelpParams) -> Result<Option<SignatureHelp>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let pos = params.text_document_position_params.position;
        let Some(doc) = self.snapshot(uri) else {
            return Ok(None);
        };
        Ok(self
            .intelligence
            .signature
            .signature_help(&doc, pos)
            .map(|active| active.to_lsp()))
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }
}

impl ShaderLsp {
    pub fn new(client: Client, config: Config) -> Self {
        let intelligence = Intelligence::from_config(&config);
        Self {
            client,
            config,
            intelligence,
            documents: Mutex::new(HashMap::new()),
        }
    }

    fn documents(&self) -> MutexGuard<'_, HashMap<Url, Document>> {
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Clone of the current buffer, so providers run without the lock.
    fn snapshot(&self, uri: &Url) -> Option<Document> {
        self.documents().get(uri).cloned()
    }
}

/// Start the LSP server on stdin/stdout.
pub async fn run_server(config: Config) {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| ShaderLsp::new(client, config));
    Server::new(stdin, stdout, socket).serve(service).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capabilities_declare_triggers() {
        let caps = server_capabilities();
        let sig = caps.signature_help_provider.unwrap();
        assert_eq!(sig.trigger_characters, Some(vec!["(".to_string()]));
        assert_eq!(sig.retrigger_characters, Some(vec![",".to_string()]));
        assert!(caps.completion_provider.is_some());
        assert_eq!(
            caps.hover_provider,
            Some(HoverProviderCapability::Simple(true))
        );
    }

    #[test]
    fn intelligence_uses_configured_uniforms() {
        let config = Config::parse(
            "[[uniforms]]\nname = \"u_tex\"\ntype = \"sampler2D\"\ndescription = \"Lesson texture.\"\n",
        )
        .unwrap();
        let intel = Intelligence::from_config(&config);
        let doc = Document::new("texture(u_tex, uv)");
        let hover = intel.hover.hover(&doc, Position::new(0, 10)).unwrap();
        assert!(hover.markdown.contains("uniform sampler2D u_tex"));
        assert_eq!(intel.completion.candidates()[0].label, "u_mouse");
        assert!(intel
            .completion
            .candidates()
            .iter()
            .any(|c| c.label == "u_tex"));
    }

    #[test]
    fn intelligence_honors_lookback() {
        let config = Config::parse("[signature_help]\nlookback_lines = 1\n").unwrap();
        let intel = Intelligence::from_config(&config);
        let doc = Document::new("sin(\n\nx");
        assert!(intel
            .signature
            .signature_help(&doc, Position::new(2, 1))
            .is_none());
        assert!(intel
            .signature
            .signature_help(&doc, Position::new(1, 0))
            .is_some());
    }
}
