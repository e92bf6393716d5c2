use std::sync::Arc;

use tower_lsp_server::jsonrpc::Result;
use tower_lsp_server::ls_types::*;
use tower_lsp_server::{Client, LanguageServer};
use url::Url;

use crate::analysis::{LEGEND_MODIFIERS, LEGEND_TYPES, SemanticTokensRule, SessionState};
use crate::artifacts::ArtifactProvider;

use super::settings_manager::{SettingsManager, SettingsSource};

mod text_document;

/// Convert an LSP `Uri` into the `url::Url` used as a key throughout the
/// crate.
pub(crate) fn uri_to_url(uri: &Uri) -> std::result::Result<Url, url::ParseError> {
    Url::parse(uri.as_str())
}

/// Convert a `url::Url` back into an LSP `Uri`.
pub fn url_to_uri(url: &Url) -> Option<Uri> {
    url.as_str().parse().ok()
}

/// Capabilities advertised in the `initialize` response.
///
/// Only full-document semantic tokens are offered, with delta support.
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        text_document_sync: Some(TextDocumentSyncCapability::Options(
            TextDocumentSyncOptions {
                open_close: Some(true),
                change: Some(TextDocumentSyncKind::NONE),
                ..Default::default()
            },
        )),
        semantic_tokens_provider: Some(
            SemanticTokensServerCapabilities::SemanticTokensOptions(SemanticTokensOptions {
                work_done_progress_options: WorkDoneProgressOptions::default(),
                legend: SemanticTokensLegend {
                    token_types: LEGEND_TYPES.to_vec(),
                    token_modifiers: LEGEND_MODIFIERS.to_vec(),
                },
                range: Some(false),
                full: Some(SemanticTokensFullOptions::Delta { delta: Some(true) }),
            }),
        ),
        ..Default::default()
    }
}

/// Language server answering semantic token requests from compiler
/// artifacts supplied by `P`.
pub struct HieroglyphServer<P> {
    client: Client,
    settings: SettingsManager,
    session: SessionState,
    rule: Arc<SemanticTokensRule<P>>,
}

impl<P> std::fmt::Debug for HieroglyphServer<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HieroglyphServer")
            .field("client", &self.client)
            .field("settings", &self.settings)
            .field("cached_documents", &self.session.cache.len())
            .finish_non_exhaustive()
    }
}

impl<P: ArtifactProvider + 'static> HieroglyphServer<P> {
    pub fn new(client: Client, provider: P) -> Self {
        Self {
            client,
            settings: SettingsManager::new(),
            session: SessionState::new(),
            rule: Arc::new(SemanticTokensRule::new(provider)),
        }
    }

    /// Session state (token cache and result ids) of this server.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn rule(&self) -> &Arc<SemanticTokensRule<P>> {
        &self.rule
    }
}

impl<P: ArtifactProvider + 'static> LanguageServer for HieroglyphServer<P> {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        log::info!(target: "hieroglyph::lsp", "Received initialization request");

        if let Some(options) = &params.initialization_options {
            self.settings
                .apply_json(SettingsSource::InitializationOptions, options);
        }

        Ok(InitializeResult {
            capabilities: server_capabilities(),
            server_info: Some(ServerInfo {
                name: "hieroglyph".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "hieroglyph initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        log::info!(target: "hieroglyph::lsp", "Shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        log::debug!(
            target: "hieroglyph::lsp",
            "Opened {} (version {})",
            params.text_document.uri.as_str(),
            params.text_document.version
        );
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let Ok(uri) = uri_to_url(&params.text_document.uri) else {
            log::warn!(
                target: "hieroglyph::lsp",
                "Invalid URI in didClose: {}",
                params.text_document.uri.as_str()
            );
            return;
        };

        // Reopening the file starts from a fresh baseline
        self.session.cache.remove(&uri);
        self.rule.invalidate(&uri);
        log::debug!(target: "hieroglyph::lsp", "Closed {}", uri);
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        self.settings
            .apply_json(SettingsSource::ClientConfiguration, &params.settings);
    }

    async fn semantic_tokens_full(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        self.semantic_tokens_full_impl(params).await
    }

    async fn semantic_tokens_full_delta(
        &self,
        params: SemanticTokensDeltaParams,
    ) -> Result<Option<SemanticTokensFullDeltaResult>> {
        self.semantic_tokens_full_delta_impl(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::{AstSnapshot, NameMapSnapshot, VirtualFile};
    use tower_lsp_server::LspService;

    struct NoArtifacts;

    impl ArtifactProvider for NoArtifacts {
        fn annotated_ast(&self, _uri: &Url) -> Option<AstSnapshot> {
            None
        }

        fn name_map(&self, _uri: &Url) -> Option<NameMapSnapshot> {
            None
        }

        fn virtual_file(&self, _uri: &Url) -> Option<VirtualFile> {
            None
        }
    }

    #[test]
    fn test_capabilities_advertise_full_with_delta_only() {
        let capabilities = server_capabilities();
        let Some(SemanticTokensServerCapabilities::SemanticTokensOptions(options)) =
            capabilities.semantic_tokens_provider
        else {
            panic!("semantic tokens provider should be advertised");
        };

        assert_eq!(
            options.full,
            Some(SemanticTokensFullOptions::Delta { delta: Some(true) })
        );
        assert_eq!(options.range, Some(false));
        assert_eq!(options.legend.token_types, LEGEND_TYPES.to_vec());
        assert_eq!(options.legend.token_modifiers, LEGEND_MODIFIERS.to_vec());
    }

    #[test]
    fn test_uri_url_conversion() {
        let url = Url::parse("file:///project/src/Main.hs").unwrap();
        let uri = url_to_uri(&url).expect("file URL should convert");
        assert_eq!(uri_to_url(&uri).unwrap(), url);
    }

    #[tokio::test]
    async fn test_did_close_evicts_cached_tokens() {
        let (service, _socket) =
            LspService::new(|client| HieroglyphServer::new(client, NoArtifacts));
        let server = service.inner();
        let url = Url::parse("file:///project/src/Main.hs").unwrap();

        server.session().cache.store(
            url.clone(),
            SemanticTokens {
                result_id: Some("0".to_string()),
                data: vec![],
            },
            Some(1),
        );
        assert_eq!(server.session().cache.len(), 1);

        server
            .did_close(DidCloseTextDocumentParams {
                text_document: TextDocumentIdentifier {
                    uri: url_to_uri(&url).unwrap(),
                },
            })
            .await;

        assert!(server.session().cache.is_empty());
    }

    #[tokio::test]
    async fn test_configuration_change_applies_settings() {
        let (service, _socket) =
            LspService::new(|client| HieroglyphServer::new(client, NoArtifacts));
        let server = service.inner();

        server
            .did_change_configuration(DidChangeConfigurationParams {
                settings: serde_json::json!({
                    "semanticTokens": { "functionToken": "method" }
                }),
            })
            .await;

        assert_eq!(
            server.settings.load().settings.semantic_tokens.function_token,
            "method"
        );
    }
}
