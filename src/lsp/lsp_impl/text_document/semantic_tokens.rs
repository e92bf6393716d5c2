//! Semantic token methods for HieroglyphServer.

use tower_lsp_server::jsonrpc::Result;
use tower_lsp_server::ls_types::*;

use crate::artifacts::ArtifactProvider;
use crate::handlers::semantic_tokens::empty_tokens;
use crate::handlers::{handle_semantic_tokens_full, handle_semantic_tokens_full_delta};

use super::super::{HieroglyphServer, uri_to_url};

impl<P: ArtifactProvider + 'static> HieroglyphServer<P> {
    pub(crate) async fn semantic_tokens_full_impl(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        let lsp_uri = params.text_document.uri;
        let Ok(uri) = uri_to_url(&lsp_uri) else {
            log::warn!(
                target: "hieroglyph::lsp",
                "Invalid URI in semanticTokens/full: {}",
                lsp_uri.as_str()
            );
            return Ok(Some(SemanticTokensResult::Tokens(empty_tokens())));
        };

        let current = self.settings.load();
        let tokens =
            handle_semantic_tokens_full(&self.session, &self.rule, &uri, &current.encoding)
                .await?;
        Ok(Some(SemanticTokensResult::Tokens(tokens)))
    }

    pub(crate) async fn semantic_tokens_full_delta_impl(
        &self,
        params: SemanticTokensDeltaParams,
    ) -> Result<Option<SemanticTokensFullDeltaResult>> {
        let lsp_uri = params.text_document.uri;
        let Ok(uri) = uri_to_url(&lsp_uri) else {
            log::warn!(
                target: "hieroglyph::lsp",
                "Invalid URI in semanticTokens/full/delta: {}",
                lsp_uri.as_str()
            );
            return Ok(Some(SemanticTokensFullDeltaResult::Tokens(empty_tokens())));
        };

        let current = self.settings.load();
        let result = handle_semantic_tokens_full_delta(
            &self.session,
            &self.rule,
            &uri,
            &params.previous_result_id,
            &current.encoding,
        )
        .await?;
        Ok(Some(result))
    }
}
