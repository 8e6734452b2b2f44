//! The block rendering pipeline: resolve → fetch → render, one pass.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::application::error::BlockRenderError;
use crate::application::fetcher::{fetch_posts, fetch_terms};
use crate::application::repos::{AssetResolver, ContentStore};
use crate::application::resolver::{resolve_posts, resolve_terms};
use crate::presentation::views::{render_posts, render_terms};

/// Renders block instances against a content store and asset resolver.
///
/// Every call is an independent pass over one request's attributes and a
/// fresh fetch; the service holds no state between invocations.
#[derive(Clone)]
pub struct BlockRenderService {
    store: Arc<dyn ContentStore>,
    assets: Arc<dyn AssetResolver>,
}

impl BlockRenderService {
    pub fn new(store: Arc<dyn ContentStore>, assets: Arc<dyn AssetResolver>) -> Self {
        Self { store, assets }
    }

    pub fn render_terms_block(&self, attributes: &Value) -> Result<String, BlockRenderError> {
        let config = resolve_terms(attributes);
        let records = fetch_terms(self.store.as_ref(), self.assets.as_ref(), &config);
        debug!(
            taxonomy = config.taxonomy.as_deref().unwrap_or("<unset>"),
            selected = config.term_ids.len(),
            fetched = records.len(),
            "rendering terms block"
        );
        render_terms(&config, &records)
    }

    pub fn render_posts_block(&self, attributes: &Value) -> Result<String, BlockRenderError> {
        let config = resolve_posts(attributes);
        let records = fetch_posts(self.store.as_ref(), self.assets.as_ref(), &config);
        debug!(
            post_type = config.post_type.as_deref().unwrap_or("<unset>"),
            limit = config.post_count,
            fetched = records.len(),
            "rendering posts block"
        );
        render_posts(&config, &records)
    }
}
