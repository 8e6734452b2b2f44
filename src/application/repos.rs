//! Collaborator ports: the external content store and asset resolution.
//!
//! The pipeline is a single synchronous pass, so the ports are synchronous
//! trait objects. Adapters own their data; this crate never caches it.

use crate::domain::entities::{PostRecord, TermRecord};
use crate::domain::types::{ImageKind, SortField, SortOrder};

/// One bounded post query. No pagination exists beyond `limit`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostQuery {
    pub post_type: String,
    pub limit: u32,
    pub order: SortOrder,
    pub order_by: SortField,
}

/// Read-only access to the host's posts and taxonomy terms.
///
/// Implementations are assumed to never fail for these inputs; an empty
/// result is the only "not found" signal.
pub trait ContentStore: Send + Sync {
    /// Terms of `taxonomy` whose id is in `ids`. Result ordering is the
    /// store's own; callers must not rely on it matching `ids`.
    fn terms_by_id(&self, taxonomy: &str, ids: &[u64]) -> Vec<TermRecord>;

    /// Side lookup for a term's image, keyed by taxonomy and term id.
    fn term_image_url(&self, taxonomy: &str, term_id: u64) -> Option<String>;

    /// At most `query.limit` posts of `query.post_type`, sorted as requested.
    fn query_posts(&self, query: &PostQuery) -> Vec<PostRecord>;
}

/// Fallback asset lookup, used only when a record carries no image of its own.
pub trait AssetResolver: Send + Sync {
    fn default_image_url(&self, kind: ImageKind) -> String;
}
