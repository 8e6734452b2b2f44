//! Domain records mirrored from the external content store, plus the
//! fetch-enriched forms handed to the renderer.

use serde::Serialize;
use time::OffsetDateTime;

/// A taxonomy term as the content store returns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermRecord {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub permalink: String,
}

/// A post as the content store returns it.
///
/// The timestamp and count fields exist so store adapters can honour the
/// sort field of a bounded query; the renderer never reads them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRecord {
    pub id: u64,
    pub title: String,
    pub excerpt_html: String,
    pub permalink: String,
    pub featured_image_url: Option<String>,
    pub published_at: OffsetDateTime,
    pub modified_at: OffsetDateTime,
    pub comment_count: u32,
}

/// A term after fetch enrichment: the image is either the side-lookup hit
/// or the placeholder asset, never absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermContent {
    pub id: u64,
    pub name: String,
    pub permalink: String,
    pub image_url: String,
}

/// A post after fetch enrichment. `excerpt_html` has been sanitised and is
/// the only markup-carrying field that may be embedded unescaped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostContent {
    pub id: u64,
    pub title: String,
    pub excerpt_html: String,
    pub permalink: String,
    pub image_url: String,
}
