//! Configuration Resolver: raw attribute objects into typed block
//! configurations.
//!
//! Resolution is total. Unrecognised enum values and malformed colors or
//! URLs resolve to their unset/default state rather than erroring; numeric
//! bounds are enforced here so the renderer only ever sees in-range values.

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::application::attributes::{RawPostsAttributes, RawTermsAttributes};
use crate::domain::blocks::{
    DEFAULT_POST_COUNT, PostsBlockConfig, TermsBlockConfig, clamp_post_count,
};
use crate::domain::types::{CssColor, HeadingTag, ListLayout, SortField, SortOrder, TermListStyle};

pub fn resolve_terms(attributes: &Value) -> TermsBlockConfig {
    let raw = RawTermsAttributes::deserialize(attributes).unwrap_or_default();

    TermsBlockConfig {
        taxonomy: optional_string(&raw.taxonomy),
        term_ids: raw.term_ids,
        show_heading: raw.show_heading,
        heading: raw.heading,
        show_image: raw.show_image,
        style: TermListStyle::try_from(raw.style_variant.as_str()).unwrap_or_default(),
        view_all_url: optional_url(&raw.view_all_url),
    }
}

pub fn resolve_posts(attributes: &Value) -> PostsBlockConfig {
    let raw = RawPostsAttributes::deserialize(attributes).unwrap_or_default();

    PostsBlockConfig {
        post_type: optional_string(&raw.post_type),
        order: SortOrder::try_from(raw.order.as_str()).unwrap_or_default(),
        order_by: SortField::try_from(raw.order_by.as_str()).unwrap_or_default(),
        post_count: clamp_post_count(raw.post_count.unwrap_or(DEFAULT_POST_COUNT)),
        show_excerpt: raw.show_excerpt,
        show_button: raw.show_button,
        show_image: raw.show_image,
        layout: ListLayout::try_from(raw.layout.as_str()).unwrap_or_default(),
        heading_tag: HeadingTag::try_from(raw.heading_tag.as_str()).unwrap_or_default(),
        background_color: optional_color(&raw.background_color),
        text_color: optional_color(&raw.text_color),
    }
}

/// The wire encodes "unset" as the empty string.
fn optional_string(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn optional_color(raw: &str) -> Option<CssColor> {
    CssColor::new(raw).ok()
}

fn optional_url(raw: &str) -> Option<Url> {
    if raw.trim().is_empty() {
        return None;
    }
    Url::parse(raw.trim()).ok()
}
