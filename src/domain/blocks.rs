//! Block configurations: the fully resolved, immutable input to a render pass.

use url::Url;

use crate::domain::types::{
    CssColor, HeadingTag, ListLayout, SortField, SortOrder, TermListStyle,
};

pub const POST_COUNT_MIN: u32 = 1;
pub const POST_COUNT_MAX: u32 = 50;
pub const DEFAULT_POST_COUNT: u32 = 5;

/// Resolved configuration for one terms-list block instance.
///
/// `taxonomy: None` is the explicit unconfigured state; the resolver maps the
/// wire's empty string to it exactly once, so no downstream consumer checks
/// for emptiness again.
#[derive(Debug, Clone, PartialEq)]
pub struct TermsBlockConfig {
    pub taxonomy: Option<String>,
    /// Selection order is display order.
    pub term_ids: Vec<u64>,
    pub show_heading: bool,
    pub heading: String,
    pub show_image: bool,
    pub style: TermListStyle,
    pub view_all_url: Option<Url>,
}

impl Default for TermsBlockConfig {
    fn default() -> Self {
        Self {
            taxonomy: None,
            term_ids: Vec::new(),
            show_heading: false,
            heading: String::new(),
            show_image: false,
            style: TermListStyle::Default,
            view_all_url: None,
        }
    }
}

/// Resolved configuration for one posts-list block instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PostsBlockConfig {
    pub post_type: Option<String>,
    pub order: SortOrder,
    pub order_by: SortField,
    /// Always within `[POST_COUNT_MIN, POST_COUNT_MAX]`.
    pub post_count: u32,
    pub show_excerpt: bool,
    pub show_button: bool,
    pub show_image: bool,
    pub layout: ListLayout,
    pub heading_tag: HeadingTag,
    pub background_color: Option<CssColor>,
    pub text_color: Option<CssColor>,
}

impl Default for PostsBlockConfig {
    fn default() -> Self {
        Self {
            post_type: None,
            order: SortOrder::default(),
            order_by: SortField::default(),
            post_count: DEFAULT_POST_COUNT,
            show_excerpt: false,
            show_button: false,
            show_image: false,
            layout: ListLayout::default(),
            heading_tag: HeadingTag::default(),
            background_color: None,
            text_color: None,
        }
    }
}

pub fn clamp_post_count(value: u32) -> u32 {
    value.clamp(POST_COUNT_MIN, POST_COUNT_MAX)
}

/// Toggle `id` in an ordered selection, returning a fresh sequence.
///
/// An absent id is appended, a present id is removed; applying the same
/// toggle twice restores the original selection. The input is never mutated,
/// which keeps editor state and persisted configuration from aliasing each
/// other.
pub fn toggle_membership(selection: &[u64], id: u64) -> Vec<u64> {
    if selection.contains(&id) {
        selection
            .iter()
            .copied()
            .filter(|member| *member != id)
            .collect()
    } else {
        let mut next = selection.to_vec();
        next.push(id);
        next
    }
}
