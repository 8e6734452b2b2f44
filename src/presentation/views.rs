use askama::Template;

use crate::application::error::BlockRenderError;
use crate::domain::blocks::{PostsBlockConfig, TermsBlockConfig};
use crate::domain::entities::{PostContent, TermContent};
use crate::domain::types::TermListStyle;

/// Fixed markup for an unconfigured terms block.
pub const SELECT_TERMS_PROMPT: &str =
    r#"<h3 class="blocco-prompt">Select Terms to populate</h3>"#;

/// Fixed markup for an unconfigured posts block.
pub const SELECT_POST_TYPE_PROMPT: &str = r#"<p class="blocco-prompt">Select Post Type</p>"#;

/// Fixed markup when a configured terms selection matches nothing.
pub const NO_TERMS_MARKUP: &str = r#"<p class="blocco-empty">No Terms Found</p>"#;

/// Fixed markup when a configured post query matches nothing.
pub const NO_POSTS_MARKUP: &str = r#"<p class="blocco-empty">No Post Found</p>"#;

#[derive(Clone)]
pub struct TermItemView {
    pub name: String,
    pub permalink: String,
    pub image_url: String,
}

#[derive(Clone)]
pub struct TermListView {
    pub has_heading: bool,
    pub heading: String,
    pub has_view_all: bool,
    pub view_all_href: String,
    pub list_class: String,
    pub show_image: bool,
    pub items: Vec<TermItemView>,
}

impl TermListView {
    fn build(config: &TermsBlockConfig, records: &[TermContent]) -> Self {
        let list_class = match config.style {
            TermListStyle::Default => "super-block terms".to_string(),
            TermListStyle::Stacked => "super-block terms is-style-stacked".to_string(),
        };

        Self {
            has_heading: config.show_heading && !config.heading.trim().is_empty(),
            heading: config.heading.clone(),
            has_view_all: config.view_all_url.is_some(),
            view_all_href: config
                .view_all_url
                .as_ref()
                .map(|url| url.as_str().to_string())
                .unwrap_or_default(),
            list_class,
            show_image: config.show_image,
            items: records
                .iter()
                .map(|record| TermItemView {
                    name: record.name.clone(),
                    permalink: record.permalink.clone(),
                    image_url: record.image_url.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "blocks/terms.html")]
struct TermListTemplate {
    view: TermListView,
}

#[derive(Clone)]
pub struct PostItemView {
    pub title: String,
    pub permalink: String,
    pub image_url: String,
    pub excerpt_html: String,
}

#[derive(Clone)]
pub struct PostListView {
    pub list_class: String,
    pub has_container_style: bool,
    pub container_style: String,
    pub has_item_style: bool,
    pub item_style: String,
    pub has_link_style: bool,
    pub link_style: String,
    pub has_button_style: bool,
    pub button_style: String,
    /// Literal tag name from the validated `HeadingTag` enum.
    pub heading_tag: &'static str,
    pub show_image: bool,
    pub show_excerpt: bool,
    pub show_button: bool,
    pub items: Vec<PostItemView>,
}

impl PostListView {
    fn build(config: &PostsBlockConfig, records: &[PostContent]) -> Self {
        let mut container = Vec::new();
        if let Some(background) = &config.background_color {
            container.push(format!("background-color:{background}"));
        }
        if let Some(text) = &config.text_color {
            container.push(format!("color:{text}"));
        }
        let container_style = container.join(";");

        // The item border, link and button colors all mirror the text color.
        let (item_style, link_style, button_style) = match &config.text_color {
            Some(text) => (
                format!("border-color:{text}"),
                format!("color:{text}"),
                format!("border-color:{text};color:{text}"),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        Self {
            list_class: format!("super-posts-block-list layout-{}", config.layout.as_str()),
            has_container_style: !container_style.is_empty(),
            container_style,
            has_item_style: !item_style.is_empty(),
            item_style,
            has_link_style: !link_style.is_empty(),
            link_style,
            has_button_style: !button_style.is_empty(),
            button_style,
            heading_tag: config.heading_tag.as_str(),
            show_image: config.show_image,
            show_excerpt: config.show_excerpt,
            show_button: config.show_button,
            items: records
                .iter()
                .map(|record| PostItemView {
                    title: record.title.clone(),
                    permalink: record.permalink.clone(),
                    image_url: record.image_url.clone(),
                    excerpt_html: record.excerpt_html.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "blocks/posts.html")]
struct PostListTemplate {
    view: PostListView,
}

/// Render a terms block. Pure: the output depends only on the arguments.
pub fn render_terms(
    config: &TermsBlockConfig,
    records: &[TermContent],
) -> Result<String, BlockRenderError> {
    if config.taxonomy.is_none() || config.term_ids.is_empty() {
        return Ok(SELECT_TERMS_PROMPT.to_string());
    }
    if records.is_empty() {
        return Ok(NO_TERMS_MARKUP.to_string());
    }

    let template = TermListTemplate {
        view: TermListView::build(config, records),
    };
    Ok(template.render()?)
}

/// Render a posts block. Pure: the output depends only on the arguments.
pub fn render_posts(
    config: &PostsBlockConfig,
    records: &[PostContent],
) -> Result<String, BlockRenderError> {
    if config.post_type.is_none() {
        return Ok(SELECT_POST_TYPE_PROMPT.to_string());
    }
    if records.is_empty() {
        return Ok(NO_POSTS_MARKUP.to_string());
    }

    let template = PostListTemplate {
        view: PostListView::build(config, records),
    };
    Ok(template.render()?)
}
