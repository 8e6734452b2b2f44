//! Raw block attributes as the authoring host persists them.
//!
//! Field names are the wire names of the stored attribute object. Every
//! field is doubly lenient: a missing field takes the struct default, and a
//! present field of the wrong type is treated as absent instead of failing
//! the whole object.

use serde::{Deserialize, Deserializer};

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTermsAttributes {
    #[serde(rename = "taxname", deserialize_with = "lenient")]
    pub taxonomy: String,
    #[serde(rename = "terms", deserialize_with = "lenient")]
    pub term_ids: Vec<u64>,
    #[serde(deserialize_with = "lenient")]
    pub heading: String,
    #[serde(rename = "showHeading", deserialize_with = "lenient")]
    pub show_heading: bool,
    #[serde(rename = "showImage", deserialize_with = "lenient")]
    pub show_image: bool,
    #[serde(rename = "styleVariant", deserialize_with = "lenient")]
    pub style_variant: String,
    #[serde(rename = "viewAllUrl", deserialize_with = "lenient")]
    pub view_all_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPostsAttributes {
    #[serde(rename = "postType", deserialize_with = "lenient")]
    pub post_type: String,
    #[serde(deserialize_with = "lenient")]
    pub order: String,
    #[serde(rename = "orderBy", deserialize_with = "lenient")]
    pub order_by: String,
    #[serde(rename = "postNum", deserialize_with = "lenient")]
    pub post_count: Option<u32>,
    #[serde(rename = "showExcerpt", deserialize_with = "lenient")]
    pub show_excerpt: bool,
    #[serde(rename = "showButton", deserialize_with = "lenient")]
    pub show_button: bool,
    #[serde(rename = "showImage", deserialize_with = "lenient")]
    pub show_image: bool,
    #[serde(deserialize_with = "lenient")]
    pub layout: String,
    #[serde(rename = "headingTag", deserialize_with = "lenient")]
    pub heading_tag: String,
    #[serde(rename = "bgColor", deserialize_with = "lenient")]
    pub background_color: String,
    #[serde(rename = "textColor", deserialize_with = "lenient")]
    pub text_color: String,
}
