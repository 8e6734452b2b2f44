//! Shared domain enumerations aligned with the persisted block attribute values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl TryFrom<&str> for SortOrder {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.eq_ignore_ascii_case("ASC") {
            Ok(SortOrder::Asc)
        } else if value.eq_ignore_ascii_case("DESC") {
            Ok(SortOrder::Desc)
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Title,
    #[default]
    Date,
    Modified,
    CommentCount,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::Title => "title",
            SortField::Date => "date",
            SortField::Modified => "modified",
            SortField::CommentCount => "comment_count",
        }
    }
}

impl TryFrom<&str> for SortField {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "ID" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "date" => Ok(SortField::Date),
            "modified" => Ok(SortField::Modified),
            "comment_count" => Ok(SortField::CommentCount),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListLayout {
    #[default]
    Row,
    Column,
}

impl ListLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            ListLayout::Row => "row",
            ListLayout::Column => "column",
        }
    }
}

impl TryFrom<&str> for ListLayout {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "row" => Ok(ListLayout::Row),
            "column" => Ok(ListLayout::Column),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    /// The literal tag name, safe to splice into markup by construction.
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
            HeadingTag::H4 => "h4",
            HeadingTag::H5 => "h5",
            HeadingTag::H6 => "h6",
        }
    }
}

impl TryFrom<&str> for HeadingTag {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "h1" => Ok(HeadingTag::H1),
            "h2" => Ok(HeadingTag::H2),
            "h3" => Ok(HeadingTag::H3),
            "h4" => Ok(HeadingTag::H4),
            "h5" => Ok(HeadingTag::H5),
            "h6" => Ok(HeadingTag::H6),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermListStyle {
    #[default]
    Default,
    Stacked,
}

impl TermListStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            TermListStyle::Default => "default",
            TermListStyle::Stacked => "stacked",
        }
    }
}

impl TryFrom<&str> for TermListStyle {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "default" => Ok(TermListStyle::Default),
            "stacked" => Ok(TermListStyle::Stacked),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Term,
    Post,
}

impl ImageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageKind::Term => "term",
            ImageKind::Post => "post",
        }
    }
}

/// A CSS color value that passed the syntax check at resolve time.
///
/// Accepted forms are `#` followed by 3, 4, 6 or 8 hex digits, or an
/// ASCII-alphabetic keyword such as `red` or `transparent`. Anything else is
/// rejected before it can reach a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssColor(String);

impl CssColor {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("color value is empty"));
        }

        if let Some(digits) = trimmed.strip_prefix('#') {
            let hex = matches!(digits.len(), 3 | 4 | 6 | 8)
                && digits.chars().all(|ch| ch.is_ascii_hexdigit());
            if !hex {
                return Err(DomainError::validation(format!(
                    "`{trimmed}` is not a valid hex color"
                )));
            }
        } else if !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(DomainError::validation(format!(
                "`{trimmed}` is not a recognised color keyword"
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_of_valid_lengths_are_accepted() {
        for value in ["#000", "#00ff", "#00ff88", "#00ff8840"] {
            assert!(CssColor::new(value).is_ok(), "rejected {value}");
        }
    }

    #[test]
    fn keyword_colors_are_accepted() {
        let color = CssColor::new("rebeccapurple").expect("keyword color");
        assert_eq!(color.as_str(), "rebeccapurple");
    }

    #[test]
    fn malformed_colors_are_rejected() {
        for value in ["", "#00", "#zzz", "red;}</style>", "url(x)", "calc(1px)"] {
            assert!(CssColor::new(value).is_err(), "accepted {value}");
        }
    }

    #[test]
    fn sort_order_parsing_ignores_case() {
        assert_eq!(SortOrder::try_from("desc"), Ok(SortOrder::Desc));
        assert_eq!(SortOrder::try_from("Asc"), Ok(SortOrder::Asc));
        assert!(SortOrder::try_from("descending").is_err());
    }

    #[test]
    fn sort_field_round_trips_through_wire_names() {
        for field in [
            SortField::Id,
            SortField::Title,
            SortField::Date,
            SortField::Modified,
            SortField::CommentCount,
        ] {
            assert_eq!(SortField::try_from(field.as_str()), Ok(field));
        }
    }

    #[test]
    fn unknown_heading_tags_are_rejected() {
        assert!(HeadingTag::try_from("h7").is_err());
        assert!(HeadingTag::try_from("div").is_err());
    }
}
