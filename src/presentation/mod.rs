//! Presentation layer: askama views over fetched block content.

pub mod views;
