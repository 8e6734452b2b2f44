//! In-memory content store adapter, seeded with fixture content.
//!
//! Stands in for the host's query layer in tests and the dump binary. Term
//! lookups come back name-alphabetical, mirroring the host's default
//! ordering, so callers cannot accidentally rely on selection order being
//! the store's order.

use std::cmp::Ordering;
use std::collections::HashMap;

use time::macros::datetime;

use crate::application::repos::{AssetResolver, ContentStore, PostQuery};
use crate::domain::entities::{PostRecord, TermRecord};
use crate::domain::types::{ImageKind, SortField, SortOrder};

pub const DEFAULT_TERM_IMAGE: &str = "/assets/img/default-term.png";
pub const DEFAULT_POST_IMAGE: &str = "/assets/img/featured-image.png";

#[derive(Debug, Clone, Default)]
pub struct FixtureContentStore {
    terms: Vec<(String, TermRecord)>,
    term_images: HashMap<(String, u64), String>,
    posts: Vec<(String, PostRecord)>,
}

impl FixtureContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store populated with a small, realistic content set: a `category`
    /// taxonomy and a handful of `post` records.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        store.push_term(
            "category",
            TermRecord {
                id: 5,
                slug: "engineering".to_string(),
                name: "Engineering".to_string(),
                permalink: "/category/engineering".to_string(),
            },
        );
        store.push_term(
            "category",
            TermRecord {
                id: 9,
                slug: "essays".to_string(),
                name: "Essays".to_string(),
                permalink: "/category/essays".to_string(),
            },
        );
        store.push_term(
            "category",
            TermRecord {
                id: 11,
                slug: "release-notes".to_string(),
                name: "Release Notes".to_string(),
                permalink: "/category/release-notes".to_string(),
            },
        );
        store.set_term_image("category", 5, "/media/terms/engineering.png");

        store.push_post(
            "post",
            PostRecord {
                id: 101,
                title: "Incremental builds, demystified".to_string(),
                excerpt_html: "<p>What the build graph actually recomputes.</p>".to_string(),
                permalink: "/posts/incremental-builds".to_string(),
                featured_image_url: Some("/media/posts/builds.jpg".to_string()),
                published_at: datetime!(2025-09-14 08:00 UTC),
                modified_at: datetime!(2025-09-20 16:30 UTC),
                comment_count: 12,
            },
        );
        store.push_post(
            "post",
            PostRecord {
                id: 102,
                title: "A calm approach to caching".to_string(),
                excerpt_html: "<p>Cache what you can rebuild, <em>nothing else</em>.</p>"
                    .to_string(),
                permalink: "/posts/calm-caching".to_string(),
                featured_image_url: None,
                published_at: datetime!(2025-10-02 09:15 UTC),
                modified_at: datetime!(2025-10-02 09:15 UTC),
                comment_count: 4,
            },
        );
        store.push_post(
            "post",
            PostRecord {
                id: 103,
                title: "Writing release notes people read".to_string(),
                excerpt_html: "<p>Lead with the change, not the ticket.</p>".to_string(),
                permalink: "/posts/release-notes".to_string(),
                featured_image_url: Some("/media/posts/notes.jpg".to_string()),
                published_at: datetime!(2025-11-03 10:45 UTC),
                modified_at: datetime!(2025-11-05 07:20 UTC),
                comment_count: 27,
            },
        );

        store
    }

    pub fn push_term(&mut self, taxonomy: &str, record: TermRecord) {
        self.terms.push((taxonomy.to_string(), record));
    }

    pub fn set_term_image(&mut self, taxonomy: &str, term_id: u64, url: &str) {
        self.term_images
            .insert((taxonomy.to_string(), term_id), url.to_string());
    }

    pub fn push_post(&mut self, post_type: &str, record: PostRecord) {
        self.posts.push((post_type.to_string(), record));
    }
}

fn compare_posts(left: &PostRecord, right: &PostRecord, field: SortField) -> Ordering {
    match field {
        SortField::Id => left.id.cmp(&right.id),
        SortField::Title => left.title.cmp(&right.title),
        SortField::Date => left.published_at.cmp(&right.published_at),
        SortField::Modified => left.modified_at.cmp(&right.modified_at),
        SortField::CommentCount => left.comment_count.cmp(&right.comment_count),
    }
}

impl ContentStore for FixtureContentStore {
    fn terms_by_id(&self, taxonomy: &str, ids: &[u64]) -> Vec<TermRecord> {
        let mut matches: Vec<TermRecord> = self
            .terms
            .iter()
            .filter(|(stored_taxonomy, record)| {
                stored_taxonomy == taxonomy && ids.contains(&record.id)
            })
            .map(|(_, record)| record.clone())
            .collect();
        matches.sort_by(|left, right| left.name.cmp(&right.name));
        matches
    }

    fn term_image_url(&self, taxonomy: &str, term_id: u64) -> Option<String> {
        self.term_images
            .get(&(taxonomy.to_string(), term_id))
            .cloned()
    }

    fn query_posts(&self, query: &PostQuery) -> Vec<PostRecord> {
        let mut matches: Vec<PostRecord> = self
            .posts
            .iter()
            .filter(|(stored_type, _)| *stored_type == query.post_type)
            .map(|(_, record)| record.clone())
            .collect();

        matches.sort_by(|left, right| {
            let ordering = compare_posts(left, right, query.order_by);
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        matches.truncate(query.limit as usize);
        matches
    }
}

impl AssetResolver for FixtureContentStore {
    fn default_image_url(&self, kind: ImageKind) -> String {
        match kind {
            ImageKind::Term => DEFAULT_TERM_IMAGE.to_string(),
            ImageKind::Post => DEFAULT_POST_IMAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(order: SortOrder, order_by: SortField, limit: u32) -> PostQuery {
        PostQuery {
            post_type: "post".to_string(),
            limit,
            order,
            order_by,
        }
    }

    #[test]
    fn terms_come_back_in_store_order_not_selection_order() {
        let store = FixtureContentStore::seeded();
        let records = store.terms_by_id("category", &[11, 5]);
        let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, vec!["Engineering", "Release Notes"]);
    }

    #[test]
    fn terms_are_restricted_to_the_taxonomy() {
        let store = FixtureContentStore::seeded();
        assert!(store.terms_by_id("post_tag", &[5, 9]).is_empty());
    }

    #[test]
    fn unknown_term_ids_are_filtered_not_errors() {
        let store = FixtureContentStore::seeded();
        let records = store.terms_by_id("category", &[5, 77_000]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 5);
    }

    #[test]
    fn post_queries_sort_and_truncate() {
        let store = FixtureContentStore::seeded();

        let newest = store.query_posts(&query(SortOrder::Desc, SortField::Date, 2));
        let ids: Vec<u64> = newest.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![103, 102]);

        let most_discussed = store.query_posts(&query(SortOrder::Desc, SortField::CommentCount, 50));
        assert_eq!(most_discussed[0].id, 103);

        let by_title = store.query_posts(&query(SortOrder::Asc, SortField::Title, 50));
        assert_eq!(by_title[0].title, "A calm approach to caching");
    }

    #[test]
    fn unknown_post_types_yield_empty_results() {
        let store = FixtureContentStore::seeded();
        assert_eq!(store.query_posts(&query(SortOrder::Asc, SortField::Date, 10)).len(), 3);

        let mut other = query(SortOrder::Asc, SortField::Date, 10);
        other.post_type = "page".to_string();
        assert!(store.query_posts(&other).is_empty());
    }
}
