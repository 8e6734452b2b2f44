//! Content Fetcher: bounded retrieval plus per-record enrichment.

use once_cell::sync::Lazy;

use crate::application::repos::{AssetResolver, ContentStore, PostQuery};
use crate::domain::blocks::{PostsBlockConfig, TermsBlockConfig};
use crate::domain::entities::{PostContent, TermContent};
use crate::domain::types::ImageKind;

/// Excerpts arrive from the store as HTML; only this subset survives into
/// the rendered output.
static EXCERPT_SANITIZER: Lazy<ammonia::Builder<'static>> = Lazy::new(|| {
    let mut builder = ammonia::Builder::default();
    builder.tags(["a", "br", "code", "em", "p", "strong"].into_iter().collect());
    builder
});

/// Fetch the configured terms, in selection order.
///
/// An unset taxonomy or an empty selection short-circuits to an empty
/// result without touching the store. Store ordering is normalised to the
/// position of each id in `term_ids`; selected ids the store does not
/// return are skipped silently.
pub fn fetch_terms(
    store: &dyn ContentStore,
    assets: &dyn AssetResolver,
    config: &TermsBlockConfig,
) -> Vec<TermContent> {
    let Some(taxonomy) = config.taxonomy.as_deref() else {
        return Vec::new();
    };
    if config.term_ids.is_empty() {
        return Vec::new();
    }

    let mut records = store.terms_by_id(taxonomy, &config.term_ids);
    records.sort_by_key(|record| {
        config
            .term_ids
            .iter()
            .position(|id| *id == record.id)
            .unwrap_or(usize::MAX)
    });

    records
        .into_iter()
        .map(|record| {
            let image_url = store
                .term_image_url(taxonomy, record.id)
                .unwrap_or_else(|| assets.default_image_url(ImageKind::Term));
            TermContent {
                id: record.id,
                name: record.name,
                permalink: record.permalink,
                image_url,
            }
        })
        .collect()
}

/// Fetch the configured posts with one bounded query.
///
/// An unset post type skips the query entirely. Each record resolves to its
/// own featured image or the placeholder asset, and its excerpt is
/// sanitised before the renderer can embed it.
pub fn fetch_posts(
    store: &dyn ContentStore,
    assets: &dyn AssetResolver,
    config: &PostsBlockConfig,
) -> Vec<PostContent> {
    let Some(post_type) = config.post_type.as_deref() else {
        return Vec::new();
    };

    let query = PostQuery {
        post_type: post_type.to_string(),
        limit: config.post_count,
        order: config.order,
        order_by: config.order_by,
    };

    store
        .query_posts(&query)
        .into_iter()
        .map(|record| {
            let image_url = record
                .featured_image_url
                .unwrap_or_else(|| assets.default_image_url(ImageKind::Post));
            PostContent {
                id: record.id,
                title: record.title,
                excerpt_html: EXCERPT_SANITIZER.clean(&record.excerpt_html).to_string(),
                permalink: record.permalink,
                image_url,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use time::macros::datetime;

    use super::*;
    use crate::domain::entities::{PostRecord, TermRecord};

    fn term(id: u64, name: &str) -> TermRecord {
        TermRecord {
            id,
            slug: name.to_lowercase(),
            name: name.to_string(),
            permalink: format!("/category/{}", name.to_lowercase()),
        }
    }

    fn post(id: u64, title: &str, image: Option<&str>) -> PostRecord {
        PostRecord {
            id,
            title: title.to_string(),
            excerpt_html: format!("<p>{title} excerpt</p><script>alert(1)</script>"),
            permalink: format!("/posts/{id}"),
            featured_image_url: image.map(str::to_string),
            published_at: datetime!(2025-11-03 09:30 UTC),
            modified_at: datetime!(2025-11-04 10:00 UTC),
            comment_count: 0,
        }
    }

    /// Store double that records queries and returns canned rows.
    struct ScriptedStore {
        terms: Vec<TermRecord>,
        posts: Vec<PostRecord>,
        term_queries: AtomicUsize,
        post_queries: Mutex<Vec<PostQuery>>,
    }

    impl ScriptedStore {
        fn new(terms: Vec<TermRecord>, posts: Vec<PostRecord>) -> Self {
            Self {
                terms,
                posts,
                term_queries: AtomicUsize::new(0),
                post_queries: Mutex::new(Vec::new()),
            }
        }
    }

    impl ContentStore for ScriptedStore {
        fn terms_by_id(&self, _taxonomy: &str, ids: &[u64]) -> Vec<TermRecord> {
            self.term_queries.fetch_add(1, Ordering::SeqCst);
            self.terms
                .iter()
                .filter(|record| ids.contains(&record.id))
                .cloned()
                .collect()
        }

        fn term_image_url(&self, _taxonomy: &str, term_id: u64) -> Option<String> {
            (term_id == 5).then(|| "/media/terms/5.png".to_string())
        }

        fn query_posts(&self, query: &PostQuery) -> Vec<PostRecord> {
            self.post_queries.lock().expect("query log").push(query.clone());
            self.posts
                .iter()
                .take(query.limit as usize)
                .cloned()
                .collect()
        }
    }

    impl AssetResolver for ScriptedStore {
        fn default_image_url(&self, kind: ImageKind) -> String {
            format!("/assets/default-{}.png", kind.as_str())
        }
    }

    #[test]
    fn empty_selection_never_queries_the_store() {
        let store = ScriptedStore::new(vec![term(5, "Engineering")], Vec::new());

        let config = TermsBlockConfig {
            taxonomy: Some("category".to_string()),
            ..TermsBlockConfig::default()
        };
        assert!(fetch_terms(&store, &store, &config).is_empty());

        let unset = TermsBlockConfig {
            term_ids: vec![5],
            ..TermsBlockConfig::default()
        };
        assert!(fetch_terms(&store, &store, &unset).is_empty());

        assert_eq!(store.term_queries.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn store_order_is_normalised_to_selection_order() {
        // Store returns name-alphabetical order; the selection asked for 9 first.
        let store = ScriptedStore::new(
            vec![term(5, "Engineering"), term(9, "Essays"), term(11, "Notes")],
            Vec::new(),
        );
        let config = TermsBlockConfig {
            taxonomy: Some("category".to_string()),
            term_ids: vec![9, 5],
            ..TermsBlockConfig::default()
        };

        let fetched = fetch_terms(&store, &store, &config);
        let ids: Vec<u64> = fetched.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![9, 5]);
    }

    #[test]
    fn missing_term_images_fall_back_to_the_placeholder() {
        let store = ScriptedStore::new(
            vec![term(5, "Engineering"), term(9, "Essays")],
            Vec::new(),
        );
        let config = TermsBlockConfig {
            taxonomy: Some("category".to_string()),
            term_ids: vec![5, 9],
            ..TermsBlockConfig::default()
        };

        let fetched = fetch_terms(&store, &store, &config);
        assert_eq!(fetched[0].image_url, "/media/terms/5.png");
        assert_eq!(fetched[1].image_url, "/assets/default-term.png");
    }

    #[test]
    fn unset_post_type_skips_the_query() {
        let store = ScriptedStore::new(Vec::new(), vec![post(1, "Hello", None)]);
        let config = PostsBlockConfig::default();

        assert!(fetch_posts(&store, &store, &config).is_empty());
        assert!(store.post_queries.lock().expect("query log").is_empty());
    }

    #[test]
    fn post_query_carries_the_configured_bounds() {
        let store = ScriptedStore::new(Vec::new(), Vec::new());
        let config = PostsBlockConfig {
            post_type: Some("post".to_string()),
            post_count: 7,
            order: crate::domain::types::SortOrder::Desc,
            order_by: crate::domain::types::SortField::Title,
            ..PostsBlockConfig::default()
        };

        fetch_posts(&store, &store, &config);

        let queries = store.post_queries.lock().expect("query log");
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].limit, 7);
        assert_eq!(queries[0].order, crate::domain::types::SortOrder::Desc);
        assert_eq!(queries[0].order_by, crate::domain::types::SortField::Title);
    }

    #[test]
    fn excerpts_are_sanitised_and_images_resolved() {
        let store = ScriptedStore::new(
            Vec::new(),
            vec![
                post(1, "First", Some("/media/posts/1.jpg")),
                post(2, "Second", None),
            ],
        );
        let config = PostsBlockConfig {
            post_type: Some("post".to_string()),
            ..PostsBlockConfig::default()
        };

        let fetched = fetch_posts(&store, &store, &config);
        assert_eq!(fetched[0].image_url, "/media/posts/1.jpg");
        assert_eq!(fetched[1].image_url, "/assets/default-post.png");
        assert!(fetched[0].excerpt_html.contains("First excerpt"));
        assert!(!fetched[0].excerpt_html.contains("script"));
    }
}
