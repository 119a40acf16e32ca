//! Article catalog
//!
//! Built-in articles with markdown bodies embedded at compile time. The
//! catalog is read-only apart from per-article view counters, which live in
//! process memory and reset on restart.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Words per minute used for reading-time estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// Author shown for built-in articles
pub const DEFAULT_AUTHOR: &str = "Admin";

/// Article grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleCategory {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Markdown body
    pub content: String,
    pub excerpt: String,
    pub category_id: String,
    /// Type number this article focuses on, if any
    pub personality_type: Option<u8>,
    pub author: String,
    pub tags: Vec<String>,
    pub published: bool,
    /// RFC 3339 UTC timestamps; lexical order equals chronological order
    pub created_at: String,
    pub updated_at: String,
}

impl Article {
    pub fn reading_time_minutes(&self) -> usize {
        reading_time_minutes(&self.content)
    }
}

/// Estimated reading time in whole minutes, never less than one
pub fn reading_time_minutes(content: &str) -> usize {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Search criteria for [`ArticleCatalog::search`]
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    /// Case-insensitive substring matched against title, excerpt and content
    pub search: Option<String>,
    /// Category name or slug
    pub category: Option<String>,
}

/// In-memory article store
#[derive(Debug)]
pub struct ArticleCatalog {
    categories: Vec<ArticleCategory>,
    articles: Vec<Article>,
    views: HashMap<String, AtomicU64>,
}

impl ArticleCatalog {
    pub fn new(categories: Vec<ArticleCategory>, articles: Vec<Article>) -> Self {
        let views = articles
            .iter()
            .map(|a| (a.slug.clone(), AtomicU64::new(0)))
            .collect();
        Self {
            categories,
            articles,
            views,
        }
    }

    /// Catalog with the articles shipped in `content/articles`
    pub fn builtin() -> Self {
        Self::new(builtin_categories(), builtin_articles())
    }

    pub fn categories(&self) -> &[ArticleCategory] {
        &self.categories
    }

    /// Published articles only, in catalog order
    pub fn published(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter().filter(|a| a.published)
    }

    /// Published article with the given slug
    pub fn by_slug(&self, slug: &str) -> Option<&Article> {
        self.published().find(|a| a.slug == slug)
    }

    pub fn by_category_id(&self, category_id: &str) -> Vec<&Article> {
        self.published()
            .filter(|a| a.category_id == category_id)
            .collect()
    }

    pub fn category_by_id(&self, id: &str) -> Option<&ArticleCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&ArticleCategory> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Display name of an article's category ("General" when unknown)
    pub fn category_name(&self, article: &Article) -> &str {
        self.category_by_id(&article.category_id)
            .map(|c| c.name.as_str())
            .unwrap_or("General")
    }

    /// Published articles matching `filter`, newest first
    pub fn search(&self, filter: &ArticleFilter) -> Vec<&Article> {
        let needle = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let category_id = match filter.category.as_deref().map(str::trim) {
            Some(wanted) if !wanted.is_empty() => {
                let found = self.categories.iter().find(|c| {
                    c.slug.eq_ignore_ascii_case(wanted) || c.name.eq_ignore_ascii_case(wanted)
                });
                match found {
                    Some(category) => Some(category.id.as_str()),
                    // unknown category matches nothing
                    None => return Vec::new(),
                }
            }
            _ => None,
        };

        let mut matches: Vec<&Article> = self
            .published()
            .filter(|a| category_id.map_or(true, |id| a.category_id == id))
            .filter(|a| {
                needle.as_deref().map_or(true, |n| {
                    a.title.to_lowercase().contains(n)
                        || a.excerpt.to_lowercase().contains(n)
                        || a.content.to_lowercase().contains(n)
                })
            })
            .collect();

        sort_newest_first(&mut matches);
        matches
    }

    /// Other published articles sharing the category or the personality type
    ///
    /// Newest first, at most `limit`. May be empty.
    pub fn related(&self, article: &Article, limit: usize) -> Vec<&Article> {
        let mut related: Vec<&Article> = self
            .published()
            .filter(|other| other.id != article.id)
            .filter(|other| {
                other.category_id == article.category_id
                    || (article.personality_type.is_some()
                        && other.personality_type == article.personality_type)
            })
            .collect();

        sort_newest_first(&mut related);
        related.truncate(limit);
        related
    }

    /// Count one view and return the new total, `None` for unknown slugs
    pub fn record_view(&self, slug: &str) -> Option<u64> {
        self.views
            .get(slug)
            .map(|counter| counter.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

fn sort_newest_first(articles: &mut [&Article]) {
    articles.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
}

fn category(id: &str, name: &str, slug: &str, description: &str) -> ArticleCategory {
    ArticleCategory {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: Some(description.to_string()),
    }
}

fn builtin_categories() -> Vec<ArticleCategory> {
    vec![
        category("1", "Personality Types", "personality-types", "Articles about the nine personality types"),
        category("2", "Self-Development", "self-development", "Personal growth and development articles"),
        category("3", "Relationships", "relationships", "Understanding relationships through the Enneagram"),
        category("4", "Workplace", "workplace", "Applying Enneagram in professional settings"),
    ]
}

struct BuiltinArticle {
    id: &'static str,
    title: &'static str,
    slug: &'static str,
    content: &'static str,
    excerpt: &'static str,
    category_id: &'static str,
    personality_type: Option<u8>,
    tags: &'static [&'static str],
    date: &'static str,
}

const BUILTIN_ARTICLES: &[BuiltinArticle] = &[
    BuiltinArticle {
        id: "1",
        title: "Understanding Type 1: The Perfectionist",
        slug: "understanding-type-1-perfectionist",
        content: include_str!("../content/articles/understanding-type-1-perfectionist.md"),
        excerpt: "Learn about the core motivations and characteristics of Type 1 personalities.",
        category_id: "1",
        personality_type: Some(1),
        tags: &["type-1", "perfectionist"],
        date: "2024-01-15T10:00:00Z",
    },
    BuiltinArticle {
        id: "2",
        title: "How to Grow as a Type 2",
        slug: "how-to-grow-type-2",
        content: include_str!("../content/articles/how-to-grow-type-2.md"),
        excerpt: "Growth strategies specifically designed for Type 2 personalities.",
        category_id: "2",
        personality_type: Some(2),
        tags: &["type-2", "helper", "growth"],
        date: "2024-01-16T10:00:00Z",
    },
    BuiltinArticle {
        id: "3",
        title: "Enneagram in Relationships",
        slug: "enneagram-relationships",
        content: include_str!("../content/articles/enneagram-relationships.md"),
        excerpt: "Discover how the Enneagram can improve your relationships.",
        category_id: "3",
        personality_type: None,
        tags: &["relationships", "communication"],
        date: "2024-01-17T10:00:00Z",
    },
    BuiltinArticle {
        id: "4",
        title: "Personal Growth and Development",
        slug: "growth-development",
        content: include_str!("../content/articles/growth-development.md"),
        excerpt: "A comprehensive guide to using the Enneagram for personal transformation and spiritual growth.",
        category_id: "2",
        personality_type: None,
        tags: &["growth", "integration"],
        date: "2024-01-18T10:00:00Z",
    },
];

fn builtin_articles() -> Vec<Article> {
    BUILTIN_ARTICLES
        .iter()
        .map(|a| Article {
            id: a.id.to_string(),
            title: a.title.to_string(),
            slug: a.slug.to_string(),
            content: a.content.to_string(),
            excerpt: a.excerpt.to_string(),
            category_id: a.category_id.to_string(),
            personality_type: a.personality_type,
            author: DEFAULT_AUTHOR.to_string(),
            tags: a.tags.iter().map(|t| t.to_string()).collect(),
            published: true,
            created_at: a.date.to_string(),
            updated_at: a.date.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Article {
        Article {
            id: "99".into(),
            title: "Draft on Type 9".into(),
            slug: "draft-type-9".into(),
            content: "unfinished".into(),
            excerpt: "not yet".into(),
            category_id: "1".into(),
            personality_type: Some(9),
            author: DEFAULT_AUTHOR.into(),
            tags: Vec::new(),
            published: false,
            created_at: "2024-02-01T10:00:00Z".into(),
            updated_at: "2024-02-01T10:00:00Z".into(),
        }
    }

    fn catalog_with_draft() -> ArticleCatalog {
        let mut articles = builtin_articles();
        articles.push(draft());
        ArticleCatalog::new(builtin_categories(), articles)
    }

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = ArticleCatalog::builtin();
        assert_eq!(catalog.published().count(), 4);
        assert_eq!(catalog.categories().len(), 4);
        assert!(catalog.published().all(|a| a.content.starts_with("# ")));
    }

    #[test]
    fn test_unpublished_articles_are_hidden() {
        let catalog = catalog_with_draft();
        assert!(catalog.by_slug("draft-type-9").is_none());
        assert_eq!(catalog.published().count(), 4);
        assert!(catalog.search(&ArticleFilter::default()).iter().all(|a| a.published));
    }

    #[test]
    fn test_by_slug_and_category_lookups() {
        let catalog = ArticleCatalog::builtin();
        let article = catalog.by_slug("how-to-grow-type-2").unwrap();
        assert_eq!(catalog.category_name(article), "Self-Development");
        assert_eq!(catalog.by_category_id("2").len(), 2);
        assert_eq!(catalog.category_by_slug("workplace").unwrap().id, "4");
        assert!(catalog.by_slug("missing").is_none());
    }

    #[test]
    fn test_search_orders_newest_first() {
        let catalog = ArticleCatalog::builtin();
        let all = catalog.search(&ArticleFilter::default());
        let slugs: Vec<&str> = all.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec![
                "growth-development",
                "enneagram-relationships",
                "how-to-grow-type-2",
                "understanding-type-1-perfectionist",
            ]
        );
    }

    #[test]
    fn test_search_text_is_case_insensitive() {
        let catalog = ArticleCatalog::builtin();
        let filter = ArticleFilter {
            search: Some("PERFECTIONIST".into()),
            category: None,
        };
        let found = catalog.search(&filter);
        assert!(found.iter().any(|a| a.slug == "understanding-type-1-perfectionist"));
    }

    #[test]
    fn test_search_by_category_name_or_slug() {
        let catalog = ArticleCatalog::builtin();
        let by_name = catalog.search(&ArticleFilter {
            search: None,
            category: Some("Self-Development".into()),
        });
        let by_slug = catalog.search(&ArticleFilter {
            search: None,
            category: Some("self-development".into()),
        });
        assert_eq!(by_name.len(), 2);
        assert_eq!(by_name, by_slug);

        let unknown = catalog.search(&ArticleFilter {
            search: None,
            category: Some("astrology".into()),
        });
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_blank_filters_are_ignored() {
        let catalog = ArticleCatalog::builtin();
        let filter = ArticleFilter {
            search: Some("   ".into()),
            category: Some(String::new()),
        };
        assert_eq!(catalog.search(&filter).len(), 4);
    }

    #[test]
    fn test_related_shares_category() {
        let catalog = ArticleCatalog::builtin();
        let article = catalog.by_slug("how-to-grow-type-2").unwrap();
        let related = catalog.related(article, 3);

        let slugs: Vec<&str> = related.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["growth-development"]);
    }

    #[test]
    fn test_related_matches_personality_type() {
        let mut articles = builtin_articles();
        let mut other = draft();
        other.published = true;
        other.personality_type = Some(1);
        other.category_id = "4".into();
        articles.push(other);
        let catalog = ArticleCatalog::new(builtin_categories(), articles);

        let type_one = catalog.by_slug("understanding-type-1-perfectionist").unwrap();
        let related = catalog.related(type_one, 3);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].slug, "draft-type-9");
    }

    #[test]
    fn test_related_respects_limit() {
        let catalog = ArticleCatalog::builtin();
        let article = catalog.by_slug("growth-development").unwrap();
        assert_eq!(catalog.related(article, 0).len(), 0);
        assert_eq!(catalog.related(article, 10).len(), 1);
    }

    #[test]
    fn test_related_excludes_unrelated() {
        let catalog = ArticleCatalog::builtin();
        let article = catalog.by_slug("enneagram-relationships").unwrap();
        assert!(catalog.related(article, 3).is_empty());
    }

    #[test]
    fn test_view_counter() {
        let catalog = ArticleCatalog::builtin();
        assert_eq!(catalog.record_view("enneagram-relationships"), Some(1));
        assert_eq!(catalog.record_view("enneagram-relationships"), Some(2));
        assert_eq!(catalog.record_view("growth-development"), Some(1));
        assert_eq!(catalog.record_view("nope"), None);
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time_minutes(""), 1);
        assert_eq!(reading_time_minutes(&"word ".repeat(200)), 1);
        assert_eq!(reading_time_minutes(&"word ".repeat(201)), 2);
    }
}
