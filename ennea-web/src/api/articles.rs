//! Article listing and detail endpoints

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use ennea_common::articles::{Article, ArticleCatalog, ArticleFilter};
use ennea_common::personality;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ApiError;
use super::types::PersonalityTypeDetails;
use crate::pagination::{calculate_pagination, validate, DEFAULT_LIMIT};
use crate::AppState;

/// Related articles returned with a detail view
pub const RELATED_LIMIT: usize = 3;

/// Query parameters for article listing
#[derive(Debug, Deserialize)]
pub struct ArticleListQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Page size (1-50)
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Free-text search over title, excerpt and content
    #[serde(default)]
    pub search: String,

    /// Category name or slug
    #[serde(default)]
    pub category: String,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// List entry for an article
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePreview {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub slug: String,
    pub category: String,
    pub personality_type: Option<u8>,
    pub author: String,
    pub published_at: String,
    pub reading_time: usize,
}

impl ArticlePreview {
    fn new(catalog: &ArticleCatalog, article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            slug: article.slug.clone(),
            category: catalog.category_name(article).to_string(),
            personality_type: article.personality_type,
            author: article.author.clone(),
            published_at: article.created_at.clone(),
            reading_time: article.reading_time_minutes(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationBody {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_count: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct FiltersBody {
    pub search: String,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub success: bool,
    pub articles: Vec<ArticlePreview>,
    pub pagination: PaginationBody,
    pub filters: FiltersBody,
}

/// GET /api/articles?page&limit&search&category
///
/// Published articles, newest first.
pub async fn list_articles(
    State(state): State<AppState>,
    query: Result<Query<ArticleListQuery>, QueryRejection>,
) -> Result<Json<ArticleListResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        debug!("Rejected article query: {}", rejection.body_text());
        invalid_pagination()
    })?;
    let (page, limit) = validate(query.page, query.limit).ok_or_else(invalid_pagination)?;

    let catalog = &state.articles;
    let filter = ArticleFilter {
        search: Some(query.search.clone()),
        category: Some(query.category.clone()),
    };
    let matches = catalog.search(&filter);

    let pagination = calculate_pagination(matches.len() as i64, page, limit);
    let articles = matches
        .iter()
        .skip(pagination.offset as usize)
        .take(pagination.limit as usize)
        .map(|article| ArticlePreview::new(catalog, article))
        .collect();

    Ok(Json(ArticleListResponse {
        success: true,
        articles,
        pagination: PaginationBody {
            current_page: pagination.page,
            total_pages: pagination.total_pages,
            total_count: matches.len() as i64,
            has_next_page: pagination.has_next_page(),
            has_prev_page: pagination.has_prev_page(),
            limit: pagination.limit,
        },
        filters: FiltersBody {
            search: query.search,
            category: query.category,
        },
    }))
}

fn invalid_pagination() -> ApiError {
    ApiError::BadRequest("Invalid pagination parameters".to_string())
}

/// Full article
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleBody {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub slug: String,
    pub category: String,
    pub personality_type: Option<u8>,
    pub author: String,
    pub published_at: String,
    pub updated_at: String,
    pub reading_time: usize,
    pub views: u64,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetailResponse {
    pub success: bool,
    pub article: ArticleBody,
    pub personality_type_details: Option<PersonalityTypeDetails>,
    pub related_articles: Vec<ArticlePreview>,
}

/// GET /api/articles/:slug
///
/// Counts a view on every successful fetch.
pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleDetailResponse>, ApiError> {
    let catalog = &state.articles;
    let article = catalog
        .by_slug(&slug)
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

    let views = catalog.record_view(&article.slug).unwrap_or(0);
    debug!("Article {} viewed {} times", article.slug, views);

    let related_articles = catalog
        .related(article, RELATED_LIMIT)
        .into_iter()
        .map(|related| ArticlePreview::new(catalog, related))
        .collect();

    let personality_type_details = article
        .personality_type
        .and_then(personality::by_number)
        .map(PersonalityTypeDetails::from);

    Ok(Json(ArticleDetailResponse {
        success: true,
        article: ArticleBody {
            id: article.id.clone(),
            title: article.title.clone(),
            content: article.content.clone(),
            excerpt: article.excerpt.clone(),
            slug: article.slug.clone(),
            category: catalog.category_name(article).to_string(),
            personality_type: article.personality_type,
            author: article.author.clone(),
            published_at: article.created_at.clone(),
            updated_at: article.updated_at.clone(),
            reading_time: article.reading_time_minutes(),
            views,
            tags: article.tags.clone(),
        },
        personality_type_details,
        related_articles,
    }))
}
