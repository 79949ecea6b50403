//! # API REST
//!
//! HTTP surface for the site.
//!
//! Handles:
//! - Server-rendered pages (home, news, articles, city landing pages)
//! - A read-only JSON article API with OpenAPI/Swagger documentation
//! - REST-specific concerns (status codes, content types, CORS)
//!
//! Rendering itself lives in `site-core`; handlers only resolve routes and map page status to
//! HTTP status.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use site_core::publish::{sitemap_urls, sitemap_xml};
use site_core::{Article, NewsItem, PageStatus, RenderedPage, Route, Site};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    site: Arc<Site>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NewsItemRes {
    pub id: String,
    pub title: String,
    pub source: String,
    pub category: String,
    pub date: String,
    /// Fragment link, `#article/<id>`.
    pub link: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListArticlesRes {
    pub articles: Vec<NewsItemRes>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleRes {
    pub id: String,
    pub title: String,
    pub subheading: String,
    pub intro: String,
    pub services: String,
    pub keywords: String,
    /// ISO 8601 date, when known.
    pub published: Option<String>,
    pub content_html: String,
    /// Canonical URL of the article page.
    pub url: String,
}

impl From<NewsItem> for NewsItemRes {
    fn from(item: NewsItem) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title,
            source: item.source.into(),
            category: item.category.into(),
            date: item.date.into(),
            link: item.link,
        }
    }
}

impl ArticleRes {
    fn new(article: &Article, url: String) -> Self {
        Self {
            id: article.id.to_string(),
            title: article.title.to_string(),
            subheading: article.subheading.clone(),
            intro: article.intro.clone(),
            services: article.services.clone(),
            keywords: article.keywords.clone(),
            published: article.published.map(|d| d.format("%Y-%m-%d").to_string()),
            content_html: article.content_html.clone(),
            url,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_articles, read_article),
    components(schemas(HealthRes, NewsItemRes, ListArticlesRes, ArticleRes))
)]
struct ApiDoc;

/// Build the router for `site`.
pub fn router(site: Arc<Site>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(home_page))
        .route("/news", get(news_page))
        .route("/article/:id", get(article_page))
        .route("/sitemap.xml", get(sitemap))
        .route("/api/articles", get(list_articles))
        .route("/api/articles/:id", get(read_article))
        .route("/:slug", get(location_page))
        .merge(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .fallback(not_found_page)
        .layer(CorsLayer::permissive())
        .with_state(AppState { site })
}

/// Serialise a rendered page, mapping its status onto the HTTP status.
fn page_response(state: &AppState, page: RenderedPage) -> Response {
    let status = match page.status {
        PageStatus::Ok => StatusCode::OK,
        PageStatus::NotFound => StatusCode::NOT_FOUND,
    };
    match page.to_html(state.site.config()) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Render page error for {:?}: {:?}", page.route, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint used by monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "site is alive".into(),
    })
}

#[axum::debug_handler]
async fn home_page(State(state): State<AppState>) -> Response {
    let page = state.site.render(&Route::Home);
    page_response(&state, page)
}

#[axum::debug_handler]
async fn news_page(State(state): State<AppState>) -> Response {
    let page = state.site.render(&Route::News);
    page_response(&state, page)
}

/// Article detail page; unknown ids get the "Article not found" page with a 404.
#[axum::debug_handler]
async fn article_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let page = state.site.render(&Route::Article(id));
    page_response(&state, page)
}

#[axum::debug_handler]
async fn location_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let page = state.site.render(&Route::Location(slug));
    page_response(&state, page)
}

/// Anything the routes above miss, including trailing-slash forms such as `/news/`, goes
/// through the same path resolution as the static build.
async fn not_found_page(State(state): State<AppState>, uri: axum::http::Uri) -> Response {
    let page = state.site.render_path(uri.path());
    page_response(&state, page)
}

#[axum::debug_handler]
async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let xml = sitemap_xml(&sitemap_urls(&state.site));
    ([(header::CONTENT_TYPE, "application/xml")], xml)
}

#[utoipa::path(
    get,
    path = "/api/articles",
    responses(
        (status = 200, description = "All articles as news items, in authored order", body = ListArticlesRes)
    )
)]
/// List every article as a news item.
#[axum::debug_handler]
async fn list_articles(State(state): State<AppState>) -> Json<ListArticlesRes> {
    let articles = state
        .site
        .content()
        .news_items()
        .into_iter()
        .map(NewsItemRes::from)
        .collect();
    Json(ListArticlesRes { articles })
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(
        ("id" = String, Path, description = "Article id")
    ),
    responses(
        (status = 200, description = "Article", body = ArticleRes),
        (status = 404, description = "Article not found")
    )
)]
/// Read a single article by id.
///
/// # Errors
/// Returns `404 Not Found` if no article has this id.
#[axum::debug_handler]
async fn read_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArticleRes>, (StatusCode, &'static str)> {
    let article = state
        .site
        .content()
        .find_by_id(&id)
        .ok_or((StatusCode::NOT_FOUND, "Article not found"))?;
    let url = state
        .site
        .config()
        .url_for(&site_core::links::article_path(article.id.as_str()));
    Ok(Json(ArticleRes::new(article, url)))
}
