//! # Site Core
//!
//! Content and metadata generation for the firm's website.
//!
//! This crate contains everything needed to turn authored content into pages:
//! - The article and location stores, loaded from embedded YAML
//! - The document head model and metadata applier
//! - Page templates, routing and the static site build
//!
//! **No server concerns**: HTTP routing and request handling belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod head;
pub mod html;
pub mod links;
pub mod locations;
pub mod pages;
pub mod publish;

pub use config::{load_site_config, SiteConfig};
pub use content::{Article, ContentStore, NewsItem};
pub use error::{SiteError, SiteResult};
pub use head::{canonical_url, HeadDocument, HeadElement, MetaAttr, SeoConfig};
pub use links::{article_link, parse_fragment, parse_path, Route};
pub use locations::{location_slug, LocationRecord, LocationStore};
pub use pages::{PageStatus, RenderedPage};
pub use publish::{build_site, BuildSummary};

/// Configuration plus the content it renders. Immutable after construction.
#[derive(Clone, Debug)]
pub struct Site {
    config: SiteConfig,
    content: ContentStore,
    locations: LocationStore,
}

impl Site {
    /// Load the embedded content for `config`.
    pub fn new(config: SiteConfig) -> SiteResult<Self> {
        Ok(Self::with_content(
            config,
            ContentStore::embedded()?,
            LocationStore::embedded()?,
        ))
    }

    pub fn with_content(config: SiteConfig, content: ContentStore, locations: LocationStore) -> Self {
        Self {
            config,
            content,
            locations,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn locations(&self) -> &LocationStore {
        &self.locations
    }

    /// Render the page for a resolved route. Misses render a not-found page, never an error.
    pub fn render(&self, route: &Route) -> RenderedPage {
        match route {
            Route::Home => pages::render_home_page(&self.config, &self.content, &self.locations),
            Route::News => pages::render_news_page(&self.config, &self.content),
            Route::Article(id) => pages::render_article_page(&self.config, &self.content, id),
            Route::Location(slug) => {
                pages::render_location_page(&self.config, &self.locations, slug)
            }
            Route::NotFound(_) => pages::render_not_found(&self.config, route.clone()),
        }
    }

    /// Resolve and render a path or fragment (`/news`, `#article/<id>`).
    pub fn render_path(&self, path: &str) -> RenderedPage {
        let route = if path.starts_with('#') {
            parse_fragment(path)
        } else {
            parse_path(path)
        };
        self.render(&route)
    }

    /// Every page the site publishes: home, news, each article, each location.
    pub fn all_pages(&self) -> Vec<RenderedPage> {
        let mut routes = vec![Route::Home, Route::News];
        routes.extend(
            self.content
                .articles()
                .iter()
                .map(|a| Route::Article(a.id.to_string())),
        );
        routes.extend(
            self.locations
                .locations()
                .iter()
                .map(|l| Route::Location(l.slug.to_string())),
        );
        routes.iter().map(|r| self.render(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Site {
        Site::new(SiteConfig::default()).unwrap()
    }

    #[test]
    fn fragment_and_path_render_the_same_article() {
        let site = site();
        let id = site.content().articles()[0].id.clone();

        let by_fragment = site.render_path(&article_link(&id));
        let by_path = site.render_path(&format!("/article/{id}"));
        assert_eq!(by_fragment, by_path);
        assert_eq!(by_fragment.status, PageStatus::Ok);
    }

    #[test]
    fn unknown_routes_render_not_found() {
        let site = site();
        assert_eq!(
            site.render_path("#article/unknown").status,
            PageStatus::NotFound
        );
        assert_eq!(site.render_path("/no/such/page").status, PageStatus::NotFound);
        assert_eq!(site.render_path("/nowhere").status, PageStatus::NotFound);
    }

    #[test]
    fn every_published_page_is_found() {
        for page in site().all_pages() {
            assert_eq!(page.status, PageStatus::Ok, "{:?}", page.route);
            assert!(page.seo.canonical.is_some(), "{:?}", page.route);
        }
    }
}
