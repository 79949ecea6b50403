//! Article content store.
//!
//! Articles are authored in `content/articles.yaml`, compiled into the binary and parsed once.
//! After load the store is read-only; lookups by id return `None` on a miss and callers render
//! their own "not found" view.

use crate::constants::{NEWS_CATEGORY, NEWS_DISPLAY_DATE, NEWS_SOURCE_LABEL};
use crate::links::article_link;
use crate::{SiteError, SiteResult};
use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use site_types::{NonEmptyText, Slug};
use std::collections::HashSet;

const EMBEDDED_ARTICLES: &str = include_str!("../content/articles.yaml");

/// A long-form article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Article {
    pub id: Slug,
    pub title: NonEmptyText,
    pub subheading: String,
    pub intro: String,
    /// One-line summary of the services the article relates to.
    pub services: String,
    /// Comma-separated SEO keywords.
    pub keywords: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<NaiveDate>,
    /// Authored HTML, rendered without escaping.
    #[serde(rename = "content")]
    pub content_html: String,
}

/// Listing entry derived from an [`Article`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub id: Slug,
    pub title: String,
    pub source: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub link: String,
}

impl From<&Article> for NewsItem {
    fn from(article: &Article) -> Self {
        NewsItem {
            id: article.id.clone(),
            title: article.title.to_string(),
            source: NEWS_SOURCE_LABEL,
            category: NEWS_CATEGORY,
            date: NEWS_DISPLAY_DATE,
            link: article_link(&article.id),
        }
    }
}

/// Ordered, immutable collection of articles.
#[derive(Clone, Debug)]
pub struct ContentStore {
    articles: Vec<Article>,
}

impl ContentStore {
    /// Load the articles compiled into the binary.
    pub fn embedded() -> SiteResult<Self> {
        Self::from_yaml(EMBEDDED_ARTICLES)
    }

    /// Parse and validate an article list.
    ///
    /// # Errors
    ///
    /// - `SiteError::ContentParse` if the YAML does not match the article schema; the error
    ///   carries the path of the failing field (e.g. `[2].id`)
    /// - `SiteError::DuplicateId` if two articles share an id
    pub fn from_yaml(yaml_text: &str) -> SiteResult<Self> {
        let articles: Vec<Article> = parse_yaml_document("articles", yaml_text)?;
        ensure_unique("article", articles.iter().map(|a| a.id.as_str()))?;

        tracing::debug!(count = articles.len(), "loaded articles");
        Ok(Self { articles })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id.as_str() == id)
    }

    pub fn news_items(&self) -> Vec<NewsItem> {
        self.articles.iter().map(NewsItem::from).collect()
    }
}

/// Deserialize an embedded YAML document, reporting the path of the failing field.
pub(crate) fn parse_yaml_document<T: DeserializeOwned>(
    document: &'static str,
    yaml_text: &str,
) -> SiteResult<T> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let path = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        SiteError::ContentParse {
            document,
            path,
            source: err.into_inner(),
        }
    })
}

pub(crate) fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> SiteResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SiteError::DuplicateId {
                kind,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ARTICLES: &str = r#"
- id: first
  title: First
  subheading: Sub
  intro: Intro
  services: Services
  keywords: a, b
  content: "<p>one</p>"
- id: second
  title: Second
  subheading: Sub
  intro: Intro
  services: Services
  keywords: c
  published: 2024-02-29
  content: "<p>two</p>"
"#;

    #[test]
    fn embedded_articles_load() {
        let store = ContentStore::embedded().unwrap();
        assert!(!store.articles().is_empty());
    }

    #[test]
    fn every_article_is_found_by_its_own_id() {
        let store = ContentStore::embedded().unwrap();
        for article in store.articles() {
            let found = store.find_by_id(article.id.as_str()).unwrap();
            assert_eq!(found, article);
        }
    }

    #[test]
    fn unknown_id_is_none() {
        let store = ContentStore::embedded().unwrap();
        assert!(store.find_by_id("no-such-article").is_none());
        assert!(store.find_by_id("").is_none());
    }

    #[test]
    fn order_and_dates_are_preserved() {
        let store = ContentStore::from_yaml(TWO_ARTICLES).unwrap();
        let ids: Vec<_> = store.articles().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
        assert_eq!(store.articles()[0].published, None);
        assert_eq!(
            store.articles()[1].published,
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let yaml = TWO_ARTICLES.replace("id: second", "id: first");
        let err = ContentStore::from_yaml(&yaml).unwrap_err();
        assert!(matches!(
            err,
            SiteError::DuplicateId { kind: "article", ref id } if id == "first"
        ));
    }

    #[test]
    fn invalid_slug_reports_field_path() {
        let yaml = TWO_ARTICLES.replace("id: second", "id: Second Article");
        match ContentStore::from_yaml(&yaml).unwrap_err() {
            SiteError::ContentParse { document, path, .. } => {
                assert_eq!(document, "articles");
                assert!(path.contains("id"), "path was {path}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn news_items_mirror_articles() {
        let store = ContentStore::from_yaml(TWO_ARTICLES).unwrap();
        let news = store.news_items();

        assert_eq!(news.len(), 2);
        assert_eq!(news[1].title, "Second");
        assert_eq!(news[1].link, "#article/second");
        assert_eq!(news[1].source, NEWS_SOURCE_LABEL);
        assert_eq!(news[1].category, NEWS_CATEGORY);
        assert_eq!(news[1].date, NEWS_DISPLAY_DATE);
    }
}
