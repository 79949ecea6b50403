//! Document head model and the metadata applier.
//!
//! A [`HeadDocument`] is the in-memory stand-in for a page's `<head>`. Pages describe their
//! metadata with a [`SeoConfig`]; [`HeadDocument::apply`] synchronises the head to it.
//!
//! Apply follows an overwrite-not-append contract: every element written by a previous apply is
//! removed before the new set is written, so repeated applies never duplicate titles, canonical
//! links or JSON-LD scripts. Elements inserted with [`HeadDocument::insert_static`] (charset,
//! viewport) are not owned by the applier and survive every apply.

use crate::config::SiteConfig;
use crate::html::{escape_attr, escape_text};
use crate::SiteResult;
use jsonld::SchemaObject;

/// `og:type` written when a page does not choose one.
pub const DEFAULT_OG_TYPE: &str = "website";

/// Join a base URL and a site-relative path with exactly one `/`.
///
/// `canonical_url("https://x.test/", "/news")` and `canonical_url("https://x.test", "news")` both
/// yield `https://x.test/news`.
pub fn canonical_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Per-page metadata. Only `title` is required; every absent option omits its tags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeoConfig {
    pub title: String,
    pub description: Option<String>,
    /// Comma-separated keyword list.
    pub keywords: Option<String>,
    /// Site-relative path, combined with the configured base URL.
    pub canonical: Option<String>,
    pub og_type: Option<String>,
    /// Absolute image URL.
    pub og_image: Option<String>,
    /// ISO 8601 date or date-time.
    pub article_published_time: Option<String>,
    pub schema: Vec<SchemaObject>,
}

impl SeoConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn canonical(mut self, path: impl Into<String>) -> Self {
        self.canonical = Some(path.into());
        self
    }

    pub fn og_type(mut self, og_type: impl Into<String>) -> Self {
        self.og_type = Some(og_type.into());
        self
    }

    pub fn og_image(mut self, url: Option<&str>) -> Self {
        self.og_image = url.map(str::to_owned);
        self
    }

    pub fn published(mut self, iso: impl Into<String>) -> Self {
        self.article_published_time = Some(iso.into());
        self
    }

    pub fn schema(mut self, schema: Vec<SchemaObject>) -> Self {
        self.schema = schema;
        self
    }
}

/// Which attribute a `<meta>` element is keyed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    fn as_str(self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadElement {
    Charset(String),
    Title(String),
    Meta {
        attr: MetaAttr,
        key: String,
        content: String,
    },
    Link {
        rel: String,
        href: String,
    },
    /// Pre-serialised JSON-LD, already safe for a `<script>` body.
    JsonLd(String),
}

impl HeadElement {
    fn name(key: &str, content: impl Into<String>) -> Self {
        HeadElement::Meta {
            attr: MetaAttr::Name,
            key: key.to_owned(),
            content: content.into(),
        }
    }

    fn property(key: &str, content: impl Into<String>) -> Self {
        HeadElement::Meta {
            attr: MetaAttr::Property,
            key: key.to_owned(),
            content: content.into(),
        }
    }

    fn render(&self) -> String {
        match self {
            HeadElement::Charset(charset) => format!("<meta charset=\"{}\">", escape_attr(charset)),
            HeadElement::Title(title) => format!("<title>{}</title>", escape_text(title)),
            HeadElement::Meta { attr, key, content } => format!(
                "<meta {}=\"{}\" content=\"{}\">",
                attr.as_str(),
                escape_attr(key),
                escape_attr(content)
            ),
            HeadElement::Link { rel, href } => format!(
                "<link rel=\"{}\" href=\"{}\">",
                escape_attr(rel),
                escape_attr(href)
            ),
            HeadElement::JsonLd(body) => {
                format!("<script type=\"application/ld+json\">{body}</script>")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct HeadEntry {
    element: HeadElement,
    managed: bool,
}

/// Ordered set of head elements for one page view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadDocument {
    entries: Vec<HeadEntry>,
}

impl Default for HeadDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadDocument {
    /// A head holding only the static charset and viewport elements.
    pub fn new() -> Self {
        let mut head = Self::empty();
        head.insert_static(HeadElement::Charset("utf-8".into()));
        head.insert_static(HeadElement::name(
            "viewport",
            "width=device-width, initial-scale=1",
        ));
        head
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an element the applier will never remove.
    pub fn insert_static(&mut self, element: HeadElement) {
        self.entries.push(HeadEntry {
            element,
            managed: false,
        });
    }

    /// Synchronise page metadata to `seo`, replacing whatever a previous apply wrote.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::JsonLd` if a schema object cannot be serialised. The head is left
    /// unchanged in that case.
    pub fn apply(&mut self, seo: &SeoConfig, site: &SiteConfig) -> SiteResult<()> {
        let scripts = seo
            .schema
            .iter()
            .map(SchemaObject::to_script_body)
            .collect::<Result<Vec<_>, _>>()?;

        self.entries.retain(|e| !e.managed);

        let canonical = seo.canonical.as_deref().map(|p| site.url_for(p));
        let og_type = seo.og_type.as_deref().unwrap_or(DEFAULT_OG_TYPE);

        let mut managed = vec![HeadElement::Title(seo.title.clone())];
        if let Some(description) = &seo.description {
            managed.push(HeadElement::name("description", description.clone()));
        }
        if let Some(keywords) = &seo.keywords {
            managed.push(HeadElement::name("keywords", keywords.clone()));
        }
        if let Some(url) = &canonical {
            managed.push(HeadElement::Link {
                rel: "canonical".into(),
                href: url.clone(),
            });
        }

        managed.push(HeadElement::property("og:title", seo.title.clone()));
        if let Some(description) = &seo.description {
            managed.push(HeadElement::property("og:description", description.clone()));
        }
        managed.push(HeadElement::property("og:type", og_type));
        if let Some(url) = &canonical {
            managed.push(HeadElement::property("og:url", url.clone()));
        }
        if let Some(image) = &seo.og_image {
            managed.push(HeadElement::property("og:image", image.clone()));
        }
        managed.push(HeadElement::property("og:site_name", site.firm_name()));
        if let Some(published) = &seo.article_published_time {
            managed.push(HeadElement::property(
                "article:published_time",
                published.clone(),
            ));
        }

        let card = if seo.og_image.is_some() {
            "summary_large_image"
        } else {
            "summary"
        };
        managed.push(HeadElement::name("twitter:card", card));
        managed.push(HeadElement::name("twitter:title", seo.title.clone()));
        if let Some(description) = &seo.description {
            managed.push(HeadElement::name("twitter:description", description.clone()));
        }
        if let Some(image) = &seo.og_image {
            managed.push(HeadElement::name("twitter:image", image.clone()));
        }

        managed.extend(scripts.into_iter().map(HeadElement::JsonLd));

        tracing::debug!(
            title = %seo.title,
            schema = seo.schema.len(),
            "applied page metadata"
        );

        self.entries
            .extend(managed.into_iter().map(|element| HeadEntry {
                element,
                managed: true,
            }));
        Ok(())
    }

    pub fn elements(&self) -> impl Iterator<Item = &HeadElement> {
        self.entries.iter().map(|e| &e.element)
    }

    pub fn title(&self) -> Option<&str> {
        self.elements().find_map(|e| match e {
            HeadElement::Title(t) => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn canonical(&self) -> Option<&str> {
        self.elements().find_map(|e| match e {
            HeadElement::Link { rel, href } if rel == "canonical" => Some(href.as_str()),
            _ => None,
        })
    }

    /// Content of the first `<meta>` keyed by `attr`=`key`.
    pub fn meta(&self, attr: MetaAttr, key: &str) -> Option<&str> {
        self.elements().find_map(|e| match e {
            HeadElement::Meta {
                attr: a,
                key: k,
                content,
            } if *a == attr && k == key => Some(content.as_str()),
            _ => None,
        })
    }

    pub fn json_ld_scripts(&self) -> Vec<&str> {
        self.elements()
            .filter_map(|e| match e {
                HeadElement::JsonLd(body) => Some(body.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of elements matching `pred`.
    pub fn count(&self, pred: impl Fn(&HeadElement) -> bool) -> usize {
        self.elements().filter(|&e| pred(e)).count()
    }

    /// Serialise to the inner HTML of `<head>`, one element per line.
    pub fn render(&self) -> String {
        self.elements()
            .map(|e| format!("  {}", e.render()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonld::{breadcrumb_schema, faq_schema, BreadcrumbInput, FaqInput};

    fn site() -> SiteConfig {
        SiteConfig::default()
            .with_base_url("https://example.test")
            .unwrap()
    }

    fn is_title(e: &HeadElement) -> bool {
        matches!(e, HeadElement::Title(_))
    }

    fn is_canonical(e: &HeadElement) -> bool {
        matches!(e, HeadElement::Link { rel, .. } if rel == "canonical")
    }

    #[test]
    fn canonical_url_joins_with_single_slash() {
        assert_eq!(canonical_url("https://x.test/", "/news"), "https://x.test/news");
        assert_eq!(canonical_url("https://x.test", "news"), "https://x.test/news");
        assert_eq!(canonical_url("https://x.test", ""), "https://x.test/");
    }

    #[test]
    fn repeated_apply_replaces_instead_of_accumulating() {
        let site = site();
        let mut head = HeadDocument::new();

        let first = SeoConfig::new("First")
            .canonical("first")
            .schema(vec![breadcrumb_schema(&[]), faq_schema(&[]), faq_schema(&[])]);
        let second = SeoConfig::new("Second")
            .canonical("second")
            .schema(vec![faq_schema(&[FaqInput {
                question: "Q".into(),
                answer: "A".into(),
            }])]);

        head.apply(&first, &site).unwrap();
        head.apply(&second, &site).unwrap();

        assert_eq!(head.count(is_title), 1);
        assert_eq!(head.count(is_canonical), 1);
        assert_eq!(head.json_ld_scripts().len(), 1);
        assert_eq!(head.title(), Some("Second"));
        assert_eq!(head.canonical(), Some("https://example.test/second"));
    }

    #[test]
    fn missing_og_image_omits_tag() {
        let mut head = HeadDocument::new();
        head.apply(&SeoConfig::new("No image"), &site()).unwrap();

        assert_eq!(head.meta(MetaAttr::Property, "og:image"), None);
        assert_eq!(head.meta(MetaAttr::Name, "twitter:image"), None);
        assert_eq!(head.meta(MetaAttr::Name, "twitter:card"), Some("summary"));
    }

    #[test]
    fn previous_og_image_is_cleared() {
        let site = site();
        let mut head = HeadDocument::new();
        head.apply(
            &SeoConfig::new("With").og_image(Some("https://cdn.test/a.jpg")),
            &site,
        )
        .unwrap();
        head.apply(&SeoConfig::new("Without"), &site).unwrap();

        assert_eq!(head.meta(MetaAttr::Property, "og:image"), None);
    }

    #[test]
    fn canonical_is_stable_across_rerenders() {
        let site = site();
        let seo = SeoConfig::new("News").canonical("news");
        let mut head = HeadDocument::new();

        for _ in 0..3 {
            head.apply(&seo, &site).unwrap();
            assert_eq!(head.canonical(), Some("https://example.test/news"));
            assert_eq!(
                head.meta(MetaAttr::Property, "og:url"),
                Some("https://example.test/news")
            );
        }
        assert_eq!(head.count(is_canonical), 1);
    }

    #[test]
    fn static_elements_survive_apply() {
        let mut head = HeadDocument::new();
        head.apply(&SeoConfig::new("A"), &site()).unwrap();
        head.apply(&SeoConfig::new("B"), &site()).unwrap();

        assert_eq!(
            head.count(|e| matches!(e, HeadElement::Charset(_))),
            1
        );
        assert_eq!(
            head.meta(MetaAttr::Name, "viewport"),
            Some("width=device-width, initial-scale=1")
        );
    }

    #[test]
    fn missing_description_omits_all_description_tags() {
        let mut head = HeadDocument::new();
        head.apply(&SeoConfig::new("Bare"), &site()).unwrap();

        assert_eq!(head.meta(MetaAttr::Name, "description"), None);
        assert_eq!(head.meta(MetaAttr::Property, "og:description"), None);
        assert_eq!(head.meta(MetaAttr::Name, "keywords"), None);
        assert_eq!(head.canonical(), None);
        assert_eq!(head.meta(MetaAttr::Property, "og:type"), Some(DEFAULT_OG_TYPE));
    }

    #[test]
    fn full_config_writes_every_tag() {
        let seo = SeoConfig::new("Section 301 Tariffs")
            .description("What importers should know")
            .keywords("section 301, tariffs")
            .canonical("article/section-301")
            .og_type("article")
            .og_image(Some("https://cdn.test/301.jpg"))
            .published("2024-03-01");
        let mut head = HeadDocument::new();
        head.apply(&seo, &site()).unwrap();

        assert_eq!(
            head.meta(MetaAttr::Name, "description"),
            Some("What importers should know")
        );
        assert_eq!(
            head.meta(MetaAttr::Property, "og:description"),
            Some("What importers should know")
        );
        assert_eq!(head.meta(MetaAttr::Property, "og:type"), Some("article"));
        assert_eq!(
            head.meta(MetaAttr::Property, "article:published_time"),
            Some("2024-03-01")
        );
        assert_eq!(
            head.meta(MetaAttr::Name, "twitter:card"),
            Some("summary_large_image")
        );
        assert_eq!(
            head.meta(MetaAttr::Property, "og:site_name"),
            Some(site().firm_name())
        );
    }

    #[test]
    fn render_escapes_and_embeds_json_ld() {
        let seo = SeoConfig::new("Fees & \"Duties\"").schema(vec![breadcrumb_schema(&[
            BreadcrumbInput::new("Home", "https://example.test/"),
        ])]);
        let mut head = HeadDocument::new();
        head.apply(&seo, &site()).unwrap();
        let html = head.render();

        assert!(html.contains("<title>Fees &amp; \"Duties\"</title>"));
        assert!(html.contains("content=\"Fees &amp; &quot;Duties&quot;\""));
        assert!(html.contains("<script type=\"application/ld+json\">{"));
        assert!(html.contains("\"@type\":\"BreadcrumbList\""));
        assert!(html.starts_with("  <meta charset=\"utf-8\">"));
    }
}
