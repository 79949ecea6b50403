//! Page templates.
//!
//! Every page is a pure function from content to a [`RenderedPage`]: the body markup plus the
//! [`SeoConfig`] describing its head. City pages share one template driven by
//! [`LocationRecord`]s. Turning a `RenderedPage` into a document applies the head through
//! [`HeadDocument`], exactly once per page view.

use crate::config::SiteConfig;
use crate::constants::{DEFAULT_KEYWORDS, NEWS_PATH};
use crate::content::{Article, ContentStore};
use crate::head::{HeadDocument, SeoConfig};
use crate::html::{escape_attr, escape_text};
use crate::links::{article_path, Route};
use crate::locations::{LocationRecord, LocationStore};
use crate::SiteResult;
use jsonld::{
    article_schema, breadcrumb_schema, faq_schema, local_business_schema, service_schema,
    web_page_schema, ArticleInput, BreadcrumbInput, FaqInput, ServiceInput, WebPageInput,
};
use std::fmt::Write as _;

/// Service type every `Service` node on a city page is filed under.
const SERVICE_TYPE: &str = "Customs and International Trade Law";

/// Articles shown on the home page.
const HOME_NEWS_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageStatus {
    Ok,
    NotFound,
}

/// A page ready to be written out or served.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedPage {
    pub route: Route,
    pub status: PageStatus,
    pub seo: SeoConfig,
    pub body_html: String,
}

impl RenderedPage {
    /// Apply the page's metadata to a fresh head and wrap the body in a full document.
    pub fn to_html(&self, cfg: &SiteConfig) -> SiteResult<String> {
        let mut head = HeadDocument::new();
        head.apply(&self.seo, cfg)?;
        Ok(render_document(&head, &self.body_html, cfg))
    }

    /// Just the synchronised head, for inspection.
    pub fn head(&self, cfg: &SiteConfig) -> SiteResult<HeadDocument> {
        let mut head = HeadDocument::new();
        head.apply(&self.seo, cfg)?;
        Ok(head)
    }
}

/// `tel:` link for a display phone number; keeps digits and a leading `+`.
pub fn tel_href(phone_display: &str) -> String {
    let trimmed = phone_display.trim();
    let mut out = String::from("tel:");
    if trimmed.starts_with('+') {
        out.push('+');
    }
    out.extend(trimmed.chars().filter(char::is_ascii_digit));
    out
}

fn render_document(head: &HeadDocument, body_html: &str, cfg: &SiteConfig) -> String {
    let firm = escape_text(cfg.firm_name());
    let phone = escape_text(cfg.phone_display());
    let tel = escape_attr(&tel_href(cfg.phone_display()));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{head}\n</head>\n<body>\n\
         <header class=\"site-header\">\n  <a class=\"brand\" href=\"/\">{firm}</a>\n  \
         <nav><a href=\"/\">Home</a> <a href=\"/{NEWS_PATH}\">News</a> \
         <a class=\"phone\" href=\"{tel}\">{phone}</a></nav>\n</header>\n\
         <main>\n{body_html}\n</main>\n\
         <footer class=\"site-footer\">\n  \
         <section id=\"evaluation\"><h2>Request a Case Evaluation</h2>\n  \
         <div data-component=\"evaluation-form\" data-theme=\"light\"></div></section>\n  \
         <p>{firm} &middot; <a href=\"mailto:{email}\">{email_text}</a></p>\n</footer>\n\
         </body>\n</html>\n",
        head = head.render(),
        email = escape_attr(cfg.email()),
        email_text = escape_text(cfg.email()),
    )
}

fn crumb(cfg: &SiteConfig, name: &str, path: &str) -> BreadcrumbInput {
    BreadcrumbInput::new(name, cfg.url_for(path))
}

pub fn render_home_page(
    cfg: &SiteConfig,
    content: &ContentStore,
    locations: &LocationStore,
) -> RenderedPage {
    let title = format!("{} | Customs & International Trade Attorneys", cfg.firm_name());
    let cities: Vec<String> = locations
        .locations()
        .iter()
        .map(|l| l.city.to_string())
        .collect();

    let seo = SeoConfig::new(title.clone())
        .description(cfg.firm_description())
        .keywords("customs attorney, international trade lawyer, CBP penalties, tariff classification, import compliance")
        .canonical("")
        .og_image(cfg.default_og_image())
        .schema(vec![
            local_business_schema(&cfg.business_info(cities)),
            web_page_schema(WebPageInput {
                title: title.clone(),
                description: cfg.firm_description().to_owned(),
                url: cfg.url_for(""),
            }),
        ]);

    let mut body = String::new();
    let _ = write!(
        body,
        "<section class=\"hero\">\n<h1>{}</h1>\n<p>{}</p>\n</section>\n",
        escape_text(cfg.firm_name()),
        escape_text(cfg.firm_description())
    );

    body.push_str("<section class=\"locations\">\n<h2>Offices and Service Areas</h2>\n<ul>\n");
    for location in locations.locations() {
        let _ = writeln!(
            body,
            "<li><a href=\"/{}\">{} Customs Attorney</a></li>",
            escape_attr(location.slug.as_str()),
            escape_text(location.city.as_str())
        );
    }
    body.push_str("</ul>\n</section>\n");

    body.push_str("<section class=\"latest-news\">\n<h2>Latest Insights</h2>\n<ul>\n");
    for article in content.articles().iter().take(HOME_NEWS_LIMIT) {
        let _ = writeln!(
            body,
            "<li><a href=\"/{}\">{}</a></li>",
            escape_attr(&article_path(article.id.as_str())),
            escape_text(article.title.as_str())
        );
    }
    let _ = write!(
        body,
        "</ul>\n<a href=\"/{NEWS_PATH}\">All articles</a>\n</section>"
    );

    RenderedPage {
        route: Route::Home,
        status: PageStatus::Ok,
        seo,
        body_html: body,
    }
}

pub fn render_news_page(cfg: &SiteConfig, content: &ContentStore) -> RenderedPage {
    let title = format!("Customs & Trade Law News | {}", cfg.firm_name());
    let description =
        "Articles on CBP enforcement, tariff classification, trade remedies and import compliance.";

    let seo = SeoConfig::new(title.clone())
        .description(description)
        .keywords("customs law news, trade law articles, CBP updates, tariff news")
        .canonical(NEWS_PATH)
        .og_image(cfg.default_og_image())
        .schema(vec![
            web_page_schema(WebPageInput {
                title,
                description: description.to_owned(),
                url: cfg.url_for(NEWS_PATH),
            }),
            breadcrumb_schema(&[crumb(cfg, "Home", ""), crumb(cfg, "News", NEWS_PATH)]),
        ]);

    let mut body = String::from("<section class=\"news\">\n<h1>News &amp; Insights</h1>\n<ul>\n");
    for item in content.news_items() {
        let _ = writeln!(
            body,
            "<li id=\"{id}\"><a href=\"/{path}\" data-link=\"{link}\">{title}</a> \
             <span class=\"source\">{source}</span> <span class=\"category\">{category}</span> \
             <time>{date}</time></li>",
            id = escape_attr(item.id.as_str()),
            path = escape_attr(&article_path(item.id.as_str())),
            link = escape_attr(&item.link),
            title = escape_text(&item.title),
            source = escape_text(item.source),
            category = escape_text(item.category),
            date = escape_text(item.date),
        );
    }
    body.push_str("</ul>\n</section>");

    RenderedPage {
        route: Route::News,
        status: PageStatus::Ok,
        seo,
        body_html: body,
    }
}

/// Article detail, or the "Article not found" fallback for an unknown id.
pub fn render_article_page(cfg: &SiteConfig, content: &ContentStore, id: &str) -> RenderedPage {
    let route = Route::Article(id.to_owned());
    match content.find_by_id(id) {
        Some(article) => RenderedPage {
            route,
            status: PageStatus::Ok,
            seo: article_seo(cfg, article),
            body_html: article_body(article),
        },
        None => {
            tracing::debug!(id, "article not found");
            RenderedPage {
                route,
                status: PageStatus::NotFound,
                seo: fallback_seo(cfg, "Article not found"),
                body_html: format!(
                    "<section class=\"not-found\">\n<h1>Article not found</h1>\n\
                     <p><a href=\"/{NEWS_PATH}\" data-link=\"#{NEWS_PATH}\">Return to News</a></p>\n\
                     </section>"
                ),
            }
        }
    }
}

fn article_seo(cfg: &SiteConfig, article: &Article) -> SeoConfig {
    let path = article_path(article.id.as_str());
    let url = cfg.url_for(&path);
    let title = article.title.to_string();

    let mut seo = SeoConfig::new(format!("{title} | {}", cfg.firm_name()))
        .description(article.intro.clone())
        .keywords(article.keywords.clone())
        .canonical(path.clone())
        .og_type("article")
        .og_image(cfg.default_og_image())
        .schema(vec![
            article_schema(
                ArticleInput {
                    headline: title.clone(),
                    description: article.intro.clone(),
                    url,
                    date_published: article.published,
                    keywords: Some(article.keywords.clone()),
                },
                &cfg.business_info(Vec::new()),
            ),
            breadcrumb_schema(&[
                crumb(cfg, "Home", ""),
                crumb(cfg, "News", NEWS_PATH),
                crumb(cfg, &title, &path),
            ]),
        ]);

    if let Some(date) = article.published {
        seo = seo.published(date.format("%Y-%m-%d").to_string());
    }
    seo
}

fn article_body(article: &Article) -> String {
    format!(
        "<article id=\"{id}\">\n<header>\n<h1>{title}</h1>\n<p class=\"subheading\">{sub}</p>\n\
         </header>\n<p class=\"intro\">{intro}</p>\n<p class=\"services\">{services}</p>\n\
         {content}\n<p><a href=\"/{NEWS_PATH}\">Back to News</a></p>\n</article>",
        id = escape_attr(article.id.as_str()),
        title = escape_text(article.title.as_str()),
        sub = escape_text(&article.subheading),
        intro = escape_text(&article.intro),
        services = escape_text(&article.services),
        content = article.content_html.trim_end(),
    )
}

/// City landing page, or a generic not-found page for an unknown slug.
pub fn render_location_page(
    cfg: &SiteConfig,
    locations: &LocationStore,
    slug: &str,
) -> RenderedPage {
    match locations.find_by_slug(slug) {
        Some(record) => RenderedPage {
            route: Route::Location(slug.to_owned()),
            status: PageStatus::Ok,
            seo: location_seo(cfg, record),
            body_html: location_body(cfg, locations, record),
        },
        None => render_not_found(cfg, Route::Location(slug.to_owned())),
    }
}

fn location_seo(cfg: &SiteConfig, record: &LocationRecord) -> SeoConfig {
    let city = record.city.as_str();
    let heading = format!("{city} Customs Attorney");
    let path = record.slug.as_str();
    let url = cfg.url_for(path);

    let mut area_served = vec![city.to_owned()];
    area_served.extend(record.nearby.iter().cloned());

    let faqs: Vec<FaqInput> = record
        .faqs
        .iter()
        .map(|f| FaqInput {
            question: f.question.to_string(),
            answer: f.answer.clone(),
        })
        .collect();

    let mut schema = vec![
        local_business_schema(&cfg.business_info(area_served)),
        web_page_schema(WebPageInput {
            title: heading.clone(),
            description: record.intro.clone(),
            url: url.clone(),
        }),
        breadcrumb_schema(&[crumb(cfg, "Home", ""), crumb(cfg, &heading, path)]),
        faq_schema(&faqs),
    ];
    schema.extend(record.services.iter().map(|s| {
        service_schema(ServiceInput {
            name: format!("{} in {city}", s.name),
            description: s.description.clone(),
            service_type: SERVICE_TYPE.to_owned(),
            url: url.clone(),
        })
    }));

    SeoConfig::new(format!("{heading} | {}", cfg.firm_name()))
        .description(record.intro.clone())
        .keywords(record.keywords.clone())
        .canonical(path)
        .og_image(cfg.default_og_image())
        .schema(schema)
}

fn location_body(cfg: &SiteConfig, locations: &LocationStore, record: &LocationRecord) -> String {
    let city = escape_text(record.city.as_str());
    let mut body = String::new();

    let _ = write!(
        body,
        "<section class=\"hero\">\n<h1>{city} Customs Attorney</h1>\n\
         <p class=\"region\">Serving {city} and {region}</p>\n<p>{intro}</p>\n\
         <a class=\"cta\" href=\"{tel}\">Call {phone}</a>\n</section>\n",
        region = escape_text(&record.region),
        intro = escape_text(&record.intro),
        tel = escape_attr(&tel_href(cfg.phone_display())),
        phone = escape_text(cfg.phone_display()),
    );

    if !record.services.is_empty() {
        let _ = writeln!(
            body,
            "<section class=\"services\">\n<h2>Customs Services in {city}</h2>\n<ul>"
        );
        for service in &record.services {
            let _ = writeln!(
                body,
                "<li><h3>{}</h3><p>{}</p></li>",
                escape_text(service.name.as_str()),
                escape_text(&service.description)
            );
        }
        body.push_str("</ul>\n</section>\n");
    }

    if !record.faqs.is_empty() {
        body.push_str("<section class=\"faq\">\n<h2>Frequently Asked Questions</h2>\n");
        for faq in &record.faqs {
            let _ = writeln!(
                body,
                "<details><summary>{}</summary><p>{}</p></details>",
                escape_text(faq.question.as_str()),
                escape_text(&faq.answer)
            );
        }
        body.push_str("</section>\n");
    }

    if !record.nearby.is_empty() {
        body.push_str("<section class=\"nearby\">\n<h2>Nearby Communities</h2>\n<ul>\n");
        for name in &record.nearby {
            match locations.find_by_city(name) {
                Some(other) => {
                    let _ = writeln!(
                        body,
                        "<li><a href=\"/{}\">{}</a></li>",
                        escape_attr(other.slug.as_str()),
                        escape_text(name)
                    );
                }
                None => {
                    let _ = writeln!(body, "<li>{}</li>", escape_text(name));
                }
            }
        }
        body.push_str("</ul>\n</section>");
    }

    body.trim_end().to_owned()
}

/// Head for pages that miss: firm-level copy, no canonical URL, no structured data.
fn fallback_seo(cfg: &SiteConfig, heading: &str) -> SeoConfig {
    SeoConfig::new(format!("{heading} | {}", cfg.firm_name()))
        .description(cfg.firm_description())
        .keywords(DEFAULT_KEYWORDS)
        .og_image(cfg.default_og_image())
}

pub fn render_not_found(cfg: &SiteConfig, route: Route) -> RenderedPage {
    tracing::debug!(?route, "page not found");
    RenderedPage {
        route,
        status: PageStatus::NotFound,
        seo: fallback_seo(cfg, "Page not found"),
        body_html: "<section class=\"not-found\">\n<h1>Page not found</h1>\n\
                    <p><a href=\"/\">Return home</a></p>\n</section>"
            .to_owned(),
    }
}
