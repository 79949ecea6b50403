//! Constants used throughout the site core crate.
//!
//! Defaults for the firm's ambient details live here so that configuration files only need to
//! carry what differs from them.

/// Base URL every canonical link is built from.
pub const DEFAULT_BASE_URL: &str = "https://www.pacifictradelaw.com";

/// Firm name used for titles, `og:site_name` and schema publisher nodes.
pub const DEFAULT_FIRM_NAME: &str = "Pacific Customs & Trade Law Group";

pub const DEFAULT_FIRM_DESCRIPTION: &str = "Customs and international trade attorneys representing importers and exporters before U.S. Customs and Border Protection.";

pub const DEFAULT_PHONE_DISPLAY: &str = "(530) 555-0142";

pub const DEFAULT_EMAIL: &str = "intake@pacifictradelaw.com";

/// Social preview image used when a page does not set its own.
pub const DEFAULT_OG_IMAGE: &str = "https://www.pacifictradelaw.com/images/og-default.jpg";

/// Suffix appended to a city slug to form its landing page path.
pub const LOCATION_SLUG_SUFFIX: &str = "customs-attorney";

/// Fixed labels for the news view derived from articles.
pub const NEWS_SOURCE_LABEL: &str = "Customs & Trade Law Insights";
pub const NEWS_CATEGORY: &str = "Customs Law";
pub const NEWS_DISPLAY_DATE: &str = "2025";

/// Canonical paths of the fixed pages.
pub const NEWS_PATH: &str = "news";
pub const ARTICLE_PATH_PREFIX: &str = "article";

/// First path segments owned by fixed pages or the HTTP surface. A city page may not claim one.
pub const RESERVED_PATH_SEGMENTS: &[&str] = &[
    NEWS_PATH,
    ARTICLE_PATH_PREFIX,
    "api",
    "api-docs",
    "health",
    "swagger-ui",
];

/// Keywords for pages that carry no copy of their own.
pub const DEFAULT_KEYWORDS: &str =
    "customs attorney, trade law, CBP penalties, import compliance, tariff classification";

/// Filename written per page by the static build.
pub const INDEX_FILENAME: &str = "index.html";
pub const SITEMAP_FILENAME: &str = "sitemap.xml";
