//! City landing page records.
//!
//! Each city the firm targets is one [`LocationRecord`] rendered through a single template in
//! [`crate::pages`]. FAQ and service copy is owned by each record so pages can target their own
//! keywords.

use crate::constants::{LOCATION_SLUG_SUFFIX, RESERVED_PATH_SEGMENTS};
use crate::content::{ensure_unique, parse_yaml_document};
use crate::{SiteError, SiteResult};
use serde::{Deserialize, Serialize};
use site_types::{NonEmptyText, Slug};

const EMBEDDED_LOCATIONS: &str = include_str!("../content/locations.yaml");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceBlurb {
    pub name: NonEmptyText,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqEntry {
    pub question: NonEmptyText,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LocationWire {
    #[serde(default)]
    slug: Option<Slug>,
    city: NonEmptyText,
    region: String,
    keywords: String,
    intro: String,
    #[serde(default)]
    services: Vec<ServiceBlurb>,
    #[serde(default)]
    faqs: Vec<FaqEntry>,
    #[serde(default)]
    nearby: Vec<String>,
}

/// Everything that differs between two city landing pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocationRecord {
    pub slug: Slug,
    pub city: NonEmptyText,
    pub region: String,
    pub keywords: String,
    pub intro: String,
    pub services: Vec<ServiceBlurb>,
    pub faqs: Vec<FaqEntry>,
    pub nearby: Vec<String>,
}

/// Landing page path for a city, e.g. `Yuba City` -> `yuba-city-customs-attorney`.
pub fn location_slug(city: &str) -> SiteResult<Slug> {
    let base = Slug::slugify(city)?;
    Ok(Slug::new(format!("{base}-{LOCATION_SLUG_SUFFIX}"))?)
}

#[derive(Clone, Debug)]
pub struct LocationStore {
    locations: Vec<LocationRecord>,
}

impl LocationStore {
    pub fn embedded() -> SiteResult<Self> {
        Self::from_yaml(EMBEDDED_LOCATIONS)
    }

    /// Parse location records, deriving missing slugs from the city name.
    ///
    /// # Errors
    ///
    /// `SiteError::ContentParse` for schema mismatches, `SiteError::DuplicateId` when two
    /// records resolve to the same slug or a slug collides with a reserved path segment.
    pub fn from_yaml(yaml_text: &str) -> SiteResult<Self> {
        let wires: Vec<LocationWire> = parse_yaml_document("locations", yaml_text)?;

        let locations = wires
            .into_iter()
            .map(|w| -> SiteResult<LocationRecord> {
                let slug = match w.slug {
                    Some(slug) => slug,
                    None => location_slug(w.city.as_str())?,
                };
                if RESERVED_PATH_SEGMENTS.contains(&slug.as_str()) {
                    return Err(SiteError::DuplicateId {
                        kind: "route",
                        id: slug.to_string(),
                    });
                }
                Ok(LocationRecord {
                    slug,
                    city: w.city,
                    region: w.region,
                    keywords: w.keywords,
                    intro: w.intro,
                    services: w.services,
                    faqs: w.faqs,
                    nearby: w.nearby,
                })
            })
            .collect::<SiteResult<Vec<_>>>()?;

        ensure_unique("location", locations.iter().map(|l| l.slug.as_str()))?;
        tracing::debug!(count = locations.len(), "loaded locations");
        Ok(Self { locations })
    }

    pub fn locations(&self) -> &[LocationRecord] {
        &self.locations
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&LocationRecord> {
        self.locations.iter().find(|l| l.slug.as_str() == slug)
    }

    /// Landing page for a city name, if the site has one.
    pub fn find_by_city(&self, city: &str) -> Option<&LocationRecord> {
        self.locations
            .iter()
            .find(|l| l.city.as_str().eq_ignore_ascii_case(city.trim()))
    }
}
