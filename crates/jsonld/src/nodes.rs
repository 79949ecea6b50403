//! Typed schema.org nodes.
//!
//! Top-level nodes get their `@type` from the [`SchemaObject`](crate::SchemaObject) tag.
//! Nested nodes (list items, questions, addresses) carry their own `@type` field, fixed at
//! construction.

use chrono::NaiveDate;
use serde::Serialize;

// ============================================================================
// Nested nodes
// ============================================================================

/// One step of a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    kind: &'static str,
    /// 1-based position in the trail.
    pub position: usize,
    pub name: String,
    pub item: String,
}

impl ListItem {
    pub fn new(position: usize, name: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            kind: "ListItem",
            position,
            name: name.into(),
            item: item.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer,
}

impl Question {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            kind: "Question",
            name: question.into(),
            accepted_answer: Answer {
                kind: "Answer",
                text: answer.into(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "streetAddress")]
    pub street_address: String,
    #[serde(rename = "addressLocality")]
    pub address_locality: String,
    #[serde(rename = "addressRegion")]
    pub address_region: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    #[serde(rename = "addressCountry")]
    pub address_country: String,
}

impl PostalAddress {
    pub fn new(
        street_address: impl Into<String>,
        address_locality: impl Into<String>,
        address_region: impl Into<String>,
        postal_code: impl Into<String>,
        address_country: impl Into<String>,
    ) -> Self {
        Self {
            kind: "PostalAddress",
            street_address: street_address.into(),
            address_locality: address_locality.into(),
            address_region: address_region.into(),
            postal_code: postal_code.into(),
            address_country: address_country.into(),
        }
    }
}

/// Author or publisher reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    pub url: String,
}

impl Organization {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: "Organization",
            name: name.into(),
            url: url.into(),
        }
    }
}

// ============================================================================
// Top-level nodes
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FaqPage {
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<Question>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocalBusiness {
    pub name: String,
    pub description: String,
    pub url: String,
    pub telephone: String,
    pub email: String,
    pub address: PostalAddress,
    #[serde(rename = "priceRange")]
    pub price_range: String,
    #[serde(rename = "openingHours", skip_serializing_if = "Vec::is_empty")]
    pub opening_hours: Vec<String>,
    #[serde(rename = "areaServed", skip_serializing_if = "Vec::is_empty")]
    pub area_served: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WebPage {
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceNode {
    pub name: String,
    pub description: String,
    #[serde(rename = "serviceType")]
    pub service_type: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArticleNode {
    pub headline: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "datePublished", skip_serializing_if = "Option::is_none")]
    pub date_published: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub author: Organization,
    pub publisher: Organization,
}
