//! Builders from page-level inputs to [`SchemaObject`]s.
//!
//! All builders are total: empty input lists produce empty `itemListElement` / `mainEntity`
//! arrays rather than errors.

use crate::nodes::{
    ArticleNode, BreadcrumbList, FaqPage, ListItem, LocalBusiness, Organization, PostalAddress,
    Question, ServiceNode, WebPage,
};
use crate::SchemaObject;
use chrono::NaiveDate;

/// A breadcrumb step as the page knows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbInput {
    pub name: String,
    pub url: String,
}

impl BreadcrumbInput {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebPageInput {
    pub title: String,
    pub description: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    pub service_type: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleInput {
    pub headline: String,
    pub description: String,
    pub url: String,
    pub date_published: Option<NaiveDate>,
    pub keywords: Option<String>,
}

/// Firm details the business and article builders read from site configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusinessInfo {
    pub name: String,
    pub description: String,
    pub url: String,
    pub telephone: String,
    pub email: String,
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub price_range: String,
    pub opening_hours: Vec<String>,
    pub area_served: Vec<String>,
    pub image: Option<String>,
}

/// Build a `BreadcrumbList` with positions `1..=N` in input order.
pub fn breadcrumb_schema(items: &[BreadcrumbInput]) -> SchemaObject {
    let item_list_element = items
        .iter()
        .enumerate()
        .map(|(idx, crumb)| ListItem::new(idx + 1, crumb.name.clone(), crumb.url.clone()))
        .collect();

    SchemaObject::BreadcrumbList(BreadcrumbList { item_list_element })
}

/// Build an `FAQPage` with one `Question`/`acceptedAnswer` pair per entry.
pub fn faq_schema(entries: &[FaqInput]) -> SchemaObject {
    let main_entity = entries
        .iter()
        .map(|e| Question::new(e.question.clone(), e.answer.clone()))
        .collect();

    SchemaObject::FaqPage(FaqPage { main_entity })
}

pub fn local_business_schema(info: &BusinessInfo) -> SchemaObject {
    SchemaObject::LocalBusiness(LocalBusiness {
        name: info.name.clone(),
        description: info.description.clone(),
        url: info.url.clone(),
        telephone: info.telephone.clone(),
        email: info.email.clone(),
        address: PostalAddress::new(
            info.street.clone(),
            info.locality.clone(),
            info.region.clone(),
            info.postal_code.clone(),
            info.country.clone(),
        ),
        price_range: info.price_range.clone(),
        opening_hours: info.opening_hours.clone(),
        area_served: info.area_served.clone(),
        image: info.image.clone(),
    })
}

pub fn web_page_schema(input: WebPageInput) -> SchemaObject {
    SchemaObject::WebPage(WebPage {
        name: input.title,
        description: input.description,
        url: input.url,
    })
}

pub fn service_schema(input: ServiceInput) -> SchemaObject {
    SchemaObject::Service(ServiceNode {
        name: input.name,
        description: input.description,
        service_type: input.service_type,
        url: input.url,
    })
}

/// Build an `Article` node; the firm is both author and publisher.
pub fn article_schema(input: ArticleInput, firm: &BusinessInfo) -> SchemaObject {
    let org = Organization::new(firm.name.clone(), firm.url.clone());
    SchemaObject::Article(ArticleNode {
        headline: input.headline,
        description: input.description,
        url: input.url,
        date_published: input.date_published,
        keywords: input.keywords,
        author: org.clone(),
        publisher: org,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn firm() -> BusinessInfo {
        BusinessInfo {
            name: "Harbor Trade Law".into(),
            description: "Customs and trade counsel".into(),
            url: "https://example.test".into(),
            telephone: "+1-530-555-0100".into(),
            email: "intake@example.test".into(),
            street: "100 Main St".into(),
            locality: "Chico".into(),
            region: "CA".into(),
            postal_code: "95928".into(),
            country: "US".into(),
            price_range: "$$".into(),
            opening_hours: vec!["Mo-Fr 08:00-18:00".into()],
            area_served: vec![],
            image: None,
        }
    }

    #[test]
    fn breadcrumb_positions_follow_input_order() {
        let schema = breadcrumb_schema(&[
            BreadcrumbInput::new("Home", "https://x/"),
            BreadcrumbInput::new("News", "https://x/#news"),
        ]);
        let value = schema.to_json_ld().unwrap();
        let items = value["itemListElement"].as_array().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["name"], "Home");
        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["item"], "https://x/#news");
        assert_eq!(items[1]["@type"], "ListItem");
    }

    #[test]
    fn faq_maps_question_and_answer() {
        let schema = faq_schema(&[FaqInput {
            question: "Q1".into(),
            answer: "A1".into(),
        }]);
        let value = schema.to_json_ld().unwrap();
        let entries = value["mainEntity"].as_array().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["@type"], "Question");
        assert_eq!(entries[0]["name"], "Q1");
        assert_eq!(entries[0]["acceptedAnswer"]["@type"], "Answer");
        assert_eq!(entries[0]["acceptedAnswer"]["text"], "A1");
    }

    #[test]
    fn empty_inputs_yield_empty_lists() {
        let crumbs = breadcrumb_schema(&[]).to_json_ld().unwrap();
        assert_eq!(crumbs["itemListElement"], json!([]));

        let faq = faq_schema(&[]).to_json_ld().unwrap();
        assert_eq!(faq["mainEntity"], json!([]));
    }

    #[test]
    fn local_business_nests_postal_address() {
        let value = local_business_schema(&firm()).to_json_ld().unwrap();

        assert_eq!(value["@type"], "LocalBusiness");
        assert_eq!(value["address"]["@type"], "PostalAddress");
        assert_eq!(value["address"]["addressLocality"], "Chico");
        assert_eq!(value["openingHours"], json!(["Mo-Fr 08:00-18:00"]));
        assert!(value.get("areaServed").is_none());
        assert!(value.get("image").is_none());
    }

    #[test]
    fn service_uses_camel_case_service_type() {
        let value = service_schema(ServiceInput {
            name: "Customs Audits".into(),
            description: "Defence in CBP audits".into(),
            service_type: "Legal Service".into(),
            url: "https://example.test/chico-customs-attorney".into(),
        })
        .to_json_ld()
        .unwrap();

        assert_eq!(value["@type"], "Service");
        assert_eq!(value["serviceType"], "Legal Service");
    }

    #[test]
    fn article_omits_missing_publish_date() {
        let input = ArticleInput {
            headline: "Prior Disclosures".into(),
            description: "When to file".into(),
            url: "https://example.test/#article/prior-disclosure".into(),
            date_published: None,
            keywords: None,
        };
        let value = article_schema(input, &firm()).to_json_ld().unwrap();

        assert!(value.get("datePublished").is_none());
        assert_eq!(value["author"]["@type"], "Organization");
        assert_eq!(value["publisher"]["name"], "Harbor Trade Law");
    }

    #[test]
    fn article_serialises_publish_date_as_iso() {
        let input = ArticleInput {
            headline: "Section 301".into(),
            description: String::new(),
            url: "https://example.test/#article/section-301".into(),
            date_published: NaiveDate::from_ymd_opt(2024, 3, 1),
            keywords: Some("section 301, tariffs".into()),
        };
        let value = article_schema(input, &firm()).to_json_ld().unwrap();

        assert_eq!(value["datePublished"], "2024-03-01");
        assert_eq!(value["keywords"], "section 301, tariffs");
    }
}
