//! schema.org structured data for page heads.
//!
//! This crate provides **typed JSON-LD nodes** and the builders that assemble them from narrow
//! inputs. Pages never hand-build JSON objects: every `@type` the site emits is a variant of
//! [`SchemaObject`], so a misspelt property is a compile error rather than silently ignored
//! markup.
//!
//! Serialisation adds the `@context` envelope. The HTML side (the `<script>` tag itself) lives in
//! `site-core`.

pub mod builders;
pub mod nodes;

pub use builders::{
    article_schema, breadcrumb_schema, faq_schema, local_business_schema, service_schema,
    web_page_schema, ArticleInput, BreadcrumbInput, BusinessInfo, FaqInput, ServiceInput,
    WebPageInput,
};
pub use nodes::{
    Answer, ArticleNode, BreadcrumbList, FaqPage, ListItem, LocalBusiness, Organization,
    PostalAddress, Question, ServiceNode, WebPage,
};

use serde::Serialize;

/// Vocabulary every emitted node belongs to.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Errors returned by the `jsonld` crate.
#[derive(Debug, thiserror::Error)]
pub enum JsonLdError {
    #[error("failed to serialise schema object: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("schema object did not serialise to a JSON object")]
    NotAnObject,
}

/// Type alias for Results that can fail with a [`JsonLdError`].
pub type JsonLdResult<T> = Result<T, JsonLdError>;

/// A top-level structured-data node, tagged by its schema.org `@type`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub enum SchemaObject {
    Article(ArticleNode),
    BreadcrumbList(BreadcrumbList),
    #[serde(rename = "FAQPage")]
    FaqPage(FaqPage),
    LocalBusiness(LocalBusiness),
    WebPage(WebPage),
    Service(ServiceNode),
}

impl SchemaObject {
    /// The schema.org type name this node serialises as.
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaObject::Article(_) => "Article",
            SchemaObject::BreadcrumbList(_) => "BreadcrumbList",
            SchemaObject::FaqPage(_) => "FAQPage",
            SchemaObject::LocalBusiness(_) => "LocalBusiness",
            SchemaObject::WebPage(_) => "WebPage",
            SchemaObject::Service(_) => "Service",
        }
    }

    /// Serialise to a JSON-LD value with the `@context` envelope.
    pub fn to_json_ld(&self) -> JsonLdResult<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        let map = value.as_object_mut().ok_or(JsonLdError::NotAnObject)?;
        map.insert(
            "@context".into(),
            serde_json::Value::String(SCHEMA_CONTEXT.into()),
        );
        Ok(value)
    }

    /// Serialise to text safe for embedding inside a `<script>` element.
    ///
    /// Every `<` is written as the JSON escape `\u003c`, so copy containing `</script>` or `<!--`
    /// can neither close the tag early nor switch the parser into escaped-script states. `<` only
    /// ever occurs inside JSON strings, where both forms decode to the same text.
    pub fn to_script_body(&self) -> JsonLdResult<String> {
        let text = serde_json::to_string(&self.to_json_ld()?)?;
        Ok(text.replace('<', "\\u003c"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> SchemaObject {
        web_page_schema(WebPageInput {
            title: "News".into(),
            description: "Latest customs updates".into(),
            url: "https://example.test/news".into(),
        })
    }

    #[test]
    fn json_ld_carries_context_and_type() {
        let value = sample_page().to_json_ld().unwrap();
        assert_eq!(value["@context"], SCHEMA_CONTEXT);
        assert_eq!(value["@type"], "WebPage");
        assert_eq!(value["name"], "News");
    }

    #[test]
    fn faq_page_type_is_renamed() {
        let value = faq_schema(&[]).to_json_ld().unwrap();
        assert_eq!(value["@type"], "FAQPage");
        assert_eq!(faq_schema(&[]).type_name(), "FAQPage");
    }

    #[test]
    fn script_body_escapes_closing_tags() {
        let node = web_page_schema(WebPageInput {
            title: "</script><b>".into(),
            description: String::new(),
            url: "https://example.test/".into(),
        });
        let body = node.to_script_body().unwrap();
        assert!(!body.contains('<'));
        assert!(body.contains("\\u003c/script>"));

        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["name"], "</script><b>");
    }

    #[test]
    fn script_body_escapes_comment_openers() {
        let node = web_page_schema(WebPageInput {
            title: "Duties".into(),
            description: "<!-- <script> hidden".into(),
            url: "https://example.test/".into(),
        });
        let body = node.to_script_body().unwrap();
        assert!(!body.contains("<!--"));
        assert!(!body.contains("<script"));

        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["description"], "<!-- <script> hidden");
    }
}
