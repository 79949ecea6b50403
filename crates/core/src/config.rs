//! Site configuration.
//!
//! Configuration is resolved once at process startup and then passed into rendering. Nothing in
//! this crate reads environment variables: binaries read `SITE_CONFIG` / `SITE_BASE_URL` and
//! hand the values to [`load_site_config`].

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_EMAIL, DEFAULT_FIRM_DESCRIPTION, DEFAULT_FIRM_NAME,
    DEFAULT_OG_IMAGE, DEFAULT_PHONE_DISPLAY,
};
use crate::head::canonical_url;
use crate::{SiteError, SiteResult};
use jsonld::BusinessInfo;
use serde::Deserialize;
use site_types::NonEmptyText;
use std::path::Path;

/// Ambient site details consumed by the schema builders and page copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    base_url: String,
    firm_name: String,
    firm_description: String,
    phone_display: String,
    email: String,
    street: String,
    locality: String,
    region: String,
    postal_code: String,
    country: String,
    default_og_image: Option<String>,
    price_range: String,
    opening_hours: Vec<String>,
}

/// On-disk overrides. Every key is optional; missing keys keep the compiled-in default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SiteConfigFile {
    base_url: Option<String>,
    firm_name: Option<String>,
    firm_description: Option<String>,
    phone_display: Option<String>,
    email: Option<String>,
    street: Option<String>,
    locality: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
    default_og_image: Option<String>,
    price_range: Option<String>,
    opening_hours: Option<Vec<String>>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            firm_name: DEFAULT_FIRM_NAME.into(),
            firm_description: DEFAULT_FIRM_DESCRIPTION.into(),
            phone_display: DEFAULT_PHONE_DISPLAY.into(),
            email: DEFAULT_EMAIL.into(),
            street: "1350 East Ninth Street, Suite 200".into(),
            locality: "Chico".into(),
            region: "CA".into(),
            postal_code: "95928".into(),
            country: "US".into(),
            default_og_image: Some(DEFAULT_OG_IMAGE.into()),
            price_range: "$$".into(),
            opening_hours: vec!["Mo-Fr 08:00-18:00".into()],
        }
    }
}

impl SiteConfig {
    /// Parse YAML overrides on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::ConfigDeserialization` for malformed YAML or unknown keys, and
    /// `SiteError::InvalidInput` when the resulting base URL or firm name is unusable.
    pub fn from_yaml(yaml_text: &str) -> SiteResult<Self> {
        let file: SiteConfigFile =
            serde_yaml::from_str(yaml_text).map_err(SiteError::ConfigDeserialization)?;
        let mut cfg = Self::default();

        if let Some(base_url) = file.base_url {
            cfg = cfg.with_base_url(base_url)?;
        }
        if let Some(name) = file.firm_name {
            cfg.firm_name = NonEmptyText::new(name)
                .map_err(|_| SiteError::InvalidInput("firm_name cannot be empty".into()))?
                .to_string();
        }
        if let Some(v) = file.firm_description {
            cfg.firm_description = v;
        }
        if let Some(v) = file.phone_display {
            if !v.bytes().any(|b| b.is_ascii_digit()) {
                return Err(SiteError::InvalidInput(format!(
                    "phone_display has no digits: {v}"
                )));
            }
            cfg.phone_display = v;
        }
        if let Some(v) = file.email {
            cfg.email = v;
        }
        if let Some(v) = file.street {
            cfg.street = v;
        }
        if let Some(v) = file.locality {
            cfg.locality = v;
        }
        if let Some(v) = file.region {
            cfg.region = v;
        }
        if let Some(v) = file.postal_code {
            cfg.postal_code = v;
        }
        if let Some(v) = file.country {
            cfg.country = v;
        }
        if let Some(v) = file.default_og_image {
            cfg.default_og_image = Some(v).filter(|s| !s.trim().is_empty());
        }
        if let Some(v) = file.price_range {
            cfg.price_range = v;
        }
        if let Some(v) = file.opening_hours {
            cfg.opening_hours = v;
        }

        Ok(cfg)
    }

    /// Replace the base URL. A trailing `/` is dropped.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> SiteResult<Self> {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match host {
            Some(h) if !h.is_empty() && !h.contains(char::is_whitespace) => {
                self.base_url = trimmed.to_owned();
                Ok(self)
            }
            _ => Err(SiteError::InvalidInput(format!(
                "base_url must be an absolute http(s) URL: {}",
                base_url.as_ref()
            ))),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn firm_name(&self) -> &str {
        &self.firm_name
    }

    pub fn firm_description(&self) -> &str {
        &self.firm_description
    }

    pub fn phone_display(&self) -> &str {
        &self.phone_display
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn default_og_image(&self) -> Option<&str> {
        self.default_og_image.as_deref()
    }

    /// Absolute URL for a site-relative path.
    pub fn url_for(&self, path: &str) -> String {
        canonical_url(&self.base_url, path)
    }

    /// Firm details in the shape the schema builders take.
    pub fn business_info(&self, area_served: Vec<String>) -> BusinessInfo {
        BusinessInfo {
            name: self.firm_name.clone(),
            description: self.firm_description.clone(),
            url: self.url_for(""),
            telephone: self.phone_display.clone(),
            email: self.email.clone(),
            street: self.street.clone(),
            locality: self.locality.clone(),
            region: self.region.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
            price_range: self.price_range.clone(),
            opening_hours: self.opening_hours.clone(),
            area_served,
            image: self.default_og_image.clone(),
        }
    }
}

/// Resolve the site configuration from an optional YAML file and an optional base URL override.
///
/// The override wins over the file, which wins over the compiled-in defaults.
pub fn load_site_config(
    config_path: Option<&Path>,
    base_url_override: Option<String>,
) -> SiteResult<SiteConfig> {
    let cfg = match config_path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(SiteError::ConfigRead)?;
            tracing::info!("loaded site config from {}", path.display());
            SiteConfig::from_yaml(&text)?
        }
        None => SiteConfig::default(),
    };

    match base_url_override
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    {
        Some(url) => cfg.with_base_url(url),
        None => Ok(cfg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_usable() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.url_for("news"), format!("{DEFAULT_BASE_URL}/news"));
    }

    #[test]
    fn yaml_overrides_selected_keys() {
        let cfg = SiteConfig::from_yaml(
            "base_url: https://staging.example.test/\nfirm_name: Staging Firm\n",
        )
        .unwrap();

        assert_eq!(cfg.base_url(), "https://staging.example.test");
        assert_eq!(cfg.firm_name(), "Staging Firm");
        assert_eq!(cfg.phone_display(), DEFAULT_PHONE_DISPLAY);
    }

    #[test]
    fn yaml_rejects_unknown_keys() {
        let err = SiteConfig::from_yaml("colour: blue\n").unwrap_err();
        assert!(matches!(err, SiteError::ConfigDeserialization(_)));
    }

    #[test]
    fn yaml_rejects_blank_firm_name() {
        let err = SiteConfig::from_yaml("firm_name: '  '\n").unwrap_err();
        assert!(matches!(err, SiteError::InvalidInput(_)));
    }

    #[test]
    fn empty_og_image_disables_default() {
        let cfg = SiteConfig::from_yaml("default_og_image: ''\n").unwrap();
        assert_eq!(cfg.default_og_image(), None);
    }

    #[test]
    fn base_url_must_be_http() {
        assert!(SiteConfig::default().with_base_url("ftp://x").is_err());
        assert!(SiteConfig::default().with_base_url("https://").is_err());
        assert!(SiteConfig::default()
            .with_base_url("http://localhost:3000")
            .is_ok());
    }

    #[test]
    fn override_beats_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: https://file.example.test").unwrap();

        let cfg = load_site_config(
            Some(file.path()),
            Some("https://override.example.test".into()),
        )
        .unwrap();
        assert_eq!(cfg.base_url(), "https://override.example.test");

        let cfg = load_site_config(Some(file.path()), Some("  ".into())).unwrap();
        assert_eq!(cfg.base_url(), "https://file.example.test");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = load_site_config(Some(Path::new("/nonexistent/site.yaml")), None).unwrap_err();
        assert!(matches!(err, SiteError::ConfigRead(_)));
    }

    #[test]
    fn business_info_uses_base_url() {
        let cfg = SiteConfig::default()
            .with_base_url("https://example.test")
            .unwrap();
        let info = cfg.business_info(vec!["Chico".into()]);
        assert_eq!(info.url, "https://example.test/");
        assert_eq!(info.area_served, vec!["Chico".to_string()]);
    }
}
