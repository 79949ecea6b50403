//! Static site output.
//!
//! Writes every page as `<path>/index.html` under an output directory, plus a `sitemap.xml` of
//! canonical URLs:
//!
//! ```text
//! <out>/
//! ├── index.html
//! ├── news/index.html
//! ├── article/<id>/index.html
//! ├── <city>-customs-attorney/index.html
//! └── sitemap.xml
//! ```

use crate::constants::{INDEX_FILENAME, SITEMAP_FILENAME};
use crate::html::escape_text;
use crate::pages::RenderedPage;
use crate::{Site, SiteError, SiteResult};
use std::fs;
use std::path::{Path, PathBuf};

/// What a build wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub sitemap: PathBuf,
}

/// Render every page of `site` into `out_dir`, creating it if needed.
///
/// # Errors
///
/// Returns `SiteError::OutputDirCreation` / `SiteError::FileWrite` for I/O failures and
/// `SiteError::JsonLd` if a page's structured data cannot be serialised.
pub fn build_site(site: &Site, out_dir: &Path) -> SiteResult<BuildSummary> {
    create_dir(out_dir)?;

    let pages = site.all_pages();
    let mut canonical_urls = Vec::with_capacity(pages.len());

    for page in &pages {
        let rel = page.seo.canonical.as_deref().unwrap_or_default();
        let html = page.to_html(site.config())?;
        let path = write_page(out_dir, rel, &html)?;
        tracing::debug!("wrote {}", path.display());
        canonical_urls.push(site.config().url_for(rel));
    }

    let sitemap = out_dir.join(SITEMAP_FILENAME);
    write_file(&sitemap, &sitemap_xml(&canonical_urls))?;

    tracing::info!(
        pages = pages.len(),
        "built site into {}",
        out_dir.display()
    );
    Ok(BuildSummary {
        pages: pages.len(),
        sitemap,
    })
}

/// `sitemap.xml` listing the given absolute URLs.
pub fn sitemap_xml(urls: &[String]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for url in urls {
        xml.push_str("  <url><loc>");
        xml.push_str(&escape_text(url));
        xml.push_str("</loc></url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Canonical URLs of every page, in build order.
pub fn sitemap_urls(site: &Site) -> Vec<String> {
    site.all_pages()
        .iter()
        .map(|p: &RenderedPage| {
            site.config()
                .url_for(p.seo.canonical.as_deref().unwrap_or_default())
        })
        .collect()
}

fn write_page(out_dir: &Path, rel: &str, html: &str) -> SiteResult<PathBuf> {
    let dir = rel
        .split('/')
        .filter(|s| !s.is_empty())
        .fold(out_dir.to_path_buf(), |acc, seg| acc.join(seg));
    create_dir(&dir)?;

    let path = dir.join(INDEX_FILENAME);
    write_file(&path, html)?;
    Ok(path)
}

fn create_dir(path: &Path) -> SiteResult<()> {
    fs::create_dir_all(path).map_err(|source| SiteError::OutputDirCreation {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> SiteResult<()> {
    fs::write(path, contents).map_err(|source| SiteError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
