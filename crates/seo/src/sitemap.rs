use askama::Template;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    #[error("invalid last modification date: {0}")]
    Date(#[from] time::error::Format),

    #[error(transparent)]
    Render(#[from] askama::Error),
}

#[derive(
    Display, AsRefStr, EnumString, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

#[derive(Debug, Clone)]
pub struct SitemapConfig {
    pub base_url: String,
    pub default_change_frequency: ChangeFrequency,
    pub default_priority: f32,
}

impl SitemapConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_change_frequency: ChangeFrequency::Monthly,
            default_priority: 0.5,
        }
    }
}

/// A page to list, with per-route overrides of the config defaults.
#[derive(Debug, Clone, Default)]
pub struct SitemapRoute {
    pub path: String,
    pub last_modified: Option<OffsetDateTime>,
    pub change_frequency: Option<ChangeFrequency>,
    pub priority: Option<f32>,
}

impl SitemapRoute {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: OffsetDateTime,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sitemap {
    pub entries: Vec<SitemapEntry>,
}

impl Sitemap {
    pub fn generate(config: &SitemapConfig, routes: &[SitemapRoute]) -> Self {
        Self::generate_at(config, routes, OffsetDateTime::now_utc())
    }

    /// Same as [`Sitemap::generate`] with `now` used for undated routes.
    pub fn generate_at(config: &SitemapConfig, routes: &[SitemapRoute], now: OffsetDateTime) -> Self {
        let entries = routes
            .iter()
            .map(|route| SitemapEntry {
                url: format!("{}{}", config.base_url, route.path),
                last_modified: route.last_modified.unwrap_or(now),
                change_frequency: route
                    .change_frequency
                    .unwrap_or(config.default_change_frequency),
                priority: route.priority.unwrap_or(config.default_priority),
            })
            .collect();

        Self { entries }
    }

    /// Renders the `urlset` document. Locations are XML-escaped.
    pub fn to_xml(&self) -> Result<String, SitemapError> {
        let urls = self
            .entries
            .iter()
            .map(|entry| {
                Ok(UrlRow {
                    loc: &entry.url,
                    lastmod: entry.last_modified.format(&Rfc3339)?,
                    change_frequency: entry.change_frequency,
                    priority: format!("{:.1}", entry.priority),
                })
            })
            .collect::<Result<Vec<_>, SitemapError>>()?;

        Ok(SitemapTemplate { urls }.render()?)
    }
}

struct UrlRow<'a> {
    loc: &'a str,
    lastmod: String,
    change_frequency: ChangeFrequency,
    priority: String,
}

#[derive(Template)]
#[template(path = "sitemap.xml")]
struct SitemapTemplate<'a> {
    urls: Vec<UrlRow<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_defaults_apply_to_unset_fields() {
        let now = datetime!(2026-10-18 12:00 UTC);
        let sitemap = Sitemap::generate_at(
            &SitemapConfig::new("https://example.com"),
            &[
                SitemapRoute {
                    priority: Some(1.0),
                    change_frequency: Some(ChangeFrequency::Weekly),
                    ..SitemapRoute::new("/")
                },
                SitemapRoute::new("/mentions-legales"),
            ],
            now,
        );

        assert_eq!(sitemap.entries[0].url, "https://example.com/");
        assert_eq!(sitemap.entries[0].change_frequency, ChangeFrequency::Weekly);
        assert_eq!(sitemap.entries[1].change_frequency, ChangeFrequency::Monthly);
        assert_eq!(sitemap.entries[1].priority, 0.5);
        assert_eq!(sitemap.entries[1].last_modified, now);
    }

    #[test]
    fn test_priority_zero_is_kept() {
        let sitemap = Sitemap::generate(
            &SitemapConfig::new("https://example.com"),
            &[SitemapRoute {
                priority: Some(0.0),
                ..SitemapRoute::new("/")
            }],
        );

        assert_eq!(sitemap.entries[0].priority, 0.0);
    }

    #[test]
    fn test_xml_rendering_escapes_locations() {
        let sitemap = Sitemap::generate_at(
            &SitemapConfig::new("https://example.com"),
            &[SitemapRoute::new("/?a=1&b=<2>")],
            datetime!(2026-10-18 12:00 UTC),
        );
        let xml = sitemap.to_xml().unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=&lt;2&gt;</loc>"));
        assert!(xml.contains("<lastmod>2026-10-18T12:00:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.5</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
