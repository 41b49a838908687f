//! Search engine helpers for the showcase site.
//!
//! - [`metadata`] - `<head>` metadata for a page
//! - [`json_ld`] - schema.org structured data
//! - [`sitemap`] - XML sitemap generation
//! - [`robots`] - robots.txt generation

pub mod json_ld;
pub mod metadata;
pub mod robots;
pub mod sitemap;

pub use json_ld::JsonLd;
pub use metadata::{MetaImage, PageMetadata, RobotsDirectives, build_canonical_url};
pub use robots::{Robots, RobotsRule};
pub use sitemap::{
    ChangeFrequency, Sitemap, SitemapConfig, SitemapEntry, SitemapError, SitemapRoute,
};
