use serde::{Deserialize, Serialize};

/// Social preview image. Open Graph works best with 1200x630 PNG files.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MetaImage {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotsDirectives {
    pub index: bool,
    pub follow: bool,
    #[serde(default)]
    pub noarchive: bool,
    #[serde(default)]
    pub nosnippet: bool,
    #[serde(default)]
    pub noimageindex: bool,
}

impl Default for RobotsDirectives {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
            noarchive: false,
            nosnippet: false,
            noimageindex: false,
        }
    }
}

impl RobotsDirectives {
    /// Value of the `<meta name="robots">` tag, e.g. `noindex, follow`.
    pub fn content(&self) -> String {
        let mut parts = vec![
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" },
        ];

        if self.noarchive {
            parts.push("noarchive");
        }
        if self.nosnippet {
            parts.push("nosnippet");
        }
        if self.noimageindex {
            parts.push("noimageindex");
        }

        parts.join(", ")
    }
}

/// Everything a page puts in its `<head>` for search engines and social cards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: Option<String>,
    pub images: Vec<MetaImage>,
    pub robots: Option<RobotsDirectives>,
}

impl PageMetadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn canonical(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    pub fn image(mut self, image: MetaImage) -> Self {
        self.images.push(image);
        self
    }

    pub fn robots(mut self, robots: RobotsDirectives) -> Self {
        self.robots = Some(robots);
        self
    }

    /// Open Graph and Twitter tags are only emitted with at least one image.
    pub fn has_social_card(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn twitter_card(&self) -> Option<&'static str> {
        self.has_social_card().then_some("summary_large_image")
    }

    pub fn robots_content(&self) -> Option<String> {
        self.robots.as_ref().map(RobotsDirectives::content)
    }
}

/// Joins a base URL and a path with exactly one slash between them.
pub fn build_canonical_url(base_url: &str, path: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);

    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_canonical_url() {
        assert_eq!(
            build_canonical_url("https://example.com/", "about"),
            "https://example.com/about"
        );
        assert_eq!(
            build_canonical_url("https://example.com", "/about"),
            "https://example.com/about"
        );
        assert_eq!(build_canonical_url("https://example.com/", "/"), "https://example.com/");
    }

    #[test]
    fn test_social_card_requires_an_image() {
        let metadata = PageMetadata::new("WebPro", "Sites vitrines");
        assert_eq!(metadata.twitter_card(), None);

        let metadata = metadata.image(MetaImage {
            url: "https://example.com/og.png".to_owned(),
            width: Some(1200),
            height: Some(630),
            alt: None,
        });
        assert_eq!(metadata.twitter_card(), Some("summary_large_image"));
    }

    #[test]
    fn test_robots_content() {
        let metadata = PageMetadata::new("WebPro", "Sites vitrines");
        assert_eq!(metadata.robots_content(), None);

        let metadata = metadata.robots(RobotsDirectives {
            index: false,
            noarchive: true,
            ..Default::default()
        });
        assert_eq!(
            metadata.robots_content().as_deref(),
            Some("noindex, follow, noarchive")
        );
    }
}
