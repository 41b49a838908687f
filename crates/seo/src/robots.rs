use std::fmt;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RobotsRule {
    pub user_agents: Vec<String>,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
    pub crawl_delay: Option<f32>,
}

impl RobotsRule {
    pub fn for_agent(agent: impl Into<String>) -> Self {
        Self {
            user_agents: vec![agent.into()],
            ..Default::default()
        }
    }

    pub fn allow(mut self, path: impl Into<String>) -> Self {
        self.allow.push(path.into());
        self
    }

    pub fn disallow(mut self, path: impl Into<String>) -> Self {
        self.disallow.push(path.into());
        self
    }
}

/// Content of `/robots.txt`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Robots {
    pub rules: Vec<RobotsRule>,
    pub sitemaps: Vec<String>,
    pub host: Option<String>,
}

impl Robots {
    /// Public site: every crawler allowed, sitemap advertised.
    pub fn standard_showcase(base_url: &str) -> Self {
        Self {
            rules: vec![RobotsRule::for_agent("*").allow("/")],
            sitemaps: vec![format!("{base_url}/sitemap.xml")],
            host: None,
        }
    }

    /// Non-production deployments must stay out of search indexes.
    pub fn development() -> Self {
        Self {
            rules: vec![RobotsRule::for_agent("*").disallow("/")],
            ..Default::default()
        }
    }

    pub fn advanced(
        base_url: &str,
        allow: Vec<String>,
        disallow: Vec<String>,
        extra_rules: Vec<RobotsRule>,
    ) -> Self {
        let allow = if allow.is_empty() {
            vec!["/".to_owned()]
        } else {
            allow
        };

        let mut rules = vec![RobotsRule {
            user_agents: vec!["*".to_owned()],
            allow,
            disallow,
            crawl_delay: None,
        }];
        rules.extend(extra_rules);

        Self {
            rules,
            sitemaps: vec![format!("{base_url}/sitemap.xml")],
            host: Some(base_url.to_owned()),
        }
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Robots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for agent in &rule.user_agents {
                writeln!(f, "User-Agent: {agent}")?;
            }
            for path in &rule.allow {
                writeln!(f, "Allow: {path}")?;
            }
            for path in &rule.disallow {
                writeln!(f, "Disallow: {path}")?;
            }
            if let Some(delay) = rule.crawl_delay {
                writeln!(f, "Crawl-delay: {delay}")?;
            }
        }

        if let Some(host) = &self.host {
            write!(f, "\nHost: {host}\n")?;
        }

        if !self.sitemaps.is_empty() {
            writeln!(f)?;
            for sitemap in &self.sitemaps {
                writeln!(f, "Sitemap: {sitemap}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_showcase() {
        let text = Robots::standard_showcase("https://example.com").to_text();

        assert_eq!(
            text,
            "User-Agent: *\nAllow: /\n\nSitemap: https://example.com/sitemap.xml\n"
        );
    }

    #[test]
    fn test_development_disallows_everything() {
        let robots = Robots::development();

        assert_eq!(robots.to_text(), "User-Agent: *\nDisallow: /\n");
        assert!(robots.sitemaps.is_empty());
    }

    #[test]
    fn test_advanced_with_extra_rules() {
        let robots = Robots::advanced(
            "https://example.com",
            vec![],
            vec!["/api".to_owned()],
            vec![RobotsRule {
                crawl_delay: Some(10.0),
                ..RobotsRule::for_agent("Bingbot").disallow("/static")
            }],
        );
        let text = robots.to_text();

        assert!(text.starts_with("User-Agent: *\nAllow: /\nDisallow: /api\n"));
        assert!(text.contains("User-Agent: Bingbot\nDisallow: /static\nCrawl-delay: 10\n"));
        assert!(text.contains("Host: https://example.com\n"));
        assert!(text.ends_with("Sitemap: https://example.com/sitemap.xml\n"));
    }
}
