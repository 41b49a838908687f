//! Landing page copy, embedded at compile time from `content/content.json`.

use anyhow::{Context, Result};
use serde::Deserialize;

const CONTENT_JSON: &str = include_str!("../content/content.json");

#[derive(Debug, Deserialize, Clone)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub badge: String,
    pub title: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub image: Image,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonContent {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub before_label: String,
    pub after_label: String,
    pub before_title: String,
    pub before_points: Vec<String>,
    pub after_title: String,
    pub after_points: Vec<String>,
    pub before_image: Image,
    pub after_image: Image,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub image_alt: String,
    pub color: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeaturesContent {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Feature>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProcessStep {
    pub number: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProcessContent {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PricingContent {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub price_amount: String,
    pub price_label: String,
    pub included_title: String,
    pub included_items: Vec<String>,
    pub cta_button: String,
    pub guarantee: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FormContent {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub name_label: String,
    pub name_placeholder: String,
    pub email_label: String,
    pub email_placeholder: String,
    pub company_label: String,
    pub company_placeholder: String,
    pub phone_label: String,
    pub phone_placeholder: String,
    pub project_label: String,
    pub project_placeholder: String,
    pub inspiration_label: String,
    pub inspiration_placeholder: String,
    pub colors_label: String,
    pub colors_placeholder: String,
    pub additional_label: String,
    pub additional_placeholder: String,
    pub submit_button: String,
    pub submitting: String,
    pub success_title: String,
    pub success_message: String,
    pub reset_button: String,
    pub error_title: String,
    pub error_message: String,
    pub required_note: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FinalCtaContent {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub cta_button: String,
    pub trust_badges: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub hero: HeroContent,
    pub comparison: ComparisonContent,
    pub features: FeaturesContent,
    pub process: ProcessContent,
    pub pricing: PricingContent,
    pub form: FormContent,
    pub final_cta: FinalCtaContent,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HeaderContent {
    pub logo: String,
    pub logo_alt: String,
    pub nav_items: Vec<NavItem>,
    pub cta_button: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LinkGroup {
    pub title: String,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TextGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FooterContact {
    pub title: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub tagline: String,
    pub description: String,
    pub quick_links: LinkGroup,
    pub services: TextGroup,
    pub contact: FooterContact,
    pub copyright: String,
    pub made_with: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SeoContent {
    pub title: String,
    pub description: String,
    pub image: String,
    pub image_alt: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Content {
    pub page: PageContent,
    pub header: HeaderContent,
    pub footer: FooterContent,
    pub seo: SeoContent,
}

impl Content {
    /// Parses the embedded document. Fails at startup on a malformed file.
    pub fn load() -> Result<Self> {
        Self::from_json(CONTENT_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse landing page content")
    }
}
