use axum::{extract::State, response::IntoResponse};
use webpro_seo::{
    JsonLd, MetaImage, PageMetadata, build_canonical_url,
    json_ld::{self, ContactPoint, Offer, Organization, WebSite},
};

use crate::{
    content::{Content, PageContent},
    routes::AppState,
    template::Layout,
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub layout: Layout<'a>,
    pub page: &'a PageContent,
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

pub async fn page(State(app): State<AppState>) -> impl IntoResponse {
    let base_url = app.config.site.base_url();
    let content = &app.content;

    let mut layout = Layout::new(metadata(content, base_url), &content.header, &content.footer);
    layout.json_ld = Some(structured_data(content, base_url).script_body());

    crate::template::render(&IndexTemplate {
        layout,
        page: &content.page,
    })
}

fn metadata(content: &Content, base_url: &str) -> PageMetadata {
    let seo = &content.seo;
    let metadata = PageMetadata::new(&seo.title, &seo.description)
        .canonical(build_canonical_url(base_url, "/"));

    if seo.image.is_empty() {
        return metadata;
    }

    metadata.image(MetaImage {
        url: build_canonical_url(base_url, &seo.image),
        width: Some(1200),
        height: Some(630),
        alt: Some(seo.image_alt.to_owned()),
    })
}

fn structured_data(content: &Content, base_url: &str) -> JsonLd {
    let pricing = &content.page.pricing;

    JsonLd::combine([
        json_ld::organization(Organization {
            name: content.header.logo_alt.to_owned(),
            url: base_url.to_owned(),
            logo: Some(build_canonical_url(base_url, &content.header.logo)),
            description: Some(content.footer.description.to_owned()),
            contact_point: Some(ContactPoint {
                telephone: Some(content.footer.contact.phone.to_owned()),
                email: Some(content.footer.contact.email.to_owned()),
                contact_type: Some("customer service".to_owned()),
            }),
            ..Default::default()
        }),
        json_ld::website(WebSite {
            name: content.seo.title.to_owned(),
            url: base_url.to_owned(),
            description: Some(content.seo.description.to_owned()),
            search: None,
        }),
        json_ld::offer(Offer {
            name: pricing.title.to_owned(),
            description: pricing.subtitle.to_owned(),
            price: pricing.price_amount.to_owned(),
            price_currency: "EUR".to_owned(),
            ..Default::default()
        }),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_uses_absolute_urls() {
        let content = Content::load().unwrap();
        let metadata = metadata(&content, "https://webpro.fr");

        assert_eq!(metadata.canonical_url.as_deref(), Some("https://webpro.fr/"));
        assert!(metadata.images[0].url.starts_with("https://webpro.fr/static/"));
        assert_eq!(metadata.twitter_card(), Some("summary_large_image"));
    }

    #[test]
    fn test_structured_data_graph() {
        let content = Content::load().unwrap();
        let value = structured_data(&content, "https://webpro.fr").to_value();
        let kinds = value["@graph"]
            .as_array()
            .unwrap()
            .iter()
            .map(|schema| schema["@type"].as_str().unwrap())
            .collect::<Vec<_>>();

        assert_eq!(kinds, vec!["Organization", "WebSite", "Offer"]);
        assert_eq!(value["@graph"][2]["price"], "800");
    }
}
