use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use strum::{AsRefStr, Display};

const CONTEXT: &str = "https://schema.org";

/// A schema.org document, ready to be embedded in a page.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonLd(Map<String, Value>);

impl JsonLd {
    fn new(kind: &str) -> Self {
        let mut map = Map::new();
        map.insert("@context".to_owned(), CONTEXT.into());
        map.insert("@type".to_owned(), kind.into());

        Self(map)
    }

    fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    fn with_opt(self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    pub fn kind(&self) -> Option<&str> {
        self.0.get("@type").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Merges several schemas into one `@graph` document.
    pub fn combine(schemas: impl IntoIterator<Item = JsonLd>) -> Self {
        let graph = schemas
            .into_iter()
            .map(|JsonLd(mut map)| {
                map.remove("@context");
                Value::Object(map)
            })
            .collect::<Vec<_>>();

        let mut map = Map::new();
        map.insert("@context".to_owned(), CONTEXT.into());
        map.insert("@graph".to_owned(), Value::Array(graph));

        Self(map)
    }

    /// Serialized body for a `<script type="application/ld+json">` tag.
    /// `<` is escaped so that user text cannot close the script element.
    pub fn script_body(&self) -> String {
        Value::Object(self.0.clone())
            .to_string()
            .replace('<', "\\u003c")
    }

    pub fn script_tag(&self) -> String {
        format!(
            r#"<script type="application/ld+json">{}</script>"#,
            self.script_body()
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Organization {
    pub name: String,
    pub url: String,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub contact_point: Option<ContactPoint>,
    pub same_as: Vec<String>,
    pub address: Option<PostalAddress>,
}

#[derive(Debug, Clone, Default)]
pub struct WebSite {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    /// `(query parameter name, url template)` for the sitelinks search box.
    pub search: Option<(String, String)>,
}

#[derive(Debug, Clone, Default)]
pub struct WebPage {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub is_part_of: Option<String>,
    pub date_published: Option<String>,
    pub date_modified: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

#[derive(Display, AsRefStr, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Availability {
    #[default]
    InStock,
    OutOfStock,
    PreOrder,
}

#[derive(Debug, Clone, Default)]
pub struct Offer {
    pub name: String,
    pub description: String,
    pub price: String,
    pub price_currency: String,
    pub availability: Availability,
}

fn object(value: impl Serialize, kind: &str) -> Value {
    let mut value = serde_json::to_value(value).unwrap_or_else(|_| json!({}));
    if let Value::Object(map) = &mut value {
        map.insert("@type".to_owned(), kind.into());
    }

    value
}

fn availability_url(availability: Availability) -> String {
    format!("{CONTEXT}/{availability}")
}

/// Company identity, used for the knowledge panel.
pub fn organization(org: Organization) -> JsonLd {
    let same_as = (!org.same_as.is_empty()).then_some(org.same_as);

    JsonLd::new("Organization")
        .with("name", org.name)
        .with("url", org.url)
        .with_opt("logo", org.logo)
        .with_opt("description", org.description)
        .with_opt(
            "contactPoint",
            org.contact_point.map(|c| object(c, "ContactPoint")),
        )
        .with_opt("sameAs", same_as)
        .with_opt("address", org.address.map(|a| object(a, "PostalAddress")))
}

pub fn website(site: WebSite) -> JsonLd {
    JsonLd::new("WebSite")
        .with("name", site.name)
        .with("url", site.url)
        .with_opt("description", site.description)
        .with_opt(
            "potentialAction",
            site.search.map(|(query, target)| {
                json!({
                    "@type": "SearchAction",
                    "target": { "@type": "EntryPoint", "urlTemplate": target },
                    "query-input": format!("required name={query}"),
                })
            }),
        )
}

pub fn web_page(page: WebPage) -> JsonLd {
    JsonLd::new("WebPage")
        .with("name", page.name)
        .with("url", page.url)
        .with_opt("description", page.description)
        .with_opt(
            "isPartOf",
            page.is_part_of
                .map(|id| json!({ "@type": "WebSite", "@id": id })),
        )
        .with_opt("datePublished", page.date_published)
        .with_opt("dateModified", page.date_modified)
}

pub fn breadcrumb(items: &[Breadcrumb]) -> JsonLd {
    let elements = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": item.url,
            })
        })
        .collect::<Vec<_>>();

    JsonLd::new("BreadcrumbList").with("itemListElement", elements)
}

pub fn service(
    name: &str,
    description: &str,
    provider_name: &str,
    service_type: Option<&str>,
) -> JsonLd {
    JsonLd::new("Service")
        .with("name", name)
        .with("description", description)
        .with("provider", json!({ "@type": "Organization", "name": provider_name }))
        .with_opt("serviceType", service_type)
}

pub fn offer(offer: Offer) -> JsonLd {
    JsonLd::new("Offer")
        .with("name", offer.name)
        .with("description", offer.description)
        .with("price", offer.price)
        .with("priceCurrency", offer.price_currency)
        .with("availability", availability_url(offer.availability))
}

/// A product listing several priced plans, for pricing tables.
pub fn product_with_offers(name: &str, description: &str, offers: &[Offer]) -> JsonLd {
    let offers = offers
        .iter()
        .map(|offer| {
            json!({
                "@type": "Offer",
                "name": offer.name,
                "price": offer.price,
                "priceCurrency": offer.price_currency,
                "availability": availability_url(Availability::InStock),
            })
        })
        .collect::<Vec<_>>();

    JsonLd::new("Product")
        .with("name", name)
        .with("description", description)
        .with("offers", offers)
}

pub fn faq<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> JsonLd {
    let questions = entries
        .into_iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": { "@type": "Answer", "text": answer },
            })
        })
        .collect::<Vec<_>>();

    JsonLd::new("FAQPage").with("mainEntity", questions)
}

pub fn about_page(name: &str, description: &str, url: &str, organization_name: &str) -> JsonLd {
    JsonLd::new("AboutPage")
        .with("name", name)
        .with("description", description)
        .with("url", url)
        .with(
            "mainEntity",
            json!({ "@type": "Organization", "name": organization_name }),
        )
}

pub fn contact_page(name: &str, url: &str, organization_name: &str) -> JsonLd {
    JsonLd::new("ContactPage")
        .with("name", name)
        .with("url", url)
        .with(
            "mainEntity",
            json!({ "@type": "Organization", "name": organization_name }),
        )
}
