//! Per-page search metadata: title, description, canonical URL, Open
//! Graph and Twitter Card values, and JSON-LD structured data.

use serde_json::{Value, json};
use tracing::debug;

use crate::dom::{Document, Element, Slot};
use crate::models::{Course, SiteConfig};
use crate::render::course_url;

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq)]
pub struct JsonLdBlock {
    pub id: Option<String>,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeoBundle {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub image: String,
    pub site_name: String,
    pub json_ld: Vec<JsonLdBlock>,
}

impl SeoBundle {
    fn new(site: &SiteConfig, title: String, description: String, path: &str) -> Self {
        let base = site.base_url();
        Self {
            title,
            description,
            canonical: format!("{}{}", base, path),
            image: format!("{}{}", base, site.meta.og_image),
            site_name: site.brand_name.clone(),
            json_ld: Vec::new(),
        }
    }

    fn with_block(mut self, value: Value) -> Self {
        self.json_ld.push(JsonLdBlock { id: None, value });
        self
    }
}

fn organization(site: &SiteConfig) -> Value {
    let base = site.base_url();
    json!({
        "@type": "Organization",
        "@id": format!("{}/#organization", base),
        "name": site.brand_name,
        "url": base,
        "logo": format!("{}/assets/img/fav180.png", base),
        "foundingDate": site.meta.founding_year,
        "contactPoint": {
            "@type": "ContactPoint",
            "contactType": "customer support",
            "email": site.meta.support_email,
            "telephone": format!("+{}", site.whatsapp_number),
            "availableLanguage": "English"
        }
    })
}

fn breadcrumbs(trail: &[(&str, String)]) -> Value {
    let items: Vec<Value> = trail
        .iter()
        .enumerate()
        .map(|(i, (name, url))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": url
            })
        })
        .collect();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items
    })
}

fn web_page(bundle: &SeoBundle, site: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebPage",
        "name": bundle.title,
        "description": bundle.description,
        "url": bundle.canonical,
        "inLanguage": "en",
        "isPartOf": { "@id": format!("{}/#website", site.base_url()) },
        "publisher": { "@id": format!("{}/#organization", site.base_url()) }
    })
}

pub fn home(site: &SiteConfig) -> SeoBundle {
    let base = site.base_url();
    let bundle = SeoBundle::new(
        site,
        format!("{} — {}", site.brand_name, site.meta.tagline),
        site.meta.description.clone(),
        "/",
    );
    bundle.with_block(json!({
        "@context": SCHEMA_CONTEXT,
        "@graph": [
            {
                "@type": "WebSite",
                "@id": format!("{}/#website", base),
                "name": site.brand_name,
                "url": base,
                "description": site.meta.description,
                "potentialAction": {
                    "@type": "SearchAction",
                    "target": {
                        "@type": "EntryPoint",
                        "urlTemplate": format!("{}/course/?search={{search_term_string}}", base)
                    },
                    "query-input": "required name=search_term_string"
                }
            },
            organization(site)
        ]
    }))
}

pub fn catalog(site: &SiteConfig, category: Option<&str>) -> SeoBundle {
    let (title, path) = match category {
        Some(category) => (
            format!("{} Courses — {}", category, site.brand_name),
            format!("/course/?category={}", urlencoding::encode(category)),
        ),
        None => (format!("All Courses — {}", site.brand_name), "/course/".to_string()),
    };
    let bundle = SeoBundle::new(site, title, site.meta.description_short.clone(), &path);
    let base = site.base_url();
    let page = web_page(&bundle, site);
    let crumbs = breadcrumbs(&[
        ("Home", format!("{}/", base)),
        ("Courses", format!("{}/course/", base)),
    ]);
    bundle.with_block(page).with_block(crumbs)
}

pub fn course(site: &SiteConfig, course: &Course) -> SeoBundle {
    let base = site.base_url();
    let mut bundle = SeoBundle::new(
        site,
        format!("{} — {}", course.title, site.brand_name),
        format!("{} {}", course.description, site.meta.description_short),
        &course_url(course.id),
    );
    bundle.image = format!("{}/assets/img/{}", base, course.image);

    let mut blocks = vec![
        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Course",
            "name": course.title,
            "description": course.description,
            "url": bundle.canonical,
            "provider": {
                "@type": "Organization",
                "name": site.brand_name,
                "url": base
            },
            "instructor": {
                "@type": "Person",
                "name": course.instructor
            },
            "educationalLevel": course.level,
            "inLanguage": "en",
            "offers": {
                "@type": "Offer",
                "price": format!("{:.2}", course.price),
                "priceCurrency": site.currency,
                "availability": "https://schema.org/InStock"
            }
        }),
        breadcrumbs(&[
            ("Home", format!("{}/", base)),
            ("Courses", format!("{}/course/", base)),
            (course.title.as_str(), bundle.canonical.clone()),
        ]),
    ];

    if !course.faq.is_empty() {
        let questions: Vec<Value> = course
            .faq
            .iter()
            .map(|item| {
                json!({
                    "@type": "Question",
                    "name": item.question,
                    "acceptedAnswer": { "@type": "Answer", "text": item.answer }
                })
            })
            .collect();
        blocks.push(json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "FAQPage",
            "mainEntity": questions
        }));
    }

    bundle.json_ld = blocks
        .into_iter()
        .enumerate()
        .map(|(i, value)| JsonLdBlock {
            id: Some(format!("jsonld-details-{}", i)),
            value,
        })
        .collect();
    bundle
}

pub fn course_not_found(site: &SiteConfig) -> SeoBundle {
    SeoBundle::new(
        site,
        format!("Course Not Found — {}", site.brand_name),
        site.meta.description_short.clone(),
        "/course/",
    )
}

pub fn about(site: &SiteConfig) -> SeoBundle {
    let base = site.base_url();
    let bundle = SeoBundle::new(
        site,
        format!("About Us — {}", site.brand_name),
        site.meta.description.clone(),
        "/about.html",
    );
    let mut page = web_page(&bundle, site);
    page["@type"] = json!("AboutPage");
    let mut org = organization(site);
    org["@context"] = json!(SCHEMA_CONTEXT);
    let crumbs = breadcrumbs(&[("Home", format!("{}/", base)), ("About", bundle.canonical.clone())]);
    bundle.with_block(page).with_block(org).with_block(crumbs)
}

fn legal(site: &SiteConfig, name: &str, path: &str) -> SeoBundle {
    let base = site.base_url();
    let bundle = SeoBundle::new(
        site,
        format!("{} — {}", name, site.brand_name),
        site.meta.description_short.clone(),
        path,
    );
    let page = web_page(&bundle, site);
    let crumbs = breadcrumbs(&[("Home", format!("{}/", base)), (name, bundle.canonical.clone())]);
    bundle.with_block(page).with_block(crumbs)
}

pub fn privacy(site: &SiteConfig) -> SeoBundle {
    legal(site, "Privacy Policy", "/legal/privacy.html")
}

pub fn terms(site: &SiteConfig) -> SeoBundle {
    legal(site, "Terms of Service", "/legal/terms.html")
}

/// Writes the bundle into the document's placeholder tags and appends one
/// `<script type="application/ld+json">` per block. Call once per page:
/// the script append is additive.
pub fn inject(doc: &mut Document, bundle: &SeoBundle) {
    doc.title = bundle.title.clone();

    doc.set_attr(Slot::PageDesc, "content", bundle.description.as_str());
    doc.set_attr(Slot::Canonical, "href", bundle.canonical.as_str());
    doc.set_attr(Slot::Hreflang, "href", bundle.canonical.as_str());

    let og = [
        (Slot::OgUrl, &bundle.canonical),
        (Slot::OgTitle, &bundle.title),
        (Slot::OgDesc, &bundle.description),
        (Slot::OgImage, &bundle.image),
        (Slot::OgSiteName, &bundle.site_name),
        (Slot::TwTitle, &bundle.title),
        (Slot::TwDesc, &bundle.description),
        (Slot::TwImage, &bundle.image),
    ];
    for (slot, value) in og {
        doc.set_attr(slot, "content", value.as_str());
    }

    for block in &bundle.json_ld {
        let mut script = Element::new("script").attr("type", "application/ld+json");
        if let Some(id) = &block.id {
            script = script.id(id);
        }
        doc.append_head(script.text(block.value.to_string()));
    }
}

/// Adds an `aggregateRating` to the injected Course block. Leaves the
/// block untouched when it is missing or does not hold a JSON object.
pub fn patch_aggregate_rating(doc: &mut Document, average: f64, count: u64) -> bool {
    let Some(script) = doc.slot_mut(Slot::CourseJsonLd) else {
        return false;
    };
    let mut schema: Value = match serde_json::from_str(&script.text_content()) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "course schema is not valid JSON, leaving it intact");
            return false;
        }
    };
    let Some(object) = schema.as_object_mut() else {
        return false;
    };
    object.insert(
        "aggregateRating".to_string(),
        json!({
            "@type": "AggregateRating",
            "ratingValue": format!("{:.1}", average),
            "bestRating": "5",
            "ratingCount": count.to_string()
        }),
    );
    script.set_text(schema.to_string());
    true
}
