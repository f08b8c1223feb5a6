//! Static HTML shells. Each page starts from one of these and is filled
//! in by its controller through the anchor ids.

use crate::dom::{Document, Element, Slot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Catalog,
    CourseDetails,
    About,
    Privacy,
    Terms,
}

fn slot_id(slot: Slot) -> String {
    slot.id().into_owned()
}

fn meta_name(name: &str, slot: Slot) -> Element {
    Element::new("meta").attr("name", name).id(&slot_id(slot)).attr("content", "")
}

fn meta_property(property: &str, slot: Slot) -> Element {
    Element::new("meta")
        .attr("property", property)
        .id(&slot_id(slot))
        .attr("content", "")
}

fn head() -> Vec<Element> {
    vec![
        meta_name("description", Slot::PageDesc),
        Element::new("link").attr("rel", "canonical").id(&slot_id(Slot::Canonical)).attr("href", ""),
        Element::new("link")
            .attr("rel", "alternate")
            .attr("hreflang", "en")
            .id(&slot_id(Slot::Hreflang))
            .attr("href", ""),
        Element::new("meta").attr("property", "og:type").attr("content", "website"),
        meta_property("og:url", Slot::OgUrl),
        meta_property("og:title", Slot::OgTitle),
        meta_property("og:description", Slot::OgDesc),
        meta_property("og:image", Slot::OgImage),
        meta_property("og:site_name", Slot::OgSiteName),
        Element::new("meta")
            .attr("name", "twitter:card")
            .attr("content", "summary_large_image"),
        meta_name("twitter:title", Slot::TwTitle),
        meta_name("twitter:description", Slot::TwDesc),
        meta_name("twitter:image", Slot::TwImage),
        Element::new("link").attr("rel", "icon").attr("href", "/assets/img/fav180.png"),
        Element::new("link")
            .attr("rel", "stylesheet")
            .attr("href", "/assets/css/style.css"),
    ]
}

fn nav() -> Element {
    Element::new("nav").class("site-nav").child(
        Element::new("div")
            .class("page-container nav-inner")
            .child(
                Element::new("a")
                    .class("navbar-brand")
                    .attr("href", "/")
                    .child(Element::new("span").id(&slot_id(Slot::NavBrand))),
            )
            .child(
                Element::new("ul").class("nav-links").children([
                    Element::new("li").child(Element::new("a").attr("href", "/").text("Home")),
                    Element::new("li").child(Element::new("a").attr("href", "/course/").text("Courses")),
                    Element::new("li").child(Element::new("a").attr("href", "/about.html").text("About")),
                ]),
            ),
    )
}

fn whatsapp_anchor(slot: Slot, label: &str) -> Element {
    Element::new("a")
        .id(&slot_id(slot))
        .attr("href", "#")
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .child(Element::icon("bi bi-whatsapp"))
        .text(format!(" {}", label))
}

fn footer(kind: PageKind) -> Element {
    let mut links = Element::new("div")
        .class("footer-col")
        .child(Element::new("h4").text("Contact"))
        .child(whatsapp_anchor(Slot::FooterWhatsapp, "WhatsApp"));
    if matches!(kind, PageKind::About | PageKind::Privacy | PageKind::Terms) {
        links = links.child(whatsapp_anchor(Slot::FooterWhatsappAlt, "Message us"));
    }

    let mut inner = Element::new("div")
        .class("page-container footer-inner")
        .child(
            Element::new("div")
                .class("footer-col")
                .child(Element::new("span").class("footer-brand").id(&slot_id(Slot::FooterBrand))),
        );
    if kind == PageKind::Home {
        inner = inner.child(
            Element::new("div")
                .class("footer-col")
                .child(Element::new("h4").text("Categories"))
                .child(Element::new("ul").id(&slot_id(Slot::FooterCategories))),
        );
    }
    inner = inner.child(links).child(
        Element::new("ul").class("footer-legal").children([
            Element::new("li").child(Element::new("a").attr("href", "/legal/privacy.html").text("Privacy Policy")),
            Element::new("li").child(Element::new("a").attr("href", "/legal/terms.html").text("Terms of Service")),
        ]),
    );

    Element::new("footer")
        .class("site-footer")
        .child(inner)
        .child(Element::new("p").class("footer-copyright").id(&slot_id(Slot::FooterCopyright)))
}

fn home_main() -> Element {
    Element::new("main")
        .child(
            Element::new("section").class("hero").child(
                Element::new("div")
                    .class("page-container")
                    .child(
                        Element::new("h1")
                            .class("hero-title")
                            .child(Element::new("span").id(&slot_id(Slot::HeroTitleLine1)))
                            .child(Element::new("br"))
                            .child(Element::new("span").class("text-gradient").id(&slot_id(Slot::HeroTitleGradient))),
                    )
                    .child(Element::new("p").class("hero-subtitle").id(&slot_id(Slot::HeroSubtitle)))
                    .child(Element::new("a").class("hero-btn").attr("href", "/course/").text("Browse Courses")),
            ),
        )
        .child(
            Element::new("div")
                .class("stats-bar")
                .id(&slot_id(Slot::StatsBar))
                .attr("role", "list"),
        )
        .child(
            Element::new("section").class("featured").child(
                Element::new("div")
                    .class("page-container")
                    .child(Element::new("h2").class("section-title").text("Featured Courses"))
                    .child(Element::new("div").class("row g-4").id(&slot_id(Slot::FeaturedGrid))),
            ),
        )
        .child(
            Element::new("section").class("categories").child(
                Element::new("div")
                    .class("page-container")
                    .child(Element::new("h2").class("section-title").text("Browse by Category"))
                    .child(Element::new("div").class("row g-3").id(&slot_id(Slot::CategoriesGrid))),
            ),
        )
        .child(
            Element::new("section").class("cta").child(
                Element::new("div")
                    .class("page-container")
                    .child(Element::new("h2").text("Have a question?"))
                    .child(whatsapp_anchor(Slot::CtaWhatsapp, "Chat with us").class("cta-btn")),
            ),
        )
}

fn catalog_main() -> Element {
    Element::new("main").child(
        Element::new("div")
            .class("page-container")
            .child(Element::new("h1").class("page-title").id(&slot_id(Slot::CatalogHeading)))
            .child(Element::new("p").class("catalog-count").id(&slot_id(Slot::CatalogCount)))
            .child(Element::new("div").class("row g-4").id(&slot_id(Slot::CatalogGrid))),
    )
}

fn about_main() -> Element {
    Element::new("main").child(
        Element::new("div")
            .class("page-container about")
            .child(Element::new("h1").class("page-title").text("About Us"))
            .child(Element::new("p").text(
                "We build practical, expert-led courses that you can follow at your own pace, \
                 with lifetime access and a real person to talk to when you get stuck.",
            ))
            .child(Element::new("h2").text("Talk to us"))
            .child(whatsapp_anchor(Slot::ContactWhatsappButton, "Contact us on WhatsApp").class("contact-btn")),
    )
}

fn brand_inline(n: u8) -> Element {
    Element::new("span").id(&slot_id(Slot::BrandInline(n)))
}

fn legal_section(id: &str, title: &str, body: Vec<crate::dom::Node>) -> Element {
    Element::new("section")
        .id(id)
        .class("legal-section")
        .child(Element::new("h2").text(title))
        .child(Element::new("p").children(body))
}

fn legal_main(kind: PageKind) -> Element {
    let (title, sections) = if kind == PageKind::Terms {
        (
            "Terms of Service",
            vec![
                legal_section(
                    "acceptance",
                    "Acceptance of Terms",
                    vec![
                        "By using ".into(),
                        brand_inline(1).into(),
                        " at ".into(),
                        Element::new("span").id(&slot_id(Slot::DomainInline)).into(),
                        " you agree to these terms.".into(),
                    ],
                ),
                legal_section(
                    "purchases",
                    "Purchases and Access",
                    vec![
                        "Paid courses are purchased by contacting ".into(),
                        brand_inline(2).into(),
                        " on WhatsApp. Access credentials are personal and must not be shared.".into(),
                    ],
                ),
                legal_section(
                    "refunds",
                    "Refunds",
                    vec![
                        brand_inline(3).into(),
                        " offers a 30-day money-back guarantee on paid courses.".into(),
                    ],
                ),
                legal_section(
                    "contact",
                    "Contact",
                    vec![
                        "The current version of these terms is published at ".into(),
                        Element::new("a").id(&slot_id(Slot::TermsUrlLink)).attr("href", "#").into(),
                        ". Questions? ".into(),
                        whatsapp_anchor(Slot::ContactWhatsappLink, "Message us").into(),
                        " or visit ".into(),
                        Element::new("a").id(&slot_id(Slot::DomainLink)).attr("href", "#").into(),
                        ".".into(),
                    ],
                ),
            ],
        )
    } else {
        (
            "Privacy Policy",
            vec![
                legal_section(
                    "collection",
                    "Information We Collect",
                    vec![
                        brand_inline(1).into(),
                        " collects only what you send us when you contact us or rate a course on ".into(),
                        Element::new("span").id(&slot_id(Slot::LegalDomainInline)).into(),
                        ".".into(),
                    ],
                ),
                legal_section(
                    "usage",
                    "How We Use It",
                    vec![
                        brand_inline(2).into(),
                        " uses your contact details only to process purchases and answer questions.".into(),
                    ],
                ),
                legal_section(
                    "contact",
                    "Contact",
                    vec![
                        "Reach ".into(),
                        brand_inline(3).into(),
                        " through ".into(),
                        whatsapp_anchor(Slot::ContactWhatsappLink, "WhatsApp").into(),
                        " or at ".into(),
                        Element::new("a").id(&slot_id(Slot::DomainLink)).attr("href", "#").into(),
                        ".".into(),
                    ],
                ),
            ],
        )
    };

    let toc = Element::new("nav").class("legal-toc").attr("aria-label", "Contents").child(
        Element::new("ol").children(sections.iter().map(|section| {
            let id = section.get_attr("id").unwrap_or_default().to_string();
            let heading = section
                .children
                .first()
                .map(|n| match n {
                    crate::dom::Node::Element(e) => e.text_content(),
                    crate::dom::Node::Text(t) => t.clone(),
                })
                .unwrap_or_default();
            Element::new("li").child(Element::new("a").attr("href", format!("#{}", id)).text(heading))
        })),
    );

    Element::new("main").child(
        Element::new("div")
            .class("page-container legal")
            .child(Element::new("h1").class("page-title").text(title))
            .child(toc)
            .children(sections),
    )
}

pub fn shell(kind: PageKind) -> Document {
    let main = match kind {
        PageKind::Home => home_main(),
        PageKind::Catalog => catalog_main(),
        PageKind::CourseDetails => Element::new("main").id(&slot_id(Slot::App)),
        PageKind::About => about_main(),
        PageKind::Privacy | PageKind::Terms => legal_main(kind),
    };

    let body = Element::new("body").child(nav()).child(main).child(footer(kind));
    let mut doc = Document::new(body);
    for element in head() {
        doc.append_head(element);
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shell_has_seo_placeholders() {
        for kind in [
            PageKind::Home,
            PageKind::Catalog,
            PageKind::CourseDetails,
            PageKind::About,
            PageKind::Privacy,
            PageKind::Terms,
        ] {
            let doc = shell(kind);
            for slot in [Slot::PageDesc, Slot::Canonical, Slot::OgTitle, Slot::TwImage, Slot::NavBrand] {
                assert!(doc.has_slot(slot), "{:?} lacks {}", kind, slot);
            }
        }
    }

    #[test]
    fn terms_only_anchors() {
        assert!(shell(PageKind::Terms).has_slot(Slot::TermsUrlLink));
        assert!(!shell(PageKind::Privacy).has_slot(Slot::TermsUrlLink));
        assert!(shell(PageKind::Privacy).has_slot(Slot::LegalDomainInline));
        assert!(!shell(PageKind::Home).has_slot(Slot::FooterWhatsappAlt));
    }
}
