//! Page controllers. Each page is described by a [`PageContent`] (SEO bundle
//! plus slot updates) and applied to its shell by one shared routine.

pub mod about;
pub mod catalog;
pub mod components;
pub mod details;
pub mod home;
pub mod legal;
pub mod shell;

pub use shell::{PageKind, shell};

use tracing::debug;

use crate::dom::{Document, Element, Slot};
use crate::models::SiteConfig;
use crate::render::{LinkStyle, safe_href, whatsapp_url};
use crate::seo::{self, SeoBundle};
use crate::services::Catalog;

pub const GENERIC_WHATSAPP_MESSAGE: &str = "Hello! I have a question about your courses.";

/// Read-only inputs shared by every controller.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site: &'a SiteConfig,
    pub catalog: &'a Catalog,
    pub year: i32,
    pub links: LinkStyle,
}

impl<'a> PageContext<'a> {
    pub fn new(site: &'a SiteConfig, catalog: &'a Catalog, year: i32) -> Self {
        Self {
            site,
            catalog,
            year,
            links: LinkStyle::default(),
        }
    }

    pub fn with_links(self, links: LinkStyle) -> Self {
        Self { links, ..self }
    }
}

/// A fully rendered page and whether it represents a real resource.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub doc: Document,
    pub found: bool,
}

impl RenderedPage {
    pub fn found(doc: Document) -> Self {
        Self { doc, found: true }
    }

    pub fn html(&self) -> String {
        self.doc.render()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub seo: Option<SeoBundle>,
    pub texts: Vec<(Slot, String)>,
    /// `href` values. Sanitized when applied.
    pub links: Vec<(Slot, String)>,
    pub fills: Vec<(Slot, Vec<Element>)>,
}

impl PageContent {
    pub fn new(seo: SeoBundle) -> Self {
        Self {
            seo: Some(seo),
            ..Self::default()
        }
    }

    pub fn text(mut self, slot: Slot, text: impl Into<String>) -> Self {
        self.texts.push((slot, text.into()));
        self
    }

    pub fn link(mut self, slot: Slot, href: impl Into<String>) -> Self {
        self.links.push((slot, href.into()));
        self
    }

    pub fn fill(mut self, slot: Slot, elements: Vec<Element>) -> Self {
        self.fills.push((slot, elements));
        self
    }

    /// Brand, copyright and WhatsApp contact links common to all pages.
    /// Slots a shell does not carry are skipped when applied.
    pub fn with_chrome(self, ctx: &PageContext<'_>) -> Self {
        let contact = whatsapp_url(&ctx.site.whatsapp_number, Some(GENERIC_WHATSAPP_MESSAGE));
        self.text(Slot::NavBrand, ctx.site.brand_name.as_str())
            .text(Slot::FooterBrand, ctx.site.brand_name.as_str())
            .text(Slot::FooterCopyright, ctx.site.copyright(ctx.year))
            .link(Slot::FooterWhatsapp, contact.as_str())
            .link(Slot::FooterWhatsappAlt, contact)
    }

    fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.texts
            .iter()
            .map(|(slot, _)| *slot)
            .chain(self.links.iter().map(|(slot, _)| *slot))
            .chain(self.fills.iter().map(|(slot, _)| *slot))
    }
}

/// Applies a page description to a shell. Absent slots are reported once
/// up front and then skipped.
pub fn apply(doc: &mut Document, content: PageContent) {
    let missing: Vec<String> = content
        .slots()
        .filter(|slot| !doc.has_slot(*slot))
        .map(|slot| slot.to_string())
        .collect();
    if !missing.is_empty() {
        debug!(?missing, "shell lacks slots, their updates are skipped");
    }

    if let Some(bundle) = &content.seo {
        seo::inject(doc, bundle);
    }
    for (slot, text) in content.texts {
        doc.set_text(slot, text);
    }
    for (slot, href) in content.links {
        doc.set_attr(slot, "href", safe_href(&href));
    }
    for (slot, elements) in content.fills {
        if let Some(target) = doc.slot_mut(slot) {
            target.clear();
            for element in elements {
                target.append(element);
            }
        }
    }
}

/// Builds the shell for `kind` and applies `content` to it.
pub fn build(kind: PageKind, content: PageContent) -> Document {
    let mut doc = shell(kind);
    apply(&mut doc, content);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_site;

    #[test]
    fn unsafe_links_become_placeholders() {
        let mut doc = shell(PageKind::About);
        let content =
            PageContent::default().link(Slot::ContactWhatsappButton, "javascript:alert(1)");
        apply(&mut doc, content);
        assert_eq!(
            doc.slot(Slot::ContactWhatsappButton).and_then(|e| e.get_attr("href")),
            Some("#")
        );
    }

    #[test]
    fn missing_slots_do_not_stop_other_updates() {
        let site = builtin_site();
        let catalog = Catalog::builtin().unwrap();
        let ctx = PageContext::new(&site, &catalog, 2025);
        // The home shell has no secondary footer WhatsApp link.
        let doc = build(PageKind::Home, PageContent::default().with_chrome(&ctx));
        assert_eq!(
            doc.slot(Slot::FooterCopyright).map(|e| e.text_content()),
            Some("© 2025 Ai8V | Mind & Machine. All rights reserved.".to_string())
        );
        assert!(
            doc.slot(Slot::FooterWhatsapp)
                .and_then(|e| e.get_attr("href"))
                .is_some_and(|href| href.starts_with("https://wa.me/201556450850?text=Hello%21"))
        );
    }
}
