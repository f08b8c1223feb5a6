use crate::dom::{Document, Slot};
use crate::pages::{GENERIC_WHATSAPP_MESSAGE, PageContent, PageContext, PageKind, build};
use crate::render::whatsapp_url;
use crate::seo;

pub fn describe(ctx: &PageContext<'_>) -> PageContent {
    PageContent::new(seo::about(ctx.site))
        .with_chrome(ctx)
        .link(
            Slot::ContactWhatsappButton,
            whatsapp_url(&ctx.site.whatsapp_number, Some(GENERIC_WHATSAPP_MESSAGE)),
        )
}

pub fn render(ctx: &PageContext<'_>) -> Document {
    build(PageKind::About, describe(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_site;
    use crate::services::Catalog;

    #[test]
    fn about_page_has_contact_link_and_about_schema() {
        let site = builtin_site();
        let catalog = Catalog::builtin().unwrap();
        let doc = render(&PageContext::new(&site, &catalog, 2025));

        assert_eq!(doc.title, "About Us — Ai8V | Mind & Machine");
        assert!(
            doc.slot(Slot::ContactWhatsappButton)
                .and_then(|e| e.get_attr("href"))
                .is_some_and(|href| href.starts_with("https://wa.me/201556450850"))
        );
        assert!(
            doc.json_ld_blocks()
                .iter()
                .any(|block| block.text_content().contains("\"AboutPage\""))
        );
    }
}
