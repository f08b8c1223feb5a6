//! Privacy policy and terms of service.

use crate::dom::{Document, Slot};
use crate::pages::{GENERIC_WHATSAPP_MESSAGE, PageContent, PageContext, PageKind, build};
use crate::render::whatsapp_url;
use crate::seo;

const BRAND_INLINE_SLOTS: u8 = 6;

pub fn describe(ctx: &PageContext<'_>, kind: PageKind) -> PageContent {
    let site = ctx.site;
    let base = site.base_url();
    let bundle = if kind == PageKind::Terms {
        seo::terms(site)
    } else {
        seo::privacy(site)
    };

    let mut content = PageContent::new(bundle)
        .with_chrome(ctx)
        .text(Slot::DomainInline, site.domain.as_str())
        .text(Slot::LegalDomainInline, site.domain.as_str())
        .text(Slot::DomainLink, site.domain.as_str())
        .link(Slot::DomainLink, base.as_str())
        .link(
            Slot::ContactWhatsappLink,
            whatsapp_url(&site.whatsapp_number, Some(GENERIC_WHATSAPP_MESSAGE)),
        );
    // Shells carry as many brand references as their copy needs; the
    // rest are skipped.
    for n in 1..=BRAND_INLINE_SLOTS {
        content = content.text(Slot::BrandInline(n), site.brand_name.as_str());
    }
    if kind == PageKind::Terms {
        let terms_url = format!("{}/legal/terms.html", base);
        content = content
            .text(Slot::TermsUrlLink, terms_url.as_str())
            .link(Slot::TermsUrlLink, terms_url);
    }
    content
}

pub fn render(ctx: &PageContext<'_>, kind: PageKind) -> Document {
    build(kind, describe(ctx, kind))
}
