use std::borrow::Cow;
use std::fmt;

/// Semantic name for an anchor element in a page shell, mapped to the
/// stable element id the shell uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    // <head>
    PageDesc,
    Canonical,
    OgUrl,
    OgTitle,
    OgDesc,
    OgImage,
    OgSiteName,
    TwTitle,
    TwDesc,
    TwImage,
    Hreflang,
    CourseJsonLd,

    // shared chrome
    NavBrand,
    FooterBrand,
    FooterCopyright,
    FooterWhatsapp,
    FooterWhatsappAlt,
    App,

    // home
    HeroTitleLine1,
    HeroTitleGradient,
    HeroSubtitle,
    StatsBar,
    FeaturedGrid,
    CategoriesGrid,
    FooterCategories,
    CtaWhatsapp,

    // catalog
    CatalogHeading,
    CatalogCount,
    CatalogGrid,

    // about and legal
    ContactWhatsappButton,
    ContactWhatsappLink,
    BrandInline(u8),
    DomainInline,
    LegalDomainInline,
    DomainLink,
    TermsUrlLink,

    // rating widget
    RatingBigNumber,
    RatingDisplayStars,
    RatingCountText,
    RatingInteractive,
    RatingStatus,
    MetaRatingValue,
}

impl Slot {
    pub fn id(self) -> Cow<'static, str> {
        let id = match self {
            Slot::PageDesc => "page-desc",
            Slot::Canonical => "page-canonical",
            Slot::OgUrl => "og-url",
            Slot::OgTitle => "og-title",
            Slot::OgDesc => "og-desc",
            Slot::OgImage => "og-image",
            Slot::OgSiteName => "og-site-name",
            Slot::TwTitle => "tw-title",
            Slot::TwDesc => "tw-desc",
            Slot::TwImage => "tw-image",
            Slot::Hreflang => "hreflang-en",
            Slot::CourseJsonLd => "jsonld-details-0",
            Slot::NavBrand => "nav-brand-name",
            Slot::FooterBrand => "footer-brand-name",
            Slot::FooterCopyright => "footer-copyright",
            Slot::FooterWhatsapp => "footer-whatsapp-link",
            Slot::FooterWhatsappAlt => "footer-wa-link-2",
            Slot::App => "app",
            Slot::HeroTitleLine1 => "hero-title-line1",
            Slot::HeroTitleGradient => "hero-title-gradient",
            Slot::HeroSubtitle => "hero-subtitle",
            Slot::StatsBar => "stats-bar",
            Slot::FeaturedGrid => "featured-courses-grid",
            Slot::CategoriesGrid => "categories-grid",
            Slot::FooterCategories => "footer-categories",
            Slot::CtaWhatsapp => "cta-whatsapp-btn",
            Slot::CatalogHeading => "catalog-heading",
            Slot::CatalogCount => "catalog-count",
            Slot::CatalogGrid => "catalog-grid",
            Slot::ContactWhatsappButton => "contact-whatsapp-btn",
            Slot::ContactWhatsappLink => "contact-whatsapp-link",
            Slot::BrandInline(n) => return Cow::Owned(format!("brand-inline-{}", n)),
            Slot::DomainInline => "domain-inline-1",
            Slot::LegalDomainInline => "legal-domain-inline",
            Slot::DomainLink => "domain-link",
            Slot::TermsUrlLink => "terms-url-link",
            Slot::RatingBigNumber => "rating-big-number",
            Slot::RatingDisplayStars => "rating-display-stars",
            Slot::RatingCountText => "rating-count-text",
            Slot::RatingInteractive => "rating-interactive-stars",
            Slot::RatingStatus => "rating-status-msg",
            Slot::MetaRatingValue => "meta-rating-value",
        };
        Cow::Borrowed(id)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
