use crate::dom::{Document, Element, Slot};
use crate::pages::components::{category_card, course_card};
use crate::pages::{GENERIC_WHATSAPP_MESSAGE, PageContent, PageContext, PageKind, build};
use crate::render::{catalog_url, format_number, whatsapp_url};
use crate::seo;
use crate::services::FEATURED_COUNT;

pub const HERO_LINE_1: &str = "Expand Your Skills,";
pub const HERO_GRADIENT: &str = "Shape Your Future.";
pub const HERO_SUBTITLE: &str = "Practical, expert-led courses with lifetime access and \
                                 real support. Learn at your own pace and build skills that matter.";

fn stat(icon: &str, value: String, label: &str) -> Element {
    Element::new("div")
        .class("stat-item")
        .attr("role", "listitem")
        .child(Element::icon(&format!("bi {}", icon)))
        .child(Element::new("span").class("stat-value").text(value))
        .child(Element::new("span").class("stat-label").text(label))
}

fn stats(ctx: &PageContext<'_>) -> Vec<Element> {
    vec![
        stat("bi-collection-play", ctx.catalog.len().to_string(), "Courses"),
        stat(
            "bi-people",
            format!("{}+", format_number(ctx.catalog.total_students())),
            "Students",
        ),
        stat("bi-star", format!("{:.1}", ctx.catalog.average_rating()), "Average Rating"),
        stat("bi-hand-thumbs-up", "98%".to_string(), "Satisfaction"),
    ]
}

pub fn describe(ctx: &PageContext<'_>) -> PageContent {
    let featured = ctx
        .catalog
        .featured(FEATURED_COUNT)
        .into_iter()
        .map(|course| course_card(course, ctx.site, ctx.links))
        .collect();

    let categories = ctx.catalog.categories();
    let category_cards = categories.iter().map(category_card).collect();
    let footer_links = categories
        .iter()
        .map(|category| {
            Element::new("li").child(
                Element::new("a")
                    .attr("href", catalog_url(Some(&category.name)))
                    .text(category.name.as_str()),
            )
        })
        .collect();

    PageContent::new(seo::home(ctx.site))
        .with_chrome(ctx)
        .text(Slot::HeroTitleLine1, HERO_LINE_1)
        .text(Slot::HeroTitleGradient, HERO_GRADIENT)
        .text(Slot::HeroSubtitle, HERO_SUBTITLE)
        .fill(Slot::StatsBar, stats(ctx))
        .fill(Slot::FeaturedGrid, featured)
        .fill(Slot::CategoriesGrid, category_cards)
        .fill(Slot::FooterCategories, footer_links)
        .link(
            Slot::CtaWhatsapp,
            whatsapp_url(&ctx.site.whatsapp_number, Some(GENERIC_WHATSAPP_MESSAGE)),
        )
}

pub fn render(ctx: &PageContext<'_>) -> Document {
    build(PageKind::Home, describe(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_site;
    use crate::services::Catalog;

    fn render_home() -> Document {
        let site = builtin_site();
        let catalog = Catalog::builtin().unwrap();
        render(&PageContext::new(&site, &catalog, 2025))
    }

    #[test]
    fn featured_grid_holds_three_newest_courses() {
        let doc = render_home();
        let grid = doc.slot(Slot::FeaturedGrid).unwrap();
        assert_eq!(grid.children.len(), 3);
        let html = grid.render();
        let first = html.find("?id=6").unwrap();
        let second = html.find("?id=1").unwrap();
        let third = html.find("?id=2").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn stats_are_computed_from_catalog() {
        let doc = render_home();
        let text = doc.slot(Slot::StatsBar).unwrap().text_content();
        assert!(text.contains("8Courses"));
        assert!(text.contains("98%"));
    }

    #[test]
    fn home_has_website_schema_and_title() {
        let doc = render_home();
        assert_eq!(doc.title, "Ai8V | Mind & Machine — Learn. Build. Grow.");
        assert!(!doc.json_ld_blocks().is_empty());
        assert_eq!(
            doc.slot(Slot::NavBrand).map(|e| e.text_content()),
            Some("Ai8V | Mind & Machine".to_string())
        );
    }
}
