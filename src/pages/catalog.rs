use crate::dom::{Document, Slot};
use crate::pages::components::{course_card, empty_state};
use crate::pages::{PageContent, PageContext, PageKind, build};
use crate::render::plural;
use crate::seo;
use crate::services::CatalogFilter;

fn heading(filter: &CatalogFilter) -> String {
    match filter.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => format!("{} Courses", category),
        None => "All Courses".to_string(),
    }
}

pub fn describe(ctx: &PageContext<'_>, filter: &CatalogFilter) -> PageContent {
    let courses = ctx.catalog.filter(filter);
    let mut count = plural(courses.len(), "course", "courses");
    if let Some(term) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        count.push_str(&format!(" matching \"{}\"", term));
    }

    let cards = if courses.is_empty() {
        vec![empty_state(
            "No courses found",
            "Try a different search term or browse all courses.",
        )]
    } else {
        courses.into_iter().map(|course| course_card(course, ctx.site, ctx.links)).collect()
    };

    let category = filter.category.as_deref().map(str::trim).filter(|c| !c.is_empty());
    PageContent::new(seo::catalog(ctx.site, category))
        .with_chrome(ctx)
        .text(Slot::CatalogHeading, heading(filter))
        .text(Slot::CatalogCount, count)
        .fill(Slot::CatalogGrid, cards)
}

pub fn render(ctx: &PageContext<'_>, filter: &CatalogFilter) -> Document {
    build(PageKind::Catalog, describe(ctx, filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_site;
    use crate::services::Catalog;

    fn render_with(filter: CatalogFilter) -> Document {
        let site = builtin_site();
        let catalog = Catalog::builtin().unwrap();
        render(
            &PageContext::new(&site, &catalog, 2025),
            &filter,
        )
    }

    #[test]
    fn lists_every_course_without_filter() {
        let doc = render_with(CatalogFilter::default());
        assert_eq!(doc.slot(Slot::CatalogGrid).unwrap().children.len(), 8);
        assert_eq!(
            doc.slot(Slot::CatalogHeading).map(|e| e.text_content()),
            Some("All Courses".to_string())
        );
        assert_eq!(doc.title, "All Courses — Ai8V | Mind & Machine");
    }

    #[test]
    fn unmatched_search_shows_empty_state() {
        let doc = render_with(CatalogFilter {
            category: None,
            search: Some("underwater basket weaving".to_string()),
        });
        let grid = doc.slot(Slot::CatalogGrid).unwrap();
        assert_eq!(grid.children.len(), 1);
        assert!(grid.render().contains("empty-state"));
        assert!(
            doc.slot(Slot::CatalogCount)
                .unwrap()
                .text_content()
                .starts_with("0 courses matching")
        );
    }

    #[test]
    fn category_filter_sets_heading_and_canonical() {
        let doc = render_with(CatalogFilter {
            category: Some("IT".to_string()),
            search: None,
        });
        assert_eq!(
            doc.slot(Slot::CatalogHeading).map(|e| e.text_content()),
            Some("IT Courses".to_string())
        );
        assert_eq!(
            doc.slot(Slot::Canonical).and_then(|e| e.get_attr("href")),
            Some("https://ttblabs.com/course/?category=IT")
        );
    }
}
