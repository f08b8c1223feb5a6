//! Course details page, including the not-found view and the live rating
//! card.

use tracing::info;

use crate::dom::{Document, Element, Slot};
use crate::models::{Course, FaqItem, SiteConfig};
use crate::pages::{PageContent, PageContext, PageKind, RenderedPage, build};
use crate::rating::{RatingInput, RatingService, RatingWidget};
use crate::render::{LinkStyle, catalog_url, format_date, format_number, format_price, image_url};
use crate::seo;
use crate::services::{AccessPolicy, CurriculumSummary, SectionSummary};

pub const NOT_FOUND_HEADING: &str = "Course Not Found";
pub const NOT_FOUND_TEXT: &str = "The course you are looking for does not exist.";

fn header(course: &Course) -> Element {
    let crumbs = Element::new("ol").class("breadcrumb").children([
        Element::new("li").child(Element::new("a").attr("href", "/").text("Home")),
        Element::new("li").child(Element::new("a").attr("href", catalog_url(None)).text("Courses")),
        Element::new("li")
            .class("active")
            .attr("aria-current", "page")
            .text(course.title.as_str()),
    ]);

    Element::new("header").class("course-header").child(
        Element::new("div")
            .class("page-container")
            .child(
                Element::new("a")
                    .class("back-link")
                    .attr("href", catalog_url(None))
                    .child(Element::icon("bi bi-arrow-left"))
                    .text(" Back to Courses"),
            )
            .child(Element::new("nav").attr("aria-label", "breadcrumb").child(crumbs))
            .child(Element::new("h1").class("course-details-title").text(course.title.as_str()))
            .child(Element::new("p").class("course-details-desc").text(course.description.as_str())),
    )
}

fn objectives(course: &Course) -> Option<Element> {
    if course.learning_objectives.is_empty() {
        return None;
    }
    let items = course.learning_objectives.iter().map(|objective| {
        Element::new("li")
            .child(Element::icon("bi bi-check-circle-fill"))
            .text(format!(" {}", objective))
    });
    Some(
        Element::new("section")
            .class("details-section objectives")
            .child(Element::new("h2").text("What You'll Learn"))
            .child(Element::new("ul").class("objectives-list").children(items)),
    )
}

fn curriculum(course: &Course) -> Option<Element> {
    if course.curriculum.is_empty() {
        return None;
    }
    let summary = CurriculumSummary::of(&course.curriculum);

    let sections = course.curriculum.iter().enumerate().map(|(i, section)| {
        let meta = SectionSummary::of(&section.lessons).meta_text();
        let lessons = section.lessons.iter().map(|lesson| {
            let icon = if lesson.preview {
                "bi bi-play-circle"
            } else {
                "bi bi-lock"
            };
            let mut item = Element::new("li")
                .class("lesson-item")
                .child(Element::icon(icon))
                .child(Element::new("span").class("lesson-title").text(lesson.title.as_str()));
            if lesson.preview {
                item = item.child(Element::new("span").class("badge-preview").text("Preview"));
            }
            if !lesson.duration.is_empty() {
                item = item.child(
                    Element::new("span")
                        .class("lesson-duration")
                        .text(lesson.duration.as_str()),
                );
            }
            item
        });

        let mut details = Element::new("details").class("accordion-item");
        if i == 0 {
            details = details.attr("open", "open");
        }
        details
            .child(
                Element::new("summary")
                    .class("accordion-button")
                    .child(Element::new("span").class("section-title").text(section.title.as_str()))
                    .child(Element::new("span").class("section-meta").text(meta)),
            )
            .child(Element::new("ul").class("lesson-list").children(lessons))
    });

    Some(
        Element::new("section")
            .class("details-section curriculum")
            .child(Element::new("h2").text("Course Curriculum"))
            .child(Element::new("p").class("curriculum-summary").text(summary.summary_line()))
            .child(Element::new("div").class("accordion").children(sections)),
    )
}

fn faq(items: &[FaqItem]) -> Option<Element> {
    if items.is_empty() {
        return None;
    }
    let entries = items.iter().map(|item| {
        Element::new("details")
            .class("accordion-item")
            .child(Element::new("summary").class("accordion-button").text(item.question.as_str()))
            .child(Element::new("div").class("accordion-body").text(item.answer.as_str()))
    });
    Some(
        Element::new("section")
            .class("details-section faq")
            .child(Element::new("h2").text("Frequently Asked Questions"))
            .child(Element::new("div").class("accordion").children(entries)),
    )
}

fn meta_row(icon: &str, label: &str, value: Element) -> Element {
    Element::new("li")
        .class("meta-item")
        .child(
            Element::new("span")
                .class("meta-label")
                .child(Element::icon(&format!("bi {}", icon)))
                .text(format!(" {}", label)),
        )
        .child(value)
}

fn meta_value(text: impl Into<String>) -> Element {
    Element::new("span").class("meta-value").text(text)
}

fn sidebar(course: &Course, site: &SiteConfig) -> Element {
    let policy = AccessPolicy::for_course(course, site);
    let actions = policy
        .actions(course, site)
        .iter()
        .map(|action| action.to_element())
        .collect::<Vec<_>>();

    let price_class = if course.is_free() {
        "price-display price-free"
    } else {
        "price-display"
    };

    let meta = Element::new("ul").class("meta-list").children([
        meta_row("bi-person", "Instructor", meta_value(course.instructor.as_str())),
        meta_row("bi-tag", "Category", meta_value(course.category.as_str())),
        meta_row("bi-bar-chart", "Level", meta_value(course.level.as_str())),
        meta_row("bi-people", "Students", meta_value(format_number(course.students))),
        meta_row("bi-play-circle", "Lessons", meta_value(course.lessons.to_string())),
        meta_row(
            "bi-star",
            "Rating",
            Element::new("span")
                .class("meta-value")
                .id(&Slot::MetaRatingValue.id())
                .child(RatingWidget::meta_inline(course.rating)),
        ),
        meta_row("bi-calendar", "Updated", meta_value(format_date(course.date))),
    ]);

    Element::new("div")
        .class("sidebar-card")
        .child(
            Element::new("img")
                .class("sidebar-img")
                .attr("src", image_url(&course.image))
                .attr("alt", course.title.as_str()),
        )
        .child(
            Element::new("div")
                .class(price_class)
                .text(format_price(course.price, &site.currency)),
        )
        .child(Element::new("div").class("sidebar-actions").children(actions))
        .child(meta)
}

fn course_view(
    course: &Course,
    site: &SiteConfig,
    widget: &RatingWidget,
    input: RatingInput,
) -> Vec<Element> {
    let content = Element::new("div")
        .class("col-lg-8")
        .children([objectives(course), curriculum(course), faq(&course.faq)].into_iter().flatten());
    let aside = Element::new("aside")
        .class("col-lg-4")
        .child(sidebar(course, site))
        .child(widget.render_card(input));

    vec![
        header(course),
        Element::new("div")
            .class("page-container")
            .child(Element::new("div").class("row").child(content).child(aside)),
    ]
}

fn not_found_view() -> Vec<Element> {
    vec![
        Element::new("div").class("page-container").child(
            Element::new("div")
                .class("error-panel")
                .attr("role", "alert")
                .child(Element::icon("bi bi-exclamation-circle"))
                .child(Element::new("h1").text(NOT_FOUND_HEADING))
                .child(Element::new("p").text(NOT_FOUND_TEXT))
                .child(
                    Element::new("a")
                        .class("btn-view")
                        .attr("href", catalog_url(None))
                        .text("Browse Courses"),
                ),
        ),
    ]
}

pub fn describe(
    ctx: &PageContext<'_>,
    course: Option<&Course>,
    widget: &RatingWidget,
    input: RatingInput,
) -> PageContent {
    match course {
        Some(course) => PageContent::new(seo::course(ctx.site, course))
            .with_chrome(ctx)
            .fill(Slot::App, course_view(course, ctx.site, widget, input)),
        None => PageContent::new(seo::course_not_found(ctx.site))
            .with_chrome(ctx)
            .fill(Slot::App, not_found_view()),
    }
}

/// Details page with the rating card in its initial loading state, as
/// written by the static export. Path-style pages have no server to post a
/// rating to, so they carry no rating input.
pub fn render_static(ctx: &PageContext<'_>, course: &Course) -> Document {
    let widget = RatingWidget::new(course.id);
    let input = match ctx.links {
        LinkStyle::Query => RatingInput::Form,
        LinkStyle::Path => RatingInput::Omitted,
    };
    build(PageKind::CourseDetails, describe(ctx, Some(course), &widget, input))
}

pub fn render_not_found(ctx: &PageContext<'_>) -> Document {
    let widget = RatingWidget::new(0);
    build(
        PageKind::CourseDetails,
        describe(ctx, None, &widget, RatingInput::Unavailable),
    )
}

/// Resolves the raw `id` parameter and renders the page. For a found
/// course the rating card is refreshed once (after forwarding `submission`
/// when one is given) before the page is returned.
pub async fn render(
    ctx: &PageContext<'_>,
    raw_id: Option<&str>,
    ratings: &dyn RatingService,
    submission: Option<u8>,
) -> RenderedPage {
    let course = match ctx.catalog.resolve(raw_id) {
        Ok(course) => course,
        Err(miss) => {
            info!(?miss, ?raw_id, "course lookup missed");
            return RenderedPage {
                doc: render_not_found(ctx),
                found: false,
            };
        }
    };

    let mut widget = RatingWidget::new(course.id);
    let available = ratings.is_available();
    let input = if available {
        RatingInput::Form
    } else {
        RatingInput::Unavailable
    };
    match submission {
        Some(value) => {
            widget.submit(ratings, value).await;
        }
        None if available => {
            widget.refresh(ratings).await;
        }
        None => {}
    }

    let mut doc = build(
        PageKind::CourseDetails,
        describe(ctx, Some(course), &widget, input),
    );
    widget.apply(&mut doc);
    RenderedPage::found(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_site;
    use crate::rating::{NoopRatingService, widget::LOADING_TEXT};
    use crate::services::Catalog;

    fn fixtures() -> (SiteConfig, Catalog) {
        (builtin_site(), Catalog::builtin().unwrap())
    }

    #[tokio::test]
    async fn invalid_ids_render_not_found() {
        let (site, catalog) = fixtures();
        let ctx = PageContext::new(&site, &catalog, 2025);
        for raw in [None, Some(""), Some("0"), Some("-1"), Some("abc"), Some("99")] {
            let page = render(&ctx, raw, &NoopRatingService, None).await;
            assert!(!page.found, "{:?} should not resolve", raw);
            assert_eq!(page.doc.title, "Course Not Found — Ai8V | Mind & Machine");
            let html = page.html();
            assert!(html.contains(NOT_FOUND_TEXT));
            assert!(html.contains("Browse Courses"));
        }
    }

    #[test]
    fn paid_course_has_contact_and_access_actions() {
        let (site, catalog) = fixtures();
        let ctx = PageContext::new(&site, &catalog, 2025);
        let course = catalog.find(3).unwrap();
        let html = render_static(&ctx, course).render();

        assert!(html.contains("https://wa.me/201556450850?text="));
        assert!(html.contains("href=\"/course/paid/3\""));
        assert!(html.contains("EGP 19.99"));
        assert!(!html.contains("docs.google.com"));
    }

    #[test]
    fn free_course_links_to_drive() {
        let (site, catalog) = fixtures();
        let ctx = PageContext::new(&site, &catalog, 2025);
        let course = catalog.find(5).unwrap();
        let html = render_static(&ctx, course).render();

        assert!(html.contains("Start Learning Now"));
        assert!(html.contains("docs.google.com"));
        assert!(!html.contains("/course/paid/5"));
    }

    #[test]
    fn course_page_sections_and_schema() {
        let (site, catalog) = fixtures();
        let ctx = PageContext::new(&site, &catalog, 2025);
        let course = catalog.find(1).unwrap();
        let doc = render_static(&ctx, course);
        let html = doc.render();

        assert_eq!(doc.title, format!("{} — Ai8V | Mind & Machine", course.title));
        assert!(html.contains("What You'll Learn"));
        assert!(html.contains("4 sections • 13 lessons • 3h 22m total"));
        assert!(html.contains("Frequently Asked Questions"));
        assert!(html.contains(&format_date(course.date)));
        assert_eq!(
            doc.slot(Slot::RatingCountText).map(|e| e.text_content()),
            Some(LOADING_TEXT.to_string())
        );
        let schema = doc.slot(Slot::CourseJsonLd).unwrap().text_content();
        assert!(schema.contains("\"@type\":\"Course\""));
        assert!(!schema.contains("aggregateRating"));
    }

    #[test]
    fn curriculum_first_section_is_expanded() {
        let (site, catalog) = fixtures();
        let ctx = PageContext::new(&site, &catalog, 2025);
        let doc = render_static(&ctx, catalog.find(2).unwrap());
        let mut items = Vec::new();
        doc.body.find_all_by_class("accordion-item", &mut items);
        assert!(items[0].get_attr("open").is_some());
        assert!(items[1].get_attr("open").is_none());
    }

    #[test]
    fn oversized_lesson_durations_still_render() {
        let mut courses = crate::data::builtin_courses();
        for lesson in courses[0].curriculum.iter_mut().flat_map(|s| s.lessons.iter_mut()) {
            lesson.duration = "99999999:00".to_string();
        }
        let id = courses[0].id;
        let site = builtin_site();
        let catalog = Catalog::new(courses).expect("well-formed durations are accepted");
        let ctx = PageContext::new(&site, &catalog, 2025);

        let html = render_static(&ctx, catalog.find(id).unwrap()).render();
        assert!(html.contains("4 sections • 13 lessons • "));
    }

    #[test]
    fn path_style_pages_carry_no_rating_form() {
        let (site, catalog) = fixtures();
        let ctx = PageContext::new(&site, &catalog, 2025).with_links(LinkStyle::Path);
        let html = render_static(&ctx, catalog.find(3).unwrap()).render();
        assert!(!html.contains("<form"));
        assert!(html.contains(LOADING_TEXT));
        assert!(html.contains("https://ttblabs.com/course/course-details/?id=3"));
    }
}
