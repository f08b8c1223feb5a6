//! Markup fragments reused across pages.

use crate::data::category_icon;
use crate::dom::Element;
use crate::models::{Course, SiteConfig};
use crate::render::{LinkStyle, catalog_url, format_price, image_url, plural, render_stars};
use crate::services::CategoryCount;

pub fn course_card(course: &Course, site: &SiteConfig, links: LinkStyle) -> Element {
    let href = links.course_url(course.id);
    let price_class = if course.is_free() {
        "course-price free"
    } else {
        "course-price"
    };

    let body = Element::new("div")
        .class("course-card-body")
        .child(Element::new("span").class("course-category").text(course.category.as_str()))
        .child(
            Element::new("h3").class("course-title").child(
                Element::new("a")
                    .attr("href", href.as_str())
                    .text(course.title.as_str()),
            ),
        )
        .child(Element::new("p").class("course-desc").text(course.description.as_str()))
        .child(
            Element::new("div")
                .class("course-rating")
                .child(render_stars(course.rating, false))
                .child(Element::new("span").text(format!(" {:.1}", course.rating))),
        )
        .child(
            Element::new("div")
                .class("course-meta")
                .child(
                    Element::new("span")
                        .child(Element::icon("bi bi-play-circle"))
                        .text(format!(" {}", plural(course.lessons as usize, "lesson", "lessons"))),
                )
                .child(
                    Element::new("span")
                        .child(Element::icon("bi bi-bar-chart"))
                        .text(format!(" {}", course.level)),
                ),
        )
        .child(
            Element::new("div")
                .class("course-card-footer")
                .child(
                    Element::new("span")
                        .class(price_class)
                        .text(format_price(course.price, &site.currency)),
                )
                .child(
                    Element::new("a")
                        .class("btn-view")
                        .attr("href", href.as_str())
                        .attr("aria-label", format!("View course: {}", course.title))
                        .text("View Course"),
                ),
        );

    Element::new("div").class("col-md-6 col-lg-4").child(
        Element::new("article")
            .class("course-card")
            .child(
                Element::new("img")
                    .class("course-img")
                    .attr("src", image_url(&course.image))
                    .attr("alt", course.title.as_str())
                    .attr("loading", "lazy"),
            )
            .child(body),
    )
}

pub fn category_card(category: &CategoryCount) -> Element {
    Element::new("div").class("col-6 col-md-4 col-lg-3").child(
        Element::new("a")
            .class(format!("category-card category-{}", category.color))
            .attr("href", catalog_url(Some(&category.name)))
            .child(Element::icon(&format!("bi {}", category_icon(&category.name))))
            .child(Element::new("h3").text(category.name.as_str()))
            .child(
                Element::new("span")
                    .class("category-count")
                    .text(plural(category.count, "course", "courses")),
            ),
    )
}

pub fn empty_state(title: &str, text: &str) -> Element {
    Element::new("div")
        .class("col-12 empty-state")
        .child(Element::icon("bi bi-search"))
        .child(Element::new("h3").text(title))
        .child(Element::new("p").text(text))
        .child(Element::new("a").class("btn-view").attr("href", catalog_url(None)).text("Browse Courses"))
}
