//! Pure helpers shared by the page controllers.

use chrono::NaiveDate;
use tracing::warn;
use url::{ParseError, Url};

use crate::dom::Element;

/// Inert target used in place of an unsafe or empty URL.
pub const PLACEHOLDER_HREF: &str = "#";

const SAFE_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Returns the URL unchanged when it is safe to place in an `href`/`src`,
/// `None` otherwise. Relative references are allowed; absolute URLs must
/// use one of the safe schemes.
pub fn sanitize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Browsers ignore tabs, newlines and other controls inside a scheme,
    // so "java\tscript:" must be treated as "javascript:".
    let normalized: String = trimmed
        .chars()
        .filter(|c| !c.is_control() && !c.is_whitespace())
        .collect();

    match Url::parse(&normalized) {
        Ok(url) if SAFE_SCHEMES.contains(&url.scheme()) => Some(trimmed.to_string()),
        Ok(url) => {
            warn!(scheme = url.scheme(), "rejected url with unsafe scheme");
            None
        }
        Err(ParseError::RelativeUrlWithoutBase) => Some(trimmed.to_string()),
        Err(err) => {
            warn!(%err, "rejected malformed url");
            None
        }
    }
}

/// Sanitized URL, or the inert placeholder.
pub fn safe_href(raw: &str) -> String {
    sanitize_url(raw).unwrap_or_else(|| PLACEHOLDER_HREF.to_string())
}

pub fn whatsapp_url(phone: &str, message: Option<&str>) -> String {
    let mut url = format!("https://wa.me/{}", urlencoding::encode(phone));
    if let Some(message) = message.filter(|m| !m.is_empty()) {
        url.push_str("?text=");
        url.push_str(&urlencoding::encode(message));
    }
    url
}

pub fn catalog_url(category: Option<&str>) -> String {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => format!("/course/?category={}", urlencoding::encode(category)),
        None => "/course/".to_string(),
    }
}

/// Canonical details URL. Served pages link here too.
pub fn course_url(id: u32) -> String {
    format!("/course/course-details/?id={}", id)
}

/// How pages link to course details. A static host cannot route on the
/// query string, so exported pages link to one directory per course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkStyle {
    #[default]
    Query,
    Path,
}

impl LinkStyle {
    pub fn course_url(self, id: u32) -> String {
        match self {
            LinkStyle::Query => course_url(id),
            LinkStyle::Path => format!("/course/course-details/{}/", id),
        }
    }
}

/// Path of the access service for an already purchased course. Only the
/// id is embedded; the service resolves the real content location.
pub fn access_path(id: u32) -> String {
    format!("/course/paid/{}", id)
}

pub fn image_url(image: &str) -> String {
    format!("/assets/img/{}", image)
}

pub fn format_price(price: f64, currency: &str) -> String {
    if price == 0.0 {
        "Free".to_string()
    } else {
        format!("{} {:.2}", currency, price)
    }
}

/// Thousands-separated integer, e.g. `1,200`.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Long US date, e.g. `August 1, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}

fn star_class(value: f64, position: u8) -> &'static str {
    let position = f64::from(position);
    if value >= position {
        "bi bi-star-fill"
    } else if value >= position - 0.5 {
        "bi bi-star-half"
    } else {
        "bi bi-star"
    }
}

/// Five-star fragment. Display stars are icons; interactive stars are
/// submit buttons named `value`, so they work inside a plain form.
pub fn render_stars(value: f64, interactive: bool) -> Element {
    if interactive {
        let buttons = (1..=5u8).map(|i| {
            Element::new("button")
                .class("star-btn")
                .attr("type", "submit")
                .attr("name", "value")
                .attr("value", i.to_string())
                .attr("aria-label", format!("Rate {} star{}", i, if i == 1 { "" } else { "s" }))
                .attr("tabindex", if i == 1 { "0" } else { "-1" })
                .child(Element::icon("bi bi-star"))
        });
        Element::new("div")
            .class("stars-interactive")
            .attr("role", "radiogroup")
            .attr("aria-label", "Rate this course")
            .children(buttons)
    } else {
        Element::new("span")
            .class("stars-display")
            .attr("role", "img")
            .attr("aria-label", format!("Rating: {:.1} out of 5", value))
            .children((1..=5u8).map(|i| Element::icon(star_class(value, i))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_script_urls() {
        assert_eq!(sanitize_url("javascript:alert(1)"), None);
        assert_eq!(sanitize_url("  JavaScript:alert(1)"), None);
        assert_eq!(sanitize_url("java\tscript:alert(1)"), None);
        assert_eq!(sanitize_url("data:text/html,<b>x</b>"), None);
        assert_eq!(sanitize_url("vbscript:msgbox"), None);
        assert_eq!(sanitize_url(""), None);
        assert_eq!(safe_href("javascript:void(0)"), PLACEHOLDER_HREF);
    }

    #[test]
    fn keeps_safe_urls() {
        let drive = "https://docs.google.com/document/d/abc/edit?usp=drive_link";
        assert_eq!(sanitize_url(drive).as_deref(), Some(drive));
        assert_eq!(sanitize_url("/course/paid/3").as_deref(), Some("/course/paid/3"));
        assert_eq!(sanitize_url("../index.html").as_deref(), Some("../index.html"));
        assert_eq!(sanitize_url("mailto:a@b.c").as_deref(), Some("mailto:a@b.c"));
        assert_eq!(sanitize_url("/search?q=a:b").as_deref(), Some("/search?q=a:b"));
        assert_eq!(sanitize_url("#").as_deref(), Some("#"));
        assert_eq!(sanitize_url("HTTPS://wa.me/1").as_deref(), Some("HTTPS://wa.me/1"));
    }

    #[test]
    fn rejects_malformed_absolute_urls() {
        assert_eq!(sanitize_url("http://"), None);
        assert_eq!(sanitize_url("https://[::1"), None);
    }

    #[test]
    fn display_stars_label_is_rounded() {
        let stars = render_stars(14.0 / 3.0, false);
        assert_eq!(stars.get_attr("aria-label"), Some("Rating: 4.7 out of 5"));
    }

    #[test]
    fn course_links_follow_link_style() {
        assert_eq!(LinkStyle::Query.course_url(4), "/course/course-details/?id=4");
        assert_eq!(LinkStyle::Path.course_url(4), "/course/course-details/4/");
        assert_eq!(LinkStyle::default(), LinkStyle::Query);
    }

    #[test]
    fn whatsapp_message_is_percent_encoded() {
        assert_eq!(
            whatsapp_url("201556450850", Some("Hello! I have a question")),
            "https://wa.me/201556450850?text=Hello%21%20I%20have%20a%20question"
        );
        assert_eq!(whatsapp_url("123", None), "https://wa.me/123");
    }

    #[test]
    fn formats_prices_numbers_and_dates() {
        assert_eq!(format_price(0.0, "EGP"), "Free");
        assert_eq!(format_price(19.99, "EGP"), "EGP 19.99");
        assert_eq!(format_price(500.0, "EGP"), "EGP 500.00");
        assert_eq!(format_number(1200), "1,200");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1234567), "1,234,567");
        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        assert_eq!(format_date(date), "August 1, 2025");
    }

    #[test]
    fn star_fragment_rounds_to_halves() {
        let stars = render_stars(3.5, false);
        let classes: Vec<_> = stars
            .children
            .iter()
            .filter_map(|n| match n {
                crate::dom::Node::Element(e) => e.get_attr("class"),
                _ => None,
            })
            .collect();
        assert_eq!(
            classes,
            vec![
                "bi bi-star-fill",
                "bi bi-star-fill",
                "bi bi-star-fill",
                "bi bi-star-half",
                "bi bi-star"
            ]
        );
    }

    #[test]
    fn catalog_links_encode_category() {
        assert_eq!(catalog_url(None), "/course/");
        assert_eq!(catalog_url(Some("IT")), "/course/?category=IT");
        assert_eq!(catalog_url(Some("Web Dev")), "/course/?category=Web%20Dev");
    }
}
