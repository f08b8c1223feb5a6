mod courses;

pub use courses::builtin_courses;

use crate::models::{SeoDefaults, SiteConfig};

pub const FALLBACK_CATEGORY_COLOR: &str = "emerald";
pub const FALLBACK_CATEGORY_ICON: &str = "bi-bookmark-fill";

const CATEGORY_COLORS: [(&str, &str); 7] = [
    ("Business", "emerald"),
    ("Health", "teal"),
    ("IT", "cyan"),
    ("Marketing", "emerald"),
    ("Photography", "teal"),
    ("Design", "cyan"),
    ("Developer", "emerald"),
];

const CATEGORY_ICONS: [(&str, &str); 7] = [
    ("Business", "bi-briefcase-fill"),
    ("Health", "bi-heart-pulse-fill"),
    ("IT", "bi-hdd-network-fill"),
    ("Marketing", "bi-megaphone-fill"),
    ("Photography", "bi-camera-fill"),
    ("Design", "bi-palette-fill"),
    ("Developer", "bi-code-slash"),
];

pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_CATEGORY_COLOR)
}

pub fn category_icon(category: &str) -> &'static str {
    CATEGORY_ICONS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_CATEGORY_ICON)
}

pub fn builtin_site() -> SiteConfig {
    SiteConfig {
        brand_name: "Ai8V | Mind & Machine".to_string(),
        whatsapp_number: "201556450850".to_string(),
        domain: "ttblabs.com".to_string(),
        currency: "EGP".to_string(),
        meta: SeoDefaults {
            tagline: "Learn. Build. Grow.".to_string(),
            description: "Expert-led online courses in Development, Design, Health, \
                          Marketing, Photography and more. Learn at your own pace \
                          with lifetime access and dedicated support."
                .to_string(),
            description_short: "Expert-led online courses with lifetime access \
                                and personal support."
                .to_string(),
            og_image: "/assets/img/og-image.png".to_string(),
            support_email: "support@ttblabs.com".to_string(),
            founding_year: "2026".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_falls_back() {
        assert_eq!(category_color("Health"), "teal");
        assert_eq!(category_color("Cooking"), FALLBACK_CATEGORY_COLOR);
        assert_eq!(category_icon("Cooking"), FALLBACK_CATEGORY_ICON);
    }

    #[test]
    fn builtin_dataset_has_eight_courses() {
        let courses = builtin_courses();
        assert_eq!(courses.len(), 8);
        assert!(courses.iter().all(|c| c.lessons == 13));
    }
}
