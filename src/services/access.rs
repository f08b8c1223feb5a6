use crate::dom::Element;
use crate::models::{Course, SiteConfig};
use crate::render::{access_path, format_price, sanitize_url, safe_href, whatsapp_url, PLACEHOLDER_HREF};

/// Purchase/access state of a course, decided by its price alone.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessPolicy {
    Free { drive_url: Option<String> },
    Paid { contact_url: String, access_path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    StartLearning,
    BuyViaWhatsapp,
    EnterCourse,
}

/// One call-to-action control in the sidebar card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub href: String,
    pub label: String,
    pub aria_label: String,
    pub new_tab: bool,
    pub disabled: bool,
}

impl AccessPolicy {
    pub fn for_course(course: &Course, site: &SiteConfig) -> Self {
        if course.is_free() {
            AccessPolicy::Free {
                drive_url: sanitize_url(&course.drive_url),
            }
        } else {
            AccessPolicy::Paid {
                contact_url: safe_href(&purchase_message_url(course, site)),
                access_path: access_path(course.id),
            }
        }
    }

    pub fn actions(&self, course: &Course, site: &SiteConfig) -> Vec<Action> {
        match self {
            AccessPolicy::Free { drive_url } => vec![Action {
                kind: ActionKind::StartLearning,
                href: drive_url.clone().unwrap_or_else(|| PLACEHOLDER_HREF.to_string()),
                label: "Start Learning Now".to_string(),
                aria_label: format!("Start learning {} for free", course.title),
                new_tab: drive_url.is_some(),
                disabled: drive_url.is_none(),
            }],
            AccessPolicy::Paid {
                contact_url,
                access_path,
            } => {
                let price = format_price(course.price, &site.currency);
                vec![
                    Action {
                        kind: ActionKind::BuyViaWhatsapp,
                        href: contact_url.clone(),
                        label: format!("Buy Now — {}", price),
                        aria_label: format!("Buy {} for {} via WhatsApp", course.title, price),
                        new_tab: true,
                        disabled: false,
                    },
                    Action {
                        kind: ActionKind::EnterCourse,
                        href: safe_href(access_path),
                        label: "Already Purchased? Enter Course".to_string(),
                        aria_label: "Access course — sign in to enter".to_string(),
                        new_tab: false,
                        disabled: false,
                    },
                ]
            }
        }
    }
}

/// WhatsApp number for a course, falling back to the platform number.
pub fn contact_number<'a>(course: &'a Course, site: &'a SiteConfig) -> &'a str {
    course.contact_phone().unwrap_or(site.whatsapp_number.as_str())
}

pub fn purchase_message(course: &Course, site: &SiteConfig) -> String {
    format!(
        "Hello, I want to purchase the course \"{}\" — Price: {}",
        course.title,
        format_price(course.price, &site.currency)
    )
}

fn purchase_message_url(course: &Course, site: &SiteConfig) -> String {
    whatsapp_url(contact_number(course, site), Some(&purchase_message(course, site)))
}

impl Action {
    pub fn to_element(&self) -> Element {
        let (class, icon) = match self.kind {
            ActionKind::StartLearning => ("btn-buy", "bi bi-play-circle-fill"),
            ActionKind::BuyViaWhatsapp => ("btn-buy", "bi bi-whatsapp"),
            ActionKind::EnterCourse => ("btn-enter-course", "bi bi-box-arrow-in-right"),
        };
        let class = if self.disabled {
            format!("{} disabled", class)
        } else {
            class.to_string()
        };

        let mut link = Element::new("a")
            .class(class)
            .attr("href", self.href.as_str())
            .attr("aria-label", self.aria_label.as_str());
        if self.new_tab {
            link = link.attr("target", "_blank").attr("rel", "noopener noreferrer");
        }
        if self.disabled {
            link = link.attr("aria-disabled", "true").attr("tabindex", "-1");
        }
        link.child(Element::icon(icon)).text(format!(" {}", self.label))
    }
}
