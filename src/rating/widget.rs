use serde::Serialize;
use tracing::{info, warn};

use crate::dom::{Document, Element, Node, Slot};
use crate::rating::{RatingService, RatingSummary, SubmitStatus};
use crate::render::{course_url, format_number, render_stars};
use crate::seo;

pub const LOADING_TEXT: &str = "Loading ratings...";
pub const EMPTY_TEXT: &str = "No ratings yet — be the first!";
pub const SUBMITTING_TEXT: &str = "Submitting your rating...";
pub const THANKS_TEXT: &str = "Thank you for your rating!";
pub const SUBMIT_FAILED_TEXT: &str = "Failed to submit. Please try again.";
pub const UNAVAILABLE_TEXT: &str = "Rating system not available";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingDisplay {
    Loading,
    Loaded { average: f64, count: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// What the card offers for rating a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingInput {
    /// Star buttons in a form posting back to the details page.
    Form,
    /// The rating service is not configured.
    Unavailable,
    /// No input at all; exported pages have nothing to post to.
    Omitted,
}

/// Live rating state for one course page.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingWidget {
    pub course_id: u32,
    pub display: RatingDisplay,
    pub input_enabled: bool,
    pub status: Option<(StatusKind, String)>,
}

impl RatingWidget {
    pub fn new(course_id: u32) -> Self {
        Self {
            course_id,
            display: RatingDisplay::Loading,
            input_enabled: true,
            status: None,
        }
    }

    /// One request, no retry. On failure the display stays as it was.
    pub async fn refresh(&mut self, service: &dyn RatingService) -> Option<RatingSummary> {
        match service.fetch_ratings(self.course_id).await {
            Ok(summary) if summary.error.is_none() => {
                self.display = RatingDisplay::Loaded {
                    average: summary.average.max(0.0),
                    count: summary.count,
                };
                Some(summary)
            }
            Ok(summary) => {
                warn!(course_id = self.course_id, error = ?summary.error, "rating service reported an error");
                None
            }
            Err(e) => {
                warn!(course_id = self.course_id, "failed to fetch ratings: {}", e);
                None
            }
        }
    }

    /// Sends a rating and refreshes on success. Input stays disabled after
    /// a successful submission and is re-enabled on failure.
    pub async fn submit(&mut self, service: &dyn RatingService, value: u8) -> bool {
        if !(1..=5).contains(&value) {
            self.status = Some((StatusKind::Error, "Please choose between 1 and 5 stars.".to_string()));
            return false;
        }

        self.input_enabled = false;
        self.status = Some((StatusKind::Info, SUBMITTING_TEXT.to_string()));

        let failure = match service.submit_rating(self.course_id, value).await {
            Ok(response) if response.status == SubmitStatus::Success => {
                info!(course_id = self.course_id, value, "rating submitted");
                self.status = Some((StatusKind::Success, THANKS_TEXT.to_string()));
                self.refresh(service).await;
                return true;
            }
            Ok(response) => response.message,
            Err(e) => {
                warn!(course_id = self.course_id, "failed to submit rating: {}", e);
                None
            }
        };

        self.input_enabled = true;
        let message = failure
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| SUBMIT_FAILED_TEXT.to_string());
        self.status = Some((StatusKind::Error, message));
        false
    }

    fn average(&self) -> f64 {
        match self.display {
            RatingDisplay::Loaded { average, .. } => average,
            RatingDisplay::Loading => 0.0,
        }
    }

    pub fn big_number_text(&self) -> String {
        match self.display {
            RatingDisplay::Loaded { average, .. } if average > 0.0 => format!("{:.1}", average),
            _ => "—".to_string(),
        }
    }

    pub fn count_text(&self) -> String {
        match self.display {
            RatingDisplay::Loading => LOADING_TEXT.to_string(),
            RatingDisplay::Loaded { count: 0, .. } => EMPTY_TEXT.to_string(),
            RatingDisplay::Loaded { count: 1, .. } => "1 rating".to_string(),
            RatingDisplay::Loaded { count, .. } => format!("{} ratings", format_number(count)),
        }
    }

    fn interactive_stars(&self) -> Element {
        let mut stars = render_stars(0.0, true);
        if !self.input_enabled {
            stars.set_attr("class", "stars-interactive stars-disabled");
            for child in stars.children.iter_mut() {
                if let Node::Element(button) = child {
                    button.set_attr("disabled", "disabled");
                    button.set_attr("tabindex", "-1");
                }
            }
        }
        stars
    }

    fn status_element(&self) -> Element {
        let (class, text) = match &self.status {
            Some((StatusKind::Success, text)) => ("rating-status success", text.as_str()),
            Some((StatusKind::Error, text)) => ("rating-status error", text.as_str()),
            Some((StatusKind::Info, text)) => ("rating-status", text.as_str()),
            None => ("rating-status", ""),
        };
        Element::new("p")
            .class(class)
            .id(&Slot::RatingStatus.id())
            .attr("role", "status")
            .text(text)
    }

    /// The rating card in its current state.
    pub fn render_card(&self, input: RatingInput) -> Element {
        let mut interactive = Element::new("div").id(&Slot::RatingInteractive.id());
        match input {
            RatingInput::Form => {
                interactive.append(
                    Element::new("form")
                        .class("rating-form")
                        .attr("method", "post")
                        .attr("action", course_url(self.course_id))
                        .child(self.interactive_stars()),
                );
            }
            RatingInput::Unavailable => {
                interactive.append(Element::new("p").class("rating-status").text(UNAVAILABLE_TEXT));
            }
            RatingInput::Omitted => {}
        }

        Element::new("div")
            .class("rating-card")
            .id("rating-card")
            .attr("data-course-id", self.course_id.to_string())
            .child(Element::new("h3").class("rating-card-title").text("Rate This Course"))
            .child(
                Element::new("p")
                    .class("rating-card-subtitle")
                    .text("Share your experience with other students"),
            )
            .child(
                Element::new("div")
                    .class("rating-big-number")
                    .id(&Slot::RatingBigNumber.id())
                    .text(self.big_number_text()),
            )
            .child(
                Element::new("div")
                    .id(&Slot::RatingDisplayStars.id())
                    .child(render_stars(self.average(), false)),
            )
            .child(
                Element::new("p")
                    .class("rating-count")
                    .id(&Slot::RatingCountText.id())
                    .text(self.count_text()),
            )
            .child(interactive)
            .child(self.status_element())
    }

    /// Inline rating shown in the sidebar meta list.
    pub fn meta_inline(average: f64) -> Element {
        let label = if average > 0.0 {
            format!(" {:.1}", average)
        } else {
            " —".to_string()
        };
        Element::new("span")
            .class("meta-rating-inline")
            .child(render_stars(average, false))
            .child(Element::new("span").text(label))
    }

    /// Pushes the loaded state into an already rendered page, including the
    /// `aggregateRating` patch on the Course structured data.
    pub fn apply(&self, doc: &mut Document) {
        let RatingDisplay::Loaded { average, count } = self.display else {
            return;
        };

        doc.set_text(Slot::RatingBigNumber, self.big_number_text());
        if let Some(stars) = doc.slot_mut(Slot::RatingDisplayStars) {
            stars.clear();
            stars.append(render_stars(average, false));
        }
        doc.set_text(Slot::RatingCountText, self.count_text());
        if let Some(meta) = doc.slot_mut(Slot::MetaRatingValue) {
            meta.clear();
            meta.append(Self::meta_inline(average));
        }

        if count > 0 {
            seo::patch_aggregate_rating(doc, average, count);
        }
    }
}
