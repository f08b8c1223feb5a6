use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub instructor: String,
    pub image: String,
    pub price: f64,
    pub students: u64,
    pub lessons: u32,
    pub rating: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Populated only for free courses. Paid content is resolved by the
    /// access service from the course id.
    #[serde(default)]
    pub drive_url: String,
    #[serde(default)]
    pub teacher_phone: Option<String>,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
    #[serde(default)]
    pub curriculum: Vec<CurriculumSection>,
    #[serde(default)]
    pub faq: Vec<FaqItem>,
}

impl Course {
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Course-specific WhatsApp number, if one is set and non-blank.
    pub fn contact_phone(&self) -> Option<&str> {
        self.teacher_phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumSection {
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    /// `"MM:SS"`; may be empty.
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub preview: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}
