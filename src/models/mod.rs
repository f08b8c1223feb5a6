pub mod course;
pub mod site;

pub use course::{Course, CurriculumSection, FaqItem, Lesson};
pub use site::{SeoDefaults, SiteConfig};
