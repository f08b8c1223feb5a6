use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::data;
use crate::error::{AppError, CatalogError};
use crate::models::Course;
use crate::services::curriculum::is_well_formed_duration;

pub const FEATURED_COUNT: usize = 3;

/// Why a course reference did not resolve. Both render the same
/// "not found" view; they are kept apart for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMiss {
    InvalidId,
    NoSuchCourse(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
    pub color: &'static str,
}

/// Catalog page query: exact category and free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Immutable, validated course table.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        validate(&courses)?;
        Ok(Self { courses })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(data::builtin_courses())
    }

    /// Dataset in the same camelCase shape the site has always shipped.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Ok(Self::new(courses)?)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!("Loaded {} courses from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Resolves the raw `id` query parameter to a course.
    pub fn resolve(&self, raw: Option<&str>) -> Result<&Course, LookupMiss> {
        let id = parse_course_id(raw).ok_or(LookupMiss::InvalidId)?;
        self.find(id).ok_or(LookupMiss::NoSuchCourse(id))
    }

    /// Most recent courses first; equal dates keep dataset order.
    pub fn featured(&self, count: usize) -> Vec<&Course> {
        let mut sorted: Vec<&Course> = self.courses.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(count);
        sorted
    }

    /// Course count per category, in first-seen order.
    pub fn categories(&self) -> Vec<CategoryCount> {
        let mut out: Vec<CategoryCount> = Vec::new();
        for course in &self.courses {
            match out.iter_mut().find(|c| c.name == course.category) {
                Some(entry) => entry.count += 1,
                None => out.push(CategoryCount {
                    name: course.category.clone(),
                    count: 1,
                    color: data::category_color(&course.category),
                }),
            }
        }
        out
    }

    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&Course> {
        let category = filter.category.as_deref().map(str::trim).filter(|c| !c.is_empty());
        let needle = filter
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let matches: Vec<&Course> = self
            .courses
            .iter()
            .filter(|c| category.is_none_or(|cat| c.category == cat))
            .filter(|c| needle.as_deref().is_none_or(|n| matches_search(c, n)))
            .collect();
        debug!(?filter, matched = matches.len(), "filtered catalog");
        matches
    }

    pub fn total_students(&self) -> u64 {
        self.courses.iter().map(|c| c.students).sum()
    }

    pub fn average_rating(&self) -> f64 {
        if self.courses.is_empty() {
            return 0.0;
        }
        self.courses.iter().map(|c| c.rating).sum::<f64>() / self.courses.len() as f64
    }
}

fn matches_search(course: &Course, needle: &str) -> bool {
    [&course.title, &course.description, &course.instructor]
        .into_iter()
        .chain(course.tags.iter())
        .any(|field| field.to_lowercase().contains(needle))
}

/// Positive integer ids only. Surrounding whitespace is tolerated; signs,
/// decimals and anything non-numeric are not.
pub fn parse_course_id(raw: Option<&str>) -> Option<u32> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u32>().ok().filter(|id| *id >= 1)
}

fn validate(courses: &[Course]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for course in courses {
        if course.id == 0 {
            return Err(CatalogError::ZeroId);
        }
        if !seen.insert(course.id) {
            return Err(CatalogError::DuplicateId(course.id));
        }
        if !course.price.is_finite() || course.price < 0.0 {
            return Err(CatalogError::InvalidPrice(course.id));
        }
        if !(0.0..=5.0).contains(&course.rating) {
            return Err(CatalogError::RatingOutOfRange(course.id));
        }
        let has_url = !course.drive_url.trim().is_empty();
        if course.is_free() && !has_url {
            return Err(CatalogError::FreeWithoutUrl(course.id));
        }
        if !course.is_free() && has_url {
            return Err(CatalogError::PaidWithUrl(course.id));
        }
        for lesson in course.curriculum.iter().flat_map(|s| s.lessons.iter()) {
            if !lesson.duration.is_empty() && !is_well_formed_duration(&lesson.duration) {
                return Err(CatalogError::MalformedDuration {
                    id: course.id,
                    lesson: lesson.title.clone(),
                    duration: lesson.duration.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().expect("builtin catalog is valid")
    }

    #[test]
    fn free_iff_drive_url() {
        for course in catalog().courses() {
            assert_eq!(course.price == 0.0, !course.drive_url.is_empty(), "course {}", course.id);
        }
    }

    #[test]
    fn parses_only_positive_integers() {
        assert_eq!(parse_course_id(Some("3")), Some(3));
        assert_eq!(parse_course_id(Some(" 3 ")), Some(3));
        for raw in ["0", "-1", "abc", "", "1.5", "+2", "99999999999"] {
            assert_eq!(parse_course_id(Some(raw)), None, "{raw:?}");
        }
        assert_eq!(parse_course_id(None), None);
    }

    #[test]
    fn resolve_distinguishes_invalid_from_missing() {
        let catalog = catalog();
        assert_eq!(catalog.resolve(Some("3")).map(|c| c.id), Ok(3));
        assert_eq!(catalog.resolve(Some("abc")).map(|c| c.id), Err(LookupMiss::InvalidId));
        assert_eq!(catalog.resolve(None).map(|c| c.id), Err(LookupMiss::InvalidId));
        assert_eq!(
            catalog.resolve(Some("42")).map(|c| c.id),
            Err(LookupMiss::NoSuchCourse(42))
        );
    }

    #[test]
    fn featured_are_newest_first() {
        let ids: Vec<u32> = catalog().featured(FEATURED_COUNT).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![6, 1, 2]);
    }

    #[test]
    fn featured_is_stable_on_ties_and_short_sets() {
        let mut courses = data::builtin_courses();
        courses.truncate(2);
        let date = courses[0].date;
        courses[1].date = date;
        let catalog = Catalog::new(courses).unwrap();
        let ids: Vec<u32> = catalog.featured(FEATURED_COUNT).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn categories_cover_every_course_once() {
        let catalog = catalog();
        let categories = catalog.categories();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Business", "Health", "IT", "Marketing", "Photography", "Design", "Developer"]
        );
        assert_eq!(categories.iter().map(|c| c.count).sum::<usize>(), catalog.len());
        assert_eq!(categories[1].count, 2);
        assert_eq!(categories[1].color, "teal");
    }

    #[test]
    fn unknown_category_gets_fallback_color() {
        let mut courses = data::builtin_courses();
        courses[0].category = "Cooking".to_string();
        let catalog = Catalog::new(courses).unwrap();
        assert_eq!(catalog.categories()[0].color, data::FALLBACK_CATEGORY_COLOR);
    }

    #[test]
    fn rejects_invariant_violations() {
        let mut courses = data::builtin_courses();
        courses[1].id = 1;
        assert_eq!(Catalog::new(courses).unwrap_err(), CatalogError::DuplicateId(1));

        let mut courses = data::builtin_courses();
        courses[0].drive_url = "https://example.com/secret".to_string();
        assert_eq!(Catalog::new(courses).unwrap_err(), CatalogError::PaidWithUrl(1));

        let mut courses = data::builtin_courses();
        courses[4].drive_url.clear();
        assert_eq!(Catalog::new(courses).unwrap_err(), CatalogError::FreeWithoutUrl(5));

        let mut courses = data::builtin_courses();
        courses[2].rating = 5.5;
        assert_eq!(Catalog::new(courses).unwrap_err(), CatalogError::RatingOutOfRange(3));
    }

    #[test]
    fn filters_by_category_and_search() {
        let catalog = catalog();
        let health = CatalogFilter {
            category: Some("Health".to_string()),
            search: None,
        };
        assert_eq!(catalog.filter(&health).len(), 2);

        let search = CatalogFilter {
            category: None,
            search: Some("  JAVASCRIPT ".to_string()),
        };
        let ids: Vec<u32> = catalog.filter(&search).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![8]);

        let by_tag = CatalogFilter {
            category: Some("Health".to_string()),
            search: Some("diet".to_string()),
        };
        let ids: Vec<u32> = catalog.filter(&by_tag).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn loads_camel_case_json() {
        let json = r#"[{
            "id": 9, "title": "T", "description": "D", "category": "IT",
            "level": "Beginner", "instructor": "I", "image": "x.png",
            "price": 0, "students": 1, "lessons": 1, "rating": 4,
            "date": "2025-01-01", "driveUrl": "https://example.com/free",
            "teacherPhone": "123",
            "curriculum": [{"title": "S", "lessons": [{"title": "L", "duration": "01:00", "preview": true}]}]
        }]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let course = catalog.find(9).unwrap();
        assert_eq!(course.contact_phone(), Some("123"));
        assert!(course.is_free());
    }
}
