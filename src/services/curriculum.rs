use crate::models::{CurriculumSection, Lesson};

/// Seconds in a `"MM:SS"` duration. Missing or malformed parts count as zero.
pub fn parse_duration(duration: &str) -> u32 {
    let mut parts = duration.split(':');
    let minutes = parse_part(parts.next());
    let seconds = parse_part(parts.next());
    minutes.saturating_mul(60).saturating_add(seconds)
}

fn parse_part(part: Option<&str>) -> u32 {
    part.and_then(|p| p.trim().parse::<u32>().ok()).unwrap_or(0)
}

/// Strict form used when validating a dataset: exactly `minutes:seconds`,
/// both numeric, seconds below 60.
pub fn is_well_formed_duration(duration: &str) -> bool {
    match duration.split_once(':') {
        Some((m, s)) => {
            !m.is_empty()
                && !s.is_empty()
                && m.chars().all(|c| c.is_ascii_digit())
                && s.chars().all(|c| c.is_ascii_digit())
                && s.parse::<u32>().map(|s| s < 60).unwrap_or(false)
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSummary {
    pub lessons: usize,
    pub seconds: u32,
}

impl SectionSummary {
    pub fn of(lessons: &[Lesson]) -> Self {
        Self {
            lessons: lessons.len(),
            seconds: lessons
                .iter()
                .map(|l| parse_duration(&l.duration))
                .fold(0, u32::saturating_add),
        }
    }

    /// Rounded up so a section never reads shorter than it is.
    pub fn minutes(&self) -> u32 {
        self.seconds.div_ceil(60)
    }

    pub fn meta_text(&self) -> String {
        format!("{} lessons • {} min", self.lessons, self.minutes())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurriculumSummary {
    pub sections: Vec<SectionSummary>,
    pub lessons: usize,
    pub seconds: u32,
}

impl CurriculumSummary {
    pub fn of(curriculum: &[CurriculumSection]) -> Self {
        let sections: Vec<SectionSummary> = curriculum
            .iter()
            .map(|s| SectionSummary::of(&s.lessons))
            .collect();
        let lessons = sections.iter().map(|s| s.lessons).sum();
        let seconds = sections.iter().map(|s| s.seconds).fold(0, u32::saturating_add);
        Self {
            sections,
            lessons,
            seconds,
        }
    }

    pub fn hours(&self) -> u32 {
        self.seconds / 3600
    }

    /// Minutes past the whole hours, rounded up.
    pub fn remainder_minutes(&self) -> u32 {
        (self.seconds % 3600).div_ceil(60)
    }

    pub fn duration_text(&self) -> String {
        let hours = self.hours();
        if hours > 0 {
            format!("{}h {}m total", hours, self.remainder_minutes())
        } else {
            format!("{}m total", self.remainder_minutes())
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "{} sections • {} lessons • {}",
            self.sections.len(),
            self.lessons,
            self.duration_text()
        )
    }
}
