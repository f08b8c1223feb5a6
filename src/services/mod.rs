pub mod access;
pub mod catalog;
pub mod curriculum;

pub use access::{AccessPolicy, Action, ActionKind};
pub use catalog::{Catalog, CatalogFilter, CategoryCount, LookupMiss, FEATURED_COUNT};
pub use curriculum::{CurriculumSummary, SectionSummary};
