//! Static export of every page to a directory tree that mirrors the
//! served routes.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::dom::Document;
use crate::error::AppError;
use crate::pages::{PageContext, PageKind, about, catalog, details, home, legal};
use crate::render::LinkStyle;
use crate::services::CatalogFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub files: Vec<PathBuf>,
}

/// Every page of the site keyed by its path relative to the export root.
/// Details pages are written once per course under
/// `course/course-details/<id>/` and every course link points there; the
/// bare details path holds the not-found view. Canonical URLs keep the
/// `?id=` form.
pub fn pages(ctx: &PageContext<'_>) -> Vec<(PathBuf, Document)> {
    let ctx = &ctx.with_links(LinkStyle::Path);
    let mut out = vec![
        (PathBuf::from("index.html"), home::render(ctx)),
        (
            PathBuf::from("course/index.html"),
            catalog::render(ctx, &CatalogFilter::default()),
        ),
        (
            PathBuf::from("course/course-details/index.html"),
            details::render_not_found(ctx),
        ),
        (PathBuf::from("about.html"), about::render(ctx)),
        (
            PathBuf::from("legal/privacy.html"),
            legal::render(ctx, PageKind::Privacy),
        ),
        (PathBuf::from("legal/terms.html"), legal::render(ctx, PageKind::Terms)),
    ];
    out.extend(ctx.catalog.courses().iter().map(|course| {
        (
            PathBuf::from(format!("course/course-details/{}/index.html", course.id)),
            details::render_static(ctx, course),
        )
    }));
    out
}

pub fn export(ctx: &PageContext<'_>, out_dir: &Path) -> Result<ExportReport, AppError> {
    let mut files = Vec::new();
    for (relative, doc) in pages(ctx) {
        let target = out_dir.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, doc.render())?;
        debug!("wrote {}", target.display());
        files.push(relative);
    }
    info!("Exported {} pages to {}", files.len(), out_dir.display());
    Ok(ExportReport { files })
}
