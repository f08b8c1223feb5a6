use std::fs;
use std::path::{Path, PathBuf};

use coursesite::data::builtin_site;
use coursesite::pages::PageContext;
use coursesite::services::Catalog;
use coursesite::site::export;

/// First course link in `html`, as the page path it points to.
fn first_course_link(html: &str) -> Option<&str> {
    let start = html.find("href=\"/course/course-details/")? + "href=\"".len();
    let end = start + html[start..].find('"')?;
    Some(&html[start..end])
}

fn page_for(out: &Path, href: &str) -> PathBuf {
    out.join(href.trim_start_matches('/')).join("index.html")
}

#[test]
fn exports_every_page() {
    let site = builtin_site();
    let catalog = Catalog::builtin().expect("builtin catalog is valid");
    let ctx = PageContext::new(&site, &catalog, 2025);
    let tmp = tempfile::tempdir().expect("temp dir");
    let out = tmp.path();

    let report = export(&ctx, out).expect("export succeeds");
    assert_eq!(report.files.len(), 6 + catalog.len());

    for relative in ["index.html", "course/index.html", "about.html", "legal/privacy.html", "legal/terms.html"] {
        assert!(out.join(relative).is_file(), "{} missing", relative);
    }

    let details = fs::read_to_string(out.join("course/course-details/5/index.html")).unwrap();
    assert!(details.contains("Digital Marketing Fundamentals"));
    assert!(details.contains("Start Learning Now"));
    assert!(details.contains("Loading ratings..."));

    let missing = fs::read_to_string(out.join("course/course-details/index.html")).unwrap();
    assert!(missing.contains("Course Not Found"));
}

#[test]
fn custom_dataset_is_exported() {
    let json = r#"[{
        "id": 11,
        "title": "Sourdough at Home",
        "description": "Bake real bread.",
        "category": "Cooking",
        "level": "Beginner",
        "instructor": "Sam Baker",
        "image": "bread.png",
        "price": 15,
        "students": 42,
        "lessons": 1,
        "rating": 4.8,
        "date": "2025-09-01",
        "curriculum": [{ "title": "Starter", "lessons": [{ "title": "Feeding", "duration": "08:30", "preview": true }] }]
    }]"#;
    let site = builtin_site();
    let catalog = Catalog::from_json_str(json).expect("dataset is valid");
    let ctx = PageContext::new(&site, &catalog, 2025);
    let tmp = tempfile::tempdir().expect("temp dir");
    let out = tmp.path();

    export(&ctx, out).expect("export succeeds");
    let home = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(home.contains("bi-bookmark-fill"));
    assert!(home.contains("1 course"));

    let details = fs::read_to_string(out.join("course/course-details/11/index.html")).unwrap();
    assert!(details.contains("1 sections • 1 lessons • 9m total"));
}

#[test]
fn home_card_links_reach_course_pages() {
    let site = builtin_site();
    let catalog = Catalog::builtin().expect("builtin catalog is valid");
    let ctx = PageContext::new(&site, &catalog, 2025);
    let tmp = tempfile::tempdir().expect("temp dir");
    let out = tmp.path();

    export(&ctx, out).expect("export succeeds");
    let home = fs::read_to_string(out.join("index.html")).unwrap();
    let href = first_course_link(&home).expect("home links to a course");
    assert_eq!(href, "/course/course-details/6/");

    let target = fs::read_to_string(page_for(out, href)).expect("linked page exists");
    assert!(!target.contains("Course Not Found"));
    assert!(target.contains(&catalog.find(6).unwrap().title));
    assert!(target.contains("https://ttblabs.com/course/course-details/?id=6"));
    assert!(!target.contains("<form"));

    let listing = fs::read_to_string(out.join("course/index.html")).unwrap();
    for course in catalog.courses() {
        let href = format!("/course/course-details/{}/", course.id);
        assert!(listing.contains(&href));
        assert!(page_for(out, &href).is_file());
    }
}
