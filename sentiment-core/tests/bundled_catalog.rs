use std::path::PathBuf;

use sentiment_core::{Catalog, ContentType, Emotion};

fn bundled_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join("content.json")
}

#[test]
fn test_bundled_catalog_decodes() {
    let catalog = Catalog::try_load(&bundled_catalog_path()).expect("bundled catalog should decode");
    assert_eq!(catalog.len(), Emotion::ALL.len() * ContentType::ALL.len());
}

#[test]
fn test_bundled_catalog_has_no_issues() {
    let catalog = Catalog::load(&bundled_catalog_path());
    let issues = catalog.validate();
    assert!(issues.is_empty(), "catalog issues: {:?}", issues);
}

#[test]
fn test_every_mood_has_every_content_type() {
    let catalog = Catalog::load(&bundled_catalog_path());
    for emotion in Emotion::ALL {
        for (content_type, pick) in catalog.select_all_types(emotion) {
            let pick = pick.unwrap_or_else(|| panic!("no {} for {}", content_type, emotion));
            assert_eq!(pick.emotion, emotion);
            assert_eq!(pick.content_type, content_type);
        }
    }
}
