//! Integration tests for loading catalog exports from disk.

use catalog::{CatalogError, CatalogIndex, PageRequest};
use std::fs;
use tempfile::tempdir;

const FIRST_EXPORT: &str = r#"{
    "products": [
        { "id": "p-1", "title": "Titleist Driver", "handle": "titleist-driver",
          "tags": ["drivers"], "priceRange": { "minVariantPrice": { "amount": "199.0", "currencyCode": "GBP" } } },
        { "id": "p-2", "title": "Callaway Putter", "handle": "callaway-putter",
          "tags": ["putters", "new"], "priceRange": { "minVariantPrice": { "amount": "149.0", "currencyCode": "GBP" } } }
    ],
    "collections": [ { "id": "c-1", "title": "Drivers", "handle": "drivers" } ]
}"#;

const SECOND_EXPORT: &str = r#"{
    "products": { "nodes": [
        { "id": "p-3", "title": "PING G430 Hybrid", "handle": "ping-g430-hybrid",
          "tags": ["hybrids", "good"], "priceRange": { "minVariantPrice": { "amount": "120.0", "currencyCode": "GBP" } } }
    ] }
}"#;

#[test]
fn test_load_directory_in_file_name_order() {
    let dir = tempdir().unwrap();
    // Written out of order on purpose
    fs::write(dir.path().join("02-hybrids.json"), SECOND_EXPORT).unwrap();
    fs::write(dir.path().join("01-clubs.json"), FIRST_EXPORT).unwrap();
    fs::write(dir.path().join("notes.txt"), "not an export").unwrap();

    let index = CatalogIndex::load(dir.path()).unwrap();
    let ids: Vec<&str> = index.products().iter().map(|p| p.id.as_str()).collect();

    assert_eq!(ids, vec!["p-1", "p-2", "p-3"]);
    assert_eq!(index.collections().len(), 1);
}

#[test]
fn test_load_single_file_and_page() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, FIRST_EXPORT).unwrap();

    let index = CatalogIndex::load(&path).unwrap();
    let page = index.page(&PageRequest::first(12)).unwrap();

    assert_eq!(page.len(), 2);
    assert!(!page.page_info.has_next_page);
}

#[test]
fn test_duplicate_ids_across_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.json"), FIRST_EXPORT).unwrap();
    fs::write(dir.path().join("b.json"), FIRST_EXPORT).unwrap();

    let result = CatalogIndex::load_from_dir(dir.path());
    assert!(matches!(result, Err(CatalogError::DuplicateProduct { .. })));
}

#[test]
fn test_missing_directory() {
    let dir = tempdir().unwrap();
    let result = CatalogIndex::load_from_dir(&dir.path().join("absent"));
    assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
}
