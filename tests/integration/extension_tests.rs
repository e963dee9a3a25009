use finddups::cli::normalize_extensions;
use finddups::duplicates::{DuplicateFinder, FinderConfig};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn finder_for(extensions: &[&str]) -> DuplicateFinder {
    let raw: Vec<String> = extensions.iter().map(|e| (*e).to_string()).collect();
    DuplicateFinder::new(FinderConfig::default().with_extensions(Some(normalize_extensions(&raw))))
}

fn create_mixed_tree(root: &std::path::Path) {
    fs::write(root.join("file1.txt"), "Content A").unwrap();
    fs::write(root.join("file2.txt"), "Content A").unwrap();
    fs::write(root.join("file3.jpg"), "Content B").unwrap();
    fs::write(root.join("file4.jpg"), "Content B").unwrap();
    fs::write(root.join("file5.md"), "Content C").unwrap();
}

#[test]
fn test_txt_filter_excludes_jpg() {
    let dir = tempdir().unwrap();
    create_mixed_tree(dir.path());

    let (report, summary) = finder_for(&[".txt"]).find_duplicates(dir.path()).unwrap();

    assert_eq!(summary.total_files, 2);
    assert_eq!(report.same_size_and_hash.len(), 1);
    let group: HashSet<PathBuf> = report.same_size_and_hash.values().next().unwrap().iter().cloned().collect();
    assert_eq!(
        group,
        HashSet::from([dir.path().join("file1.txt"), dir.path().join("file2.txt")])
    );
}

#[test]
fn test_jpg_filter_excludes_txt() {
    let dir = tempdir().unwrap();
    create_mixed_tree(dir.path());

    let (report, _) = finder_for(&["jpg"]).find_duplicates(dir.path()).unwrap();

    assert_eq!(report.same_size_and_hash.len(), 1);
    for (_, groups) in report.iter() {
        for file in groups.into_iter().flatten() {
            assert_eq!(file.extension().unwrap(), "jpg");
        }
    }
}

#[test]
fn test_every_reported_file_matches_filter() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("notes.txt"), "same").unwrap();
    fs::write(root.join("sub/notes.txt"), "same").unwrap();
    fs::write(root.join("notes.md"), "same").unwrap();
    fs::write(root.join("notes.log"), "same").unwrap();

    let (report, _) = finder_for(&["txt", ".md"]).find_duplicates(root).unwrap();
    let allowed = ["txt", "md"];

    for (_, groups) in report.iter() {
        for file in groups.into_iter().flatten() {
            let ext = file.extension().unwrap().to_str().unwrap();
            assert!(allowed.contains(&ext), "unexpected file {}", file.display());
        }
    }
    assert_eq!(report.same_size_and_hash.values().next().unwrap().len(), 3);
    assert_eq!(report.same_stem_diff_suffix.values().next().unwrap().len(), 2);
}

#[test]
fn test_normalization_scenario() {
    let raw = vec!["txt".to_string(), ".jpg".to_string()];
    assert_eq!(normalize_extensions(&raw), vec![".txt", ".jpg"]);
}
