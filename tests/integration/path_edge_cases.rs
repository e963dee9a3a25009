use finddups::duplicates::{DuplicateFinder, FinderConfig};
use finddups::scanner::{Walker, WalkerConfig};
use std::ffi::OsStr;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_deeply_nested_tree() {
    let dir = tempdir().unwrap();
    let mut deep = dir.path().to_path_buf();
    for i in 0..30 {
        deep = deep.join(format!("level_{i}"));
    }
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("bottom.txt"), "deep").unwrap();
    fs::write(dir.path().join("bottom.txt"), "deep").unwrap();

    let (report, _) = DuplicateFinder::with_defaults()
        .find_duplicates(dir.path())
        .unwrap();

    assert_eq!(report.same_size_and_hash.len(), 1);
    assert_eq!(report.same_name.len(), 1);
}

#[test]
fn test_only_empty_subdirectories() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
    fs::create_dir_all(dir.path().join("d")).unwrap();

    let files = Walker::new(dir.path(), WalkerConfig::default())
        .collect_files()
        .unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_unicode_and_space_names() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("über ordner")).unwrap();
    fs::write(dir.path().join("résumé final.pdf"), "cv").unwrap();
    fs::write(dir.path().join("über ordner/résumé final.docx"), "cv2").unwrap();

    let (report, _) = DuplicateFinder::with_defaults()
        .find_duplicates(dir.path())
        .unwrap();

    assert!(report.same_stem_diff_suffix.contains_key(OsStr::new("résumé final")));
}

#[test]
fn test_dotfiles_have_no_suffix() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env"), "A=1").unwrap();
    fs::write(dir.path().join("app.env"), "A=2").unwrap();

    let finder =
        DuplicateFinder::new(FinderConfig::default().with_extensions(Some(vec![".env".into()])));
    let (_, summary) = finder.find_duplicates(dir.path()).unwrap();

    // ".env" is a stem, not a suffix
    assert_eq!(summary.total_files, 1);
}

#[test]
fn test_relative_root_yields_relative_paths() {
    let base = std::path::Path::new(env!("CARGO_TARGET_TMPDIR"));
    let dir = tempfile::tempdir_in(base).unwrap();
    fs::write(dir.path().join("x.txt"), "x").unwrap();

    let cwd = std::env::current_dir().unwrap();
    // Only meaningful when the target dir lives under the working directory
    if let Ok(rel) = dir.path().strip_prefix(&cwd) {
        let files = Walker::new(rel, WalkerConfig::default())
            .collect_files()
            .unwrap();
        assert_eq!(files, vec![rel.join("x.txt")]);
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_names_are_not_false_duplicates() {
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    let first = dir.path().join("a").join(OsStr::from_bytes(b"x\xFF.txt"));
    let second = dir.path().join("b").join(OsStr::from_bytes(b"x\xFE.txt"));
    fs::write(&first, "one").unwrap();
    fs::write(&second, "two").unwrap();

    let (report, summary) = DuplicateFinder::with_defaults()
        .find_duplicates(dir.path())
        .unwrap();

    assert_eq!(summary.total_files, 2);
    assert!(report.same_name.is_empty());
    assert!(report.same_stem_diff_suffix.is_empty());
}
