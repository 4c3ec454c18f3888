//! Integration tests for manifest generation through the library API

use super::test_utils::{fixture, read_lines};
use manifest_gen::tree::walker::WalkerConfig;
use manifest_gen::{generate, GenerateRequest, ManifestError, ManifestGenerator};
use std::fs;

#[test]
fn test_nested_tree_sorted_output() {
    let (_temp, root, output) = fixture(&["x.txt", "sub/y.txt"]);

    let report = ManifestGenerator::new(root, "https://h/b")
        .generate(&output)
        .unwrap();

    assert_eq!(report.entry_count, 2);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "https://h/b/sub/y.txt\nhttps://h/b/x.txt\n"
    );
}

#[test]
fn test_case_insensitive_full_url_order() {
    let (_temp, root, output) = fixture(&["a.txt", "sub/B.txt", "C.txt", "sub/a.txt"]);

    ManifestGenerator::new(root, "https://host/base")
        .generate(&output)
        .unwrap();

    assert_eq!(
        read_lines(&output),
        vec![
            "https://host/base/a.txt",
            "https://host/base/C.txt",
            "https://host/base/sub/a.txt",
            "https://host/base/sub/B.txt",
        ]
    );
}

#[test]
fn test_entry_count_matches_regular_files() {
    let (_temp, root, output) = fixture(&[
        "one.txt",
        "a/two.txt",
        "a/b/three.txt",
        "a/b/c/four.txt",
        "d/five.bin",
    ]);
    fs::create_dir_all(root.join("empty").join("nested")).unwrap();

    let report = ManifestGenerator::new(root, "https://h")
        .generate(&output)
        .unwrap();

    assert_eq!(report.entry_count, 5);
    assert_eq!(read_lines(&output).len(), 5);
}

#[test]
fn test_empty_directory_writes_empty_manifest() {
    let (_temp, root, output) = fixture(&[]);

    let report = ManifestGenerator::new(root, "https://h")
        .generate(&output)
        .unwrap();

    assert_eq!(report.entry_count, 0);
    assert!(output.exists());
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_missing_target_writes_empty_manifest_every_time() {
    let (temp, _root, output) = fixture(&[]);
    let missing = temp.path().join("no-such-folder");

    for _ in 0..2 {
        let report = ManifestGenerator::new(missing.clone(), "https://h")
            .generate(&output)
            .unwrap();
        assert_eq!(report.entry_count, 0);
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }
}

#[test]
fn test_trailing_slash_on_base_is_ignored() {
    let (temp, root, _output) = fixture(&["x.txt", "sub/y.txt"]);
    let with_slash = temp.path().join("with.txt");
    let without_slash = temp.path().join("without.txt");

    ManifestGenerator::new(root.clone(), "https://host/base/")
        .generate(&with_slash)
        .unwrap();
    ManifestGenerator::new(root, "https://host/base")
        .generate(&without_slash)
        .unwrap();

    assert_eq!(
        fs::read(&with_slash).unwrap(),
        fs::read(&without_slash).unwrap()
    );
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let (temp, root, output) = fixture(&["Zeta.md", "alpha/beta.md", "Alpha/gamma.md", "m.txt"]);
    let second = temp.path().join("second.txt");

    generate(&GenerateRequest::new(&root, "https://h/b", &output)).unwrap();
    generate(&GenerateRequest::new(&root, "https://h/b", &second)).unwrap();

    assert_eq!(fs::read(&output).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_urls_never_contain_backslash() {
    let (_temp, root, output) = fixture(&["a/b/c.txt", "d/e.txt"]);

    ManifestGenerator::new(root, "https://h")
        .generate(&output)
        .unwrap();

    for line in read_lines(&output) {
        assert!(!line.contains('\\'), "unexpected backslash in {}", line);
    }
}

#[test]
fn test_unicode_file_names_written_as_utf8() {
    let (_temp, root, output) = fixture(&["café/naïve.txt", "日本/ファイル.txt"]);

    ManifestGenerator::new(root, "https://h")
        .generate(&output)
        .unwrap();

    let lines = read_lines(&output);
    assert!(lines.contains(&"https://h/café/naïve.txt".to_string()));
    assert!(lines.contains(&"https://h/日本/ファイル.txt".to_string()));
}

#[test]
fn test_existing_manifest_is_replaced() {
    let (_temp, root, output) = fixture(&["only.txt"]);
    fs::create_dir_all(output.parent().unwrap()).unwrap();
    fs::write(&output, "https://old/1\nhttps://old/2\nhttps://old/3\n").unwrap();

    ManifestGenerator::new(root, "https://h")
        .generate(&output)
        .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "https://h/only.txt\n");
}

#[test]
fn test_exclude_prunes_directories() {
    let (_temp, root, output) = fixture(&["keep.txt", ".git/HEAD", "sub/.git/config", "sub/keep.txt"]);

    let config = WalkerConfig {
        ignore_patterns: vec![".git".to_string()],
        ..WalkerConfig::default()
    };
    let report = ManifestGenerator::with_walker_config(root, "https://h", config)
        .generate(&output)
        .unwrap();

    assert_eq!(report.entry_count, 2);
    assert_eq!(
        read_lines(&output),
        vec!["https://h/keep.txt", "https://h/sub/keep.txt"]
    );
}

#[test]
fn test_unwritable_output_is_output_write_error() {
    let (temp, root, _output) = fixture(&["a.txt"]);
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "file, not a directory").unwrap();

    let result = ManifestGenerator::new(root, "https://h").generate(&blocker.join("manifest.txt"));

    assert!(matches!(result, Err(ManifestError::OutputWrite { .. })));
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_aborts_without_manifest() {
    use std::os::unix::fs::PermissionsExt;

    let (_temp, root, output) = fixture(&["a.txt", "locked/secret.txt"]);
    let locked = root.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read the directory anyway; nothing to assert then
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = ManifestGenerator::new(root, "https://h").generate(&output);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(matches!(result, Err(ManifestError::DirectoryAccess { .. })));
    assert!(!output.exists());
}

#[test]
fn test_output_inside_target_is_listed_on_rerun() {
    let (_temp, root, _output) = fixture(&["a.txt"]);
    let output = root.join("manifest.txt");

    let first = ManifestGenerator::new(root.clone(), "https://h")
        .generate(&output)
        .unwrap();
    let second = ManifestGenerator::new(root, "https://h")
        .generate(&output)
        .unwrap();

    assert_eq!(first.entry_count, 1);
    assert_eq!(second.entry_count, 2);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_file_name_aborts_without_manifest() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let (_temp, root, output) = fixture(&["ok.txt"]);

    // Some filesystems refuse names that are not valid UTF-8; nothing to assert then
    let first = fs::write(root.join(OsStr::from_bytes(b"a\xff.txt")), "x");
    let second = fs::write(root.join(OsStr::from_bytes(b"a\xfe.txt")), "y");
    if first.is_err() || second.is_err() {
        return;
    }

    let result = ManifestGenerator::new(root, "https://h").generate(&output);

    match result {
        Err(ManifestError::DirectoryAccess { message, .. }) => {
            assert!(message.contains("UTF-8"), "message={}", message)
        }
        other => panic!("expected DirectoryAccess, got {:?}", other),
    }
    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn test_unreachable_target_aborts_without_manifest() {
    use std::os::unix::fs::PermissionsExt;

    let (temp, _root, output) = fixture(&[]);
    let parent = temp.path().join("guarded");
    let target = parent.join("site");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("index.html"), "<html>").unwrap();
    fs::set_permissions(&parent, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can search the directory anyway; nothing to assert then
    if fs::metadata(&target).is_ok() {
        fs::set_permissions(&parent, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = ManifestGenerator::new(target, "https://h").generate(&output);
    fs::set_permissions(&parent, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(matches!(result, Err(ManifestError::DirectoryAccess { .. })));
    assert!(!output.exists());
}
