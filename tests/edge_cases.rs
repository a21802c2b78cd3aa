//! Edge case and error handling tests for treemd


use harness::{TestRepo, file_headings, run_treemd};

// ============================================================================
// Pruning
// ============================================================================

#[test]
fn test_empty_directory_produces_root_only() {
    let repo = TestRepo::new();

    let (stdout, _stderr, success) = run_treemd(repo.path(), &["-s"]);
    assert!(success);
    assert!(file_headings(&stdout).is_empty());
    assert!(!stdout.contains("── "), "no tree entries expected: {}", stdout);
    assert!(stdout.ends_with("# Files content\n"), "{:?}", stdout);
}

#[test]
fn test_deeply_nested_binary_only_pruned() {
    let repo = TestRepo::new();
    repo.add_binary("a/b/c/d/e/f/blob.bin");
    repo.add_dir("g/h/i");
    repo.add_file("keep.txt", "kept");

    let (stdout, _stderr, success) = run_treemd(repo.path(), &["-s"]);
    assert!(success);
    assert_eq!(file_headings(&stdout), vec!["keep.txt"]);
    for dir in ["── a", "── b", "── g", "── h"] {
        assert!(!stdout.contains(dir), "{} should be pruned: {}", dir, stdout);
    }
}

#[test]
fn test_directory_with_only_builtin_exclusions_pruned() {
    let repo = TestRepo::new();
    repo.add_file("web/package-lock.json", "{}");
    repo.add_file("web/.dockerignore", "node_modules");
    repo.add_file("main.rs", "fn main() {}");

    let (stdout, _stderr, success) = run_treemd(repo.path(), &["-s"]);
    assert!(success);
    assert!(!stdout.contains("── web"), "{}", stdout);
}

#[test]
fn test_directory_with_only_filtered_extensions_pruned() {
    let repo = TestRepo::new();
    repo.add_file("scripts/run.sh", "echo hi");
    repo.add_file("main.rs", "fn main() {}");

    let (stdout, _stderr, success) = run_treemd(repo.path(), &["-s", "-e", "rs"]);
    assert!(success);
    assert!(!stdout.contains("scripts"), "{}", stdout);
    assert_eq!(file_headings(&stdout), vec!["main.rs"]);
}

// ============================================================================
// File content edge cases
// ============================================================================

#[test]
fn test_empty_file_included() {
    let repo = TestRepo::new();
    repo.add_file("empty.txt", "");

    let (stdout, _stderr, success) = run_treemd(repo.path(), &["-s"]);
    assert!(success);
    assert!(stdout.contains("**empty.txt:**\n```\n\n```\n"), "{}", stdout);
}

#[test]
fn test_unicode_names_and_content() {
    let repo = TestRepo::new();
    repo.add_file("日本語.txt", "こんにちは 🦀");

    let (stdout, _stderr, success) = run_treemd(repo.path(), &["-s"]);
    assert!(success);
    assert_eq!(file_headings(&stdout), vec!["日本語.txt"]);
    assert!(stdout.contains("こんにちは 🦀"), "{}", stdout);
}

#[test]
fn test_hidden_files_included() {
    let repo = TestRepo::new();
    repo.add_file(".env.example", "KEY=value");
    repo.add_file(".config/settings.toml", "a = 1");

    let (stdout, _stderr, success) = run_treemd(repo.path(), &["-s", "--sort"]);
    assert!(success);
    assert_eq!(file_headings(&stdout), vec!["settings.toml", ".env.example"]);
}

#[test]
fn test_invalid_utf8_treated_as_binary() {
    let repo = TestRepo::new();
    let path = repo.path().join("latin1.txt");
    std::fs::write(&path, [b'c', b'a', b'f', 0xE9, b'!']).unwrap();
    repo.add_file("ok.txt", "ok");

    let (stdout, _stderr, success) = run_treemd(repo.path(), &["-s"]);
    assert!(success);
    assert_eq!(file_headings(&stdout), vec!["ok.txt"]);
}

#[test]
fn test_same_name_in_different_directories() {
    let repo = TestRepo::new();
    repo.add_file("a/mod.rs", "// a");
    repo.add_file("b/mod.rs", "// b");

    let (stdout, _stderr, success) = run_treemd(repo.path(), &["-s", "--sort"]);
    assert!(success);
    // Headings carry only the bare name
    assert_eq!(file_headings(&stdout), vec!["mod.rs", "mod.rs"]);
    assert!(stdout.find("// a").unwrap() < stdout.find("// b").unwrap());
}

#[test]
fn test_many_files() {
    let repo = TestRepo::new();
    for i in 0..200 {
        repo.add_file(&format!("dir_{}/file_{}.txt", i % 10, i), "x");
    }

    let (stdout, _stderr, success) = run_treemd(repo.path(), &["-s"]);
    assert!(success);
    assert_eq!(file_headings(&stdout).len(), 200);
}

// ============================================================================
// Symlinks and failures
// ============================================================================

#[cfg(unix)]
#[test]
fn test_symlink_to_directory_followed() {
    let repo = TestRepo::new();
    repo.add_file("realdir/file.rs", "fn file() {}");
    std::os::unix::fs::symlink(repo.path().join("realdir"), repo.path().join("linkdir")).unwrap();

    let (stdout, _stderr, success) = run_treemd(repo.path(), &["-s", "--sort"]);
    assert!(success);
    assert!(stdout.contains("── linkdir"), "{}", stdout);
    assert_eq!(file_headings(&stdout), vec!["file.rs", "file.rs"]);
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_fails_scan() {
    let repo = TestRepo::new();
    repo.add_file("real.rs", "fn real() {}");
    std::os::unix::fs::symlink("nonexistent.rs", repo.path().join("broken_link.rs")).unwrap();

    let (stdout, stderr, success) = run_treemd(repo.path(), &[]);
    assert!(!success, "broken symlink should abort the scan");
    assert!(stdout.is_empty(), "no partial document: {}", stdout);
    assert!(stderr.contains("treemd: error:"), "stderr: {}", stderr);
    assert!(stderr.contains("broken_link.rs"), "stderr: {}", stderr);
    assert!(!stderr.contains("Token count"), "stderr: {}", stderr);
}

#[cfg(unix)]
#[test]
fn test_ignored_broken_symlink_not_visited() {
    let repo = TestRepo::new();
    repo.add_file("real.rs", "fn real() {}");
    std::os::unix::fs::symlink("nonexistent.rs", repo.path().join("broken_link.rs")).unwrap();

    let (stdout, _stderr, success) = run_treemd(repo.path(), &["-s", "-I", "broken_*"]);
    assert!(success);
    assert_eq!(file_headings(&stdout), vec!["real.rs"]);
}

#[test]
fn test_not_a_git_repository_still_works() {
    let repo = TestRepo::new();
    repo.add_file(".gitignore", "*.log\n");
    repo.add_file("app.log", "not ignored without git");

    let (stdout, stderr, success) = run_treemd(repo.path(), &["-s"]);
    assert!(success);
    assert_eq!(file_headings(&stdout), vec!["app.log"]);
    assert!(stderr.is_empty(), "stderr: {}", stderr);
}
