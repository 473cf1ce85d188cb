use deckconv::{Config, SectionStatus, convert, update_readme};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn create_repo_layout(decks: &[&str], readme: &str) -> (TempDir, Config) {
    let root = TempDir::new().expect("Failed to create temp dir");
    let deck_dir = root.path().join("presentations");
    fs::create_dir(&deck_dir).expect("Failed to create deck directory");
    for deck in decks {
        fs::write(deck_dir.join(deck), b"pptx stub").expect("Failed to write deck file");
    }
    fs::write(root.path().join("README.md"), readme).expect("Failed to write README");
    let config = Config::new(&deck_dir);
    (root, config)
}

fn readme_contents(root: &Path) -> String {
    fs::read_to_string(root.join("README.md")).expect("Failed to read README")
}

#[test]
fn test_full_readme_regeneration() {
    let (root, config) = create_repo_layout(
        &["01-intro.pptx", "03-closing.pptx", "02-deep-dive.pptx"],
        "# Course Materials\n\nWelcome.\n\n## Presentations\n\n#### 99. Stale\n- gone\n",
    );
    fs::write(
        config.base_dir().join("02-deep-dive_links.md"),
        "- [Recording](https://example.com/deep-dive)\n",
    )
    .expect("Failed to write links fragment");

    let status = update_readme(&config).expect("README update failed");
    assert_eq!(status, SectionStatus::Rewritten);

    let content = readme_contents(root.path());

    // Preamble survives verbatim, stale entries do not
    assert!(content.starts_with("# Course Materials\n\nWelcome.\n\n## Presentations\n\n"));
    assert!(!content.contains("Stale"));

    // Entries come out in lexicographic stem order
    let intro = content.find("#### 01. Intro").expect("Missing intro entry");
    let deep = content.find("#### 02. Deep Dive").expect("Missing deep-dive entry");
    let closing = content.find("#### 03. Closing").expect("Missing closing entry");
    assert!(intro < deep && deep < closing);

    // The links fragment lands inside its own entry, before the next one
    let fragment = content
        .find("- [Recording](https://example.com/deep-dive)")
        .expect("Missing links fragment");
    assert!(deep < fragment && fragment < closing);
}

#[test]
fn test_rerun_without_changes_is_byte_identical() {
    let (root, config) = create_repo_layout(&["01-intro.pptx"], "# Title\n");

    update_readme(&config).expect("First update failed");
    let first = readme_contents(root.path());

    update_readme(&config).expect("Second update failed");
    let second = readme_contents(root.path());

    assert_eq!(first, second);
}

#[test]
fn test_lock_artifact_is_indexed_but_not_converted() {
    // The index pass lists every *.pptx match, lock artifacts included;
    // only the conversion pass skips them.
    let (root, config) = create_repo_layout(&["01-intro.pptx", "~$02-wip.pptx"], "# Title\n");

    update_readme(&config).expect("README update failed");

    let content = readme_contents(root.path());
    assert!(content.contains("#### ~$02. Wip\n"));
    assert!(deckconv::is_temp_artifact("~$02-wip.pptx"));
}

#[test]
fn test_clean_stray_outputs_removes_leftovers() {
    let (_root, config) = create_repo_layout(&["01-intro.pptx"], "# Title\n");

    let stray: PathBuf = config.base_dir().join("~$01-intro_html");
    fs::create_dir(&stray).expect("Failed to create stray output dir");
    fs::write(stray.join("index.html"), b"<html></html>").expect("Failed to write stray file");

    let keep = config.base_dir().join("01-intro_html");
    fs::create_dir(&keep).expect("Failed to create output dir");

    convert::clean_stray_outputs(&config).expect("Cleanup failed");

    assert!(!stray.exists(), "Stray output dir should be removed");
    assert!(keep.exists(), "Regular output dir should be untouched");

    // A second pass finds nothing to remove and still succeeds
    convert::clean_stray_outputs(&config).expect("Cleanup rerun failed");
}
