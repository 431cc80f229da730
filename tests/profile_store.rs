use std::fs;

use bx::profiles::{clean_work_dir, Profile, ProfileStore, CLEAN_FLAGS, DEFAULT_FLAGS, NO_PROXY};
use bx::Error;

fn profile(name: &str) -> Profile {
    Profile {
        name: name.to_string(),
        proxy: NO_PROXY.to_string(),
        proxy_type: NO_PROXY.to_string(),
        flags: DEFAULT_FLAGS.to_string(),
    }
}

#[test]
fn first_run_seeds_default_and_clean() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ProfileStore::open(dir.path().to_path_buf()).expect("open");
    assert_eq!(store.names(), vec!["clean".to_string(), "default".to_string()]);
    assert_eq!(store.get("default").unwrap().flags, DEFAULT_FLAGS);
    assert_eq!(store.get("clean").unwrap().flags, CLEAN_FLAGS);
    assert!(dir.path().join("profiles.conf").exists());
}

#[test]
fn upsert_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let mut store = ProfileStore::open(dir.path().to_path_buf()).expect("open");
        let mut p = profile("work");
        p.proxy = "127.0.0.1:8080".to_string();
        p.proxy_type = "http".to_string();
        store.upsert(p).expect("upsert");
    }
    let store = ProfileStore::open(dir.path().to_path_buf()).expect("reopen");
    let p = store.get("work").expect("work profile persisted");
    assert_eq!(p.proxy, "127.0.0.1:8080");
    assert_eq!(p.proxy_type, "http");
}

#[test]
fn malformed_lines_are_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("profiles.conf"),
        "# comment\n\nshort|line\ngood|none|none|--flag\n",
    )
    .expect("write store file");
    let store = ProfileStore::open(dir.path().to_path_buf()).expect("open");
    assert_eq!(store.names(), vec!["good".to_string()]);
    assert_eq!(store.get("good").unwrap().flags, "--flag");
}

#[test]
fn extra_pipe_segments_are_discarded() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("profiles.conf"),
        "p|none|none|--a --b|trailing|junk\n",
    )
    .expect("write store file");
    let store = ProfileStore::open(dir.path().to_path_buf()).expect("open");
    assert_eq!(store.get("p").unwrap().flags, "--a --b");
}

#[test]
fn rename_removes_old_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ProfileStore::open(dir.path().to_path_buf()).expect("open");
    store.upsert(profile("old")).expect("upsert");
    store
        .apply_edit(Some("old"), profile("new"))
        .expect("rename");
    assert!(!store.contains("old"));
    assert!(store.contains("new"));

    let reopened = ProfileStore::open(dir.path().to_path_buf()).expect("reopen");
    assert!(!reopened.contains("old"));
    assert!(reopened.contains("new"));
}

#[test]
fn rename_collision_leaves_store_unchanged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ProfileStore::open(dir.path().to_path_buf()).expect("open");
    store.upsert(profile("a")).expect("upsert a");
    store.upsert(profile("b")).expect("upsert b");
    let err = store.apply_edit(Some("a"), profile("b")).unwrap_err();
    assert!(matches!(err, Error::DuplicateName(name) if name == "b"));
    assert!(store.contains("a"));
    assert!(store.contains("b"));
}

#[test]
fn add_with_existing_name_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ProfileStore::open(dir.path().to_path_buf()).expect("open");
    let err = store.apply_edit(None, profile("default")).unwrap_err();
    assert!(matches!(err, Error::DuplicateName(_)));
}

#[test]
fn empty_name_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ProfileStore::open(dir.path().to_path_buf()).expect("open");
    let err = store.apply_edit(None, profile("")).unwrap_err();
    assert!(matches!(err, Error::EmptyName));
}

#[test]
fn editing_in_place_keeps_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ProfileStore::open(dir.path().to_path_buf()).expect("open");
    let mut p = profile("default");
    p.flags = "--changed".to_string();
    store.apply_edit(Some("default"), p).expect("edit");
    assert_eq!(store.get("default").unwrap().flags, "--changed");
    assert_eq!(store.len(), 2);
}

#[test]
fn remove_persists_and_reports_existence() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ProfileStore::open(dir.path().to_path_buf()).expect("open");
    assert!(store.remove("default").expect("remove"));
    assert!(!store.remove("default").expect("second remove"));

    let reopened = ProfileStore::open(dir.path().to_path_buf()).expect("reopen");
    assert!(!reopened.contains("default"));
}

#[test]
fn clean_empties_dir_but_keeps_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let work = dir.path().join("default");
    fs::create_dir_all(work.join("Cache")).expect("mkdir");
    fs::write(work.join("Local State"), "{}").expect("write file");

    let removed = clean_work_dir(&work).expect("clean");
    assert_eq!(removed, 2);
    assert!(work.exists());
    assert_eq!(fs::read_dir(&work).unwrap().count(), 0);
}

#[test]
fn clean_missing_dir_fails_without_creating_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let work = dir.path().join("never-launched");
    let err = clean_work_dir(&work).unwrap_err();
    assert!(matches!(err, Error::WorkDirMissing));
    assert!(!work.exists());
}
