use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use bx::app::App;
use bx::browser::Discovery;
use bx::profiles::ProfileStore;
use bx::theme::ThemeTokens;
use bx::view::{PickerPurpose, View};

fn make_app(dir: &tempfile::TempDir) -> App {
    let store = ProfileStore::open(dir.path().to_path_buf()).expect("open store");
    let discovery = Discovery {
        path: PathBuf::from("/nonexistent/bx-test-browser"),
        warning: None,
    };
    App::new(store, discovery, ThemeTokens::default())
}

fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
        .expect("handle key")
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn ctrl_c_quits_from_any_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(&dir);
    let quit = app
        .handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        .unwrap();
    assert!(quit);
}

#[test]
fn quit_menu_entry_exits() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(&dir);
    for _ in 0..3 {
        press(&mut app, KeyCode::Down);
    }
    assert!(press(&mut app, KeyCode::Enter));
}

#[test]
fn manage_menu_opens_delete_picker() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(&dir);
    press(&mut app, KeyCode::Down); // Manage Profiles
    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.view, View::Manage { .. }));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down); // Delete Profile
    press(&mut app, KeyCode::Enter);
    match &app.view {
        View::Picker { purpose, names, .. } => {
            assert_eq!(*purpose, PickerPurpose::Delete);
            assert_eq!(names, &["clean".to_string(), "default".to_string()]);
        }
        other => panic!("expected delete picker, got {other:?}"),
    }
}

#[test]
fn confirmed_delete_removes_profile() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(&dir);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter); // picker, "clean" selected first
    press(&mut app, KeyCode::Enter);
    assert!(matches!(&app.view, View::ConfirmDelete { name } if name == "clean"));

    press(&mut app, KeyCode::Char('y'));
    assert!(!app.store.contains("clean"));
    assert!(matches!(app.view, View::Main { .. }));
    assert_eq!(app.status.as_deref(), Some("Profile 'clean' deleted"));
    assert!(!app.status_is_error);
}

#[test]
fn declined_delete_keeps_profile() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(&dir);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('n'));
    assert!(app.store.contains("clean"));
    assert!(matches!(app.view, View::Main { .. }));
}

#[test]
fn add_flow_persists_new_profile() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(&dir);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter); // Manage
    press(&mut app, KeyCode::Enter); // Add New Profile
    assert!(matches!(app.view, View::Editor { field: None, .. }));

    press(&mut app, KeyCode::Char('1')); // edit name
    type_str(&mut app, "work");
    press(&mut app, KeyCode::Enter); // back to overview
    press(&mut app, KeyCode::Enter); // save
    assert!(app.store.contains("work"));
    assert!(matches!(app.view, View::Main { .. }));
    assert_eq!(app.status.as_deref(), Some("Profile 'work' created"));

    // New profile carries the default flags
    let reopened = ProfileStore::open(dir.path().to_path_buf()).unwrap();
    assert_eq!(
        reopened.get("work").unwrap().flags,
        bx::profiles::DEFAULT_FLAGS
    );
}

#[test]
fn duplicate_name_keeps_editor_open() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(&dir);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter); // Add
    press(&mut app, KeyCode::Char('1'));
    type_str(&mut app, "default");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter); // save attempt
    assert!(matches!(app.view, View::Editor { .. }));
    assert!(app.status_is_error);
    assert_eq!(app.status.as_deref(), Some("Profile 'default' already exists"));
}

#[test]
fn empty_name_keeps_editor_open() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(&dir);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter); // Add
    press(&mut app, KeyCode::Enter); // save with empty name
    assert!(matches!(app.view, View::Editor { .. }));
    assert!(app.status_is_error);
    assert_eq!(app.status.as_deref(), Some("Profile name is required"));
}

#[test]
fn esc_discards_in_progress_edit() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(&dir);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down); // Edit Profile
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter); // pick "clean"
    press(&mut app, KeyCode::Char('4')); // edit flags
    type_str(&mut app, " --extra");
    press(&mut app, KeyCode::Esc);
    assert!(matches!(app.view, View::Main { .. }));
    assert!(!app.store.get("clean").unwrap().flags.contains("--extra"));
}

#[test]
fn edit_picker_prefills_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(&dir);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter); // edit picker
    press(&mut app, KeyCode::Enter); // "clean"
    match &app.view {
        View::Editor { buffer, field } => {
            assert!(field.is_none());
            assert_eq!(buffer.original_name.as_deref(), Some("clean"));
            assert_eq!(buffer.name, "clean");
            assert_eq!(buffer.flags, bx::profiles::CLEAN_FLAGS);
        }
        other => panic!("expected editor, got {other:?}"),
    }
}

#[test]
fn backspace_edits_active_field() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(&dir);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter); // Add
    press(&mut app, KeyCode::Char('1'));
    type_str(&mut app, "abc");
    press(&mut app, KeyCode::Backspace);
    match &app.view {
        View::Editor { buffer, .. } => assert_eq!(buffer.name, "ab"),
        other => panic!("expected editor, got {other:?}"),
    }
}

#[test]
fn launch_prepares_work_dir_and_returns_to_main() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(&dir);
    press(&mut app, KeyCode::Enter); // Launch Browser
    assert!(matches!(
        app.view,
        View::Picker {
            purpose: PickerPurpose::Launch,
            ..
        }
    ));
    press(&mut app, KeyCode::Enter); // "clean"
    assert!(matches!(app.view, View::Main { .. }));
    // Outcome depends on whether a fallback spawner exists on this host, but
    // the work dir is always prepared first and a status is always reported.
    assert!(app.status.is_some());
    assert!(dir.path().join("clean").join("Local State").exists());
}

#[test]
fn clean_from_menu_reports_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(&dir);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down); // Clean Profile
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter); // "clean", never launched
    assert!(matches!(app.view, View::Main { .. }));
    assert_eq!(
        app.status.as_deref(),
        Some("Profile directory does not exist")
    );
    assert!(app.status_is_error);
}
