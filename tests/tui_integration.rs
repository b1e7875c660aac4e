//! Integration tests for the TUI over a TestBackend
//!
//! These tests drive the whole app through key events with in-memory search
//! and platform services, without a real terminal or network.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pixels::api::{BaseOptions, Endpoint, RequestDescriptor, SearchClient, SearchResponse};
use pixels::model::{Category, FetchError, Hit, PlatformError};
use pixels::platform::Platform;
use pixels::state::{AppState, Focus, Session};
use pixels::view::{Services, TuiApp};
use ratatui::backend::TestBackend;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

// ===== Test Doubles =====

/// Answers every request with two hits and remembers the query strings.
#[derive(Clone, Default)]
struct RecordingClient {
    queries: Arc<Mutex<Vec<Vec<(String, String)>>>>,
}

impl RecordingClient {
    fn queries(&self) -> Vec<Vec<(String, String)>> {
        self.queries.lock().unwrap().clone()
    }

    fn last_param(&self, key: &str) -> Option<String> {
        self.queries()
            .last()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

impl SearchClient for RecordingClient {
    fn search(&self, request: &RequestDescriptor) -> Result<SearchResponse, FetchError> {
        let mut queries = self.queries.lock().unwrap();
        queries.push(request.query().to_vec());
        let base = queries.len() as u64 * 10;
        let hits = (base..base + 2)
            .map(|id| {
                serde_json::from_value::<Hit>(serde_json::json!({
                    "id": id,
                    "tags": "forest, path",
                    "previewURL": format!("https://cdn.pixabay.com/photo/{id}_150.jpg"),
                    "webformatURL": format!("https://pixabay.com/get/{id}_640.jpg"),
                    "imageWidth": 640,
                    "imageHeight": 480,
                }))
                .unwrap()
            })
            .collect();
        Ok(SearchResponse {
            hits: Some(hits),
            total_hits: Some(2),
        })
    }
}

/// Clipboard that keeps the last copied text.
#[derive(Clone, Default)]
struct MemoryPlatform {
    clipboard: Arc<Mutex<Option<String>>>,
}

impl Platform for MemoryPlatform {
    fn download(&self, _url: &str, dest: &Path) -> Result<PathBuf, PlatformError> {
        Ok(dest.to_path_buf())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), PlatformError> {
        *self.clipboard.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

// ===== Helpers =====

fn start_app(
    session: Session,
    client: RecordingClient,
    platform: MemoryPlatform,
) -> TuiApp<TestBackend> {
    let services = Services {
        client: Box::new(client),
        platform: Box::new(platform),
        endpoint: Endpoint::new("https://pixabay.com/api/", "KEY"),
        base: BaseOptions::default(),
    };
    let state = AppState::new(session, PathBuf::from("/tmp/pixels-it"), Duration::from_millis(400));
    let mut app = TuiApp::with_backend(TestBackend::new(120, 40), state, services).unwrap();
    app.start().unwrap();
    app
}

/// Wait until the app has no fetch in flight and `count` requests were made.
fn settled(client: &RecordingClient, count: usize) -> impl Fn(&TuiApp<TestBackend>) -> bool + '_ {
    move |a| client.queries().len() == count && !a.app_state().session().is_loading()
}

fn wait_for<F>(app: &mut TuiApp<TestBackend>, done: F)
where
    F: Fn(&TuiApp<TestBackend>) -> bool,
{
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(app) {
        assert!(Instant::now() < deadline, "timed out waiting for app");
        app.pump(Instant::now());
        thread::sleep(Duration::from_millis(5));
    }
    app.draw().unwrap();
}

fn key(app: &mut TuiApp<TestBackend>, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now())
}

fn screen(app: &TuiApp<TestBackend>) -> String {
    let buffer = app.terminal().backend().buffer();
    let area = buffer.area();
    let mut lines = Vec::new();
    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

// ===== Tests =====

#[test]
fn test_q_key_triggers_quit() {
    let mut app = start_app(Session::new(), RecordingClient::default(), MemoryPlatform::default());
    assert!(key(&mut app, KeyCode::Char('q')));
}

#[test]
fn test_category_pick_fetches_and_renders() {
    let client = RecordingClient::default();
    let mut app = start_app(Session::new(), client.clone(), MemoryPlatform::default());

    // Tab to the category row, move to "nature", pick it
    key(&mut app, KeyCode::Tab);
    assert_eq!(app.app_state().focus, Focus::Categories);
    key(&mut app, KeyCode::Right);
    key(&mut app, KeyCode::Right);
    key(&mut app, KeyCode::Enter);

    wait_for(&mut app, settled(&client, 2));
    assert_eq!(app.app_state().session().results().len(), 2);
    assert_eq!(app.app_state().session().active_category(), Some(Category::Nature));
    assert_eq!(client.last_param("category").as_deref(), Some("nature"));
    assert!(screen(&app).contains("forest, path"));
}

#[test]
fn test_filter_sheet_apply_sends_filter() {
    let client = RecordingClient::default();
    let mut app = start_app(Session::new(), client.clone(), MemoryPlatform::default());

    key(&mut app, KeyCode::Char('f'));
    // Order section, move to "latest" and select it, then apply
    key(&mut app, KeyCode::Right);
    key(&mut app, KeyCode::Enter);
    key(&mut app, KeyCode::Char('a'));

    wait_for(&mut app, settled(&client, 2));
    assert_eq!(client.last_param("order").as_deref(), Some("latest"));
    assert!(screen(&app).contains("order: latest"));
}

#[test]
fn test_share_copies_webformat_url() {
    let client = RecordingClient::default();
    let platform = MemoryPlatform::default();
    let mut app = start_app(Session::new(), client.clone(), platform.clone());

    wait_for(&mut app, settled(&client, 1));

    key(&mut app, KeyCode::Enter);
    app.draw().unwrap();
    key(&mut app, KeyCode::Char('s'));

    wait_for(&mut app, |a| a.app_state().toasts.current().is_some());
    assert_eq!(
        platform.clipboard.lock().unwrap().as_deref(),
        Some("https://pixabay.com/get/10_640.jpg")
    );
    assert!(screen(&app).contains("Link Copied"));
}

#[test]
fn test_help_overlay_swallows_keys() {
    let mut app = start_app(Session::new(), RecordingClient::default(), MemoryPlatform::default());

    key(&mut app, KeyCode::Char('?'));
    assert!(app.app_state().help_visible);
    key(&mut app, KeyCode::Char('f'));
    assert!(!app.app_state().filter_modal.is_visible());

    key(&mut app, KeyCode::Esc);
    assert!(!app.app_state().help_visible);
}

#[test]
fn test_preset_search_is_first_request() {
    let client = RecordingClient::default();
    let session = Session::with_preset(Some("sunset beach".to_string()), None);
    let mut app = start_app(session, client.clone(), MemoryPlatform::default());

    wait_for(&mut app, settled(&client, 1));
    assert_eq!(client.last_param("q").as_deref(), Some("sunset%20beach"));
    assert!(screen(&app).contains("2 of 2 images"));
}
