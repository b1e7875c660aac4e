//! Tests for log file setup and what ends up in the log.

use super::*;
use serial_test::serial;
use std::io;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory writer for capturing formatted log lines.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(captured.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

// ===== prepare_log_target =====

#[test]
fn prepare_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("a/b/pixels.log");

    let (directory, file_name) = prepare_log_target(&log_path).unwrap();

    assert!(directory.is_dir());
    assert_eq!(directory, dir.path().join("a/b"));
    assert_eq!(file_name, "pixels.log");
}

#[test]
fn prepare_accepts_existing_directory() {
    let dir = TempDir::new().unwrap();
    let (directory, _) = prepare_log_target(&dir.path().join("x.log")).unwrap();
    assert_eq!(directory, dir.path());
}

#[test]
fn bare_file_name_logs_to_current_directory() {
    let (directory, file_name) = prepare_log_target(Path::new("pixels.log")).unwrap();
    assert_eq!(directory, PathBuf::from("."));
    assert_eq!(file_name, "pixels.log");
}

#[test]
fn path_without_file_name_is_invalid() {
    let result = prepare_log_target(Path::new("/"));
    assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
}

#[test]
fn directory_creation_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"").unwrap();

    let result = prepare_log_target(&blocker.join("sub/pixels.log"));

    assert!(matches!(
        result,
        Err(LoggingError::DirectoryCreation { .. })
    ));
}

// ===== init =====

#[test]
#[serial(tracing_init)]
fn init_creates_log_directory_even_if_subscriber_set() {
    let dir = TempDir::new().unwrap();
    let log_dir = dir.path().join("logs");

    // may fail if another test installed a global subscriber first
    let _ = init(&log_dir.join("pixels.log"));

    assert!(log_dir.exists(), "Log directory should be created");
}

// ===== Log contents =====

#[test]
fn encoded_url_is_logged_with_key_redacted() {
    use crate::api::{encode, BaseOptions, Endpoint};
    use crate::model::RequestParams;

    let endpoint = Endpoint::new("https://pixabay.com/api/", "SECRET-KEY");
    let params = RequestParams::for_page(1).with("q", "cats");

    let output = capture(|| {
        encode(&endpoint, &BaseOptions::default(), Some(&params));
    });

    assert!(output.contains("final url"), "got: {output}");
    assert!(output.contains("key=***"), "got: {output}");
    assert!(!output.contains("SECRET-KEY"), "key leaked: {output}");
}

#[test]
fn failed_fetch_is_logged_as_warning() {
    use crate::model::FetchError;
    use crate::state::Session;

    let mut session = Session::new();
    let request = session.initial_fetch();

    let output = capture(|| {
        session.apply_response(request.seq, Err(FetchError::Transport("timed out".into())));
    });

    assert!(output.contains("WARN"), "got: {output}");
    assert!(output.contains("timed out"), "got: {output}");
}
