//! Platform services used by the detail view: file download and clipboard.
//!
//! The detail view only knows the [`Platform`] trait. [`DesktopPlatform`]
//! implements it over HTTP and the system clipboard; tests use in-memory
//! fakes.

use crate::model::PlatformError;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Side-effecting services the detail view depends on.
pub trait Platform: Send {
    /// Fetch `url` and store it at `dest`. Returns the written path.
    fn download(&self, url: &str, dest: &Path) -> Result<PathBuf, PlatformError>;

    /// Place `text` on the system clipboard.
    fn copy_to_clipboard(&self, text: &str) -> Result<(), PlatformError>;
}

// ===== Jobs =====

/// A platform action queued by the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformJob {
    /// Save the image behind `url` to `dest`.
    Download {
        /// Source image.
        url: String,
        /// Local file to write.
        dest: PathBuf,
    },
    /// Put `url` on the clipboard.
    CopyLink {
        /// Link to copy.
        url: String,
    },
}

impl PlatformJob {
    /// Run the job against `platform`.
    pub fn run(&self, platform: &dyn Platform) -> Result<(), PlatformError> {
        match self {
            PlatformJob::Download { url, dest } => platform.download(url, dest).map(|_| ()),
            PlatformJob::CopyLink { url } => platform.copy_to_clipboard(url),
        }
    }
}

// ===== DesktopPlatform =====

/// Downloads over HTTP with `ureq`; clipboard through `arboard`.
pub struct DesktopPlatform {
    agent: ureq::Agent,
}

impl DesktopPlatform {
    /// Platform whose downloads time out after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }
}

impl Platform for DesktopPlatform {
    fn download(&self, url: &str, dest: &Path) -> Result<PathBuf, PlatformError> {
        debug!(url, dest = %dest.display(), "downloading");

        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| PlatformError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| PlatformError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let path = save_bytes(dest, &bytes)?;
        info!(path = %path.display(), size = bytes.len(), "image saved");
        Ok(path)
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), PlatformError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| PlatformError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| PlatformError::Clipboard(e.to_string()))?;
        debug!("link copied to clipboard");
        Ok(())
    }
}

/// Write `bytes` to `dest`, creating missing parent directories.
pub(crate) fn save_bytes(dest: &Path, bytes: &[u8]) -> Result<PathBuf, PlatformError> {
    let write_err = |source| PlatformError::Write {
        path: dest.to_path_buf(),
        source,
    };
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(dest, bytes).map_err(write_err)?;
    Ok(dest.to_path_buf())
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records calls; fails every call when `fail` is set.
    #[derive(Clone, Default)]
    pub struct FakePlatform {
        pub calls: Arc<Mutex<Vec<PlatformJob>>>,
        pub fail: bool,
    }

    impl Platform for FakePlatform {
        fn download(&self, url: &str, dest: &Path) -> Result<PathBuf, PlatformError> {
            self.calls.lock().unwrap().push(PlatformJob::Download {
                url: url.to_string(),
                dest: dest.to_path_buf(),
            });
            if self.fail {
                return Err(PlatformError::Request {
                    url: url.to_string(),
                    reason: "offline".to_string(),
                });
            }
            Ok(dest.to_path_buf())
        }

        fn copy_to_clipboard(&self, text: &str) -> Result<(), PlatformError> {
            self.calls.lock().unwrap().push(PlatformJob::CopyLink {
                url: text.to_string(),
            });
            if self.fail {
                return Err(PlatformError::Clipboard("no display".to_string()));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakePlatform;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_bytes_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("nested/deeper/photo_150.jpg");

        let path = save_bytes(&dest, b"jpeg").unwrap();

        assert_eq!(path, dest);
        assert_eq!(fs::read(&dest).unwrap(), b"jpeg");
    }

    #[test]
    fn save_bytes_reports_write_failure_with_path() {
        let dir = TempDir::new().unwrap();
        // a directory cannot be overwritten as a file
        let err = save_bytes(dir.path(), b"x").unwrap_err();
        assert!(matches!(err, PlatformError::Write { ref path, .. } if path == dir.path()));
    }

    #[test]
    fn jobs_dispatch_to_platform() {
        let platform = FakePlatform::default();
        let download = PlatformJob::Download {
            url: "https://x/1.jpg".into(),
            dest: PathBuf::from("out/1.jpg"),
        };
        let copy = PlatformJob::CopyLink {
            url: "https://x/1.jpg".into(),
        };

        download.run(&platform).unwrap();
        copy.run(&platform).unwrap();

        assert_eq!(*platform.calls.lock().unwrap(), vec![download, copy]);
    }

    #[test]
    fn failing_platform_propagates_error() {
        let platform = FakePlatform {
            fail: true,
            ..Default::default()
        };
        let job = PlatformJob::CopyLink { url: "u".into() };
        assert!(matches!(
            job.run(&platform),
            Err(PlatformError::Clipboard(_))
        ));
    }
}
