//! State for the image detail view.
//!
//! Opened with the full selected [`Hit`]. Download and share are
//! single-flight: an action starts only from [`DetailStatus::Idle`] and the
//! status returns to idle when the platform job settles.

use crate::layout::{detail_view_size, Size, Viewport};
use crate::model::{Hit, PlatformError};
use crate::platform::PlatformJob;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Toast shown after a successful download.
pub const DOWNLOADED_MESSAGE: &str = "Image downloaded";

/// Toast shown after the link was copied.
pub const LINK_COPIED_MESSAGE: &str = "Link Copied";

/// Detail view activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailStatus {
    /// Image not yet shown.
    Loading,
    /// Shown; download and share are available.
    Idle,
    /// Download job running.
    Downloading,
    /// Copy-link job running.
    Sharing,
}

/// Detail view state for one hit.
#[derive(Debug, Clone)]
pub struct DetailState {
    hit: Hit,
    status: DetailStatus,
    file_path: PathBuf,
    running: Option<PlatformJob>,
}

impl DetailState {
    /// Open on `hit`; downloads land in `download_dir`.
    pub fn open(hit: Hit, download_dir: &Path) -> Self {
        let file_path = download_dir.join(hit.file_name());
        info!(id = hit.id, "detail opened");
        Self {
            hit,
            status: DetailStatus::Loading,
            file_path,
            running: None,
        }
    }

    /// The hit this view was opened with.
    pub fn hit(&self) -> &Hit {
        &self.hit
    }

    /// Current activity.
    pub fn status(&self) -> DetailStatus {
        self.status
    }

    /// Where a download will be written.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Image box for the current viewport.
    pub fn box_size(&self, viewport: Viewport) -> Size {
        detail_view_size(
            self.hit.image_width,
            self.hit.image_height,
            viewport.width,
            viewport.breakpoint().is_web_like(),
        )
    }

    /// The view has been drawn once; actions become available.
    pub fn mark_rendered(&mut self) {
        if self.status == DetailStatus::Loading {
            self.status = DetailStatus::Idle;
        }
    }

    /// Begin downloading. `None` unless idle.
    pub fn start_download(&mut self) -> Option<PlatformJob> {
        if self.status != DetailStatus::Idle {
            return None;
        }
        self.status = DetailStatus::Downloading;
        let job = PlatformJob::Download {
            url: self.hit.webformat_url.clone(),
            dest: self.file_path.clone(),
        };
        self.running = Some(job.clone());
        Some(job)
    }

    /// Begin sharing (copying the link). `None` unless idle.
    pub fn start_share(&mut self) -> Option<PlatformJob> {
        if self.status != DetailStatus::Idle {
            return None;
        }
        self.status = DetailStatus::Sharing;
        let job = PlatformJob::CopyLink {
            url: self.hit.webformat_url.clone(),
        };
        self.running = Some(job.clone());
        Some(job)
    }

    /// Settle the running action. Returns the toast message on success.
    ///
    /// A job this view did not start (or no longer runs) is dropped and
    /// leaves the status alone.
    pub fn settle(
        &mut self,
        job: &PlatformJob,
        result: Result<(), PlatformError>,
    ) -> Option<&'static str> {
        if self.running.as_ref() != Some(job) {
            debug!(?job, status = ?self.status, "dropping foreign platform result");
            return None;
        }
        self.running = None;
        self.status = DetailStatus::Idle;
        match (job, result) {
            (PlatformJob::Download { .. }, Ok(())) => Some(DOWNLOADED_MESSAGE),
            (PlatformJob::CopyLink { .. }, Ok(())) => Some(LINK_COPIED_MESSAGE),
            (_, Err(e)) => {
                warn!(error = %e, "platform action failed");
                None
            }
        }
    }
}
