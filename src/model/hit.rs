//! Image record returned by the search API.

use serde::{Deserialize, Serialize};

/// Fallback local file name when the preview URL has no usable last segment.
pub const DEFAULT_FILE_NAME: &str = "download";

/// One image record ("hit") from the search API.
///
/// Only the dimensions and the two URLs are required. Every other field the
/// API sends is kept in `extra` so the record can be passed around whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Pixabay image id.
    #[serde(default)]
    pub id: u64,

    /// Image page on pixabay.com.
    #[serde(rename = "pageURL", default)]
    pub page_url: String,

    /// Comma-separated tags.
    #[serde(default)]
    pub tags: String,

    /// Small thumbnail. Its last path segment names downloaded files.
    #[serde(rename = "previewURL")]
    pub preview_url: String,

    /// Medium-size rendition used for display, download and share.
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,

    /// Large rendition, when the API sends one.
    #[serde(rename = "largeImageURL", default)]
    pub large_image_url: Option<String>,

    /// Original width in pixels.
    #[serde(rename = "imageWidth")]
    pub image_width: u32,

    /// Original height in pixels.
    #[serde(rename = "imageHeight")]
    pub image_height: u32,

    /// View count.
    #[serde(default)]
    pub views: u64,

    /// Download count.
    #[serde(default)]
    pub downloads: u64,

    /// Like count.
    #[serde(default)]
    pub likes: u64,

    /// Uploader name.
    #[serde(default)]
    pub user: String,

    /// Every other field of the record, untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Orientation bucket derived from the original image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Wider than tall.
    Landscape,
    /// Taller than wide.
    Portrait,
    /// Equal sides.
    Square,
}

impl Orientation {
    /// Bucket for an image of `width` x `height`.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        match width.cmp(&height) {
            std::cmp::Ordering::Greater => Orientation::Landscape,
            std::cmp::Ordering::Less => Orientation::Portrait,
            std::cmp::Ordering::Equal => Orientation::Square,
        }
    }
}

impl Hit {
    /// Local file name for downloads: last `/`-separated segment of the
    /// preview URL, or [`DEFAULT_FILE_NAME`] if that segment is empty.
    pub fn file_name(&self) -> &str {
        match self.preview_url.rsplit('/').next() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_FILE_NAME,
        }
    }

    /// Orientation bucket of this image.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_dimensions(self.image_width, self.image_height)
    }

    /// Comma-separated tag string split into trimmed, non-empty tags.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal hit with the given id and dimensions.
    pub fn hit(id: u64, width: u32, height: u32) -> Hit {
        Hit {
            id,
            page_url: format!("https://pixabay.com/photos/{id}/"),
            tags: "sky, clouds".to_string(),
            preview_url: format!("https://cdn.pixabay.com/photo/{id}_150.jpg"),
            webformat_url: format!("https://pixabay.com/get/{id}_640.jpg"),
            large_image_url: None,
            image_width: width,
            image_height: height,
            views: 0,
            downloads: 0,
            likes: 0,
            user: "someone".to_string(),
            extra: serde_json::Map::new(),
        }
    }
}
