//! Binary import/export of the widget value.

use std::str::Utf8Error;
use std::time::SystemTime;

/// Media type of exported markdown content.
pub const MARKDOWN_MEDIA_TYPE: &str = "text/markdown";

/// An immutable byte buffer tagged with a media type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    bytes: Vec<u8>,
    media_type: String,
}

impl Blob {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
        }
    }

    /// A blob holding UTF-8 text.
    pub fn from_text(text: &str, media_type: impl Into<String>) -> Self {
        Self::new(text.as_bytes().to_vec(), media_type)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The blob's content as text; fails if the bytes are not UTF-8.
    pub fn text(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }
}

/// A named blob with a modification timestamp.
#[derive(Clone, Debug)]
pub struct File {
    blob: Blob,
    name: String,
    last_modified: SystemTime,
}

impl File {
    pub fn new(name: impl Into<String>, blob: Blob) -> Self {
        Self {
            blob,
            name: name.into(),
            last_modified: SystemTime::now(),
        }
    }

    pub fn with_last_modified(mut self, last_modified: SystemTime) -> Self {
        self.last_modified = last_modified;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_modified(&self) -> SystemTime {
        self.last_modified
    }

    pub fn blob(&self) -> &Blob {
        &self.blob
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trips_through_blob() {
        let blob = Blob::from_text("# Hi", MARKDOWN_MEDIA_TYPE);
        assert_eq!(blob.text(), Ok("# Hi"));
        assert_eq!(blob.media_type(), "text/markdown");
        assert_eq!(blob.len(), 4);
    }

    #[test]
    fn non_utf8_bytes_are_not_text() {
        let blob = Blob::new(vec![0xff, 0xfe], MARKDOWN_MEDIA_TYPE);
        assert!(blob.text().is_err());
    }

    #[test]
    fn file_carries_name_and_blob() {
        let file = File::new("notes.md", Blob::from_text("x", MARKDOWN_MEDIA_TYPE));
        assert_eq!(file.name(), "notes.md");
        assert_eq!(file.blob().text(), Ok("x"));
    }
}
