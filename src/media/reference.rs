use std::fmt;

/// Query marker that precedes the media identifier in a source URL.
const MEDIA_ID_MARKER: &str = "v=";

/// Identifier of the media behind a source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaId {
    Known(String),
    /// The source URL carried no `v=` marker (or nothing after it).
    Unknown,
}

impl MediaId {
    /// Extracts the identifier following the first `v=` in `source_url`.
    pub fn from_source_url(source_url: &str) -> Self {
        match source_url.split_once(MEDIA_ID_MARKER) {
            Some((_, id)) if !id.is_empty() => MediaId::Known(id.to_string()),
            _ => MediaId::Unknown,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaId::Known(id) => id,
            MediaId::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, MediaId::Known(_))
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single active media source of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaReference {
    source_url: String,
    media_id: MediaId,
}

impl MediaReference {
    pub fn new(source_url: impl Into<String>) -> Self {
        let source_url = source_url.into();
        let media_id = MediaId::from_source_url(&source_url);
        Self { source_url, media_id }
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn media_id(&self) -> &MediaId {
        &self.media_id
    }
}
