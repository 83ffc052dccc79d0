use crate::media::MediaId;

const THUMBNAIL_HOST: &str = "https://img.youtube.com/vi";
const THUMBNAIL_FILE: &str = "maxresdefault.jpg";

/// Full-resolution thumbnail URL for a media identifier. The image is never
/// probed; a missing thumbnail is left for the view to handle.
pub fn thumbnail_url(media_id: &str) -> String {
    format!("{}/{}/{}", THUMBNAIL_HOST, media_id, THUMBNAIL_FILE)
}

/// CSS `background-image` value for a media identifier.
pub fn background_url(media_id: &str) -> String {
    format!("url({})", thumbnail_url(media_id))
}

/// Background for a resolved identifier; `Unknown` still yields a well-formed URL.
pub fn background_for(media_id: &MediaId) -> String {
    background_url(media_id.as_str())
}
