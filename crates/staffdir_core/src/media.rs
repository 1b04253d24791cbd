//! Local avatar storage.
//!
//! # Responsibility
//! - Decode base64 image data URLs submitted through the form.
//! - Persist them under a media directory and hand back a servable URL.
//!
//! # Invariants
//! - Stored file names are derived from the username, so re-uploading an
//!   avatar for the same user overwrites the previous one.
//! - Only jpeg/png/gif/svg payloads are accepted.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug)]
pub enum MediaError {
    /// The payload is not a `data:image/...;base64,...` URL.
    InvalidDataUrl,
    UnsupportedImageType(String),
    Decode(base64::DecodeError),
    Io(std::io::Error),
}

impl Display for MediaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDataUrl => write!(f, "avatar payload is not a base64 image data URL"),
            Self::UnsupportedImageType(mime) => {
                write!(f, "unsupported avatar image type: {mime}")
            }
            Self::Decode(err) => write!(f, "avatar payload is not valid base64: {err}"),
            Self::Io(err) => write!(f, "failed to store avatar: {err}"),
        }
    }
}

impl Error for MediaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::InvalidDataUrl | Self::UnsupportedImageType(_) => None,
        }
    }
}

impl From<base64::DecodeError> for MediaError {
    fn from(value: base64::DecodeError) -> Self {
        Self::Decode(value)
    }
}

impl From<std::io::Error> for MediaError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Directory-backed store for uploaded avatar images.
pub struct MediaStore {
    dir: PathBuf,
}

impl MediaStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Decodes a data URL and writes it as `<username>_avatar.<ext>`.
    ///
    /// Returns the URL path under which the file is served.
    pub fn store_avatar(&self, username: &str, data_url: &str) -> Result<String, MediaError> {
        let (mime, payload) = split_data_url(data_url)?;
        let extension = extension_for(mime)?;
        let bytes = BASE64.decode(payload.trim())?;

        let file_name = format!("{username}_avatar.{extension}");
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(&file_name), bytes)?;

        info!("event=avatar_stored module=media file={file_name}");
        Ok(format!("/media/{file_name}"))
    }
}

fn split_data_url(data_url: &str) -> Result<(&str, &str), MediaError> {
    let (header, payload) = data_url.split_once(',').ok_or(MediaError::InvalidDataUrl)?;
    if !header.starts_with("data:image/") || !header.contains(";base64") {
        return Err(MediaError::InvalidDataUrl);
    }
    Ok((header, payload))
}

fn extension_for(mime: &str) -> Result<&'static str, MediaError> {
    for candidate in ["jpeg", "png", "gif", "svg"] {
        if mime.contains(candidate) {
            return Ok(candidate);
        }
    }
    Err(MediaError::UnsupportedImageType(mime.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{extension_for, split_data_url, MediaError};

    #[test]
    fn data_url_splits_into_header_and_payload() {
        let (mime, payload) = split_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert!(mime.contains("png"));
        assert_eq!(payload, "iVBORw0KGgo=");
    }

    #[test]
    fn plain_urls_are_rejected() {
        let err = split_data_url("https://cdn.example.com/a.png").unwrap_err();
        assert!(matches!(err, MediaError::InvalidDataUrl));
    }

    #[test]
    fn svg_xml_mime_maps_to_svg_extension() {
        assert_eq!(extension_for("data:image/svg+xml;base64").unwrap(), "svg");
    }

    #[test]
    fn unknown_mime_is_an_error() {
        assert!(matches!(
            extension_for("data:image/webp;base64"),
            Err(MediaError::UnsupportedImageType(_))
        ));
    }
}
