//! Image attachment: file path to embedded data URL.

use std::path::Path;

use anyhow::{Context, Result};
use data_encoding::BASE64;

/// Read a file and embed it as a `data:` URL.
///
/// Contents are not validated; the MIME type is guessed from the extension
/// alone, like the original app trusted the browser's file picker.
pub(crate) fn data_url_from_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;

    Ok(format!("data:{};base64,{}", mime_for(path), BASE64.encode(&bytes)))
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_data_url_encodes_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snack.png");
        std::fs::write(&path, b"fake png bytes").unwrap();

        let url = data_url_from_file(&path).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        let encoded = url.rsplit(',').next().unwrap();
        assert_eq!(BASE64.decode(encoded.as_bytes()).unwrap(), b"fake png bytes");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_octet_stream() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snack.heic");
        std::fs::write(&path, b"x").unwrap();

        let url = data_url_from_file(&path).unwrap();
        assert!(url.starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(data_url_from_file(Path::new("/nonexistent/snack.png")).is_err());
    }
}
