// src/filtering/text_detection.rs

use super::extension::file_extension;
use std::{fs::File, io::Read, path::Path, str};

// Only the head of the file is sniffed.
const READ_BUFFER_SIZE: usize = 1024;

/// Extensions that are treated as binary without reading the file.
const BINARY_EXTENSIONS: &[&str] = &[
    // images
    ".png", ".jpg", ".jpeg", ".gif", ".bmp", ".ico", ".webp", ".tif", ".tiff", ".psd", ".heic",
    ".avif", // archives
    ".zip", ".tar", ".gz", ".tgz", ".bz2", ".xz", ".7z", ".rar", ".jar", ".war", ".whl", ".egg",
    // executables and libraries
    ".exe", ".dll", ".so", ".dylib", ".bin", ".msi", ".deb", ".rpm", ".app",
    // compiled objects
    ".o", ".obj", ".a", ".lib", ".class", ".pyc", ".pyo", ".rlib", ".rmeta", ".wasm",
    // databases
    ".db", ".sqlite", ".sqlite3", ".mdb", // media
    ".mp3", ".mp4", ".wav", ".flac", ".ogg", ".avi", ".mkv", ".mov", ".wmv", ".flv", ".webm",
    // documents and fonts
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".odt", ".ttf", ".otf", ".woff",
    ".woff2", ".eot",
];

/// Checks if the path carries a known binary extension.
///
/// # Examples
/// ```
/// use aicodeprep::filtering::has_binary_extension;
/// use std::path::Path;
///
/// assert!(has_binary_extension(Path::new("assets/Logo.PNG")));
/// assert!(!has_binary_extension(Path::new("src/lib.rs")));
/// ```
pub fn has_binary_extension(path: &Path) -> bool {
    file_extension(path).is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.as_str()))
}

/// Checks if a byte buffer is text: it must decode as UTF-8.
///
/// A multi-byte sequence cut off at the end of the buffer is not held against
/// it, since the buffer is only the head of the file. Control bytes such as
/// NUL are valid UTF-8 and do not make a buffer binary.
///
/// # Examples
/// ```
/// use aicodeprep::filtering::is_likely_text_from_buffer;
///
/// let text_buffer = b"This is valid UTF-8 text.";
/// assert!(is_likely_text_from_buffer(text_buffer));
///
/// let nul_buffer = b"x = '\0'";
/// assert!(is_likely_text_from_buffer(nul_buffer));
///
/// let invalid_utf8_buffer = &[0x48, 0x65, 0x6c, 0x6c, 0x80, 0x6f]; // "Hell\x80o"
/// assert!(!is_likely_text_from_buffer(invalid_utf8_buffer));
/// ```
pub fn is_likely_text_from_buffer(buffer_slice: &[u8]) -> bool {
    match str::from_utf8(buffer_slice) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}

/// Checks if the file content is likely text-based by reading its head.
///
/// # Errors
/// Returns an `Err` on I/O error (e.g., file not found, permission denied).
pub(crate) fn is_likely_text(path: &Path) -> std::io::Result<bool> {
    let mut file = File::open(path)?;
    let mut buffer = [0; READ_BUFFER_SIZE];
    let mut filled = 0;
    // A single read may return short on some platforms; fill the window.
    while filled < READ_BUFFER_SIZE {
        let n = file.read(&mut buffer[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(is_likely_text_from_buffer(&buffer[..filled]))
}

/// Decides whether a file is binary: known binary extension, or a head that
/// does not look like UTF-8 text.
///
/// # Examples
/// ```
/// # use std::fs;
/// # use aicodeprep::filtering::is_binary_file;
/// # use tempfile::tempdir;
/// # fn main() -> std::io::Result<()> {
/// let temp = tempdir()?;
/// let text_file = temp.path().join("text.txt");
/// let binary_file = temp.path().join("blob.dat");
///
/// fs::write(&text_file, "Hello, world!")?;
/// assert!(!is_binary_file(&text_file)?);
///
/// fs::write(&binary_file, [0x00, 0xFF, 0xFE, 0x42])?;
/// assert!(is_binary_file(&binary_file)?);
/// # Ok(())
/// # }
/// ```
pub fn is_binary_file(path: &Path) -> std::io::Result<bool> {
    if has_binary_extension(path) {
        return Ok(true);
    }
    Ok(!is_likely_text(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Write};
    use tempfile::tempdir;

    #[test]
    fn test_buffer_detect_utf8_bom_text() {
        let buffer = &[0xEF, 0xBB, 0xBF, b'h', b'i'];
        assert!(is_likely_text_from_buffer(buffer));
    }

    #[test]
    fn test_buffer_truncated_multibyte_is_text() {
        // "é" is 0xC3 0xA9; cut after the lead byte.
        let mut buffer = b"caf".to_vec();
        buffer.push(0xC3);
        assert!(is_likely_text_from_buffer(&buffer));
    }

    #[test]
    fn test_detect_utf8_bom_file() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("utf8_bom.txt");
        let mut file = fs::File::create(&file_path)?;
        file.write_all(&[0xEF, 0xBB, 0xBF])?;
        file.write_all(b"Text with UTF-8 BOM.")?;
        drop(file);
        assert!(is_likely_text(&file_path)?);
        Ok(())
    }

    #[test]
    fn test_detect_binary_high_bytes() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("binary_high.txt");
        fs::write(&file_path, [0x01, 0x02, 0x03, 0xFF, 0xFE, 0xFD])?;
        assert!(is_binary_file(&file_path)?);
        Ok(())
    }

    #[test]
    fn test_detect_empty_file_is_text() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("empty.py");
        fs::write(&file_path, "")?;
        assert!(!is_binary_file(&file_path)?);
        Ok(())
    }

    #[test]
    fn test_png_extension_is_binary_without_reading() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("secret.png");
        // Text content, but the extension decides.
        fs::write(&file_path, "not really an image")?;
        assert!(is_binary_file(&file_path)?);
        Ok(())
    }

    #[test]
    fn test_nul_in_valid_utf8_is_text() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("a.py");
        fs::write(&file_path, b"x = '\0'\n")?;
        assert!(!is_binary_file(&file_path)?);
        Ok(())
    }

    #[test]
    fn test_buffer_invalid_sequence_is_binary() {
        assert!(!is_likely_text_from_buffer(&[b'a', 0xFF, b'b']));
        // UTF-16 with a BOM is not UTF-8.
        assert!(!is_likely_text_from_buffer(&[0xFF, 0xFE, b'h', 0x00]));
    }

    #[test]
    fn test_invalid_bytes_after_window_are_missed() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("late.txt");
        let mut content = vec![b'a'; READ_BUFFER_SIZE];
        content.extend_from_slice(&[0xFF, 0xFE, 0xFD]);
        fs::write(&file_path, content)?;
        assert!(!is_binary_file(&file_path)?);
        Ok(())
    }

    #[test]
    fn test_non_existent_file_is_error() {
        let result = is_binary_file(Path::new("non_existent_file_for_text_detection.txt"));
        assert!(result.is_err());
    }
}
