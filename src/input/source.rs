//! Source text reading for one-shot translation (file or stdin).

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

/// One-shot input larger than this is rejected.
pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Reads the text to translate from `path`, or from stdin when no path was
/// given.
pub fn read_source(path: Option<&str>) -> Result<String> {
    path.map_or_else(read_stdin, read_file)
}

fn read_file(path: &str) -> Result<String> {
    let metadata = fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    if size > MAX_INPUT_SIZE {
        bail!(
            "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
             Consider splitting the file into smaller parts.",
            size as f64 / 1024.0 / 1024.0
        );
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
}

fn read_stdin() -> Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 8192];

    {
        let mut stdin = io::stdin().lock();
        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;
            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);
            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Input size exceeds maximum allowed size (1 MB).\n\n\
                     Consider splitting the input into smaller parts."
                );
            }
        }
    }

    String::from_utf8(buffer).context("Input is not valid UTF-8")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        fs::write(&path, "Hello, World!").unwrap();

        let content = read_source(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(content, "Hello, World!");
    }

    #[test]
    fn test_read_nonexistent_file() {
        assert!(read_source(Some("/nonexistent/path/to/file.txt")).is_err());
    }

    #[test]
    fn test_read_file_unicode() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        let content = "こんにちは世界！🌍";
        fs::write(&path, content).unwrap();

        assert_eq!(read_source(Some(path.to_str().unwrap())).unwrap(), content);
    }

    #[test]
    fn test_read_file_exceeds_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("large.txt");
        fs::write(&path, "x".repeat(MAX_INPUT_SIZE + 1)).unwrap();

        let result = read_source(Some(path.to_str().unwrap()));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_file_at_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("max.txt");
        fs::write(&path, "x".repeat(MAX_INPUT_SIZE)).unwrap();

        let content = read_source(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(content.len(), MAX_INPUT_SIZE);
    }
}
