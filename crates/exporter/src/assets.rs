//! Best-effort copy of additional images next to the example.

use std::path::{Path, PathBuf};

/// Result of copying additional images.
#[derive(Debug, Clone, Default)]
pub struct CopiedImages {
    /// Destination paths of copied images.
    pub copied: Vec<PathBuf>,
    /// Source paths that existed but could not be copied, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

/// Copy each existing image into `destination`, keeping its file name.
///
/// Missing sources are skipped silently; copy failures are logged and the
/// loop moves on.
pub fn copy_additional_images(images: &[PathBuf], destination: &Path) -> CopiedImages {
    let mut result = CopiedImages::default();

    for image in images {
        if !image.is_file() {
            tracing::debug!(path = %image.display(), "Skipping missing additional image");
            continue;
        }

        let Some(file_name) = image.file_name() else {
            result
                .failed
                .push((image.clone(), "path has no file name".to_string()));
            continue;
        };

        let target = destination.join(file_name);
        match std::fs::copy(image, &target) {
            Ok(_) => result.copied.push(target),
            Err(e) => {
                tracing::warn!(
                    path = %image.display(),
                    error = %e,
                    "Failed to copy additional image"
                );
                result.failed.push((image.clone(), e.to_string()));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_existing_and_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("render.png");
        std::fs::write(&source, "png").unwrap();
        let destination = dir.path().join("out");
        std::fs::create_dir_all(&destination).unwrap();

        let result = copy_additional_images(
            &[source, dir.path().join("missing.png")],
            &destination,
        );
        assert_eq!(result.copied, vec![destination.join("render.png")]);
        assert!(result.failed.is_empty());
        assert!(destination.join("render.png").is_file());
    }

    #[test]
    fn copy_failure_does_not_stop_the_loop() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        std::fs::write(&first, "1").unwrap();
        std::fs::write(&second, "2").unwrap();

        let destination = dir.path().join("out");
        std::fs::create_dir_all(destination.join("first.png")).unwrap();

        let result = copy_additional_images(&[first.clone(), second], &destination);
        assert_eq!(result.failed.len(), 1);
        assert_eq!(result.failed[0].0, first);
        assert_eq!(result.copied, vec![destination.join("second.png")]);
    }
}
