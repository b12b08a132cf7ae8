//! Directory layout of an export inside the fork.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Extension of the copied canvas document.
pub const CANVAS_EXTENSION: &str = "gh";
/// Extension of the copied companion model document.
pub const MODEL_EXTENSION: &str = "3dm";

pub const README_FILE: &str = "README.md";
pub const METADATA_FILE: &str = "input.json";
pub const THUMBNAIL_FILE: &str = "thumbnail.png";

/// Where an export writes its files.
///
/// ```text
/// <repo_root>/                  fork checkout
///   <file_name>/                root_path: all published files
///     <file_name>/              working_directory: zipped, then removed
///     <file_name>.zip
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTarget {
    pub file_name: String,
    pub repo_root: PathBuf,
    pub root_path: PathBuf,
    pub working_directory: PathBuf,
}

impl ExportTarget {
    pub fn new(repo_root: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        let repo_root = repo_root.into();
        let file_name = file_name.into();
        let root_path = repo_root.join(&file_name);
        let working_directory = root_path.join(&file_name);
        Self {
            file_name,
            repo_root,
            root_path,
            working_directory,
        }
    }

    /// `<repo_root>/.git/config`
    pub fn git_config_path(&self) -> PathBuf {
        git_config_path(&self.repo_root)
    }

    pub fn archive_name(&self) -> String {
        format!("{}.zip", self.file_name)
    }

    pub fn archive_path(&self) -> PathBuf {
        self.root_path.join(self.archive_name())
    }

    /// Canvas document copy inside the working directory.
    pub fn canvas_copy_path(&self) -> PathBuf {
        self.working_directory
            .join(format!("{}.{CANVAS_EXTENSION}", self.file_name))
    }

    /// Model document copy inside the working directory.
    pub fn model_copy_path(&self) -> PathBuf {
        self.working_directory
            .join(format!("{}.{MODEL_EXTENSION}", self.file_name))
    }

    pub fn canvas_image_name(&self) -> String {
        format!("{}_GH.png", self.file_name)
    }

    pub fn viewport_image_name(&self) -> String {
        format!("{}_Rhino.png", self.file_name)
    }

    pub fn canvas_image_path(&self) -> PathBuf {
        self.root_path.join(self.canvas_image_name())
    }

    pub fn viewport_image_path(&self) -> PathBuf {
        self.root_path.join(self.viewport_image_name())
    }

    pub fn thumbnail_path(&self) -> PathBuf {
        self.root_path.join(THUMBNAIL_FILE)
    }

    pub fn readme_path(&self) -> PathBuf {
        self.root_path.join(README_FILE)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.root_path.join(METADATA_FILE)
    }
}

/// `<repo_root>/.git/config`
pub fn git_config_path(repo_root: &Path) -> PathBuf {
    repo_root.join(".git").join("config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_nests_working_directory_inside_root() {
        let target = ExportTarget::new("/forks/hydra", "MyTest");
        assert_eq!(target.root_path, PathBuf::from("/forks/hydra/MyTest"));
        assert_eq!(
            target.working_directory,
            PathBuf::from("/forks/hydra/MyTest/MyTest")
        );
        assert_eq!(
            target.archive_path(),
            PathBuf::from("/forks/hydra/MyTest/MyTest.zip")
        );
        assert_eq!(
            target.canvas_copy_path(),
            PathBuf::from("/forks/hydra/MyTest/MyTest/MyTest.gh")
        );
        assert_eq!(
            target.git_config_path(),
            PathBuf::from("/forks/hydra/.git/config")
        );
        assert_eq!(target.viewport_image_name(), "MyTest_Rhino.png");
    }
}
