//! Filesystem-backed file dialog.
//!
//! Desktop stand-in for the browser's download/file-picker interactions:
//! `save` writes into a fixed export directory, `pick` consumes a path the
//! shell preselected (what a native dialog would have returned). Each pick
//! consumes its selection, so a second import without a new selection is
//! rejected the same way a cancelled dialog is.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::infrastructure::ports::{FileDialogPort, TransferError};

pub struct FsFileDialog {
    export_dir: PathBuf,
    selection: Mutex<Option<PathBuf>>,
}

impl FsFileDialog {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
            selection: Mutex::new(None),
        }
    }

    /// Queue the file the next `pick` call will read.
    pub async fn preselect(&self, path: impl Into<PathBuf>) {
        *self.selection.lock().await = Some(path.into());
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}

#[async_trait]
impl FileDialogPort for FsFileDialog {
    async fn save(&self, filename: &str, contents: &str) -> Result<(), TransferError> {
        tokio::fs::create_dir_all(&self.export_dir)
            .await
            .map_err(|e| TransferError::Unwritable(e.to_string()))?;
        let path = self.export_dir.join(filename);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| TransferError::Unwritable(e.to_string()))?;
        tracing::debug!(path = %path.display(), "Exported file written");
        Ok(())
    }

    async fn pick(&self) -> Result<String, TransferError> {
        let Some(path) = self.selection.lock().await.take() else {
            return Err(TransferError::NoFileSelected);
        };
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            return Err(TransferError::Unreadable(format!(
                "{} is not a JSON file",
                path.display()
            )));
        }
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| TransferError::Unreadable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_writes_into_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        let dialog = FsFileDialog::new(dir.path());
        dialog.save("test.json", "{}").await.unwrap();
        let written = std::fs::read_to_string(dir.path().join("test.json")).unwrap();
        assert_eq!(written, "{}");
    }

    #[tokio::test]
    async fn pick_without_selection_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let dialog = FsFileDialog::new(dir.path());
        let err = dialog.pick().await.unwrap_err();
        assert!(matches!(err, TransferError::NoFileSelected));
    }

    #[tokio::test]
    async fn pick_consumes_its_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, "[]").unwrap();

        let dialog = FsFileDialog::new(dir.path());
        dialog.preselect(&path).await;
        assert_eq!(dialog.pick().await.unwrap(), "[]");

        // Selection was consumed; the next pick behaves like a cancelled dialog.
        assert!(matches!(
            dialog.pick().await.unwrap_err(),
            TransferError::NoFileSelected
        ));
    }

    #[tokio::test]
    async fn pick_rejects_non_json_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let dialog = FsFileDialog::new(dir.path());
        dialog.preselect(&path).await;
        assert!(matches!(
            dialog.pick().await.unwrap_err(),
            TransferError::Unreadable(_)
        ));
    }

    #[tokio::test]
    async fn pick_of_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let dialog = FsFileDialog::new(dir.path());
        dialog.preselect(dir.path().join("gone.json")).await;
        assert!(matches!(
            dialog.pick().await.unwrap_err(),
            TransferError::Unreadable(_)
        ));
    }
}
