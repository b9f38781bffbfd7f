use super::RecordStore;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

impl RecordStore {
    /// Copy the current log to `Backups/<stem>_<timestamp>.csv`.
    ///
    /// Called before every destructive rewrite. The timestamp has microsecond
    /// resolution and a numeric suffix is added on collision, so an existing
    /// backup is never overwritten.
    pub fn backup(&self) -> AppResult<PathBuf> {
        if !self.log_path.exists() {
            self.ensure_storage()?;
        }
        fs::create_dir_all(self.backup_dir())?;

        let stem = self
            .log_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "training_log".to_string());
        let stamp = Local::now().format("%Y%m%d_%H%M%S_%6f").to_string();

        let mut dest = self.backup_dir().join(format!("{stem}_{stamp}.csv"));
        let mut n = 1;
        while dest.exists() {
            dest = self.backup_dir().join(format!("{stem}_{stamp}_{n}.csv"));
            n += 1;
        }

        fs::copy(&self.log_path, &dest)?;
        Ok(dest)
    }

    /// Copy the log to a user-chosen absolute path, optionally as a zip archive.
    /// Returns the path of the artifact actually written.
    pub fn backup_to(&self, dest: &Path, compress: bool) -> AppResult<PathBuf> {
        if !self.log_path.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Training log not found: {}", self.log_path.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::copy(&self.log_path, dest)?;

        if !compress {
            return Ok(dest.to_path_buf());
        }

        let zipped = compress_backup(dest)?;
        if zipped != dest {
            fs::remove_file(dest)?;
        }
        Ok(zipped)
    }

    /// Backups currently present, oldest first.
    pub fn list_backups(&self) -> AppResult<Vec<PathBuf>> {
        let dir = self.backup_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut out: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        out.sort();
        Ok(out)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("Invalid backup path: {}", path.display())))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}
