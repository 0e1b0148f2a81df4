use crate::config::Config;
use crate::db::log::oplog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally replacing the copy
    /// with a zip archive. Returns the path that was finally written.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest = expand_tilde(dest_file);

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if same_file(src, &dest) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Backup target is the database itself: {}", dest.display()),
            )
            .into());
        }

        ensure_writable(&dest, force)?;

        fs::copy(src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(&dest)?;
            if compressed != dest {
                if let Err(e) = fs::remove_file(&dest) {
                    warning(format!("Failed to remove uncompressed backup: {}", e));
                }
            }
            compressed
        } else {
            dest
        };

        if let Ok(pool) = DbPool::new(&cfg.database) {
            oplog_or_warn(
                &pool.conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(final_path)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Compress a backup using .zip
///
/// The archive is written next to the copy and renamed into place once
/// finished, so `path` may already carry the `.zip` extension.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let part_path = path.with_extension("zip.part");
    let file = fs::File::create(&part_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "securecheck.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options)?;
    io::copy(&mut f, &mut zip)?;
    zip.finish()?;
    fs::rename(&part_path, &zip_path)?;

    success(format!("📦 Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
