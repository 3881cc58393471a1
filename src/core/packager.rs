use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::core::error::PackagerError;

/// Запись для упаковки: исходный файл и путь внутри архива
#[derive(Debug, Clone)]
pub struct PackageEntry {
    pub source: PathBuf,
    pub archive_path: String,
}

/// Итог упаковки
#[derive(Debug, Clone)]
pub struct PackageReport {
    pub entry_count: usize,
    pub archive_size: u64,
    pub checksum_sha256: String,
}

/// Упаковщик ZIP архива с детерминированными метаданными записей.
///
/// Каждая новая запись получает фиксированную метку времени 1980-01-01
/// и unix-права исходного файла, поэтому одинаковые входы дают байт в байт
/// одинаковый архив независимо от mtime на файловой системе.
pub struct ArchivePackager {
    base_archive: Option<PathBuf>,
    entries: Vec<PackageEntry>,
}

impl ArchivePackager {
    pub fn new(entries: Vec<PackageEntry>) -> Self {
        Self {
            base_archive: None,
            entries,
        }
    }

    /// Записи базового архива копируются в итоговый без перекодирования
    pub fn with_base_archive(mut self, base: PathBuf) -> Self {
        self.base_archive = Some(base);
        self
    }

    /// Собирает архив в памяти и записывает на диск одним вызовом:
    /// при любой ошибке выходной файл не создается вовсе.
    pub fn package(&self, output: &Path) -> Result<PackageReport> {
        let (bytes, entry_count) = self.build_archive()?;

        std::fs::write(output, &bytes)
            .with_context(|| format!("Не удалось записать архив: {}", output.display()))?;

        let checksum = format!("{:x}", Sha256::digest(&bytes));
        info!(
            "✅ Архив записан: {} ({} записей, {} bytes)",
            output.display(),
            entry_count,
            bytes.len()
        );

        Ok(PackageReport {
            entry_count,
            archive_size: bytes.len() as u64,
            checksum_sha256: checksum,
        })
    }

    fn build_archive(&self) -> Result<(Vec<u8>, usize)> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let mut seen: HashSet<String> = HashSet::new();
        let mut entry_count = 0usize;

        // Сначала записи базового архива, затем новые — дубликаты путей фатальны
        if let Some(ref base) = self.base_archive {
            let file = File::open(base)
                .with_context(|| format!("Не удалось открыть базовый архив: {}", base.display()))?;
            let mut base_zip = ZipArchive::new(file).with_context(|| {
                format!("Не удалось прочитать базовый архив: {}", base.display())
            })?;

            for i in 0..base_zip.len() {
                let entry = base_zip.by_index(i)?;
                let name = entry.name().to_string();
                if !seen.insert(name.clone()) {
                    return Err(PackagerError::DuplicateArchiveEntry { path: name }.into());
                }
                writer
                    .raw_copy_file(entry)
                    .with_context(|| format!("Не удалось скопировать запись {}", name))?;
                entry_count += 1;
            }
            debug!("Скопировано записей из базового архива: {}", entry_count);
        }

        let progress = ProgressBar::new(self.entries.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{bar:30.green} {pos}/{len} {msg}")
                .unwrap(),
        );

        for entry in &self.entries {
            if !seen.insert(entry.archive_path.clone()) {
                return Err(PackagerError::DuplicateArchiveEntry {
                    path: entry.archive_path.clone(),
                }
                .into());
            }
            progress.set_message(entry.archive_path.clone());

            let mut src = File::open(&entry.source)
                .with_context(|| format!("Не удалось открыть файл: {}", entry.source.display()))?;
            let metadata = src
                .metadata()
                .with_context(|| format!("Не удалось прочитать метаданные: {}", entry.source.display()))?;

            let options = FileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .last_modified_time(fixed_timestamp())
                .unix_permissions(file_mode(&metadata));

            writer
                .start_file(&entry.archive_path, options)
                .with_context(|| format!("Не удалось создать запись {}", entry.archive_path))?;
            std::io::copy(&mut src, &mut writer)
                .with_context(|| format!("Не удалось записать {}", entry.archive_path))?;

            entry_count += 1;
            progress.inc(1);
        }
        progress.finish_and_clear();

        let cursor = writer.finish().context("Не удалось финализировать архив")?;
        Ok((cursor.into_inner(), entry_count))
    }
}

/// Фиксированная метка времени всех новых записей
fn fixed_timestamp() -> zip::DateTime {
    // 1980-01-01 00:00:00 — минимальная дата формата ZIP
    zip::DateTime::from_date_and_time(1980, 1, 1, 0, 0, 0).unwrap_or_default()
}

#[cfg(unix)]
fn file_mode(metadata: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
fn file_mode(_metadata: &std::fs::Metadata) -> u32 {
    0o644
}
