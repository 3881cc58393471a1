use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use tracing::info;

use crate::cli::package::PackageCommand;
use crate::core::packager::{ArchivePackager, PackageEntry};
use crate::utils::args::chunk_pairs;

/// Обработчик команды упаковки плагина
pub fn handle_package_command(cmd: PackageCommand) -> Result<()> {
    info!("📦 Упаковка плагина: {}", cmd.output.display());

    // Валидация пар до какой-либо записи на диск
    let entries: Vec<PackageEntry> = chunk_pairs(&cmd.pairs)?
        .into_iter()
        .map(|(source, archive_path)| PackageEntry {
            source: PathBuf::from(source),
            archive_path,
        })
        .collect();

    let mut packager = ArchivePackager::new(entries);
    if let Some(ref base) = cmd.base_archive {
        packager = packager.with_base_archive(base.clone());
    }

    let report = packager.package(&cmd.output)?;

    println!("📦 АРХИВ:");
    println!("  Путь: {}", cmd.output.display().to_string().bright_blue());
    println!(
        "  Записей: {}",
        report.entry_count.to_string().bright_green()
    );
    println!("  Размер: {} bytes", report.archive_size);
    println!("  SHA256: {}", report.checksum_sha256.bright_black());
    Ok(())
}
