use anyhow::{Context, Result};
use colored::*;
use tracing::info;

use crate::cli::merge::MergeXmlCommand;
use crate::core::merger;
use crate::utils::xml;

/// Обработчик команды слияния XML фрагментов
pub fn handle_merge_command(cmd: MergeXmlCommand) -> Result<()> {
    info!("🧩 Слияние {} XML файлов", cmd.files.len());

    let mut documents = Vec::new();
    for path in &cmd.files {
        documents.push((path.display().to_string(), xml::read_element(path)?));
    }

    let mut iter = documents.into_iter();
    let (_, base) = iter
        .next()
        .context("Нужен хотя бы один входной XML файл")?;
    let merged = merger::merge_documents(base, iter.collect())?;

    let bytes = xml::serialize(&merged)?;
    xml::write_output(&bytes, Some(&cmd.output))?;

    println!(
        "✅ Результат слияния записан: {}",
        cmd.output.display().to_string().bright_blue()
    );
    Ok(())
}
