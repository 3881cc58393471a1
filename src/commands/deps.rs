use anyhow::Result;
use colored::*;
use tracing::info;

use crate::cli::deps::AppendDepsCommand;
use crate::core::deps::{append_optional_dependencies, OptionalDependency};
use crate::utils::args::chunk_pairs;
use crate::utils::xml;

/// Обработчик команды добавления опциональных зависимостей
pub fn handle_append_deps_command(cmd: AppendDepsCommand) -> Result<()> {
    info!("🔗 Добавление опциональных зависимостей в plugin.xml");

    // Валидация пар до чтения и записи файлов
    let deps: Vec<OptionalDependency> = chunk_pairs(&cmd.pairs)?
        .into_iter()
        .map(|(module, config_file)| OptionalDependency {
            module,
            config_file,
        })
        .collect();

    let mut root = xml::read_element(&cmd.plugin_xml)?;
    append_optional_dependencies(&mut root, &deps);

    let bytes = xml::serialize(&root)?;
    xml::write_output(&bytes, Some(&cmd.output))?;

    println!(
        "✅ Добавлено зависимостей: {}",
        deps.len().to_string().bright_green()
    );
    Ok(())
}
