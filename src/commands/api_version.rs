use anyhow::Result;
use tracing::info;

use crate::cli::api_version::ApiVersionCommand;
use crate::core::version;

/// Обработчик команды извлечения версии API
pub fn handle_api_version_command(cmd: ApiVersionCommand) -> Result<()> {
    info!(
        "🔍 Извлечение версии API: {} из {}",
        cmd.entry,
        cmd.archive.display()
    );

    let api_version = version::extract_from_archive(&cmd.archive, &cmd.entry)?;

    let result = if cmd.major_only {
        api_version.major_version().to_string()
    } else {
        let mut value = if cmd.strip_product_code {
            api_version.without_product_code()
        } else {
            api_version.as_str().to_string()
        };
        if cmd.strip_build_number {
            value = version::strip_build_number(&value);
        }
        value
    };

    // Результат — единственная строка в stdout, для подстановки в сборку
    println!("{}", result);
    Ok(())
}
