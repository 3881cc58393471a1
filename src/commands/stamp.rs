use anyhow::{Context, Result};
use colored::*;
use tracing::info;

use crate::cli::stamp::StampCommand;
use crate::core::stamper::ManifestStamper;
use crate::core::version::ApiVersion;
use crate::utils::xml;

/// Обработчик команды штамповки plugin.xml
pub fn handle_stamp_command(cmd: StampCommand) -> Result<()> {
    info!("🏷️ Штамповка манифеста плагина");

    let mut stamper = match cmd.plugin_xml {
        Some(ref path) => ManifestStamper::new(xml::read_element(path)?),
        None => ManifestStamper::empty(),
    };

    let api_version_raw =
        std::fs::read_to_string(&cmd.api_version_file).with_context(|| {
            format!(
                "Не удалось прочитать файл версии API: {}",
                cmd.api_version_file.display()
            )
        })?;
    let api_version = ApiVersion::parse(api_version_raw.lines().next().unwrap_or("").trim())?;

    if let Some(ref version) = cmd.version {
        stamper.stamp_version(version)?;
    } else if let Some(ref version_file) = cmd.version_file {
        let value = std::fs::read_to_string(version_file).with_context(|| {
            format!("Не удалось прочитать файл версии: {}", version_file.display())
        })?;
        stamper.stamp_version(value.trim())?;
    }

    if cmd.stamp_since_build || cmd.stamp_until_build {
        stamper.stamp_idea_version(&api_version, cmd.stamp_since_build, cmd.stamp_until_build)?;
    }

    if let Some(ref changelog_file) = cmd.changelog_file {
        let text = std::fs::read_to_string(changelog_file).with_context(|| {
            format!("Не удалось прочитать changelog: {}", changelog_file.display())
        })?;
        stamper.stamp_change_notes(&text)?;
    }

    if let Some(ref plugin_id) = cmd.plugin_id {
        stamper.stamp_id(plugin_id)?;
    }

    if let Some(ref plugin_name) = cmd.plugin_name {
        stamper.stamp_name(plugin_name)?;
    }

    if let Some(ref description_file) = cmd.description_file {
        let text = std::fs::read_to_string(description_file).with_context(|| {
            format!(
                "Не удалось прочитать описание: {}",
                description_file.display()
            )
        })?;
        stamper.stamp_description(&text)?;
    }

    if let Some(ref vendor_file) = cmd.vendor_file {
        let doc = xml::read_element(vendor_file)?;
        stamper.stamp_vendor(&doc, &vendor_file.display().to_string())?;
    }

    let manifest = stamper.finish();
    let bytes = xml::serialize(&manifest)?;
    xml::write_output(&bytes, cmd.output.as_deref())?;

    if let Some(ref output) = cmd.output {
        println!(
            "✅ Манифест записан: {}",
            output.display().to_string().bright_blue()
        );
    }
    Ok(())
}
