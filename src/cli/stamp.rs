use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct StampCommand {
    /// Базовый plugin.xml; без него создается пустой <idea-plugin/>
    #[arg(long)]
    pub plugin_xml: Option<PathBuf>,

    /// Файл с версией API хост-приложения (первая строка)
    #[arg(long)]
    pub api_version_file: PathBuf,

    /// Версия плагина для элемента <version>
    #[arg(long, conflicts_with = "version_file")]
    pub version: Option<String>,

    /// Файл с версией плагина для элемента <version>
    #[arg(long)]
    pub version_file: Option<PathBuf>,

    /// Проставить since-build в <idea-version>
    #[arg(long)]
    pub stamp_since_build: bool,

    /// Проставить until-build (мажорная версия + ".*") в <idea-version>
    #[arg(long)]
    pub stamp_until_build: bool,

    /// Файл changelog для элемента <change-notes>
    #[arg(long)]
    pub changelog_file: Option<PathBuf>,

    /// Файл описания для элемента <description>
    #[arg(long)]
    pub description_file: Option<PathBuf>,

    /// Идентификатор плагина для элемента <id>
    #[arg(long)]
    pub plugin_id: Option<String>,

    /// Имя плагина для элемента <name>
    #[arg(long)]
    pub plugin_name: Option<String>,

    /// XML файл с единственным элементом <vendor> для копирования
    #[arg(long)]
    pub vendor_file: Option<PathBuf>,

    /// Файл результата; без него манифест пишется в stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
