use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;
mod commands;
mod core;
mod utils;

#[derive(Parser, Debug)]
#[command(
    name = "plugin-packager",
    about = "CLI утилиты для штамповки plugin.xml и детерминированной упаковки плагинов",
    version = "0.1.0",
    author = "Ride Team"
)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Уровень логирования
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Извлечение версии API из архива приложения
    ApiVersion(cli::api_version::ApiVersionCommand),
    /// Штамповка plugin.xml метаданными сборки
    Stamp(cli::stamp::StampCommand),
    /// Слияние XML фрагментов с одинаковым корневым тегом
    MergeXml(cli::merge::MergeXmlCommand),
    /// Добавление опциональных зависимостей в plugin.xml
    AppendDeps(cli::deps::AppendDepsCommand),
    /// Детерминированная упаковка файлов плагина в ZIP
    Package(cli::package::PackageCommand),
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Инициализация логирования. Логи идут в stderr, чтобы не смешиваться
    // с результатом команды на stdout (api-version печатает версию в stdout).
    tracing_subscriber::fmt()
        .with_max_level(match args.log_level.as_str() {
            "debug" => tracing::Level::DEBUG,
            "info" => tracing::Level::INFO,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        })
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Commands::ApiVersion(cmd) => commands::api_version::handle_api_version_command(cmd),
        Commands::Stamp(cmd) => commands::stamp::handle_stamp_command(cmd),
        Commands::MergeXml(cmd) => commands::merge::handle_merge_command(cmd),
        Commands::AppendDeps(cmd) => commands::deps::handle_append_deps_command(cmd),
        Commands::Package(cmd) => commands::package::handle_package_command(cmd),
    }
}
