use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct PackageCommand {
    /// Путь к итоговому ZIP архиву
    #[arg(short, long)]
    pub output: PathBuf,

    /// Базовый архив, записи которого копируются в итоговый
    #[arg(long)]
    pub base_archive: Option<PathBuf>,

    /// Пары FILE ARCHIVE_PATH (четное число аргументов)
    #[arg(required = true)]
    pub pairs: Vec<String>,
}
