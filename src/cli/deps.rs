use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct AppendDepsCommand {
    /// Исходный plugin.xml
    #[arg(long)]
    pub plugin_xml: PathBuf,

    /// Файл результата
    #[arg(short, long)]
    pub output: PathBuf,

    /// Пары MODULE CONFIG_FILE (четное число аргументов)
    #[arg(required = true)]
    pub pairs: Vec<String>,
}
