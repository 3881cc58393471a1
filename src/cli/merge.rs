use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct MergeXmlCommand {
    /// Файл результата слияния
    #[arg(short, long)]
    pub output: PathBuf,

    /// XML файлы для слияния (минимум два, корневые теги должны совпадать)
    #[arg(required = true, num_args = 2..)]
    pub files: Vec<PathBuf>,
}
