use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ApiVersionCommand {
    /// Архив приложения (zip/jar) с дескриптором application-info
    #[arg(short, long)]
    pub archive: PathBuf,

    /// Путь к дескриптору application-info внутри архива
    #[arg(short, long)]
    pub entry: String,

    /// Убрать код продукта из версии (IC-145.1617.2 -> 145.1617.2)
    #[arg(long)]
    pub strip_product_code: bool,

    /// Убрать номер сборки, если компонентов ровно три (145.1617.2 -> 145.1617)
    #[arg(long)]
    pub strip_build_number: bool,

    /// Вывести только мажорную версию (IC-145.1617.2 -> 145)
    #[arg(long, conflicts_with_all = ["strip_product_code", "strip_build_number"])]
    pub major_only: bool,
}
