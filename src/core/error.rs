use thiserror::Error;

/// Специфичные ошибки утилит упаковки плагинов
#[derive(Error, Debug)]
pub enum PackagerError {
    #[error("Элемент <build> не найден в записи архива: {entry}")]
    MissingBuildElement { entry: String },

    #[error("Найдено несколько элементов <build> ({count}) в записи архива: {entry}")]
    DuplicateBuildElement { entry: String, count: usize },

    #[error("У элемента <build> отсутствуют атрибуты apiVersion и number")]
    MissingVersionAttribute,

    #[error("Некорректный формат версии: {version}")]
    InvalidVersionFormat { version: String },

    #[error("Элемент <{name}> уже присутствует в plugin.xml")]
    ElementAlreadyPresent { name: String },

    #[error("Корневые теги не совпадают: ожидался <{expected}>, найден <{found}> в {file}")]
    RootTagMismatch {
        expected: String,
        found: String,
        file: String,
    },

    #[error("Некорректное число элементов <vendor> в {file}: {count} (ожидался ровно один)")]
    AmbiguousVendorElement { file: String, count: usize },

    #[error("Нечетное число позиционных аргументов: {count} (ожидались пары)")]
    OddPairList { count: usize },

    #[error("Дублирующийся путь в архиве: {path}")]
    DuplicateArchiveEntry { path: String },
}
