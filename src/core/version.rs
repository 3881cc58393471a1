use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use xmltree::Element;

use crate::core::error::PackagerError;
use crate::utils::xml::collect_elements;

static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]+-)?([0-9]+)((\.[0-9]+)*)").expect("шаблон версии"));

static BUILD_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]+-)?([0-9]+)(\.[0-9]+){2}$").expect("шаблон номера сборки"));

/// Разобранная версия API вида `[PRODUCT-]NUMBER[.NUMBER]*`
#[derive(Debug, Clone)]
pub struct ApiVersion {
    raw: String,
    major: String,
    suffix: String,
}

impl ApiVersion {
    /// Разбирает строку версии; строка не по шаблону — ошибка.
    pub fn parse(raw: &str) -> Result<Self, PackagerError> {
        let caps = VERSION_RE
            .captures(raw)
            .ok_or_else(|| PackagerError::InvalidVersionFormat {
                version: raw.to_string(),
            })?;

        Ok(Self {
            raw: raw.to_string(),
            major: caps.get(2).map_or(String::new(), |m| m.as_str().to_string()),
            suffix: caps.get(3).map_or(String::new(), |m| m.as_str().to_string()),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Мажорная версия: "IC-145.1617.2" -> "145"
    pub fn major_version(&self) -> &str {
        &self.major
    }

    /// Версия без кода продукта: "IC-145.1617.2" -> "145.1617.2"
    pub fn without_product_code(&self) -> String {
        format!("{}{}", self.major, self.suffix)
    }

    /// Значение since-build: без кода продукта и без номера сборки
    pub fn since_build(&self) -> String {
        strip_build_number(&self.without_product_code())
    }

    /// Значение until-build: мажорная версия с подстановочным суффиксом
    pub fn until_build(&self) -> String {
        format!("{}.*", self.major)
    }
}

/// Убирает последний компонент версии, только если числовых компонентов ровно три.
/// Иначе строка возвращается без изменений.
pub fn strip_build_number(version: &str) -> String {
    if let Some(caps) = BUILD_NUMBER_RE.captures(version) {
        // Группа 3 повторяется; captures возвращает её последнее вхождение
        if let Some(m) = caps.get(3) {
            return version[..m.start()].to_string();
        }
    }
    version.to_string()
}

/// Читает дескриптор application-info из архива и возвращает версию API.
///
/// Документ обязан содержать ровно один элемент <build> с атрибутом
/// apiVersion (или number в качестве запасного варианта).
pub fn extract_from_archive(archive: &Path, entry: &str) -> Result<ApiVersion> {
    let file = File::open(archive)
        .with_context(|| format!("Не удалось открыть архив: {}", archive.display()))?;
    let mut zip = zip::ZipArchive::new(file)
        .with_context(|| format!("Не удалось прочитать архив: {}", archive.display()))?;

    let mut data = String::new();
    zip.by_name(entry)
        .with_context(|| format!("Запись {} не найдена в архиве {}", entry, archive.display()))?
        .read_to_string(&mut data)
        .with_context(|| format!("Не удалось прочитать запись {}", entry))?;

    let root = Element::parse(data.as_bytes())
        .with_context(|| format!("Ошибка парсинга XML в записи {}", entry))?;

    let mut builds = Vec::new();
    collect_elements(&root, "build", &mut builds);
    let build = match builds.as_slice() {
        [only] => *only,
        [] => {
            return Err(PackagerError::MissingBuildElement {
                entry: entry.to_string(),
            }
            .into())
        }
        many => {
            return Err(PackagerError::DuplicateBuildElement {
                entry: entry.to_string(),
                count: many.len(),
            }
            .into())
        }
    };

    let value = build
        .attributes
        .get("apiVersion")
        .or_else(|| build.attributes.get("number"))
        .ok_or(PackagerError::MissingVersionAttribute)?;

    debug!("Версия API из {}: {}", entry, value);
    Ok(ApiVersion::parse(value.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;

    #[test]
    fn test_parse_full_version() {
        let version = ApiVersion::parse("IC-145.1617.2").unwrap();
        assert_eq!(version.as_str(), "IC-145.1617.2");
        assert_eq!(version.major_version(), "145");
        assert_eq!(version.without_product_code(), "145.1617.2");
        assert_eq!(version.since_build(), "145.1617");
        assert_eq!(version.until_build(), "145.*");
    }

    #[test]
    fn test_parse_without_product_code() {
        let version = ApiVersion::parse("211.7628").unwrap();
        assert_eq!(version.major_version(), "211");
        assert_eq!(version.without_product_code(), "211.7628");
        // Компонентов два — номер сборки не отрезается
        assert_eq!(version.since_build(), "211.7628");
    }

    #[test]
    fn test_parse_major_only() {
        let version = ApiVersion::parse("145").unwrap();
        assert_eq!(version.major_version(), "145");
        assert_eq!(version.without_product_code(), "145");
        assert_eq!(version.until_build(), "145.*");
    }

    #[test]
    fn test_parse_invalid_version() {
        assert!(ApiVersion::parse("abc").is_err());
        assert!(ApiVersion::parse("-145").is_err());
        assert!(ApiVersion::parse("").is_err());
    }

    #[test]
    fn test_strip_build_number() {
        assert_eq!(strip_build_number("145.1617.2"), "145.1617");
        assert_eq!(strip_build_number("IC-145.1617.2"), "IC-145.1617");
        // Не ровно три компонента — без изменений
        assert_eq!(strip_build_number("145.1617"), "145.1617");
        assert_eq!(strip_build_number("145"), "145");
        assert_eq!(strip_build_number("145.1.2.3"), "145.1.2.3");
    }

    fn write_archive(dir: &std::path::Path, entry: &str, xml: &str) -> std::path::PathBuf {
        let path = dir.join("app.jar");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer.start_file(entry, FileOptions::default()).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap();
        path
    }

    #[test]
    fn test_extract_from_archive() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = write_archive(
            tmp.path(),
            "idea/IdeaApplicationInfo.xml",
            r#"<component><build apiVersion="IC-145.1617.2" number="145.1617.2"/></component>"#,
        );

        let version =
            extract_from_archive(&archive, "idea/IdeaApplicationInfo.xml").unwrap();
        assert_eq!(version.as_str(), "IC-145.1617.2");
    }

    #[test]
    fn test_extract_falls_back_to_number() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = write_archive(
            tmp.path(),
            "info.xml",
            r#"<component><build number="145.1617.2"/></component>"#,
        );

        let version = extract_from_archive(&archive, "info.xml").unwrap();
        assert_eq!(version.as_str(), "145.1617.2");
    }

    #[test]
    fn test_extract_missing_build_element() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = write_archive(tmp.path(), "info.xml", r#"<component/>"#);

        let err = extract_from_archive(&archive, "info.xml").unwrap_err();
        assert!(err.to_string().contains("<build> не найден"));
    }

    #[test]
    fn test_extract_duplicate_build_element() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = write_archive(
            tmp.path(),
            "info.xml",
            r#"<component><build apiVersion="IC-145"/><build apiVersion="IC-146"/></component>"#,
        );

        let err = extract_from_archive(&archive, "info.xml").unwrap_err();
        assert!(err.to_string().contains("несколько элементов <build>"));
    }

    #[test]
    fn test_extract_missing_entry() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = write_archive(tmp.path(), "info.xml", r#"<component/>"#);

        assert!(extract_from_archive(&archive, "other.xml").is_err());
    }
}
