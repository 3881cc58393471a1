use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use xmltree::{Element, XMLNode};

/// Читает XML документ и возвращает корневой элемент.
pub fn read_element(path: &Path) -> Result<Element> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Не удалось прочитать {}", path.display()))?;
    Element::parse(data.as_bytes())
        .with_context(|| format!("Ошибка парсинга XML: {}", path.display()))
}

/// Сериализует документ в UTF-8 байты.
/// Порядок детей и атрибутов сохраняется как при вставке.
pub fn serialize(root: &Element) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    root.write(&mut buf)
        .context("Не удалось сериализовать XML документ")?;
    Ok(buf)
}

/// Пишет результат в файл или, без указанного пути, в stdout.
pub fn write_output(bytes: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("Не удалось сохранить {}", path.display())),
        None => std::io::stdout()
            .lock()
            .write_all(bytes)
            .context("Не удалось записать в stdout"),
    }
}

/// Рекурсивно собирает элементы с заданным именем, включая корень.
pub fn collect_elements<'a>(element: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
    if element.name == name {
        found.push(element);
    }
    for child in &element.children {
        if let XMLNode::Element(el) = child {
            collect_elements(el, name, found);
        }
    }
}
