use xmltree::Element;

use crate::core::error::PackagerError;

/// Сливает XML документы с одинаковым корневым тегом.
///
/// Дети каждого последующего документа добавляются в корень первого с
/// сохранением внутреннего порядка и порядка аргументов. Несовпадение
/// корневых тегов — ошибка.
pub fn merge_documents(
    mut base: Element,
    rest: Vec<(String, Element)>,
) -> Result<Element, PackagerError> {
    for (file, doc) in rest {
        if doc.name != base.name {
            return Err(PackagerError::RootTagMismatch {
                expected: base.name.clone(),
                found: doc.name,
                file,
            });
        }
        base.children.extend(doc.children);
    }
    Ok(base)
}
