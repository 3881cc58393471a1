use xmltree::{Element, XMLNode};

/// Опциональная зависимость плагина: имя модуля и его config-file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalDependency {
    pub module: String,
    pub config_file: String,
}

/// Добавляет в корень манифеста по одному элементу
/// `<depends optional="true" config-file=...>модуль</depends>` на пару,
/// сохраняя порядок пар.
pub fn append_optional_dependencies(root: &mut Element, deps: &[OptionalDependency]) {
    for dep in deps {
        let mut el = Element::new("depends");
        el.attributes
            .insert("optional".to_string(), "true".to_string());
        el.attributes
            .insert("config-file".to_string(), dep.config_file.clone());
        el.children.push(XMLNode::Text(dep.module.clone()));
        root.children.push(XMLNode::Element(el));
    }
}
