use xmltree::{Element, XMLNode};

use crate::core::error::PackagerError;
use crate::core::version::ApiVersion;
use crate::utils::xml::collect_elements;

/// Штамповщик манифеста плагина.
///
/// Новые элементы накапливаются в списке отложенных вставок и применяются
/// одним проходом в finish(). Каждый элемент может быть проштампован не
/// более одного раза: попытка повторной штамповки или штамповки элемента,
/// уже существующего в базовом манифесте, — ошибка.
pub struct ManifestStamper {
    root: Element,
    pending: Vec<Element>,
}

impl ManifestStamper {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            pending: Vec::new(),
        }
    }

    /// Манифест по умолчанию: пустой <idea-plugin/>
    pub fn empty() -> Self {
        Self::new(Element::new("idea-plugin"))
    }

    fn ensure_absent(&self, name: &str) -> Result<(), PackagerError> {
        let already = self.root.get_child(name).is_some()
            || self.pending.iter().any(|el| el.name == name);
        if already {
            return Err(PackagerError::ElementAlreadyPresent {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn push_text_element(&mut self, name: &str, text: &str) {
        let mut el = Element::new(name);
        el.children.push(XMLNode::Text(text.to_string()));
        self.pending.push(el);
    }

    fn push_cdata_element(&mut self, name: &str, text: &str) {
        let mut el = Element::new(name);
        el.children.push(XMLNode::CData(lines_to_paragraphs(text)));
        self.pending.push(el);
    }

    /// <version> с литеральным текстом
    pub fn stamp_version(&mut self, version: &str) -> Result<(), PackagerError> {
        self.ensure_absent("version")?;
        self.push_text_element("version", version);
        Ok(())
    }

    /// <idea-version> с since-build/until-build из версии API
    pub fn stamp_idea_version(
        &mut self,
        api_version: &ApiVersion,
        since: bool,
        until: bool,
    ) -> Result<(), PackagerError> {
        self.ensure_absent("idea-version")?;
        let mut el = Element::new("idea-version");
        if since {
            el.attributes
                .insert("since-build".to_string(), api_version.since_build());
        }
        if until {
            el.attributes
                .insert("until-build".to_string(), api_version.until_build());
        }
        self.pending.push(el);
        Ok(())
    }

    /// <change-notes> — каждая строка файла оборачивается в <p> внутри CDATA
    pub fn stamp_change_notes(&mut self, text: &str) -> Result<(), PackagerError> {
        self.ensure_absent("change-notes")?;
        self.push_cdata_element("change-notes", text);
        Ok(())
    }

    /// <description> — та же построчная HTML разметка в CDATA
    pub fn stamp_description(&mut self, text: &str) -> Result<(), PackagerError> {
        self.ensure_absent("description")?;
        self.push_cdata_element("description", text);
        Ok(())
    }

    /// <id> с литеральным текстом
    pub fn stamp_id(&mut self, id: &str) -> Result<(), PackagerError> {
        self.ensure_absent("id")?;
        self.push_text_element("id", id);
        Ok(())
    }

    /// <name> с литеральным текстом
    pub fn stamp_name(&mut self, name: &str) -> Result<(), PackagerError> {
        self.ensure_absent("name")?;
        self.push_text_element("name", name);
        Ok(())
    }

    /// <vendor> копируется (email/url и текст) из единственного элемента
    /// <vendor> внешнего документа; ноль или несколько элементов — ошибка.
    pub fn stamp_vendor(
        &mut self,
        source: &Element,
        file_label: &str,
    ) -> Result<(), PackagerError> {
        self.ensure_absent("vendor")?;

        let mut vendors = Vec::new();
        collect_elements(source, "vendor", &mut vendors);
        let src = match vendors.as_slice() {
            [only] => *only,
            other => {
                return Err(PackagerError::AmbiguousVendorElement {
                    file: file_label.to_string(),
                    count: other.len(),
                })
            }
        };

        let mut el = Element::new("vendor");
        for attr in ["email", "url"] {
            if let Some(value) = src.attributes.get(attr) {
                el.attributes.insert(attr.to_string(), value.clone());
            }
        }
        let text = src.get_text().map(|t| t.into_owned()).unwrap_or_default();
        el.children.push(XMLNode::Text(text));
        self.pending.push(el);
        Ok(())
    }

    /// Применяет отложенные элементы в порядке добавления и возвращает манифест.
    pub fn finish(mut self) -> Element {
        for el in self.pending.drain(..) {
            self.root.children.push(XMLNode::Element(el));
        }
        self.root
    }
}

/// Каждая строка текста превращается в элемент <p>
fn lines_to_paragraphs(text: &str) -> String {
    text.lines()
        .map(|line| format!("<p>{}</p>", line))
        .collect::<Vec<_>>()
        .join("\n")
}
