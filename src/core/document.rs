use std::collections::HashMap;

use super::model::{ClassName, DefaultAction, ElementId, PerformedAction, TagName};

/// A single page element: tag, classes, attributes and a default action.
#[derive(Clone, Debug)]
pub struct Element {
    pub tag: TagName,
    pub classes: Vec<ClassName>,
    pub attrs: HashMap<String, String>,
    pub action: DefaultAction,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attrs: HashMap::new(),
            action: DefaultAction::None,
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_action(mut self, action: DefaultAction) -> Self {
        self.action = action;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// Flat element arena standing in for the live page.
///
/// Removal leaves a hole so handles stay stable; default actions that run
/// are recorded so callers can observe what the page actually did.
#[derive(Default)]
pub struct Document {
    slots: Vec<Option<Element>>,
    performed: Vec<PerformedAction>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.slots.len());
        self.slots.push(Some(element));
        id
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.slots.get_mut(id.0).and_then(Option::take)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id).and_then(|el| el.attr(name))
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(el) = self.slots.get_mut(id.0).and_then(Option::as_mut) {
            el.attrs.insert(name.to_string(), value.to_string());
        }
    }

    /// Elements currently present that carry the given class, in insertion order.
    pub fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        self.iter_present()
            .filter(|(_, el)| el.has_class(class))
            .map(|(id, _)| id)
            .collect()
    }

    /// Elements currently present that carry the given attribute, in insertion order.
    pub fn elements_with_attr(&self, name: &str) -> Vec<ElementId> {
        self.iter_present()
            .filter(|(_, el)| el.attrs.contains_key(name))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn element_count(&self) -> usize {
        self.iter_present().count()
    }

    /// Run the element's default action, if it still exists and has one.
    pub fn perform_default(&mut self, id: ElementId) {
        let Some(element) = self.get(id) else {
            return;
        };
        if element.action == DefaultAction::None {
            return;
        }
        let action = element.action.clone();
        self.performed.push(PerformedAction {
            element: id,
            action,
        });
    }

    /// Every default action that has run on this page, oldest first.
    pub fn performed(&self) -> &[PerformedAction] {
        &self.performed
    }

    fn iter_present(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|el| (ElementId(idx), el)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_query_by_class() {
        let mut doc = Document::new();
        let a = doc.insert(Element::new("div").with_class("alert").with_class("alert-success"));
        let _b = doc.insert(Element::new("a"));
        let c = doc.insert(Element::new("div").with_class("alert"));

        assert_eq!(doc.elements_with_class("alert"), vec![a, c]);
        assert_eq!(doc.element_count(), 3);
    }

    #[test]
    fn test_remove_keeps_handles_stable() {
        let mut doc = Document::new();
        let a = doc.insert(Element::new("div").with_class("alert"));
        let b = doc.insert(Element::new("div").with_class("alert"));

        assert!(doc.remove(a).is_some());
        assert!(doc.remove(a).is_none(), "second removal is a no-op");
        assert!(doc.contains(b));
        assert_eq!(doc.elements_with_class("alert"), vec![b]);
    }

    #[test]
    fn test_perform_default_records_action() {
        let mut doc = Document::new();
        let link = doc.insert(
            Element::new("a").with_action(DefaultAction::Navigate("/profile".to_string())),
        );
        let inert = doc.insert(Element::new("span"));

        doc.perform_default(link);
        doc.perform_default(inert);

        assert_eq!(doc.performed().len(), 1);
        assert_eq!(doc.performed()[0].element, link);
        assert_eq!(
            doc.performed()[0].action,
            DefaultAction::Navigate("/profile".to_string())
        );
    }

    #[test]
    fn test_attr_lookup() {
        let mut doc = Document::new();
        let button = doc.insert(Element::new("button").with_attr("data-confirm", "Удалить?"));

        assert_eq!(doc.attr(button, "data-confirm"), Some("Удалить?"));
        assert_eq!(doc.attr(button, "href"), None);
    }
}
