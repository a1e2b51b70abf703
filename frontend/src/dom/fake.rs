//! In-memory document for unit tests. Supports simple selectors only:
//! `tag`, `#id`, `.class`, `tag[attr="value"]`, their compounds, and comma lists.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::{Document, DomError, Element};

#[derive(Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    value: String,
    files: Vec<String>,
    hidden: bool,
    required: bool,
    disabled: bool,
    inner_html: String,
    scrolled_into_view: bool,
    children: Vec<FakeElement>,
    parent: Weak<RefCell<Node>>,
}

#[derive(Clone)]
pub struct FakeElement(Rc<RefCell<Node>>);

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_string(),
            ..Node::default()
        })))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_inner_html(self, html: &str) -> Self {
        self.set_inner_html(html);
        self
    }

    pub fn with_child(self, child: FakeElement) -> Self {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child);
        self
    }

    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    pub fn attach_file(&self, name: &str) {
        self.0.borrow_mut().files.push(name.to_string());
    }

    pub fn text(&self) -> String {
        self.0.borrow().inner_html.clone()
    }

    pub fn is_attached(&self) -> bool {
        self.parent().is_some()
    }

    pub fn was_scrolled_into_view(&self) -> bool {
        self.0.borrow().scrolled_into_view
    }

    pub fn same_node(&self, other: &FakeElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn parent(&self) -> Option<FakeElement> {
        self.0.borrow().parent.upgrade().map(FakeElement)
    }

    fn descendants(&self) -> Vec<FakeElement> {
        let mut found = Vec::new();
        for child in self.0.borrow().children.iter() {
            found.push(child.clone());
            found.extend(child.descendants());
        }
        found
    }

    fn matches(&self, selector: &str) -> bool {
        let node = self.0.borrow();
        selector
            .split(',')
            .map(str::trim)
            .any(|part| SimpleSelector::parse(part).matches(&node))
    }
}

struct SimpleSelector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attribute: Option<(String, String)>,
}

impl SimpleSelector {
    fn parse(selector: &str) -> Self {
        let (head, attribute) = match selector.split_once('[') {
            Some((head, rest)) => {
                let attribute = rest.trim_end_matches(']').split_once('=').map(|(name, value)| {
                    (name.trim().to_string(), value.trim().trim_matches('"').to_string())
                });
                (head, attribute)
            }
            None => (selector, None),
        };

        let mut parsed = Self {
            tag: None,
            id: None,
            classes: Vec::new(),
            attribute,
        };
        let mut marker: Option<char> = None;
        let mut token = String::new();
        for ch in head.chars().chain(Some('\0')) {
            if matches!(ch, '#' | '.' | '\0') {
                if !token.is_empty() {
                    match marker {
                        Some('#') => parsed.id = Some(token.clone()),
                        Some(_) => parsed.classes.push(token.clone()),
                        None => parsed.tag = Some(token.clone()),
                    }
                }
                token.clear();
                marker = Some(ch);
            } else {
                token.push(ch);
            }
        }
        parsed
    }

    fn matches(&self, node: &Node) -> bool {
        self.tag.as_ref().map_or(true, |tag| tag.eq_ignore_ascii_case(&node.tag))
            && self.id.as_ref().map_or(true, |id| node.id.as_ref() == Some(id))
            && self.classes.iter().all(|class| node.classes.contains(class))
            && self.attribute.as_ref().map_or(true, |(name, value)| {
                node.attributes.get(name) == Some(value)
            })
    }
}

impl Element for FakeElement {
    fn find(&self, selector: &str) -> Option<Self> {
        self.descendants().into_iter().find(|el| el.matches(selector))
    }

    fn find_all(&self, selector: &str) -> Vec<Self> {
        self.descendants()
            .into_iter()
            .filter(|el| el.matches(selector))
            .collect()
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(el) = current {
            if el.matches(selector) {
                return Some(el);
            }
            current = el.parent();
        }
        None
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let node = self.0.borrow();
        match name {
            "id" => node.id.clone(),
            _ => node.attributes.get(name).cloned(),
        }
    }

    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn first_file_name(&self) -> Option<String> {
        self.0.borrow().files.first().cloned()
    }

    fn clear_files(&self) {
        let mut node = self.0.borrow_mut();
        node.files.clear();
        node.value.clear();
    }

    fn set_hidden(&self, hidden: bool) {
        self.0.borrow_mut().hidden = hidden;
    }

    fn is_hidden(&self) -> bool {
        self.0.borrow().hidden
    }

    fn set_required(&self, required: bool) {
        self.0.borrow_mut().required = required;
    }

    fn is_required(&self) -> bool {
        self.0.borrow().required
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    fn inner_html(&self) -> String {
        self.0.borrow().inner_html.clone()
    }

    fn set_inner_html(&self, html: &str) {
        self.0.borrow_mut().inner_html = html.to_string();
    }

    fn set_text(&self, text: &str) {
        self.set_inner_html(text);
    }

    fn set_class_name(&self, class_name: &str) {
        self.0.borrow_mut().classes = class_name.split_whitespace().map(String::from).collect();
    }

    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        child.remove();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        Ok(())
    }

    fn remove(&self) {
        if let Some(parent) = self.parent() {
            parent
                .0
                .borrow_mut()
                .children
                .retain(|c| !Rc::ptr_eq(&c.0, &self.0));
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    fn reset_form(&self) {
        for el in self.descendants() {
            let mut node = el.0.borrow_mut();
            node.value.clear();
            node.files.clear();
        }
    }

    fn scroll_into_view(&self) {
        self.0.borrow_mut().scrolled_into_view = true;
    }
}

#[derive(Clone)]
pub struct FakeDocument {
    root: FakeElement,
    body: FakeElement,
}

impl FakeDocument {
    pub fn new() -> Self {
        let body = FakeElement::new("body");
        let root = FakeElement::new("html").with_child(body.clone());
        Self { root, body }
    }

    pub fn body_element(&self) -> &FakeElement {
        &self.body
    }
}

impl Default for FakeDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for FakeDocument {
    type Element = FakeElement;

    fn find(&self, selector: &str) -> Option<FakeElement> {
        self.root.find(selector)
    }

    fn find_all(&self, selector: &str) -> Vec<FakeElement> {
        self.root.find_all(selector)
    }

    fn body(&self) -> Option<FakeElement> {
        Some(self.body.clone())
    }

    fn create_element(&self, tag: &str) -> Result<FakeElement, DomError> {
        Ok(FakeElement::new(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_compound_and_attribute_forms() {
        let button = FakeElement::new("button").with_attribute("type", "submit");
        let form = FakeElement::new("form")
            .with_id("contactForm")
            .with_child(FakeElement::new("div").with_class("form-group").with_class("wide"))
            .with_child(button.clone());

        assert!(form.find("button[type=\"submit\"]").unwrap().same_node(&button));
        assert!(form.find("div.form-group.wide").is_some());
        assert!(form.find(".missing").is_none());
        assert_eq!(form.find_all("div, button").len(), 2);
        assert!(button.closest("#contactForm").unwrap().same_node(&form));
    }

    #[test]
    fn removed_elements_are_detached() {
        let doc = FakeDocument::new();
        let toast = doc.create_element("div").unwrap();
        doc.body_element().append_child(&toast).unwrap();
        assert!(toast.is_attached());

        toast.remove();
        assert!(!toast.is_attached());
        assert!(doc.body_element().find("div").is_none());
    }
}
