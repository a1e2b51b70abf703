use wasm_bindgen::JsCast;
use web_sys::{
    HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, NodeList,
};

use super::{Document, DomError, Element};

#[derive(Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|document| Self { document })
    }
}

#[derive(Clone, Debug)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    pub fn raw(&self) -> &web_sys::Element {
        &self.0
    }
}

fn elements(list: NodeList) -> Vec<WebElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(WebElement)
        .collect()
}

impl Document for WebDocument {
    type Element = WebElement;

    fn find(&self, selector: &str) -> Option<WebElement> {
        self.document.query_selector(selector).ok().flatten().map(WebElement)
    }

    #[cfg(test)]
    fn find_all(&self, selector: &str) -> Vec<WebElement> {
        self.document
            .query_selector_all(selector)
            .map(elements)
            .unwrap_or_default()
    }

    fn body(&self) -> Option<WebElement> {
        self.document.body().map(|body| WebElement(body.into()))
    }

    fn create_element(&self, tag: &str) -> Result<WebElement, DomError> {
        self.document
            .create_element(tag)
            .map(WebElement)
            .map_err(|_| DomError::CreateElement(tag.to_string()))
    }
}

impl Element for WebElement {
    fn find(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(WebElement)
    }

    fn find_all(&self, selector: &str) -> Vec<Self> {
        self.0
            .query_selector_all(selector)
            .map(elements)
            .unwrap_or_default()
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        self.0.closest(selector).ok().flatten().map(WebElement)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn first_file_name(&self) -> Option<String> {
        let files = self.0.dyn_ref::<HtmlInputElement>()?.files()?;
        files.get(0).map(|file| file.name())
    }

    fn clear_files(&self) {
        // Assigning an empty value is the only way to drop a file selection.
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value("");
        }
    }

    fn set_hidden(&self, hidden: bool) {
        if let Some(el) = self.0.dyn_ref::<HtmlElement>() {
            el.set_hidden(hidden);
        }
    }

    #[cfg(test)]
    fn is_hidden(&self) -> bool {
        self.0
            .dyn_ref::<HtmlElement>()
            .map_or(false, |el| el.hidden())
    }

    fn set_required(&self, required: bool) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_required(required);
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.set_required(required);
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.set_required(required);
        }
    }

    #[cfg(test)]
    fn is_required(&self) -> bool {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.required()
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.required()
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.required()
        } else {
            false
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        }
    }

    fn is_disabled(&self) -> bool {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.disabled()
        } else if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.disabled()
        } else {
            false
        }
    }

    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_class_name(&self, class_name: &str) {
        self.0.set_class_name(class_name);
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    #[cfg(test)]
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        self.0
            .append_child(&child.0)
            .map(|_| ())
            .map_err(|_| DomError::Append)
    }

    fn remove(&self) {
        self.0.remove();
    }

    fn reset_form(&self) {
        if let Some(form) = self.0.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn scroll_into_view(&self) {
        self.0.scroll_into_view();
    }
}
