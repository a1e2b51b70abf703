//! The slice of the page the contact form talks to.
//!
//! Everything above this module works against [`Document`] and [`Element`]
//! so it runs the same against the browser ([`web`]) and the in-memory
//! document used by the unit tests.

#[cfg(test)]
pub mod fake;
pub mod web;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("document has no body")]
    NoBody,
    #[error("failed to create <{0}> element")]
    CreateElement(String),
    #[error("failed to append element")]
    Append,
}

pub trait Document {
    type Element: Element;

    fn find(&self, selector: &str) -> Option<Self::Element>;
    #[cfg(test)]
    fn find_all(&self, selector: &str) -> Vec<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
    fn create_element(&self, tag: &str) -> Result<Self::Element, DomError>;
}

/// Cheap, cloneable handle to a live element.
pub trait Element: Clone + 'static {
    fn find(&self, selector: &str) -> Option<Self>;
    fn find_all(&self, selector: &str) -> Vec<Self>;
    /// Nearest ancestor (or self) matching `selector`.
    fn closest(&self, selector: &str) -> Option<Self>;
    fn attribute(&self, name: &str) -> Option<String>;

    /// Current value of an input, select or textarea. Empty for anything else.
    fn value(&self) -> String;
    /// Name of the first selected file of a file input.
    fn first_file_name(&self) -> Option<String>;
    fn clear_files(&self);

    fn set_hidden(&self, hidden: bool);
    #[cfg(test)]
    fn is_hidden(&self) -> bool;
    fn set_required(&self, required: bool);
    #[cfg(test)]
    fn is_required(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
    fn is_disabled(&self) -> bool;

    fn inner_html(&self) -> String;
    fn set_inner_html(&self, html: &str);
    fn set_text(&self, text: &str);

    fn set_class_name(&self, class_name: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    #[cfg(test)]
    fn has_class(&self, class: &str) -> bool;

    fn append_child(&self, child: &Self) -> Result<(), DomError>;
    fn remove(&self);
    /// Restores every control of a form element to its initial state.
    fn reset_form(&self);
    fn scroll_into_view(&self);
}
