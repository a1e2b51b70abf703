use std::collections::BTreeMap;

use thiserror::Error;

use crate::config::Selectors;
use crate::contact::service::DocumentSection;
use crate::dom::Element;

/// Fields that can fail validation. Ordering is for reporting only and says
/// nothing about where a field sits on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Message,
    ClassReceipt,
    AadharFront,
    AadharBack,
    DonationReceipt,
}

impl FieldId {
    #[cfg(test)]
    pub const PLAIN: [FieldId; 4] = [FieldId::Name, FieldId::Email, FieldId::Phone, FieldId::Message];
    pub const DOCUMENTS: [FieldId; 4] = [
        FieldId::ClassReceipt,
        FieldId::AadharFront,
        FieldId::AadharBack,
        FieldId::DonationReceipt,
    ];

    pub fn section(self) -> Option<DocumentSection> {
        match self {
            FieldId::ClassReceipt => Some(DocumentSection::ClassRegistration),
            FieldId::AadharFront | FieldId::AadharBack | FieldId::DonationReceipt => {
                Some(DocumentSection::Donation)
            }
            FieldId::Name | FieldId::Email | FieldId::Phone | FieldId::Message => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("contact form element `{0}` not found")]
    MissingElement(String),
}

/// Handles to every element of the contact form, resolved once at mount.
///
/// Document sections and their upload inputs are optional: a page without
/// them simply never asks for documents.
pub struct FormFields<E> {
    pub form: E,
    pub name: E,
    pub email: E,
    pub phone: E,
    pub message: E,
    pub service: E,
    pub submit: E,
    sections: BTreeMap<DocumentSection, E>,
    documents: BTreeMap<FieldId, E>,
}

impl<E: Element> FormFields<E> {
    pub fn resolve(form: E, selectors: &Selectors) -> Result<Self, FormError> {
        let required = |selector: &str| {
            form.find(selector)
                .ok_or_else(|| FormError::MissingElement(selector.to_string()))
        };

        let name = required(&selectors.name)?;
        let email = required(&selectors.email)?;
        let phone = required(&selectors.phone)?;
        let message = required(&selectors.message)?;
        let service = required(&selectors.service)?;
        let submit = required(&selectors.submit)?;

        let sections = DocumentSection::ALL
            .into_iter()
            .filter_map(|section| form.find(selectors.section(section)).map(|el| (section, el)))
            .collect();
        let documents = FieldId::DOCUMENTS
            .into_iter()
            .filter_map(|id| form.find(selectors.field(id)).map(|el| (id, el)))
            .collect();

        Ok(Self {
            form,
            name,
            email,
            phone,
            message,
            service,
            submit,
            sections,
            documents,
        })
    }

    pub fn field(&self, id: FieldId) -> Option<&E> {
        match id {
            FieldId::Name => Some(&self.name),
            FieldId::Email => Some(&self.email),
            FieldId::Phone => Some(&self.phone),
            FieldId::Message => Some(&self.message),
            _ => self.documents.get(&id),
        }
    }

    pub fn section(&self, section: DocumentSection) -> Option<&E> {
        self.sections.get(&section)
    }

    pub fn document(&self, id: FieldId) -> Option<&E> {
        self.documents.get(&id)
    }
}
