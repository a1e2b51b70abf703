use crate::contact::fields::{FieldId, FormFields};
use crate::contact::service::ServiceSelection;
use crate::dom::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequirement {
    pub field: FieldId,
    pub section_visible: bool,
    pub mandatory: bool,
    pub current_file: Option<String>,
}

/// Everything the visitor entered, read once when they press submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub service: ServiceSelection,
    pub documents: Vec<DocumentRequirement>,
}

impl FormSnapshot {
    pub fn capture<E: Element>(fields: &FormFields<E>) -> Self {
        let service = ServiceSelection::parse(&fields.service.value());
        let documents = FieldId::DOCUMENTS
            .into_iter()
            .map(|field| {
                let active = field.section().map_or(false, |s| s.is_active_for(&service));
                DocumentRequirement {
                    field,
                    section_visible: active,
                    mandatory: active,
                    current_file: fields.document(field).and_then(Element::first_file_name),
                }
            })
            .collect();

        Self {
            name: fields.name.value(),
            email: fields.email.value(),
            phone: fields.phone.value(),
            message: fields.message.value(),
            service,
            documents,
        }
    }

    pub fn file_name(&self, field: FieldId) -> &str {
        self.documents
            .iter()
            .find(|doc| doc.field == field)
            .and_then(|doc| doc.current_file.as_deref())
            .unwrap_or("")
    }
}
