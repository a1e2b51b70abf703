use log::debug;

use crate::config::FormConfig;
use crate::contact::fields::FormFields;
use crate::contact::service::{DocumentSection, ServiceSelection};
use crate::dom::Element;

/// Keeps the document upload sections in step with the selected service.
///
/// Each section is evaluated on its own: it is visible and its inputs are
/// required exactly when the selection asks for it. Hidden sections lose
/// their file selections and error markers, so nothing stale survives a
/// change of service.
#[derive(Debug, Clone)]
pub struct RequirementController {
    group_selector: String,
    error_class: String,
}

impl RequirementController {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            group_selector: config.selectors.form_group.clone(),
            error_class: config.error_class.clone(),
        }
    }

    pub fn on_service_change<E: Element>(&self, fields: &FormFields<E>, selection: &ServiceSelection) {
        debug!("Applying document requirements for service {:?}", selection);
        for section in DocumentSection::ALL {
            let visible = section.is_active_for(selection);
            let container = fields.section(section);
            if let Some(container) = container {
                container.set_hidden(!visible);
            }

            for &id in section.documents() {
                let Some(input) = fields.document(id) else { continue };
                input.set_required(visible);
                if !visible {
                    input.clear_files();
                    if let Some(group) = input.closest(&self.group_selector) {
                        group.remove_class(&self.error_class);
                    }
                }
            }

            if !visible {
                for group in container.into_iter().flat_map(|c| c.find_all(&self.group_selector)) {
                    group.remove_class(&self.error_class);
                }
            }
        }
    }

    /// Re-reads the service dropdown and applies it.
    pub fn sync<E: Element>(&self, fields: &FormFields<E>) {
        let selection = ServiceSelection::parse(&fields.service.value());
        self.on_service_change(fields, &selection);
    }
}
