use log::Level;

use crate::contact::fields::FieldId;
use crate::contact::service::DocumentSection;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Value shipped in the page template until a real webhook URL is pasted in.
pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_GOOGLE_SCRIPT_URL_HERE";

#[derive(Debug, Clone)]
pub struct Selectors {
    pub form: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub service: String,
    pub submit: String,
    pub class_registration_docs: String,
    pub donation_docs: String,
    pub class_receipt: String,
    pub aadhar_front: String,
    pub aadhar_back: String,
    pub donation_receipt: String,
    pub form_group: String,
    pub editable: String,
}

impl Selectors {
    pub fn field(&self, id: FieldId) -> &str {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Message => &self.message,
            FieldId::ClassReceipt => &self.class_receipt,
            FieldId::AadharFront => &self.aadhar_front,
            FieldId::AadharBack => &self.aadhar_back,
            FieldId::DonationReceipt => &self.donation_receipt,
        }
    }

    pub fn section(&self, section: DocumentSection) -> &str {
        match section {
            DocumentSection::ClassRegistration => &self.class_registration_docs,
            DocumentSection::Donation => &self.donation_docs,
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            form: "#contactForm".to_string(),
            name: "#name".to_string(),
            email: "#email".to_string(),
            phone: "#phone".to_string(),
            message: "#message".to_string(),
            service: "#service".to_string(),
            submit: "button[type=\"submit\"]".to_string(),
            class_registration_docs: "#classRegistrationDocs".to_string(),
            donation_docs: "#donationDocs".to_string(),
            class_receipt: "#classReceipt".to_string(),
            aadhar_front: "#aadharFront".to_string(),
            aadhar_back: "#aadharBack".to_string(),
            donation_receipt: "#donationReceipt".to_string(),
            form_group: ".form-group".to_string(),
            editable: "input, textarea, select".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    /// How long the toast stays fully visible.
    pub dwell_ms: u32,
    /// Length of the CSS exit transition; the element is removed afterwards.
    pub exit_ms: u32,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            dwell_ms: 4000,
            exit_ms: 400,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Messages {
    pub sent: String,
    pub received_locally: String,
    pub send_failed: String,
    pub invalid: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            // The webhook response is opaque, so this only claims the request went out.
            sent: "Thank you! Your message has been sent.".to_string(),
            received_locally: "Thank you! Message received (Sheets URL not set).".to_string(),
            send_failed: "Failed to connect to Google Sheets. Please check your URL or connection."
                .to_string(),
            invalid: "Please fill in all required fields correctly.".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormConfig {
    pub selectors: Selectors,
    /// Attribute on the form element holding the webhook URL.
    pub endpoint_attribute: String,
    pub endpoint_placeholder: String,
    pub busy_label: String,
    pub error_class: String,
    pub toast: ToastTiming,
    pub messages: Messages,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            endpoint_attribute: "data-sheet-url".to_string(),
            endpoint_placeholder: ENDPOINT_PLACEHOLDER.to_string(),
            busy_label: "<i class=\"fas fa-spinner fa-spin\"></i> Sending...".to_string(),
            error_class: "error".to_string(),
            toast: ToastTiming::default(),
            messages: Messages::default(),
        }
    }
}
