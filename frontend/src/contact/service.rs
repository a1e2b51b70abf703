use crate::contact::fields::FieldId;

/// What the visitor is contacting us about, as picked in the service dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceSelection {
    ClassRegistration,
    Donation,
    Other(String),
    Unselected,
}

impl ServiceSelection {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" => ServiceSelection::Unselected,
            "class-registration" => ServiceSelection::ClassRegistration,
            "donation" => ServiceSelection::Donation,
            other => ServiceSelection::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ServiceSelection::ClassRegistration => "class-registration",
            ServiceSelection::Donation => "donation",
            ServiceSelection::Other(value) => value,
            ServiceSelection::Unselected => "",
        }
    }
}

/// Group of upload fields shown only for one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentSection {
    ClassRegistration,
    Donation,
}

impl DocumentSection {
    pub const ALL: [DocumentSection; 2] = [DocumentSection::ClassRegistration, DocumentSection::Donation];

    pub fn is_active_for(self, selection: &ServiceSelection) -> bool {
        match self {
            DocumentSection::ClassRegistration => *selection == ServiceSelection::ClassRegistration,
            DocumentSection::Donation => *selection == ServiceSelection::Donation,
        }
    }

    pub fn documents(self) -> &'static [FieldId] {
        match self {
            DocumentSection::ClassRegistration => &[FieldId::ClassReceipt],
            DocumentSection::Donation => &[
                FieldId::AadharFront,
                FieldId::AadharBack,
                FieldId::DonationReceipt,
            ],
        }
    }
}
