use serde::Serialize;

use crate::contact::fields::FieldId;
use crate::contact::snapshot::FormSnapshot;

/// JSON body posted to the webhook. Only file names travel, never contents,
/// and every document key is present even when empty.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub class_receipt_document: String,
    pub aadhar_front_document: String,
    pub aadhar_back_document: String,
    pub donation_receipt_document: String,
}

impl ContactPayload {
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        Self {
            name: snapshot.name.clone(),
            email: snapshot.email.clone(),
            phone: snapshot.phone.clone(),
            service: snapshot.service.as_str().to_string(),
            message: snapshot.message.clone(),
            class_receipt_document: snapshot.file_name(FieldId::ClassReceipt).to_string(),
            aadhar_front_document: snapshot.file_name(FieldId::AadharFront).to_string(),
            aadhar_back_document: snapshot.file_name(FieldId::AadharBack).to_string(),
            donation_receipt_document: snapshot.file_name(FieldId::DonationReceipt).to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
