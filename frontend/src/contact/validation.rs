use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::contact::fields::FieldId;
use crate::contact::snapshot::FormSnapshot;

const MIN_PHONE_LENGTH: usize = 10;

// Permissive shape check: something@something.something, no spaces.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    invalid: BTreeSet<FieldId>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, field: FieldId) -> bool {
        self.invalid.contains(&field)
    }

    /// Failing fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.invalid.iter().copied()
    }

    fn flag(&mut self, field: FieldId, failed: bool) {
        if failed {
            self.invalid.insert(field);
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks every rule and reports all failures at once.
pub fn validate(snapshot: &FormSnapshot) -> ValidationResult {
    let mut result = ValidationResult::default();

    result.flag(FieldId::Name, snapshot.name.trim().is_empty());

    let email = snapshot.email.trim();
    result.flag(FieldId::Email, email.is_empty() || !is_valid_email(&snapshot.email));

    let phone = snapshot.phone.trim();
    result.flag(
        FieldId::Phone,
        phone.is_empty() || phone.chars().count() < MIN_PHONE_LENGTH,
    );

    result.flag(FieldId::Message, snapshot.message.trim().is_empty());

    for doc in snapshot.documents.iter().filter(|doc| doc.mandatory) {
        debug_assert!(doc.section_visible, "{:?} required while hidden", doc.field);
        result.flag(doc.field, doc.current_file.is_none());
    }

    result
}
