/*
[INPUT]:  Customer API schema definitions and serde requirements
[OUTPUT]: Typed enums for contact kinds, identity document kinds, and sort order
[POS]:    Data layer - enum definitions for API communication
[UPDATE]: When the API adds contact or identity document kinds
*/

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactType {
    Email,
    Phone,
    Mobile,
    Work,
    #[serde(other)]
    Other,
}

impl ContactType {
    pub const ALL: [ContactType; 5] = [
        ContactType::Email,
        ContactType::Phone,
        ContactType::Mobile,
        ContactType::Work,
        ContactType::Other,
    ];

    /// Phone-like kinds carry a dialing code next to the number.
    pub fn is_phone_like(self) -> bool {
        matches!(
            self,
            ContactType::Phone | ContactType::Mobile | ContactType::Work
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactType::Email => "Email",
            ContactType::Phone => "Phone",
            ContactType::Mobile => "Mobile",
            ContactType::Work => "Work",
            ContactType::Other => "Other",
        }
    }

    /// Lenient label lookup; anything unrecognised is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityProofType {
    Passport,
    #[serde(rename = "Driver License")]
    DriverLicense,
    #[serde(rename = "National ID")]
    NationalId,
    #[serde(rename = "Social Security")]
    SocialSecurity,
    #[serde(other)]
    Other,
}

impl IdentityProofType {
    pub const ALL: [IdentityProofType; 5] = [
        IdentityProofType::Passport,
        IdentityProofType::DriverLicense,
        IdentityProofType::NationalId,
        IdentityProofType::SocialSecurity,
        IdentityProofType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IdentityProofType::Passport => "Passport",
            IdentityProofType::DriverLicense => "Driver License",
            IdentityProofType::NationalId => "National ID",
            IdentityProofType::SocialSecurity => "Social Security",
            IdentityProofType::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for IdentityProofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_contact_type_decodes_as_other() {
        let kind: ContactType = serde_json::from_str("\"Fax\"").expect("decode");
        assert_eq!(kind, ContactType::Other);
    }

    #[test]
    fn test_identity_type_uses_display_labels_on_the_wire() {
        let encoded = serde_json::to_string(&IdentityProofType::DriverLicense).expect("encode");
        assert_eq!(encoded, "\"Driver License\"");
        let decoded: IdentityProofType =
            serde_json::from_str("\"Social Security\"").expect("decode");
        assert_eq!(decoded, IdentityProofType::SocialSecurity);
    }

    #[test]
    fn test_phone_like_kinds() {
        assert!(ContactType::Phone.is_phone_like());
        assert!(ContactType::Mobile.is_phone_like());
        assert!(ContactType::Work.is_phone_like());
        assert!(!ContactType::Email.is_phone_like());
        assert!(!ContactType::Other.is_phone_like());
    }

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(ContactType::from_label(" mobile "), Some(ContactType::Mobile));
        assert_eq!(
            IdentityProofType::from_label("national id"),
            Some(IdentityProofType::NationalId)
        );
        assert_eq!(ContactType::from_label("pager"), None);
    }
}
