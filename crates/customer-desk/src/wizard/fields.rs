/*
[INPUT]:  Draft record and a field identifier
[OUTPUT]: Field labels, kinds, current values, and setters
[POS]:    Wizard domain logic - addressable form fields
[UPDATE]: When draft fields are added or renamed
*/

use customer_desk_adapter::{ContactType, IdentityProofType};

use super::draft::Draft;

/// Every editable field of the draft. Collection fields carry the entry index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    FirstName,
    MiddleName,
    LastName,
    DateOfBirth,
    Gender,
    Language,
    AddressLine1,
    AddressLine2,
    City,
    State,
    Country,
    ZipCode,
    ContactType(usize),
    ContactValue(usize),
    ContactDialCode(usize),
    ProofType(usize),
    ProofNumber(usize),
    ProofIssuedDate(usize),
    ProofExpiryDate(usize),
}

/// Reference list a choice field cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceSet {
    ContactTypes,
    IdentityTypes,
    Genders,
    Languages,
    Countries,
    DialCodes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// `YYYY-MM-DD`
    Date,
    Choice(ChoiceSet),
}

impl FieldKey {
    pub fn label(self) -> String {
        match self {
            FieldKey::FirstName => "First name".to_string(),
            FieldKey::MiddleName => "Middle name".to_string(),
            FieldKey::LastName => "Last name".to_string(),
            FieldKey::DateOfBirth => "Date of birth".to_string(),
            FieldKey::Gender => "Gender".to_string(),
            FieldKey::Language => "Language".to_string(),
            FieldKey::AddressLine1 => "Address line 1".to_string(),
            FieldKey::AddressLine2 => "Address line 2".to_string(),
            FieldKey::City => "City".to_string(),
            FieldKey::State => "State".to_string(),
            FieldKey::Country => "Country".to_string(),
            FieldKey::ZipCode => "Zip code".to_string(),
            FieldKey::ContactType(i) => format!("Contact {} type", i + 1),
            FieldKey::ContactValue(i) => format!("Contact {} value", i + 1),
            FieldKey::ContactDialCode(i) => format!("Contact {} dial code", i + 1),
            FieldKey::ProofType(i) => format!("Document {} type", i + 1),
            FieldKey::ProofNumber(i) => format!("Document {} number", i + 1),
            FieldKey::ProofIssuedDate(i) => format!("Document {} issued", i + 1),
            FieldKey::ProofExpiryDate(i) => format!("Document {} expires", i + 1),
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldKey::DateOfBirth | FieldKey::ProofIssuedDate(_) | FieldKey::ProofExpiryDate(_) => {
                FieldKind::Date
            }
            FieldKey::Gender => FieldKind::Choice(ChoiceSet::Genders),
            FieldKey::Language => FieldKind::Choice(ChoiceSet::Languages),
            FieldKey::Country => FieldKind::Choice(ChoiceSet::Countries),
            FieldKey::ContactType(_) => FieldKind::Choice(ChoiceSet::ContactTypes),
            FieldKey::ContactDialCode(_) => FieldKind::Choice(ChoiceSet::DialCodes),
            FieldKey::ProofType(_) => FieldKind::Choice(ChoiceSet::IdentityTypes),
            _ => FieldKind::Text,
        }
    }

    /// Current value as text; out-of-range entries read as empty.
    pub fn read(self, draft: &Draft) -> String {
        let personal = &draft.personal;
        let address = &draft.address;
        let contact = |i: usize| draft.contact_details.get(i);
        let proof = |i: usize| draft.identity_proofs.get(i);
        match self {
            FieldKey::FirstName => personal.name.first_name.clone(),
            FieldKey::MiddleName => personal.name.middle_name.clone(),
            FieldKey::LastName => personal.name.last_name.clone(),
            FieldKey::DateOfBirth => personal.date_of_birth.clone(),
            FieldKey::Gender => personal.gender.clone(),
            FieldKey::Language => personal.language.clone(),
            FieldKey::AddressLine1 => address.address_line1.clone(),
            FieldKey::AddressLine2 => address.address_line2.clone().unwrap_or_default(),
            FieldKey::City => address.city.clone(),
            FieldKey::State => address.state.clone(),
            FieldKey::Country => address.country.clone(),
            FieldKey::ZipCode => address.zip_code.clone(),
            FieldKey::ContactType(i) => contact(i)
                .map(|c| c.contact_type.label().to_string())
                .unwrap_or_default(),
            FieldKey::ContactValue(i) => contact(i).map(|c| c.value.clone()).unwrap_or_default(),
            FieldKey::ContactDialCode(i) => contact(i)
                .and_then(|c| c.dial_code.clone())
                .unwrap_or_default(),
            FieldKey::ProofType(i) => proof(i)
                .map(|p| p.proof_type.label().to_string())
                .unwrap_or_default(),
            FieldKey::ProofNumber(i) => proof(i)
                .map(|p| p.document_number.clone())
                .unwrap_or_default(),
            FieldKey::ProofIssuedDate(i) => {
                proof(i).map(|p| p.issued_date.clone()).unwrap_or_default()
            }
            FieldKey::ProofExpiryDate(i) => {
                proof(i).map(|p| p.expiry_date.clone()).unwrap_or_default()
            }
        }
    }

    pub fn is_blank(self, draft: &Draft) -> bool {
        self.read(draft).trim().is_empty()
    }

    /// Plain assignment with no cross-field rules.
    ///
    /// Unknown type labels and out-of-range indices leave the draft untouched.
    pub(crate) fn write(self, draft: &mut Draft, value: &str) {
        let value_owned = value.to_string();
        match self {
            FieldKey::FirstName => draft.personal.name.first_name = value_owned,
            FieldKey::MiddleName => draft.personal.name.middle_name = value_owned,
            FieldKey::LastName => draft.personal.name.last_name = value_owned,
            FieldKey::DateOfBirth => draft.personal.date_of_birth = value_owned,
            FieldKey::Gender => draft.personal.gender = value_owned,
            FieldKey::Language => draft.personal.language = value_owned,
            FieldKey::AddressLine1 => draft.address.address_line1 = value_owned,
            FieldKey::AddressLine2 => draft.address.address_line2 = Some(value_owned),
            FieldKey::City => draft.address.city = value_owned,
            FieldKey::State => draft.address.state = value_owned,
            FieldKey::Country => draft.address.country = value_owned,
            FieldKey::ZipCode => draft.address.zip_code = value_owned,
            FieldKey::ContactType(i) => {
                if let (Some(entry), Some(kind)) =
                    (draft.contact_details.get_mut(i), ContactType::from_label(value))
                {
                    entry.contact_type = kind;
                }
            }
            FieldKey::ContactValue(i) => {
                if let Some(entry) = draft.contact_details.get_mut(i) {
                    entry.value = value_owned;
                }
            }
            FieldKey::ContactDialCode(i) => {
                if let Some(entry) = draft.contact_details.get_mut(i) {
                    entry.dial_code = Some(value_owned);
                }
            }
            FieldKey::ProofType(i) => {
                if let (Some(entry), Some(kind)) = (
                    draft.identity_proofs.get_mut(i),
                    IdentityProofType::from_label(value),
                ) {
                    entry.proof_type = kind;
                }
            }
            FieldKey::ProofNumber(i) => {
                if let Some(entry) = draft.identity_proofs.get_mut(i) {
                    entry.document_number = value_owned;
                }
            }
            FieldKey::ProofIssuedDate(i) => {
                if let Some(entry) = draft.identity_proofs.get_mut(i) {
                    entry.issued_date = value_owned;
                }
            }
            FieldKey::ProofExpiryDate(i) => {
                if let Some(entry) = draft.identity_proofs.get_mut(i) {
                    entry.expiry_date = value_owned;
                }
            }
        }
    }
}
