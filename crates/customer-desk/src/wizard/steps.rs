/*
[INPUT]:  Draft record, field edits, add/remove requests
[OUTPUT]: Per-step field lists, required-field checks, pure Draft -> Draft edits
[POS]:    Wizard domain logic - the five step forms
[UPDATE]: When a step gains fields or its validation rules change
*/

use super::draft::{Draft, new_contact, new_identity_proof};
use super::fields::FieldKey;
use super::machine::Step;

/// Behavior shared by every wizard step.
///
/// All edits take the draft by value and hand back the replacement, so the
/// store can swap it in one assignment.
pub trait StepForm: Send + Sync {
    fn step(&self) -> Step;

    /// Fields in render order.
    fn fields(&self, draft: &Draft) -> Vec<FieldKey>;

    /// Required fields that are empty or whitespace-only.
    fn missing(&self, draft: &Draft) -> Vec<FieldKey>;

    fn validate(&self, draft: &Draft) -> bool {
        self.missing(draft).is_empty()
    }

    fn on_field_change(&self, mut draft: Draft, field: FieldKey, value: &str) -> Draft {
        field.write(&mut draft, value);
        draft
    }

    /// Append a default entry. Steps without a collection return the draft as-is.
    fn add_entry(&self, draft: Draft) -> Draft {
        draft
    }

    /// Remove the entry at `index`; ignored when only one entry remains.
    fn remove_entry(&self, draft: Draft, _index: usize) -> Draft {
        draft
    }
}

fn blank_fields(draft: &Draft, required: impl IntoIterator<Item = FieldKey>) -> Vec<FieldKey> {
    required
        .into_iter()
        .filter(|field| field.is_blank(draft))
        .collect()
}

pub struct PersonalInfoForm;

impl StepForm for PersonalInfoForm {
    fn step(&self) -> Step {
        Step::PersonalInfo
    }

    fn fields(&self, _draft: &Draft) -> Vec<FieldKey> {
        vec![
            FieldKey::FirstName,
            FieldKey::MiddleName,
            FieldKey::LastName,
            FieldKey::DateOfBirth,
            FieldKey::Gender,
            FieldKey::Language,
        ]
    }

    fn missing(&self, draft: &Draft) -> Vec<FieldKey> {
        blank_fields(
            draft,
            [
                FieldKey::FirstName,
                FieldKey::LastName,
                FieldKey::DateOfBirth,
                FieldKey::Gender,
                FieldKey::Language,
            ],
        )
    }
}

pub struct AddressForm;

impl StepForm for AddressForm {
    fn step(&self) -> Step {
        Step::Address
    }

    fn fields(&self, _draft: &Draft) -> Vec<FieldKey> {
        vec![
            FieldKey::AddressLine1,
            FieldKey::AddressLine2,
            FieldKey::City,
            FieldKey::State,
            FieldKey::Country,
            FieldKey::ZipCode,
        ]
    }

    fn missing(&self, draft: &Draft) -> Vec<FieldKey> {
        blank_fields(
            draft,
            [
                FieldKey::AddressLine1,
                FieldKey::City,
                FieldKey::State,
                FieldKey::Country,
                FieldKey::ZipCode,
            ],
        )
    }
}

pub struct ContactDetailsForm {
    default_dial_code: String,
}

impl ContactDetailsForm {
    pub fn new(default_dial_code: impl Into<String>) -> Self {
        Self {
            default_dial_code: default_dial_code.into(),
        }
    }
}

impl StepForm for ContactDetailsForm {
    fn step(&self) -> Step {
        Step::ContactDetails
    }

    fn fields(&self, draft: &Draft) -> Vec<FieldKey> {
        draft
            .contact_details
            .iter()
            .enumerate()
            .flat_map(|(i, contact)| {
                let mut fields = vec![FieldKey::ContactType(i)];
                if contact.contact_type.is_phone_like() {
                    fields.push(FieldKey::ContactDialCode(i));
                }
                fields.push(FieldKey::ContactValue(i));
                fields
            })
            .collect()
    }

    fn missing(&self, draft: &Draft) -> Vec<FieldKey> {
        let required = draft
            .contact_details
            .iter()
            .enumerate()
            .flat_map(|(i, contact)| {
                let mut fields = vec![FieldKey::ContactValue(i)];
                if contact.contact_type.is_phone_like() {
                    fields.push(FieldKey::ContactDialCode(i));
                }
                fields
            })
            .collect::<Vec<_>>();
        blank_fields(draft, required)
    }

    fn on_field_change(&self, mut draft: Draft, field: FieldKey, value: &str) -> Draft {
        field.write(&mut draft, value);
        if let FieldKey::ContactType(i) = field
            && let Some(contact) = draft.contact_details.get_mut(i)
            && contact.contact_type.is_phone_like()
            && contact.dial_code.is_none()
        {
            contact.dial_code = Some(self.default_dial_code.clone());
        }
        draft
    }

    fn add_entry(&self, mut draft: Draft) -> Draft {
        draft
            .contact_details
            .push(new_contact(&self.default_dial_code));
        draft
    }

    fn remove_entry(&self, mut draft: Draft, index: usize) -> Draft {
        if draft.contact_details.len() > 1 && index < draft.contact_details.len() {
            draft.contact_details.remove(index);
        }
        draft
    }
}

pub struct IdentityProofsForm;

impl StepForm for IdentityProofsForm {
    fn step(&self) -> Step {
        Step::IdentityProofs
    }

    fn fields(&self, draft: &Draft) -> Vec<FieldKey> {
        (0..draft.identity_proofs.len())
            .flat_map(|i| {
                [
                    FieldKey::ProofType(i),
                    FieldKey::ProofNumber(i),
                    FieldKey::ProofIssuedDate(i),
                    FieldKey::ProofExpiryDate(i),
                ]
            })
            .collect()
    }

    fn missing(&self, draft: &Draft) -> Vec<FieldKey> {
        let required = (0..draft.identity_proofs.len()).flat_map(|i| {
            [
                FieldKey::ProofNumber(i),
                FieldKey::ProofIssuedDate(i),
                FieldKey::ProofExpiryDate(i),
            ]
        });
        blank_fields(draft, required)
    }

    fn add_entry(&self, mut draft: Draft) -> Draft {
        draft.identity_proofs.push(new_identity_proof());
        draft
    }

    fn remove_entry(&self, mut draft: Draft, index: usize) -> Draft {
        if draft.identity_proofs.len() > 1 && index < draft.identity_proofs.len() {
            draft.identity_proofs.remove(index);
        }
        draft
    }
}

/// Read-only summary; nothing to fill in.
pub struct ReviewForm;

impl StepForm for ReviewForm {
    fn step(&self) -> Step {
        Step::Review
    }

    fn fields(&self, _draft: &Draft) -> Vec<FieldKey> {
        Vec::new()
    }

    fn missing(&self, _draft: &Draft) -> Vec<FieldKey> {
        Vec::new()
    }

    fn on_field_change(&self, draft: Draft, _field: FieldKey, _value: &str) -> Draft {
        draft
    }
}

/// One form per step.
pub struct StepForms {
    personal: PersonalInfoForm,
    address: AddressForm,
    contacts: ContactDetailsForm,
    identity: IdentityProofsForm,
    review: ReviewForm,
}

impl StepForms {
    pub fn new(default_dial_code: &str) -> Self {
        Self {
            personal: PersonalInfoForm,
            address: AddressForm,
            contacts: ContactDetailsForm::new(default_dial_code),
            identity: IdentityProofsForm,
            review: ReviewForm,
        }
    }

    pub fn get(&self, step: Step) -> &dyn StepForm {
        match step {
            Step::PersonalInfo => &self.personal,
            Step::Address => &self.address,
            Step::ContactDetails => &self.contacts,
            Step::IdentityProofs => &self.identity,
            Step::Review => &self.review,
        }
    }
}
