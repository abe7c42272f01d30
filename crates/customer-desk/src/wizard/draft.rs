/*
[INPUT]:  Empty defaults or a persisted Customer from the API
[OUTPUT]: Draft record, DraftStore with whole-value updates, API payloads
[POS]:    Wizard domain logic - form state store
[UPDATE]: When the customer record shape or draft defaults change
*/

use customer_desk_adapter::{
    ContactDetail, ContactType, Customer, CustomerAddress, CustomerName, CustomerPayload,
    IdentityProof, IdentityProofType,
};

use super::machine::Step;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: CustomerName,
    pub date_of_birth: String,
    pub gender: String,
    pub language: String,
}

/// In-progress customer record edited by the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub current_step: Step,
    pub personal: PersonalInfo,
    pub address: CustomerAddress,
    pub contact_details: Vec<ContactDetail>,
    pub identity_proofs: Vec<IdentityProof>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            current_step: Step::FIRST,
            personal: PersonalInfo::default(),
            address: CustomerAddress::default(),
            contact_details: vec![initial_contact()],
            identity_proofs: vec![initial_identity_proof()],
        }
    }
}

fn initial_contact() -> ContactDetail {
    ContactDetail {
        contact_type: ContactType::Email,
        value: String::new(),
        dial_code: None,
    }
}

fn initial_identity_proof() -> IdentityProof {
    IdentityProof {
        proof_type: IdentityProofType::Passport,
        document_number: String::new(),
        issued_date: String::new(),
        expiry_date: String::new(),
    }
}

/// Entry appended by "add contact".
pub fn new_contact(default_dial_code: &str) -> ContactDetail {
    ContactDetail {
        contact_type: ContactType::Phone,
        value: String::new(),
        dial_code: Some(default_dial_code.to_string()),
    }
}

/// Entry appended by "add identity document".
pub fn new_identity_proof() -> IdentityProof {
    IdentityProof {
        proof_type: IdentityProofType::DriverLicense,
        ..initial_identity_proof()
    }
}

impl Draft {
    /// Hydrate from a persisted record; empty collections get their default entry.
    ///
    /// Phone-like contacts stored without a dial code get `default_dial_code`,
    /// as if the type had just been switched to.
    pub fn from_customer(customer: Customer, default_dial_code: &str) -> Self {
        let CustomerPayload {
            name,
            gender,
            language,
            date_of_birth,
            address,
            mut contact_details,
            mut identity_proofs,
        } = customer.details;

        if contact_details.is_empty() {
            contact_details.push(initial_contact());
        }
        for contact in contact_details
            .iter_mut()
            .filter(|contact| contact.contact_type.is_phone_like())
        {
            let blank = contact
                .dial_code
                .as_deref()
                .is_none_or(|code| code.trim().is_empty());
            if blank {
                contact.dial_code = Some(default_dial_code.to_string());
            }
        }
        if identity_proofs.is_empty() {
            identity_proofs.push(initial_identity_proof());
        }

        Self {
            current_step: Step::FIRST,
            personal: PersonalInfo {
                name,
                date_of_birth,
                gender,
                language,
            },
            address,
            contact_details,
            identity_proofs,
        }
    }

    /// Request body: the draft minus the step index.
    ///
    /// Dial codes are only sent for phone-like contacts; a blank line 2 is omitted.
    pub fn to_payload(&self) -> CustomerPayload {
        let mut address = self.address.clone();
        if address
            .address_line2
            .as_deref()
            .is_some_and(|line| line.trim().is_empty())
        {
            address.address_line2 = None;
        }

        let contact_details = self
            .contact_details
            .iter()
            .map(|contact| ContactDetail {
                dial_code: contact
                    .dial_code
                    .clone()
                    .filter(|_| contact.contact_type.is_phone_like()),
                ..contact.clone()
            })
            .collect();

        CustomerPayload {
            name: self.personal.name.clone(),
            gender: self.personal.gender.clone(),
            language: self.personal.language.clone(),
            date_of_birth: self.personal.date_of_birth.clone(),
            address,
            contact_details,
            identity_proofs: self.identity_proofs.clone(),
        }
    }
}

/// Holds exactly one draft. Every change replaces the whole value.
#[derive(Debug, Default)]
pub struct DraftStore {
    draft: Draft,
}

impl DraftStore {
    pub fn new(draft: Draft) -> Self {
        Self { draft }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(Draft) -> Draft,
    {
        let current = std::mem::take(&mut self.draft);
        self.draft = f(current);
    }
}
