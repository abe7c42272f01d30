/*
[INPUT]:  Customer API schema definitions and serde requirements
[OUTPUT]: Typed customer record structs with camelCase wire names
[POS]:    Data layer - persisted customer record shapes
[UPDATE]: When the customer record schema changes
*/

use serde::{Deserialize, Deserializer, Serialize};

use super::enums::{ContactType, IdentityProofType};

/// The server sends `null` for unset nested objects and lists.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerName {
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub middle_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
}

impl CustomerName {
    /// "First Last", skipping blank parts.
    pub fn display_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerAddress {
    #[serde(deserialize_with = "null_as_default")]
    pub address_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetail {
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dial_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProof {
    #[serde(rename = "type")]
    pub proof_type: IdentityProofType,
    /// Document number; the API calls it `value`.
    #[serde(rename = "value", default, deserialize_with = "null_as_default")]
    pub document_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issued_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expiry_date: String,
}

/// Customer fields shared by the create/update body and the persisted record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub name: CustomerName,
    #[serde(deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_of_birth: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: CustomerAddress,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_details: Vec<ContactDetail>,
    #[serde(deserialize_with = "null_as_default")]
    pub identity_proofs: Vec<IdentityProof>,
}

/// A persisted customer as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    #[serde(flatten)]
    pub details: CustomerPayload,
}

impl Customer {
    pub fn display_name(&self) -> String {
        self.details.name.display_name()
    }
}
