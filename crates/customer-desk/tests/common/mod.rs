/*
[INPUT]:  Mock server and fixture requirements for desk flows
[OUTPUT]: Shared client builders and JSON fixtures
[POS]:    Test infrastructure - shared across desk integration tests
[UPDATE]: When adding new test patterns or fixtures
*/

#![allow(dead_code)]

use customer_desk::wizard::{FieldKey, WizardController};
use customer_desk::{ClientConfig, CustomerClient};
use wiremock::MockServer;

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn client_for(server: &MockServer) -> CustomerClient {
    CustomerClient::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client init")
}

pub fn customer_body(id: u64, first_name: &str, country: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": { "firstName": first_name, "middleName": "", "lastName": "Hopper" },
        "gender": "female",
        "language": "English",
        "dateOfBirth": "1906-12-09",
        "address": {
            "addressLine1": "1 Navy Yard",
            "city": "Arlington",
            "state": "VA",
            "country": country,
            "zipCode": "22202"
        },
        "contactDetails": [{ "type": "Mobile", "value": "5550100", "dialCode": "+1" }],
        "identityProofs": [{
            "type": "Passport",
            "value": "P-1906",
            "issuedDate": "2015-03-01",
            "expiryDate": "2025-03-01"
        }]
    })
}

pub fn page_body(rows: Vec<serde_json::Value>, number: u32, total_pages: u32, total: u64) -> serde_json::Value {
    let empty = rows.is_empty();
    serde_json::json!({
        "content": rows,
        "totalPages": total_pages,
        "totalElements": total,
        "size": 30,
        "number": number,
        "first": number == 0,
        "last": number + 1 >= total_pages,
        "empty": empty
    })
}

/// Fill every required field of a fresh create wizard and walk it to review.
pub fn fill_to_review(controller: &mut WizardController) {
    for (field, value) in [
        (FieldKey::FirstName, "Ada"),
        (FieldKey::LastName, "Lovelace"),
        (FieldKey::DateOfBirth, "1815-12-10"),
        (FieldKey::Gender, "female"),
        (FieldKey::Language, "English"),
    ] {
        controller.edit_field(field, value);
    }
    controller.advance().expect("personal step complete");

    for (field, value) in [
        (FieldKey::AddressLine1, "12 St James's Square"),
        (FieldKey::City, "London"),
        (FieldKey::State, "London"),
        (FieldKey::Country, "United Kingdom"),
        (FieldKey::ZipCode, "SW1Y"),
    ] {
        controller.edit_field(field, value);
    }
    controller.advance().expect("address step complete");

    controller.edit_field(FieldKey::ContactValue(0), "ada@example.com");
    controller.advance().expect("contact step complete");

    controller.edit_field(FieldKey::ProofNumber(0), "P-1815");
    controller.edit_field(FieldKey::ProofIssuedDate(0), "2020-01-01");
    controller.edit_field(FieldKey::ProofExpiryDate(0), "2030-01-01");
    controller.advance().expect("identity step complete");
}
