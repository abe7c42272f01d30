/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for customer-desk-adapter tests

use customer_desk_adapter::{ClientConfig, CustomerClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> CustomerClient {
    CustomerClient::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client init")
}

/// Minimal persisted customer body
pub fn customer_body(id: u64, first_name: &str, country: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": { "firstName": first_name, "middleName": "", "lastName": "Tester" },
        "gender": "female",
        "language": "English",
        "dateOfBirth": "1985-06-15",
        "address": {
            "addressLine1": "9 Elm Rd",
            "city": "Leeds",
            "state": "West Yorkshire",
            "country": country,
            "zipCode": "LS1"
        },
        "contactDetails": [{ "type": "Mobile", "value": "7700900", "dialCode": "+44" }],
        "identityProofs": [{
            "type": "Driver License",
            "value": "DL-7",
            "issuedDate": "2019-02-01",
            "expiryDate": "2029-02-01"
        }]
    })
}

/// Page envelope around the given rows
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
