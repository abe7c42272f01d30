/*
[INPUT]:  Public API exports for customer-desk crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod delete;
pub mod detail;
pub mod list;
pub mod notify;
pub mod route;
pub mod wizard;

// Re-export main types for convenience
pub use config::DeskConfig;
pub use customer_desk_adapter::{
    ApiError, ClientConfig, ContactDetail, ContactType, Customer, CustomerAddress, CustomerApi,
    CustomerClient, CustomerName, CustomerPage, CustomerPayload, IdentityProof, IdentityProofType,
    PageRequest,
};
pub use route::Route;
pub use wizard::WizardController;
