/*
[INPUT]:  Customer ids, page requests, and customer payloads
[OUTPUT]: Persisted customers, customer pages, delete acknowledgements
[POS]:    HTTP layer - /api/customers endpoints and the CustomerApi seam
[UPDATE]: When adding customer endpoints or changing the REST contract
*/

use async_trait::async_trait;
use reqwest::Method;
use tracing::{info, warn};

use crate::http::{ApiError, CustomerClient, Result};
use crate::types::{Customer, CustomerPage, CustomerPayload, PageRequest};

const CUSTOMERS_PATH: &str = "api/customers";

/// Record API operations the desk needs.
///
/// `CustomerClient` is the HTTP implementation; tests substitute their own.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    async fn list_customers(&self, request: &PageRequest) -> Result<CustomerPage>;
    async fn get_customer(&self, id: u64) -> Result<Customer>;
    async fn create_customer(&self, payload: &CustomerPayload) -> Result<Customer>;
    async fn update_customer(&self, id: u64, payload: &CustomerPayload) -> Result<Customer>;
    async fn delete_customer(&self, id: u64) -> Result<()>;
}

fn customer_path(id: u64) -> String {
    format!("{CUSTOMERS_PATH}/{id}")
}

/// Turn a 404 on a single-record call into `NotFound`.
fn not_found_for(id: u64, err: ApiError) -> ApiError {
    if err.is_not_found() {
        ApiError::NotFound { id }
    } else {
        err
    }
}

#[async_trait]
impl CustomerApi for CustomerClient {
    /// GET /api/customers?page={page}&size={size}&sort={field,dir}
    async fn list_customers(&self, request: &PageRequest) -> Result<CustomerPage> {
        let builder = self
            .request(Method::GET, CUSTOMERS_PATH)?
            .query(&request.query_pairs());
        let page: CustomerPage = self.send_json(builder).await.inspect_err(|err| {
            warn!(page = request.page, size = request.size, error = %err, "list customers failed");
        })?;
        info!(
            page = page.number,
            rows = page.content.len(),
            total = page.total_elements,
            "customers page loaded"
        );
        Ok(page)
    }

    /// GET /api/customers/{id}
    async fn get_customer(&self, id: u64) -> Result<Customer> {
        let builder = self.request(Method::GET, &customer_path(id))?;
        self.send_json(builder).await.map_err(|err| {
            warn!(customer_id = id, error = %err, "fetch customer failed");
            not_found_for(id, err)
        })
    }

    /// POST /api/customers
    async fn create_customer(&self, payload: &CustomerPayload) -> Result<Customer> {
        let builder = self.request(Method::POST, CUSTOMERS_PATH)?.json(payload);
        let customer: Customer = self.send_json(builder).await.inspect_err(|err| {
            warn!(error = %err, "create customer failed");
        })?;
        info!(customer_id = customer.id, "customer created");
        Ok(customer)
    }

    /// PUT /api/customers/{id}
    async fn update_customer(&self, id: u64, payload: &CustomerPayload) -> Result<Customer> {
        let builder = self.request(Method::PUT, &customer_path(id))?.json(payload);
        let customer: Customer = self.send_json(builder).await.map_err(|err| {
            warn!(customer_id = id, error = %err, "update customer failed");
            not_found_for(id, err)
        })?;
        info!(customer_id = customer.id, "customer updated");
        Ok(customer)
    }

    /// DELETE /api/customers/{id}
    async fn delete_customer(&self, id: u64) -> Result<()> {
        let builder = self.request(Method::DELETE, &customer_path(id))?;
        self.send(builder).await.map_err(|err| {
            warn!(customer_id = id, error = %err, "delete customer failed");
            not_found_for(id, err)
        })?;
        info!(customer_id = id, "customer deleted");
        Ok(())
    }
}
