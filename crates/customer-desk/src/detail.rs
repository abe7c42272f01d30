/*
[INPUT]:  A fetched Customer record
[OUTPUT]: Display-ready field values with fallbacks for missing data
[POS]:    Record detail - read-only presentation rules
[UPDATE]: When detail fields or fallback texts change
*/

use chrono::{DateTime, NaiveDate};
use customer_desk_adapter::{ApiError, Customer};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailStatus {
    Loading,
    Loaded(Box<Customer>),
    NotFound,
}

impl DetailStatus {
    /// Any fetch failure is shown as not found.
    pub fn from_fetch(result: Result<Customer, ApiError>) -> Self {
        match result {
            Ok(customer) => DetailStatus::Loaded(Box::new(customer)),
            Err(err) => {
                tracing::warn!(error = %err, "customer detail unavailable");
                DetailStatus::NotFound
            }
        }
    }
}

/// `YYYY-MM-DD` for parseable dates, "Invalid Date" otherwise, "N/A" when empty.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "N/A".to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.date_naive().format("%Y-%m-%d").to_string();
    }
    "Invalid Date".to_string()
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}

/// First, middle and last name joined; "Unknown" when all are blank.
pub fn full_name(customer: &Customer) -> String {
    let name = &customer.details.name;
    let joined = [&name.first_name, &name.middle_name, &name.last_name]
        .into_iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        "Unknown".to_string()
    } else {
        joined
    }
}

pub fn gender(customer: &Customer) -> &str {
    or_fallback(&customer.details.gender, "Not specified")
}

pub fn language(customer: &Customer) -> &str {
    or_fallback(&customer.details.language, "N/A")
}

/// Address lines in display order; blank parts fall back to "Unknown".
pub fn address_lines(customer: &Customer) -> Vec<String> {
    let address = &customer.details.address;
    let mut lines = vec![or_fallback(&address.address_line1, "No address provided").to_string()];
    if let Some(line2) = address
        .address_line2
        .as_deref()
        .map(str::trim)
        .filter(|line| !line.is_empty())
    {
        lines.push(line2.to_string());
    }
    lines.push(format!(
        "{}, {} {}",
        or_fallback(&address.city, "Unknown"),
        or_fallback(&address.state, "Unknown"),
        or_fallback(&address.zip_code, "Unknown"),
    ));
    lines.push(or_fallback(&address.country, "Unknown").to_string());
    lines
}

/// `Type: value`, with the dial code prefixed for phone-like contacts.
pub fn contact_lines(customer: &Customer) -> Vec<String> {
    let contacts = &customer.details.contact_details;
    if contacts.is_empty() {
        return vec!["No contact information provided".to_string()];
    }
    contacts
        .iter()
        .map(|contact| {
            let dial = contact
                .dial_code
                .as_deref()
                .filter(|_| contact.contact_type.is_phone_like())
                .map(|code| format!("{code} "))
                .unwrap_or_default();
            format!("{}: {dial}{}", contact.contact_type, contact.value)
        })
        .collect()
}

pub fn identity_lines(customer: &Customer) -> Vec<String> {
    customer
        .details
        .identity_proofs
        .iter()
        .map(|proof| {
            format!(
                "{}: {} (issued {}, expires {})",
                proof.proof_type,
                or_fallback(&proof.document_number, "N/A"),
                format_date(&proof.issued_date),
                format_date(&proof.expiry_date),
            )
        })
        .collect()
}
