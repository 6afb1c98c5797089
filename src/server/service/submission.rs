use dioxus_logger::tracing;
use serde_json::Value;

use crate::server::{
    data::PersistenceGateway,
    error::submission::SubmissionError,
    model::{form::FormDescriptor, payload::FormPayload, record::Record},
    service::classifier::classify,
};

/// A stored submission.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSubmission {
    /// Identity assigned by the store.
    pub id: Value,
    pub message: &'static str,
}

/// Runs form submissions through validation, sanitization and persistence.
///
/// The same pipeline serves every form; the [`FormDescriptor`] passed to
/// [`submit`](Self::submit) decides which fields are required, how they are sanitized and
/// which table receives the record.
pub struct SubmissionService<'a> {
    gateway: &'a dyn PersistenceGateway,
}

impl<'a> SubmissionService<'a> {
    pub fn new(gateway: &'a dyn PersistenceGateway) -> Self {
        Self { gateway }
    }

    /// Validates, sanitizes and stores one submission.
    ///
    /// Validation happens entirely before the gateway is called: a submission rejected for
    /// missing fields or a filled honeypot never reaches the store.
    ///
    /// # Arguments
    /// - `form` - Descriptor of the submitted form
    /// - `payload` - Decoded request body
    ///
    /// # Returns
    /// - `Ok(StoredSubmission)` - Row stored, with the identity the store assigned
    /// - `Err(SubmissionError::NoData)` - Payload has no fields
    /// - `Err(SubmissionError::MissingFields)` - Required fields absent, or empty after sanitization
    /// - `Err(SubmissionError::SpamDetected)` - Honeypot field filled
    /// - `Err(SubmissionError::Persistence)` - Store refused or failed the insert
    /// - `Err(SubmissionError::NoRowsReturned)` - Store reported no inserted row
    /// - `Err(SubmissionError::Internal)` - Inserted row carries no identity
    pub async fn submit(
        &self,
        form: &FormDescriptor,
        payload: &FormPayload,
    ) -> Result<StoredSubmission, SubmissionError> {
        tracing::info!("Received {} submission", form.name);

        if payload.is_empty() {
            tracing::warn!("No data received for {} submission", form.name);
            return Err(SubmissionError::NoData);
        }

        let missing = missing_fields(form, payload);
        if !missing.is_empty() {
            tracing::warn!("Missing required fields for {}: {:?}", form.name, missing);
            return Err(SubmissionError::MissingFields(missing));
        }

        if payload.is_filled(form.honeypot) {
            tracing::warn!("Spam attempt detected on {} submission", form.name);
            return Err(SubmissionError::SpamDetected);
        }

        let record = build_record(form, payload)?;

        let rows = self
            .gateway
            .insert(form.table, &record)
            .await
            .map_err(|err| {
                let failure = classify(&err.to_string());
                tracing::error!(
                    "Persistence error on {} submission (status {}): {}",
                    form.name,
                    failure.status(),
                    failure.technical_detail()
                );
                SubmissionError::Persistence(failure)
            })?;

        let Some(row) = rows.into_iter().next() else {
            tracing::error!("No rows returned from {} insert", form.name);
            return Err(SubmissionError::NoRowsReturned);
        };

        let id = row.get("id").cloned().ok_or_else(|| {
            SubmissionError::Internal(format!("{} row was stored without an id", form.table))
        })?;

        tracing::info!("Stored {} submission with ID {}", form.name, id);

        Ok(StoredSubmission {
            id,
            message: form.success_message,
        })
    }
}

/// Required fields that are absent or empty, in descriptor order.
pub fn missing_fields(form: &FormDescriptor, payload: &FormPayload) -> Vec<String> {
    form.required
        .iter()
        .filter(|field| !payload.is_filled(field))
        .map(|field| field.to_string())
        .collect()
}

/// Sanitizes every field of the form into a record for its table.
///
/// A required text field that sanitizes to nothing, such as a phone number without digits or
/// a name made only of spaces, is reported as missing. A year that does not parse is stored
/// as `null`.
///
/// # Returns
/// - `Ok(Record)` - One column per field rule
/// - `Err(SubmissionError::MissingFields)` - Required fields empty after sanitization
pub fn build_record(
    form: &FormDescriptor,
    payload: &FormPayload,
) -> Result<Record, SubmissionError> {
    let columns: Vec<(&str, &str, Value)> = form
        .fields
        .iter()
        .map(|rule| (rule.field, rule.column, rule.kind.sanitize(payload.get(rule.field))))
        .collect();

    let emptied: Vec<String> = columns
        .iter()
        .filter(|(field, _, value)| form.required.contains(field) && is_blank(value))
        .map(|(field, _, _)| field.to_string())
        .collect();

    if !emptied.is_empty() {
        tracing::warn!(
            "Required fields for {} empty after sanitization: {:?}",
            form.name,
            emptied
        );
        return Err(SubmissionError::MissingFields(emptied));
    }

    Ok(columns
        .into_iter()
        .map(|(_, column, value)| (column, value))
        .collect())
}

fn is_blank(value: &Value) -> bool {
    value.as_str().is_some_and(str::is_empty)
}
