//! Valuation lookups through the backend's REST endpoint.

use crate::backend::BackendClient;
use crate::error::{BackendError, CoreResult};
use crate::types::ValuationRecord;

/// Table holding one row per valued vehicle
pub const VALUATIONS_TABLE: &str = "valuations";

/// Columns selected for the valuation panel
pub const VALUATION_COLUMNS: &str =
    "make,model,year,vin,transmission,mileage,reserve_price,average_price";

/// Fetch the valuation for a VIN, `None` if the table has no row for it
pub async fn find_by_vin(client: &BackendClient, vin: &str) -> CoreResult<Option<ValuationRecord>> {
    let filter = format!("eq.{vin}");
    let response = client
        .rest(VALUATIONS_TABLE)
        .query(&[
            ("select", VALUATION_COLUMNS),
            ("vin", filter.as_str()),
            ("limit", "1"),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(BackendError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        });
    }

    let mut rows: Vec<ValuationRecord> = serde_json::from_str(&body)?;
    tracing::debug!(vin, rows = rows.len(), "Valuation lookup finished");
    Ok(if rows.is_empty() { None } else { Some(rows.swap_remove(0)) })
}
