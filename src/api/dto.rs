//! Data Transfer Objects
//!
//! Wire types for the proxy endpoint. The success envelope mirrors the
//! nested shape of the national statistics API the dashboard was first
//! written against, so the client-side parser stays unchanged.

use serde::{Deserialize, Serialize};

use crate::upstream::TOTAL_MARKER;

/// Success envelope: `response.body.items.item[0]` holds the single
/// matched aggregate row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEnvelope {
    pub response: ResponseWrapper,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseWrapper {
    pub body: BodyWrapper,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyWrapper {
    pub items: ItemsWrapper,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsWrapper {
    pub item: Vec<ComparisonItem>,
}

/// The matched aggregate row, renamed into the envelope's field names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonItem {
    /// Category code of the row; always the total marker
    pub inds_m_cd: String,
    /// Aggregate emission value in thousand tCO₂
    pub gas_em_ds_vl: f64,
}

impl ComparisonEnvelope {
    /// Wrap a single aggregate value in the full envelope
    pub fn single(value: f64) -> Self {
        Self {
            response: ResponseWrapper {
                body: BodyWrapper {
                    items: ItemsWrapper {
                        item: vec![ComparisonItem {
                            inds_m_cd: TOTAL_MARKER.to_string(),
                            gas_em_ds_vl: value,
                        }],
                    },
                },
            },
        }
    }

    /// The industry-average value, if the envelope carries one
    pub fn industry_average(&self) -> Option<f64> {
        self.response
            .body
            .items
            .item
            .first()
            .map(|item| item.gas_em_ds_vl)
    }
}

/// Health status payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_to_the_wire_shape() {
        let envelope = ComparisonEnvelope::single(500.0);
        let value = serde_json::to_value(&envelope).unwrap();

        let item = &value["response"]["body"]["items"]["item"][0];
        assert_eq!(item["inds_m_cd"], "합계");
        assert_eq!(item["gas_em_ds_vl"].as_f64(), Some(500.0));
    }

    #[test]
    fn industry_average_reads_the_first_item() {
        let envelope = ComparisonEnvelope::single(123.4);
        assert_eq!(envelope.industry_average(), Some(123.4));
    }
}
