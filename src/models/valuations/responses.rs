use super::entities::ValuationScaleEntry;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/valuation.ts")]
pub struct ValuationListResponse {
    pub items: Vec<ValuationScaleEntry>,
}
