use super::entities::Aspect;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/aspect.ts")]
pub struct AspectListResponse {
    pub items: Vec<Aspect>,
}
