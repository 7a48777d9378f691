// 已提交评价中的一条维度评分，带维度名称和权重
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDetail {
    pub evaluation_id: i64,
    pub aspect_id: i64,
    pub aspect_label: String,
    pub weight: f64,
    pub comment: Option<String>,
}
