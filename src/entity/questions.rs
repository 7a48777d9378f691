//! 开放问题实体

use sea_orm::entity::prelude::*;

use crate::models::questions::entities::QuestionType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub question_type: String,
    // JSON 数组，仅单选题使用
    #[sea_orm(column_type = "Text", nullable)]
    pub options: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campaign_questions::Entity")]
    CampaignQuestions,
}

impl Related<super::campaign_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignQuestions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// 选项序列化为 JSON 存储，空列表存为 NULL
pub(crate) fn encode_options(options: &[String]) -> crate::errors::Result<Option<String>> {
    if options.is_empty() {
        Ok(None)
    } else {
        Ok(Some(serde_json::to_string(options)?))
    }
}

/// 解析存储的选项，格式损坏时视为无选项
pub(crate) fn decode_options(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|v| serde_json::from_str(v).ok())
        .unwrap_or_default()
}

impl Model {
    pub fn parsed_type(&self) -> QuestionType {
        self.question_type.parse().unwrap_or(QuestionType::ShortText)
    }

    pub fn parsed_options(&self) -> Vec<String> {
        decode_options(self.options.as_deref())
    }

    pub fn into_question(self) -> crate::models::questions::entities::Question {
        use crate::models::questions::entities::Question;

        Question {
            id: self.id,
            question_type: self.parsed_type(),
            options: self.parsed_options(),
            text: self.text,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_encoding() {
        assert_eq!(encode_options(&[]).unwrap(), None);
        let raw = encode_options(&["Sí".to_string(), "No".to_string()])
            .unwrap()
            .unwrap();
        assert_eq!(decode_options(Some(&raw)), vec!["Sí", "No"]);
    }

    #[test]
    fn test_corrupt_options_decode_to_empty() {
        assert!(decode_options(Some("{not json")).is_empty());
        assert!(decode_options(None).is_empty());
    }
}
