use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 问题类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub enum QuestionType {
    ShortText,      // 简短文本
    LongText,       // 长文本
    MultipleChoice, // 单选，选项以 JSON 数组存储
}

impl QuestionType {
    pub const SHORT_TEXT: &'static str = "short_text";
    pub const LONG_TEXT: &'static str = "long_text";
    pub const MULTIPLE_CHOICE: &'static str = "multiple_choice";

    /// 校验选项是否与问题类型匹配
    pub fn validate_options(&self, options: &[String]) -> Result<(), &'static str> {
        match self {
            QuestionType::MultipleChoice => {
                if options.is_empty() {
                    return Err("Multiple choice questions require at least one option");
                }
                if options.iter().any(|o| o.trim().is_empty()) {
                    return Err("Question options must not be blank");
                }
                Ok(())
            }
            _ => {
                if options.is_empty() {
                    Ok(())
                } else {
                    Err("Only multiple choice questions accept options")
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionType::ShortText => write!(f, "{}", QuestionType::SHORT_TEXT),
            QuestionType::LongText => write!(f, "{}", QuestionType::LONG_TEXT),
            QuestionType::MultipleChoice => write!(f, "{}", QuestionType::MULTIPLE_CHOICE),
        }
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            QuestionType::SHORT_TEXT => Ok(QuestionType::ShortText),
            QuestionType::LONG_TEXT => Ok(QuestionType::LongText),
            QuestionType::MULTIPLE_CHOICE => Ok(QuestionType::MultipleChoice),
            _ => Err(format!(
                "Invalid question type: '{s}'. Supported: short_text, long_text, multiple_choice"
            )),
        }
    }
}

// 开放问题
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_round_trips_through_str() {
        for t in [
            QuestionType::ShortText,
            QuestionType::LongText,
            QuestionType::MultipleChoice,
        ] {
            assert_eq!(t.to_string().parse::<QuestionType>(), Ok(t));
        }
        assert!("checkbox".parse::<QuestionType>().is_err());
    }

    #[test]
    fn test_multiple_choice_requires_options() {
        assert!(QuestionType::MultipleChoice.validate_options(&[]).is_err());
        assert!(
            QuestionType::MultipleChoice
                .validate_options(&["Sí".to_string(), " ".to_string()])
                .is_err()
        );
        assert!(
            QuestionType::MultipleChoice
                .validate_options(&["Sí".to_string(), "No".to_string()])
                .is_ok()
        );
    }

    #[test]
    fn test_text_questions_reject_options() {
        assert!(QuestionType::LongText.validate_options(&[]).is_ok());
        assert!(
            QuestionType::ShortText
                .validate_options(&["a".to_string()])
                .is_err()
        );
    }

    #[test]
    fn test_deserialize_question_type() {
        let t: QuestionType = serde_json::from_str("\"multiple_choice\"").unwrap();
        assert_eq!(t, QuestionType::MultipleChoice);
        assert!(serde_json::from_str::<QuestionType>("\"radio\"").is_err());
    }
}
