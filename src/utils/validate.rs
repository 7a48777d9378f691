use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static PERSON_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("Invalid person id regex"));

static FORM_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("Invalid form url regex"));

// 可以参与评价的角色（大小写不敏感）
const EVALUATION_ROLES: [&str; 4] = ["student", "estudiante", "admin", "administrador"];

const MAX_LABEL_LEN: usize = 200;

/// 学生、教师编号：1 到 32 位字母、数字、点、下划线或连字符
pub fn validate_person_id(id: &str) -> Result<(), &'static str> {
    if id.is_empty() || id.len() > 32 {
        return Err("Identifier length must be between 1 and 32 characters");
    }
    if !PERSON_ID_RE.is_match(id) {
        return Err("Identifier must contain only letters, numbers, dots, underscores or hyphens");
    }
    Ok(())
}

/// 名称类字段：去掉首尾空白后非空，且不超过 200 字符
pub fn validate_label(label: &str) -> Result<(), &'static str> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err("Label must not be empty");
    }
    if trimmed.chars().count() > MAX_LABEL_LEN {
        return Err("Label must not exceed 200 characters");
    }
    Ok(())
}

pub fn validate_weight(weight: f64) -> Result<(), &'static str> {
    if !weight.is_finite() || weight < 0.0 {
        return Err("Weight must be a non-negative number");
    }
    Ok(())
}

pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), &'static str> {
    if end < start {
        return Err("end_date must not precede start_date");
    }
    Ok(())
}

pub fn validate_form_url(url: &str) -> Result<(), &'static str> {
    if !FORM_URL_RE.is_match(url) {
        return Err("form_url must be an http(s) URL");
    }
    Ok(())
}

/// 角色列表中是否包含学生或管理员
pub fn has_evaluation_role(roles: &[String]) -> bool {
    roles.iter().any(|role| {
        let role = role.trim();
        EVALUATION_ROLES
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(role))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_person_id() {
        assert!(validate_person_id("S1").is_ok());
        assert!(validate_person_id("2021-00123").is_ok());
        assert!(validate_person_id("").is_err());
        assert!(validate_person_id("a b").is_err());
        assert!(validate_person_id(&"x".repeat(33)).is_err());
    }

    #[test]
    fn test_validate_label() {
        assert!(validate_label("Dominio del tema").is_ok());
        assert!(validate_label("   ").is_err());
        assert!(validate_label(&"á".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(4.0).is_ok());
        assert!(validate_weight(0.0).is_ok());
        assert!(validate_weight(-1.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_date_range() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        assert!(validate_date_range(d(10), d(10)).is_ok());
        assert!(validate_date_range(d(10), d(20)).is_ok());
        assert!(validate_date_range(d(20), d(10)).is_err());
    }

    #[test]
    fn test_validate_form_url() {
        assert!(validate_form_url("https://forms.example.edu/eval").is_ok());
        assert!(validate_form_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_has_evaluation_role() {
        let roles = |r: &[&str]| r.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert!(has_evaluation_role(&roles(&["Student"])));
        assert!(has_evaluation_role(&roles(&["docente", "ADMINISTRADOR"])));
        assert!(has_evaluation_role(&roles(&["estudiante"])));
        assert!(!has_evaluation_role(&roles(&["docente"])));
        assert!(!has_evaluation_role(&[]));
    }
}
