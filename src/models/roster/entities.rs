use crate::models::evaluations::entities::NewEvaluation;

// 教务花名册中的一行：学生当前所修课程及授课教师
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub student_id: String,
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    pub teacher_id: String,
    pub teacher_name: Option<String>,
}

impl RosterEntry {
    /// 转换为待创建的评价，课程代码为空的行返回 None
    pub fn to_new_evaluation(&self) -> Option<NewEvaluation> {
        let course_code = self
            .course_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())?;

        Some(NewEvaluation {
            teacher_id: self.teacher_id.clone(),
            teacher_name: self.teacher_name.clone(),
            course_code: course_code.to_string(),
            course_name: self.course_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(course: Option<&str>) -> RosterEntry {
        RosterEntry {
            student_id: "S1".to_string(),
            course_code: course.map(str::to_string),
            course_name: Some("Cálculo".to_string()),
            teacher_id: "T1".to_string(),
            teacher_name: Some("Ana".to_string()),
        }
    }

    #[test]
    fn test_missing_course_code_is_skipped() {
        assert_eq!(entry(None).to_new_evaluation(), None);
        assert_eq!(entry(Some("   ")).to_new_evaluation(), None);
    }

    #[test]
    fn test_course_code_is_trimmed() {
        let new = entry(Some(" 101 ")).to_new_evaluation().unwrap();
        assert_eq!(new.course_code, "101");
        assert_eq!(new.teacher_id, "T1");
    }
}
