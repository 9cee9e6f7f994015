use thiserror::Error;

/// 单字段更新的错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("{field} must be an integer, got '{value}'")]
    NotInteger { field: String, value: String },
    #[error("{field} must be a boolean, got '{value}'")]
    NotBoolean { field: String, value: String },
    #[error("{0} is required")]
    Required(String),
}

/// 客户端提交的原始字段值
///
/// 表单提交的值总是 `Text`，JSON API 提交的值保留其 JSON 类型。
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldInput {
    /// 空值判定：null、false、0、空字符串（含纯空白）
    pub fn is_empty(&self) -> bool {
        match self {
            FieldInput::Null => true,
            FieldInput::Bool(b) => !b,
            FieldInput::Int(n) => *n == 0,
            FieldInput::Float(f) => *f == 0.0,
            FieldInput::Text(s) => s.trim().is_empty(),
        }
    }

    /// 可空整数字段：空值写入 NULL，其余必须能解析为整数
    pub fn to_optional_int(&self, field: &str) -> Result<Option<i32>, FieldError> {
        if self.is_empty() {
            return Ok(None);
        }
        let not_integer = || FieldError::NotInteger {
            field: field.to_string(),
            value: self.to_text(),
        };
        match self {
            FieldInput::Int(n) => i32::try_from(*n).map(Some).map_err(|_| not_integer()),
            FieldInput::Float(f) if f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => {
                Ok(Some(*f as i32))
            }
            FieldInput::Text(s) => s.trim().parse::<i32>().map(Some).map_err(|_| not_integer()),
            _ => Err(not_integer()),
        }
    }

    pub fn to_bool(&self, field: &str) -> Result<bool, FieldError> {
        match self {
            FieldInput::Null => Ok(false),
            FieldInput::Bool(b) => Ok(*b),
            FieldInput::Int(n) => Ok(*n != 0),
            FieldInput::Float(f) => Ok(*f != 0.0),
            FieldInput::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" | "" => Ok(false),
                _ => Err(FieldError::NotBoolean {
                    field: field.to_string(),
                    value: s.clone(),
                }),
            },
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            FieldInput::Null => String::new(),
            FieldInput::Bool(b) => b.to_string(),
            FieldInput::Int(n) => n.to_string(),
            FieldInput::Float(f) => f.to_string(),
            FieldInput::Text(s) => s.clone(),
        }
    }

    /// 必填文本字段，去除首尾空白后不能为空
    pub fn to_required_text(&self, field: &str) -> Result<String, FieldError> {
        let text = self.to_text();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(FieldError::Required(field.to_string()));
        }
        Ok(trimmed.to_string())
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        FieldInput::Text(value.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        FieldInput::Text(value)
    }
}

impl From<Option<String>> for FieldInput {
    fn from(value: Option<String>) -> Self {
        value.map(FieldInput::Text).unwrap_or(FieldInput::Null)
    }
}

/// 字段名转为展示文本：`release_year` -> `Release Year`
pub fn humanize(field: &str) -> String {
    field
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 单字段更新成功时的提示消息
pub fn updated_message(field: &str) -> String {
    format!("{} updated successfully!", humanize(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_int_coercion() {
        assert_eq!(FieldInput::from("").to_optional_int("duration"), Ok(None));
        assert_eq!(FieldInput::from("   ").to_optional_int("duration"), Ok(None));
        assert_eq!(FieldInput::Null.to_optional_int("duration"), Ok(None));
        assert_eq!(FieldInput::Int(0).to_optional_int("duration"), Ok(None));
        assert_eq!(
            FieldInput::from("245").to_optional_int("duration"),
            Ok(Some(245))
        );
        assert_eq!(
            FieldInput::from(" 1999 ").to_optional_int("release_year"),
            Ok(Some(1999))
        );
        assert_eq!(FieldInput::Int(245).to_optional_int("duration"), Ok(Some(245)));
        assert_eq!(
            FieldInput::Float(245.0).to_optional_int("duration"),
            Ok(Some(245))
        );
    }

    #[test]
    fn test_optional_int_rejects_garbage() {
        assert_eq!(
            FieldInput::from("abc").to_optional_int("duration"),
            Err(FieldError::NotInteger {
                field: "duration".to_string(),
                value: "abc".to_string(),
            })
        );
        assert!(FieldInput::Float(2.5).to_optional_int("duration").is_err());
        assert!(FieldInput::Bool(true).to_optional_int("duration").is_err());
        assert!(FieldInput::Int(i64::MAX).to_optional_int("duration").is_err());
    }

    #[test]
    fn test_bool_coercion() {
        assert_eq!(FieldInput::Bool(true).to_bool("is_public"), Ok(true));
        assert_eq!(FieldInput::Int(0).to_bool("is_public"), Ok(false));
        assert_eq!(FieldInput::from("on").to_bool("is_public"), Ok(true));
        assert_eq!(FieldInput::from("False").to_bool("is_public"), Ok(false));
        assert_eq!(FieldInput::Null.to_bool("is_public"), Ok(false));
        assert!(FieldInput::from("maybe").to_bool("is_public").is_err());
    }

    #[test]
    fn test_required_text() {
        assert_eq!(
            FieldInput::from("  Road Trip ").to_required_text("name"),
            Ok("Road Trip".to_string())
        );
        assert_eq!(
            FieldInput::Null.to_required_text("name"),
            Err(FieldError::Required("name".to_string()))
        );
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("release_year"), "Release Year");
        assert_eq!(humanize("youtube_url"), "Youtube Url");
        assert_eq!(humanize("name"), "Name");
        assert_eq!(updated_message("is_public"), "Is Public updated successfully!");
    }
}
