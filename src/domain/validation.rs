//! 입력값 범위 검증.

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;

/// 검증 대상 값. 숫자가 아닌 입력도 표현할 수 있어야 "숫자 아님" 판정이 가능하다.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Number(f64),
    Integer(i64),
    Text(String),
    Missing,
}

impl InputValue {
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            Self::Text(_) | Self::Missing => None,
        }
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// 양 끝을 포함하는 허용 범위.
/// 오류 메시지의 경계값은 f64 `{}` 표기를 따른다: 기본값은 `0`/`100`, `1.0`도 `1`로 나오고
/// `0.5`처럼 소수부가 있을 때만 소수점이 붙는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ValidationRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            valid: true,
            message: "Valid".to_string(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// 값이 숫자이고 `[min, max]` 안에 있는지 판정한다. NaN은 범위 밖으로 본다.
pub fn validate_input(value: &InputValue, range: ValidationRange) -> ValidationResult {
    let Some(number) = value.as_number() else {
        return ValidationResult::invalid("Value must be a number");
    };

    if !(range.min..=range.max).contains(&number) {
        return ValidationResult::invalid(format!(
            "Value must be between {} and {}",
            range.min, range.max
        ));
    }

    ValidationResult::valid()
}
