//! 콘솔 출력용 값/도움말 렌더링 모듈.

use anyhow::{Context, Result};

use crate::application::usecases::dispatch_command::{CommandGroup, CommandSpec};
use crate::domain::info::{ConfigSnapshot, ConfigValue};

/// 실수를 최단 왕복 표기로 바꾼다.
/// 정수값은 `.0`을 붙이고, 지수 표기는 부호와 두 자리 이상 지수(`1e+16`, `1e-05`)로 맞춘다.
pub fn render_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    let repr = format!("{value:?}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return repr;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

pub fn render_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

pub fn render_config_value(value: ConfigValue) -> String {
    match value {
        ConfigValue::Text(text) => text.to_string(),
        ConfigValue::Flag(flag) => render_bool(flag).to_string(),
        ConfigValue::Count(count) => count.to_string(),
    }
}

/// 설정 스냅샷을 사람이 읽기 쉬운 JSON으로 변환한다.
pub fn render_config_json(snapshot: &ConfigSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("failed to serialize configuration")
}

/// 사용법 한 줄 뒤에 그룹별 명령 목록을 붙인 도움말.
pub fn render_help(program: &str, commands: &[CommandSpec]) -> Vec<String> {
    let mut out = vec![format!("Usage: {program} <command> [args]")];
    let mut current: Option<CommandGroup> = None;

    for spec in commands {
        if current != Some(spec.group) {
            out.push(String::new());
            out.push(spec.group.title().to_string());
            current = Some(spec.group);
        }
        out.push(format!("  {}", spec.usage));
    }

    out
}
