//! 위치 인자 변환 규칙.

use tracing::debug;

use crate::application::usecases::dispatch_command::DispatchError;

/// 남은 인자 전부를 공백 하나로 이어 붙인다.
pub(super) fn join_text(args: &[String]) -> String {
    args.join(" ")
}

/// 실수로 변환한다. 앞뒤 공백은 무시하고, 실패하면 `InvalidNumber`.
pub(super) fn parse_number(command: &str, raw: &str) -> Result<f64, DispatchError> {
    raw.trim().parse::<f64>().map_err(|err| {
        debug!(command, value = raw, error = %err, "invalid number");
        DispatchError::InvalidNumber {
            command: command.to_string(),
            value: raw.to_string(),
        }
    })
}

/// 앞의 두 인자를 실수 쌍으로 변환한다. 세 번째 이후는 무시한다.
/// 인자 개수는 카탈로그 규칙으로 이미 확인된 상태여야 한다.
pub(super) fn parse_pair(command: &str, args: &[String]) -> Result<(f64, f64), DispatchError> {
    Ok((
        parse_number(command, &args[0])?,
        parse_number(command, &args[1])?,
    ))
}
