//! 카탈로그 명령별 실행/출력 단계.

use crate::application::config::OutputFormat;
use crate::application::usecases::dispatch_command::args::{join_text, parse_number, parse_pair};
use crate::application::usecases::dispatch_command::{DispatchCommandUseCase, DispatchError};
use crate::domain::diagnostics::log_message;
use crate::domain::info::{get_config, get_version};
use crate::domain::math;
use crate::domain::text::{capitalize_words, reverse_string};
use crate::domain::validation::{InputValue, ValidationRange, validate_input};
use crate::infrastructure::render::{
    render_bool, render_config_json, render_config_value, render_number,
};

type HandlerResult = Result<(), DispatchError>;

pub(super) fn version(use_case: &DispatchCommandUseCase<'_>, _args: &[String]) -> HandlerResult {
    use_case
        .reporter
        .raw(&format!("Version: {}", get_version()));
    Ok(())
}

pub(super) fn config(use_case: &DispatchCommandUseCase<'_>, _args: &[String]) -> HandlerResult {
    let snapshot = get_config();

    match use_case.settings.format {
        OutputFormat::Json => {
            let json = render_config_json(&snapshot)?;
            use_case.reporter.raw(&json);
        }
        OutputFormat::Text => {
            use_case.reporter.raw("Configuration:");
            for (key, value) in snapshot.entries() {
                use_case
                    .reporter
                    .raw(&format!("  {key}: {}", render_config_value(value)));
            }
        }
    }
    Ok(())
}

pub(super) fn log(use_case: &DispatchCommandUseCase<'_>, args: &[String]) -> HandlerResult {
    let message = join_text(args);
    let line = log_message(use_case.clock.now(), &message, None);
    use_case.reporter.raw(&line);
    Ok(())
}

pub(super) fn validate(use_case: &DispatchCommandUseCase<'_>, args: &[String]) -> HandlerResult {
    let value = parse_number("validate", &args[0])?;
    let result = validate_input(&InputValue::Number(value), ValidationRange::default());

    use_case.reporter.lines(&[
        format!("Value: {}", render_number(value)),
        format!("Valid: {}", render_bool(result.valid)),
        format!("Message: {}", result.message),
    ]);
    Ok(())
}

pub(super) fn add(use_case: &DispatchCommandUseCase<'_>, args: &[String]) -> HandlerResult {
    binary(use_case, "add", "+", math::add, args)
}

pub(super) fn multiply(use_case: &DispatchCommandUseCase<'_>, args: &[String]) -> HandlerResult {
    binary(use_case, "multiply", "*", math::multiply, args)
}

pub(super) fn capitalize(use_case: &DispatchCommandUseCase<'_>, args: &[String]) -> HandlerResult {
    let text = join_text(args);
    use_case.reporter.lines(&[
        format!("Original: {text}"),
        format!("Capitalized: {}", capitalize_words(&text)),
    ]);
    Ok(())
}

pub(super) fn reverse(use_case: &DispatchCommandUseCase<'_>, args: &[String]) -> HandlerResult {
    let text = join_text(args);
    use_case.reporter.lines(&[
        format!("Original: {text}"),
        format!("Reversed: {}", reverse_string(&text)),
    ]);
    Ok(())
}

fn binary(
    use_case: &DispatchCommandUseCase<'_>,
    command: &str,
    symbol: &str,
    op: fn(f64, f64) -> f64,
    args: &[String],
) -> HandlerResult {
    let (a, b) = parse_pair(command, args)?;
    use_case.reporter.raw(&format!(
        "{} {symbol} {} = {}",
        render_number(a),
        render_number(b),
        render_number(op(a, b))
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::application::config::{OutputFormat, RunSettings};
    use crate::application::usecases::dispatch_command::DispatchCommandUseCase;
    use crate::infrastructure::adapters::{BufferedReporter, FixedClock};

    fn output(settings: RunSettings, raw: &[&str]) -> Vec<String> {
        let clock = FixedClock::parse("2025-06-30 18:45:00").unwrap();
        let reporter = BufferedReporter::default();
        let use_case = DispatchCommandUseCase {
            clock: &clock,
            reporter: &reporter,
            settings,
        };
        let args: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
        use_case.run(&args);
        reporter.stdout_lines()
    }

    fn run(raw: &[&str]) -> Vec<String> {
        output(RunSettings::default(), raw)
    }

    #[test]
    fn version_line() {
        assert_eq!(run(&["version"]), ["Version: 2.0.0"]);
    }

    #[test]
    fn config_listing_uses_fixed_key_order() {
        assert_eq!(
            run(&["config", "ignored"]),
            [
                "Configuration:",
                "  app_name: Utils Library",
                "  debug: False",
                "  max_retries: 3"
            ]
        );
    }

    #[test]
    fn config_as_json() {
        let json_settings = RunSettings {
            format: OutputFormat::Json,
            ..RunSettings::default()
        };
        let out = output(json_settings, &["config"]).join("\n");
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["app_name"], "Utils Library");
        assert_eq!(parsed["debug"], false);
        assert_eq!(parsed["max_retries"], 3);
    }

    #[test]
    fn log_joins_message_and_uses_injected_clock() {
        assert_eq!(
            run(&["log", "disk", "almost", "full"]),
            ["[2025-06-30 18:45:00] [INFO] disk almost full"]
        );
    }

    #[test]
    fn validate_in_and_out_of_range() {
        assert_eq!(
            run(&["validate", "100"]),
            ["Value: 100.0", "Valid: True", "Message: Valid"]
        );
        assert_eq!(
            run(&["validate", "-1"]),
            [
                "Value: -1.0",
                "Valid: False",
                "Message: Value must be between 0 and 100"
            ]
        );
        assert_eq!(run(&["validate", "ten"]), ["Invalid number!"]);
    }

    #[test]
    fn arithmetic_lines() {
        assert_eq!(run(&["add", "2", "3"]), ["2.0 + 3.0 = 5.0"]);
        assert_eq!(run(&["add", "0.1", "0.2"]), ["0.1 + 0.2 = 0.30000000000000004"]);
        assert_eq!(run(&["multiply", "-1.5", "4"]), ["-1.5 * 4.0 = -6.0"]);
        assert_eq!(run(&["multiply", "3", "x"]), ["Invalid number!"]);
    }

    #[test]
    fn text_commands_echo_original() {
        assert_eq!(
            run(&["capitalize", "hello", "wORLD"]),
            ["Original: hello wORLD", "Capitalized: Hello World"]
        );
        assert_eq!(
            run(&["reverse", "ab", "cd"]),
            ["Original: ab cd", "Reversed: dc ba"]
        );
    }

    #[test]
    fn missing_argument_messages() {
        assert_eq!(run(&["log"]), ["Please provide a message!"]);
        assert_eq!(run(&["validate"]), ["Please provide a number!"]);
        assert_eq!(run(&["multiply", "2"]), ["Please provide two numbers!"]);
        assert_eq!(run(&["capitalize"]), ["Please provide text!"]);
        assert_eq!(run(&["reverse"]), ["Please provide text!"]);
    }
}
