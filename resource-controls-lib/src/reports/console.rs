use crate::Result;
use crate::control::{ControlResult, Outcome};
use ohno::IntoAppError;
use owo_colors::{OwoColorize, Style};
use std::io::Write;

/// Write a human-readable rendering of `result`.
pub fn generate<W: Write>(result: &ControlResult, use_colors: bool, writer: &mut W) -> Result<()> {
    let outcome = result.outcome();
    let style = if use_colors { outcome_style(outcome) } else { Style::new() };
    let dim = if use_colors { Style::new().dimmed() } else { Style::new() };

    writeln!(
        writer,
        "{}  {}: {} {}",
        outcome.icon().style(style),
        result.control_id().style(style),
        result.title(),
        format!("(impact {:.1})", result.impact()).style(dim),
    )
    .into_app_err("writing console report")?;

    writeln!(writer, "   {}: {}", outcome.style(style), result.detail()).into_app_err("writing console report")?;

    Ok(())
}

fn outcome_style(outcome: Outcome) -> Style {
    match outcome {
        Outcome::Pass => Style::new().green().bold(),
        Outcome::Fail => Style::new().red().bold(),
        Outcome::Error => Style::new().yellow().bold(),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn render(result: &ControlResult, use_colors: bool) -> String {
        let mut out = Vec::new();
        generate(result, use_colors, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_pass() {
        let result = ControlResult::new("aks-001", "Validating aks", 1.0, Outcome::Pass, "found 'aks-prod-01'");
        assert_eq!(
            render(&result, false),
            "✔  aks-001: Validating aks (impact 1.0)\n   passed: found 'aks-prod-01'\n"
        );
    }

    #[test]
    fn test_plain_error() {
        let result = ControlResult::new("aks-001", "Validating aks", 1.0, Outcome::Error, "query timed out after 30s");
        let text = render(&result, false);
        assert!(text.starts_with("!  aks-001"));
        assert!(text.contains("error: query timed out after 30s"));
    }

    #[test]
    fn test_colored_output_has_escapes() {
        let result = ControlResult::new("aks-001", "Validating aks", 1.0, Outcome::Fail, "missing");
        let text = render(&result, true);
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("missing"));
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        let result = ControlResult::new("aks-001", "Validating aks", 1.0, Outcome::Fail, "missing");
        assert!(!render(&result, false).contains('\u{1b}'));
    }
}
