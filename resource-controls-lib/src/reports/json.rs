use crate::Result;
use crate::control::ControlResult;
use ohno::IntoAppError;
use std::io::Write;

/// Write `result` as a pretty-printed JSON object.
pub fn generate<W: Write>(result: &ControlResult, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, result).into_app_err("writing JSON report")?;
    writeln!(writer).into_app_err("writing JSON report")?;
    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::control::Outcome;

    #[test]
    fn test_json_report_fields() {
        let result = ControlResult::new("aks-001", "Validating aks", 1.0, Outcome::Fail, "managed cluster 'aks-ghost' was not found");
        let mut out = Vec::new();
        generate(&result, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["control_id"], "aks-001");
        assert_eq!(value["outcome"], "fail");
        assert_eq!(value["impact"], 1.0);
        assert!(value["detail"].as_str().unwrap().contains("aks-ghost"));
    }

    #[test]
    fn test_json_report_ends_with_newline() {
        let result = ControlResult::new("aks-001", "Validating aks", 1.0, Outcome::Pass, "");
        let mut out = Vec::new();
        generate(&result, &mut out).unwrap();
        assert_eq!(out.last(), Some(&b'\n'));
    }
}
