use serde::{Deserialize, Serialize};

/// Report result as the Code Insights API spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportResult {
    Pass,
    Fail,
}

impl ReportResult {
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            ReportResult::Pass
        } else {
            ReportResult::Fail
        }
    }
}

impl std::fmt::Display for ReportResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportResult::Pass => write!(f, "PASS"),
            ReportResult::Fail => write!(f, "FAIL"),
        }
    }
}

impl std::str::FromStr for ReportResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PASS" => Ok(ReportResult::Pass),
            "FAIL" => Ok(ReportResult::Fail),
            _ => Err(format!("Unknown result '{}', expected PASS or FAIL", s)),
        }
    }
}

/// Final status and process exit code of one report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub status: ReportResult,
    pub exit_code: i32,
}

/// Resolve the published status and the exit code.
///
/// `force_pass` wins over everything. Otherwise the raw result is published
/// as-is and a non-zero `raw_return_code` becomes the exit code even when the
/// result is PASS; without one the exit code follows the result.
pub fn reconcile(force_pass: bool, raw_return_code: Option<i32>, raw_result: ReportResult) -> Outcome {
    if force_pass {
        return Outcome {
            status: ReportResult::Pass,
            exit_code: 0,
        };
    }

    let exit_code = match raw_return_code {
        Some(code) if code != 0 => code,
        _ => match raw_result {
            ReportResult::Pass => 0,
            ReportResult::Fail => 1,
        },
    };

    Outcome {
        status: raw_result,
        exit_code,
    }
}
