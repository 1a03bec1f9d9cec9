//! Rendering execute outcomes for the learner.

use crate::client::{ClientError, ExecuteOutcome, HelpLevel};

/// Render an outcome as display text.
///
/// Failures show progressively more beyond the error message as the
/// help level rises; fields the backend attached above the requested
/// tier are not invented here, only passed through.
pub fn render(outcome: &ExecuteOutcome) -> String {
    match outcome {
        ExecuteOutcome::Success { output } => output.clone(),
        ExecuteOutcome::Failure(failure) => {
            let mut text = failure.error.clone();
            if failure.level >= HelpLevel::Explained {
                if let Some(explanation) = &failure.explanation {
                    text.push_str("\n\nAnalysis:\n");
                    text.push_str(explanation);
                }
            }
            if failure.level == HelpLevel::Solved {
                if let Some(solution) = &failure.solution {
                    text.push_str("\n\nSuggested fix:\n");
                    text.push_str(solution);
                }
            }
            text
        }
    }
}

/// Message shown when the backend could not be reached at all.
///
/// Deliberately generic: transport details go to the log, not the
/// learner.
pub fn connection_failure(err: &ClientError) -> String {
    tracing::warn!("execute unavailable: {err}");
    "Could not run the program: the execution service is unavailable. Check that the backend is running and try again.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ExecuteFailure;

    #[test]
    fn test_success_is_output() {
        let outcome = ExecuteOutcome::Success {
            output: "Hello".to_string(),
        };
        assert_eq!(render(&outcome), "Hello");
    }

    #[test]
    fn test_raw_failure_is_error_only() {
        let outcome = ExecuteOutcome::Failure(ExecuteFailure {
            level: HelpLevel::Raw,
            error: "TypeError: boom".to_string(),
            explanation: None,
            solution: None,
        });
        assert_eq!(render(&outcome), "TypeError: boom");
    }

    #[test]
    fn test_explained_failure_adds_analysis() {
        let outcome = ExecuteOutcome::Failure(ExecuteFailure {
            level: HelpLevel::Explained,
            error: "boom".to_string(),
            explanation: Some("x was never declared".to_string()),
            solution: None,
        });
        let text = render(&outcome);
        assert!(text.contains("boom"));
        assert!(text.contains("Analysis:"));
        assert!(text.contains("x was never declared"));
        assert!(!text.contains("Suggested fix:"));
    }

    #[test]
    fn test_solved_failure_adds_fix() {
        let outcome = ExecuteOutcome::Failure(ExecuteFailure {
            level: HelpLevel::Solved,
            error: "boom".to_string(),
            explanation: Some("because".to_string()),
            solution: Some("declare x with ref()".to_string()),
        });
        let text = render(&outcome);
        assert!(text.contains("Analysis:"));
        assert!(text.contains("Suggested fix:"));
        assert!(text.contains("declare x with ref()"));
    }

    #[test]
    fn test_connection_failure_is_generic() {
        let err = ClientError::Transport("connection refused (os error 111)".to_string());
        let text = connection_failure(&err);
        assert!(!text.contains("os error"));
        assert!(text.contains("unavailable"));
    }
}
