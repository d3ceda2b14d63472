//! Typed failures for launcher steps.
//!
//! These travel inside `anyhow::Error` like every other failure; the launcher
//! never branches on them, they exist so messages carry the step and status.

use thiserror::Error;

use crate::runner::Step;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("{step} command exited with status {code}")]
    NonZeroExit { step: Step, code: i32 },

    #[error("{step} command was terminated by signal {signal}")]
    Signaled { step: Step, signal: i32 },

    #[error("'{program}' was not found (is it installed and on PATH?)")]
    ProgramNotFound { program: String },

    #[error("{step} command is empty")]
    EmptyCommand { step: Step },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_step() {
        let err = StepError::NonZeroExit {
            step: Step::Install,
            code: 1,
        };
        assert_eq!(err.to_string(), "install command exited with status 1");

        let err = StepError::EmptyCommand { step: Step::Dev };
        assert_eq!(err.to_string(), "dev command is empty");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = StepError::ProgramNotFound {
            program: "pnpm".to_string(),
        }
        .into();
        assert!(err.to_string().contains("'pnpm' was not found"));
        assert_eq!(
            err.downcast_ref::<StepError>(),
            Some(&StepError::ProgramNotFound {
                program: "pnpm".to_string()
            })
        );
    }
}
