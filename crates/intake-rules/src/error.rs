use thiserror::Error;

use crate::gate::Step;
use crate::violation::{FullReport, Violation};

#[derive(Debug, Error)]
pub enum GateError {
    #[error("cannot leave {step}: {} violation(s)", .violations.len())]
    Blocked {
        step: Step,
        violations: Vec<Violation>,
    },

    #[error("{0} is the last step")]
    NoNextStep(Step),

    #[error("{0} is the first step")]
    AtFirstStep(Step),

    #[error("cannot jump from {from} to {to}: only earlier steps can be revisited freely")]
    NotBehind { from: Step, to: Step },

    #[error("submission is only possible from the review step (currently on {0})")]
    NotAtReview(Step),

    #[error("document still has {} violation(s)", .0.total())]
    Incomplete(FullReport),
}
