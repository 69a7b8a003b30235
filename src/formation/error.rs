use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormationError {
    #[error("At least one position must have an officer before saving")]
    NoOfficerSelected,
    #[error("An advisor can write at most 5 formations per owner")]
    FormationLimitReached,
    #[error("{0:?} is not a formation label between 編成1 and 編成5")]
    InvalidLabel(String),
    #[error("Only the advisor who wrote this formation can change it")]
    NotAdvisorOfRecord,
    #[error("Formation editor cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },
    #[error("Discarded response for formation that is no longer selected")]
    StaleResponse,
    #[error("{0}")]
    Backend(String),
}
