use thiserror::Error;

/// Errors produced by the statistics engine.
///
/// Malformed documents are not represented here: a part that does not match
/// the export shape is rejected by the ingestion layer (`export`) before it
/// can reach `analyze`.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No conversation parts were supplied, so there is no participant
    /// roster to anchor grouping against.
    #[error("empty dataset: no conversation parts supplied")]
    NoParts,

    /// The merged parts contain zero messages, leaving the conversation's
    /// temporal extent undefined.
    #[error("empty dataset: conversation parts contain no messages")]
    NoMessages,
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, AnalysisError>;
