use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("no reviews found")]
    EmptyCorpus,

    #[error("{stage} received no input")]
    EmptyInput { stage: &'static str },

    #[error("failed to load {artifact} from {path}: {reason}")]
    ArtifactLoad {
        artifact: &'static str,
        path: String,
        reason: String,
    },

    #[error("{stage} produced {got} items for {expected} inputs")]
    Misaligned {
        stage: &'static str,
        expected: usize,
        got: usize,
    },
}
