// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiskError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cannot aggregate an empty portfolio")]
    EmptyPortfolio,

    #[error("portfolio has {skus} SKUs but {analyses} analyses")]
    MismatchedCollections { skus: usize, analyses: usize },

    #[error("analysis at index {index} belongs to '{analysis_id}', expected '{sku_id}'")]
    MisalignedAnalysis {
        index: usize,
        sku_id: String,
        analysis_id: String,
    },

    #[error("batch cancelled before completion")]
    Cancelled,

    #[error("batch exceeded its deadline")]
    DeadlineExceeded,

    #[error("batch worker panicked")]
    WorkerPanicked,

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RiskResult<T> = Result<T, RiskError>;
