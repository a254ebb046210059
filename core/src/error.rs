use crate::types::Difficulty;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Duplicate complaint id '{id}' in category '{category}'")]
    DuplicateRecordId { id: String, category: String },

    #[error("Non-positive weight {value} for difficulty '{difficulty}'")]
    NonPositiveWeight { difficulty: Difficulty, value: f64 },
}

pub type DatasetResult<T> = Result<T, DatasetError>;
