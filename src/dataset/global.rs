//! Process-wide member dataset. It is set at most once, and always with a
//! validated `Dataset`, so readers never see unchecked data.

use once_cell::sync::OnceCell;
use thiserror::Error;

use super::{builtin, Dataset};
use crate::validate::ValidationError;

static DATASET: OnceCell<Dataset> = OnceCell::new();

#[derive(Debug, Error)]
#[error("member dataset is already initialized")]
pub struct AlreadyInstalled;

/// Install `dataset` as the process-wide dataset.
pub fn install(dataset: Dataset) -> Result<&'static Dataset, AlreadyInstalled> {
    DATASET.set(dataset).map_err(|_| AlreadyInstalled)?;
    DATASET.get().ok_or(AlreadyInstalled)
}

/// The process-wide dataset, validating the built-in members on first use.
pub fn init_builtin() -> Result<&'static Dataset, ValidationError> {
    DATASET.get_or_try_init(builtin::load)
}

pub fn get() -> Option<&'static Dataset> {
    DATASET.get()
}
