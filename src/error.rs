use crate::domain::input_source::path_error::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました: {0}")]
    Io(#[from] std::io::Error),

    #[error("パス関連のエラー: {0}")]
    Path(#[from] PathError),
}
