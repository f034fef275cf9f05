use thiserror::Error;

// エラー型を定義
#[derive(Debug, Error)]
pub enum PathError {
    #[error("無効なパスです: {0}")]
    InvalidPath(String),
    #[error("I/Oエラー: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<walkdir::Error> for PathError {
    fn from(e: walkdir::Error) -> Self {
        PathError::IoError(e.into())
    }
}
