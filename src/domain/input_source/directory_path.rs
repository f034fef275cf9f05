use super::path_error::PathError;
use crate::domain::image_extension::is_image_file;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// 構造体としてDirectoryPathを定義
#[derive(Debug)]
pub struct DirectoryPath {
    pub path: PathBuf,
}

impl DirectoryPath {
    // コンストラクタ: パスを受け取り、バリデーションを行う
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // パスが存在し、かつディレクトリであることを検証
        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はディレクトリではありません。",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// ディレクトリ内の画像ファイルのパスを収集し、ソートして返します。
    ///
    /// `recursive` が `false` の場合は直下のエントリのみを対象とします。
    /// ルート自体が読めない場合はエラーを返しますが、
    /// 再帰走査中に読めないサブディレクトリがあっても警告を出して続行します。
    pub fn image_files(&self, recursive: bool) -> Result<Vec<PathBuf>, PathError> {
        let max_depth = if recursive { usize::MAX } else { 1 };
        let mut image_paths = Vec::new();

        for entry_result in WalkDir::new(&self.path).min_depth(1).max_depth(max_depth) {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    tracing::warn!("エントリを読み取れないためスキップします: {}", e);
                    continue;
                }
            };
            if is_image_file(entry.path()) {
                image_paths.push(entry.into_path());
            }
        }

        // ファイル名の順序を安定させるため、パスをソートする。
        image_paths.sort();
        Ok(image_paths)
    }

    /// 表示用に、このディレクトリからの相対パスを返します。
    pub fn relative_name(&self, path: &Path) -> String {
        path.strip_prefix(&self.path)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    // 外部クレートや親モジュールをuse
    use super::*;
    use std::fs;
    use std::io::ErrorKind;
    use tempfile::tempdir;

    /// 正常なディレクトリパスでDirectoryPathが作成できるかテスト
    #[test]
    fn test_valid_directory_path() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path();

        let result = DirectoryPath::new(path);
        assert!(result.is_ok());

        let dir_path_instance = result.unwrap();
        assert_eq!(dir_path_instance.as_path(), path);
        assert_eq!(dir_path_instance.to_string(), path.display().to_string());
    }

    /// 存在しないパスでエラーが返されるかテスト
    #[test]
    fn test_non_existent_path_returns_error() {
        let path = PathBuf::from("this_directory_should_not_exist");
        let err = DirectoryPath::new(&path).unwrap_err();

        if let PathError::InvalidPath(msg) = err {
            assert!(msg.contains("存在しません"));
        } else {
            panic!("予期せぬエラーが返されました: {:?}", err);
        }
    }

    /// ファイルパスでエラーが返されるかテスト
    #[test]
    fn test_file_path_returns_error() {
        let file_path = PathBuf::from("Cargo.toml"); // 常に存在するファイル
        let err = DirectoryPath::new(&file_path).unwrap_err();

        if let PathError::InvalidPath(msg) = err {
            assert!(msg.contains("ディレクトリではありません"));
        } else {
            panic!("予期せぬエラーが返されました: {:?}", err);
        }
    }

    /// image_files()が画像だけを名前順で返すかテスト
    #[test]
    fn test_image_files_filters_and_sorts() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path();

        fs::write(path.join("b.png"), "x").expect("Failed to create file");
        fs::write(path.join("A.JPG"), "x").expect("Failed to create file");
        fs::write(path.join("notes.txt"), "x").expect("Failed to create file");
        fs::create_dir(path.join("subdir")).expect("Failed to create subdir");
        fs::write(path.join("subdir").join("c.bmp"), "x").expect("Failed to create file");

        let dir_path = DirectoryPath::new(path).unwrap();
        let names: Vec<String> = dir_path
            .image_files(false)
            .expect("image_files should not fail")
            .iter()
            .map(|p| dir_path.relative_name(p))
            .collect();

        assert_eq!(names, vec!["A.JPG", "b.png"]);
    }

    /// recursive 指定でサブディレクトリも走査されるかテスト
    #[test]
    fn test_image_files_recursive() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path();

        fs::write(path.join("top.png"), "x").expect("Failed to create file");
        fs::create_dir_all(path.join("nested").join("deeper")).expect("Failed to create subdir");
        fs::write(path.join("nested").join("deeper").join("low.tiff"), "x")
            .expect("Failed to create file");

        let dir_path = DirectoryPath::new(path).unwrap();
        let files = dir_path.image_files(true).expect("image_files should not fail");

        assert_eq!(files.len(), 2);
        assert!(files.contains(&path.join("top.png")));
        assert!(files.contains(&path.join("nested").join("deeper").join("low.tiff")));
    }

    /// 空のディレクトリでは空のリストが返る
    #[test]
    fn test_image_files_empty_directory() {
        let dir = tempdir().expect("Failed to create temp directory");
        let dir_path = DirectoryPath::new(dir.path()).unwrap();
        assert!(dir_path.image_files(false).unwrap().is_empty());
    }

    /// image_files()がI/Oエラーを正しく返すかテスト
    #[test]
    fn test_image_files_returns_io_error() {
        // new()のバリデーションをスキップして、存在しないパスを持つインスタンスを強制的に作成
        let dir_path = DirectoryPath {
            path: PathBuf::from("this_path_definitely_does_not_exist"),
        };

        let err = dir_path.image_files(false).unwrap_err();
        if let PathError::IoError(e) = err {
            assert_eq!(e.kind(), ErrorKind::NotFound);
        } else {
            panic!("予期せぬエラーが返されました: {:?}", err);
        }
    }
}
