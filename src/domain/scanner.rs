//! ディレクトリ内の画像を走査し、最大グレースケール値を集計するモジュール。

use super::grayscale::{normalize, try_max_gray_in_image};
use super::input_source::directory_path::DirectoryPath;
use super::input_source::path_error::PathError;
use super::scan_report::{ImageMeasurement, ImageOutcome, ScanReport};
use crate::error::AppError;
use std::io::Write;
use std::path::Path;

/// 走査の設定。
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// サブディレクトリも走査するかどうか。
    pub recursive: bool,
}

/// 検証済みディレクトリを走査して `ScanReport` を作成します。
///
/// 個々の画像のデコード失敗は `ImageOutcome::Failed` として記録され、走査は継続します。
/// ディレクトリ自体が読めない場合のみエラーを返します。
pub fn scan(dir: &DirectoryPath, options: &ScanOptions) -> Result<ScanReport, PathError> {
    let image_paths = dir.image_files(options.recursive)?;
    tracing::debug!("{} 件の画像ファイルを検出: {}", image_paths.len(), dir);

    let measurements = image_paths
        .iter()
        .map(|path| {
            let name = dir.relative_name(path);
            let outcome = match try_max_gray_in_image(path) {
                Ok(max_gray) => ImageOutcome::Measured(normalize(max_gray)),
                Err(e) => {
                    tracing::warn!("{}", e);
                    ImageOutcome::Failed(e.to_string())
                }
            };
            tracing::debug!(?outcome, "{}", name);
            ImageMeasurement::new(name, outcome)
        })
        .collect();

    Ok(ScanReport::new(dir.to_string(), measurements))
}

/// ディレクトリ内の画像を走査し、結果を `out` に書き出して全体の最大値を返します。
///
/// # 戻り値
/// * `Ok(f64)`: 正規化済み最大グレースケール値の最大値。画像がなければ `0.0`。
/// * `Err(AppError)`: ディレクトリが存在しない、ディレクトリでない、読めない場合。
pub fn scan_directory<P: AsRef<Path>, W: Write>(
    dir: P,
    options: &ScanOptions,
    out: &mut W,
) -> Result<f64, AppError> {
    let dir = DirectoryPath::new(dir)?;
    let report = scan(&dir, options)?;

    for line in report.lines() {
        writeln!(out, "{}", line)?;
    }
    if !report.is_empty() {
        writeln!(out, "overall max-gray: {:.2}", report.overall_max())?;
    }
    if report.failure_count() > 0 {
        tracing::warn!(
            "{} 件の画像をデコードできなかったため 0.0 として扱いました",
            report.failure_count()
        );
    }

    Ok(report.overall_max())
}
