//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 最大グレースケール値の走査と結果の出力を行います。

use crate::cli::Args;
use max_gray_scanner::domain::{scan_directory, ScanOptions};
use max_gray_scanner::error::AppError;
use std::io::{self, Write};

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
///
/// # 戻り値
/// * `Ok(f64)`: 全画像の中の最大の正規化グレースケール値。
/// * `Err(AppError)`: 入力ディレクトリが存在しないなど、回復不可能なエラーが発生した場合。
pub fn run(args: Args) -> Result<f64, AppError> {
    tracing::info!("走査を開始します: {}", args.input_dir.display());

    let options = ScanOptions {
        recursive: args.recursive,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let overall_max = scan_directory(&args.input_dir, &options, &mut out)?;
    out.flush()?;

    Ok(overall_max)
}
