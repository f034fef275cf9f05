use clap::Parser;
use std::path::PathBuf;

/// ディレクトリ内の画像の最大グレースケール値 (0.299R + 0.587G + 0.114B) を調べるツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 走査対象の画像が含まれるフォルダのパス
    #[arg(default_value = "./assets")]
    pub input_dir: PathBuf,

    /// サブフォルダも再帰的に走査する
    #[arg(short, long)]
    pub recursive: bool,

    /// デバッグログを出力する
    #[arg(short, long)]
    pub verbose: bool,
}
