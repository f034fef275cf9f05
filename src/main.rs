mod cli;
mod workflow;

use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // 標準出力は走査結果のみにするため、ログは標準エラーへ
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    // コマンドライン引数を解析します
    let args = cli::Args::parse();
    init_logging(args.verbose);

    match workflow::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // Debug 表記ではなく、利用者向けのメッセージを出力する
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
