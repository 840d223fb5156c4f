use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use log::LevelFilter;
use std::process::ExitCode;

use lsb_conceal::{
    cli::{Cli, Commands},
    handler::{handle_capacity, handle_conceal, handle_extract},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`conceal`、`extract` 或 `capacity`）
/// 将执行分派到相应的处理函数。任何失败都以退出码 1 结束。
fn main() -> ExitCode {
    // 默认只输出警告，可通过 RUST_LOG 调整
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    // 根据子命令调用相应的处理函数
    let result = match cli.command {
        Commands::Conceal(args) => handle_conceal(args),
        Commands::Extract(args) => handle_extract(args),
        Commands::Capacity(args) => handle_capacity(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
