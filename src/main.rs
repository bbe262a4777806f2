use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use reverso_cli::config::{Cli, TranslatorConfig};
use reverso_cli::orchestrator::{Orchestrator, Query};
use reverso_cli::page_fetcher::HttpFetcher;
use reverso_cli::utils::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    init_logging();

    let config = TranslatorConfig::new();
    let fetcher = HttpFetcher::new(config.user_agent());
    let query = Query::new(&cli.source_language, &cli.target_language, &cli.word);
    debug!("查询: {:?}", query);

    let mut orchestrator = Orchestrator::new(&fetcher, config);
    if let Err(e) = orchestrator.run(&query, std::io::stdout(), Path::new(".")).await {
        match e.details() {
            Some(details) => debug!("❌ 翻译失败: {} ({})", e, details),
            None => debug!("❌ 翻译失败: {}", e),
        }
        // 面向用户的错误只打印一行
        println!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}
