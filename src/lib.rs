//! reverso-cli - 命令行单词翻译工具库
//!
//! 这个库提供了页面获取、HTML查询、语言列表加载、译词和例句提取以及报告输出等核心功能。

pub mod api_constants;
pub mod catalog;
pub mod config;
pub mod error;
pub mod html_processor;
pub mod orchestrator;
pub mod page_fetcher;
pub mod report;
pub mod stats;
pub mod tee_writer;
pub mod translator;
pub mod utils;
