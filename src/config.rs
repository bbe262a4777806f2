//! 配置管理模块
//!
//! 提供CLI参数解析和翻译配置管理功能

// 第三方crate导入
use clap::Parser;

// 本地模块导入
use crate::api_constants::{limits, service_config};

/// 翻译配置结构体
///
/// 支持Builder模式进行链式配置。
///
/// # Examples
///
/// ```rust
/// use reverso_cli::config::TranslatorConfig;
///
/// let config = TranslatorConfig::new()
///     .with_base_link("http://localhost:8080/translation")
///     .with_example_pairs(3);
/// assert_eq!(config.example_pairs(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// 翻译查询根地址
    base_link: String,
    /// 请求使用的User-Agent
    user_agent: String,
    /// 单个目标语言时的例句对数
    example_pairs: usize,
}

impl TranslatorConfig {
    /// 创建新的配置实例
    ///
    /// 返回具有默认值的配置实例：
    /// - 根地址: Reverso Context
    /// - User-Agent: `Mozilla/5.0`
    /// - 例句对数: 5
    pub fn new() -> Self {
        Self {
            base_link: service_config::BASE_LINK.to_string(),
            user_agent: service_config::DEFAULT_USER_AGENT.to_string(),
            example_pairs: limits::DEFAULT_EXAMPLE_PAIRS,
        }
    }

    /// 获取根地址
    pub fn base_link(&self) -> &str {
        &self.base_link
    }

    /// 获取User-Agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// 获取例句对数
    pub fn example_pairs(&self) -> usize {
        self.example_pairs
    }

    /// 设置根地址（末尾的`/`会被去掉）
    pub fn with_base_link(mut self, link: &str) -> Self {
        self.base_link = link.trim_end_matches('/').to_string();
        self
    }

    /// 设置User-Agent
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// 设置例句对数
    pub fn with_example_pairs(mut self, pairs: usize) -> Self {
        self.example_pairs = pairs;
        self
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// CLI参数结构
#[derive(Parser, Debug)]
#[command(author, version, about = "单词翻译工具 - 从Reverso Context获取译词和双语例句", long_about = None)]
pub struct Cli {
    /// 源语言 (如: english)
    #[arg(value_name = "SOURCE")]
    pub source_language: String,

    /// 目标语言 (如: french)，all 表示全部支持的语言
    #[arg(value_name = "TARGET")]
    pub target_language: String,

    /// 要翻译的单词或短语（可以以`-`开头）
    #[arg(value_name = "WORD", allow_hyphen_values = true)]
    pub word: String,
}
