//! 页面获取模块
//!
//! 此模块负责：
//! - 以浏览器User-Agent发送GET请求
//! - 将响应内容解析为`HtmlDocument`
//!
//! 抓取逻辑通过`PageFetcher` trait访问网络，测试中替换为内存页面。

// 第三方crate导入
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use tracing::debug;

// 本地模块导入
use crate::api_constants::{is_valid_http_url, service_config};
use crate::error::Result;
use crate::html_processor::HtmlDocument;
use crate::translation_error;

/// 页面获取接口
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 获取页面原始HTML
    async fn fetch_html(&self, url: &str) -> Result<String>;

    /// 获取并解析页面
    async fn fetch(&self, url: &str) -> Result<HtmlDocument> {
        let html = self.fetch_html(url).await?;
        HtmlDocument::parse(&html)
    }
}

/// 基于reqwest的HTTP页面获取器
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    user_agent: String,
}

impl HttpFetcher {
    /// 使用指定User-Agent创建获取器
    pub fn new(user_agent: &str) -> Self {
        Self {
            client: Client::new(),
            user_agent: user_agent.to_string(),
        }
    }

    /// 当前使用的User-Agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(service_config::DEFAULT_USER_AGENT)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        if !is_valid_http_url(url) {
            return Err(translation_error!(network, format!("URL必须以http://或https://开头: {}", url)));
        }

        debug!("🌐 GET {}", url);
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await?;

        // 非2xx状态不视为错误，页面内容照常解析
        debug!("📥 响应状态: {}", response.status());

        let body = response.text().await?;
        debug!("📏 页面大小: {} 字节", body.len());
        Ok(body)
    }
}
