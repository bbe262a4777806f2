//! 支持语言列表模块
//!
//! 从翻译服务首页读取`#translate-links`中的flag链接，得到支持的语言名称。

// 第三方crate导入
use tracing::{debug, info, warn};

// 本地模块导入
use crate::api_constants::{selectors, service_config};
use crate::error::Result;
use crate::html_processor::{AttrFilter, HtmlDocument};
use crate::page_fetcher::PageFetcher;
use crate::translation_error;

/// 支持的语言列表
///
/// 保持页面上的顺序且不重复，末尾总是包含`English`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: Vec<String>,
}

impl LanguageCatalog {
    /// 由语言名称构建列表，并补上默认语言
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut languages: Vec<String> = Vec::new();
        let fallback = std::iter::once(service_config::FALLBACK_LANGUAGE.to_string());

        for name in names.into_iter().map(Into::into).chain(fallback) {
            if !languages.contains(&name) {
                languages.push(name);
            }
        }

        Self { languages }
    }

    /// 是否包含该显示名称（区分大小写，调用方负责规范化）
    pub fn contains(&self, name: &str) -> bool {
        self.languages.iter().any(|language| language == name)
    }

    /// 除源语言外的所有语言（忽略大小写比较）
    pub fn survey_targets(&self, source: &str) -> Vec<&str> {
        self.languages
            .iter()
            .filter(|language| !language.eq_ignore_ascii_case(source))
            .map(String::as_str)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// 从首页文档中解析语言列表
pub fn parse_languages(document: &HtmlDocument) -> Result<LanguageCatalog> {
    let container = document
        .find("div", AttrFilter::Id(selectors::LANGUAGE_CONTAINER_ID))
        .ok_or_else(|| {
            translation_error!(
                html_parse,
                format!("page has no #{} block", selectors::LANGUAGE_CONTAINER_ID)
            )
        })?;

    let flags = container.find_all("a", AttrFilter::Class(&[selectors::LANGUAGE_FLAG_CLASS]));
    debug!("找到 {} 个语言链接", flags.len());

    let names = flags.into_iter().filter_map(|flag| {
        let title = flag.attribute(selectors::LANGUAGE_TITLE_ATTR);
        if title.is_none() {
            warn!("⚠️  语言链接缺少title属性，已跳过");
        }
        title
    });

    Ok(LanguageCatalog::new(names))
}

/// 获取首页并加载语言列表
pub async fn load_languages<F: PageFetcher + ?Sized>(
    fetcher: &F,
    base_link: &str,
) -> Result<LanguageCatalog> {
    info!("🌐 加载支持的语言列表: {}", base_link);
    let document = fetcher.fetch(base_link).await?;
    let catalog = parse_languages(&document)?;
    info!("✅ 共 {} 种语言", catalog.len());
    Ok(catalog)
}
