use tracing::{debug, info};
use url::Url;

use crate::api_constants::{fragments_for_pairs, selectors};
use crate::error::Result;
use crate::html_processor::{AttrFilter, HtmlDocument};
use crate::page_fetcher::PageFetcher;
use crate::translation_error;

/// 单次翻译请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_language: String,
    pub target_language: String,
    pub word: String,
    /// 例句原始片段数（原文+译文各算一个）
    pub example_limit: usize,
    /// 译词数上限，None表示不限制
    pub translation_limit: Option<usize>,
}

impl TranslationRequest {
    /// 使用例句对数创建请求，片段数按每对两个换算
    pub fn new(
        source_language: &str,
        target_language: &str,
        word: &str,
        example_pairs: usize,
        translation_limit: Option<usize>,
    ) -> Self {
        Self {
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            word: word.to_string(),
            example_limit: fragments_for_pairs(example_pairs),
            translation_limit,
        }
    }

    /// 查询方向，如 `english-french`
    pub fn direction(&self) -> String {
        format!(
            "{}-{}",
            self.source_language.to_lowercase(),
            self.target_language.to_lowercase()
        )
    }

    /// 查询地址: {base}/{direction}/{word}，单词内空白替换为`+`
    pub fn url(&self, base_link: &str) -> Result<Url> {
        let search = self.word.split_whitespace().collect::<Vec<_>>().join("+");
        let raw = format!("{}/{}/{}", base_link, self.direction(), search);
        Url::parse(&raw).map_err(|e| translation_error!(network, format!("无效的查询地址 {}: {}", raw, e)))
    }
}

/// 单个目标语言的提取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub target_language: String,
    /// 译词，成功时至少有一个
    pub translations: Vec<String>,
    /// 例句片段，偶数位为原文、奇数位为译文，尚未配对
    pub examples: Vec<String>,
}

/// 从翻译页面中解析译词和例句片段
pub fn parse_translation(document: &HtmlDocument, request: &TranslationRequest) -> Result<TranslationResult> {
    let mut translations: Vec<String> = document
        .find_all("span", AttrFilter::Class(&[selectors::TERM_CLASS]))
        .iter()
        .map(|term| term.text())
        .collect();

    if translations.is_empty() {
        return Err(translation_error!(not_found, request.word));
    }

    if let Some(limit) = request.translation_limit {
        translations.truncate(limit);
    }

    // 空片段保留在原位，避免后续配对时原文/译文错位
    let examples: Vec<String> = document
        .find_all("div", AttrFilter::Class(selectors::EXAMPLE_CLASSES))
        .iter()
        .take(request.example_limit)
        .map(|fragment| fragment.trimmed_text())
        .collect();

    debug!(
        "{}: {} 个译词, {} 个例句片段",
        request.direction(),
        translations.len(),
        examples.len()
    );

    Ok(TranslationResult {
        target_language: request.target_language.clone(),
        translations,
        examples,
    })
}

/// 翻译提取器
pub struct Translator<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    base_link: String,
}

impl<'a, F: PageFetcher + ?Sized> Translator<'a, F> {
    pub fn new(fetcher: &'a F, base_link: &str) -> Self {
        Self {
            fetcher,
            base_link: base_link.to_string(),
        }
    }

    /// 获取并解析一个方向的翻译
    ///
    /// 语言是否受支持由调用方校验，这里直接拼接地址。
    pub async fn extract(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let url = request.url(&self.base_link)?;
        info!("🔍 查询 {}", url);

        let document = self.fetcher.fetch(url.as_str()).await?;
        parse_translation(&document, request)
    }
}
