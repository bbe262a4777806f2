//! 报告生成模块
//!
//! 将例句片段配对，并按固定格式输出每个目标语言的译词和例句。

use std::fmt;

use crate::translator::TranslationResult;
use crate::utils::capitalize;

/// 一组原文/译文例句
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplePair {
    pub source: String,
    pub target: String,
}

impl ExamplePair {
    /// 原文和译文都为空时不展示
    pub fn is_blank(&self) -> bool {
        self.source.is_empty() && self.target.is_empty()
    }
}

impl fmt::Display for ExamplePair {
    /// 两行之间换行，单侧为空时只输出非空的一行
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.source.is_empty(), self.target.is_empty()) {
            (false, false) => write!(f, "{}\n{}", self.source, self.target),
            (false, true) => write!(f, "{}", self.source),
            (true, _) => write!(f, "{}", self.target),
        }
    }
}

/// 按位置配对片段：偶数位为原文，紧随其后的奇数位为译文
///
/// 片段数为奇数时最后一个没有配对对象，直接丢弃。
/// 空片段不会被提前过滤，因此不会改变后续片段的奇偶位置。
pub fn pair_examples(fragments: &[String]) -> Vec<ExamplePair> {
    fragments
        .chunks_exact(2)
        .map(|pair| ExamplePair {
            source: pair[0].clone(),
            target: pair[1].clone(),
        })
        .collect()
}

/// 格式化单个目标语言的段落
pub fn format_section(result: &TranslationResult) -> String {
    let language = capitalize(&result.target_language);
    let pairs: Vec<String> = pair_examples(&result.examples)
        .iter()
        .filter(|pair| !pair.is_blank())
        .map(ExamplePair::to_string)
        .collect();

    let mut section = format!("{} Translations:\n", language);
    for term in &result.translations {
        section.push_str(term);
        section.push('\n');
    }
    section.push('\n');

    section.push_str(&format!("{} Examples:\n", language));
    section.push_str(&pairs.join("\n\n"));
    section.push('\n');
    section
}

/// 拼接所有目标语言的段落
pub fn render_report(results: &[TranslationResult]) -> String {
    results.iter().map(format_section).collect()
}
