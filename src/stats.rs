use std::time::Duration;

use tracing::info;

use crate::report::pair_examples;
use crate::translator::TranslationResult;
use crate::utils::format_duration;

/// 单次运行的统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub languages_loaded: usize,
    pub extractions: usize,
    pub translations: usize,
    pub example_pairs: usize,
    pub elapsed: Duration,
}

impl RunStats {
    /// 汇总提取结果
    pub fn collect(languages_loaded: usize, results: &[TranslationResult], elapsed: Duration) -> Self {
        Self {
            languages_loaded,
            extractions: results.len(),
            translations: results.iter().map(|r| r.translations.len()).sum(),
            example_pairs: results.iter().map(|r| pair_examples(&r.examples).len()).sum(),
            elapsed,
        }
    }

    /// 输出统计日志
    pub fn log(&self) {
        info!(
            "📊 {} 种语言, {} 次查询, {} 个译词, {} 组例句, 耗时 {}",
            self.languages_loaded,
            self.extractions,
            self.translations,
            self.example_pairs,
            format_duration(self.elapsed)
        );
    }
}
