//! 翻译流程编排模块
//!
//! 流程：加载语言列表 → 校验输入 → 逐个目标语言提取 → 生成报告 → 双路输出。
//! 任何一步失败都会终止整个运行，不输出部分报告。

// 标准库导入
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

// 第三方crate导入
use tracing::{debug, info};

// 本地模块导入
use crate::api_constants::{limits, service_config};
use crate::catalog::{load_languages, LanguageCatalog};
use crate::config::TranslatorConfig;
use crate::error::Result;
use crate::page_fetcher::PageFetcher;
use crate::report::render_report;
use crate::stats::RunStats;
use crate::tee_writer::write_report_to;
use crate::translation_error;
use crate::translator::{TranslationRequest, TranslationResult, Translator};
use crate::utils::capitalize;

/// 运行阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    LanguagesLoaded,
    Validated,
    Extracting,
    Reporting,
    Done,
    Failed,
}

/// 用户输入的查询
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub source_language: String,
    pub target_language: String,
    pub word: String,
}

impl Query {
    pub fn new(source_language: &str, target_language: &str, word: &str) -> Self {
        Self {
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            word: word.to_string(),
        }
    }

    /// 目标语言是否为`all`（区分大小写）
    pub fn is_survey(&self) -> bool {
        self.target_language == service_config::ALL_LANGUAGES
    }
}

/// 校验语言并生成提取请求
///
/// 单个目标语言使用默认限制；`all`时对除源语言外的每种语言各查询一个译词和一组例句。
pub fn plan_requests(
    catalog: &LanguageCatalog,
    query: &Query,
    config: &TranslatorConfig,
) -> Result<Vec<TranslationRequest>> {
    ensure_supported(catalog, &query.source_language)?;

    if query.is_survey() {
        let requests: Vec<TranslationRequest> = catalog
            .survey_targets(&query.source_language)
            .into_iter()
            .map(|target| {
                TranslationRequest::new(
                    &query.source_language,
                    &target.to_lowercase(),
                    &query.word,
                    limits::SURVEY_EXAMPLE_PAIRS,
                    Some(limits::SURVEY_TRANSLATIONS),
                )
            })
            .collect();
        debug!("全部语言模式: {} 个目标语言", requests.len());
        return Ok(requests);
    }

    ensure_supported(catalog, &query.target_language)?;
    Ok(vec![TranslationRequest::new(
        &query.source_language,
        &query.target_language,
        &query.word,
        config.example_pairs(),
        None,
    )])
}

/// 语言名称按首字母大写后与列表比较
fn ensure_supported(catalog: &LanguageCatalog, language: &str) -> Result<()> {
    if catalog.contains(&capitalize(language)) {
        Ok(())
    } else {
        debug!("不支持的语言: {}", language);
        Err(translation_error!(unsupported, language))
    }
}

/// 依次执行所有请求，遇到第一个失败即返回
pub async fn extract_all<F: PageFetcher + ?Sized>(
    translator: &Translator<'_, F>,
    requests: &[TranslationRequest],
) -> Result<Vec<TranslationResult>> {
    let mut results = Vec::with_capacity(requests.len());
    for (index, request) in requests.iter().enumerate() {
        debug!("查询 {}/{}: {}", index + 1, requests.len(), request.direction());
        results.push(translator.extract(request).await?);
    }
    Ok(results)
}

/// 翻译流程编排器
pub struct Orchestrator<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    config: TranslatorConfig,
    phase: RunPhase,
}

impl<'a, F: PageFetcher + ?Sized> Orchestrator<'a, F> {
    pub fn new(fetcher: &'a F, config: TranslatorConfig) -> Self {
        Self {
            fetcher,
            config,
            phase: RunPhase::Idle,
        }
    }

    /// 当前阶段
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// 执行完整流程，报告写入`console`和`<dir>/<word>.txt`
    pub async fn run<W: Write>(&mut self, query: &Query, console: W, dir: &Path) -> Result<(PathBuf, RunStats)> {
        let outcome = self.drive(query, console, dir).await;
        if outcome.is_err() {
            self.enter(RunPhase::Failed);
        }
        outcome
    }

    async fn drive<W: Write>(&mut self, query: &Query, console: W, dir: &Path) -> Result<(PathBuf, RunStats)> {
        let started = Instant::now();

        let catalog = load_languages(self.fetcher, self.config.base_link()).await?;
        self.enter(RunPhase::LanguagesLoaded);

        let requests = plan_requests(&catalog, query, &self.config)?;
        self.enter(RunPhase::Validated);

        self.enter(RunPhase::Extracting);
        let translator = Translator::new(self.fetcher, self.config.base_link());
        let results = extract_all(&translator, &requests).await?;

        self.enter(RunPhase::Reporting);
        let report = render_report(&results);
        let path = write_report_to(console, dir, &query.word, &report)?;
        self.enter(RunPhase::Done);

        let stats = RunStats::collect(catalog.len(), &results, started.elapsed());
        stats.log();
        Ok((path, stats))
    }

    fn enter(&mut self, next: RunPhase) {
        debug!("阶段 {:?} → {:?}", self.phase, next);
        if next == RunPhase::Done {
            info!("🎉 翻译完成");
        }
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslationError;
    use crate::page_fetcher::test_support::FixtureFetcher;

    const BASE: &str = "https://test.local/translation";

    const HOME: &str = r#"
        <div id="translate-links">
          <a class="flag" title="French">fr</a>
          <a class="flag" title="German">de</a>
        </div>
    "#;

    fn page(terms: &[&str], examples: &[&str]) -> String {
        let mut html = String::from("<html><body>");
        for term in terms {
            html.push_str(&format!("<span class=\"display-term\">{}</span>", term));
        }
        for (i, example) in examples.iter().enumerate() {
            let class = if i % 2 == 0 { "src ltr" } else { "trg ltr" };
            html.push_str(&format!("<div class=\"{}\">{}</div>", class, example));
        }
        html.push_str("</body></html>");
        html
    }

    fn config() -> TranslatorConfig {
        TranslatorConfig::new().with_base_link(BASE)
    }

    fn catalog() -> LanguageCatalog {
        LanguageCatalog::new(vec!["French", "German"])
    }

    #[test]
    fn test_plan_single_target_uses_defaults() {
        let requests = plan_requests(&catalog(), &Query::new("english", "french", "hello"), &config()).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].direction(), "english-french");
        assert_eq!(requests[0].translation_limit, None);
        assert_eq!(requests[0].example_limit, 10);
    }

    #[test]
    fn test_plan_survey_skips_source() {
        let requests = plan_requests(&catalog(), &Query::new("english", "all", "hello"), &config()).unwrap();
        let targets: Vec<_> = requests.iter().map(|r| r.target_language.as_str()).collect();
        assert_eq!(targets, vec!["french", "german"]);
        assert!(requests.iter().all(|r| r.translation_limit == Some(1) && r.example_limit == 2));
    }

    #[test]
    fn test_plan_survey_count_is_catalog_minus_source() {
        let requests = plan_requests(&catalog(), &Query::new("German", "all", "hallo"), &config()).unwrap();
        assert_eq!(requests.len(), catalog().len() - 1);
    }

    #[test]
    fn test_plan_all_keyword_is_case_sensitive() {
        assert!(Query::new("english", "all", "hi").is_survey());
        assert!(!Query::new("english", "ALL", "hi").is_survey());

        let err = plan_requests(&catalog(), &Query::new("english", "ALL", "hi"), &config()).unwrap_err();
        assert!(matches!(err, TranslationError::UnsupportedLanguage { ref language } if language == "ALL"));
    }

    #[test]
    fn test_plan_rejects_unknown_languages() {
        let err = plan_requests(&catalog(), &Query::new("klingon", "french", "hi"), &config()).unwrap_err();
        assert_eq!(err.to_string(), "Sorry, the program doesn't support klingon");

        let err = plan_requests(&catalog(), &Query::new("english", "elvish", "hi"), &config()).unwrap_err();
        assert!(matches!(err, TranslationError::UnsupportedLanguage { ref language } if language == "elvish"));
    }

    #[tokio::test]
    async fn test_unsupported_language_makes_no_extraction_request() {
        let fetcher = FixtureFetcher::new().with_page(BASE, HOME);
        let dir = tempfile::tempdir().unwrap();
        let mut orchestrator = Orchestrator::new(&fetcher, config());

        let result = orchestrator
            .run(&Query::new("english", "elvish", "hello"), Vec::<u8>::new(), dir.path())
            .await;

        assert!(matches!(result, Err(TranslationError::UnsupportedLanguage { .. })));
        assert_eq!(fetcher.requested(), vec![BASE]);
        assert_eq!(orchestrator.phase(), RunPhase::Failed);
        assert!(!dir.path().join("hello.txt").exists());
    }

    #[tokio::test]
    async fn test_single_target_run_writes_report() {
        let fetcher = FixtureFetcher::new().with_page(BASE, HOME).with_page(
            &format!("{}/english-french/hello", BASE),
            &page(&["bonjour", "salut"], &["Hello.", "Bonjour.", "Hi!", "Salut !"]),
        );
        let dir = tempfile::tempdir().unwrap();
        let mut console: Vec<u8> = Vec::new();
        let mut orchestrator = Orchestrator::new(&fetcher, config());

        let (path, stats) = orchestrator
            .run(&Query::new("english", "french", "hello"), &mut console, dir.path())
            .await
            .unwrap();

        let expected = "French Translations:\nbonjour\nsalut\n\n\
                        French Examples:\nHello.\nBonjour.\n\nHi!\nSalut !\n";
        assert_eq!(String::from_utf8(console).unwrap(), expected);
        assert_eq!(std::fs::read_to_string(path).unwrap(), expected);
        assert_eq!(stats.extractions, 1);
        assert_eq!(stats.example_pairs, 2);
        assert_eq!(orchestrator.phase(), RunPhase::Done);
    }

    #[tokio::test]
    async fn test_survey_run_queries_each_language_in_order() {
        let fetcher = FixtureFetcher::new()
            .with_page(BASE, HOME)
            .with_page(
                &format!("{}/english-french/good+morning", BASE),
                &page(&["bonjour", "bon matin"], &["Good morning.", "Bonjour.", "x", "y"]),
            )
            .with_page(
                &format!("{}/english-german/good+morning", BASE),
                &page(&["guten Morgen"], &["Good morning!", "Guten Morgen!"]),
            );
        let dir = tempfile::tempdir().unwrap();
        let mut console: Vec<u8> = Vec::new();
        let mut orchestrator = Orchestrator::new(&fetcher, config());

        orchestrator
            .run(&Query::new("English", "all", "good morning"), &mut console, dir.path())
            .await
            .unwrap();

        assert_eq!(
            fetcher.requested(),
            vec![
                BASE.to_string(),
                format!("{}/english-french/good+morning", BASE),
                format!("{}/english-german/good+morning", BASE),
            ]
        );
        assert_eq!(
            String::from_utf8(console).unwrap(),
            "French Translations:\nbonjour\n\nFrench Examples:\nGood morning.\nBonjour.\n\
             German Translations:\nguten Morgen\n\nGerman Examples:\nGood morning!\nGuten Morgen!\n"
        );
        assert!(dir.path().join("good morning.txt").exists());
    }

    #[tokio::test]
    async fn test_survey_aborts_on_first_missing_word() {
        let fetcher = FixtureFetcher::new()
            .with_page(BASE, HOME)
            .with_page(&format!("{}/english-french/zzz", BASE), &page(&[], &[]))
            .with_page(&format!("{}/english-german/zzz", BASE), &page(&["zzz"], &[]));
        let dir = tempfile::tempdir().unwrap();
        let mut orchestrator = Orchestrator::new(&fetcher, config());

        let err = orchestrator
            .run(&Query::new("english", "all", "zzz"), Vec::<u8>::new(), dir.path())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Sorry, unable to find zzz");
        assert_eq!(fetcher.requested().len(), 2);
        assert!(!dir.path().join("zzz.txt").exists());
    }

    #[tokio::test]
    async fn test_catalog_failure_stops_run() {
        let fetcher = FixtureFetcher::new().with_page(BASE, "<p>down for maintenance</p>");
        let dir = tempfile::tempdir().unwrap();
        let mut orchestrator = Orchestrator::new(&fetcher, config());

        let result = orchestrator
            .run(&Query::new("english", "french", "hello"), Vec::<u8>::new(), dir.path())
            .await;
        assert!(matches!(result, Err(TranslationError::HtmlParse { .. })));
    }
}
