use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// 默认关闭日志，失败时只向用户打印一行提示
pub const DEFAULT_LOG_FILTER: &str = "off";

/// 日志过滤规则，未设置或无法解析时使用默认值
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// 初始化日志系统
///
/// 日志写到stderr，stdout只留给翻译结果；排查问题时通过`RUST_LOG`打开
pub fn init_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// 首字母大写、其余字母小写（与页面上语言名称的写法一致）
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// 结果文件路径: <word>.txt
pub fn report_path(dir: &Path, word: &str) -> PathBuf {
    dir.join(format!("{}.txt", word))
}

/// 格式化持续时间
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.3}s", duration.as_secs_f64())
    }
}
