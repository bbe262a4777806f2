/// 翻译服务常量配置
///
/// 该文件定义了Reverso Context抓取相关的常量，方便统一管理和维护

/// 翻译服务配置
pub mod service_config {
    /// 翻译查询根地址（同时也是语言列表所在的首页）
    pub const BASE_LINK: &str = "https://context.reverso.net/translation";

    /// 模拟浏览器的User-Agent
    pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

    /// 首页默认选中英语，语言列表里没有它的flag链接，需要手动补上
    pub const FALLBACK_LANGUAGE: &str = "English";

    /// 目标语言为该值时翻译到全部支持的语言
    pub const ALL_LANGUAGES: &str = "all";
}

/// 页面结构选择器
pub mod selectors {
    /// 语言列表容器的id
    pub const LANGUAGE_CONTAINER_ID: &str = "translate-links";

    /// 语言链接的class
    pub const LANGUAGE_FLAG_CLASS: &str = "flag";

    /// 语言名称所在属性
    pub const LANGUAGE_TITLE_ATTR: &str = "title";

    /// 译词元素的class
    pub const TERM_CLASS: &str = "display-term";

    /// 例句原文/译文的class
    pub const EXAMPLE_CLASSES: &[&str] = &["src", "trg"];
}

/// 数量限制
pub mod limits {
    /// 单个目标语言时展示的例句对数
    pub const DEFAULT_EXAMPLE_PAIRS: usize = 5;

    /// 翻译到全部语言时每种语言的译词数
    pub const SURVEY_TRANSLATIONS: usize = 1;

    /// 翻译到全部语言时每种语言的例句对数
    pub const SURVEY_EXAMPLE_PAIRS: usize = 1;

    /// 每个例句对包含的原始片段数（原文+译文）
    pub const FRAGMENTS_PER_PAIR: usize = 2;
}

/// 错误消息常量
pub mod error_messages {
    /// 网络连接错误
    pub const NETWORK_ERROR: &str = "Something wrong with your internet connection";

    /// 不支持的语言错误前缀
    pub const UNSUPPORTED_LANGUAGE: &str = "Sorry, the program doesn't support";

    /// 找不到单词错误前缀
    pub const WORD_NOT_FOUND: &str = "Sorry, unable to find";

    /// 语言列表解析错误前缀
    pub const LANGUAGES_PARSE_ERROR: &str = "Unable to read supported languages";
}

/// 验证URL是否为HTTP(S)地址
pub fn is_valid_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// 将例句对数换算为原始片段数
pub fn fragments_for_pairs(pairs: usize) -> usize {
    pairs * limits::FRAGMENTS_PER_PAIR
}
