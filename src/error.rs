//! 统一错误处理模块
//!
//! 提供reverso-cli项目的统一错误类型定义和处理机制

// 标准库导入
use std::fmt;

// 本地模块导入
use crate::api_constants::error_messages;

/// reverso-cli 统一错误类型
///
/// 每个变体的Display输出就是展示给用户的那一行提示
#[derive(Debug)]
pub enum TranslationError {
    /// 网络请求相关错误
    Network {
        /// 错误消息
        message: String,
        /// HTTP状态码（如果适用）
        status_code: Option<u16>,
    },

    /// HTML解析相关错误（页面结构变化）
    HtmlParse {
        /// 具体错误信息
        details: String,
    },

    /// 语言不在支持列表中
    UnsupportedLanguage {
        /// 用户输入的语言
        language: String,
    },

    /// 页面上找不到任何译词
    WordNotFound {
        /// 查询的单词
        word: String,
    },

    /// 文件操作相关错误
    FileOperation {
        /// 文件路径
        path: String,
        /// 操作类型（创建、写入等）
        operation: String,
        /// 底层错误信息
        source: String,
    },
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::Network { .. } => {
                write!(f, "{}", error_messages::NETWORK_ERROR)
            }
            TranslationError::HtmlParse { details } => {
                write!(f, "{}: {}", error_messages::LANGUAGES_PARSE_ERROR, details)
            }
            TranslationError::UnsupportedLanguage { language } => {
                write!(f, "{} {}", error_messages::UNSUPPORTED_LANGUAGE, language)
            }
            TranslationError::WordNotFound { word } => {
                write!(f, "{} {}", error_messages::WORD_NOT_FOUND, word)
            }
            TranslationError::FileOperation { path, operation, source } => {
                write!(f, "Failed to {} {}: {}", operation, path, source)
            }
        }
    }
}

impl std::error::Error for TranslationError {}

impl TranslationError {
    /// 网络错误的详细信息（Display只给出统一提示，日志里需要具体原因）
    pub fn details(&self) -> Option<String> {
        match self {
            TranslationError::Network { message, status_code: Some(code) } => {
                Some(format!("[{}] {}", code, message))
            }
            TranslationError::Network { message, status_code: None } => Some(message.clone()),
            _ => None,
        }
    }
}

/// reverso-cli 结果类型别名
pub type Result<T> = std::result::Result<T, TranslationError>;

/// 便捷的错误创建宏
#[macro_export]
macro_rules! translation_error {
    (network, $msg:expr) => {
        $crate::error::TranslationError::Network {
            message: $msg.to_string(),
            status_code: None,
        }
    };
    (network, $msg:expr, $code:expr) => {
        $crate::error::TranslationError::Network {
            message: $msg.to_string(),
            status_code: Some($code),
        }
    };
    (html_parse, $details:expr) => {
        $crate::error::TranslationError::HtmlParse {
            details: $details.to_string(),
        }
    };
    (unsupported, $lang:expr) => {
        $crate::error::TranslationError::UnsupportedLanguage {
            language: $lang.to_string(),
        }
    };
    (not_found, $word:expr) => {
        $crate::error::TranslationError::WordNotFound {
            word: $word.to_string(),
        }
    };
    (file_op, $path:expr, $op:expr, $source:expr) => {
        $crate::error::TranslationError::FileOperation {
            path: $path.to_string(),
            operation: $op.to_string(),
            source: $source.to_string(),
        }
    };
}

/// 从reqwest::Error转换为TranslationError
impl From<reqwest::Error> for TranslationError {
    fn from(error: reqwest::Error) -> Self {
        let status_code = error.status().map(|s| s.as_u16());
        TranslationError::Network {
            message: error.to_string(),
            status_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = translation_error!(unsupported, "klingon");
        assert_eq!(format!("{}", err), "Sorry, the program doesn't support klingon");

        let err = translation_error!(not_found, "qwzx");
        assert_eq!(format!("{}", err), "Sorry, unable to find qwzx");

        let err = translation_error!(network, "connection refused");
        assert_eq!(format!("{}", err), "Something wrong with your internet connection");
    }

    #[test]
    fn test_error_macro() {
        let err = translation_error!(network, "Test error", 404);
        match err {
            TranslationError::Network { message, status_code } => {
                assert_eq!(message, "Test error");
                assert_eq!(status_code, Some(404));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_network_details_kept_for_logs() {
        let err = translation_error!(network, "dns failure", 503);
        assert_eq!(err.details().as_deref(), Some("[503] dns failure"));
        assert!(translation_error!(not_found, "x").details().is_none());
    }

    #[test]
    fn test_file_op_display() {
        let err = translation_error!(file_op, "hello.txt", "create", "permission denied");
        assert_eq!(format!("{}", err), "Failed to create hello.txt: permission denied");
    }
}
