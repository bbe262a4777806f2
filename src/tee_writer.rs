//! 双路输出模块
//!
//! 同一份报告同时写到控制台和结果文件。

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::translation_error;
use crate::utils::report_path;

/// 把每次写入同时转发给两个输出
#[derive(Debug)]
pub struct TeeWriter<A: Write, B: Write> {
    primary: A,
    secondary: B,
}

impl<A: Write, B: Write> TeeWriter<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }

    /// 写入一段文本
    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.write_all(text.as_bytes())
    }

    /// 拆回两个输出
    pub fn into_inner(self) -> (A, B) {
        (self.primary, self.secondary)
    }
}

impl<A: Write, B: Write> Write for TeeWriter<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.primary.write_all(buf)?;
        self.secondary.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        self.secondary.flush()
    }
}

/// 将报告写入`<dir>/<word>.txt`，同时输出到`console`
///
/// 文件句柄在函数返回时关闭，写入失败时磁盘上可能留下部分内容。
pub fn write_report_to<W: Write>(console: W, dir: &Path, word: &str, report: &str) -> Result<PathBuf> {
    let path = report_path(dir, word);
    let file = File::create(&path)
        .map_err(|e| translation_error!(file_op, path.display(), "create", e))?;
    debug!("📄 结果文件: {}", path.display());

    let mut tee = TeeWriter::new(console, BufWriter::new(file));
    tee.write_text(report)
        .and_then(|_| tee.flush())
        .map_err(|e| translation_error!(file_op, path.display(), "write", e))?;

    info!("✅ 结果已保存到: {}", path.display());
    Ok(path)
}
