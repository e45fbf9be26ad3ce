//! 交互式输入模块
//!
//! 命令行未给出刻度或数值时，依次提示用户输入。读写端抽象为
//! `BufRead` / `Write`，主程序传入标准输入输出，测试传入内存缓冲。

use super::cli::AppConfig;
use super::constants::prompts;
use super::utils::parse_db_value;
use crate::core::Scale;
use crate::error::{ConvertError, ConvertResult};
use std::io::{self, BufRead, Write};

/// 已收集的转换输入
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionInput {
    pub scale_name: String,
    pub value: f64,
}

/// 打印欢迎信息与可选刻度
pub fn show_welcome<W: Write>(writer: &mut W) -> ConvertResult<()> {
    writeln!(writer, "{}", prompts::WELCOME)?;
    writeln!(writer, "Types: {}", Scale::valid_names().join(", "))?;
    Ok(())
}

/// 输出提示并读取一行（去除行尾换行）
///
/// 输入流已关闭时返回 `UnexpectedEof`。
pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> ConvertResult<String> {
    write!(writer, "{label}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(ConvertError::IoError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "标准输入已关闭 / stdin closed before input was complete",
        )));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// 合并命令行参数与交互输入
///
/// 刻度先于数值提示，与原有交互顺序一致；刻度名称在此不做校验，
/// 交由转换器返回 `UnrecognizedScale`。
pub fn collect_input<R: BufRead, W: Write>(
    config: &AppConfig,
    reader: &mut R,
    writer: &mut W,
) -> ConvertResult<ConversionInput> {
    if config.is_interactive() {
        show_welcome(writer)?;
    }

    let scale_name = match &config.scale {
        Some(name) => name.clone(),
        None => prompt_line(reader, writer, prompts::ENTER_TYPE)?,
    };

    let value_text = match &config.value {
        Some(text) => text.clone(),
        None => prompt_line(reader, writer, prompts::ENTER_VALUE)?,
    };

    Ok(ConversionInput {
        scale_name,
        value: parse_db_value(&value_text)?,
    })
}
