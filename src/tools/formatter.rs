//! 输出格式化模块
//!
//! 负责转换结果的文本、表格与JSON输出，以及报告文件写入。

use super::cli::{AppConfig, OutputFormat};
use super::constants::display;
use super::utils::format_db;
use crate::core::ConversionResult;
use crate::error::ConvertResult;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};

/// 应用程序版本信息
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 逐行文本输出
///
/// 首行为 `Conversions from <值> <刻度>:`，随后按注册表顺序每行一个刻度。
pub fn format_text(result: &ConversionResult) -> String {
    let mut output = format!(
        "Conversions from {:?} {}:\n",
        result.input_value, result.input_scale
    );
    for (scale, value) in result.iter() {
        output.push_str(&format!("{scale}: {}\n", format_db(value)));
    }
    output
}

/// 表格输出
pub fn format_table(result: &ConversionResult) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scale / 刻度", "Reference / 参考值", "Level / 电平"]);

    for (scale, value) in result.iter() {
        let name = if scale == result.input_scale {
            format!("{scale} *")
        } else {
            scale.to_string()
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(scale.reference()).set_alignment(CellAlignment::Right),
            Cell::new(format_db(value)).set_alignment(CellAlignment::Right),
        ]);
    }

    format!(
        "Conversions from {:?} {}:\n{table}\n",
        result.input_value, result.input_scale
    )
}

/// JSON输出
pub fn format_json(result: &ConversionResult) -> ConvertResult<String> {
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    Ok(json)
}

/// 按配置的输出格式渲染结果
pub fn render(result: &ConversionResult, format: OutputFormat) -> ConvertResult<String> {
    match format {
        OutputFormat::Text => Ok(format_text(result)),
        OutputFormat::Table => Ok(format_table(result)),
        OutputFormat::Json => format_json(result),
    }
}

/// 创建报告文件头部信息
pub fn create_output_header() -> String {
    let mut output = String::new();
    output.push_str(&format!("dB Scale Converter v{VERSION}\n"));
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    output.push_str(&format!("log date: {now}\n\n"));
    output.push_str(display::SEPARATOR);
    output.push('\n');
    output
}

/// 输出结果：始终打印到控制台，指定了输出文件时附带头部写入文件
pub fn write_output(rendered: &str, config: &AppConfig) -> ConvertResult<()> {
    print!("{rendered}");

    if let Some(output_path) = &config.output_path {
        // JSON保持为合法文档，不加头部
        let content = match config.format {
            OutputFormat::Json => rendered.to_string(),
            _ => format!("{}{rendered}", create_output_header()),
        };
        std::fs::write(output_path, content)?;
        if config.verbose {
            eprintln!("[INFO] 结果已保存到 / Saved to: {}", output_path.display());
        }
    }
    Ok(())
}
