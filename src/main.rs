//! dB Scale Converter - 主程序入口
//!
//! 纯流程控制器：读取配置与输入，调用转换器，输出结果。

use anyhow::Context;
use db_scale_converter::{
    convert,
    error::{ConvertError, ErrorCategory},
    tools::{self, constants::exit_codes},
};
use std::io;
use std::process;

/// 获取错误建议文本
fn get_error_suggestion(error: &ConvertError) -> &'static str {
    match ErrorCategory::from_convert_error(error) {
        ErrorCategory::Input => {
            "检查刻度名称与数值是否正确，使用 --help 查看完整用法 / Check the dB type and value, use --help to see full usage"
        }
        ErrorCategory::Calculation => {
            "数值超出可表示范围，请输入更合理的电平 / Value is out of representable range, enter a more realistic level"
        }
        ErrorCategory::Io => {
            "检查标准输入是否可用、输出文件是否可写 / Check that stdin is available and the output file is writable"
        }
        ErrorCategory::Other => {
            "请检查输入参数与输出格式设置 / Please check input arguments and output format settings"
        }
    }
}

/// 错误处理和建议
fn handle_error(error: anyhow::Error) -> ! {
    eprintln!("[ERROR] 错误 / Error: {error:#}");

    let exit_code = match error.downcast_ref::<ConvertError>() {
        Some(convert_error) => {
            let category = ErrorCategory::from_convert_error(convert_error);
            eprintln!("[INFO] 类别 / Category: {}", category.display_name());
            eprintln!(
                "[INFO] 建议 / Suggestion: {}",
                get_error_suggestion(convert_error)
            );
            match category {
                ErrorCategory::Input => exit_codes::INPUT_ERROR,
                ErrorCategory::Calculation => exit_codes::CALCULATION_ERROR,
                ErrorCategory::Io | ErrorCategory::Other => exit_codes::GENERAL_ERROR,
            }
        }
        None => exit_codes::GENERAL_ERROR,
    };

    process::exit(exit_code);
}

/// 应用程序主逻辑
fn run() -> anyhow::Result<()> {
    // 1. 解析命令行参数
    let config = tools::parse_args();

    // 2. 显示启动信息
    tools::show_startup_info(&config);

    // 3. 收集输入（缺失部分交互式提示）
    let input = {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut writer = io::stdout();
        tools::collect_input(&config, &mut reader, &mut writer)?
    };

    if config.verbose {
        eprintln!(
            "[INFO] 输入 / Input: {} {}",
            input.value, input.scale_name
        );
    }

    // 4. 转换
    let result = convert(input.value, &input.scale_name)?;

    // 5. 输出
    let rendered = tools::render(&result, config.format)?;
    tools::write_output(&rendered, &config).with_context(|| match &config.output_path {
        Some(path) => format!("写入结果失败 / Failed to write result to {}", path.display()),
        None => "写入结果失败 / Failed to write result".to_string(),
    })?;

    tools::show_completion_info(&config);
    Ok(())
}

fn main() {
    if let Err(error) = run() {
        handle_error(error);
    }
}
