//! 工具模块集合
//!
//! 包含CLI、交互输入、格式化等工具模块，支持main.rs的流程控制。

pub mod cli;
pub mod constants;
pub mod formatter;
pub mod prompt;
pub mod utils;

// 重新导出主要的公共接口
pub use cli::{AppConfig, OutputFormat, parse_args, show_completion_info, show_startup_info};
pub use formatter::{
    create_output_header, format_json, format_table, format_text, render, write_output,
};
pub use prompt::{ConversionInput, collect_input};
pub use utils::{format_db, parse_db_value};
