//! 编译配置
//!
//! 管理前端配置选项：制表符宽度、类名预声明、IR 输出。

use crate::frontend::core::lexer::DEFAULT_TAB_WIDTH;
use crate::frontend::core::parser::ParseOptions;
use serde::{Deserialize, Serialize};

fn default_tab_width() -> usize {
    DEFAULT_TAB_WIDTH
}

/// 编译配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileConfig {
    /// 制表符折算的缩进列数
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// 解析前登记文件中所有 `class Name`，允许先实例化后定义
    #[serde(default)]
    pub predeclare_classes: bool,

    /// 渲染时附带 IR 列表
    #[serde(default)]
    pub show_ir: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            predeclare_classes: false,
            show_ir: false,
        }
    }
}

impl CompileConfig {
    /// 创建默认配置
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置制表符宽度
    #[inline]
    pub fn with_tab_width(
        mut self,
        tab_width: usize,
    ) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// 启用/禁用类名预声明
    #[inline]
    pub fn with_predeclare_classes(
        mut self,
        enabled: bool,
    ) -> Self {
        self.predeclare_classes = enabled;
        self
    }

    /// 启用/禁用 IR 输出
    #[inline]
    pub fn with_show_ir(
        mut self,
        enabled: bool,
    ) -> Self {
        self.show_ir = enabled;
        self
    }

    /// 解析器选项
    #[inline]
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            predeclare_classes: self.predeclare_classes,
        }
    }
}
