//! Frontend tests module
//!
//! - compiler: 错误分类、错误码与位置
//! - pipeline: 状态机与阶段耗时
//! - payload: 服务端 JSON 载荷
//! - config: 编译配置
