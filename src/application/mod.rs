//! アプリケーション層: コマンド解析、出力集約、実行戦略

pub mod services;
pub mod use_cases;
