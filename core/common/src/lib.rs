//! stylist 共通ライブラリ
//!
//! 会話ターン・LLM ドライバーとプロバイダ・エラー型・ログ/環境変数のポートを提供します。

/// エラーハンドリング
pub mod error;

/// 会話ターン（System / User / Assistant）
pub mod turn;

/// セッション ID 生成（固定長・辞書順＝時系列）
pub mod session_id;

/// LLMドライバーとプロバイダ
pub mod llm;

/// Ports & Adapters のポート定義
pub mod ports;

/// ポートの標準実装
pub mod adapter;
