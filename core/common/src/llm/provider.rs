//! LLMプロバイダのトレイト定義

use crate::error::Error;
use crate::llm::request::CompletionRequest;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（OpenAI 互換、Echo など）はこのトレイトを実装する必要があります。
/// ドライバー（LlmDriver）が payload 生成 → HTTP → テキスト抽出の順に呼び出す。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `request` - メッセージ列と生成パラメータ
    ///
    /// # Returns
    /// * `Ok(Value)` - リクエストJSON
    /// * `Err(Error)` - エラー
    fn make_request_payload(&self, request: &CompletionRequest) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - 接続失敗・タイムアウト・非 2xx など
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - エラー
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
