//! エラーハンドリング
//!
//! 全クレート共通のエラー型。CLI はこれを終了コードに変換する。

/// エラー型
///
/// 種別ごとに終了コードが決まる（sysexits.h 準拠）。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// 環境変数の不足（API キー・HOME 等）
    #[error("{0}")]
    Env(String),
    /// LLM API 呼び出しの失敗
    #[error("{0}")]
    Http(String),
    /// JSON のパース・シリアライズ失敗
    #[error("{0}")]
    Json(String),
    #[error("{0}")]
    Io(String),
    /// 設定の欠陥（未対応の言語・ラベル欠落など）。実行時に回復しない
    #[error("configuration defect: {0}")]
    Config(String),
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// LLM 側（接続・認証・応答形式）の失敗か
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Json(_) | Self::Env(_))
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => 64,
            Self::Http(_) | Self::Json(_) | Self::Io(_) => 74,
            Self::Config(_) => 78,
            Self::System(_) => 70,
        }
    }
}
