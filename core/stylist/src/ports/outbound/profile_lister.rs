//! プロファイル一覧取得の Outbound ポート

use common::error::Error;

/// 利用可能なプロファイル名（ソート済み）と default を返す
pub trait ProfileLister: Send + Sync {
    fn list_profiles(&self) -> Result<(Vec<String>, String), Error>;
}
