//! profiles.json の読み込みとプロバイダ解決

use crate::error::Error;
use crate::llm::config::ProfilesConfig;
use crate::llm::factory::ProviderType;
use crate::ports::outbound::EnvResolver;
use std::fs;

/// プロファイル未指定かつ profiles.json に default が無いときのプロファイル
pub const DEFAULT_PROFILE: &str = "groq";

/// 解決済みプロバイダ（ProviderType + オプション）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    /// 解決に使ったプロファイル名（例: "local", "groq"）。エラー表示用
    pub profile_name: String,
    pub provider_type: ProviderType,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key_env: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// profiles.json を読み込む。ファイルが無ければ Ok(None)、JSON が壊れていれば Err（メッセージにパス含める）
pub fn load_profiles_config(env: &dyn EnvResolver) -> Result<Option<ProfilesConfig>, Error> {
    let path = env.resolve_profiles_config_path()?;
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))?;
    ProfilesConfig::parse(&contents)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
        .map(Some)
}

/// 利用可能なビルトインプロバイダ名
fn builtin_provider_names() -> &'static [&'static str] {
    &["groq", "openai", "openai_compat", "echo"]
}

/// 要求されたプロファイル名（None の場合は default）と ProfilesConfig から ResolvedProvider を解決する。
/// 不明なプロファイルの場合は Error::invalid_argument（is_usage == true）で利用可能一覧を返す。
pub fn resolve_provider(
    requested: Option<&str>,
    cfg: Option<&ProfilesConfig>,
) -> Result<ResolvedProvider, Error> {
    let effective_name: &str = requested.unwrap_or_else(|| {
        cfg.and_then(|c| c.default_provider.as_deref())
            .unwrap_or(DEFAULT_PROFILE)
    });

    // 1) cfg.providers に名前があればそれを優先
    if let Some(profile) = cfg.and_then(|c| c.providers.get(effective_name)) {
        return Ok(ResolvedProvider {
            profile_name: effective_name.to_string(),
            provider_type: profile.provider_type,
            base_url: profile.base_url.clone(),
            model: profile.model.clone(),
            api_key_env: profile.api_key_env.clone(),
            timeout_secs: profile.timeout_secs,
        });
    }

    // 2) ビルトイン
    if let Some(provider_type) = ProviderType::from_str(effective_name) {
        return Ok(ResolvedProvider {
            profile_name: effective_name.to_string(),
            provider_type,
            base_url: None,
            model: None,
            api_key_env: None,
            timeout_secs: None,
        });
    }

    // 3) どれも無ければ usage エラー
    let (available, _) = list_profiles(cfg);
    Err(Error::invalid_argument(format!(
        "Unknown provider: '{}'. Available: {}",
        effective_name,
        available.join(", ")
    )))
}

/// 利用可能なプロファイル名（ソート済み）と、実際に使われる default を返す
pub fn list_profiles(cfg: Option<&ProfilesConfig>) -> (Vec<String>, String) {
    let mut names: Vec<String> = builtin_provider_names()
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    if let Some(cfg) = cfg {
        for k in cfg.providers.keys() {
            if !names.contains(k) {
                names.push(k.clone());
            }
        }
    }
    names.sort();
    let default = cfg
        .and_then(|c| c.default_provider.clone())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
    (names, default)
}
