//! 表示言語とラベル表（英語・フランス語の 2 つ、静的・不変）

use common::error::Error;
use std::fmt;
use std::sync::RwLock;

/// 表示言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::French];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::French => "French",
        }
    }

    /// English|en, French|fr|Français を受け付ける（大文字小文字は無視）。それ以外は Config エラー。
    pub fn parse(value: &str) -> Result<Self, Error> {
        match value.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "french" | "fr" | "français" => Ok(Self::French),
            _ => Err(Error::config(format!(
                "unsupported language '{}' (expected English or French)",
                value
            ))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ラベルのキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    Title,
    FashionAdvice,
    OrganizeOutfit,
    Language,
    OccasionLabel,
    WeatherLabel,
    GenderLabel,
    HeadwearLabel,
    TopLabel,
    BottomLabel,
    ShoesLabel,
    AccessoriesLabel,
    GenerateOutfit,
    AskButton,
    EnglishButton,
    FrenchButton,
    SelectedLanguage,
    Placeholder,
    GeneratedFit,
}

impl LabelKey {
    pub const ALL: [LabelKey; 19] = [
        LabelKey::Title,
        LabelKey::FashionAdvice,
        LabelKey::OrganizeOutfit,
        LabelKey::Language,
        LabelKey::OccasionLabel,
        LabelKey::WeatherLabel,
        LabelKey::GenderLabel,
        LabelKey::HeadwearLabel,
        LabelKey::TopLabel,
        LabelKey::BottomLabel,
        LabelKey::ShoesLabel,
        LabelKey::AccessoriesLabel,
        LabelKey::GenerateOutfit,
        LabelKey::AskButton,
        LabelKey::EnglishButton,
        LabelKey::FrenchButton,
        LabelKey::SelectedLanguage,
        LabelKey::Placeholder,
        LabelKey::GeneratedFit,
    ];

    /// 言語切り替え時に画面側が貼り替えるラベル（この順で返す）
    pub const RELABEL_ORDER: [LabelKey; 17] = [
        LabelKey::Title,
        LabelKey::AskButton,
        LabelKey::OccasionLabel,
        LabelKey::WeatherLabel,
        LabelKey::GenderLabel,
        LabelKey::HeadwearLabel,
        LabelKey::TopLabel,
        LabelKey::BottomLabel,
        LabelKey::ShoesLabel,
        LabelKey::AccessoriesLabel,
        LabelKey::GenerateOutfit,
        LabelKey::EnglishButton,
        LabelKey::FrenchButton,
        LabelKey::Placeholder,
        LabelKey::OrganizeOutfit,
        LabelKey::GeneratedFit,
        LabelKey::SelectedLanguage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::FashionAdvice => "fashion_advice",
            Self::OrganizeOutfit => "organize_outfit",
            Self::Language => "language",
            Self::OccasionLabel => "occasion_label",
            Self::WeatherLabel => "weather_label",
            Self::GenderLabel => "gender_label",
            Self::HeadwearLabel => "headwear_label",
            Self::TopLabel => "top_label",
            Self::BottomLabel => "bottom_label",
            Self::ShoesLabel => "shoes_label",
            Self::AccessoriesLabel => "accessories_label",
            Self::GenerateOutfit => "generate_outfit",
            Self::AskButton => "ask_button",
            Self::EnglishButton => "english_button",
            Self::FrenchButton => "french_button",
            Self::SelectedLanguage => "selected_language",
            Self::Placeholder => "placeholder",
            Self::GeneratedFit => "generated_fit",
        }
    }
}

const ENGLISH_LABELS: &[(LabelKey, &str)] = &[
    (LabelKey::Title, "<h1><strong>🤵 Fashion Assistant</strong></h1><p>Get expert outfit recommendations for any occasion!</p>"),
    (LabelKey::FashionAdvice, "Fashion Advice"),
    (LabelKey::OrganizeOutfit, "Organize a Fit for an Occasion"),
    (LabelKey::Language, "Language"),
    (LabelKey::OccasionLabel, "Occasion (e.g., Wedding, Party, Casual, etc.)"),
    (LabelKey::WeatherLabel, "Weather (e.g., Winter, Summer, Wet, Dry, etc.)"),
    (LabelKey::GenderLabel, "Gender"),
    (LabelKey::HeadwearLabel, "Headwears"),
    (LabelKey::TopLabel, "Tops"),
    (LabelKey::BottomLabel, "Bottoms"),
    (LabelKey::ShoesLabel, "Shoes"),
    (LabelKey::AccessoriesLabel, "Accessories"),
    (LabelKey::GenerateOutfit, "Organize an Outfit"),
    (LabelKey::AskButton, "✋ Ask"),
    (LabelKey::EnglishButton, "English"),
    (LabelKey::FrenchButton, "French"),
    (LabelKey::SelectedLanguage, "Selected Language is English"),
    (LabelKey::Placeholder, "Ask about fashion, trends, or outfit ideas..."),
    (LabelKey::GeneratedFit, "Generated Outfit Idea"),
];

const FRENCH_LABELS: &[(LabelKey, &str)] = &[
    (LabelKey::Title, "<h1>🤵 Assistant de Mode</h1><p>Obtenez des recommandations de tenues d'experts pour toute occasion!</p>"),
    (LabelKey::FashionAdvice, "Conseils de Mode"),
    (LabelKey::OrganizeOutfit, "Organiser une tenue pour une occasion"),
    (LabelKey::Language, "Langue"),
    (LabelKey::OccasionLabel, "Occasion (par exemple, Mariage, Fête, Décontracté, etc.)"),
    (LabelKey::WeatherLabel, "Temps (par exemple, Hiver, Été, Humide, Sec, etc.)"),
    (LabelKey::GenderLabel, "Genre"),
    (LabelKey::HeadwearLabel, "Chapeaux"),
    (LabelKey::TopLabel, "Hauts"),
    (LabelKey::BottomLabel, "Bas"),
    (LabelKey::ShoesLabel, "Chaussures"),
    (LabelKey::AccessoriesLabel, "Accessoires"),
    (LabelKey::GenerateOutfit, "Organiser une tenue"),
    (LabelKey::AskButton, "✋ Demander"),
    (LabelKey::EnglishButton, "Anglais"),
    (LabelKey::FrenchButton, "Français"),
    (LabelKey::SelectedLanguage, "La langue sélectionnée est le français"),
    (LabelKey::Placeholder, "Renseignez-vous sur la mode, les tendances ou les idées de tenues..."),
    (LabelKey::GeneratedFit, "Idée de tenue générée"),
];

/// 1 言語分のラベル表
#[derive(Debug, PartialEq, Eq)]
pub struct LanguageProfile {
    pub language: Language,
    entries: &'static [(LabelKey, &'static str)],
}

static ENGLISH: LanguageProfile = LanguageProfile {
    language: Language::English,
    entries: ENGLISH_LABELS,
};

static FRENCH: LanguageProfile = LanguageProfile {
    language: Language::French,
    entries: FRENCH_LABELS,
};

impl LanguageProfile {
    pub fn get(&self, key: LabelKey) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
    }

    /// キーが無ければ Config エラー（起動時の verify_profiles で検出済みのはず）
    pub fn label(&self, key: LabelKey) -> Result<&'static str, Error> {
        self.get(key).ok_or_else(|| {
            Error::config(format!(
                "label '{}' missing from {} profile",
                key.as_str(),
                self.language
            ))
        })
    }

    /// RELABEL_ORDER の順にラベルを返す
    pub fn relabel(&self) -> Result<Vec<&'static str>, Error> {
        LabelKey::RELABEL_ORDER
            .iter()
            .map(|k| self.label(*k))
            .collect()
    }
}

pub fn profile_for(language: Language) -> &'static LanguageProfile {
    match language {
        Language::English => &ENGLISH,
        Language::French => &FRENCH,
    }
}

/// 組み込みの 2 プロファイルを検査する。起動時に呼ぶ。
pub fn verify_profiles() -> Result<(), Error> {
    let profiles: Vec<&LanguageProfile> = Language::ALL.iter().map(|l| profile_for(*l)).collect();
    verify_profile_set(&profiles)
}

/// 全プロファイルが同じキー集合（重複なし・空文字なし）を持ち、同じキーで同じ文言を共有しないことを確認する
pub fn verify_profile_set(profiles: &[&LanguageProfile]) -> Result<(), Error> {
    for profile in profiles {
        if profile.entries.len() != LabelKey::ALL.len() {
            return Err(Error::config(format!(
                "{} profile declares {} labels, expected {}",
                profile.language,
                profile.entries.len(),
                LabelKey::ALL.len()
            )));
        }
        for key in LabelKey::ALL {
            let count = profile.entries.iter().filter(|(k, _)| *k == key).count();
            if count != 1 {
                return Err(Error::config(format!(
                    "label '{}' appears {} times in {} profile",
                    key.as_str(),
                    count,
                    profile.language
                )));
            }
            if profile.label(key)?.trim().is_empty() {
                return Err(Error::config(format!(
                    "label '{}' is empty in {} profile",
                    key.as_str(),
                    profile.language
                )));
            }
        }
    }
    for (i, a) in profiles.iter().enumerate() {
        for b in &profiles[i + 1..] {
            for key in LabelKey::ALL {
                if a.label(key)? == b.label(key)? {
                    return Err(Error::config(format!(
                        "label '{}' has identical text in {} and {} profiles",
                        key.as_str(),
                        a.language,
                        b.language
                    )));
                }
            }
        }
    }
    Ok(())
}

/// 画面側が持つ「現在の言語」。切り替えは書き込みロック 1 回で完了する。
#[derive(Debug, Default)]
pub struct ActiveLanguage {
    inner: RwLock<Language>,
}

impl ActiveLanguage {
    pub fn new(language: Language) -> Self {
        Self {
            inner: RwLock::new(language),
        }
    }

    pub fn get(&self) -> Language {
        match self.inner.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn set(&self, language: Language) {
        match self.inner.write() {
            Ok(mut guard) => *guard = language,
            Err(poisoned) => *poisoned.into_inner() = language,
        }
    }
}
