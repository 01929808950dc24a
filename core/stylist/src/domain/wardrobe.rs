//! 手持ちの服（5 カテゴリの自由記述）と正規化

/// 服のカテゴリ。並び順が説明文の行順になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WardrobeField {
    Headwear,
    Top,
    Bottom,
    Shoes,
    Accessories,
}

impl WardrobeField {
    pub const ALL: [WardrobeField; 5] = [
        WardrobeField::Headwear,
        WardrobeField::Top,
        WardrobeField::Bottom,
        WardrobeField::Shoes,
        WardrobeField::Accessories,
    ];

    /// 説明文の行頭に使う名前
    pub fn label(&self) -> &'static str {
        match self {
            Self::Headwear => "Headwear",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Shoes => "Shoes",
            Self::Accessories => "Accessories",
        }
    }
}

/// カンマ区切りの自由記述をアイテム列にする。空白のみなら None（カテゴリごと省略）。
///
/// 区切った結果の空要素（"a,,b" の真ん中など）はそのまま残す。
pub fn normalize_items(raw: &str) -> Option<Vec<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.split(',').map(|s| s.trim().to_string()).collect())
}

/// 5 カテゴリ分の生入力
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wardrobe {
    pub headwear: String,
    pub top: String,
    pub bottom: String,
    pub shoes: String,
    pub accessories: String,
}

impl Wardrobe {
    pub fn get(&self, field: WardrobeField) -> &str {
        match field {
            WardrobeField::Headwear => &self.headwear,
            WardrobeField::Top => &self.top,
            WardrobeField::Bottom => &self.bottom,
            WardrobeField::Shoes => &self.shoes,
            WardrobeField::Accessories => &self.accessories,
        }
    }

    pub fn is_blank(&self) -> bool {
        WardrobeField::ALL
            .iter()
            .all(|f| self.get(*f).trim().is_empty())
    }

    /// 空でないカテゴリを "<名前>: a, b" の 1 行ずつにして改行で連結する
    pub fn describe(&self) -> String {
        WardrobeField::ALL
            .iter()
            .filter_map(|f| {
                normalize_items(self.get(*f)).map(|items| format!("{}: {}", f.label(), items.join(", ")))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
