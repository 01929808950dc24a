//! stylist 固有のドメイン型（型と不変条件）

pub mod command;
pub mod language;
pub mod outfit;
pub mod session;
pub mod transcript;
pub mod wardrobe;

pub use command::StylistCommand;
pub use language::{profile_for, verify_profiles, ActiveLanguage, LabelKey, Language, LanguageProfile};
pub use outfit::{OutfitContext, OutfitReply, OutfitRequest};
pub use session::Session;
pub use transcript::{RenderedPair, Transcript};
pub use wardrobe::Wardrobe;
