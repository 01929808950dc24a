//! ユースケース（ports 経由で LLM・ログを使う）

pub mod conversation;
pub mod localization;
pub mod outfit;

pub use conversation::ConversationUseCase;
pub use localization::LocalizationUseCase;
pub use outfit::OutfitUseCase;
