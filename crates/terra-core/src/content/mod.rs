//! Built-in Portuguese content
//!
//! Everything the page shows is hard-coded here so the engine, its tests and
//! the frontend share one source.

pub mod conservation;
pub mod guide;
pub mod home;
pub mod practices;
pub mod quiz;
pub mod sanitation;

pub use conservation::{WaterUseCategory, CONSERVATION_GAME};
pub use guide::{GUIDE_INTRO, GUIDE_TITLE, WATER_PROBLEMS};
pub use home::{InfoCard, InfoSection, FOOTER_NAME, HERO_SUBTITLE, HERO_TITLE, INFO_SECTIONS};
pub use practices::{DAILY_TIPS, PRACTICES_TITLE};
pub use quiz::{QUIZ_QUESTIONS, QUIZ_TITLE};
pub use sanitation::{SanitationCategory, SANITATION_GAME};

/// Shared by both games
pub const CORRECT_MESSAGE: &str = "Correto! Boa escolha!";
/// Both games clear their feedback after this long
pub const FEEDBACK_DELAY_MS: u32 = 5000;
pub const PLAY_AGAIN: &str = "Jogar Novamente";
pub const DRAG_INSTRUCTIONS: &str = "Arraste as ações para a categoria correta";
