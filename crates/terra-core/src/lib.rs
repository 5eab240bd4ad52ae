//! Terra da Água core
//!
//! Platform-agnostic logic behind the Aventuras na Terra da Água page:
//! - [`catalog`]: classification items, per-game configuration, validation
//! - [`classify`]: judging a single drop
//! - [`session`]: one running game (remaining items, score, feedback)
//! - [`timer`]: ticketed expiring slot used for timed feedback
//! - [`completion`]: end-of-game tiers
//! - [`quiz`], [`practices`], [`guide`]: the other page sections
//! - [`content`]: all Portuguese text
//!
//! Nothing here touches the DOM or a clock. Hosts schedule timers themselves
//! and hand the issued tickets back.

pub mod catalog;
pub mod classify;
pub mod completion;
pub mod content;
pub mod guide;
pub mod practices;
pub mod quiz;
pub mod session;
pub mod timer;

pub use catalog::{BinSpec, Catalog, CatalogEntry, CatalogError, Category, GameConfig, Item};
pub use classify::{resolve_drop, Feedback, FeedbackKind, Resolution};
pub use completion::{Completion, CompletionText, CompletionTier};
pub use guide::{Accordion, WaterProblem};
pub use practices::{SaverLevel, Tip, TipChecklist};
pub use quiz::{AnswerOutcome, Question, QuizError, QuizSession, Reveal};
pub use session::{DropOutcome, GameSession};
pub use timer::{ExpiringSlot, Ticket};
