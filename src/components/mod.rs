//! UI Components
//!
//! Reusable Leptos components.

mod completion_panel;
mod daily_quiz;
mod draggable_card;
mod drop_bin;
mod feedback_banner;
mod good_practices;
mod info_section;
mod progress_bar;
mod sorting_game;
mod water_quality_guide;

pub use completion_panel::CompletionPanel;
pub use daily_quiz::DailyQuiz;
pub use draggable_card::DraggableCard;
pub use drop_bin::DropBin;
pub use feedback_banner::FeedbackBanner;
pub use good_practices::GoodPractices;
pub use info_section::InfoSectionView;
pub use progress_bar::ProgressBar;
pub use sorting_game::SortingGame;
pub use water_quality_guide::WaterQualityGuide;
