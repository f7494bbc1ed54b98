//! Derived progress: check-in streaks and pet progression
//!
//! Both engines are pure functions over their inputs. Reading history and
//! persisting the new pet state is the job of the `store` module.

mod error;
mod levels;
mod streaks;

pub use error::ProgressError;
pub use levels::{
    ActionRewards, EVOLUTION_INTERVAL, PetEvent, Progression, XP_PER_LEVEL, apply_pet_action,
    stage_name,
};
pub use streaks::{
    STREAK_BADGES, StreakBadge, StreakSummary, checkin_days, compute_streak, earned_badges,
    is_milestone, longest_streak, streak_ending_on,
};
