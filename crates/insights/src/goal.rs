//! Annual reading goal progress.

use serde::Serialize;

/// Where the reader stands against their yearly target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub annual_goal: u32,
    pub books_read: u32,
    /// Uncapped; passes 100 once the goal is beaten
    pub percent: f32,
    /// `percent` capped at 100, for progress bars
    pub display_percent: f32,
    pub remaining: u32,
}

impl GoalProgress {
    /// Whole-number percentage for labels
    pub fn rounded_percent(&self) -> u32 {
        self.percent.round() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.annual_goal > 0 && self.books_read >= self.annual_goal
    }
}

/// Progress of `books_read` against `annual_goal`.
///
/// A goal of 0 reports 0 percent and nothing remaining.
pub fn goal_progress(annual_goal: u32, books_read: u32) -> GoalProgress {
    let percent = if annual_goal == 0 {
        0.0
    } else {
        books_read as f32 / annual_goal as f32 * 100.0
    };

    GoalProgress {
        annual_goal,
        books_read,
        percent,
        display_percent: percent.min(100.0),
        remaining: annual_goal.saturating_sub(books_read),
    }
}
