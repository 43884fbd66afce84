//! Play-progress status values.
//!
//! The status column is an open string enum: the store accepts any value up
//! to [`MAX_STATUS_LEN`] characters. The constants below are the values the
//! portal itself produces and the reporting views recognise.

/// The user is currently playing the game.
pub const STATUS_PLAYING: &str = "Playing";

/// The user finished the game. Counted by `user_stats_view.completed_games`.
pub const STATUS_COMPLETED: &str = "Completed";

/// The user intends to play the game.
pub const STATUS_PLANNED: &str = "Planned";

/// The user abandoned the game.
pub const STATUS_DROPPED: &str = "Dropped";

/// All statuses known to the portal.
pub const KNOWN_STATUSES: &[&str] = &[
    STATUS_PLAYING,
    STATUS_COMPLETED,
    STATUS_PLANNED,
    STATUS_DROPPED,
];

/// Column width of `user_game_progress.status`.
pub const MAX_STATUS_LEN: usize = 20;

/// Whether `status` is one of [`KNOWN_STATUSES`].
pub fn is_known_status(status: &str) -> bool {
    KNOWN_STATUSES.contains(&status)
}
