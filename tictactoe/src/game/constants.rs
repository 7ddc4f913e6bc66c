/// Number of participants sharing one board: the host and one remote player.
pub const PARTICIPANTS: usize = 2;

/// Board size used when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Largest board whose rows can all be addressed by a single letter.
pub const MAX_BOARD_SIZE: usize = 26;

/// Length of the run of marks that wins the game.
pub const WIN_LENGTH: usize = 3;
