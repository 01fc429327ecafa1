//! Snakes & Ladders board: 100 squares, numbered 1-100.
//!
//! Square 1 is the start and square 100 the finish. Both are universally
//! safe: no collision or hunter kill can happen on them.

/// Number of squares; also the winning square.
pub const BOARD_SIZE: u8 = 100;

/// Square every token starts on and returns to when killed.
pub const START_SQUARE: u8 = 1;

/// Snakes as (head, tail).
pub const SNAKES: [(u8, u8); 9] = [
    (45, 4),
    (96, 93),
    (91, 73),
    (88, 85),
    (83, 57),
    (81, 61),
    (59, 40),
    (52, 32),
    (29, 10),
];

/// Ladders as (bottom, top).
pub const LADDERS: [(u8, u8); 6] = [
    (62, 98),
    (51, 71),
    (48, 75),
    (27, 55),
    (19, 58),
    (7, 28),
];

/// Star squares. Landing on one adds a star to the token.
pub const STARS: [u8; 5] = [20, 37, 54, 79, 94];

/// Tail of the snake whose head is on `square`.
#[must_use]
pub fn snake_tail(square: u8) -> Option<u8> {
    SNAKES
        .iter()
        .find(|(head, _)| *head == square)
        .map(|(_, tail)| *tail)
}

/// Top of the ladder whose bottom is on `square`.
#[must_use]
pub fn ladder_top(square: u8) -> Option<u8> {
    LADDERS
        .iter()
        .find(|(bottom, _)| *bottom == square)
        .map(|(_, top)| *top)
}

#[must_use]
pub fn is_star(square: u8) -> bool {
    STARS.contains(&square)
}

/// Start and finish squares can never host a kill.
#[must_use]
pub fn is_universal_safe(square: u8) -> bool {
    square == START_SQUARE || square == BOARD_SIZE
}
