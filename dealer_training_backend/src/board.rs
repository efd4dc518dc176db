// Betting layout geometry and wager combinations
//
// The layout is three columns wide: row r (0-based) holds 3r+1, 3r+2, 3r+3,
// with zero above the first row touching 1, 2 and 3.

use crate::types::{Color, WagerKind, DRILL_GRID_ROWS, FULL_GRID_ROWS, MAX_POCKET};

pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];
pub const BLACK_NUMBERS: [u8; 18] = [
    2, 4, 6, 8, 10, 11, 13, 15, 17, 20, 22, 24, 26, 28, 29, 31, 33, 35,
];

pub fn get_color(number: u8) -> Color {
    if number == 0 || number > MAX_POCKET {
        Color::Green
    } else if RED_NUMBERS.contains(&number) {
        Color::Red
    } else {
        Color::Black
    }
}

/// Every valid combination of `kind` on the 0-12 drill grid.
pub fn generate_combinations(kind: WagerKind) -> Vec<Vec<u8>> {
    generate_combinations_on(kind, DRILL_GRID_ROWS)
}

/// Every valid combination of `kind` on a layout of `rows` rows (clamped to 1..=12).
///
/// Order is fixed so callers can index into it. Outside bets are limited to
/// the numbers present on the grid, and empty sets are skipped. Racetrack
/// kinds have no grid shape and produce nothing.
pub fn generate_combinations_on(kind: WagerKind, rows: u8) -> Vec<Vec<u8>> {
    let rows = rows.clamp(1, FULL_GRID_ROWS);
    let max = rows * 3;

    match kind {
        WagerKind::Straight => (0..=max).map(|n| vec![n]).collect(),
        WagerKind::Split => {
            // Same row, side by side
            let across = (1..=max)
                .filter(|n| n % 3 != 0)
                .map(|n| vec![n, n + 1]);
            // Same column, one row apart
            let down = (1..=max - 3).map(|n| vec![n, n + 3]);
            let zero = (1..=3).map(|n| vec![0, n]);
            across.chain(down).chain(zero).collect()
        }
        WagerKind::Street => {
            let streets = (0..rows).map(|r| vec![3 * r + 1, 3 * r + 2, 3 * r + 3]);
            streets.chain([vec![0, 1, 2], vec![0, 2, 3]]).collect()
        }
        WagerKind::Corner => (1..=max - 3)
            .filter(|n| n % 3 != 0)
            .map(|n| vec![n, n + 1, n + 3, n + 4])
            .collect(),
        WagerKind::SixLine => (0..rows - 1)
            .map(|r| (3 * r + 1..=3 * r + 6).collect())
            .collect(),
        WagerKind::Column => (1..=3)
            .map(|c| (c..=max).step_by(3).collect())
            .collect(),
        WagerKind::Dozen => non_empty(
            (0..3u8).map(|d| (12 * d + 1..=(12 * d + 12).min(max)).collect::<Vec<u8>>()),
        ),
        WagerKind::RedBlack => non_empty([
            RED_NUMBERS.iter().copied().filter(|&n| n <= max).collect::<Vec<u8>>(),
            BLACK_NUMBERS.iter().copied().filter(|&n| n <= max).collect::<Vec<u8>>(),
        ]),
        WagerKind::EvenOdd => vec![
            (2..=max).step_by(2).collect(),
            (1..=max).step_by(2).collect(),
        ],
        WagerKind::HighLow => non_empty([
            (1..=max.min(18)).collect::<Vec<u8>>(),
            (19..=max).collect::<Vec<u8>>(),
        ]),
        WagerKind::Voisins | WagerKind::Tiers | WagerKind::Orphelins |
        WagerKind::ZeroGame | WagerKind::Neighbor => Vec::new(),
    }
}

fn non_empty(sets: impl IntoIterator<Item = Vec<u8>>) -> Vec<Vec<u8>> {
    sets.into_iter().filter(|set| !set.is_empty()).collect()
}

/// Whether `numbers` (in any order) is a legal position for `kind` on the full table.
pub fn is_valid_combination(kind: WagerKind, numbers: &[u8]) -> bool {
    match kind {
        WagerKind::Neighbor => numbers.len() == 1 && numbers[0] <= MAX_POCKET,
        WagerKind::Voisins | WagerKind::Tiers |
        WagerKind::Orphelins | WagerKind::ZeroGame => numbers.is_empty(),
        _ => {
            let mut sorted = numbers.to_vec();
            sorted.sort_unstable();
            generate_combinations_on(kind, FULL_GRID_ROWS).contains(&sorted)
        }
    }
}
