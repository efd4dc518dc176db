// European wheel topology: pocket order and racetrack sectors

use crate::types::{AnnouncedBet, POCKET_COUNT};

/// Pocket order around a single-zero wheel, clockwise from zero.
pub const EUROPEAN_WHEEL_ORDER: [u8; POCKET_COUNT] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5,
    24, 16, 33, 1, 20, 14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

// Racetrack sectors, in wheel order. Tier, Orphelins and Voisins partition the
// wheel; Jeu Zero is the part of Voisins closest to zero.
pub const VOISINS_SECTOR: [u8; 17] = [
    22, 18, 29, 7, 28, 12, 35, 3, 26, 0, 32, 15, 19, 4, 21, 2, 25,
];
pub const TIER_SECTOR: [u8; 12] = [27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33];
pub const ORPHELINS_SECTOR: [u8; 8] = [17, 34, 6, 1, 20, 14, 31, 9];
pub const ZERO_GAME_SECTOR: [u8; 7] = [12, 35, 3, 26, 0, 32, 15];

pub static EUROPEAN_WHEEL: WheelLayout = WheelLayout::new(EUROPEAN_WHEEL_ORDER);

/// Read-only wheel table with a reverse index from pocket to position.
#[derive(Debug)]
pub struct WheelLayout {
    order: [u8; POCKET_COUNT],
    positions: [usize; POCKET_COUNT],
}

impl WheelLayout {
    /// `order` must be a permutation of 0..=36.
    pub const fn new(order: [u8; POCKET_COUNT]) -> Self {
        let mut positions = [0usize; POCKET_COUNT];
        let mut i = 0;
        while i < POCKET_COUNT {
            positions[order[i] as usize] = i;
            i += 1;
        }
        Self { order, positions }
    }

    pub fn order(&self) -> &[u8; POCKET_COUNT] {
        &self.order
    }

    /// Index of `pocket` in wheel order, `None` if it is not on the wheel.
    pub fn position_of(&self, pocket: i32) -> Option<usize> {
        let index = usize::try_from(pocket).ok()?;
        self.positions.get(index).copied()
    }

    /// Contiguous arc of `2 * radius + 1` pockets centered on `pocket`:
    /// counter-clockwise side first, then the pocket, then the clockwise side.
    /// Empty when `pocket` is not on the wheel.
    pub fn neighbors(&self, pocket: i32, radius: u8) -> Vec<u8> {
        let Some(center) = self.position_of(pocket) else {
            return Vec::new();
        };

        let radius = radius as usize;
        // Shift by a whole number of turns so the subtraction cannot underflow
        let start = center + POCKET_COUNT * (radius / POCKET_COUNT + 1) - radius;
        (0..=2 * radius)
            .map(|offset| self.order[(start + offset) % POCKET_COUNT])
            .collect()
    }
}

/// Neighbors on the standard European wheel.
pub fn get_neighbors(pocket: i32, radius: u8) -> Vec<u8> {
    EUROPEAN_WHEEL.neighbors(pocket, radius)
}

/// Pockets covered by a racetrack call.
pub fn sector_pockets(bet: AnnouncedBet) -> &'static [u8] {
    match bet {
        AnnouncedBet::Tier => &TIER_SECTOR,
        AnnouncedBet::Orphelins => &ORPHELINS_SECTOR,
        AnnouncedBet::Voisins => &VOISINS_SECTOR,
        AnnouncedBet::Zero => &ZERO_GAME_SECTOR,
    }
}

/// Which of the three partitioning sectors (Tier, Orphelins, Voisins) holds `pocket`.
pub fn sector_of(pocket: u8) -> Option<AnnouncedBet> {
    [AnnouncedBet::Tier, AnnouncedBet::Orphelins, AnnouncedBet::Voisins]
        .into_iter()
        .find(|bet| sector_pockets(*bet).contains(&pocket))
}
