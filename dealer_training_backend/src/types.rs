// Dealer Training Type Definitions

use candid::{CandidType, Deserialize};
use serde::Serialize;

// =============================================================================
// CONSTANTS
// =============================================================================

pub const POCKET_COUNT: usize = 37; // European wheel, single zero
pub const MAX_POCKET: u8 = 36;
pub const DEFAULT_NEIGHBOR_RADIUS: u8 = 2; // "17 and the neighbors" = 5 pockets

pub const DRILL_GRID_ROWS: u8 = 4; // Payout drills use the 0-12 corner of the layout
pub const FULL_GRID_ROWS: u8 = 12; // 0-36

/// Chip denominations for cash conversion, largest first.
pub const CHIP_DENOMINATIONS: [u64; 5] = [1000, 500, 100, 25, 5];

/// (upper bound of requested count, spread in percent) for dynamic chip counts.
/// Anything above the last bound uses `DYNAMIC_CHIP_MAX_PERCENT`.
pub const DYNAMIC_CHIP_BANDS: [(u32, u32); 3] = [(10, 10), (50, 20), (100, 30)];
pub const DYNAMIC_CHIP_MAX_PERCENT: u32 = 40;

// =============================================================================
// WAGER TYPES
// =============================================================================

#[derive(
    CandidType, Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum WagerKind {
    // Inside bets (shape on the layout grid)
    Straight,
    Split,
    Street,
    Corner,
    SixLine,

    // Outside bets
    Column,
    Dozen,
    RedBlack,
    EvenOdd,
    HighLow,

    // Racetrack calls
    Voisins,
    Tiers,
    Orphelins,
    ZeroGame,
    Neighbor, // numbers = [center pocket]
}

impl WagerKind {
    pub const ALL: [WagerKind; 15] = [
        WagerKind::Straight,
        WagerKind::Split,
        WagerKind::Street,
        WagerKind::Corner,
        WagerKind::SixLine,
        WagerKind::Column,
        WagerKind::Dozen,
        WagerKind::RedBlack,
        WagerKind::EvenOdd,
        WagerKind::HighLow,
        WagerKind::Voisins,
        WagerKind::Tiers,
        WagerKind::Orphelins,
        WagerKind::ZeroGame,
        WagerKind::Neighbor,
    ];

    /// Length `numbers` must have for this kind, when the kind has a fixed shape.
    pub fn number_count(&self) -> Option<usize> {
        match self {
            WagerKind::Straight | WagerKind::Neighbor => Some(1),
            WagerKind::Split => Some(2),
            WagerKind::Street => Some(3),
            WagerKind::Corner => Some(4),
            WagerKind::SixLine => Some(6),
            WagerKind::Column | WagerKind::Dozen | WagerKind::RedBlack |
            WagerKind::EvenOdd | WagerKind::HighLow => None,
            WagerKind::Voisins | WagerKind::Tiers |
            WagerKind::Orphelins | WagerKind::ZeroGame => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WagerKind::Straight => "Straight",
            WagerKind::Split => "Split",
            WagerKind::Street => "Street",
            WagerKind::Corner => "Corner",
            WagerKind::SixLine => "Six Line",
            WagerKind::Column => "Column",
            WagerKind::Dozen => "Dozen",
            WagerKind::RedBlack => "Red/Black",
            WagerKind::EvenOdd => "Even/Odd",
            WagerKind::HighLow => "Low/High",
            WagerKind::Voisins => "Voisins du Zero",
            WagerKind::Tiers => "Tiers du Cylindre",
            WagerKind::Orphelins => "Orphelins",
            WagerKind::ZeroGame => "Jeu Zero",
            WagerKind::Neighbor => "Neighbors",
        }
    }
}

/// A wager as placed by the trainee (or produced by expanding a call).
/// `id` and `placed_at` are set by the client and never take part in grading.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Wager {
    pub kind: WagerKind,
    pub numbers: Vec<u8>,
    pub stake: u64,
    pub id: Option<u64>,
    pub placed_at: Option<u64>,
}

impl Wager {
    pub fn new(kind: WagerKind, numbers: &[u8], stake: u64) -> Self {
        Self {
            kind,
            numbers: numbers.to_vec(),
            stake,
            id: None,
            placed_at: None,
        }
    }
}

/// Comparison form of a wager: kind plus ascending numbers.
#[derive(
    CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct NormalizedWager {
    pub kind: WagerKind,
    pub numbers: Vec<u8>,
}

// =============================================================================
// ANNOUNCED BETS
// =============================================================================

#[derive(CandidType, Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnnouncedBet {
    Tier,
    Orphelins,
    Voisins,
    Zero,
}

impl AnnouncedBet {
    pub const ALL: [AnnouncedBet; 4] = [
        AnnouncedBet::Tier,
        AnnouncedBet::Orphelins,
        AnnouncedBet::Voisins,
        AnnouncedBet::Zero,
    ];

    /// Mode name used by the training UI.
    pub fn name(&self) -> &'static str {
        match self {
            AnnouncedBet::Tier => "tier",
            AnnouncedBet::Orphelins => "orphelins",
            AnnouncedBet::Voisins => "voisins",
            AnnouncedBet::Zero => "zero",
        }
    }

    /// Resolve a mode name. The "random" pseudo-mode is not a call and resolves to `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|bet| bet.name().eq_ignore_ascii_case(name.trim()))
    }

    /// The call a racetrack sector wager stands for. `None` for grid bets and
    /// neighbor calls.
    pub fn from_wager_kind(kind: WagerKind) -> Option<Self> {
        match kind {
            WagerKind::Tiers => Some(AnnouncedBet::Tier),
            WagerKind::Orphelins => Some(AnnouncedBet::Orphelins),
            WagerKind::Voisins => Some(AnnouncedBet::Voisins),
            WagerKind::ZeroGame => Some(AnnouncedBet::Zero),
            WagerKind::Straight
            | WagerKind::Split
            | WagerKind::Street
            | WagerKind::Corner
            | WagerKind::SixLine
            | WagerKind::Column
            | WagerKind::Dozen
            | WagerKind::RedBlack
            | WagerKind::EvenOdd
            | WagerKind::HighLow
            | WagerKind::Neighbor => None,
        }
    }
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AnnouncedBetEntry {
    pub kind: WagerKind,
    pub numbers: Vec<u8>,
    pub multiplier: u32, // Chips on this position per unit of the call
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AnnouncedBetDefinition {
    pub name: String,
    pub bets: Vec<AnnouncedBetEntry>,
}

impl AnnouncedBetDefinition {
    /// Chips needed to place the call once.
    pub fn total_units(&self) -> u32 {
        self.bets.iter().map(|b| b.multiplier).sum()
    }
}

// =============================================================================
// RESULTS
// =============================================================================

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_correct: bool,
    pub correct_bets: Vec<NormalizedWager>,
    pub user_bets: Vec<NormalizedWager>,
    pub missing_bets: Vec<NormalizedWager>,
    pub extra_bets: Vec<NormalizedWager>,
    pub score: u8, // 0-100
}

#[derive(CandidType, Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChipStack {
    pub denomination: u64,
    pub count: u64,
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ChipBreakdownCheck {
    pub amount: u64,
    pub expected: Vec<ChipStack>,
    pub is_correct: bool,
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PayoutCheck {
    pub winning_number: u8,
    pub expected_payout: u64,
    pub answer: u64,
    pub is_correct: bool,
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug)]
pub struct RandomModeResult {
    pub mode: String,
    pub randomness_hash: String,
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug)]
pub struct DynamicChipCountResult {
    pub requested: u32,
    pub chip_count: u32,
    pub randomness_hash: String,
}

// =============================================================================
// BOARD TYPES
// =============================================================================

#[derive(CandidType, Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Black,
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug)]
pub struct BoardLayout {
    pub red_numbers: Vec<u8>,
    pub black_numbers: Vec<u8>,
    pub wheel_order: Vec<u8>,
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug)]
pub struct PayoutInfo {
    pub kind: WagerKind,
    pub label: String,
    pub payout_ratio: Option<u64>,
    pub description: String,
}
