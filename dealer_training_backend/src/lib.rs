//! Roulette Dealer Training Backend
//!
//! **Design Philosophy:**
//! Grades croupier drills on a European (single zero) table. Trainees place
//! virtual chips in the frontend; this canister holds the reference layouts
//! and checks the answers.
//!
//! **Drills:**
//! - Announced bets: Tier, Orphelins, Voisins, Jeu Zero and neighbor calls,
//!   graded order-insensitively with partial credit
//! - Payouts: winnings owed on a wager for a given winning number
//! - Cash conversion: greedy chip breakdown of a cash amount
//!
//! All tables are fixed at build time. Grading is pure and never fails; unknown
//! modes and off-wheel pockets come back as empty or zero-score results.

use ic_cdk::{init, post_upgrade, pre_upgrade, query, update};

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod announced;
pub mod board;
pub mod chips;
pub mod payout;
pub mod random;
pub mod types;
pub mod validation;
pub mod wheel;

pub use types::*;
use board::{BLACK_NUMBERS, RED_NUMBERS};
use wheel::EUROPEAN_WHEEL;

// ============================================================================
// LIFECYCLE HOOKS
// ============================================================================

#[init]
fn init() {
    ic_cdk::println!(
        "Dealer Training Backend Initialized - European wheel, {} pockets",
        POCKET_COUNT
    );
}

#[pre_upgrade]
fn pre_upgrade() {
    ic_cdk::println!("Pre-upgrade: no state to persist");
}

#[post_upgrade]
fn post_upgrade() {
    ic_cdk::println!("Post-upgrade: reference tables rebuilt");
}

// ============================================================================
// ANNOUNCED BET DRILLS
// ============================================================================

/// Grade placed wagers against a named call ("tier", "orphelins", "voisins", "zero")
#[query]
fn validate(mode: String, wagers: Vec<Wager>) -> ValidationResult {
    if AnnouncedBet::from_name(&mode).is_none() {
        ic_cdk::println!("validate: unknown mode {:?}, returning zero result", mode);
    }
    validation::validate(&mode, &wagers)
}

/// Grade placed wagers against "pocket and the neighbors"
#[query]
fn validate_neighbor_bet(pocket: i32, radius: Option<u8>, wagers: Vec<Wager>) -> ValidationResult {
    validation::validate_neighbor_bet(pocket, radius.unwrap_or(DEFAULT_NEIGHBOR_RADIUS), &wagers)
}

#[query]
fn lookup_announced_bet(name: String) -> Option<AnnouncedBetDefinition> {
    announced::lookup_announced_bet(&name)
}

#[query]
fn get_neighbor_bet(pocket: i32, radius: Option<u8>) -> Option<AnnouncedBetDefinition> {
    announced::neighbor_bet_definition(pocket, radius.unwrap_or(DEFAULT_NEIGHBOR_RADIUS))
}

/// Wagers to place for a call, stakes already scaled by each position's multiplier
#[query]
fn expand_announced_bet(name: String, base_stake: u64) -> Vec<Wager> {
    announced::expand_announced_bet(&name, base_stake)
}

#[query]
fn normalize(wager: Wager) -> NormalizedWager {
    validation::normalize(&wager)
}

// ============================================================================
// LAYOUT & WHEEL QUERIES
// ============================================================================

/// Every valid combination of a wager kind on the 0-12 drill grid
#[query]
fn get_combinations(kind: WagerKind) -> Vec<Vec<u8>> {
    board::generate_combinations(kind)
}

#[query]
fn is_valid_combination(kind: WagerKind, numbers: Vec<u8>) -> bool {
    board::is_valid_combination(kind, &numbers)
}

/// Pockets around `pocket` on the wheel; empty if the pocket does not exist
#[query]
fn get_neighbors(pocket: i32, radius: Option<u8>) -> Vec<u8> {
    wheel::get_neighbors(pocket, radius.unwrap_or(DEFAULT_NEIGHBOR_RADIUS))
}

/// Racetrack sector (Tier, Orphelins or Voisins) that holds `pocket`
#[query]
fn get_sector(pocket: u8) -> Option<AnnouncedBet> {
    wheel::sector_of(pocket)
}

#[query]
fn get_board_layout() -> BoardLayout {
    BoardLayout {
        red_numbers: RED_NUMBERS.to_vec(),
        black_numbers: BLACK_NUMBERS.to_vec(),
        wheel_order: EUROPEAN_WHEEL.order().to_vec(),
    }
}

// ============================================================================
// PAYOUT & CASH DRILLS
// ============================================================================

#[query]
fn get_payouts() -> Vec<PayoutInfo> {
    payout::payout_table()
}

#[query]
fn check_payout_answer(
    wager: Wager,
    winning_number: u8,
    answer: u64,
) -> Result<PayoutCheck, String> {
    payout::check_payout_answer(&wager, winning_number, answer)
}

/// Winnings on "pocket and the neighbors" for any radius, `stake` per straight
#[query]
fn calculate_neighbor_payout(
    pocket: i32,
    radius: Option<u8>,
    stake: u64,
    winning_number: u8,
) -> u64 {
    payout::calculate_neighbor_payout(
        pocket,
        radius.unwrap_or(DEFAULT_NEIGHBOR_RADIUS),
        stake,
        winning_number,
    )
}

#[query]
fn calculate_total_payout(wagers: Vec<Wager>, winning_number: u8) -> u64 {
    payout::calculate_total_payout(&wagers, winning_number)
}

#[query]
fn breakdown_to_chips(amount: u64) -> Vec<ChipStack> {
    chips::breakdown_to_chips(amount)
}

#[query]
fn check_chip_breakdown(amount: u64, answer: Vec<ChipStack>) -> ChipBreakdownCheck {
    chips::check_chip_breakdown(amount, &answer)
}

// ============================================================================
// SHUFFLE TRAINING (VRF)
// ============================================================================

/// Pick one of the four calls at random
#[update]
async fn get_random_mode() -> Result<RandomModeResult, String> {
    random::draw_random_mode().await.inspect_err(|e| {
        ic_cdk::println!("get_random_mode failed: {}", e);
    })
}

/// Randomize a chip count around `requested` for cash drills
#[update]
async fn get_dynamic_chip_count(requested: u32) -> Result<DynamicChipCountResult, String> {
    random::draw_dynamic_chip_count(requested).await.inspect_err(|e| {
        ic_cdk::println!("get_dynamic_chip_count failed: {}", e);
    })
}

/// Greet a trainee
#[query]
fn greet(name: String) -> String {
    format!(
        "Welcome to the OpenHouse dealer school, {}! Today's table: European roulette.",
        name
    )
}

ic_cdk::export_candid!();
