// Payout ratios and payout drills

use crate::announced::{definition, expand_definition, neighbor_bet_definition};
use crate::board::is_valid_combination;
use crate::types::{
    AnnouncedBet, PayoutCheck, PayoutInfo, Wager, WagerKind, DEFAULT_NEIGHBOR_RADIUS, MAX_POCKET,
};
use crate::wheel::{get_neighbors, sector_pockets};

/// Winnings per unit staked, excluding the stake itself.
/// Racetrack sector calls have no single ratio; they pay per constituent wager.
pub fn get_payout_ratio(kind: WagerKind) -> Option<u64> {
    match kind {
        WagerKind::Straight => Some(35),
        WagerKind::Split => Some(17),
        WagerKind::Street => Some(11),
        WagerKind::Corner => Some(8),
        WagerKind::SixLine => Some(5),
        WagerKind::Column | WagerKind::Dozen => Some(2),
        WagerKind::RedBlack | WagerKind::EvenOdd | WagerKind::HighLow => Some(1),
        WagerKind::Neighbor => Some(35), // each pocket of the arc is a straight
        WagerKind::Voisins | WagerKind::Tiers |
        WagerKind::Orphelins | WagerKind::ZeroGame => None,
    }
}

/// Whether the wager has chips on `winning`.
pub fn wager_covers(wager: &Wager, winning: u8) -> bool {
    match wager.kind {
        WagerKind::Neighbor => wager
            .numbers
            .first()
            .map(|&center| get_neighbors(center as i32, DEFAULT_NEIGHBOR_RADIUS).contains(&winning))
            .unwrap_or(false),
        kind => match AnnouncedBet::from_wager_kind(kind) {
            Some(call) => sector_pockets(call).contains(&winning),
            None => wager.numbers.contains(&winning),
        },
    }
}

/// Winnings the dealer pays on `wager` when `winning` comes up; 0 when it loses.
///
/// Neighbor and sector calls use `stake` as the unit per chip and pay the
/// constituent wagers that cover the number. A `Wager` carries no radius, so
/// a `Neighbor` wager is always paid as the five-pocket call
/// (`DEFAULT_NEIGHBOR_RADIUS`); other radii go through
/// [`calculate_neighbor_payout`].
pub fn calculate_payout(wager: &Wager, winning: u8) -> u64 {
    if !wager_covers(wager, winning) {
        return 0;
    }

    if let Some(call) = AnnouncedBet::from_wager_kind(wager.kind) {
        let pieces = expand_definition(&definition(call), wager.stake);
        return calculate_total_payout(&pieces, winning);
    }

    match get_payout_ratio(wager.kind) {
        Some(ratio) => wager.stake.saturating_mul(ratio),
        None => 0,
    }
}

/// Winnings on "`pocket` and `radius` neighbors" with `stake` on each straight.
/// 0 for an off-wheel pocket.
pub fn calculate_neighbor_payout(pocket: i32, radius: u8, stake: u64, winning: u8) -> u64 {
    neighbor_bet_definition(pocket, radius)
        .map(|def| calculate_total_payout(&expand_definition(&def, stake), winning))
        .unwrap_or(0)
}

pub fn calculate_total_payout(wagers: &[Wager], winning: u8) -> u64 {
    wagers
        .iter()
        .map(|w| calculate_payout(w, winning))
        .fold(0u64, |acc, p| acc.saturating_add(p))
}

/// Grade a trainee's payout answer for one wager.
pub fn check_payout_answer(wager: &Wager, winning: u8, answer: u64) -> Result<PayoutCheck, String> {
    if winning > MAX_POCKET {
        return Err(format!("Invalid winning number: {} (must be 0-36)", winning));
    }
    if !is_valid_combination(wager.kind, &wager.numbers) {
        return Err(format!(
            "Invalid {} position: {:?}",
            wager.kind.label(),
            wager.numbers
        ));
    }

    let expected_payout = calculate_payout(wager, winning);
    Ok(PayoutCheck {
        winning_number: winning,
        expected_payout,
        answer,
        is_correct: answer == expected_payout,
    })
}

/// Payout table for display.
pub fn payout_table() -> Vec<PayoutInfo> {
    WagerKind::ALL
        .iter()
        .map(|&kind| PayoutInfo {
            kind,
            label: kind.label().to_string(),
            payout_ratio: get_payout_ratio(kind),
            description: describe(kind).to_string(),
        })
        .collect()
}

fn describe(kind: WagerKind) -> &'static str {
    match kind {
        WagerKind::Straight => "Single number (0-36)",
        WagerKind::Split => "Two adjacent numbers",
        WagerKind::Street => "Three numbers in a row",
        WagerKind::Corner => "Four numbers in a square",
        WagerKind::SixLine => "Six numbers (two rows)",
        WagerKind::Column => "12 numbers in a column",
        WagerKind::Dozen => "12 numbers (1-12, 13-24, 25-36)",
        WagerKind::RedBlack => "18 numbers by color",
        WagerKind::EvenOdd => "18 numbers by parity",
        WagerKind::HighLow => "1-18 or 19-36",
        WagerKind::Voisins => "17 pockets around zero, 9 chips",
        WagerKind::Tiers => "12 pockets opposite zero, 6 chips",
        WagerKind::Orphelins => "8 remaining pockets, 5 chips",
        WagerKind::ZeroGame => "7 pockets closest to zero, 4 chips",
        WagerKind::Neighbor => "A pocket and two neighbors each side, 5 chips",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_ratios_fall_with_coverage() {
        let inside = [
            WagerKind::Straight,
            WagerKind::Split,
            WagerKind::Street,
            WagerKind::Corner,
            WagerKind::SixLine,
        ];
        let ratios: Vec<u64> = inside.iter().map(|&k| get_payout_ratio(k).unwrap()).collect();
        assert_eq!(ratios, vec![35, 17, 11, 8, 5]);
        assert!(ratios.windows(2).all(|w| w[0] > w[1]));

        let counts: Vec<usize> = inside.iter().map(|k| k.number_count().unwrap()).collect();
        assert!(counts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_outside_ratios() {
        assert_eq!(get_payout_ratio(WagerKind::Column), Some(2));
        assert_eq!(get_payout_ratio(WagerKind::Dozen), Some(2));
        assert_eq!(get_payout_ratio(WagerKind::RedBlack), Some(1));
        assert_eq!(get_payout_ratio(WagerKind::Tiers), None);
    }

    #[test]
    fn test_straight_payout() {
        let bet = Wager::new(WagerKind::Straight, &[17], 100);
        assert_eq!(calculate_payout(&bet, 17), 3500);
        assert_eq!(calculate_payout(&bet, 18), 0);
    }

    #[test]
    fn test_split_and_corner_payout() {
        let split = Wager::new(WagerKind::Split, &[5, 8], 10);
        assert_eq!(calculate_payout(&split, 8), 170);
        let corner = Wager::new(WagerKind::Corner, &[1, 2, 4, 5], 10);
        assert_eq!(calculate_payout(&corner, 4), 80);
        assert_eq!(calculate_payout(&corner, 3), 0);
    }

    #[test]
    fn test_neighbor_payout() {
        let bet = Wager::new(WagerKind::Neighbor, &[17], 5);
        assert_eq!(calculate_payout(&bet, 34), 175);
        assert_eq!(calculate_payout(&bet, 17), 175);
        assert_eq!(calculate_payout(&bet, 0), 0);
    }

    #[test]
    fn test_neighbor_payout_follows_radius() {
        // 17 and one neighbor: 25, 17, 34
        assert_eq!(calculate_neighbor_payout(17, 1, 5, 34), 175);
        assert_eq!(calculate_neighbor_payout(17, 1, 5, 25), 175);
        assert_eq!(calculate_neighbor_payout(17, 1, 5, 2), 0);
        assert_eq!(calculate_neighbor_payout(17, 1, 5, 6), 0);

        // Default radius agrees with a plain Neighbor wager
        let bet = Wager::new(WagerKind::Neighbor, &[17], 5);
        for winning in 0..=MAX_POCKET {
            assert_eq!(
                calculate_neighbor_payout(17, DEFAULT_NEIGHBOR_RADIUS, 5, winning),
                calculate_payout(&bet, winning),
                "winning {}",
                winning
            );
        }

        assert_eq!(calculate_neighbor_payout(37, 1, 5, 0), 0);
    }

    #[test]
    fn test_sector_wagers_pay_only_inside_their_sector() {
        let sector_kinds = [
            WagerKind::Tiers,
            WagerKind::Orphelins,
            WagerKind::Voisins,
            WagerKind::ZeroGame,
        ];
        for kind in sector_kinds {
            let call = AnnouncedBet::from_wager_kind(kind).unwrap();
            let bet = Wager::new(kind, &[], 1);
            for winning in 0..=MAX_POCKET {
                let covered = sector_pockets(call).contains(&winning);
                let paid = calculate_payout(&bet, winning) > 0;
                assert_eq!(paid, covered, "{:?} on {}", kind, winning);
            }
        }
    }

    #[test]
    fn test_voisins_payout_on_zero() {
        // 0 is on the doubled 0/2/3 street: 2 units * 11
        let bet = Wager::new(WagerKind::Voisins, &[], 1);
        assert_eq!(calculate_payout(&bet, 0), 22);
        // 26 is on the doubled corner: 2 units * 8
        assert_eq!(calculate_payout(&bet, 26), 16);
        // 12 is on a single split
        assert_eq!(calculate_payout(&bet, 12), 17);
        assert_eq!(calculate_payout(&bet, 5), 0);
    }

    #[test]
    fn test_orphelins_seventeen_pays_two_splits() {
        let bet = Wager::new(WagerKind::Orphelins, &[], 10);
        assert_eq!(calculate_payout(&bet, 17), 340);
        assert_eq!(calculate_payout(&bet, 1), 350);
    }

    #[test]
    fn test_total_payout() {
        let bets = vec![
            Wager::new(WagerKind::Straight, &[8], 1),
            Wager::new(WagerKind::Split, &[5, 8], 1),
            Wager::new(WagerKind::Street, &[7, 8, 9], 1),
            Wager::new(WagerKind::Straight, &[9], 1),
        ];
        assert_eq!(calculate_total_payout(&bets, 8), 35 + 17 + 11);
    }

    #[test]
    fn test_check_payout_answer() {
        let bet = Wager::new(WagerKind::Split, &[8, 5], 4);
        let check = check_payout_answer(&bet, 5, 68).unwrap();
        assert!(check.is_correct);
        assert_eq!(check.expected_payout, 68);

        let check = check_payout_answer(&bet, 5, 72).unwrap();
        assert!(!check.is_correct);

        assert!(check_payout_answer(&bet, 37, 0).is_err());
        let illegal = Wager::new(WagerKind::Split, &[3, 4], 1);
        assert!(check_payout_answer(&illegal, 3, 17).is_err());
    }

    #[test]
    fn test_payout_table_lists_every_kind() {
        let table = payout_table();
        assert_eq!(table.len(), WagerKind::ALL.len());
        assert_eq!(table[0].payout_ratio, Some(35));
    }
}
