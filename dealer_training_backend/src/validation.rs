// Wager normalization and announced-bet grading

use crate::announced::{lookup_announced_bet, neighbor_bet_definition};
use crate::types::{
    AnnouncedBetDefinition, AnnouncedBetEntry, NormalizedWager, ValidationResult, Wager, WagerKind,
};

// =============================================================================
// NORMALIZATION
// =============================================================================

fn normalize_parts(kind: WagerKind, numbers: &[u8]) -> NormalizedWager {
    let mut numbers = numbers.to_vec();
    numbers.sort_unstable();
    NormalizedWager { kind, numbers }
}

/// Kind plus ascending numbers. Stake, id and timestamp are dropped.
pub fn normalize(wager: &Wager) -> NormalizedWager {
    normalize_parts(wager.kind, &wager.numbers)
}

pub fn normalize_entry(entry: &AnnouncedBetEntry) -> NormalizedWager {
    normalize_parts(entry.kind, &entry.numbers)
}

/// Same kind and same numbers in any order.
pub fn wagers_equal(a: &Wager, b: &Wager) -> bool {
    normalize(a) == normalize(b)
}

// =============================================================================
// GRADING
// =============================================================================

/// Compare placed wagers against a canonical set.
///
/// A canonical wager is missing when no placed wager normalizes to it; a placed
/// wager is extra when it normalizes to no canonical wager. Malformed placed
/// wagers never match and so always land in `extra_bets`.
pub fn grade_wagers(canonical: &[NormalizedWager], user_wagers: &[Wager]) -> ValidationResult {
    let user_bets: Vec<NormalizedWager> = user_wagers.iter().map(normalize).collect();

    let missing_bets: Vec<NormalizedWager> = canonical
        .iter()
        .filter(|bet| !user_bets.contains(bet))
        .cloned()
        .collect();

    let extra_bets: Vec<NormalizedWager> = user_bets
        .iter()
        .filter(|bet| !canonical.contains(bet))
        .cloned()
        .collect();

    let score = calculate_score(canonical.len(), missing_bets.len());
    let is_correct = !canonical.is_empty() && missing_bets.is_empty() && extra_bets.is_empty();

    ValidationResult {
        is_correct,
        correct_bets: canonical.to_vec(),
        user_bets,
        missing_bets,
        extra_bets,
        score,
    }
}

/// round(100 * matched / total), 0 when there is nothing to match.
fn calculate_score(total: usize, missing: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let matched = total.saturating_sub(missing) as u64;
    let total = total as u64;
    // Integer form of round-half-up
    ((200 * matched + total) / (2 * total)) as u8
}

pub fn grade_definition(
    definition: &AnnouncedBetDefinition,
    user_wagers: &[Wager],
) -> ValidationResult {
    let canonical: Vec<NormalizedWager> = definition.bets.iter().map(normalize_entry).collect();
    grade_wagers(&canonical, user_wagers)
}

/// Grade placed wagers against a named call. Unknown modes get the zero result.
pub fn validate(mode: &str, user_wagers: &[Wager]) -> ValidationResult {
    match lookup_announced_bet(mode) {
        Some(definition) => grade_definition(&definition, user_wagers),
        None => ValidationResult::default(),
    }
}

/// Grade a "pocket and the neighbors" call. Off-wheel pockets get the zero result.
pub fn validate_neighbor_bet(pocket: i32, radius: u8, user_wagers: &[Wager]) -> ValidationResult {
    match neighbor_bet_definition(pocket, radius) {
        Some(definition) => grade_definition(&definition, user_wagers),
        None => ValidationResult::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(a: u8, b: u8) -> Wager {
        Wager::new(WagerKind::Split, &[a, b], 1)
    }

    fn tier_wagers() -> Vec<Wager> {
        vec![split(8, 5), split(11, 10), split(13, 16), split(24, 23), split(27, 30), split(36, 33)]
    }

    #[test]
    fn test_normalize_sorts_and_strips() {
        let mut wager = Wager::new(WagerKind::Split, &[8, 5], 25);
        wager.id = Some(7);
        wager.placed_at = Some(1_700_000_000);

        let normalized = normalize(&wager);
        assert_eq!(normalized, NormalizedWager { kind: WagerKind::Split, numbers: vec![5, 8] });
    }

    #[test]
    fn test_wagers_equal_ignores_order_and_stake() {
        assert!(wagers_equal(&split(5, 8), &split(8, 5)));
        assert!(wagers_equal(&split(5, 8), &Wager::new(WagerKind::Split, &[5, 8], 100)));
        assert!(!wagers_equal(&split(5, 8), &Wager::new(WagerKind::Street, &[5, 8], 1)));
        assert!(!wagers_equal(&split(5, 8), &Wager::new(WagerKind::Split, &[5, 8, 11], 1)));
    }

    #[test]
    fn test_tier_any_order() {
        let mut wagers = tier_wagers();
        wagers.reverse();
        let result = validate("tier", &wagers);
        assert!(result.is_correct);
        assert_eq!(result.score, 100);
        assert!(result.missing_bets.is_empty());
        assert!(result.extra_bets.is_empty());
        assert_eq!(result.correct_bets.len(), 6);
        assert_eq!(result.user_bets.len(), 6);
    }

    #[test]
    fn test_partial_credit() {
        let canonical = vec![
            NormalizedWager { kind: WagerKind::Split, numbers: vec![5, 8] },
            NormalizedWager { kind: WagerKind::Straight, numbers: vec![1] },
        ];
        let result = grade_wagers(&canonical, &[split(8, 5)]);
        assert!(!result.is_correct);
        assert_eq!(result.score, 50);
        assert_eq!(result.missing_bets.len(), 1);
        assert_eq!(result.missing_bets[0].kind, WagerKind::Straight);
    }

    #[test]
    fn test_extra_wager() {
        let mut wagers = tier_wagers();
        wagers.push(Wager::new(WagerKind::Straight, &[17], 1));
        let result = validate("tier", &wagers);
        assert!(!result.is_correct);
        assert_eq!(result.score, 100);
        assert_eq!(
            result.extra_bets,
            vec![NormalizedWager { kind: WagerKind::Straight, numbers: vec![17] }]
        );
    }

    #[test]
    fn test_unknown_mode() {
        let result = validate("not_a_mode", &[]);
        assert_eq!(result, ValidationResult::default());
        assert!(!result.is_correct);
        assert_eq!(result.score, 0);

        // Unknown mode ignores whatever was placed
        let result = validate("random", &tier_wagers());
        assert!(result.extra_bets.is_empty());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_empty_input() {
        let result = validate("tier", &[]);
        assert_eq!(result.score, 0);
        assert_eq!(result.missing_bets.len(), 6);
        assert!(!result.is_correct);
    }

    #[test]
    fn test_score_rounding() {
        assert_eq!(calculate_score(7, 1), 86); // 85.71
        assert_eq!(calculate_score(7, 6), 14); // 14.29
        assert_eq!(calculate_score(8, 1), 88); // 87.5 rounds up
        assert_eq!(calculate_score(6, 0), 100);
        assert_eq!(calculate_score(0, 0), 0);
    }

    #[test]
    fn test_malformed_wager_is_extra() {
        let mut wagers = tier_wagers();
        wagers[0] = Wager::new(WagerKind::Split, &[5, 8, 9], 1);
        let result = validate("tier", &wagers);
        assert!(!result.is_correct);
        assert_eq!(result.missing_bets.len(), 1);
        assert_eq!(result.extra_bets.len(), 1);
        assert_eq!(result.score, 83);
    }

    #[test]
    fn test_voisins_graded_without_stake() {
        // Street and corner carry double stake when placed but grade on shape only
        let wagers = crate::announced::expand_announced_bet("voisins", 1);
        let result = validate("voisins", &wagers);
        assert!(result.is_correct);

        let single_stakes: Vec<Wager> = wagers
            .into_iter()
            .map(|w| Wager { stake: 1, ..w })
            .collect();
        assert!(validate("voisins", &single_stakes).is_correct);
    }

    #[test]
    fn test_duplicate_placement_is_not_extra() {
        let mut wagers = tier_wagers();
        wagers.push(split(5, 8));
        let result = validate("tier", &wagers);
        assert!(result.is_correct);
        assert_eq!(result.user_bets.len(), 7);
    }

    #[test]
    fn test_validate_is_repeatable() {
        let wagers = vec![split(8, 5), Wager::new(WagerKind::Corner, &[1, 2, 4, 5], 1)];
        let first = validate("tier", &wagers);
        let second = validate("tier", &wagers);
        assert_eq!(first, second);
        assert_eq!(wagers[0].numbers, vec![8, 5]);
    }

    #[test]
    fn test_neighbor_bet() {
        let wagers: Vec<Wager> = [6, 34, 17, 25, 2]
            .iter()
            .map(|&n| Wager::new(WagerKind::Straight, &[n], 1))
            .collect();
        assert!(validate_neighbor_bet(17, 2, &wagers).is_correct);

        let result = validate_neighbor_bet(17, 2, &wagers[..4]);
        assert_eq!(result.score, 80);
        assert_eq!(result.missing_bets[0].numbers, vec![2]);

        assert_eq!(validate_neighbor_bet(-1, 2, &wagers), ValidationResult::default());
    }
}
