// Cash to chip conversion

use crate::types::{ChipBreakdownCheck, ChipStack, CHIP_DENOMINATIONS};

/// Greedy breakdown into the largest chips first. Denominations with a zero
/// count are left out, and any remainder below the smallest chip is dropped.
pub fn breakdown_to_chips(amount: u64) -> Vec<ChipStack> {
    let mut remaining = amount;
    let mut stacks = Vec::new();

    for denomination in CHIP_DENOMINATIONS {
        let count = remaining / denomination;
        if count > 0 {
            stacks.push(ChipStack { denomination, count });
            remaining %= denomination;
        }
    }

    stacks
}

/// Value of a set of chip stacks.
pub fn chips_total(stacks: &[ChipStack]) -> u64 {
    stacks
        .iter()
        .map(|s| s.denomination.saturating_mul(s.count))
        .fold(0u64, |acc, v| acc.saturating_add(v))
}

/// Compare a trainee's breakdown with the canonical one, ignoring stack order
/// and empty stacks. Stacks of the same denomination are added together.
pub fn check_chip_breakdown(amount: u64, answer: &[ChipStack]) -> ChipBreakdownCheck {
    let expected = breakdown_to_chips(amount);

    let mut merged: Vec<ChipStack> = Vec::new();
    for stack in answer.iter().filter(|s| s.count > 0) {
        match merged.iter_mut().find(|m| m.denomination == stack.denomination) {
            Some(existing) => existing.count = existing.count.saturating_add(stack.count),
            None => merged.push(*stack),
        }
    }
    merged.sort_by(|a, b| b.denomination.cmp(&a.denomination));

    let is_correct = merged == expected;
    ChipBreakdownCheck {
        amount,
        expected,
        is_correct,
    }
}
