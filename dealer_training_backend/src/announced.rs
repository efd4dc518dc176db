// Announced (racetrack) bet definitions

use crate::types::{AnnouncedBet, AnnouncedBetDefinition, AnnouncedBetEntry, Wager, WagerKind};
use crate::wheel;

type EntryRow = (WagerKind, &'static [u8], u32);

const TIER_BETS: &[EntryRow] = &[
    (WagerKind::Split, &[5, 8], 1),
    (WagerKind::Split, &[10, 11], 1),
    (WagerKind::Split, &[13, 16], 1),
    (WagerKind::Split, &[23, 24], 1),
    (WagerKind::Split, &[27, 30], 1),
    (WagerKind::Split, &[33, 36], 1),
];

const ORPHELINS_BETS: &[EntryRow] = &[
    (WagerKind::Straight, &[1], 1),
    (WagerKind::Split, &[6, 9], 1),
    (WagerKind::Split, &[14, 17], 1),
    (WagerKind::Split, &[17, 20], 1),
    (WagerKind::Split, &[31, 34], 1),
];

const VOISINS_BETS: &[EntryRow] = &[
    (WagerKind::Street, &[0, 2, 3], 2),
    (WagerKind::Corner, &[25, 26, 28, 29], 2),
    (WagerKind::Split, &[4, 7], 1),
    (WagerKind::Split, &[12, 15], 1),
    (WagerKind::Split, &[18, 21], 1),
    (WagerKind::Split, &[19, 22], 1),
    (WagerKind::Split, &[32, 35], 1),
];

const ZERO_GAME_BETS: &[EntryRow] = &[
    (WagerKind::Split, &[0, 3], 1),
    (WagerKind::Split, &[12, 15], 1),
    (WagerKind::Split, &[32, 35], 1),
    (WagerKind::Straight, &[26], 1),
];

fn rows(bet: AnnouncedBet) -> &'static [EntryRow] {
    match bet {
        AnnouncedBet::Tier => TIER_BETS,
        AnnouncedBet::Orphelins => ORPHELINS_BETS,
        AnnouncedBet::Voisins => VOISINS_BETS,
        AnnouncedBet::Zero => ZERO_GAME_BETS,
    }
}

pub fn definition(bet: AnnouncedBet) -> AnnouncedBetDefinition {
    AnnouncedBetDefinition {
        name: bet.name().to_string(),
        bets: rows(bet)
            .iter()
            .map(|&(kind, numbers, multiplier)| AnnouncedBetEntry {
                kind,
                numbers: numbers.to_vec(),
                multiplier,
            })
            .collect(),
    }
}

/// Definition for a named call, `None` for anything that is not one of the four calls.
pub fn lookup_announced_bet(name: &str) -> Option<AnnouncedBetDefinition> {
    AnnouncedBet::from_name(name).map(definition)
}

/// "N and the neighbors": one straight on each pocket of the arc around `pocket`.
pub fn neighbor_bet_definition(pocket: i32, radius: u8) -> Option<AnnouncedBetDefinition> {
    let arc = wheel::get_neighbors(pocket, radius);
    if arc.is_empty() {
        return None;
    }

    Some(AnnouncedBetDefinition {
        name: format!("{} and the neighbors", pocket),
        bets: arc
            .into_iter()
            .map(|n| AnnouncedBetEntry {
                kind: WagerKind::Straight,
                numbers: vec![n],
                multiplier: 1,
            })
            .collect(),
    })
}

/// Chips to place for a definition, one wager per entry with the multiplier
/// folded into the stake.
pub fn expand_definition(definition: &AnnouncedBetDefinition, base_stake: u64) -> Vec<Wager> {
    definition
        .bets
        .iter()
        .map(|entry| {
            let stake = base_stake.saturating_mul(entry.multiplier as u64);
            Wager::new(entry.kind, &entry.numbers, stake)
        })
        .collect()
}

/// Expand a named call into placeable wagers. Unknown names give an empty list.
pub fn expand_announced_bet(name: &str, base_stake: u64) -> Vec<Wager> {
    lookup_announced_bet(name)
        .map(|def| expand_definition(&def, base_stake))
        .unwrap_or_default()
}
