//! Perfect pairings of odd-degree nodes
//!
//! The number of pairings of `n` nodes is `(n-1)!!`; callers bound `n`
//! through `TraversalConfig::max_odd_nodes`.

use std::collections::{HashMap, HashSet};

/// Two node ids, normalized so that `0 <= 1`
pub type Pair = (String, String);

/// A set of disjoint pairs covering every odd node, sorted
pub type Pairing = Vec<Pair>;

fn normalize_pair(a: &str, b: &str) -> Pair {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Enumerate every perfect pairing of `nodes`.
///
/// Pairs the first node with each other node in turn, recurses on what is
/// left, and concatenates. Each pairing is normalized and duplicates are
/// dropped, keeping first-seen order. An odd-sized input has no perfect
/// pairing and yields nothing.
pub fn all_pairings(nodes: &[String]) -> Vec<Pairing> {
    let mut seen: HashSet<Pairing> = HashSet::new();
    let mut unique = Vec::new();

    for mut pairing in generate(nodes) {
        pairing.sort();
        if seen.insert(pairing.clone()) {
            unique.push(pairing);
        }
    }
    unique
}

fn generate(remaining: &[String]) -> Vec<Pairing> {
    let Some((first, rest)) = remaining.split_first() else {
        return vec![Vec::new()];
    };

    let mut pairings = Vec::new();
    for (i, partner) in rest.iter().enumerate() {
        let others: Vec<String> = rest
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, id)| id.clone())
            .collect();

        for mut sub in generate(&others) {
            sub.push(normalize_pair(first, partner));
            pairings.push(sub);
        }
    }
    pairings
}

/// Shortest-path cost between node pairs; `None` marks an unreachable pair
#[derive(Debug, Default)]
pub struct PairCosts {
    costs: HashMap<Pair, Option<u64>>,
}

impl PairCosts {
    pub fn insert(&mut self, a: &str, b: &str, cost: Option<u64>) {
        self.costs.insert(normalize_pair(a, b), cost);
    }

    pub fn get(&self, a: &str, b: &str) -> Option<u64> {
        self.costs.get(&normalize_pair(a, b)).copied().flatten()
    }

    /// Total cost of a pairing, `None` if any pair is unreachable
    pub fn total(&self, pairing: &[Pair]) -> Option<u64> {
        pairing
            .iter()
            .map(|(a, b)| self.get(a, b))
            .try_fold(0u64, |acc, cost| cost.map(|c| acc.saturating_add(c)))
    }
}

/// Cheapest fully reachable pairing; ties keep the first seen
pub fn cheapest<'a>(pairings: &'a [Pairing], costs: &PairCosts) -> Option<(&'a Pairing, u64)> {
    let mut best: Option<(&Pairing, u64)> = None;
    for pairing in pairings {
        let Some(total) = costs.total(pairing) else {
            continue;
        };
        if best.is_none_or(|(_, best_total)| total < best_total) {
            best = Some((pairing, total));
        }
    }
    best
}
