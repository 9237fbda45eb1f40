use std::{cmp, mem::swap};

/// Levenshtein distance counted in chars, so CJK names work as expected.
pub fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let mut long: Vec<char> = a.chars().collect();
    let mut short: Vec<char> = b.chars().collect();
    if short.len() > long.len() {
        swap(&mut long, &mut short);
    }
    if short.is_empty() {
        return long.len();
    }

    // Two rows are enough, row i only looks back at row i - 1
    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];
    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let sub_cost = if lc == sc { 0 } else { 1 };
            curr[j + 1] = cmp::min(
                cmp::min(prev[j + 1] + 1, curr[j] + 1),
                prev[j] + sub_cost,
            );
        }
        swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}

/// Token by token similarity between a normalized needle and hay.
/// 1.0 is a perfect match, 0.0 nothing in common.
pub fn score(needle: &str, hay: &str) -> f64 {
    let needle_tokens: Vec<_> = needle.split_whitespace().collect();
    let hay_tokens: Vec<_> = hay.split_whitespace().collect();
    if needle_tokens.is_empty() {
        return 0.0;
    }

    let total: f64 = needle_tokens
        .iter()
        .zip(hay_tokens.iter())
        .map(|(n, h)| score_token(n, h))
        .sum();
    total / needle_tokens.len() as f64
}

fn score_token(needle: &str, hay: &str) -> f64 {
    if hay.starts_with(needle) {
        return 1.0;
    }
    let longest = cmp::max(needle.chars().count(), hay.chars().count());
    1.0 - (distance(needle, hay) as f64 / longest as f64)
}

/// Lowercases and turns the separators used in township names into spaces.
pub fn normalize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '(' | ')' | '-' | ',' | '\'' => ' ',
            c => c,
        })
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn prefix_is_a_full_match() {
    assert_eq!(score("tai", "taitung city beinan"), 1.0);
}

#[test]
fn empty_needle_scores_nothing() {
    assert_eq!(score("", "yuli"), 0.0);
}
