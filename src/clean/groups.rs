// src/clean/groups.rs

use std::collections::HashMap;
use std::hash::Hash;

/// Median of the collected values; `None` for an empty group. An
/// even-sized group averages the middle pair, so half values happen.
fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).expect("finite values"));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

fn collect<K, I>(pairs: I) -> HashMap<K, Vec<f64>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut by_key: HashMap<K, Vec<f64>> = HashMap::new();
    for (key, value) in pairs {
        by_key.entry(key).or_default().push(value);
    }
    by_key
}

/// Median value per group key. Keys with no values simply don't appear,
/// which is how a group-wide gap stays unfilled downstream.
pub fn median_by_group<K, I>(pairs: I) -> HashMap<K, f64>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, f64)>,
{
    collect(pairs)
        .into_iter()
        .filter_map(|(key, values)| median(values).map(|m| (key, m)))
        .collect()
}

/// Arithmetic mean per group key.
pub fn mean_by_group<K, I>(pairs: I) -> HashMap<K, f64>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, f64)>,
{
    collect(pairs)
        .into_iter()
        .map(|(key, values)| {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            (key, mean)
        })
        .collect()
}
