// src/data/aggregate.rs
//
// Group-by helpers behind the charts. Grouping by first appearance mirrors how
// colored traces are ordered; grouping for means uses ascending key order.
use crate::data::{Category, Listing, Measure};
use std::collections::{BTreeMap, HashMap};

/// Distinct values of `category`, in first-appearance order.
pub fn distinct<'a, I>(rows: I, category: Category) -> Vec<String>
where
    I: IntoIterator<Item = &'a Listing>,
{
    count_by(rows, category)
        .into_iter()
        .map(|(key, _)| key)
        .collect()
}

/// Row count per category value, in first-appearance order.
pub fn count_by<'a, I>(rows: I, category: Category) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for listing in rows {
        let key = category.of(listing);
        match index.get(key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key, counts.len());
                counts.push((key.to_string(), 1));
            }
        }
    }

    counts
}

/// Rows split by category value, in first-appearance order of the value.
pub fn partition_by<'a, I>(rows: I, category: Category) -> Vec<(String, Vec<&'a Listing>)>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&'a Listing>)> = Vec::new();

    for listing in rows {
        let key = category.of(listing);
        match index.get(key) {
            Some(&i) => groups[i].1.push(listing),
            None => {
                index.insert(key, groups.len());
                groups.push((key.to_string(), vec![listing]));
            }
        }
    }

    groups
}

/// Raw `measure` values per category value, in first-appearance order.
pub fn values_by<'a, I>(rows: I, category: Category, measure: Measure) -> Vec<(String, Vec<f64>)>
where
    I: IntoIterator<Item = &'a Listing>,
{
    partition_by(rows, category)
        .into_iter()
        .map(|(key, members)| {
            let values = members.iter().map(|l| measure.of(l)).collect();
            (key, values)
        })
        .collect()
}

/// Mean of `measure` per category value, in ascending key order.
pub fn mean_by<'a, I>(rows: I, category: Category, measure: Measure) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut sums: BTreeMap<&'a str, (f64, usize)> = BTreeMap::new();
    for listing in rows {
        let entry = sums.entry(category.of(listing)).or_insert((0.0, 0));
        entry.0 += measure.of(listing);
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(key, (sum, n))| (key.to_string(), sum / n as f64))
        .collect()
}

/// The `n` category values with the highest mean `measure`, highest first.
/// Equal means keep ascending key order.
pub fn top_by_mean<'a, I>(rows: I, category: Category, measure: Measure, n: usize) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut means = mean_by(rows, category, measure);
    // sort_by is stable
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means.truncate(n);
    means
}
