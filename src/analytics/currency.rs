use crate::domain::order::OrderRecord;
use std::collections::BTreeMap;

pub fn aggregate_by_currency(orders: &[OrderRecord]) -> BTreeMap<String, i64> {
    let mut totals = BTreeMap::new();
    for order in orders {
        *totals.entry(order.currency_code.clone()).or_insert(0) += order.total_minor;
    }
    totals
}

pub fn count_by_currency(orders: &[OrderRecord]) -> BTreeMap<String, i64> {
    let mut counts = BTreeMap::new();
    for order in orders {
        *counts.entry(order.currency_code.clone()).or_insert(0) += 1;
    }
    counts
}

/// Percentage growth per currency against the previous window. A currency
/// with no previous activity reads as 100% when it has current activity,
/// otherwise 0%.
pub fn growth_rate(
    current: &BTreeMap<String, i64>,
    previous: &BTreeMap<String, i64>,
) -> BTreeMap<String, f64> {
    current
        .iter()
        .map(|(currency, &cur)| {
            let prev = previous.get(currency).copied().unwrap_or(0);
            let growth = if prev > 0 {
                (cur - prev) as f64 / prev as f64 * 100.0
            } else if cur > 0 {
                100.0
            } else {
                0.0
            };
            (currency.clone(), growth)
        })
        .collect()
}

pub fn scalar_growth(current: u64, previous: u64) -> f64 {
    if previous > 0 {
        (current as f64 - previous as f64) / previous as f64 * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
        pairs.iter().map(|(c, v)| (c.to_string(), *v)).collect()
    }

    #[test]
    fn growth_rate_cases() {
        let growth = growth_rate(&map(&[("usd", 0)]), &map(&[("usd", 0)]));
        assert_eq!(growth["usd"], 0.0);

        let growth = growth_rate(&map(&[("usd", 100)]), &map(&[]));
        assert_eq!(growth["usd"], 100.0);

        let growth = growth_rate(&map(&[("usd", 150)]), &map(&[("usd", 100)]));
        assert_eq!(growth["usd"], 50.0);
    }

    #[test]
    fn scalar_growth_zero_previous_is_zero() {
        assert_eq!(scalar_growth(10, 0), 0.0);
        assert_eq!(scalar_growth(30, 20), 50.0);
    }
}
