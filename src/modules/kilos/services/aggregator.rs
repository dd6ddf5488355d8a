use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::modules::kilos::models::PosOrder;

// Greedy on purpose: "A (x) b (y)" strips from the first '(' to the last ')'.
static PAREN_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(.*\)").expect("branch label pattern compiles"));

/// Strip the first parenthesized annotation from a branch label and trim
/// surrounding whitespace. Idempotent; labels without parentheses only get
/// trimmed.
pub fn normalize_branch(label: &str) -> String {
    PAREN_SUFFIX.replace(label, "").trim().to_string()
}

/// Sum the kilos field per branch label.
///
/// Orders with no branch reference or a missing/non-positive kilos value are
/// skipped. With `normalize` set, labels go through [`normalize_branch`]
/// first so variants like "Store A (north)" and "Store A (south)" collapse
/// into one key; otherwise labels are used as-is.
pub fn aggregate_kilos(orders: &[PosOrder], normalize: bool) -> HashMap<String, f64> {
    let mut totals = HashMap::new();

    for order in orders {
        let Some(branch) = &order.config_id else {
            continue;
        };
        let kilos = order.kilos.unwrap_or(0.0);
        if kilos <= 0.0 {
            continue;
        }

        let label = if normalize {
            normalize_branch(&branch.label)
        } else {
            branch.label.clone()
        };
        *totals.entry(label).or_insert(0.0) += kilos;
    }

    totals
}
