//! Rupee price formatting

/// Format whole rupees with the Indian digit grouping used across the
/// storefront: the last three digits, then groups of two.
///
/// `450000` becomes `₹4,50,000` and `12345678` becomes `₹1,23,45,678`.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}
