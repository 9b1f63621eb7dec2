/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to two decimal places, ties to even (3.125 -> 3.12).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Shortens `text` to at most `max_chars` characters, appending `...` when
/// anything was cut. Counts characters, not bytes.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[5.0, 5.0, 4.0, 3.0, 2.0, 1.0, 1.0, 5.0]), 3.25);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.333333), 3.33);
        assert_eq!(round2(4.666666), 4.67);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(3.125), 3.12);
        assert_eq!(round2(3.375), 3.38);
        assert_eq!(round2(4.625), 4.62);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 100), "short");
        let exact = "x".repeat(100);
        assert_eq!(truncate_chars(&exact, 100), exact);
        let long = "y".repeat(101);
        assert_eq!(truncate_chars(&long, 100), format!("{}...", "y".repeat(100)));
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll...");
    }
}
