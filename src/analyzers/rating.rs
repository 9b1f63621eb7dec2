/// Human-readable label for a star rating.
///
/// | Rating | Label                |
/// |--------|----------------------|
/// | 1      | 1 Star - Very Poor   |
/// | 2      | 2 Stars - Poor       |
/// | 3      | 3 Stars - Average    |
/// | 4      | 4 Stars - Good       |
/// | 5      | 5 Stars - Excellent  |
///
/// Anything else is reported as `Unrated`.
pub fn rating_label(rating: u8) -> &'static str {
    match rating {
        1 => "1 Star - Very Poor",
        2 => "2 Stars - Poor",
        3 => "3 Stars - Average",
        4 => "4 Stars - Good",
        5 => "5 Stars - Excellent",
        _ => "Unrated",
    }
}

/// Whether `rating` falls inside the accepted 1..=5 star range.
pub fn is_valid_rating(rating: u8) -> bool {
    (1..=5).contains(&rating)
}
