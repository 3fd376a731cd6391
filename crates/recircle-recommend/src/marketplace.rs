//! Marketplace search link construction.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

const SEARCH_URL_PREFIX: &str = "https://www.olx.in/items/q-";

/// Build a marketplace search URL for an item name.
///
/// Lower-cases the name, replaces every character outside `[a-z0-9 ]` with a
/// space, trims, then percent-encodes the remainder into the fixed template.
#[must_use]
pub fn search_url(item_name: &str) -> String {
    let cleaned: String = item_name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ' {
                c
            } else {
                ' '
            }
        })
        .collect();
    let query = cleaned.trim();
    format!(
        "{SEARCH_URL_PREFIX}{}",
        utf8_percent_encode(query, NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_spaces() {
        assert_eq!(
            search_url("Dell Laptop"),
            "https://www.olx.in/items/q-dell%20laptop"
        );
    }

    #[test]
    fn strips_punctuation_to_spaces() {
        assert_eq!(
            search_url("iPhone 12 (64GB)!"),
            "https://www.olx.in/items/q-iphone%2012%20%2064gb"
        );
    }

    #[test]
    fn trims_leading_and_trailing_noise() {
        assert_eq!(search_url("  ***Monitor***  "), "https://www.olx.in/items/q-monitor");
    }
}
