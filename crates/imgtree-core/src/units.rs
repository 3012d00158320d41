//! Formatting of sizes and identifiers for display.

/// Number of characters kept by [`short_id`].
pub const SHORT_ID_LEN: usize = 12;

const SIZE_UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format bytes as a decimal human-readable size with three significant
/// digits (e.g. `5.24MB`, `12.3kB`, `999B`).
pub fn human_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1000.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1000.0;
        unit += 1;
    }

    let mut text = significant_digits(size, 3);
    // 999.7kB rounds to "1000"; show it as 1MB instead.
    if text == "1000" && unit < SIZE_UNITS.len() - 1 {
        text = "1".to_string();
        unit += 1;
    }

    format!("{}{}", text, SIZE_UNITS[unit])
}

fn significant_digits(value: f64, digits: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let integer_digits = value.abs().log10().floor() as i32 + 1;
    let decimals = (digits - integer_digits).max(0) as usize;
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Shorten an identifier for display: drop any `algorithm:` prefix and keep
/// the first [`SHORT_ID_LEN`] characters.
pub fn short_id(id: &str) -> String {
    let digest = match id.find(':') {
        Some(idx) => &id[idx + 1..],
        None => id,
    };
    digest.chars().take(SHORT_ID_LEN).collect()
}
