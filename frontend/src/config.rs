/// Fixed header height the smooth scroller leaves above a section.
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;
pub const DEFAULT_SCROLL_DURATION_MS: f64 = 1000.0;

/// Fraction of an element that must be visible before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.15;

/// The navbar switches to its compact style past this many pixels.
pub const NAV_SCROLLED_AFTER: f64 = 20.0;
/// Distance below the top of the viewport used to pick the active section.
pub const SCROLL_SPY_PROBE: f64 = 100.0;

pub fn get_asset_base() -> &'static str {
    option_env!("ASSET_BASE_URL").unwrap_or("")
}

/// Prefixes a public asset path with the configured base url.
pub fn asset(path: &str) -> String {
    let base = get_asset_base().trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

pub fn get_header_offset() -> f64 {
    parse_or(option_env!("LANDING_HEADER_OFFSET"), DEFAULT_HEADER_OFFSET)
}

pub fn get_scroll_duration_ms() -> f64 {
    parse_or(option_env!("LANDING_SCROLL_DURATION_MS"), DEFAULT_SCROLL_DURATION_MS)
}

fn parse_or(raw: Option<&str>, default: f64) -> f64 {
    match raw.map(|value| value.trim().parse::<f64>()) {
        Some(Ok(value)) if value.is_finite() && value >= 0.0 => value,
        Some(_) => {
            log::warn!("Ignoring invalid build-time setting {:?}, using {}", raw, default);
            default
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_accepts_valid_numbers() {
        assert_eq!(parse_or(Some("64"), 80.0), 64.0);
        assert_eq!(parse_or(Some(" 1200.5 "), 1000.0), 1200.5);
    }

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or(None, 80.0), 80.0);
        assert_eq!(parse_or(Some("tall"), 80.0), 80.0);
        assert_eq!(parse_or(Some("-5"), 80.0), 80.0);
        assert_eq!(parse_or(Some("NaN"), 80.0), 80.0);
    }

    #[test]
    fn asset_joins_paths() {
        let base = get_asset_base().trim_end_matches('/').to_string();
        assert_eq!(asset("/robot.png"), format!("{}/robot.png", base));
        assert_eq!(asset("robot.png"), format!("{}/robot.png", base));
    }
}
