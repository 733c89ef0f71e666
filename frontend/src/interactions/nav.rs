use crate::config;

/// Geometry of one `section[id]`, measured at scroll time.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollSnapshot {
    pub offset_y: f64,
    pub sections: Vec<SectionBounds>,
}

pub fn navbar_scrolled(offset_y: f64) -> bool {
    offset_y > config::NAVBAR_SCROLLED_AFTER
}

pub fn back_to_top_visible(offset_y: f64) -> bool {
    offset_y > config::BACK_TO_TOP_AFTER
}

/// Section whose window `[top - lead, top - lead + height)` holds the offset.
/// Sections are scanned in document order and the last hit wins.
pub fn active_section(offset_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let start = section.top - config::SECTION_LEAD;
            offset_y >= start && offset_y < start + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

/// Element id an in-page link points at. A bare `#` is left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn thresholds_are_strict() {
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.5));
        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(501.0));
        assert!(!back_to_top_visible(120.0));
    }

    #[test]
    fn active_section_uses_half_open_window() {
        let sections = vec![section("home", 0.0, 600.0), section("services", 600.0, 800.0)];
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(499.0, &sections), Some("home"));
        // 600 - 100 = 500 starts "services" and ends "home".
        assert_eq!(active_section(500.0, &sections), Some("services"));
        assert_eq!(active_section(1299.0, &sections), Some("services"));
        assert_eq!(active_section(1300.0, &sections), None);
    }

    #[test]
    fn overlapping_sections_prefer_the_later_one() {
        let sections = vec![section("a", 0.0, 1000.0), section("b", 300.0, 200.0)];
        assert_eq!(active_section(250.0, &sections), Some("b"));
        assert_eq!(active_section(450.0, &sections), Some("a"));
    }

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#pricing"), Some("pricing"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/about"), None);
    }
}
