use regex::Regex;

/// Short-number emergency patterns per region.
static EMERGENCY_PATTERNS: &[(&str, &str)] = &[
    ("AU", "000|1(?:06|12)"),
    ("CA", "112|911"),
    ("DE", "11[02]"),
    ("FR", "1(?:[578]|12)"),
    ("GB", "112|999"),
    ("IN", "1(?:0[0-28]|12|298)|2611"),
    ("JP", "11[09]"),
    ("US", "112|911"),
];

/// Checks dialed strings against one region's emergency numbers.
pub struct EmergencyMatcher {
    region: String,
    pattern: Option<Regex>,
}

impl EmergencyMatcher {
    pub fn for_region(region: &str) -> Self {
        let pattern = EMERGENCY_PATTERNS
            .iter()
            .find(|(id, _)| *id == region)
            .and_then(|(_, pattern)| Regex::new(&format!("^(?:{})", pattern)).ok());

        if pattern.is_none() {
            log::warn!("No emergency number data for region {}", region);
        }

        Self {
            region: region.to_string(),
            pattern,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Numbers written with a leading plus are never emergency numbers.
    /// Anything after the emergency digits is tolerated.
    pub fn is_emergency_number(&self, dialed: &str) -> bool {
        let Some(pattern) = &self.pattern else {
            return false;
        };

        let candidate =
            dialed.trim_start_matches(|c: char| !(c.is_ascii_digit() || c == '+' || c == '＋'));
        if candidate.starts_with(['+', '＋']) {
            return false;
        }

        let digits: String = candidate.chars().filter(char::is_ascii_digit).collect();
        !digits.is_empty() && pattern.is_match(&digits)
    }
}
