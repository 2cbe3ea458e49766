use crate::extractor::classification::NumberClass;
use crate::extractor::library::NON_GEOGRAPHIC_REGION;

/// Timezone reported for numbers whose type cannot be determined.
pub const UNKNOWN_TIMEZONE: &str = "Etc/Unknown";

/// What a directory gets to see about a parsed number.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryQuery<'a> {
    pub region: Option<&'a str>,
    pub class: NumberClass,
    pub national_number: u64,
}

/// Source of place, carrier and timezone facts for a number.
pub trait NumberDirectory {
    fn description(&self, query: &DirectoryQuery<'_>) -> Option<String>;

    fn carrier_name(&self, _query: &DirectoryQuery<'_>) -> Option<String> {
        None
    }

    fn time_zones(&self, query: &DirectoryQuery<'_>) -> Vec<String>;
}

struct RegionEntry {
    id: &'static str,
    name: &'static str,
    zones: &'static [&'static str],
}

static REGIONS: &[RegionEntry] = &[
    RegionEntry { id: "AE", name: "United Arab Emirates", zones: &["Asia/Dubai"] },
    RegionEntry { id: "AR", name: "Argentina", zones: &["America/Argentina/Buenos_Aires"] },
    RegionEntry { id: "AT", name: "Austria", zones: &["Europe/Vienna"] },
    RegionEntry {
        id: "AU",
        name: "Australia",
        zones: &[
            "Australia/Adelaide",
            "Australia/Brisbane",
            "Australia/Darwin",
            "Australia/Melbourne",
            "Australia/Perth",
            "Australia/Sydney",
        ],
    },
    RegionEntry { id: "BD", name: "Bangladesh", zones: &["Asia/Dhaka"] },
    RegionEntry { id: "BE", name: "Belgium", zones: &["Europe/Brussels"] },
    RegionEntry {
        id: "BR",
        name: "Brazil",
        zones: &["America/Manaus", "America/Noronha", "America/Rio_Branco", "America/Sao_Paulo"],
    },
    RegionEntry {
        id: "CA",
        name: "Canada",
        zones: &[
            "America/Edmonton",
            "America/Halifax",
            "America/Regina",
            "America/St_Johns",
            "America/Toronto",
            "America/Vancouver",
            "America/Winnipeg",
        ],
    },
    RegionEntry { id: "CH", name: "Switzerland", zones: &["Europe/Zurich"] },
    RegionEntry { id: "CL", name: "Chile", zones: &["America/Santiago", "Pacific/Easter"] },
    RegionEntry { id: "CN", name: "China", zones: &["Asia/Shanghai"] },
    RegionEntry { id: "CO", name: "Colombia", zones: &["America/Bogota"] },
    RegionEntry { id: "CZ", name: "Czech Republic", zones: &["Europe/Prague"] },
    RegionEntry { id: "DE", name: "Germany", zones: &["Europe/Berlin"] },
    RegionEntry { id: "DK", name: "Denmark", zones: &["Europe/Copenhagen"] },
    RegionEntry { id: "EG", name: "Egypt", zones: &["Africa/Cairo"] },
    RegionEntry { id: "ES", name: "Spain", zones: &["Atlantic/Canary", "Europe/Madrid"] },
    RegionEntry { id: "FI", name: "Finland", zones: &["Europe/Helsinki"] },
    RegionEntry { id: "FR", name: "France", zones: &["Europe/Paris"] },
    RegionEntry { id: "GB", name: "United Kingdom", zones: &["Europe/London"] },
    RegionEntry { id: "GR", name: "Greece", zones: &["Europe/Athens"] },
    RegionEntry { id: "HK", name: "Hong Kong", zones: &["Asia/Hong_Kong"] },
    RegionEntry {
        id: "ID",
        name: "Indonesia",
        zones: &["Asia/Jakarta", "Asia/Jayapura", "Asia/Makassar"],
    },
    RegionEntry { id: "IE", name: "Ireland", zones: &["Europe/Dublin"] },
    RegionEntry { id: "IL", name: "Israel", zones: &["Asia/Jerusalem"] },
    RegionEntry { id: "IN", name: "India", zones: &["Asia/Calcutta"] },
    RegionEntry { id: "IT", name: "Italy", zones: &["Europe/Rome"] },
    RegionEntry { id: "JP", name: "Japan", zones: &["Asia/Tokyo"] },
    RegionEntry { id: "KE", name: "Kenya", zones: &["Africa/Nairobi"] },
    RegionEntry { id: "KR", name: "South Korea", zones: &["Asia/Seoul"] },
    RegionEntry { id: "LK", name: "Sri Lanka", zones: &["Asia/Colombo"] },
    RegionEntry { id: "MA", name: "Morocco", zones: &["Africa/Casablanca"] },
    RegionEntry {
        id: "MX",
        name: "Mexico",
        zones: &["America/Cancun", "America/Chihuahua", "America/Mexico_City", "America/Tijuana"],
    },
    RegionEntry { id: "MY", name: "Malaysia", zones: &["Asia/Kuala_Lumpur"] },
    RegionEntry { id: "NG", name: "Nigeria", zones: &["Africa/Lagos"] },
    RegionEntry { id: "NL", name: "Netherlands", zones: &["Europe/Amsterdam"] },
    RegionEntry { id: "NO", name: "Norway", zones: &["Europe/Oslo"] },
    RegionEntry { id: "NP", name: "Nepal", zones: &["Asia/Katmandu"] },
    RegionEntry { id: "NZ", name: "New Zealand", zones: &["Pacific/Auckland"] },
    RegionEntry { id: "PE", name: "Peru", zones: &["America/Lima"] },
    RegionEntry { id: "PH", name: "Philippines", zones: &["Asia/Manila"] },
    RegionEntry { id: "PK", name: "Pakistan", zones: &["Asia/Karachi"] },
    RegionEntry { id: "PL", name: "Poland", zones: &["Europe/Warsaw"] },
    RegionEntry { id: "PT", name: "Portugal", zones: &["Atlantic/Azores", "Europe/Lisbon"] },
    RegionEntry {
        id: "RU",
        name: "Russia",
        zones: &["Asia/Novosibirsk", "Asia/Vladivostok", "Asia/Yekaterinburg", "Europe/Moscow"],
    },
    RegionEntry { id: "SA", name: "Saudi Arabia", zones: &["Asia/Riyadh"] },
    RegionEntry { id: "SE", name: "Sweden", zones: &["Europe/Stockholm"] },
    RegionEntry { id: "SG", name: "Singapore", zones: &["Asia/Singapore"] },
    RegionEntry { id: "TH", name: "Thailand", zones: &["Asia/Bangkok"] },
    RegionEntry { id: "TR", name: "Turkey", zones: &["Europe/Istanbul"] },
    RegionEntry { id: "TW", name: "Taiwan", zones: &["Asia/Taipei"] },
    RegionEntry { id: "UA", name: "Ukraine", zones: &["Europe/Kiev"] },
    RegionEntry {
        id: "US",
        name: "United States",
        zones: &[
            "America/Anchorage",
            "America/Chicago",
            "America/Denver",
            "America/Los_Angeles",
            "America/New_York",
            "Pacific/Honolulu",
        ],
    },
    RegionEntry { id: "VN", name: "Vietnam", zones: &["Asia/Saigon"] },
    RegionEntry { id: "ZA", name: "South Africa", zones: &["Africa/Johannesburg"] },
];

/// Country-level facts bundled with the binary. Descriptions and zones
/// only resolve for numbers of a known type; there is no carrier data.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineDirectory;

impl OfflineDirectory {
    pub fn new() -> Self {
        Self
    }

    fn entry(region: Option<&str>) -> Option<&'static RegionEntry> {
        let region = region?;
        REGIONS.iter().find(|entry| entry.id == region)
    }
}

impl NumberDirectory for OfflineDirectory {
    fn description(&self, query: &DirectoryQuery<'_>) -> Option<String> {
        if query.class == NumberClass::Unknown {
            return None;
        }
        Self::entry(query.region).map(|entry| entry.name.to_string())
    }

    fn time_zones(&self, query: &DirectoryQuery<'_>) -> Vec<String> {
        if query.class == NumberClass::Unknown || query.region == Some(NON_GEOGRAPHIC_REGION) {
            return vec![UNKNOWN_TIMEZONE.to_string()];
        }

        Self::entry(query.region)
            .map(|entry| entry.zones.iter().map(|zone| zone.to_string()).collect())
            .unwrap_or_default()
    }
}
