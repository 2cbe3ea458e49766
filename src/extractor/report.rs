use std::fmt;

pub const ENTERED_NUMBER: &str = "📥 Entered Number";
pub const E164: &str = "🔢 E.164";
pub const NATIONAL: &str = "📞 National";
pub const INTERNATIONAL: &str = "🌍 International";
pub const RFC3966: &str = "🧩 RFC3966";
pub const MOBILE_DIAL: &str = "📱 Mobile Dial";
pub const LENGTH: &str = "🔢 Length";
pub const RAW_NATIONAL: &str = "📌 Raw National";
pub const COUNTRY: &str = "🌎 Country";
pub const REGION: &str = "🏙️ Region";
pub const COUNTRY_CODE: &str = "🌐 Country Code";
pub const REGION_CODE: &str = "🗺️ Region Code";
pub const ALL_REGIONS: &str = "🗂️ All Regions";
pub const CARRIER: &str = "📡 Carrier";
pub const CARRIER_SPECIFIC: &str = "📶 Carrier Specific";
pub const TYPE: &str = "🔠 Type";
pub const TYPE_CODE: &str = "💠 Type Code";
pub const VALID: &str = "✅ Valid";
pub const POSSIBLE: &str = "❔ Possible";
pub const INTL_DIALABLE: &str = "📞 Intl Dialable";
pub const REGION_VALID: &str = "🧭 Region Valid";
pub const EMERGENCY: &str = "🚨 Emergency";
pub const EXTENSION: &str = "🔌 Extension";
pub const ITALIAN_LEADING_ZERO: &str = "🇮🇹 Italian Leading Zero";
pub const TIMEZONES: &str = "🕓 Timezones";
pub const TIMEZONE_COUNT: &str = "⏱️ Timezone Count";
pub const UTC_SAMPLE: &str = "🕒 UTC Sample";
pub const PREFIX_3: &str = "🔢 Prefix 3";
pub const SUFFIX_4: &str = "🔢 Suffix 4";
pub const RAW_OBJECT: &str = "🧬 Raw Object";
pub const METADATA_LOADED: &str = "📚 Metadata Loaded";
pub const LIBRARY: &str = "📦 Library";
pub const ANALYZED_BY: &str = "🧠 Analyzed By";

/// Every report carries exactly these labels, in this order.
pub const SCHEMA: [&str; 33] = [
    ENTERED_NUMBER,
    E164,
    NATIONAL,
    INTERNATIONAL,
    RFC3966,
    MOBILE_DIAL,
    LENGTH,
    RAW_NATIONAL,
    COUNTRY,
    REGION,
    COUNTRY_CODE,
    REGION_CODE,
    ALL_REGIONS,
    CARRIER,
    CARRIER_SPECIFIC,
    TYPE,
    TYPE_CODE,
    VALID,
    POSSIBLE,
    INTL_DIALABLE,
    REGION_VALID,
    EMERGENCY,
    EXTENSION,
    ITALIAN_LEADING_ZERO,
    TIMEZONES,
    TIMEZONE_COUNT,
    UTC_SAMPLE,
    PREFIX_3,
    SUFFIX_4,
    RAW_OBJECT,
    METADATA_LOADED,
    LIBRARY,
    ANALYZED_BY,
];

pub const NOT_APPLICABLE: &str = "N/A";
pub const UNKNOWN: &str = "Unknown";
pub const NO_EXTENSION: &str = "None";
pub const INVALID_FORMAT_MESSAGE: &str = "❌ Invalid number format.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportValue {
    Text(String),
    Integer(u64),
    Flag(bool),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Text(text) => f.write_str(text),
            ReportValue::Integer(value) => write!(f, "{}", value),
            ReportValue::Flag(true) => f.write_str("✅"),
            ReportValue::Flag(false) => f.write_str("❌"),
        }
    }
}

impl From<String> for ReportValue {
    fn from(value: String) -> Self {
        ReportValue::Text(value)
    }
}

impl From<&str> for ReportValue {
    fn from(value: &str) -> Self {
        ReportValue::Text(value.to_string())
    }
}

impl From<u64> for ReportValue {
    fn from(value: u64) -> Self {
        ReportValue::Integer(value)
    }
}

impl From<bool> for ReportValue {
    fn from(value: bool) -> Self {
        ReportValue::Flag(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub label: &'static str,
    pub value: ReportValue,
}

/// Labeled attributes of one analyzed number, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn get(&self, label: &str) -> Option<&ReportValue> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.value)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects values by label and emits them in schema order.
#[derive(Debug)]
pub struct ReportBuilder {
    values: Vec<Option<ReportValue>>,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            values: vec![None; SCHEMA.len()],
        }
    }

    pub fn set(mut self, label: &'static str, value: impl Into<ReportValue>) -> Self {
        match SCHEMA.iter().position(|known| *known == label) {
            Some(index) => self.values[index] = Some(value.into()),
            None => log::warn!("Ignoring value for unknown report label {:?}", label),
        }
        self
    }

    pub fn missing_labels(&self) -> Vec<&'static str> {
        SCHEMA
            .iter()
            .zip(&self.values)
            .filter(|(_, value)| value.is_none())
            .map(|(label, _)| *label)
            .collect()
    }

    /// Labels never set are filled with the `Unknown` placeholder.
    pub fn build(self) -> Report {
        let missing = self.missing_labels();
        if !missing.is_empty() {
            log::warn!("Report built without values for {:?}", missing);
        }

        let entries = SCHEMA
            .iter()
            .zip(self.values)
            .map(|(label, value)| ReportEntry {
                label: *label,
                value: value.unwrap_or_else(|| ReportValue::from(UNKNOWN)),
            })
            .collect();

        Report { entries }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResult {
    pub message: String,
}

impl ErrorResult {
    pub fn invalid_format() -> Self {
        Self {
            message: INVALID_FORMAT_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Report(Report),
    Error(ErrorResult),
}

impl AnalysisOutcome {
    pub fn report(&self) -> Option<&Report> {
        match self {
            AnalysisOutcome::Report(report) => Some(report),
            AnalysisOutcome::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AnalysisOutcome::Error(_))
    }
}
