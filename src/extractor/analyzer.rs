use crate::config::AnalysisConfig;
use crate::error::UserFriendlyError;
use crate::extractor::directory::{DirectoryQuery, NumberDirectory, OfflineDirectory};
use crate::extractor::emergency::EmergencyMatcher;
use crate::extractor::library;
use crate::extractor::report::{self as labels, AnalysisOutcome, ErrorResult, Report, ReportBuilder};
use phonenumber::{Mode, PhoneNumber};

/// Turns raw input into a report using the phone number metadata and a
/// directory for place, carrier and timezone facts.
pub struct NumberExtractor<D = OfflineDirectory> {
    directory: D,
    emergency: EmergencyMatcher,
    library_label: String,
    analyst: String,
}

impl NumberExtractor<OfflineDirectory> {
    pub fn new(settings: &AnalysisConfig) -> Self {
        Self::with_directory(settings, OfflineDirectory::new())
    }
}

impl Default for NumberExtractor<OfflineDirectory> {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl<D: NumberDirectory> NumberExtractor<D> {
    pub fn with_directory(settings: &AnalysisConfig, directory: D) -> Self {
        Self {
            directory,
            emergency: EmergencyMatcher::for_region(&settings.emergency_region),
            library_label: settings.library_label.clone(),
            analyst: settings.analyst.clone(),
        }
    }

    /// Parse failures become an `ErrorResult`; nothing else can fail.
    pub fn analyze(&self, raw: &str) -> AnalysisOutcome {
        match library::parse(raw) {
            Ok(number) => AnalysisOutcome::Report(self.build_report(raw, &number)),
            Err(error) => {
                log::debug!("{}", error.user_message());
                AnalysisOutcome::Error(ErrorResult::invalid_format())
            }
        }
    }

    fn build_report(&self, raw: &str, number: &PhoneNumber) -> Report {
        let country_code = number.code().value();
        let national_value = number.national().value();
        let national_digits = national_value.to_string();

        let region = library::region_code(number);
        let class = library::classify(number);
        let valid = library::is_valid(number);
        let dialable = library::can_be_internationally_dialled(number);

        let query = DirectoryQuery {
            region: region.as_deref(),
            class,
            national_number: national_value,
        };
        let description = self
            .directory
            .description(&query)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| labels::UNKNOWN.to_string());
        let carrier = self
            .directory
            .carrier_name(&query)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| labels::UNKNOWN.to_string());
        let zones = self.directory.time_zones(&query);

        log::debug!(
            "Parsed +{} {} as {:?} in region {:?}",
            country_code,
            national_digits,
            class,
            region
        );

        let mobile_dial = if valid && dialable {
            library::format(&library::without_extension(number), Mode::International)
        } else {
            labels::NOT_APPLICABLE.to_string()
        };

        ReportBuilder::new()
            .set(labels::ENTERED_NUMBER, raw)
            .set(labels::E164, library::format(number, Mode::E164))
            .set(labels::NATIONAL, library::format(number, Mode::National))
            .set(labels::INTERNATIONAL, library::format(number, Mode::International))
            .set(labels::RFC3966, library::format(number, Mode::Rfc3966))
            .set(labels::MOBILE_DIAL, mobile_dial)
            .set(labels::LENGTH, national_digits.len() as u64)
            .set(labels::RAW_NATIONAL, national_value)
            .set(labels::COUNTRY, description.clone())
            .set(labels::REGION, description)
            .set(labels::COUNTRY_CODE, u64::from(country_code))
            .set(
                labels::REGION_CODE,
                region.clone().unwrap_or_else(|| labels::UNKNOWN.to_string()),
            )
            .set(labels::ALL_REGIONS, all_regions(country_code))
            .set(labels::CARRIER, carrier)
            .set(labels::CARRIER_SPECIFIC, library::carrier_code(number).is_some())
            .set(labels::TYPE, class.label())
            .set(labels::TYPE_CODE, u64::from(class.code()))
            .set(labels::VALID, valid)
            .set(labels::POSSIBLE, library::is_possible(number))
            .set(labels::INTL_DIALABLE, dialable)
            .set(labels::REGION_VALID, region.is_some() && valid)
            .set(labels::EMERGENCY, self.emergency.is_emergency_number(raw))
            .set(
                labels::EXTENSION,
                library::extension(number).unwrap_or_else(|| labels::NO_EXTENSION.to_string()),
            )
            .set(labels::ITALIAN_LEADING_ZERO, library::leading_zeros(number) > 0)
            .set(labels::TIMEZONES, join_or_not_applicable(&zones))
            .set(labels::TIMEZONE_COUNT, zones.len() as u64)
            .set(
                labels::UTC_SAMPLE,
                zones
                    .first()
                    .cloned()
                    .unwrap_or_else(|| labels::NOT_APPLICABLE.to_string()),
            )
            .set(labels::PREFIX_3, leading_chars(&national_digits, 3))
            .set(labels::SUFFIX_4, trailing_chars(&national_digits, 4))
            .set(labels::RAW_OBJECT, library::describe(number))
            .set(labels::METADATA_LOADED, library::has_metadata(number))
            .set(labels::LIBRARY, self.library_label.as_str())
            .set(labels::ANALYZED_BY, self.analyst.as_str())
            .build()
    }
}

/// Analyze with the default settings and the bundled directory.
pub fn analyze(raw: &str) -> AnalysisOutcome {
    NumberExtractor::new(&AnalysisConfig::default()).analyze(raw)
}

fn all_regions(country_code: u16) -> String {
    let regions = library::regions_for_country_code(country_code);
    if regions.is_empty() {
        labels::UNKNOWN.to_string()
    } else {
        regions.join(", ")
    }
}

fn join_or_not_applicable(values: &[String]) -> String {
    if values.is_empty() {
        labels::NOT_APPLICABLE.to_string()
    } else {
        values.join(", ")
    }
}

fn leading_chars(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

fn trailing_chars(text: &str, count: usize) -> String {
    let skip = text.chars().count().saturating_sub(count);
    text.chars().skip(skip).collect()
}
