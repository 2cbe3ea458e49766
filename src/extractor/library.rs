//! Thin wrappers over the `phonenumber` crate.
//!
//! Every call into the numbering-plan metadata goes through here so the
//! rest of the extractor only sees plain values.

use crate::error::{AnalyzerError, Result};
use crate::extractor::classification::NumberClass;
use phonenumber::metadata::{Descriptor, Metadata, DATABASE};
use phonenumber::{Mode, PhoneNumber, Type};
use regex::Regex;

/// Shortest and longest national significant numbers accepted anywhere.
const MIN_NSN_LENGTH: usize = 2;
const MAX_NSN_LENGTH: usize = 17;

/// Parse without a default region, so input must carry its country code.
pub fn parse(raw: &str) -> Result<PhoneNumber> {
    phonenumber::parse(None, raw).map_err(|source| AnalyzerError::InvalidNumber {
        input: raw.to_string(),
        source,
    })
}

pub fn format(number: &PhoneNumber, mode: Mode) -> String {
    phonenumber::format(number).mode(mode).to_string()
}

/// Region id the metadata uses for non-geographical entities such as +800.
pub const NON_GEOGRAPHIC_REGION: &str = "001";

/// Metadata of the region the number belongs to.
///
/// Regions sharing a calling code are told apart by their leading digits,
/// or by the number having a known type there, always on the zero-padded
/// national significant number.
pub fn region_metadata(number: &PhoneNumber) -> Option<&'static Metadata> {
    let candidates = DATABASE.by_code(&number.code().value())?;
    if candidates.len() == 1 {
        return candidates.into_iter().next();
    }

    let nsn = national_significant_number(number);
    candidates.into_iter().find(|meta| match meta.leading_digits() {
        Some(pattern) => pattern.find(&nsn).is_some_and(|m| m.start() == 0),
        None => number_type(meta, &nsn) != Type::Unknown,
    })
}

/// Metadata of the main region for the calling code, whether or not the
/// number itself resolves to a region.
fn calling_code_metadata(number: &PhoneNumber) -> Option<&'static Metadata> {
    let candidates = DATABASE.by_code(&number.code().value())?;
    candidates
        .iter()
        .find(|meta| meta.is_main_country_for_code())
        .or_else(|| candidates.first())
        .copied()
}

pub fn has_metadata(number: &PhoneNumber) -> bool {
    region_metadata(number).is_some()
}

pub fn region_code(number: &PhoneNumber) -> Option<String> {
    region_metadata(number).map(|meta| meta.id().to_string())
}

pub fn regions_for_country_code(code: u16) -> Vec<String> {
    DATABASE
        .by_code(&code)
        .map(|regions| regions.iter().map(|meta| meta.id().to_string()).collect())
        .unwrap_or_default()
}

pub fn classify(number: &PhoneNumber) -> NumberClass {
    match region_metadata(number) {
        Some(meta) => number_type(meta, &national_significant_number(number)).into(),
        None => NumberClass::Unknown,
    }
}

/// A number is valid when it resolves to a region and has a known type there.
pub fn is_valid(number: &PhoneNumber) -> bool {
    classify(number) != NumberClass::Unknown
}

/// National significant number, including any leading zeros.
pub fn national_significant_number(number: &PhoneNumber) -> String {
    let national = number.national();
    format!(
        "{}{}",
        "0".repeat(usize::from(national.zeros())),
        national.value()
    )
}

pub fn leading_zeros(number: &PhoneNumber) -> u8 {
    number.national().zeros()
}

/// Length check against the calling code's main region, local-only
/// lengths included.
pub fn is_possible(number: &PhoneNumber) -> bool {
    let Some(meta) = calling_code_metadata(number) else {
        return false;
    };

    let length = national_significant_number(number).len();
    let general = meta.descriptors().general();
    let fits = |lengths: &[u16]| lengths.iter().any(|&l| usize::from(l) == length);

    if general.possible_length().is_empty() {
        (MIN_NSN_LENGTH..=MAX_NSN_LENGTH).contains(&length)
    } else {
        fits(general.possible_length()) || fits(general.possible_local_length())
    }
}

/// Non-geographical numbers and numbers without a region are always
/// internationally diallable.
pub fn can_be_internationally_dialled(number: &PhoneNumber) -> bool {
    let meta = match region_metadata(number) {
        Some(meta) if meta.id() != NON_GEOGRAPHIC_REGION => meta,
        _ => return true,
    };

    match meta.descriptors().no_international() {
        Some(descriptor) => !matches_descriptor(descriptor, &national_significant_number(number)),
        None => true,
    }
}

/// The number as it would be dialled, without its extension.
pub fn without_extension(number: &PhoneNumber) -> PhoneNumber {
    if number.extension().is_none() {
        return number.clone();
    }

    phonenumber::parse(None, format(number, Mode::E164)).unwrap_or_else(|error| {
        log::debug!("Could not strip extension from {}: {}", number, error);
        number.clone()
    })
}

fn number_type(meta: &Metadata, nsn: &str) -> Type {
    let descriptors = meta.descriptors();
    if !matches_descriptor(descriptors.general(), nsn) {
        return Type::Unknown;
    }

    let is_match = |descriptor: Option<&Descriptor>| {
        descriptor.is_some_and(|descriptor| matches_descriptor(descriptor, nsn))
    };

    let ordered = [
        (descriptors.premium_rate(), Type::PremiumRate),
        (descriptors.toll_free(), Type::TollFree),
        (descriptors.shared_cost(), Type::SharedCost),
        (descriptors.voip(), Type::Voip),
        (descriptors.personal_number(), Type::PersonalNumber),
        (descriptors.pager(), Type::Pager),
        (descriptors.uan(), Type::Uan),
        (descriptors.voicemail(), Type::Voicemail),
    ];
    if let Some((_, kind)) = ordered.into_iter().find(|(descriptor, _)| is_match(*descriptor)) {
        return kind;
    }

    let fixed_line = descriptors.fixed_line();
    let mobile = descriptors.mobile();
    if is_match(fixed_line) {
        let same_pattern = fixed_line.map(|d| d.national_number().as_str())
            == mobile.map(|d| d.national_number().as_str());
        if same_pattern || is_match(mobile) {
            return Type::FixedLineOrMobile;
        }
        return Type::FixedLine;
    }

    if is_match(mobile) {
        return Type::Mobile;
    }

    Type::Unknown
}

/// Possible length and whole-string pattern match against one descriptor.
fn matches_descriptor(descriptor: &Descriptor, nsn: &str) -> bool {
    let lengths = descriptor.possible_length();
    if !lengths.is_empty() && !lengths.iter().any(|&l| usize::from(l) == nsn.len()) {
        return false;
    }

    full_match(descriptor.national_number().as_str(), nsn)
}

fn full_match(pattern: &str, value: &str) -> bool {
    match Regex::new(&format!("^(?:{})$", pattern)) {
        Ok(regex) => regex.is_match(value),
        Err(error) => {
            log::warn!("Skipping unusable metadata pattern {:?}: {}", pattern, error);
            false
        }
    }
}

/// Domestic carrier selection code, when the input carried one.
pub fn carrier_code(number: &PhoneNumber) -> Option<String> {
    number.carrier().map(|carrier| carrier.to_string())
}

pub fn extension(number: &PhoneNumber) -> Option<String> {
    number
        .extension()
        .map(|ext| ext.to_string())
        .filter(|ext| !ext.is_empty())
}

/// Human-readable dump of the parsed fields.
pub fn describe(number: &PhoneNumber) -> String {
    let mut out = format!(
        "Country Code: {} National Number: {}",
        number.code().value(),
        number.national().value()
    );

    let zeros = leading_zeros(number);
    if zeros > 0 {
        out.push_str(" Leading Zero(s): True");
    }
    if zeros > 1 {
        out.push_str(&format!(" Number of leading zeros: {}", zeros));
    }

    if let Some(ext) = extension(number) {
        out.push_str(&format!(" Extension: {}", ext));
    }

    if let Some(code) = carrier_code(number) {
        out.push_str(&format!(" Preferred Domestic Carrier Code: {}", code));
    }

    out
}
