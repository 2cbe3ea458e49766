use strum::EnumIter;

/// Number type categories with the numeric codes used in the report.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberClass {
    FixedLine,
    Mobile,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Voicemail,
    Unknown,
}

impl NumberClass {
    pub const UNKNOWN_CODE: u8 = 99;

    pub fn code(self) -> u8 {
        match self {
            NumberClass::FixedLine => 0,
            NumberClass::Mobile => 1,
            NumberClass::FixedLineOrMobile => 2,
            NumberClass::TollFree => 3,
            NumberClass::PremiumRate => 4,
            NumberClass::SharedCost => 5,
            NumberClass::Voip => 6,
            NumberClass::PersonalNumber => 7,
            NumberClass::Pager => 8,
            NumberClass::Uan => 9,
            NumberClass::Voicemail => 10,
            NumberClass::Unknown => Self::UNKNOWN_CODE,
        }
    }

    /// Any code outside the table falls back to `Unknown`.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => NumberClass::FixedLine,
            1 => NumberClass::Mobile,
            2 => NumberClass::FixedLineOrMobile,
            3 => NumberClass::TollFree,
            4 => NumberClass::PremiumRate,
            5 => NumberClass::SharedCost,
            6 => NumberClass::Voip,
            7 => NumberClass::PersonalNumber,
            8 => NumberClass::Pager,
            9 => NumberClass::Uan,
            10 => NumberClass::Voicemail,
            _ => NumberClass::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NumberClass::FixedLine => "📞 FIXED_LINE",
            NumberClass::Mobile => "📱 MOBILE",
            NumberClass::FixedLineOrMobile => "📱📞 MOBILE/FIXED",
            NumberClass::TollFree => "🆓 TOLL_FREE",
            NumberClass::PremiumRate => "💸 PREMIUM_RATE",
            NumberClass::SharedCost => "🤝 SHARED_COST",
            NumberClass::Voip => "🌐 VOIP",
            NumberClass::PersonalNumber => "👤 PERSONAL_NUMBER",
            NumberClass::Pager => "📟 PAGER",
            NumberClass::Uan => "🏢 UAN",
            NumberClass::Voicemail => "📤 VOICEMAIL",
            NumberClass::Unknown => "❓ UNKNOWN",
        }
    }
}

impl From<phonenumber::Type> for NumberClass {
    fn from(kind: phonenumber::Type) -> Self {
        use phonenumber::Type;

        match kind {
            Type::FixedLine => NumberClass::FixedLine,
            Type::Mobile => NumberClass::Mobile,
            Type::FixedLineOrMobile => NumberClass::FixedLineOrMobile,
            Type::TollFree => NumberClass::TollFree,
            Type::PremiumRate => NumberClass::PremiumRate,
            Type::SharedCost => NumberClass::SharedCost,
            Type::Voip => NumberClass::Voip,
            Type::PersonalNumber => NumberClass::PersonalNumber,
            Type::Pager => NumberClass::Pager,
            Type::Uan => NumberClass::Uan,
            Type::Voicemail => NumberClass::Voicemail,
            _ => NumberClass::Unknown,
        }
    }
}

/// Display label for a raw type code.
pub fn label_for_code(code: u8) -> &'static str {
    NumberClass::from_code(code).label()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_codes_round_trip_through_table() {
        for class in NumberClass::iter() {
            assert_eq!(NumberClass::from_code(class.code()), class);
        }
    }

    #[test]
    fn test_unmapped_codes_fall_back_to_unknown() {
        assert_eq!(label_for_code(11), "❓ UNKNOWN");
        assert_eq!(label_for_code(42), "❓ UNKNOWN");
        assert_eq!(label_for_code(u8::MAX), "❓ UNKNOWN");
        assert_eq!(label_for_code(NumberClass::UNKNOWN_CODE), "❓ UNKNOWN");
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: std::collections::HashSet<_> = NumberClass::iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), NumberClass::iter().count());
    }

    #[test]
    fn test_library_type_mapping() {
        assert_eq!(NumberClass::from(phonenumber::Type::Mobile), NumberClass::Mobile);
        assert_eq!(NumberClass::from(phonenumber::Type::Unknown), NumberClass::Unknown);
    }

    #[test]
    fn test_mobile_label() {
        assert_eq!(NumberClass::Mobile.code(), 1);
        assert_eq!(NumberClass::Mobile.label(), "📱 MOBILE");
    }
}
