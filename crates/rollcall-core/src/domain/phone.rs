use crate::error::CoreError;
use crate::table::Cell;
use unicode_general_category::{get_general_category, GeneralCategory};

pub const DEFAULT_COUNTRY_CODE: &str = "91";
pub const DEFAULT_NATIONAL_DIGITS: usize = 10;
pub const MAX_NATIONAL_DIGITS: usize = 15;

const TRUNK_PREFIX: char = '0';

/// Single-country dialing convention used to shorten phone numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRules {
    country_code: String,
    national_digits: usize,
}

impl PhoneRules {
    pub fn new(country_code: &str, national_digits: usize) -> Result<Self, CoreError> {
        let code = country_code.trim();
        let code = code.strip_prefix('+').unwrap_or(code);
        if code.is_empty() || !code.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(CoreError::InvalidCountryCode(country_code.to_string()));
        }
        if national_digits == 0 || national_digits > MAX_NATIONAL_DIGITS {
            return Err(CoreError::InvalidNationalDigits(national_digits));
        }
        Ok(Self {
            country_code: code.to_string(),
            national_digits,
        })
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn national_digits(&self) -> usize {
        self.national_digits
    }
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            national_digits: DEFAULT_NATIONAL_DIGITS,
        }
    }
}

/// Which rule applied to a digit string. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneShape {
    TooShort,
    CountryCode,
    TrunkPrefix,
    Overlong,
    National,
}

/// `digits` is measured in chars, so non-ASCII decimal digits count as one.
pub fn classify_digits(digits: &str, rules: &PhoneRules) -> PhoneShape {
    let len = digits.chars().count();
    let national = rules.national_digits;
    if len < national {
        PhoneShape::TooShort
    } else if len > national && digits.starts_with(rules.country_code.as_str()) {
        PhoneShape::CountryCode
    } else if len == national + 1 && digits.starts_with(TRUNK_PREFIX) {
        PhoneShape::TrunkPrefix
    } else if len > national {
        PhoneShape::Overlong
    } else {
        PhoneShape::National
    }
}

pub fn clean_phone(cell: &Cell) -> Cell {
    clean_phone_with(cell, &PhoneRules::default())
}

pub fn clean_phone_with(cell: &Cell, rules: &PhoneRules) -> Cell {
    let Some(text) = cell.to_text() else {
        return Cell::Missing;
    };
    match normalize_phone(&text, rules) {
        Some(digits) => Cell::Text(digits),
        None => Cell::Missing,
    }
}

/// Keeps the decimal digits of `value`, in any script, and cuts them down to
/// the national number. Returns `None` when no digits remain.
pub fn normalize_phone(value: &str, rules: &PhoneRules) -> Option<String> {
    let digits: String = value.chars().filter(|&ch| is_decimal_digit(ch)).collect();
    let normalized = match classify_digits(&digits, rules) {
        PhoneShape::CountryCode | PhoneShape::TrunkPrefix | PhoneShape::Overlong => {
            let skip = digits.chars().count() - rules.national_digits;
            digits.chars().skip(skip).collect()
        }
        PhoneShape::TooShort | PhoneShape::National => digits,
    };

    if normalized.is_empty() {
        return None;
    }
    Some(normalized)
}

fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit() || get_general_category(ch) == GeneralCategory::DecimalNumber
}

#[cfg(test)]
mod tests {
    use super::{classify_digits, clean_phone, normalize_phone, PhoneRules, PhoneShape};
    use crate::table::Cell;

    fn rules() -> PhoneRules {
        PhoneRules::default()
    }

    #[test]
    fn normalize_phone_strips_country_code() {
        let value = normalize_phone("+91 98765 43210", &rules()).unwrap();
        assert_eq!(value, "9876543210");
    }

    #[test]
    fn normalize_phone_strips_trunk_prefix() {
        let value = normalize_phone("09876543210", &rules()).unwrap();
        assert_eq!(value, "9876543210");
    }

    #[test]
    fn normalize_phone_keeps_last_digits_of_long_numbers() {
        let value = normalize_phone("001-44-20-7946-0958", &rules()).unwrap();
        assert_eq!(value, "2079460958");
    }

    #[test]
    fn normalize_phone_returns_short_numbers_unchanged() {
        assert_eq!(normalize_phone("12345", &rules()).as_deref(), Some("12345"));
        assert_eq!(normalize_phone("(123) 45", &rules()).as_deref(), Some("12345"));
    }

    #[test]
    fn normalize_phone_rejects_values_without_digits() {
        assert!(normalize_phone("abc", &rules()).is_none());
        assert!(normalize_phone("", &rules()).is_none());
    }

    #[test]
    fn country_code_is_checked_before_trunk_prefix() {
        assert_eq!(
            classify_digits("910123456789", &rules()),
            PhoneShape::CountryCode
        );
        assert_eq!(
            classify_digits("09876543210", &rules()),
            PhoneShape::TrunkPrefix
        );
        assert_eq!(classify_digits("9876543210", &rules()), PhoneShape::National);
        assert_eq!(
            classify_digits("19876543210", &rules()),
            PhoneShape::Overlong
        );
    }

    #[test]
    fn clean_phone_maps_empty_digits_to_missing() {
        assert_eq!(clean_phone(&Cell::text("abc")), Cell::Missing);
        assert_eq!(clean_phone(&Cell::Missing), Cell::Missing);
    }

    #[test]
    fn clean_phone_handles_spreadsheet_numbers() {
        assert_eq!(
            clean_phone(&Cell::Number(919_876_543_210.0)),
            Cell::text("9876543210")
        );
    }

    #[test]
    fn normalize_phone_keeps_non_ascii_digits() {
        assert_eq!(
            clean_phone(&Cell::text("९८७६५४३२१०")),
            Cell::text("९८७६५४३२१०")
        );
        assert_eq!(
            normalize_phone("+91 ९८७६५-४३२१०", &rules()).as_deref(),
            Some("९८७६५४३२१०")
        );
        assert_eq!(
            normalize_phone("०९८७६५४३२१०", &rules()).as_deref(),
            Some("९८७६५४३२१०")
        );
        assert_eq!(
            classify_digits("०९८७६५४३२१०", &rules()),
            PhoneShape::Overlong
        );
    }

    #[test]
    fn normalize_phone_ignores_other_numeric_symbols() {
        assert_eq!(normalize_phone("½ ² Ⅻ", &rules()), None);
    }

    #[test]
    fn phone_rules_use_custom_country_code() {
        let rules = PhoneRules::new("+44", 10).unwrap();
        assert_eq!(rules.country_code(), "44");
        assert_eq!(
            normalize_phone("+44 7946 095812", &rules).as_deref(),
            Some("7946095812")
        );
    }

    #[test]
    fn phone_rules_reject_invalid_values() {
        assert!(PhoneRules::new("", 10).is_err());
        assert!(PhoneRules::new("9a", 10).is_err());
        assert!(PhoneRules::new("91", 0).is_err());
        assert!(PhoneRules::new("91", 16).is_err());
    }
}
