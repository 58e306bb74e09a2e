//! Per-field type detection.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{
    candidate::{IntWidth, TypeCandidate},
    config::{InferenceConfig, NumericLocale},
};

type Rule = fn(&str, &InferenceConfig) -> Option<TypeCandidate>;

/// Classification rules in precedence order. The first rule that accepts a
/// field decides its candidate; a field no rule accepts is a string.
const RULES: [(&str, Rule); 7] = [
    ("null", detect_null as Rule),
    ("boolean", detect_boolean as Rule),
    ("integer", detect_integer as Rule),
    ("decimal", detect_decimal as Rule),
    ("float", detect_float as Rule),
    ("date", detect_date as Rule),
    ("timestamp", detect_timestamp as Rule),
];

/// Classifies raw field strings into [`TypeCandidate`]s.
///
/// Detection is a pure function of the field and the configuration: no
/// state is carried between calls.
#[derive(Debug, Clone, Copy)]
pub struct Detector<'a> {
    config: &'a InferenceConfig,
}

impl<'a> Detector<'a> {
    pub fn new(config: &'a InferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a InferenceConfig {
        self.config
    }

    pub fn detect(&self, field: &str) -> TypeCandidate {
        RULES
            .iter()
            .find_map(|(_, rule)| rule(field, self.config))
            .unwrap_or(TypeCandidate::String(field.len()))
    }

    /// Name of the rule that classifies `field`, or `"string"` for the fallback.
    pub fn matching_rule(&self, field: &str) -> &'static str {
        RULES
            .iter()
            .find(|(_, rule)| rule(field, self.config).is_some())
            .map_or("string", |(name, _)| name)
    }
}

fn detect_null(field: &str, config: &InferenceConfig) -> Option<TypeCandidate> {
    config.is_null_marker(field).then_some(TypeCandidate::Null)
}

fn detect_boolean(field: &str, config: &InferenceConfig) -> Option<TypeCandidate> {
    config
        .is_boolean_literal(field)
        .then_some(TypeCandidate::Boolean)
}

fn detect_integer(field: &str, config: &InferenceConfig) -> Option<TypeCandidate> {
    let number = FixedPoint::parse(field, &config.locale)?;
    if number.fraction.is_some() || number.integer.is_empty() {
        return None;
    }
    // Values outside i64 fall through to the decimal rule.
    let value: i64 = number.signed_integer().parse().ok()?;
    Some(TypeCandidate::Integer {
        width: IntWidth::for_value(value),
        digits: number.integer_digits(),
    })
}

fn detect_decimal(field: &str, config: &InferenceConfig) -> Option<TypeCandidate> {
    let number = FixedPoint::parse(field, &config.locale)?;
    let scale = number.scale();
    let precision = number.integer_digits() + scale;
    (precision <= config.max_decimal_precision)
        .then_some(TypeCandidate::Decimal { precision, scale })
}

fn detect_float(field: &str, config: &InferenceConfig) -> Option<TypeCandidate> {
    // A fixed-point value reaching this rule exceeded the decimal threshold.
    if FixedPoint::parse(field, &config.locale).is_some() || is_scientific(field, &config.locale)
    {
        Some(TypeCandidate::Float)
    } else {
        None
    }
}

fn detect_date(field: &str, config: &InferenceConfig) -> Option<TypeCandidate> {
    config
        .date_formats
        .iter()
        .any(|format| NaiveDate::parse_from_str(field, format).is_ok())
        .then_some(TypeCandidate::Date)
}

fn detect_timestamp(field: &str, config: &InferenceConfig) -> Option<TypeCandidate> {
    config.timestamp_formats.iter().find_map(|format| {
        // Offset-bearing formats also parse as naive, so try the zoned form first.
        if DateTime::parse_from_str(field, format).is_ok() {
            Some(TypeCandidate::Timestamp { zoned: true })
        } else if NaiveDateTime::parse_from_str(field, format).is_ok() {
            Some(TypeCandidate::Timestamp {
                zoned: has_utc_designator(format),
            })
        } else {
            None
        }
    })
}

/// True if `format` matches a literal `Z` suffix, i.e. values are in UTC.
fn has_utc_designator(format: &str) -> bool {
    format.strip_suffix('Z').is_some_and(|rest| !rest.ends_with('%'))
}

fn is_scientific(field: &str, locale: &NumericLocale) -> bool {
    let Some(pos) = field.find(['e', 'E']) else {
        return false;
    };
    let (mantissa, exponent) = (&field[..pos], &field[pos + 1..]);
    let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
    FixedPoint::parse(mantissa, locale).is_some() && !exponent.is_empty() && all_digits(exponent)
}

/// A field split into sign, integer digits and optional fraction digits.
struct FixedPoint<'a> {
    negative: bool,
    /// Integer digits with group separators removed.
    integer: String,
    fraction: Option<&'a str>,
}

impl<'a> FixedPoint<'a> {
    fn parse(field: &'a str, locale: &NumericLocale) -> Option<Self> {
        let (negative, body) = if let Some(rest) = field.strip_prefix('-') {
            (true, rest)
        } else {
            (false, field.strip_prefix('+').unwrap_or(field))
        };

        let (integer_part, fraction) = match body.split_once(locale.decimal_separator) {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (body, None),
        };

        let integer = strip_group_separators(integer_part, locale.group_separator)?;
        if fraction.is_some_and(|f| !all_digits(f)) {
            return None;
        }
        if integer.is_empty() && fraction.is_none_or(str::is_empty) {
            return None;
        }

        Some(Self {
            negative,
            integer,
            fraction,
        })
    }

    fn signed_integer(&self) -> String {
        if self.negative {
            format!("-{}", self.integer)
        } else {
            self.integer.clone()
        }
    }

    fn integer_digits(&self) -> u32 {
        self.integer.trim_start_matches('0').len() as u32
    }

    fn scale(&self) -> u32 {
        self.fraction.map_or(0, str::len) as u32
    }
}

fn strip_group_separators(part: &str, separator: Option<char>) -> Option<String> {
    match separator {
        Some(sep) if part.contains(sep) => {
            let mut groups = part.split(sep);
            let first = groups.next()?;
            if first.is_empty() || first.len() > 3 || !all_digits(first) {
                return None;
            }
            let mut digits = first.to_string();
            for group in groups {
                if group.len() != 3 || !all_digits(group) {
                    return None;
                }
                digits.push_str(group);
            }
            Some(digits)
        }
        _ => all_digits(part).then(|| part.to_string()),
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
