//! Detector and unifier configuration.

use crate::candidate::AbstractKind;

/// Separators used to recognize fixed-point numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericLocale {
    pub decimal_separator: char,
    /// Thousands separator accepted in the integer part, e.g. `,` in `1,234.5`.
    pub group_separator: Option<char>,
}

impl Default for NumericLocale {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: None,
        }
    }
}

/// Resolution for columns whose sample holds no non-null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyColumnPolicy {
    /// Nullable string of length 0.
    #[default]
    String,
    /// Nullable column of the given kind with its narrowest parameters.
    As(AbstractKind),
}

/// Immutable configuration shared by the detector, sampler and unifier.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceConfig {
    /// Exact field values treated as null.
    pub null_markers: Vec<String>,
    /// Boolean literals, matched case-insensitively.
    pub boolean_literals: Vec<String>,
    pub locale: NumericLocale,
    /// Fixed-point values needing more significant digits than this are
    /// classified as floating point.
    pub max_decimal_precision: u32,
    /// `chrono` format strings tried in order.
    pub date_formats: Vec<String>,
    /// `chrono` format strings tried in order, naive or with an offset.
    pub timestamp_formats: Vec<String>,
    /// Maximum number of data rows to sample; `None` reads every row.
    pub sample_size: Option<usize>,
    pub empty_column: EmptyColumnPolicy,
}

impl InferenceConfig {
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder {
            config: InferenceConfig::default(),
        }
    }

    pub fn is_null_marker(&self, field: &str) -> bool {
        self.null_markers.iter().any(|marker| marker == field)
    }

    pub fn is_boolean_literal(&self, field: &str) -> bool {
        self.boolean_literals
            .iter()
            .any(|literal| literal.eq_ignore_ascii_case(field))
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            null_markers: to_strings(&["", "NULL", "\\N"]),
            boolean_literals: to_strings(&["true", "false", "t", "f", "1", "0"]),
            locale: NumericLocale::default(),
            max_decimal_precision: 38,
            date_formats: to_strings(&["%Y-%m-%d", "%m/%d/%Y"]),
            timestamp_formats: to_strings(&[
                "%Y-%m-%d %H:%M:%S%.f",
                "%Y-%m-%dT%H:%M:%S%.f",
                "%Y-%m-%dT%H:%M:%S%.fZ",
                "%Y-%m-%d %H:%M:%S%.f%:z",
                "%Y-%m-%dT%H:%M:%S%.f%:z",
            ]),
            sample_size: None,
            empty_column: EmptyColumnPolicy::default(),
        }
    }
}

/// Builder for [`InferenceConfig`], starting from the defaults.
#[derive(Debug, Clone)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Replace the null marker set.
    pub fn with_null_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.null_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the boolean literal set.
    pub fn with_boolean_literals<I, S>(mut self, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.boolean_literals = literals.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_locale(mut self, locale: NumericLocale) -> Self {
        self.config.locale = locale;
        self
    }

    pub fn with_max_decimal_precision(mut self, precision: u32) -> Self {
        self.config.max_decimal_precision = precision;
        self
    }

    pub fn with_date_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.date_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timestamp_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.timestamp_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Limit the number of sampled data rows (default: all rows).
    pub fn with_sample_size(mut self, rows: Option<usize>) -> Self {
        self.config.sample_size = rows;
        self
    }

    pub fn with_empty_column_policy(mut self, policy: EmptyColumnPolicy) -> Self {
        self.config.empty_column = policy;
        self
    }

    pub fn build(self) -> InferenceConfig {
        self.config
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
