//! Identifier quoting rules.

/// How a dialect folds unquoted identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFolding {
    Lower,
    Upper,
    Preserve,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRules {
    pub open_quote: char,
    pub close_quote: char,
    pub folding: CaseFolding,
    pub max_length: usize,
    /// Reserved words, compared case-insensitively.
    pub reserved: Vec<String>,
}

impl IdentifierRules {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.iter().any(|word| word.eq_ignore_ascii_case(name))
    }

    fn fold(&self, name: &str) -> String {
        match self.folding {
            CaseFolding::Lower => name.to_ascii_lowercase(),
            CaseFolding::Upper => name.to_ascii_uppercase(),
            CaseFolding::Preserve => name.to_string(),
        }
    }

    /// True unless `name` is a plain identifier that survives case folding
    /// unchanged and is not reserved.
    pub fn needs_quoting(&self, name: &str) -> bool {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return true;
        };
        let plain = (first.is_ascii_alphabetic() || first == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        !plain || self.is_reserved(name) || self.fold(name) != name
    }

    /// Quote `name` if required, doubling embedded closing quotes.
    pub fn quote(&self, name: &str) -> String {
        if !self.needs_quoting(name) {
            return name.to_string();
        }
        let close = self.close_quote.to_string();
        let escaped = name.replace(self.close_quote, &close.repeat(2));
        format!("{}{escaped}{}", self.open_quote, self.close_quote)
    }
}
