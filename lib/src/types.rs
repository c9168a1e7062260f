use std::fmt;
use serde::{Deserialize, Serialize};
use crate::validate::{self, FieldValidator, ValidationResult};

/// A validated field of a delivery rule.
///
/// Parsing accepts the kebab-case name in any case, eg.
/// `"url-redirect-path"`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize,
         strum::AsRefStr, strum::EnumString, strum::EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Field {
    Name,
    CacheExpirationDuration,
    UrlRedirectPath,
    UrlRedirectQueryString,
    UrlRedirectFragment,
    UrlRewriteSourcePattern,
    UrlRewriteDestination,
}

impl Field {
    pub fn validator(self) -> FieldValidator {
        match self {
            Field::Name => validate::delivery_rule_name,
            Field::CacheExpirationDuration =>
                validate::cache_expiration_duration,
            Field::UrlRedirectPath => validate::url_redirect_path,
            Field::UrlRedirectQueryString =>
                validate::url_redirect_query_string,
            Field::UrlRedirectFragment => validate::url_redirect_fragment,
            Field::UrlRewriteSourcePattern =>
                validate::url_rewrite_source_pattern,
            Field::UrlRewriteDestination => validate::url_rewrite_destination,
        }
    }

    /// Path of the field within a single delivery rule.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["name"],
            Field::CacheExpirationDuration =>
                &["cache-expiration", "duration"],
            Field::UrlRedirectPath => &["url-redirect", "path"],
            Field::UrlRedirectQueryString => &["url-redirect", "query-string"],
            Field::UrlRedirectFragment => &["url-redirect", "fragment"],
            Field::UrlRewriteSourcePattern =>
                &["url-rewrite", "source-pattern"],
            Field::UrlRewriteDestination => &["url-rewrite", "destination"],
        }
    }

    pub fn validate(self, value: &str) -> ValidationResult {
        (self.validator())(value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// A format violation found in a field of a delivery rule.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct Diagnostic {
    /// Index of the rule in the document.
    pub rule: usize,
    pub field: Field,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delivery-rules[{}].{}: {}",
               self.rule, self.field.names().join("."), self.message)
    }
}
