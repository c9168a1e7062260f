//! Format rules for the textual fields of a delivery rule.
//!
//! Each validator checks one value against the format the CDN service accepts
//! for that field, and explains a violation in a single user-facing sentence.
//! Validators are pure: the same input always gives the same result, and they
//! may be called from any number of threads.
//!
//! The diagnostic texts are part of the interface and must not be reworded.

use std::sync::LazyLock;
use regex::Regex;

pub const DELIVERY_RULE_NAME_MESSAGE: &str =
    "The Delivery Rule Name must start with a letter any may only contain \
     letters and numbers.";
pub const CACHE_EXPIRATION_DURATION_MESSAGE: &str =
    "The Cache duration must be in this format [d.]hh:mm:ss.";
pub const URL_REDIRECT_PATH_MESSAGE: &str =
    "The Url Redirect Path must start with a slash.";
pub const URL_REDIRECT_QUERY_STRING_LENGTH_MESSAGE: &str =
    "The Url Query String's max length is 100.";
pub const URL_REDIRECT_QUERY_STRING_LEADING_MESSAGE: &str =
    "The Url Query String must not start with a question mark or ampersand.";
pub const URL_REDIRECT_QUERY_STRING_FORMAT_MESSAGE: &str =
    "The Url Query String must be in <key>=<value> format and separated by an \
     ampersand.";
pub const URL_REDIRECT_FRAGMENT_MESSAGE: &str =
    "The Url Fragment must not start with a hash.";
pub const URL_REWRITE_SOURCE_PATTERN_MESSAGE: &str =
    "The Url Rewrite Source Pattern must start with a slash and can not have \
     more than 260 characters.";
pub const URL_REWRITE_DESTINATION_MESSAGE: &str =
    "The Url Rewrite Destination must start with a slash and can not have more \
     than 260 characters.";

/// Maximum length of a redirect query string, in bytes.
pub const URL_REDIRECT_QUERY_STRING_MAX_LEN: usize = 100;

/// Outcome of validating one value.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ValidationResult {
    Valid,
    /// Build with [`ValidationResult::invalid`]; an empty list is treated as
    /// valid.
    Invalid(Vec<String>),
}

impl ValidationResult {
    pub fn invalid<S: Into<String>>(message: S) -> ValidationResult {
        ValidationResult::Invalid(vec![message.into()])
    }

    pub fn is_valid(&self) -> bool {
        self.messages().is_empty()
    }

    /// Diagnostics in the order they were produced; empty when valid.
    pub fn messages(&self) -> &[String] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(messages) => messages,
        }
    }

    /// Convert to a `Result`, joining multiple diagnostics with `; `.
    pub fn into_result(self) -> Result<(), String> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(messages) if messages.is_empty() =>
                Ok(()),
            ValidationResult::Invalid(messages) => Err(messages.join("; ")),
        }
    }
}

/// A validator for a single field.
pub type FieldValidator = fn(&str) -> ValidationResult;

/// Validator requiring the whole value to match a regular expression.
///
/// When no message is given, the diagnostic names the field's label and the
/// pattern.
#[derive(Clone, Debug)]
pub struct StringMatch {
    re: Regex,
    message: Option<String>,
}

impl StringMatch {
    pub fn new(pattern: &str, message: Option<&str>)
    -> Result<StringMatch, String> {
        let re = Regex::new(pattern)
            .map_err(|e| format!("invalid pattern ({pattern:?}): {e}"))?;
        Ok(StringMatch { re, message: message.map(str::to_owned) })
    }

    /// Construct from a pattern fixed at compile time.
    fn fixed(pattern: &'static str, message: &'static str) -> StringMatch {
        StringMatch::new(pattern, Some(message)).expect("valid regex")
    }

    pub fn pattern(&self) -> &str {
        self.re.as_str()
    }

    pub fn validate(&self, value: &str, label: &str) -> ValidationResult {
        if self.re.is_match(value) {
            return ValidationResult::Valid;
        }
        match &self.message {
            Some(message) => ValidationResult::invalid(message.as_str()),
            None => ValidationResult::invalid(format!(
                "expected value of {label} to match regular expression {:?}",
                self.re.as_str())),
        }
    }
}

// digit classes are spelled out: \d would also match non-ASCII digits
static DELIVERY_RULE_NAME: LazyLock<StringMatch> = LazyLock::new(|| {
    StringMatch::fixed(r"^[a-zA-Z][a-zA-Z0-9]*$", DELIVERY_RULE_NAME_MESSAGE)
});

static CACHE_EXPIRATION_DURATION: LazyLock<StringMatch> = LazyLock::new(|| {
    StringMatch::fixed(
        r"^([0-9]+\.)?([0-1][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]$",
        CACHE_EXPIRATION_DURATION_MESSAGE)
});

static URL_REDIRECT_PATH: LazyLock<StringMatch> = LazyLock::new(|| {
    StringMatch::fixed(r"^(/.*)?$", URL_REDIRECT_PATH_MESSAGE)
});

static URL_REDIRECT_QUERY_STRING_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^?&]+=[^?&]+$").expect("valid regex")
});

static URL_REDIRECT_FRAGMENT: LazyLock<StringMatch> = LazyLock::new(|| {
    StringMatch::fixed(r"^([^#].*)?$", URL_REDIRECT_FRAGMENT_MESSAGE)
});

static URL_REWRITE_SOURCE_PATTERN: LazyLock<StringMatch> = LazyLock::new(|| {
    StringMatch::fixed(r"^/[^\n]{0,259}$", URL_REWRITE_SOURCE_PATTERN_MESSAGE)
});

static URL_REWRITE_DESTINATION: LazyLock<StringMatch> = LazyLock::new(|| {
    StringMatch::fixed(r"^/[^\n]{0,259}$", URL_REWRITE_DESTINATION_MESSAGE)
});

/// Letter first, then letters and digits.
pub fn delivery_rule_name(value: &str) -> ValidationResult {
    DELIVERY_RULE_NAME.validate(value, "name")
}

/// `[d.]hh:mm:ss`, with hours up to 23 and any number of days.
pub fn cache_expiration_duration(value: &str) -> ValidationResult {
    CACHE_EXPIRATION_DURATION.validate(value, "duration")
}

/// Empty, or starting with `/`.
pub fn url_redirect_path(value: &str) -> ValidationResult {
    URL_REDIRECT_PATH.validate(value, "path")
}

/// `&`-separated `key=value` pairs, without a leading `?`.
///
/// Only the first violation is reported, checking length, then the leading
/// character, then each pair in order. Empty pairs (`a=b&&c=d`) are skipped.
pub fn url_redirect_query_string(value: &str) -> ValidationResult {
    if value.len() > URL_REDIRECT_QUERY_STRING_MAX_LEN {
        return ValidationResult::invalid(
            URL_REDIRECT_QUERY_STRING_LENGTH_MESSAGE);
    }

    if value.starts_with(['?', '&']) {
        return ValidationResult::invalid(
            URL_REDIRECT_QUERY_STRING_LEADING_MESSAGE);
    }

    let bad_pair = value.split('&')
        .filter(|pair| !pair.is_empty())
        .any(|pair| !URL_REDIRECT_QUERY_STRING_PAIR.is_match(pair));
    if bad_pair {
        ValidationResult::invalid(URL_REDIRECT_QUERY_STRING_FORMAT_MESSAGE)
    } else {
        ValidationResult::Valid
    }
}

/// Empty, or not starting with `#`.
pub fn url_redirect_fragment(value: &str) -> ValidationResult {
    URL_REDIRECT_FRAGMENT.validate(value, "fragment")
}

/// Starting with `/`, single line, at most 260 characters.
pub fn url_rewrite_source_pattern(value: &str) -> ValidationResult {
    URL_REWRITE_SOURCE_PATTERN.validate(value, "source-pattern")
}

/// Same format as [`url_rewrite_source_pattern`].
pub fn url_rewrite_destination(value: &str) -> ValidationResult {
    URL_REWRITE_DESTINATION.validate(value, "destination")
}
