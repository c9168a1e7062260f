use std::path::PathBuf;
use chrono::TimeDelta;
use shellexpand;
use super::ValueParser;
use crate::validate;

#[derive(Clone, Debug)]
pub struct StringParser { }

impl ValueParser<String> for self::StringParser {
    fn parse(&self, value: &str) -> Result<String, String> {
        Ok(value.to_owned())
    }
}

pub const STRING: StringParser = StringParser {};

#[derive(Clone, Debug)]
pub struct FilePathParser { }

impl ValueParser<PathBuf> for self::FilePathParser {
    fn parse(&self, value: &str) -> Result<PathBuf, String> {
        Ok(PathBuf::from(shellexpand::tilde(value).into_owned()))
    }
}

pub const FILE_PATH: FilePathParser = FilePathParser {};

/// Parses a cache expiration duration in `[d.]hh:mm:ss` format.
#[derive(Clone, Debug)]
pub struct CacheDurationParser { }

impl ValueParser<TimeDelta> for self::CacheDurationParser {
    fn parse(&self, value: &str) -> Result<TimeDelta, String> {
        validate::cache_expiration_duration(value).into_result()?;

        let (days, hms) = value.split_once('.').unwrap_or(("0", value));
        let out_of_range = || format!("cache duration out of range: {value}");
        let days = days.parse::<i64>()
            .map_err(|_| out_of_range())?;
        let secs = hms.split(':')
            .map(|part| part.parse::<i64>()
                .map_err(|e| format!("invalid cache duration ({value}): {e}")))
            .try_fold(0, |total, part| part.map(|part| total * 60 + part))?;

        TimeDelta::try_days(days)
            .and_then(|d| d.checked_add(&TimeDelta::seconds(secs)))
            .ok_or_else(out_of_range)
    }
}

pub const CACHE_DURATION: CacheDurationParser = CacheDurationParser {};
