mod interfaces;
mod countrynumberparser;
mod regexp_cache;
mod generated;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use countrynumberparser::{
    countrynumberparser::CountryNumberParser, Country, CountryConfig, FormatErrorReason,
    GermanNumberParser, PhoneNumber, PrefixDictionary, WrongFormatError, GERMAN_NUMBER_PARSER,
};
pub use interfaces::{AreaCodeExtractor, ExtensionExtractor, MainNumberExtractor};
pub use countrynumberparser::helper_types::ExtractedPart;
pub use regexp_cache::InvalidRegexError;
