mod helper_constants;
mod country_config;
mod german_number_parser;
mod prefix_dictionary;
mod phone_number;
pub mod errors;
pub mod enums;
pub mod countrynumberparser;
pub(crate) mod helper_types;

use std::sync::LazyLock;

pub use enums::Country;
pub use errors::{FormatErrorReason, WrongFormatError};
pub use country_config::CountryConfig;
pub use german_number_parser::GermanNumberParser;
pub use prefix_dictionary::PrefixDictionary;
pub use phone_number::PhoneNumber;
use crate::countrynumberparser::countrynumberparser::CountryNumberParser;

pub static GERMAN_NUMBER_PARSER: LazyLock<CountryNumberParser> = LazyLock::new(|| {
    match CountryNumberParser::new(Country::Germany) {
        Ok(parser) => parser,
        Err(err) => {
            let err_message = format!("Could not compile built-in patterns for Germany: {:?}", err);
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }
    }
});
