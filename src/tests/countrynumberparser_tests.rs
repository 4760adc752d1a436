use std::sync::Arc;

use crate::{
    countrynumberparser::{
        countrynumberparser::CountryNumberParser, Country, CountryConfig, FormatErrorReason,
        GermanNumberParser, PhoneNumber, GERMAN_NUMBER_PARSER,
    },
    ExtensionExtractor, ExtractedPart,
};

use super::init_logger;

fn get_parser() -> CountryNumberParser {
    init_logger();
    CountryNumberParser::new(Country::Germany).expect("Built-in patterns should compile")
}

#[test]
fn enclosed_area_code() {
    let parser = get_parser();
    let number = parser.parse("(0201) 123456").unwrap();
    assert_eq!(number, PhoneNumber::new("49", "0201", "123456", ""));
}

#[test]
fn missing_closing_bracket() {
    let parser = get_parser();
    let err = parser.parse("(0201 123456").unwrap_err();
    assert_eq!(err.reason, FormatErrorReason::MissingClosingBracket);
    assert_eq!(err.rest, "(0201 123456");
    assert_eq!(err.to_string(), "(0201 123456 (missing closing bracket)");
}

#[test]
fn unrecognized_prefix() {
    let parser = get_parser();
    let err = parser.parse("99999 123456").unwrap_err();
    assert_eq!(err.reason, FormatErrorReason::NotFoundInDictionary);
    assert_eq!(err.to_string(), "99999 123456 (not found in dictionary)");
}

#[test]
fn separated_extension() {
    let parser = get_parser();
    let number = parser.parse("0201 123456-78").unwrap();
    assert_eq!(number.area_code(), "201");
    assert_eq!(number.main_number(), "123456");
    assert_eq!(number.extension(), "78");
}

#[test]
fn long_last_group_is_not_an_extension() {
    let parser = get_parser();
    let number = parser.parse("0201/123-456-7890123456789").unwrap();
    assert_eq!(number.area_code(), "201");
    assert_eq!(number.main_number(), "1234567890123456789");
    assert_eq!(number.extension(), "");
}

#[test]
fn main_number_without_separator() {
    let parser = get_parser();
    let number = parser.parse("0201 1234567").unwrap();
    assert_eq!(number, PhoneNumber::new("49", "201", "1234567", ""));
}

#[test]
fn common_german_notations() {
    let parser = get_parser();
    let cases = [
        ("030 1234567", ("30", "1234567", "")),
        ("030/1234567", ("30", "1234567", "")),
        ("030-1234567-12", ("30", "1234567", "12")),
        ("(030) 1234567 - 12", ("030", "1234567", "12")),
        ("089 / 123456", ("89", "123456", "")),
        ("0711 12345 / 0", ("711", "12345", "0")),
        ("0151 12345678", ("151", "12345678", "")),
        ("035027 1234", ("35027", "1234", "")),
        ("  0221 9876543  ", ("221", "9876543", "")),
        ("06131 (123456)", ("6131", "123456", "")),
        ("0800 1234567", ("800", "1234567", "")),
    ];
    for (input, (area_code, main_number, extension)) in cases {
        let number = parser.parse(input).unwrap();
        assert_eq!(number.country_code(), "49", "{input}");
        assert_eq!(number.area_code(), area_code, "{input}");
        assert_eq!(number.main_number(), main_number, "{input}");
        assert_eq!(number.extension(), extension, "{input}");
    }
}

#[test]
fn area_codes_of_every_length() {
    let parser = get_parser();
    let area_codes = [
        "30", "89",
        "221", "341", "511", "621", "711", "911",
        "2041", "3641", "4131", "5551", "6131", "7031", "8031", "9131",
        "33203", "34202", "35027", "36601", "38203", "39291",
        "151", "176",
    ];
    for area_code in area_codes {
        let input = format!("0{area_code} 12345");
        let number = parser.parse(&input).unwrap();
        assert_eq!(number.area_code(), area_code, "{input}");
        assert_eq!(number.main_number(), "12345", "{input}");
    }
}

#[test]
fn whitespace_in_enclosed_area_code() {
    let parser = get_parser();
    let number = parser.parse("( 0201 ) 123-45").unwrap();
    assert_eq!(number, PhoneNumber::new("49", "0201", "123", "45"));
}

#[test]
fn empty_enclosure_is_rejected() {
    let parser = get_parser();
    let err = parser.parse("() 123456").unwrap_err();
    assert_eq!(err.reason, FormatErrorReason::NotFoundInDictionary);
    assert_eq!(err.rest, "() 123456");
}

#[test]
fn unmatched_bracket_ends_up_in_extension() {
    let parser = get_parser();
    let number = parser.parse("0201 123456 (78").unwrap();
    assert_eq!(number.main_number(), "123456");
    assert_eq!(number.extension(), "(78");
}

#[test]
fn three_short_groups_keep_only_first_in_main_number() {
    let parser = get_parser();
    let number = parser.parse("0201 123 456 / 789").unwrap();
    assert_eq!(number.main_number(), "123");
    assert_eq!(number.extension(), "789");
}

#[test]
fn empty_input_is_rejected() {
    let parser = get_parser();
    let err = parser.parse("   ").unwrap_err();
    assert_eq!(err.reason, FormatErrorReason::NotFoundInDictionary);
    assert_eq!(err.rest, "");
}

#[test]
fn area_code_only() {
    let parser = get_parser();
    let number = parser.parse("0201").unwrap();
    assert_eq!(number, PhoneNumber::new("49", "201", "", ""));
}

#[test]
fn shared_parser_matches_new_one() {
    let parser = get_parser();
    let input = "(0201) 123456-78";
    assert_eq!(GERMAN_NUMBER_PARSER.parse(input), parser.parse(input));
    assert_eq!(GERMAN_NUMBER_PARSER.country_code(), "49");
}

#[test]
fn custom_country_data() {
    init_logger();
    let mut config = CountryConfig::for_country(Country::Germany);
    config.country_calling_code = 423;
    config.max_extension_length = 2;
    let parser = CountryNumberParser::with_german_strategy(config).unwrap();

    let number = parser.parse("0201 123-456-789").unwrap();
    assert_eq!(number.country_code(), "423");
    assert_eq!(number.main_number(), "123456789");
    assert_eq!(number.extension(), "");
}

struct PrefixedExtension;

impl ExtensionExtractor for PrefixedExtension {
    fn extract_extension<'a>(&self, rest: std::borrow::Cow<'a, str>) -> ExtractedPart<'a> {
        ExtractedPart::new(format!("x{rest}"), std::borrow::Cow::Borrowed(""))
    }
}

#[test]
fn composed_from_extractors() {
    init_logger();
    let german = Arc::new(
        GermanNumberParser::new(CountryConfig::for_country(Country::Germany)).unwrap()
    );
    let parser = CountryNumberParser::from_extractors(
        49,
        german.clone(),
        german,
        Arc::new(PrefixedExtension),
    );

    let number = parser.parse("0201 123456-78").unwrap();
    assert_eq!(number.extension(), "x78");
    assert_eq!(number.to_string(), "+49 201 123456-x78");
}

#[test]
fn supported_countries() {
    use strum::IntoEnumIterator;

    init_logger();
    for country in Country::iter() {
        let parser = CountryNumberParser::new(country).unwrap();
        assert!(!parser.country_code().is_empty(), "{}", country.region_code());
    }
}
