use proptest::prelude::*;

use crate::{countrynumberparser::GERMAN_NUMBER_PARSER, generated::DE_AREA_CODES};

const SEPARATORS: &[&str] = &[" ", "-", "/", " / ", " - "];

fn area_code_strategy() -> impl Strategy<Value = String> {
    let codes: Vec<String> = DE_AREA_CODES
        .iter()
        .map(| (prefix, _) | prefix.to_string())
        .collect();
    prop::sample::select(codes)
}

/// Digit groups, each preceded by a separator.
fn groups_strategy() -> impl Strategy<Value = Vec<(String, &'static str)>> {
    prop::collection::vec(
        ("[0-9]{1,8}", prop::sample::select(SEPARATORS.to_vec())),
        1..=4,
    )
}

fn join_groups(area_code: &str, groups: &[(String, &str)]) -> String {
    let mut number = area_code.to_owned();
    for (group, separator) in groups {
        number.push_str(separator);
        number.push_str(group);
    }
    number
}

proptest! {
    #[test]
    fn area_code_is_prefix_of_input(
        area_code in area_code_strategy(),
        groups in groups_strategy(),
    ) {
        let input = join_groups(&area_code, &groups);
        let number = GERMAN_NUMBER_PARSER.parse(&input);
        prop_assert!(number.is_ok(), "Failed to parse: {}", input);

        let number = number.unwrap();
        prop_assert_eq!(number.area_code(), area_code.as_str());
        prop_assert!(input.starts_with(number.area_code()));
        prop_assert!(number.area_code().len() < input.len());
    }

    #[test]
    fn trunk_prefix_does_not_change_split(
        area_code in area_code_strategy(),
        groups in groups_strategy(),
    ) {
        let without_trunk = join_groups(&area_code, &groups);
        let with_trunk = format!("0{}", without_trunk);
        prop_assert_eq!(
            GERMAN_NUMBER_PARSER.parse(&with_trunk),
            GERMAN_NUMBER_PARSER.parse(&without_trunk)
        );
    }

    #[test]
    fn reparsing_canonical_form_is_stable(
        area_code in area_code_strategy(),
        groups in groups_strategy(),
    ) {
        let input = format!("0{}", join_groups(&area_code, &groups));
        let number = GERMAN_NUMBER_PARSER.parse(&input).unwrap();
        prop_assert!(!number.main_number().is_empty(), "Empty main number for: {}", input);

        let canonical = if number.has_extension() {
            format!("0{} {}-{}", number.area_code(), number.main_number(), number.extension())
        } else {
            format!("0{} {}", number.area_code(), number.main_number())
        };
        let reparsed = GERMAN_NUMBER_PARSER.parse(&canonical).unwrap();
        prop_assert_eq!(reparsed, number);
    }
}
