//! Shared winnow-based grammars for the text content of game constants sections.
//!
//! Section text is loosely formatted: entries may be separated by commas, spaces,
//! tabs or newlines in any combination, and leading/trailing separators are allowed.

use winnow::Parser;
use winnow::ascii::float;
use winnow::combinator::{preceded, repeat, terminated};
use winnow::error::ContextError;
use winnow::token::take_while;

use crate::error::ErrorKind;

/// Common result type for winnow parsers.
pub type WResult<T> = Result<T, winnow::error::ErrMode<ContextError>>;

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Consume any run of separators, including none.
pub fn separator(input: &mut &str) -> WResult<()> {
    take_while(0.., is_separator).void().parse_next(input)
}

/// A single type name such as `Damage_Fighter` or `Armor_Structure`.
pub fn type_name<'i>(input: &mut &'i str) -> WResult<&'i str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)
}

/// Zero or more type names.
pub fn type_name_list<'i>(input: &mut &'i str) -> WResult<Vec<&'i str>> {
    preceded(separator, repeat(0.., terminated(type_name, separator))).parse_next(input)
}

/// A `damage, armour, factor` record.
pub fn modifier_record<'i>(input: &mut &'i str) -> WResult<(&'i str, &'i str, f32)> {
    let damage = terminated(type_name, separator).parse_next(input)?;
    let armour = terminated(type_name, separator).parse_next(input)?;
    let factor = terminated(
        float::<_, f32, _>.verify(|factor: &f32| factor.is_finite()),
        separator,
    )
    .parse_next(input)?;
    Ok((damage, armour, factor))
}

/// Zero or more modifier records.
pub fn modifier_record_list<'i>(input: &mut &'i str) -> WResult<Vec<(&'i str, &'i str, f32)>> {
    preceded(separator, repeat(0.., modifier_record)).parse_next(input)
}

/// Run `parser` over the whole of `text`, attributing any failure to the section `tag`.
pub fn parse_section<'i, O>(
    tag: &'static str,
    text: &'i str,
    mut parser: impl FnMut(&mut &'i str) -> WResult<O>,
) -> Result<O, ErrorKind> {
    parser
        .parse(text)
        .map_err(|e| ErrorKind::SectionParse {
            tag,
            detail: format!("{e}"),
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_with_mixed_separators() {
        let text = "\n\tDamage_Default, Damage_Fighter\n  Damage_Bomber,,\n";
        let names = parse_section("Damage_Types", text, type_name_list).unwrap();
        assert_eq!(names, vec!["Damage_Default", "Damage_Fighter", "Damage_Bomber"]);
    }

    #[test]
    fn empty_text_has_no_names() {
        let names = parse_section("Armor_Types", "  \n ", type_name_list).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn stray_punctuation_is_rejected() {
        let err = parse_section("Armor_Types", "Armor_Default; Armor_Hero", type_name_list)
            .unwrap_err();
        assert!(matches!(
            err,
            ErrorKind::SectionParse {
                tag: "Armor_Types",
                ..
            }
        ));
    }

    #[test]
    fn modifier_records() {
        let text = " Damage_Fighter, Armor_Default, 0.25\nDamage_Bomber, Armor_Structure, 2 ";
        let records = parse_section("Damage_To_Armor_Mod", text, modifier_record_list).unwrap();
        assert_eq!(
            records,
            vec![
                ("Damage_Fighter", "Armor_Default", 0.25),
                ("Damage_Bomber", "Armor_Structure", 2.0),
            ]
        );
    }

    #[test]
    fn non_finite_factors_are_rejected() {
        for factor in ["nan", "NaN", "inf", "-inf", "infinity"] {
            let text = format!("Damage_Fighter, Armor_Default, {factor}");
            let err = parse_section("Damage_To_Armor_Mod", &text, modifier_record_list)
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    ErrorKind::SectionParse {
                        tag: "Damage_To_Armor_Mod",
                        ..
                    }
                ),
                "{factor} was accepted"
            );
        }
    }

    #[test]
    fn modifier_missing_factor_is_rejected() {
        let text = "Damage_Fighter, Armor_Default";
        assert!(parse_section("Damage_To_Armor_Mod", text, modifier_record_list).is_err());
    }
}
