/// Shared grammars for section text
pub mod parser_utils;

use crate::error::ErrorKind;

/// A parsed game constants document, seen as the immediate children of its root element.
pub trait ConstantsDocument {
    /// Text of every root child whose tag matches `tag` (ASCII case-insensitive), in document order.
    fn sections(&self, tag: &str) -> Vec<&str>;

    /// Text of the first root child whose tag matches `tag`.
    fn first_section(&self, tag: &str) -> Option<&str> {
        self.sections(tag).into_iter().next()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    tag: String,
    text: String,
}

/// [`ConstantsDocument`] backed by an XML file such as `GameConstants.xml`.
#[derive(Debug, Clone, Default)]
pub struct XmlConstantsDocument {
    sections: Vec<Section>,
}

impl XmlConstantsDocument {
    pub fn parse(xml: &str) -> Result<Self, ErrorKind> {
        let doc = roxmltree::Document::parse(xml)?;
        let sections = doc
            .root_element()
            .children()
            .filter(|node| node.is_element())
            .map(|node| Section {
                tag: node.tag_name().name().to_string(),
                text: node
                    .descendants()
                    .filter(|n| n.is_text())
                    .filter_map(|n| n.text())
                    .collect(),
            })
            .collect();

        Ok(Self { sections })
    }
}

impl ConstantsDocument for XmlConstantsDocument {
    fn sections(&self, tag: &str) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|section| section.tag.eq_ignore_ascii_case(tag))
            .map(|section| section.text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0"?>
<GameConstants>
    <!-- comment -->
    <damage_types>Damage_Default, Damage_Fighter</damage_types>
    <Damage_Types>Damage_Ignored</Damage_Types>
    <Nested><Damage_Types>Damage_Deep</Damage_Types></Nested>
    <Damage_To_Armor_Mod>Damage_Default, Armor_Default, 0.5</Damage_To_Armor_Mod>
    <DAMAGE_TO_ARMOR_MOD>Damage_Fighter,<!-- x --> Armor_Default, 2.0</DAMAGE_TO_ARMOR_MOD>
</GameConstants>"#;

    #[test]
    fn first_section_is_case_insensitive() {
        let doc = XmlConstantsDocument::parse(DOC).unwrap();
        assert_eq!(
            doc.first_section("Damage_Types"),
            Some("Damage_Default, Damage_Fighter")
        );
    }

    #[test]
    fn only_root_children_are_sections() {
        let doc = XmlConstantsDocument::parse(DOC).unwrap();
        assert_eq!(
            doc.sections("Damage_Types"),
            vec!["Damage_Default, Damage_Fighter", "Damage_Ignored"]
        );
    }

    #[test]
    fn section_text_skips_comments() {
        let doc = XmlConstantsDocument::parse(DOC).unwrap();
        assert_eq!(
            doc.sections("Damage_To_Armor_Mod"),
            vec![
                "Damage_Default, Armor_Default, 0.5",
                "Damage_Fighter, Armor_Default, 2.0"
            ]
        );
    }

    #[test]
    fn missing_section() {
        let doc = XmlConstantsDocument::parse(DOC).unwrap();
        assert_eq!(doc.first_section("Armor_Types"), None);
    }

    #[test]
    fn malformed_xml() {
        let err = XmlConstantsDocument::parse("<GameConstants><Damage_Types>").unwrap_err();
        assert!(matches!(err, ErrorKind::Xml(_)));
    }
}
