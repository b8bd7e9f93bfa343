use proptest::prelude::*;

use enterprise_forge_codegen::{
    generate_entity, generate_entity_key, normalize_whitespace, GeneratorOptions,
};
use enterprise_forge_core::types::{Entity, EntityKey, Field, NameType};

fn identifier() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9_]{0,10}"
}

fn data_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("int".to_string()),
        Just("long".to_string()),
        Just("string".to_string()),
        Just("Guid".to_string()),
        Just("DateTime?".to_string()),
    ]
}

fn fields() -> impl Strategy<Value = Vec<Field>> {
    proptest::collection::btree_map(identifier(), data_type(), 0..8).prop_map(|by_name| {
        by_name
            .into_iter()
            .map(|(name, ty)| Field::parse(&name, &ty).unwrap())
            .collect()
    })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in "[ a-z{}\t\r\n]{0,64}") {
        let once = normalize_whitespace(&text);
        prop_assert_eq!(normalize_whitespace(&once), once.clone());
    }

    #[test]
    fn normalized_lines_have_no_trailing_whitespace(text in "[ a-z{}\t\r\n]{0,64}") {
        let normalized = normalize_whitespace(&text);
        for line in normalized.lines() {
            prop_assert_eq!(line, line.trim_end());
        }
        prop_assert!(!normalized.contains("\n\n\n"));
        prop_assert!(normalized.is_empty() || (normalized.ends_with('\n') && !normalized.ends_with("\n\n")));
    }

    #[test]
    fn class_has_one_property_per_field(name in identifier(), fields in fields()) {
        let entity = Entity::new(NameType::new(name.clone()).unwrap(), fields.clone()).unwrap();
        let source = generate_entity(&entity, &GeneratorOptions::default());

        let declared = format!("public class {name}");
        prop_assert!(source.contains(&declared));
        let properties: Vec<String> = source
            .lines()
            .filter(|l| l.ends_with("{ get; set; }"))
            .map(|l| l.trim().to_string())
            .collect();
        let expected: Vec<String> = fields
            .iter()
            .map(|f| format!("public {} {} {{ get; set; }}", f.data_type, f.name))
            .collect();
        prop_assert_eq!(properties, expected);
    }

    #[test]
    fn record_lists_fields_in_order(name in identifier(), fields in fields()) {
        let key = EntityKey::new(NameType::new(name.clone()).unwrap(), fields.clone()).unwrap();
        let source = generate_entity_key(&key, &GeneratorOptions::default());

        let parameters: Vec<String> = fields
            .iter()
            .map(|f| format!("{} {}", f.data_type, f.name))
            .collect();
        let declared = format!("public sealed record {name}({});", parameters.join(", "));
        prop_assert!(source.contains(&declared));
    }

    #[test]
    fn generated_source_is_already_normalized(name in identifier(), fields in fields()) {
        let entity = Entity::new(NameType::new(name).unwrap(), fields).unwrap();
        let source = generate_entity(&entity, &GeneratorOptions::default());
        prop_assert_eq!(normalize_whitespace(&source), source);
    }
}
