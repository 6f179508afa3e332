//! Check operation - schema validation and derived-name listing.

use crudhook_codegen_typescript::{CrudOp, Generator, GeneratorOptions, LanguageCodegen};
use crudhook_schema::{EntityName, Schema};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Input has already been parsed; this only reports what generation would produce.
pub fn check(entity: &EntityName, schema: Schema, options: GeneratorOptions) -> CheckReport {
    let generator = Generator::new(entity, schema, options);
    let names = generator.names();

    let operations: Vec<&str> = CrudOp::ALL.iter().map(|op| names.operation(*op)).collect();
    let hooks: Vec<&str> = CrudOp::ALL.iter().map(|op| names.hook(*op)).collect();
    let derived = vec![
        ("entity type".to_string(), names.entity_type.clone()),
        ("api client".to_string(), names.api_client.clone()),
        ("url segment".to_string(), format!("{}/", names.collection)),
        ("query key".to_string(), names.query_key().to_string()),
        ("operations".to_string(), operations.join(", ")),
        ("hooks".to_string(), hooks.join(", ")),
    ];

    CheckReport {
        entity: entity.to_string(),
        fields: generator
            .schema()
            .fields()
            .map(|f| (f.name.clone(), f.ty.clone()))
            .collect(),
        derived,
        artifacts: generator.preview().into_iter().map(|f| f.path).collect(),
        manifest_line: generator.manifest_line(),
    }
}

#[cfg(test)]
mod tests {
    use crudhook_schema::Field;

    use super::*;

    #[test]
    fn test_fields_keep_schema_order() {
        let schema = Schema::from_fields([Field::new("email", "string"), Field::new("id", "string")]);
        let report = check(
            &EntityName::new("User").unwrap(),
            schema,
            GeneratorOptions::default(),
        );

        assert_eq!(
            report.fields,
            vec![
                ("email".to_string(), "string".to_string()),
                ("id".to_string(), "string".to_string()),
            ]
        );
        assert_eq!(report.artifacts.len(), 4);
        assert!(
            report
                .derived
                .contains(&("query key".to_string(), "users".to_string()))
        );
    }
}
