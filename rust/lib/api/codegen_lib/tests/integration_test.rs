/// Integration test for the three generators

use modelgen_codegen_lib::angular_form::{generate_form, AngularFormGenerator};
use modelgen_codegen_lib::schema::{generate_schema, SchemaGenerator};
use modelgen_codegen_lib::typescript_types::{generate_model, TypeScriptTypesGenerator};
use modelgen_codegen_lib::*;

fn demo() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("gender", "Boolean"),
        FieldDescriptor::new("age", "Number").required().length(1.0, 2.0),
        FieldDescriptor::new("name", "String").required().length(3.0, 9.0),
    ]
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{:?} not found in:\n{}", needle, haystack))
}

#[test]
fn test_demo_scenario() {
    let code = generate_all(&demo(), &TemplateNames::default());

    let schema = &code.schema;
    assert!(schema.starts_with("const mySchema = new Schema{"));
    assert!(schema.contains("  gender: Boolean,\n"));
    assert!(schema.contains(
        "  age: {\n    type: Number,\n    required: true,\n    minlength:1,\n    maxlength:2\n  },\n"
    ));
    assert!(schema.contains(
        "  name: {\n    type: String,\n    required: true,\n    minlength:3,\n    maxlength:9\n  },\n"
    ));

    let model = &code.model;
    assert!(model.starts_with("export interface myModel = {"));
    assert!(model.contains("  gender: boolean,\n"));
    assert!(model.contains("  age?: number,\n"));
    assert!(model.contains("  name?: string,\n"));

    let form = &code.form;
    assert!(form.contains("    gender: ['', []]"));
    assert!(form.contains("    age: ['', [Validators.required,Validators.min(1), Validators.max(2)]]"));
    assert!(form.contains(
        "    name: ['', [Validators.required,Validators.minLength(3), Validators.maxLength(9)]]"
    ));
}

#[test]
fn test_demo_fields_match_seeded_list() {
    let seeded = demo_fields();
    let names: Vec<&str> = seeded.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["gender", "age", "name"]);
    assert_eq!(seeded[0].default_value.as_deref(), Some("male"));
    assert_eq!(seeded[1].default_value.as_deref(), Some("20"));
    assert_eq!(seeded[2].default_value, None);

    // Defaults are advisory and never reach the output.
    let code = generate_all(&seeded, &TemplateNames::default());
    assert_eq!(code, generate_all(&demo(), &TemplateNames::default()));
    assert!(!code.schema.contains("male"));
}

#[test]
fn test_order_preserved() {
    let fields = vec![
        FieldDescriptor::new("zeta", "String"),
        FieldDescriptor::new("alpha", "Number").required(),
        FieldDescriptor::new("mid", "Date").length(1.0, 4.0),
    ];
    let code = generate_all(&fields, &TemplateNames::default());

    for artifact in Artifact::ALL {
        let text = code.get(artifact);
        let z = position(text, "zeta");
        let a = position(text, "alpha");
        let m = position(text, "mid");
        assert!(z < a && a < m, "{} out of order", artifact.as_str());
    }
}

#[test]
fn test_blank_names_leave_no_trace() {
    let mut hidden = FieldDescriptor::new("", "Decimal128").required().length(77.0, 88.0);
    hidden.default_value = Some("secret".into());
    let fields = vec![hidden, FieldDescriptor::new("kept", "String")];

    let code = generate_all(&fields, &TemplateNames::default());
    for artifact in Artifact::ALL {
        let text = code.get(artifact);
        assert!(!text.contains("Decimal128"), "{}", text);
        assert!(!text.contains("77"), "{}", text);
        assert!(!text.contains("88"), "{}", text);
        assert!(!text.contains("secret"), "{}", text);
        assert!(text.contains("kept"));
    }
}

#[test]
fn test_clause_shape_per_combination() {
    let fields = vec![
        FieldDescriptor::new("both", "String").required().length(1.0, 5.0),
        FieldDescriptor::new("req", "String").required(),
        FieldDescriptor::new("len", "String").length(2.0, 6.0),
        FieldDescriptor::new("none", "String"),
    ];
    let schema = generate_schema(&fields);

    assert!(schema.contains(
        "  both: {\n    type: String,\n    required: true,\n    minlength:1,\n    maxlength:5\n  },\n"
    ));
    assert!(schema.contains("  req: {\n    type: String,\n    required: true,\n  },\n"));
    assert!(schema.contains("  len: {\n    type: String,\n    minlength:2,\n    maxlength:6\n  },\n"));
    assert!(schema.contains("  none: String,\n"));
}

#[test]
fn test_type_mapping_totality() {
    for ty in DeclaredType::ALL {
        assert!(!model_type(&ty).is_empty());
        assert!(!schema_type(&ty).is_empty());
    }
    assert_eq!(model_type(&DeclaredType::Mixed), "any");
    assert_eq!(model_type(&DeclaredType::Date), "Date");
    assert_eq!(schema_type(&DeclaredType::Array), "[]");
}

#[test]
fn test_generation_is_deterministic() {
    let fields = demo();
    let first = generate_all(&fields, &TemplateNames::default());
    let second = generate_all(&fields, &TemplateNames::default());
    assert_eq!(first, second);
}

#[test]
fn test_trait_objects_cover_every_artifact() {
    let generators: Vec<Box<dyn Codegen>> = vec![
        Box::new(SchemaGenerator::default()),
        Box::new(TypeScriptTypesGenerator::default()),
        Box::new(AngularFormGenerator::default()),
    ];
    let fields = demo();
    let code = generate_all(&fields, &TemplateNames::default());

    for generator in &generators {
        assert_eq!(generator.generate(&fields), code.get(generator.artifact()));
    }

    assert_eq!(generate_schema(&fields), code.schema);
    assert_eq!(generate_model(&fields), code.model);
    assert_eq!(generate_form(&fields), code.form);
}

#[test]
fn test_duplicate_names_emitted_as_given() {
    let fields = vec![
        FieldDescriptor::new("dup", "String"),
        FieldDescriptor::new("dup", "Number"),
    ];
    let schema = generate_schema(&fields);
    assert!(schema.contains("  dup: String,\n  dup: Number,\n"));
}

#[test]
fn test_session_round_trip_from_json() {
    let json = r#"{"fields": [
        {"propertyName": "gender", "propertyType": "Boolean", "required": false},
        {"propertyName": "", "propertyType": "String"},
        {"propertyName": "age", "propertyType": "Number", "required": true,
         "propLength": true, "minLength": 1, "maxLength": 2}
    ]}"#;
    let fields = loader::parse_json(json).unwrap();
    let mut session = Session::from_fields(fields, TemplateNames::default());
    let code = session.submit();

    assert!(session.show_code());
    assert!(code.model.contains("  gender: boolean,\n  age?: number,\n"));
}
