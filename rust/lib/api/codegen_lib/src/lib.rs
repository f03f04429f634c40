/// Codegen Library - field list to source text
///
/// Turns an ordered list of field descriptors into three artifacts: a
/// Mongoose-style schema, a TypeScript-style model interface and an
/// Angular-style reactive form stub.

pub mod angular_form;
pub mod error;
pub mod loader;
pub mod schema;
pub mod session;
pub mod type_map;
pub mod typescript_types;

pub use crate::ir::*;
pub use error::CodegenError;
pub use session::Session;
pub use type_map::{model_type, schema_type};

pub mod ir {
    use serde::de::{Error as _, Unexpected};
    use serde::{Deserialize, Deserializer, Serialize};
    use std::convert::Infallible;
    use std::fmt;
    use std::str::FromStr;

    /// Declared type of a field, as picked from the form's type list.
    ///
    /// Tokens outside the vocabulary are kept verbatim in `Other` so the
    /// type maps can pass them through unchanged.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(from = "String", into = "String")]
    pub enum DeclaredType {
        String,
        Number,
        Date,
        Buffer,
        Boolean,
        Mixed,
        ObjectId,
        Array,
        Decimal128,
        Map,
        Other(String),
    }

    impl DeclaredType {
        /// The closed vocabulary, in type-picker order.
        pub const ALL: [DeclaredType; 10] = [
            DeclaredType::String,
            DeclaredType::Number,
            DeclaredType::Date,
            DeclaredType::Buffer,
            DeclaredType::Boolean,
            DeclaredType::Mixed,
            DeclaredType::ObjectId,
            DeclaredType::Array,
            DeclaredType::Decimal128,
            DeclaredType::Map,
        ];

        pub fn as_str(&self) -> &str {
            match self {
                DeclaredType::String => "String",
                DeclaredType::Number => "Number",
                DeclaredType::Date => "Date",
                DeclaredType::Buffer => "Buffer",
                DeclaredType::Boolean => "Boolean",
                DeclaredType::Mixed => "Mixed",
                DeclaredType::ObjectId => "ObjectId",
                DeclaredType::Array => "Array",
                DeclaredType::Decimal128 => "Decimal128",
                DeclaredType::Map => "Map",
                DeclaredType::Other(token) => token,
            }
        }
    }

    impl From<&str> for DeclaredType {
        fn from(token: &str) -> Self {
            match token {
                "String" => DeclaredType::String,
                "Number" => DeclaredType::Number,
                "Date" => DeclaredType::Date,
                "Buffer" => DeclaredType::Buffer,
                "Boolean" => DeclaredType::Boolean,
                "Mixed" => DeclaredType::Mixed,
                "ObjectId" => DeclaredType::ObjectId,
                "Array" => DeclaredType::Array,
                "Decimal128" => DeclaredType::Decimal128,
                "Map" => DeclaredType::Map,
                other => DeclaredType::Other(other.to_string()),
            }
        }
    }

    impl From<String> for DeclaredType {
        fn from(token: String) -> Self {
            DeclaredType::from(token.as_str())
        }
    }

    impl From<DeclaredType> for String {
        fn from(ty: DeclaredType) -> Self {
            ty.as_str().to_string()
        }
    }

    impl FromStr for DeclaredType {
        type Err = Infallible;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Ok(DeclaredType::from(s))
        }
    }

    impl fmt::Display for DeclaredType {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    /// One row of the data-model form.
    ///
    /// Serde names follow the form controls (`propertyName`, `propLength`, ...)
    /// and accept snake_case aliases. Missing keys take the values of
    /// [`FieldDescriptor::blank`].
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct FieldDescriptor {
        #[serde(rename = "propertyName", alias = "name")]
        pub name: String,
        #[serde(
            rename = "propertyType",
            alias = "type",
            deserialize_with = "declared_type_or_blank"
        )]
        pub declared_type: DeclaredType,
        /// Advisory; never emitted.
        #[serde(
            rename = "default",
            alias = "default_value",
            skip_serializing_if = "Option::is_none"
        )]
        pub default_value: Option<String>,
        #[serde(rename = "required", alias = "is_required")]
        pub is_required: bool,
        #[serde(rename = "propLength", alias = "has_length_constraint")]
        pub has_length_constraint: bool,
        #[serde(rename = "minLength", alias = "min", deserialize_with = "lenient_bound")]
        pub min_bound: f64,
        #[serde(rename = "maxLength", alias = "max", deserialize_with = "lenient_bound")]
        pub max_bound: f64,
    }

    impl FieldDescriptor {
        /// A fresh row as the form adds it: required, unconstrained, untyped.
        pub fn blank() -> Self {
            Self {
                name: String::new(),
                declared_type: DeclaredType::Other(String::new()),
                default_value: None,
                is_required: true,
                has_length_constraint: false,
                min_bound: 0.0,
                max_bound: 0.0,
            }
        }

        /// An optional, unconstrained field.
        pub fn new(name: impl Into<String>, declared_type: impl Into<DeclaredType>) -> Self {
            Self {
                name: name.into(),
                declared_type: declared_type.into(),
                is_required: false,
                ..Self::blank()
            }
        }

        pub fn required(mut self) -> Self {
            self.is_required = true;
            self
        }

        pub fn length(mut self, min: f64, max: f64) -> Self {
            self.has_length_constraint = true;
            self.min_bound = min;
            self.max_bound = max;
            self
        }

        pub fn with_default(mut self, value: impl Into<String>) -> Self {
            self.default_value = Some(value.into());
            self
        }

        /// Rows with a blank name are incomplete and skipped by every generator.
        pub fn is_named(&self) -> bool {
            !self.name.trim().is_empty()
        }
    }

    /// A bound as the form submits it: a number, or the text of its input box.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawBound {
        Number(f64),
        Text(String),
    }

    /// Untouched form rows carry `""` (or null) for both bounds; those read as 0.
    fn lenient_bound<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawBound>::deserialize(deserializer)? {
            None => Ok(0.0),
            Some(RawBound::Number(n)) => Ok(n),
            Some(RawBound::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    Ok(0.0)
                } else {
                    text.parse::<f64>().map_err(|_| {
                        D::Error::invalid_value(Unexpected::Str(text), &"a number or \"\"")
                    })
                }
            }
        }
    }

    /// A null type reads as a blank token.
    fn declared_type_or_blank<'de, D>(deserializer: D) -> Result<DeclaredType, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = Option::<String>::deserialize(deserializer)?;
        Ok(DeclaredType::from(token.unwrap_or_default()))
    }

    impl Default for FieldDescriptor {
        fn default() -> Self {
            Self::blank()
        }
    }

    /// Identifiers substituted into the three templates.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TemplateNames {
        pub schema: String,
        pub model: String,
        pub form: String,
    }

    impl Default for TemplateNames {
        fn default() -> Self {
            Self {
                schema: "mySchema".to_string(),
                model: "myModel".to_string(),
                form: "myForm".to_string(),
            }
        }
    }

    /// The demo list the form seeds: gender, age, name.
    pub fn demo_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("gender", DeclaredType::Boolean).with_default("male"),
            FieldDescriptor::new("age", DeclaredType::Number)
                .with_default("20")
                .required()
                .length(1.0, 2.0),
            FieldDescriptor::new("name", DeclaredType::String)
                .required()
                .length(3.0, 9.0),
        ]
    }
}

/// Which of the three artifacts a generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Schema,
    Model,
    Form,
}

impl Artifact {
    pub const ALL: [Artifact; 3] = [Artifact::Schema, Artifact::Model, Artifact::Form];

    pub fn as_str(&self) -> &'static str {
        match self {
            Artifact::Schema => "schema",
            Artifact::Model => "model",
            Artifact::Form => "form",
        }
    }
}

/// Codegen trait - one implementation per artifact
pub trait Codegen {
    fn generate(&self, fields: &[FieldDescriptor]) -> String;
    fn artifact(&self) -> Artifact;
}

/// Snapshot of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    pub schema: String,
    pub model: String,
    pub form: String,
}

impl GeneratedCode {
    pub fn get(&self, artifact: Artifact) -> &str {
        match artifact {
            Artifact::Schema => &self.schema,
            Artifact::Model => &self.model,
            Artifact::Form => &self.form,
        }
    }
}

/// Run the schema, model and form generators, in that order.
pub fn generate_all(fields: &[FieldDescriptor], names: &TemplateNames) -> GeneratedCode {
    let skipped = fields.iter().filter(|f| !f.is_named()).count();
    if skipped > 0 {
        tracing::debug!(skipped, "skipping unnamed fields");
    }

    let schema = schema::SchemaGenerator::named(&names.schema).generate(fields);
    let model = typescript_types::TypeScriptTypesGenerator::named(&names.model).generate(fields);
    let form = angular_form::AngularFormGenerator::named(&names.form).generate(fields);

    GeneratedCode { schema, model, form }
}
