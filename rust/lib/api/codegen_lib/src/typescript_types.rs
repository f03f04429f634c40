/// TypeScript model interface generator

use crate::ir::*;
use crate::type_map::model_type;

pub struct TypeScriptTypesGenerator {
    name: String,
}

impl TypeScriptTypesGenerator {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for TypeScriptTypesGenerator {
    fn default() -> Self {
        Self::named(TemplateNames::default().model)
    }
}

impl crate::Codegen for TypeScriptTypesGenerator {
    fn generate(&self, fields: &[FieldDescriptor]) -> String {
        let mut output = format!("export interface {} = {{\n", self.name);

        for field in fields.iter().filter(|f| f.is_named()) {
            // The marker mirrors `is_required`, not its negation.
            let marker = if field.is_required { "?" } else { "" };
            output.push_str(&format!(
                "  {}{}: {},\n",
                field.name,
                marker,
                model_type(&field.declared_type)
            ));
        }

        output.push('}');
        output
    }

    fn artifact(&self) -> crate::Artifact {
        crate::Artifact::Model
    }
}

/// Model text with the default `myModel` identifier.
pub fn generate_model(fields: &[FieldDescriptor]) -> String {
    use crate::Codegen;
    TypeScriptTypesGenerator::default().generate(fields)
}
