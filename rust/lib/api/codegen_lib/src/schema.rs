/// Mongoose-style schema generator

use crate::ir::*;
use crate::type_map::schema_type;

pub struct SchemaGenerator {
    name: String,
}

impl SchemaGenerator {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::named(TemplateNames::default().schema)
    }
}

impl crate::Codegen for SchemaGenerator {
    fn generate(&self, fields: &[FieldDescriptor]) -> String {
        let mut output = format!("const {} = new Schema{{\n", self.name);

        for field in fields.iter().filter(|f| f.is_named()) {
            output.push_str(&render_clause(field));
        }

        output.push('}');
        output
    }

    fn artifact(&self) -> crate::Artifact {
        crate::Artifact::Schema
    }
}

/// Schema text with the default `mySchema` identifier.
pub fn generate_schema(fields: &[FieldDescriptor]) -> String {
    use crate::Codegen;
    SchemaGenerator::default().generate(fields)
}

/// The four clause shapes, keyed by (required, length-constrained).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseShape {
    RequiredBounded,
    Required,
    Bounded,
    Shorthand,
}

impl ClauseShape {
    pub fn of(field: &FieldDescriptor) -> Self {
        match (field.is_required, field.has_length_constraint) {
            (true, true) => ClauseShape::RequiredBounded,
            (true, false) => ClauseShape::Required,
            (false, true) => ClauseShape::Bounded,
            (false, false) => ClauseShape::Shorthand,
        }
    }

    fn has_required(self) -> bool {
        matches!(self, ClauseShape::RequiredBounded | ClauseShape::Required)
    }

    fn has_bounds(self) -> bool {
        matches!(self, ClauseShape::RequiredBounded | ClauseShape::Bounded)
    }
}

fn render_clause(field: &FieldDescriptor) -> String {
    let ty = schema_type(&field.declared_type);
    let shape = ClauseShape::of(field);

    if shape == ClauseShape::Shorthand {
        return format!("  {}: {},\n", field.name, ty);
    }

    let mut clause = format!("  {}: {{\n    type: {},\n", field.name, ty);
    if shape.has_required() {
        clause.push_str("    required: true,\n");
    }
    if shape.has_bounds() {
        clause.push_str(&format!("    minlength:{},\n", field.min_bound));
        clause.push_str(&format!("    maxlength:{}\n", field.max_bound));
    }
    clause.push_str("  },\n");
    clause
}
