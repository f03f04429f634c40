/// Angular reactive form generator

use crate::ir::*;

pub struct AngularFormGenerator {
    name: String,
}

impl AngularFormGenerator {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Import and declaration lines shown above the init stub.
    pub fn header(&self) -> String {
        let mut output = String::new();
        output.push_str("import { FormBuilder, FormGroup, Validators } from \"@angular/forms\";\n\n");
        output.push_str(&format!("const {}: FormGroup;\n\n", self.name));
        output.push_str("constructor(private fb: FormBuilder){}");
        output
    }

    fn init_stub(&self, fields: &[FieldDescriptor]) -> String {
        let controls: Vec<String> = fields
            .iter()
            .filter(|f| f.is_named())
            .map(|f| format!("    {}: ['', {}]", f.name, validator_list(f)))
            .collect();

        let mut output = String::new();
        output.push_str("ngOnInit() {\n");
        output.push_str(&format!("  this.{} = this.fb.group({{\n", self.name));
        if !controls.is_empty() {
            output.push_str(&controls.join(",\n"));
            output.push('\n');
        }
        output.push_str("  });\n");
        output.push('}');
        output
    }
}

impl Default for AngularFormGenerator {
    fn default() -> Self {
        Self::named(TemplateNames::default().form)
    }
}

impl crate::Codegen for AngularFormGenerator {
    fn generate(&self, fields: &[FieldDescriptor]) -> String {
        format!("{}\n\n{}", self.header(), self.init_stub(fields))
    }

    fn artifact(&self) -> crate::Artifact {
        crate::Artifact::Form
    }
}

/// Form text with the default `myForm` identifier.
pub fn generate_form(fields: &[FieldDescriptor]) -> String {
    use crate::Codegen;
    AngularFormGenerator::default().generate(fields)
}

/// Bracketed validator list for one control. Empty when the field has no
/// required flag and no length constraint.
///
/// The required token and the length pair are joined by a bare `,`; the
/// pair itself is separated by `, `.
pub fn validator_list(field: &FieldDescriptor) -> String {
    let required = field.is_required.then_some("Validators.required");

    let length = field.has_length_constraint.then(|| {
        if field.declared_type == DeclaredType::Number {
            format!(
                "Validators.min({}), Validators.max({})",
                field.min_bound, field.max_bound
            )
        } else {
            format!(
                "Validators.minLength({}), Validators.maxLength({})",
                field.min_bound, field.max_bound
            )
        }
    });

    match (required, length) {
        (Some(required), Some(length)) => format!("[{},{}]", required, length),
        (Some(required), None) => format!("[{}]", required),
        (None, Some(length)) => format!("[{}]", length),
        (None, None) => "[]".to_string(),
    }
}
