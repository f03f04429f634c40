//! Editing session: the caller-owned field list plus the code-view toggle.

use tracing::{debug, info};

use crate::ir::{demo_fields, FieldDescriptor, TemplateNames};
use crate::{generate_all, GeneratedCode};

/// Owns the rows being edited between submits.
///
/// Generators only ever borrow the rows; [`Session::submit`] returns an owned
/// snapshot that later edits do not touch.
#[derive(Debug, Clone)]
pub struct Session {
    fields: Vec<FieldDescriptor>,
    names: TemplateNames,
    show_code: bool,
}

impl Session {
    /// Starts the way the form does: two blank rows.
    pub fn new() -> Self {
        Self::with_names(TemplateNames::default())
    }

    pub fn with_names(names: TemplateNames) -> Self {
        Self {
            fields: vec![FieldDescriptor::blank(), FieldDescriptor::blank()],
            names,
            show_code: false,
        }
    }

    pub fn from_fields(fields: Vec<FieldDescriptor>, names: TemplateNames) -> Self {
        Self {
            fields,
            names,
            show_code: false,
        }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Append a blank row and return its index.
    pub fn add_field(&mut self) -> usize {
        self.push_field(FieldDescriptor::blank())
    }

    pub fn push_field(&mut self, field: FieldDescriptor) -> usize {
        self.fields.push(field);
        self.fields.len() - 1
    }

    pub fn field(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut FieldDescriptor> {
        self.fields.get_mut(index)
    }

    pub fn remove_field(&mut self, index: usize) -> Option<FieldDescriptor> {
        if index < self.fields.len() {
            Some(self.fields.remove(index))
        } else {
            None
        }
    }

    /// Replace all rows with the gender/age/name demo list.
    pub fn seed_demo(&mut self) {
        self.fields = demo_fields();
        debug!(count = self.fields.len(), "seeded demo fields");
    }

    pub fn show_code(&self) -> bool {
        self.show_code
    }

    /// Regenerate all three artifacts and toggle the code view.
    pub fn submit(&mut self) -> GeneratedCode {
        let code = generate_all(&self.fields, &self.names);
        self.show_code = !self.show_code;
        info!(
            fields = self.fields.len(),
            show_code = self.show_code,
            "generated artifacts"
        );
        code
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::DeclaredType;

    #[test]
    fn starts_with_two_blank_rows() {
        let session = Session::new();
        assert_eq!(session.fields().len(), 2);
        assert!(session.fields().iter().all(|f| *f == FieldDescriptor::blank()));
        assert!(!session.show_code());
    }

    #[test]
    fn blank_rows_generate_empty_bodies() {
        let mut session = Session::new();
        let code = session.submit();
        assert_eq!(code.schema, "const mySchema = new Schema{\n}");
        assert_eq!(code.model, "export interface myModel = {\n}");
    }

    #[test]
    fn submit_toggles_view() {
        let mut session = Session::new();
        session.submit();
        assert!(session.show_code());
        session.submit();
        assert!(!session.show_code());
    }

    #[test]
    fn edit_rows_in_place() {
        let mut session = Session::new();
        let idx = session.add_field();
        assert_eq!(idx, 2);

        let row = session.field_mut(idx).unwrap();
        row.name = "title".into();
        row.declared_type = DeclaredType::String;
        row.is_required = false;

        assert_eq!(session.field(idx).unwrap().name, "title");
        assert!(session.field(9).is_none());
        assert!(session.field_mut(9).is_none());

        let code = session.submit();
        assert!(code.schema.contains("  title: String,\n"));
    }

    #[test]
    fn remove_rows() {
        let mut session = Session::new();
        assert!(session.remove_field(5).is_none());
        assert!(session.remove_field(0).is_some());
        assert_eq!(session.fields().len(), 1);
    }

    #[test]
    fn snapshot_unaffected_by_later_edits() {
        let mut session = Session::new();
        session.seed_demo();
        let before = session.submit();

        session.field_mut(0).unwrap().name = "sex".into();
        assert!(before.schema.contains("gender: Boolean,"));
        assert!(!before.schema.contains("sex"));

        let after = session.submit();
        assert!(after.schema.contains("sex: Boolean,"));
    }

    #[test]
    fn custom_names_flow_into_templates() {
        let names = TemplateNames {
            schema: "userSchema".into(),
            model: "User".into(),
            form: "userForm".into(),
        };
        let mut session = Session::from_fields(demo_fields(), names);
        let code = session.submit();
        assert!(code.schema.starts_with("const userSchema = new Schema{"));
        assert!(code.model.starts_with("export interface User = {"));
        assert!(code.form.contains("const userForm: FormGroup;"));
        assert!(code.form.contains("this.userForm = this.fb.group({"));
    }
}
