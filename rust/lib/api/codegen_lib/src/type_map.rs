/// Declared type -> target type tables

use crate::ir::DeclaredType;

/// Type name used in the model interface.
///
/// Date and Buffer have no entry and pass through as their own token,
/// same as anything outside the vocabulary.
pub fn model_type(ty: &DeclaredType) -> &str {
    match ty {
        DeclaredType::String => "string",
        DeclaredType::Number => "number",
        DeclaredType::Boolean => "boolean",
        DeclaredType::Mixed => "any",
        DeclaredType::ObjectId => "string",
        DeclaredType::Decimal128 => "string",
        DeclaredType::Array => "[]",
        DeclaredType::Map => "any",
        DeclaredType::Date | DeclaredType::Buffer | DeclaredType::Other(_) => ty.as_str(),
    }
}

/// Type token used in the schema definition.
pub fn schema_type(ty: &DeclaredType) -> &str {
    match ty {
        DeclaredType::Mixed => "Schema.Types.Mixed",
        DeclaredType::ObjectId => "Schema.Types.ObjectId",
        DeclaredType::Decimal128 => "Schema.Types.Decimal128",
        DeclaredType::Map => "Map",
        DeclaredType::Array => "[]",
        _ => ty.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_type_table() {
        let expected = [
            ("String", "string"),
            ("Number", "number"),
            ("Date", "Date"),
            ("Buffer", "Buffer"),
            ("Boolean", "boolean"),
            ("Mixed", "any"),
            ("ObjectId", "string"),
            ("Array", "[]"),
            ("Decimal128", "string"),
            ("Map", "any"),
        ];
        for (token, mapped) in expected {
            assert_eq!(model_type(&DeclaredType::from(token)), mapped, "{}", token);
        }
    }

    #[test]
    fn schema_type_table() {
        let expected = [
            ("String", "String"),
            ("Number", "Number"),
            ("Date", "Date"),
            ("Buffer", "Buffer"),
            ("Boolean", "Boolean"),
            ("Mixed", "Schema.Types.Mixed"),
            ("ObjectId", "Schema.Types.ObjectId"),
            ("Array", "[]"),
            ("Decimal128", "Schema.Types.Decimal128"),
            ("Map", "Map"),
        ];
        for (token, mapped) in expected {
            assert_eq!(schema_type(&DeclaredType::from(token)), mapped, "{}", token);
        }
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let ty = DeclaredType::from("UUID");
        assert_eq!(ty, DeclaredType::Other("UUID".into()));
        assert_eq!(model_type(&ty), "UUID");
        assert_eq!(schema_type(&ty), "UUID");
    }

    #[test]
    fn vocabulary_round_trips_through_tokens() {
        for ty in DeclaredType::ALL {
            assert_eq!(DeclaredType::from(ty.as_str()), ty);
        }
    }
}
