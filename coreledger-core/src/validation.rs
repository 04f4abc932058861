//! Bridge from `validator` rule failures to field-level faults

use validator::{ValidationErrors, ValidationErrorsKind};

use crate::error::{ClassifiedFault, FieldErrors};

/// Summary message attached to every field-level validation fault
pub const VALIDATION_SUMMARY: &str = "One or more validation errors occurred.";

impl From<ValidationErrors> for ClassifiedFault {
    fn from(errors: ValidationErrors) -> Self {
        ClassifiedFault::validation_with_fields(VALIDATION_SUMMARY, collect_field_errors(&errors))
    }
}

/// Flatten validator output into camelCase field names and messages
pub fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut collected = FieldErrors::new();
    collect_into(&mut collected, None, errors);
    collected
}

fn collect_into(collected: &mut FieldErrors, prefix: Option<&str>, errors: &ValidationErrors) {
    for (field, kind) in errors.errors() {
        let name = match prefix {
            Some(prefix) => format!("{}.{}", prefix, to_camel_case(field)),
            None => to_camel_case(field),
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages = collected.entry(name.clone()).or_default();
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("Invalid value for field '{}'", name));
                    messages.push(message);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_into(collected, Some(name.as_str()), nested),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item = format!("{}[{}]", name, index);
                    collect_into(collected, Some(item.as_str()), nested);
                }
            }
        }
    }
}

/// `type_id` -> `typeId`
pub fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes;
    use std::borrow::Cow;
    use validator::ValidationError;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("type_id"), "typeId");
        assert_eq!(to_camel_case("normal_balance"), "normalBalance");
        assert_eq!(to_camel_case("code"), "code");
        assert_eq!(to_camel_case("_private"), "private");
    }

    #[test]
    fn test_validation_errors_become_field_fault() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "type_id",
            ValidationError::new("range").with_message(Cow::Borrowed("TypeId must be a valid positive identifier")),
        );
        errors.add("name", ValidationError::new("length"));

        let fault = ClassifiedFault::from(errors);
        assert_eq!(fault.error_code(), codes::VALIDATION);
        assert_eq!(fault.to_string(), VALIDATION_SUMMARY);

        let fields = fault.field_errors().unwrap();
        assert_eq!(fields["typeId"], vec!["TypeId must be a valid positive identifier"]);
        assert_eq!(fields["name"], vec!["Invalid value for field 'name'"]);
    }
}
