//! Turns `validator` results into domain failures

use adopt_core::DomainFailure;
use validator::{Validate, ValidationErrors};

/// Validate `input`, describing every invalid field as `field: message`
///
/// Fields are reported in camelCase, as the client sent them, sorted by name.
pub(crate) fn validate_input<T: Validate>(input: &T) -> Result<(), DomainFailure> {
    input.validate().map_err(|errors| describe(&errors))
}

fn describe(errors: &ValidationErrors) -> DomainFailure {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            let first = field_errors.first()?;
            let message = first
                .message
                .as_ref()
                .map_or_else(|| first.code.to_string(), ToString::to_string);
            Some(format!("{}: {message}", camel_case(&field)))
        })
        .collect();
    fields.sort();

    DomainFailure::new(fields.join("; "))
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
