use validator::ValidationErrors;

/// One `field: message` line per failed rule, sorted by field name. Rules
/// without their own message fall back to a description of the rule.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let lines: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |err| {
                let message = match &err.message {
                    Some(message) => message.to_string(),
                    None => match err.code.as_ref() {
                        "required" => "required".to_string(),
                        _ => "invalid value".to_string(),
                    },
                };
                format!("{field}: {message}")
            })
        })
        .collect();

    if lines.is_empty() {
        "Validation failed".to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::CreatePaymentRequest;
    use validator::Validate;

    #[test]
    fn rule_without_message_uses_the_rule_name() {
        let request = CreatePaymentRequest {
            category_id: Some(1),
            payer_id: Some(1),
            description: None,
            payment_date: None,
            payment: Some(10),
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(format_validation_errors(&errors), "payment_date: required");
    }

    #[test]
    fn lines_are_sorted_and_keep_custom_messages() {
        let errors = CreatePaymentRequest::default().validate().unwrap_err();

        assert_eq!(
            format_validation_errors(&errors),
            [
                "category_id: category_id is required",
                "payer_id: payer_id is required",
                "payment: payment is required",
                "payment_date: required",
            ]
            .join("\n")
        );
    }

    #[test]
    fn empty_errors_have_a_generic_message() {
        assert_eq!(
            format_validation_errors(&ValidationErrors::new()),
            "Validation failed"
        );
    }
}
