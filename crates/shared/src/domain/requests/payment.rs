use crate::model::payment::PaymentDraft;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindPaymentsQuery {
    /// Opaque pagination token returned rows must precede. Omit for the first page.
    #[serde(default)]
    pub cursor: Option<String>,
}

impl FindPaymentsQuery {
    /// `Some(0)` for the first page, `Some(n)` for a numeric cursor and `None`
    /// when the cursor cannot point at any page.
    pub fn page_cursor(&self) -> Option<i32> {
        match self.cursor.as_deref().map(str::trim) {
            None | Some("") => Some(0),
            Some(raw) => raw.parse::<i32>().ok(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentRequest {
    #[validate(
        required(message = "category_id is required"),
        range(min = 1, message = "category_id must be positive")
    )]
    pub category_id: Option<i32>,

    #[validate(
        required(message = "payer_id is required"),
        range(min = 1, message = "payer_id must be positive")
    )]
    pub payer_id: Option<i32>,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(required)]
    #[schema(value_type = Option<String>, format = DateTime, example = "2020-04-01T00:00:00+09:00")]
    pub payment_date: Option<DateTime<FixedOffset>>,

    #[validate(
        required(message = "payment is required"),
        range(min = 1, message = "payment must be positive")
    )]
    pub payment: Option<i32>,
}

impl CreatePaymentRequest {
    pub fn to_draft(&self, user_id: i32) -> Option<PaymentDraft> {
        build_draft(
            0,
            user_id,
            self.category_id,
            self.payer_id,
            self.description.clone(),
            self.payment_date,
            self.payment,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UpdatePaymentRequest {
    #[validate(
        required(message = "category_id is required"),
        range(min = 1, message = "category_id must be positive")
    )]
    pub category_id: Option<i32>,

    #[validate(
        required(message = "payer_id is required"),
        range(min = 1, message = "payer_id must be positive")
    )]
    pub payer_id: Option<i32>,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(required)]
    #[schema(value_type = Option<String>, format = DateTime, example = "2020-04-01T00:00:00+09:00")]
    pub payment_date: Option<DateTime<FixedOffset>>,

    #[validate(
        required(message = "payment is required"),
        range(min = 1, message = "payment must be positive")
    )]
    pub payment: Option<i32>,
}

impl UpdatePaymentRequest {
    pub fn to_draft(&self, user_id: i32, payment_id: i32) -> Option<PaymentDraft> {
        build_draft(
            payment_id,
            user_id,
            self.category_id,
            self.payer_id,
            self.description.clone(),
            self.payment_date,
            self.payment,
        )
    }
}

fn build_draft(
    id: i32,
    user_id: i32,
    category_id: Option<i32>,
    payer_id: Option<i32>,
    description: Option<String>,
    payment_date: Option<DateTime<FixedOffset>>,
    payment: Option<i32>,
) -> Option<PaymentDraft> {
    Some(PaymentDraft {
        id,
        user_id,
        category_id: category_id?,
        payer_id: payer_id?,
        description,
        payment_date: payment_date?.with_timezone(&Utc),
        payment: payment?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parse(body: &str) -> CreatePaymentRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn accepts_a_complete_body() {
        let request = parse(
            r#"{"category_id":1,"payer_id":2,"payment_date":"2020-04-01T00:00:00+09:00","payment":1234}"#,
        );

        assert!(request.validate().is_ok());

        let draft = request.to_draft(7).unwrap();
        assert_eq!(draft.id, 0);
        assert_eq!(draft.user_id, 7);
        assert_eq!(draft.category_id, 1);
        assert_eq!(draft.payer_id, 2);
        assert_eq!(draft.description, None);
        assert_eq!(
            draft.payment_date,
            Utc.with_ymd_and_hms(2020, 3, 31, 15, 0, 0).unwrap()
        );
        assert_eq!(draft.payment, 1234);
    }

    #[test]
    fn keeps_empty_description_distinct_from_absent() {
        let request = parse(
            r#"{"category_id":1,"payer_id":1,"description":"","payment_date":"2020-04-01T00:00:00Z","payment":1}"#,
        );
        assert_eq!(request.description, Some(String::new()));

        let request = parse(
            r#"{"category_id":1,"payer_id":1,"description":null,"payment_date":"2020-04-01T00:00:00Z","payment":1}"#,
        );
        assert_eq!(request.description, None);
    }

    #[test]
    fn rejects_each_missing_required_field() {
        let bodies = [
            r#"{"payer_id":1,"payment_date":"2020-04-01T00:00:00Z","payment":1}"#,
            r#"{"category_id":1,"payment_date":"2020-04-01T00:00:00Z","payment":1}"#,
            r#"{"category_id":1,"payer_id":1,"payment":1}"#,
            r#"{"category_id":1,"payer_id":1,"payment_date":"2020-04-01T00:00:00Z"}"#,
        ];

        for body in bodies {
            let request = parse(body);
            assert!(request.validate().is_err(), "{body}");
            assert!(request.to_draft(1).is_none(), "{body}");
        }
    }

    #[test]
    fn rejects_zero_values() {
        let request = parse(
            r#"{"category_id":0,"payer_id":1,"payment_date":"2020-04-01T00:00:00Z","payment":0}"#,
        );
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("category_id"));
        assert!(fields.contains_key("payment"));
        assert!(!fields.contains_key("payer_id"));
    }

    #[test]
    fn update_draft_carries_the_payment_id() {
        let request = UpdatePaymentRequest {
            category_id: Some(3),
            payer_id: Some(4),
            description: Some("rent".into()),
            payment_date: Some(
                FixedOffset::east_opt(9 * 3600)
                    .unwrap()
                    .with_ymd_and_hms(2020, 5, 1, 0, 0, 0)
                    .unwrap(),
            ),
            payment: Some(80000),
        };

        let draft = request.to_draft(1, 42).unwrap();
        assert_eq!(draft.id, 42);
        assert_eq!(draft.user_id, 1);
        assert_eq!(draft.description.as_deref(), Some("rent"));
    }

    #[test]
    fn cursor_parsing() {
        let query = |cursor: Option<&str>| FindPaymentsQuery {
            cursor: cursor.map(str::to_string),
        };

        assert_eq!(query(None).page_cursor(), Some(0));
        assert_eq!(query(Some("")).page_cursor(), Some(0));
        assert_eq!(query(Some("25")).page_cursor(), Some(25));
        assert_eq!(query(Some("abc")).page_cursor(), None);
    }
}
