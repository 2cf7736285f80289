use crate::{
    model::payment::{PaymentListModel, PaymentModel},
    utils::{to_jst_date_string, to_jst_datetime_string},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub id: i32,
    pub user_id: i32,
    pub category_id: i32,
    pub payer_id: i32,
    pub description: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub payment_date: DateTime<Utc>,
    pub payment: i32,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

/// List row with dates rendered in JST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentListResponse {
    pub id: i32,
    pub category_name: String,
    pub payer_name: String,
    #[schema(example = "2020-04-01")]
    pub payment_date: String,
    pub payment: i32,
    #[schema(example = "2020-04-01 09:30:00")]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentsResponse {
    pub payments: Vec<PaymentListResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentDatesResponse {
    #[schema(example = json!(["2020-05", "2020-04"]))]
    pub payments_date: Vec<String>,
}

// model to response
impl From<PaymentModel> for PaymentResponse {
    fn from(model: PaymentModel) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            category_id: model.category_id,
            payer_id: model.payer_id,
            description: model.description,
            payment_date: model.payment_date,
            payment: model.payment,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<PaymentListModel> for PaymentListResponse {
    fn from(model: PaymentListModel) -> Self {
        Self {
            id: model.id,
            category_name: model.category_name.unwrap_or_default(),
            payer_name: model.payer_name.unwrap_or_default(),
            payment_date: to_jst_date_string(&model.payment_date),
            payment: model.payment,
            created_at: to_jst_datetime_string(&model.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn list_row_is_rendered_in_jst() {
        let model = PaymentListModel {
            id: 3,
            category_name: Some("家賃".into()),
            payer_name: None,
            payment_date: Utc.with_ymd_and_hms(2020, 3, 31, 15, 0, 0).unwrap(),
            payment: 80000,
            created_at: Utc.with_ymd_and_hms(2020, 4, 1, 0, 30, 0).unwrap(),
        };

        let response = PaymentListResponse::from(model);

        assert_eq!(response.category_name, "家賃");
        assert_eq!(response.payer_name, "");
        assert_eq!(response.payment_date, "2020-04-01");
        assert_eq!(response.created_at, "2020-04-01 09:30:00");
    }

    #[test]
    fn payment_serializes_null_description() {
        let at = Utc.with_ymd_and_hms(2020, 4, 1, 0, 0, 0).unwrap();
        let response = PaymentResponse::from(PaymentModel {
            id: 1,
            user_id: 1,
            category_id: 1,
            payer_id: 1,
            description: None,
            payment_date: at,
            payment: 1234,
            created_at: at,
            updated_at: at,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["payment"], 1234);
        assert_eq!(json["payment_date"], "2020-04-01T00:00:00Z");
    }
}
