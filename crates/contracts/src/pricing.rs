use serde::{Deserialize, Serialize};

/// Batch-запрос цен на услуги одной компании.
///
/// `user_id` опционален: без него price-сервис считает базовые цены,
/// с ним — учитывает класс выбранного автомобиля пользователя.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculateRequest {
    pub company_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub service_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub company_id: i64,
    pub service_id: i64,
    pub price: f64,
    pub currency: String,
    pub pricing_type: String,
    /// None, если класс авто не применялся (статичная цена или нет машины).
    #[serde(default)]
    pub vehicle_class: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculateResponse {
    pub prices: Vec<PriceQuote>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_user_omits_field() {
        let req = BatchCalculateRequest {
            company_id: 1,
            user_id: None,
            service_ids: vec![7, 8],
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"company_id":1,"service_ids":[7,8]}"#
        );
    }

    #[test]
    fn quote_parses_without_vehicle_class() {
        let quote: PriceQuote = serde_json::from_str(
            r#"{"company_id":1,"service_id":7,"price":500.0,"currency":"RUB","pricing_type":"static"}"#,
        )
        .unwrap();
        assert_eq!(quote.vehicle_class, None);
        assert_eq!(quote.price, 500.0);
    }
}
