//! Клиент price-сервиса и локальная оценка цены.

use contracts::pricing::{BatchCalculateRequest, BatchCalculateResponse, PriceQuote};
use gloo_net::http::Request;

use crate::shared::config::api_config;

/// Batch-расчёт цен услуг одной компании. С `user_id` сервис учитывает класс
/// выбранного автомобиля, без него возвращает базовые цены.
pub async fn calculate_prices(
    company_id: i64,
    user_id: Option<i64>,
    service_ids: Vec<i64>,
) -> Result<Vec<PriceQuote>, String> {
    let request = BatchCalculateRequest {
        company_id,
        user_id,
        service_ids,
    };

    let url = format!("{}/prices/calculate", api_config().price_base);
    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to calculate prices: {}", response.status()));
    }

    let data: BatchCalculateResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(data.prices)
}

/// Локальная формула на случай недоступности price-сервиса: 500 ₽ за 30 минут.
pub fn estimate_price(duration_minutes: u32) -> u32 {
    ((duration_minutes as f64 / 30.0) * 500.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_hour_costs_base_rate() {
        assert_eq!(estimate_price(30), 500);
    }

    #[test]
    fn price_scales_linearly_with_duration() {
        assert_eq!(estimate_price(60), 1000);
        assert_eq!(estimate_price(90), 1500);
        assert_eq!(estimate_price(45), 750);
    }

    #[test]
    fn fractional_result_rounds_to_nearest_ruble() {
        assert_eq!(estimate_price(20), 333);
        assert_eq!(estimate_price(10), 167);
    }

    #[test]
    fn zero_duration_is_free() {
        assert_eq!(estimate_price(0), 0);
    }
}
