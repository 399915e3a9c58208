use serde::{Deserialize, Serialize};

use crate::enums::VehicleClass;

/// Пользователь user-сервиса вместе со своими автомобилями.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub tg_user_id: i64,
    pub name: String,
    pub phone_number: Option<String>,
    pub tg_link: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub cars: Vec<Car>,
}

fn default_role() -> String {
    "client".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub license_plate: String,
    pub color: Option<String>,
    pub size: Option<VehicleClass>,
    #[serde(default)]
    pub is_selected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub tg_user_id: i64,
    pub name: String,
    pub phone_number: Option<String>,
    pub tg_link: Option<String>,
    pub role: String,
}

/// Частичное обновление профиля. Отсутствующие поля бэкенд не трогает.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCarRequest {
    pub brand: String,
    pub model: String,
    pub license_plate: String,
    pub color: Option<String>,
    pub size: Option<VehicleClass>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCarRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<VehicleClass>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_without_cars_defaults_to_empty_list() {
        let user: User = serde_json::from_str(
            r#"{"tg_user_id": 123456789, "name": "Иван", "phone_number": null, "tg_link": null}"#,
        )
        .unwrap();
        assert!(user.cars.is_empty());
        assert_eq!(user.role, "client");
    }

    #[test]
    fn update_request_skips_absent_fields() {
        let req = UpdateUserRequest {
            name: Some("Иван Петров".to_string()),
            phone_number: None,
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"name":"Иван Петров"}"#
        );
    }

    #[test]
    fn car_size_parses_as_vehicle_class() {
        let car: Car = serde_json::from_str(
            r#"{"id": 1, "brand": "BMW", "model": "X5", "license_plate": "А123ВС", "color": null, "size": "B", "is_selected": true}"#,
        )
        .unwrap();
        assert_eq!(car.size, Some(VehicleClass::B));
        assert!(car.is_selected);
    }
}
