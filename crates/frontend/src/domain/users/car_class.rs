//! Автоматическое определение класса автомобиля по марке и модели.

use contracts::enums::VehicleClass;

const LUXURY_BRANDS: &[&str] = &[
    "rolls-royce",
    "bentley",
    "maybach",
    "lamborghini",
    "ferrari",
    "porsche",
];

const PREMIUM_BRANDS: &[&str] = &[
    "mercedes", "bmw", "audi", "jaguar", "lexus", "infiniti", "cadillac", "lincoln",
];

const MID_RANGE_BRANDS: &[&str] = &[
    "volkswagen",
    "volvo",
    "mazda",
    "honda",
    "toyota",
    "nissan",
    "hyundai",
    "kia",
    "skoda",
];

const BUDGET_BRANDS: &[&str] = &["lada", "chevrolet", "daewoo", "geely", "chery", "lifan"];

/// Регистронезависимое сопоставление марки и модели с четырьмя ценовыми
/// сегментами. Неизвестные марки относятся к среднему классу `C`.
pub fn infer_vehicle_class(brand: &str, model: &str) -> VehicleClass {
    let haystack = format!("{} {}", brand, model).to_lowercase();

    if LUXURY_BRANDS.iter().any(|b| haystack.contains(b)) {
        return VehicleClass::A;
    }
    if PREMIUM_BRANDS.iter().any(|b| haystack.contains(b)) {
        return VehicleClass::B;
    }
    if MID_RANGE_BRANDS.iter().any(|b| haystack.contains(b)) {
        return VehicleClass::C;
    }
    if BUDGET_BRANDS.iter().any(|b| haystack.contains(b)) {
        return VehicleClass::D;
    }

    VehicleClass::C
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premium_brand_maps_to_b() {
        assert_eq!(infer_vehicle_class("BMW", "X5"), VehicleClass::B);
        assert_eq!(infer_vehicle_class("Mercedes-Benz", "E200"), VehicleClass::B);
    }

    #[test]
    fn budget_brand_maps_to_d() {
        assert_eq!(infer_vehicle_class("Lada", "Vesta"), VehicleClass::D);
    }

    #[test]
    fn luxury_brand_maps_to_a() {
        assert_eq!(infer_vehicle_class("Porsche", "911"), VehicleClass::A);
    }

    #[test]
    fn unknown_brand_defaults_to_c() {
        assert_eq!(infer_vehicle_class("Tesla", "Model S"), VehicleClass::C);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(infer_vehicle_class("LADA", "GRANTA"), VehicleClass::D);
        assert_eq!(infer_vehicle_class("bmw", "m3"), VehicleClass::B);
    }
}
