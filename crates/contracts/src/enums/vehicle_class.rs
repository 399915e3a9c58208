use serde::{Deserialize, Serialize};

/// Класс автомобиля (A–D), используется для расчёта цены услуги.
///
/// A — люксовые марки, B — премиум, C — средний сегмент, D — бюджетный.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    A,
    B,
    C,
    D,
}

impl VehicleClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::A => "A",
            VehicleClass::B => "B",
            VehicleClass::C => "C",
            VehicleClass::D => "D",
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_letter() {
        assert_eq!(serde_json::to_string(&VehicleClass::B).unwrap(), "\"B\"");
        assert_eq!(
            serde_json::from_str::<VehicleClass>("\"D\"").unwrap(),
            VehicleClass::D
        );
    }
}
