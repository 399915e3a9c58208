//! Состояние фильтров каталога и чистый предикат отбора.
//!
//! Состояние живёт только в памяти и сбрасывается перезагрузкой страницы.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationBucket {
    /// До 30 минут включительно
    Quick,
    /// 31–60 минут
    Medium,
    /// Больше часа
    Long,
}

impl DurationBucket {
    pub fn matches(&self, minutes: u32) -> bool {
        match self {
            DurationBucket::Quick => minutes <= 30,
            DurationBucket::Medium => minutes > 30 && minutes <= 60,
            DurationBucket::Long => minutes > 60,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "quick" => Some(DurationBucket::Quick),
            "medium" => Some(DurationBucket::Medium),
            "long" => Some(DurationBucket::Long),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::Quick => "До 30 минут",
            DurationBucket::Medium => "30–60 минут",
            DurationBucket::Long => "Более часа",
        }
    }

    pub fn all() -> [DurationBucket; 3] {
        [
            DurationBucket::Quick,
            DurationBucket::Medium,
            DurationBucket::Long,
        ]
    }
}

/// Ценовой диапазон из строк вида "0-1000" и "3000-+" (открытый верх).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl PriceRange {
    pub fn parse(raw: &str) -> Option<Self> {
        let (min, max) = raw.split_once('-')?;
        let min = min.trim().parse().ok()?;
        let max = match max.trim() {
            "+" => None,
            value => Some(value.parse().ok()?),
        };
        Some(Self { min, max })
    }

    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }

    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{}–{} ₽", self.min, max),
            None => format!("от {} ₽", self.min),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Пустое множество — без ограничения по компаниям
    pub companies: HashSet<i64>,
    pub price: Option<PriceRange>,
    pub durations: Vec<DurationBucket>,
}

impl FilterState {
    pub fn matches(&self, company_id: i64, price: u32, duration: u32) -> bool {
        if !self.companies.is_empty() && !self.companies.contains(&company_id) {
            return false;
        }
        if let Some(range) = self.price {
            if !range.contains(price) {
                return false;
            }
        }
        if !self.durations.is_empty() && !self.durations.iter().any(|b| b.matches(duration)) {
            return false;
        }
        true
    }

    pub fn toggle_company(&mut self, company_id: i64) {
        if !self.companies.insert(company_id) {
            self.companies.remove(&company_id);
        }
    }

    pub fn toggle_duration(&mut self, bucket: DurationBucket) {
        if let Some(pos) = self.durations.iter().position(|b| *b == bucket) {
            self.durations.remove(pos);
        } else {
            self.durations.push(bucket);
        }
    }

    pub fn active_count(&self) -> usize {
        self.companies.len()
            + usize::from(self.price.is_some())
            + usize::from(!self.durations.is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Поиск: регистронезависимое вхождение в имя или описание услуги.
pub fn matches_search(term: &str, name: &str, description: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty()
        || name.to_lowercase().contains(&term)
        || description.to_lowercase().contains(&term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(price: Option<&str>, durations: &[DurationBucket]) -> FilterState {
        FilterState {
            companies: HashSet::new(),
            price: price.and_then(PriceRange::parse),
            durations: durations.to_vec(),
        }
    }

    #[test]
    fn cheap_quick_service_passes_matching_filter() {
        let f = filter(Some("0-1000"), &[DurationBucket::Quick]);
        assert!(f.matches(1, 500, 30));
    }

    #[test]
    fn quick_service_is_hidden_under_long_filter() {
        let f = filter(None, &[DurationBucket::Long]);
        assert!(!f.matches(1, 500, 30));
    }

    #[test]
    fn duration_bucket_boundaries() {
        assert!(DurationBucket::Quick.matches(30));
        assert!(!DurationBucket::Quick.matches(31));
        assert!(DurationBucket::Medium.matches(31));
        assert!(DurationBucket::Medium.matches(60));
        assert!(!DurationBucket::Medium.matches(61));
        assert!(DurationBucket::Long.matches(61));
    }

    #[test]
    fn open_ended_price_range_has_no_upper_bound() {
        let range = PriceRange::parse("3000-+").unwrap();
        assert!(!range.contains(2999));
        assert!(range.contains(3000));
        assert!(range.contains(1_000_000));
    }

    #[test]
    fn company_filter_is_set_membership() {
        let mut f = FilterState::default();
        f.toggle_company(2);
        assert!(!f.matches(1, 100, 10));
        assert!(f.matches(2, 100, 10));
        // повторное переключение снимает ограничение
        f.toggle_company(2);
        assert!(f.matches(1, 100, 10));
    }

    #[test]
    fn empty_filter_accepts_everything() {
        let f = FilterState::default();
        assert!(f.matches(99, 0, 0));
        assert_eq!(f.active_count(), 0);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(matches_search("мойка", "Мойка кузова", ""));
        assert!(matches_search("кузов", "Мойка", "полировка кузова"));
        assert!(!matches_search("шиномонтаж", "Мойка кузова", ""));
        assert!(matches_search("  ", "Мойка", ""));
    }

    #[test]
    fn garbage_bucket_strings_are_rejected() {
        assert_eq!(PriceRange::parse("дорого"), None);
        assert_eq!(DurationBucket::parse("instant"), None);
    }
}
