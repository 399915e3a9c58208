use serde::{Deserialize, Serialize};

/// Компания (автосервис), владеющая услугами.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
}

/// Услуга компании. Отсутствующее описание рендерится пустой строкой.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: i64,
    #[serde(default)]
    pub company_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Среднее время выполнения, минуты.
    pub average_duration: u32,
}

impl ServiceItem {
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Список компаний: seller-сервис отдаёт либо `{ "companies": [...] }`,
/// либо голый массив, в зависимости от ревизии API.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CompaniesPayload {
    Wrapped { companies: Vec<Company> },
    Bare(Vec<Company>),
}

impl CompaniesPayload {
    pub fn into_vec(self) -> Vec<Company> {
        match self {
            CompaniesPayload::Wrapped { companies } => companies,
            CompaniesPayload::Bare(companies) => companies,
        }
    }
}

/// Тот же конвертный дуализм для списка услуг.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ServicesPayload {
    Wrapped { services: Vec<ServiceItem> },
    Bare(Vec<ServiceItem>),
}

impl ServicesPayload {
    pub fn into_vec(self) -> Vec<ServiceItem> {
        match self {
            ServicesPayload::Wrapped { services } => services,
            ServicesPayload::Bare(services) => services,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCompanyRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub average_duration: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateServiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_duration: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn companies_parse_from_wrapped_and_bare() {
        let wrapped: CompaniesPayload =
            serde_json::from_str(r#"{"companies": [{"id": 1, "name": "Мойка №1"}]}"#).unwrap();
        assert_eq!(wrapped.into_vec().len(), 1);

        let bare: CompaniesPayload =
            serde_json::from_str(r#"[{"id": 1, "name": "Мойка №1"}, {"id": 2, "name": "Детейлинг"}]"#)
                .unwrap();
        assert_eq!(bare.into_vec().len(), 2);
    }

    #[test]
    fn service_without_description_renders_empty() {
        let svc: ServiceItem = serde_json::from_str(
            r#"{"id": 7, "company_id": 1, "name": "Мойка кузова", "average_duration": 30}"#,
        )
        .unwrap();
        assert_eq!(svc.description_or_empty(), "");
    }
}
