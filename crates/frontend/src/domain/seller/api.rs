//! Клиент seller-сервиса: компании и их услуги.
//!
//! Чтения публичные и деградируют до пустого списка (каталог без данных
//! полезнее каталога с ошибкой); мутации требуют identity-заголовки и
//! возвращают ошибку вызывающему.

use contracts::seller::{
    CompaniesPayload, Company, CreateCompanyRequest, CreateServiceRequest, ServiceItem,
    ServicesPayload, UpdateCompanyRequest, UpdateServiceRequest,
};
use gloo_net::http::{Request, RequestBuilder};
use serde_json::json;

use crate::session::SessionContext;
use crate::shared::config::api_config;
use crate::shared::error;
use crate::shared::logger;

fn seller_url(path: &str) -> String {
    format!("{}{}", api_config().seller_base, path)
}

fn with_identity(mut builder: RequestBuilder, session: SessionContext) -> RequestBuilder {
    for (name, value) in session.auth_headers() {
        builder = builder.header(name, &value);
    }
    builder
}

// ---------------------------------------------------------------------------
// Компании
// ---------------------------------------------------------------------------

pub async fn get_companies() -> Vec<Company> {
    match fetch_companies().await {
        Ok(companies) => {
            logger::info(
                "Companies loaded from backend",
                Some(json!({"count": companies.len()})),
            );
            companies
        }
        Err(e) => {
            error::handle(&e, "get_companies");
            Vec::new()
        }
    }
}

async fn fetch_companies() -> Result<Vec<Company>, String> {
    let response = Request::get(&seller_url("/companies"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(format!("Failed to fetch companies: {}", response.status()));
    }
    let payload: CompaniesPayload = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(payload.into_vec())
}

pub async fn get_company(company_id: i64) -> Result<Company, String> {
    let response = Request::get(&seller_url(&format!("/companies/{}", company_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(format!("Failed to fetch company: {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_company(
    session: SessionContext,
    request: &CreateCompanyRequest,
) -> Result<Company, String> {
    let response = with_identity(Request::post(&seller_url("/companies")), session)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(format!("Failed to create company: {}", response.status()));
    }
    let company: Company = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    logger::info(
        "Company created successfully",
        Some(json!({"companyId": company.id})),
    );
    Ok(company)
}

pub async fn update_company(
    session: SessionContext,
    company_id: i64,
    request: &UpdateCompanyRequest,
) -> Result<Company, String> {
    let response = with_identity(
        Request::put(&seller_url(&format!("/companies/{}", company_id))),
        session,
    )
    .json(request)
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(format!("Failed to update company: {}", response.status()));
    }
    logger::info(
        "Company updated successfully",
        Some(json!({"companyId": company_id})),
    );
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_company(session: SessionContext, company_id: i64) -> Result<(), String> {
    let response = with_identity(
        Request::delete(&seller_url(&format!("/companies/{}", company_id))),
        session,
    )
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(format!("Failed to delete company: {}", response.status()));
    }
    logger::info(
        "Company deleted successfully",
        Some(json!({"companyId": company_id})),
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Услуги
// ---------------------------------------------------------------------------

pub async fn get_services(company_id: i64) -> Vec<ServiceItem> {
    match fetch_services(company_id).await {
        Ok(services) => {
            logger::info(
                "Services loaded from backend",
                Some(json!({"companyId": company_id, "count": services.len()})),
            );
            services
        }
        Err(e) => {
            error::handle(&e, "get_services");
            Vec::new()
        }
    }
}

async fn fetch_services(company_id: i64) -> Result<Vec<ServiceItem>, String> {
    let response = Request::get(&seller_url(&format!("/companies/{}/services", company_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(format!("Failed to fetch services: {}", response.status()));
    }
    let payload: ServicesPayload = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(payload.into_vec())
}

pub async fn get_service(company_id: i64, service_id: i64) -> Result<ServiceItem, String> {
    let response = Request::get(&seller_url(&format!(
        "/companies/{}/services/{}",
        company_id, service_id
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(format!("Failed to fetch service: {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_service(
    session: SessionContext,
    company_id: i64,
    request: &CreateServiceRequest,
) -> Result<ServiceItem, String> {
    let response = with_identity(
        Request::post(&seller_url(&format!("/companies/{}/services", company_id))),
        session,
    )
    .json(request)
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(format!("Failed to create service: {}", response.status()));
    }
    let service: ServiceItem = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    logger::info(
        "Service created successfully",
        Some(json!({"companyId": company_id, "serviceId": service.id})),
    );
    Ok(service)
}

pub async fn update_service(
    session: SessionContext,
    company_id: i64,
    service_id: i64,
    request: &UpdateServiceRequest,
) -> Result<ServiceItem, String> {
    let response = with_identity(
        Request::put(&seller_url(&format!(
            "/companies/{}/services/{}",
            company_id, service_id
        ))),
        session,
    )
    .json(request)
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(format!("Failed to update service: {}", response.status()));
    }
    logger::info(
        "Service updated successfully",
        Some(json!({"companyId": company_id, "serviceId": service_id})),
    );
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_service(
    session: SessionContext,
    company_id: i64,
    service_id: i64,
) -> Result<(), String> {
    let response = with_identity(
        Request::delete(&seller_url(&format!(
            "/companies/{}/services/{}",
            company_id, service_id
        ))),
        session,
    )
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(format!("Failed to delete service: {}", response.status()));
    }
    logger::info(
        "Service deleted successfully",
        Some(json!({"companyId": company_id, "serviceId": service_id})),
    );
    Ok(())
}
