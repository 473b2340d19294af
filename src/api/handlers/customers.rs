use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::MySqlPool;

use crate::api::errors::ApiError;
use crate::domain::customer::{Customer, CustomerData, CustomerId, ValidationError};
use crate::domain::repositories::CustomerRepository;
use crate::infrastructure::repositories::MySqlCustomerRepository;

/// Request body for creating or replacing a customer
///
/// `nome` and `email` stay loosely typed so that a wrong type is reported by
/// the validator instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerRequest {
    #[serde(default)]
    pub nome: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub data_nascimento: Option<String>,
}

impl CustomerRequest {
    fn into_customer_data(self) -> Result<CustomerData, ValidationError> {
        CustomerData::new(
            self.nome.as_ref(),
            self.email.as_ref(),
            self.telefone,
            self.data_nascimento,
        )
    }
}

/// Response carrying only a message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Response from customer creation
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: CustomerId,
}

/// List all customers, newest first
///
/// GET /clientes
pub async fn list_customers(
    State(pool): State<MySqlPool>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let repo = MySqlCustomerRepository::new(pool);
    let customers = repo
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Erro ao buscar clientes", e))?;

    Ok(Json(customers))
}

/// Get a customer by ID
///
/// GET /clientes/:id
pub async fn get_customer(
    State(pool): State<MySqlPool>,
    Path(raw_id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    let id = CustomerId::parse(&raw_id)?;

    let repo = MySqlCustomerRepository::new(pool);
    let customer = repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Erro ao buscar cliente", e))?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(customer))
}

/// Create a new customer
///
/// POST /clientes
pub async fn create_customer(
    State(pool): State<MySqlPool>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(req) = payload?;
    let data = req.into_customer_data()?;

    let repo = MySqlCustomerRepository::new(pool);
    let id = repo
        .create(&data)
        .await
        .map_err(|e| ApiError::internal("Erro ao cadastrar cliente", e))?;

    tracing::info!(customer_id = %id, "Customer created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Cliente cadastrado com sucesso".to_string(),
            id,
        }),
    ))
}

/// Replace every mutable field of a customer
///
/// PUT /clientes/:id
pub async fn update_customer(
    State(pool): State<MySqlPool>,
    Path(raw_id): Path<String>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    // id is checked before the body
    let id = CustomerId::parse(&raw_id)?;
    let Json(req) = payload?;
    let data = req.into_customer_data()?;

    let repo = MySqlCustomerRepository::new(pool);
    let updated = repo
        .update(id, &data)
        .await
        .map_err(|e| ApiError::internal("Erro ao atualizar cliente", e))?;

    if !updated {
        return Err(ApiError::not_found());
    }

    tracing::info!(customer_id = %id, "Customer updated");

    Ok(MessageResponse::new("Cliente atualizado com sucesso."))
}

/// Delete a customer
///
/// DELETE /clientes/:id
pub async fn delete_customer(
    State(pool): State<MySqlPool>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = CustomerId::parse(&raw_id)?;

    let repo = MySqlCustomerRepository::new(pool);
    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| ApiError::internal("Erro ao remover cliente", e))?;

    if !deleted {
        return Err(ApiError::not_found());
    }

    tracing::info!(customer_id = %id, "Customer deleted");

    Ok(MessageResponse::new("Cliente removido com sucesso."))
}
