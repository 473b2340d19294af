use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::domain::customer::{Customer, CustomerData, CustomerId};
use crate::domain::repositories::{CustomerRepository, RepositoryError};

// The id is cast so that both signed and unsigned key columns decode as u64.
const SELECT_CUSTOMER: &str = r#"
    SELECT CAST(id AS UNSIGNED) AS id, nome, email, telefone, data_nascimento
    FROM clientes
"#;

/// MySQL implementation of CustomerRepository
///
/// All statements are parameterized and run directly on the pool.
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    /// Creates a new MySqlCustomerRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for MySQL
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let query = format!("{SELECT_CUSTOMER} ORDER BY id DESC");
        let rows = sqlx::query_as::<_, Customer>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let query = format!("{SELECT_CUSTOMER} WHERE id = ?");
        let row = sqlx::query_as::<_, Customer>(&query)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn create(&self, data: &CustomerData) -> Result<CustomerId, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO clientes (nome, email, telefone, data_nascimento)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(data.name())
        .bind(data.email())
        .bind(data.phone())
        .bind(data.birth_date())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id();
        CustomerId::new(id).ok_or(RepositoryError::InvalidId(id))
    }

    async fn update(&self, id: CustomerId, data: &CustomerData) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE clientes
            SET nome = ?, email = ?, telefone = ?, data_nascimento = ?
            WHERE id = ?
            "#,
        )
        .bind(data.name())
        .bind(data.email())
        .bind(data.phone())
        .bind(data.birth_date())
        .bind(id.get())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: CustomerId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
