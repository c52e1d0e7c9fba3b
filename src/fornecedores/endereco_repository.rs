// src/fornecedores/endereco_repository.rs

use async_trait::async_trait;
use sqlx::{query, query_as, PgPool};
use uuid::Uuid;

use super::endereco_structs::Endereco;
use crate::erros::ErroApi;

#[async_trait]
pub trait RepositorioEndereco: Send + Sync {
    async fn obter_por_id(&self, id: Uuid) -> Result<Option<Endereco>, ErroApi>;

    async fn obter_endereco_por_fornecedor(&self, fornecedor_id: Uuid) -> Result<Option<Endereco>, ErroApi>;

    async fn atualizar(&self, endereco: &Endereco) -> Result<(), ErroApi>;

    async fn remover(&self, id: Uuid) -> Result<(), ErroApi>;
}

const SELECT_ENDERECOS: &str =
    "SELECT id, fornecedor_id, logradouro, numero, complemento, cep, bairro, cidade, estado FROM enderecos";

pub struct EnderecoRepositoryPg {
    pool: PgPool,
}

impl EnderecoRepositoryPg {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RepositorioEndereco for EnderecoRepositoryPg {
    async fn obter_por_id(&self, id: Uuid) -> Result<Option<Endereco>, ErroApi> {
        let endereco = query_as::<_, Endereco>(&format!("{} WHERE id = $1", SELECT_ENDERECOS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(endereco)
    }

    async fn obter_endereco_por_fornecedor(&self, fornecedor_id: Uuid) -> Result<Option<Endereco>, ErroApi> {
        let endereco = query_as::<_, Endereco>(&format!("{} WHERE fornecedor_id = $1", SELECT_ENDERECOS))
            .bind(fornecedor_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(endereco)
    }

    // O fornecedor dono do endereço não muda.
    async fn atualizar(&self, endereco: &Endereco) -> Result<(), ErroApi> {
        query(
            "UPDATE enderecos SET logradouro = $1, numero = $2, complemento = $3, cep = $4, \
             bairro = $5, cidade = $6, estado = $7 WHERE id = $8",
        )
        .bind(&endereco.logradouro)
        .bind(&endereco.numero)
        .bind(&endereco.complemento)
        .bind(&endereco.cep)
        .bind(&endereco.bairro)
        .bind(&endereco.cidade)
        .bind(&endereco.estado)
        .bind(endereco.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remover(&self, id: Uuid) -> Result<(), ErroApi> {
        query("DELETE FROM enderecos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
