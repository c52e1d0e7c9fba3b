// src/produtos/produto_repository.rs

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::{query, query_as, FromRow, PgPool};
use uuid::Uuid;

use super::produtos_structs::Produto;
use crate::erros::ErroApi;

#[async_trait]
pub trait RepositorioProduto: Send + Sync {
    /// Todos os produtos, com o nome do fornecedor.
    async fn obter_produtos_fornecedores(&self) -> Result<Vec<Produto>, ErroApi>;

    async fn obter_por_id(&self, id: Uuid) -> Result<Option<Produto>, ErroApi>;

    async fn obter_produtos_por_fornecedor(&self, fornecedor_id: Uuid) -> Result<Vec<Produto>, ErroApi>;

    async fn adicionar(&self, produto: &Produto) -> Result<(), ErroApi>;

    async fn atualizar(&self, produto: &Produto) -> Result<(), ErroApi>;

    async fn remover(&self, id: Uuid) -> Result<(), ErroApi>;
}

/// Linha de produto com o nome do fornecedor (LEFT JOIN).
#[derive(FromRow)]
pub(crate) struct ProdutoRow {
    id: Uuid,
    fornecedor_id: Uuid,
    nome: String,
    descricao: String,
    imagem: String,
    valor: BigDecimal,
    data_cadastro: DateTime<Utc>,
    ativo: bool,
    nome_fornecedor: Option<String>,
}

impl From<ProdutoRow> for Produto {
    fn from(row: ProdutoRow) -> Self {
        Produto {
            id: row.id,
            fornecedor_id: row.fornecedor_id,
            nome: row.nome,
            descricao: row.descricao,
            imagem: row.imagem,
            valor: row.valor,
            data_cadastro: row.data_cadastro,
            ativo: row.ativo,
            nome_fornecedor: row.nome_fornecedor,
        }
    }
}

pub(crate) const SELECT_PRODUTOS: &str = "SELECT p.id, p.fornecedor_id, p.nome, p.descricao, p.imagem, p.valor, \
     p.data_cadastro, p.ativo, f.nome AS nome_fornecedor \
     FROM produtos p LEFT JOIN fornecedores f ON f.id = p.fornecedor_id";

pub struct ProdutoRepositoryPg {
    pool: PgPool,
}

impl ProdutoRepositoryPg {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RepositorioProduto for ProdutoRepositoryPg {
    async fn obter_produtos_fornecedores(&self) -> Result<Vec<Produto>, ErroApi> {
        // Executa a consulta para buscar todos os produtos com o nome do fornecedor
        let rows = query_as::<_, ProdutoRow>(&format!("{} ORDER BY p.nome", SELECT_PRODUTOS))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Produto::from).collect())
    }

    async fn obter_por_id(&self, id: Uuid) -> Result<Option<Produto>, ErroApi> {
        let row = query_as::<_, ProdutoRow>(&format!("{} WHERE p.id = $1", SELECT_PRODUTOS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Produto::from))
    }

    async fn obter_produtos_por_fornecedor(&self, fornecedor_id: Uuid) -> Result<Vec<Produto>, ErroApi> {
        let rows = query_as::<_, ProdutoRow>(&format!("{} WHERE p.fornecedor_id = $1 ORDER BY p.nome", SELECT_PRODUTOS))
            .bind(fornecedor_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Produto::from).collect())
    }

    async fn adicionar(&self, produto: &Produto) -> Result<(), ErroApi> {
        query(
            "INSERT INTO produtos (id, fornecedor_id, nome, descricao, imagem, valor, data_cadastro, ativo) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(produto.id)
        .bind(produto.fornecedor_id)
        .bind(&produto.nome)
        .bind(&produto.descricao)
        .bind(&produto.imagem)
        .bind(&produto.valor)
        .bind(produto.data_cadastro)
        .bind(produto.ativo)
        .execute(&self.pool)
        .await?;
        // Registra o cadastro no log
        tracing::info!(produto_id = %produto.id, "Produto cadastrado");
        Ok(())
    }

    async fn atualizar(&self, produto: &Produto) -> Result<(), ErroApi> {
        // Atualiza todos os campos editáveis do produto
        query(
            "UPDATE produtos SET fornecedor_id = $1, nome = $2, descricao = $3, imagem = $4, valor = $5, ativo = $6 \
             WHERE id = $7",
        )
        .bind(produto.fornecedor_id)
        .bind(&produto.nome)
        .bind(&produto.descricao)
        .bind(&produto.imagem)
        .bind(&produto.valor)
        .bind(produto.ativo)
        .bind(produto.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remover(&self, id: Uuid) -> Result<(), ErroApi> {
        query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::info!(produto_id = %id, "Produto removido");
        Ok(())
    }
}
