// src/fornecedores/fornecedor_repository.rs

use async_trait::async_trait;
use sqlx::{query, query_as, FromRow, PgPool};
use uuid::Uuid;

use super::endereco_structs::Endereco;
use super::fornecedor_structs::Fornecedor;
use crate::erros::ErroApi;
use crate::produtos::produto_repository::{ProdutoRow, SELECT_PRODUTOS};

/// Acesso aos fornecedores. Falhas aqui são sempre fatais;
/// regras de negócio ficam no `FornecedorService`.
#[async_trait]
pub trait RepositorioFornecedor: Send + Sync {
    async fn obter_todos(&self) -> Result<Vec<Fornecedor>, ErroApi>;

    async fn obter_por_id(&self, id: Uuid) -> Result<Option<Fornecedor>, ErroApi>;

    /// Fornecedor com o endereço carregado.
    async fn obter_fornecedor_endereco(&self, id: Uuid) -> Result<Option<Fornecedor>, ErroApi>;

    /// Fornecedor com endereço e produtos carregados.
    async fn obter_fornecedor_produtos_endereco(&self, id: Uuid) -> Result<Option<Fornecedor>, ErroApi>;

    /// Verifica se outro fornecedor (diferente de `ignorar`) já usa o documento.
    async fn documento_em_uso(&self, documento: &str, ignorar: Option<Uuid>) -> Result<bool, ErroApi>;

    /// Insere o fornecedor e, se houver, o endereço, na mesma transação.
    async fn adicionar(&self, fornecedor: &Fornecedor) -> Result<(), ErroApi>;

    async fn atualizar(&self, fornecedor: &Fornecedor) -> Result<(), ErroApi>;

    async fn remover(&self, id: Uuid) -> Result<(), ErroApi>;
}

#[derive(FromRow)]
struct FornecedorRow {
    id: Uuid,
    nome: String,
    documento: String,
    tipo_fornecedor: i32,
    ativo: bool,
}

impl From<FornecedorRow> for Fornecedor {
    fn from(row: FornecedorRow) -> Self {
        Fornecedor {
            id: row.id,
            nome: row.nome,
            documento: row.documento,
            tipo_fornecedor: row.tipo_fornecedor,
            ativo: row.ativo,
            endereco: None,
            produtos: Vec::new(),
        }
    }
}

const SELECT_FORNECEDORES: &str = "SELECT id, nome, documento, tipo_fornecedor, ativo FROM fornecedores";

pub struct FornecedorRepositoryPg {
    pool: PgPool,
}

impl FornecedorRepositoryPg {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn buscar_endereco(&self, fornecedor_id: Uuid) -> Result<Option<Endereco>, ErroApi> {
        let endereco = query_as::<_, Endereco>(
            "SELECT id, fornecedor_id, logradouro, numero, complemento, cep, bairro, cidade, estado \
             FROM enderecos WHERE fornecedor_id = $1",
        )
        .bind(fornecedor_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(endereco)
    }
}

#[async_trait]
impl RepositorioFornecedor for FornecedorRepositoryPg {
    async fn obter_todos(&self) -> Result<Vec<Fornecedor>, ErroApi> {
        let rows = query_as::<_, FornecedorRow>(&format!("{} ORDER BY nome", SELECT_FORNECEDORES))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Fornecedor::from).collect())
    }

    async fn obter_por_id(&self, id: Uuid) -> Result<Option<Fornecedor>, ErroApi> {
        let row = query_as::<_, FornecedorRow>(&format!("{} WHERE id = $1", SELECT_FORNECEDORES))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Fornecedor::from))
    }

    async fn obter_fornecedor_endereco(&self, id: Uuid) -> Result<Option<Fornecedor>, ErroApi> {
        let Some(mut fornecedor) = self.obter_por_id(id).await? else {
            return Ok(None);
        };
        fornecedor.endereco = self.buscar_endereco(id).await?;
        Ok(Some(fornecedor))
    }

    async fn obter_fornecedor_produtos_endereco(&self, id: Uuid) -> Result<Option<Fornecedor>, ErroApi> {
        let Some(mut fornecedor) = self.obter_fornecedor_endereco(id).await? else {
            return Ok(None);
        };
        let produtos = query_as::<_, ProdutoRow>(&format!(
            "{} WHERE p.fornecedor_id = $1 ORDER BY p.nome",
            SELECT_PRODUTOS
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        fornecedor.produtos = produtos.into_iter().map(Into::into).collect();
        Ok(Some(fornecedor))
    }

    async fn documento_em_uso(&self, documento: &str, ignorar: Option<Uuid>) -> Result<bool, ErroApi> {
        let existe = query_as::<_, (bool,)>(
            "SELECT EXISTS (SELECT 1 FROM fornecedores WHERE documento = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(documento)
        .bind(ignorar)
        .fetch_one(&self.pool)
        .await?;
        Ok(existe.0)
    }

    async fn adicionar(&self, fornecedor: &Fornecedor) -> Result<(), ErroApi> {
        let mut transaction = self.pool.begin().await?;

        query("INSERT INTO fornecedores (id, nome, documento, tipo_fornecedor, ativo) VALUES ($1, $2, $3, $4, $5)")
            .bind(fornecedor.id)
            .bind(&fornecedor.nome)
            .bind(&fornecedor.documento)
            .bind(fornecedor.tipo_fornecedor)
            .bind(fornecedor.ativo)
            .execute(&mut *transaction)
            .await?;

        if let Some(endereco) = &fornecedor.endereco {
            query(
                "INSERT INTO enderecos (id, fornecedor_id, logradouro, numero, complemento, cep, bairro, cidade, estado) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
            )
            .bind(endereco.id)
            .bind(fornecedor.id)
            .bind(&endereco.logradouro)
            .bind(&endereco.numero)
            .bind(&endereco.complemento)
            .bind(&endereco.cep)
            .bind(&endereco.bairro)
            .bind(&endereco.cidade)
            .bind(&endereco.estado)
            .execute(&mut *transaction)
            .await?;
        }

        transaction.commit().await?;
        tracing::info!(fornecedor_id = %fornecedor.id, "Fornecedor cadastrado");
        Ok(())
    }

    async fn atualizar(&self, fornecedor: &Fornecedor) -> Result<(), ErroApi> {
        query("UPDATE fornecedores SET nome = $1, documento = $2, tipo_fornecedor = $3, ativo = $4 WHERE id = $5")
            .bind(&fornecedor.nome)
            .bind(&fornecedor.documento)
            .bind(fornecedor.tipo_fornecedor)
            .bind(fornecedor.ativo)
            .bind(fornecedor.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn remover(&self, id: Uuid) -> Result<(), ErroApi> {
        query("DELETE FROM fornecedores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::info!(fornecedor_id = %id, "Fornecedor removido");
        Ok(())
    }
}
