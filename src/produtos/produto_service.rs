// src/produtos/produto_service.rs

use std::sync::Arc;

use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::produto_repository::RepositorioProduto;
use super::produtos_structs::{Produto, ProdutoDto};
use crate::erros::ErroApi;
use crate::fornecedores::fornecedor_repository::RepositorioFornecedor;
use crate::shared::notificador::Notificador;
use crate::shared::validacao::validar_e_notificar;

pub const MSG_FORNECEDOR_INEXISTENTE: &str = "O fornecedor informado não existe.";
pub const MSG_VALOR_INVALIDO: &str = "O campo Valor precisa ser maior que 0";

#[derive(Clone)]
pub struct ProdutoService {
    produtos: Arc<dyn RepositorioProduto>,
    fornecedores: Arc<dyn RepositorioFornecedor>,
}

impl ProdutoService {
    pub fn new(produtos: Arc<dyn RepositorioProduto>, fornecedores: Arc<dyn RepositorioFornecedor>) -> Self {
        Self { produtos, fornecedores }
    }

    pub async fn adicionar(&self, produto: &Produto, notificador: &mut Notificador) -> Result<(), ErroApi> {
        if !self.validar(produto, notificador).await? {
            return Ok(());
        }

        self.produtos.adicionar(produto).await
    }

    pub async fn atualizar(&self, produto: &Produto, notificador: &mut Notificador) -> Result<(), ErroApi> {
        if !self.validar(produto, notificador).await? {
            return Ok(());
        }

        self.produtos.atualizar(produto).await
    }

    pub async fn remover(&self, id: Uuid) -> Result<(), ErroApi> {
        self.produtos.remover(id).await
    }

    /// Regras do produto: formato (as mesmas do DTO), valor positivo e fornecedor existente.
    /// Tudo é conferido antes de desistir. As rotas chamam antes de gravar a imagem.
    pub async fn validar(&self, produto: &Produto, notificador: &mut Notificador) -> Result<bool, ErroApi> {
        let mut valido = validar_e_notificar(&ProdutoDto::from(produto.clone()), notificador);

        if produto.valor <= BigDecimal::from(0) {
            notificador.notificar(MSG_VALOR_INVALIDO);
            valido = false;
        }

        if self.fornecedores.obter_por_id(produto.fornecedor_id).await?.is_none() {
            notificador.notificar(MSG_FORNECEDOR_INEXISTENTE);
            valido = false;
        }

        Ok(valido)
    }
}
