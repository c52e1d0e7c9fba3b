// src/test_utils.rs
//! Repositórios em memória e dados de exemplo para os testes.

use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use actix_web::web;
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use uuid::Uuid;

use crate::erros::ErroApi;
use crate::fornecedores::endereco_repository::RepositorioEndereco;
use crate::fornecedores::endereco_structs::Endereco;
use crate::fornecedores::fornecedor_repository::RepositorioFornecedor;
use crate::fornecedores::fornecedor_structs::Fornecedor;
use crate::produtos::produto_repository::RepositorioProduto;
use crate::produtos::produtos_structs::Produto;
use crate::upload::upload_service::{GeradorIdentificador, ServicoUpload};
use crate::AppState;

/// Implementa os três repositórios sobre vetores protegidos por `RwLock`.
#[derive(Default)]
pub struct RepositorioMemoria {
    fornecedores: RwLock<Vec<Fornecedor>>,
    enderecos: RwLock<Vec<Endereco>>,
    produtos: RwLock<Vec<Produto>>,
}

impl RepositorioMemoria {
    pub fn inserir_fornecedor(&self, mut fornecedor: Fornecedor) {
        if let Some(endereco) = fornecedor.endereco.take() {
            self.inserir_endereco(endereco);
        }
        fornecedor.produtos.clear();
        self.fornecedores.write().unwrap().push(fornecedor);
    }

    pub fn inserir_endereco(&self, endereco: Endereco) {
        self.enderecos.write().unwrap().push(endereco);
    }

    pub fn inserir_produto(&self, produto: Produto) {
        self.produtos.write().unwrap().push(produto);
    }

    pub fn fornecedor(&self, id: Uuid) -> Option<Fornecedor> {
        self.fornecedores.read().unwrap().iter().find(|f| f.id == id).cloned()
    }

    pub fn endereco(&self, id: Uuid) -> Option<Endereco> {
        self.enderecos.read().unwrap().iter().find(|e| e.id == id).cloned()
    }

    pub fn produto(&self, id: Uuid) -> Option<Produto> {
        self.produtos.read().unwrap().iter().find(|p| p.id == id).cloned()
    }

    pub fn total_fornecedores(&self) -> usize {
        self.fornecedores.read().unwrap().len()
    }

    pub fn total_enderecos(&self) -> usize {
        self.enderecos.read().unwrap().len()
    }

    pub fn total_produtos(&self) -> usize {
        self.produtos.read().unwrap().len()
    }

    fn com_nome_fornecedor(&self, mut produto: Produto) -> Produto {
        produto.nome_fornecedor = self.fornecedor(produto.fornecedor_id).map(|f| f.nome);
        produto
    }
}

#[async_trait]
impl RepositorioFornecedor for RepositorioMemoria {
    async fn obter_todos(&self) -> Result<Vec<Fornecedor>, ErroApi> {
        Ok(self.fornecedores.read().unwrap().clone())
    }

    async fn obter_por_id(&self, id: Uuid) -> Result<Option<Fornecedor>, ErroApi> {
        Ok(self.fornecedor(id))
    }

    async fn obter_fornecedor_endereco(&self, id: Uuid) -> Result<Option<Fornecedor>, ErroApi> {
        Ok(self.fornecedor(id).map(|mut f| {
            f.endereco = self.enderecos.read().unwrap().iter().find(|e| e.fornecedor_id == id).cloned();
            f
        }))
    }

    async fn obter_fornecedor_produtos_endereco(&self, id: Uuid) -> Result<Option<Fornecedor>, ErroApi> {
        let fornecedor = RepositorioFornecedor::obter_fornecedor_endereco(self, id).await?;
        Ok(fornecedor.map(|mut f| {
            f.produtos = self
                .produtos
                .read()
                .unwrap()
                .iter()
                .filter(|p| p.fornecedor_id == id)
                .cloned()
                .collect();
            f
        }))
    }

    async fn documento_em_uso(&self, documento: &str, ignorar: Option<Uuid>) -> Result<bool, ErroApi> {
        Ok(self
            .fornecedores
            .read()
            .unwrap()
            .iter()
            .any(|f| f.documento == documento && Some(f.id) != ignorar))
    }

    async fn adicionar(&self, fornecedor: &Fornecedor) -> Result<(), ErroApi> {
        self.inserir_fornecedor(fornecedor.clone());
        Ok(())
    }

    async fn atualizar(&self, fornecedor: &Fornecedor) -> Result<(), ErroApi> {
        let mut fornecedores = self.fornecedores.write().unwrap();
        if let Some(atual) = fornecedores.iter_mut().find(|f| f.id == fornecedor.id) {
            atual.nome = fornecedor.nome.clone();
            atual.documento = fornecedor.documento.clone();
            atual.tipo_fornecedor = fornecedor.tipo_fornecedor;
            atual.ativo = fornecedor.ativo;
        }
        Ok(())
    }

    async fn remover(&self, id: Uuid) -> Result<(), ErroApi> {
        self.fornecedores.write().unwrap().retain(|f| f.id != id);
        Ok(())
    }
}

#[async_trait]
impl RepositorioEndereco for RepositorioMemoria {
    async fn obter_por_id(&self, id: Uuid) -> Result<Option<Endereco>, ErroApi> {
        Ok(self.endereco(id))
    }

    async fn obter_endereco_por_fornecedor(&self, fornecedor_id: Uuid) -> Result<Option<Endereco>, ErroApi> {
        Ok(self
            .enderecos
            .read()
            .unwrap()
            .iter()
            .find(|e| e.fornecedor_id == fornecedor_id)
            .cloned())
    }

    async fn atualizar(&self, endereco: &Endereco) -> Result<(), ErroApi> {
        let mut enderecos = self.enderecos.write().unwrap();
        if let Some(atual) = enderecos.iter_mut().find(|e| e.id == endereco.id) {
            *atual = Endereco {
                fornecedor_id: atual.fornecedor_id,
                ..endereco.clone()
            };
        }
        Ok(())
    }

    async fn remover(&self, id: Uuid) -> Result<(), ErroApi> {
        self.enderecos.write().unwrap().retain(|e| e.id != id);
        Ok(())
    }
}

#[async_trait]
impl RepositorioProduto for RepositorioMemoria {
    async fn obter_produtos_fornecedores(&self) -> Result<Vec<Produto>, ErroApi> {
        let produtos = self.produtos.read().unwrap().clone();
        Ok(produtos.into_iter().map(|p| self.com_nome_fornecedor(p)).collect())
    }

    async fn obter_por_id(&self, id: Uuid) -> Result<Option<Produto>, ErroApi> {
        Ok(self.produto(id).map(|p| self.com_nome_fornecedor(p)))
    }

    async fn obter_produtos_por_fornecedor(&self, fornecedor_id: Uuid) -> Result<Vec<Produto>, ErroApi> {
        let produtos = self.produtos.read().unwrap().clone();
        Ok(produtos
            .into_iter()
            .filter(|p| p.fornecedor_id == fornecedor_id)
            .map(|p| self.com_nome_fornecedor(p))
            .collect())
    }

    async fn adicionar(&self, produto: &Produto) -> Result<(), ErroApi> {
        self.inserir_produto(produto.clone());
        Ok(())
    }

    async fn atualizar(&self, produto: &Produto) -> Result<(), ErroApi> {
        let mut produtos = self.produtos.write().unwrap();
        if let Some(atual) = produtos.iter_mut().find(|p| p.id == produto.id) {
            *atual = produto.clone();
        }
        Ok(())
    }

    async fn remover(&self, id: Uuid) -> Result<(), ErroApi> {
        self.produtos.write().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}

pub struct GeradorFixo(pub &'static str);

impl GeradorIdentificador for GeradorFixo {
    fn gerar(&self) -> String {
        self.0.to_string()
    }
}

pub const LIMITE_TESTE: usize = 1_000_000;

/// Estado da aplicação sobre um `RepositorioMemoria`, gravando imagens em `diretorio`
/// com o prefixo fixo `"fixo"`.
pub fn estado_teste(banco: &Arc<RepositorioMemoria>, diretorio: &Path) -> web::Data<AppState> {
    let upload = ServicoUpload::com_gerador(diretorio, Arc::new(GeradorFixo("fixo")));
    web::Data::new(AppState::new(
        banco.clone(),
        banco.clone(),
        banco.clone(),
        upload,
        LIMITE_TESTE,
    ))
}

pub fn fornecedor_valido() -> Fornecedor {
    Fornecedor {
        id: Uuid::new_v4(),
        nome: "Acme Ltda".to_string(),
        documento: "11222333000181".to_string(),
        tipo_fornecedor: 2,
        ativo: true,
        endereco: None,
        produtos: Vec::new(),
    }
}

pub fn endereco_valido(fornecedor_id: Uuid) -> Endereco {
    Endereco {
        id: Uuid::new_v4(),
        fornecedor_id,
        logradouro: "Avenida Paulista".to_string(),
        numero: "1000".to_string(),
        complemento: None,
        cep: "01310100".to_string(),
        bairro: "Bela Vista".to_string(),
        cidade: "São Paulo".to_string(),
        estado: "SP".to_string(),
    }
}

pub fn produto_valido(fornecedor_id: Uuid) -> Produto {
    Produto {
        id: Uuid::new_v4(),
        fornecedor_id,
        nome: "Camiseta".to_string(),
        descricao: "Camiseta de algodão".to_string(),
        imagem: "fixo_camiseta.png".to_string(),
        valor: BigDecimal::from_str("49.90").unwrap(),
        data_cadastro: Utc::now(),
        ativo: true,
        nome_fornecedor: None,
    }
}
