// src/produtos/produtos_structs.rs

use std::collections::HashMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::shared::validacao::{uuid_preenchido, ValidarModelo};
use crate::upload::upload_service::ArquivoRecebido;

/// Estrutura que representa um produto no banco de dados.
/// `nome_fornecedor` vem do join com a tabela de fornecedores nas consultas.
#[derive(Debug, Clone, PartialEq)]
pub struct Produto {
    pub id: Uuid,
    pub fornecedor_id: Uuid,
    pub nome: String,
    pub descricao: String,
    pub imagem: String,
    pub valor: BigDecimal,
    pub data_cadastro: DateTime<Utc>,
    pub ativo: bool,
    pub nome_fornecedor: Option<String>,
}

/// Estrutura para receber e devolver produtos em JSON.
/// `imagem_upload` é a imagem codificada em base64; nunca é devolvida nas respostas.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProdutoDto {
    pub id: Uuid,
    #[validate(custom(function = "uuid_preenchido", message = "O campo FornecedorId é obrigatório"))]
    pub fornecedor_id: Uuid,
    #[validate(length(min = 2, max = 200, message = "O campo Nome precisa ter entre 2 e 200 caracteres"))]
    pub nome: String,
    #[validate(length(min = 2, max = 1000, message = "O campo Descricao precisa ter entre 2 e 1000 caracteres"))]
    pub descricao: String,
    #[serde(skip_serializing)]
    pub imagem_upload: Option<String>,
    pub imagem: String,
    pub valor: BigDecimal,
    pub data_cadastro: Option<DateTime<Utc>>,
    pub ativo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_fornecedor: Option<String>,
}

impl From<Produto> for ProdutoDto {
    fn from(p: Produto) -> Self {
        ProdutoDto {
            id: p.id,
            fornecedor_id: p.fornecedor_id,
            nome: p.nome,
            descricao: p.descricao,
            imagem_upload: None,
            imagem: p.imagem,
            valor: p.valor,
            data_cadastro: Some(p.data_cadastro),
            ativo: p.ativo,
            nome_fornecedor: p.nome_fornecedor,
        }
    }
}

impl From<ProdutoDto> for Produto {
    fn from(dto: ProdutoDto) -> Self {
        Produto {
            id: dto.id,
            fornecedor_id: dto.fornecedor_id,
            nome: dto.nome,
            descricao: dto.descricao,
            imagem: dto.imagem,
            valor: dto.valor,
            data_cadastro: dto.data_cadastro.unwrap_or_else(Utc::now),
            ativo: dto.ativo,
            nome_fornecedor: None,
        }
    }
}

/// Produto recebido por formulário multipart, com a imagem como arquivo.
/// As regras de formato são as mesmas do `ProdutoDto`.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct ProdutoImagemDto {
    pub id: Uuid,
    #[validate(custom(function = "uuid_preenchido", message = "O campo FornecedorId é obrigatório"))]
    pub fornecedor_id: Uuid,
    #[validate(length(min = 2, max = 200, message = "O campo Nome precisa ter entre 2 e 200 caracteres"))]
    pub nome: String,
    #[validate(length(min = 2, max = 1000, message = "O campo Descricao precisa ter entre 2 e 1000 caracteres"))]
    pub descricao: String,
    #[serde(skip)]
    pub imagem_upload: Option<ArquivoRecebido>,
    pub imagem: String,
    pub valor: BigDecimal,
    pub data_cadastro: Option<DateTime<Utc>>,
    pub ativo: bool,
}

impl ProdutoImagemDto {
    /// Monta o DTO a partir dos campos de texto do formulário.
    /// Campos com formato inválido viram erros de modelo, junto com os de `validar`.
    pub fn from_formulario(
        campos: &HashMap<String, String>,
        imagem_upload: Option<ArquivoRecebido>,
    ) -> (Self, Vec<String>) {
        let mut erros = Vec::new();
        let campo = |nome: &str| campos.get(nome).map(|v| v.trim().to_string()).unwrap_or_default();

        let id = match campos.get("id").map(|v| v.trim()).filter(|v| !v.is_empty()) {
            Some(valor) => Uuid::parse_str(valor).unwrap_or_else(|_| {
                erros.push("O campo Id está em formato inválido".to_string());
                Uuid::nil()
            }),
            None => Uuid::nil(),
        };

        let fornecedor_id = match campos.get("fornecedor_id").map(|v| v.trim()).filter(|v| !v.is_empty()) {
            Some(valor) => Uuid::parse_str(valor).unwrap_or_else(|_| {
                erros.push("O campo FornecedorId está em formato inválido".to_string());
                Uuid::nil()
            }),
            None => Uuid::nil(),
        };

        let valor = match campos.get("valor").map(|v| v.trim()).filter(|v| !v.is_empty()) {
            Some(valor) => BigDecimal::from_str(&valor.replace(',', ".")).unwrap_or_else(|_| {
                erros.push("O campo Valor está em formato inválido".to_string());
                BigDecimal::from(0)
            }),
            None => {
                erros.push("O campo Valor é obrigatório".to_string());
                BigDecimal::from(0)
            }
        };

        let ativo = matches!(campo("ativo").to_lowercase().as_str(), "true" | "on" | "1");

        let dto = ProdutoImagemDto {
            id,
            fornecedor_id,
            nome: campo("nome"),
            descricao: campo("descricao"),
            imagem_upload,
            imagem: String::new(),
            valor,
            data_cadastro: None,
            ativo,
        };

        // Fornecedor malformado já foi acusado acima, não repete como ausente.
        let mut erros_modelo = dto.validar();
        if erros.iter().any(|e| e.starts_with("O campo FornecedorId")) {
            erros_modelo.retain(|e| !e.starts_with("O campo FornecedorId"));
        }
        erros.extend(erros_modelo);

        (dto, erros)
    }
}

impl From<ProdutoImagemDto> for Produto {
    fn from(dto: ProdutoImagemDto) -> Self {
        Produto {
            id: dto.id,
            fornecedor_id: dto.fornecedor_id,
            nome: dto.nome,
            descricao: dto.descricao,
            imagem: dto.imagem,
            valor: dto.valor,
            data_cadastro: dto.data_cadastro.unwrap_or_else(Utc::now),
            ativo: dto.ativo,
            nome_fornecedor: None,
        }
    }
}
