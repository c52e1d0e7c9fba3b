// src/fornecedores/fornecedor_structs.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::endereco_structs::{Endereco, EnderecoDto};
use crate::produtos::produtos_structs::{Produto, ProdutoDto};
use crate::shared::validacao::{apenas_numeros, cnpj_valido, cpf_valido, erro_com_mensagem};

pub const MSG_ID_DIFERENTE: &str = "O id informado não é o mesmo que foi passado na query";
pub const MSG_DOCUMENTO_INVALIDO: &str = "O documento fornecido é inválido.";

/// Tipo do fornecedor, gravado como inteiro (1 = pessoa física, 2 = pessoa jurídica).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoFornecedor {
    PessoaFisica = 1,
    PessoaJuridica = 2,
}

impl TipoFornecedor {
    pub fn from_i32(valor: i32) -> Option<Self> {
        match valor {
            1 => Some(TipoFornecedor::PessoaFisica),
            2 => Some(TipoFornecedor::PessoaJuridica),
            _ => None,
        }
    }
}

/// Fornecedor com seus relacionamentos.
/// `endereco` e `produtos` só vêm preenchidos nas consultas que os carregam.
#[derive(Debug, Clone, PartialEq)]
pub struct Fornecedor {
    pub id: Uuid,
    pub nome: String,
    pub documento: String,
    pub tipo_fornecedor: i32,
    pub ativo: bool,
    pub endereco: Option<Endereco>,
    pub produtos: Vec<Produto>,
}

impl Fornecedor {
    pub fn tipo(&self) -> Option<TipoFornecedor> {
        TipoFornecedor::from_i32(self.tipo_fornecedor)
    }
}

/// Fornecedor recebido e devolvido pela API.
/// O documento é conferido contra o tipo (CPF para pessoa física, CNPJ para jurídica).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validar_documento", skip_on_field_errors = false))]
pub struct FornecedorDto {
    pub id: Uuid,
    #[validate(length(min = 2, max = 100, message = "O campo Nome precisa ter entre 2 e 100 caracteres"))]
    pub nome: String,
    #[validate(length(min = 11, max = 14, message = "O campo Documento precisa ter entre 11 e 14 caracteres"))]
    pub documento: String,
    #[validate(range(
        min = 1,
        max = 2,
        message = "O campo TipoFornecedor precisa ser 1 (pessoa física) ou 2 (pessoa jurídica)"
    ))]
    pub tipo_fornecedor: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate]
    pub endereco: Option<EnderecoDto>,
    pub ativo: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub produtos: Vec<ProdutoDto>,
}

/// Confere tamanho e dígitos verificadores do documento já sem máscara.
/// Tipo inválido ou documento vazio já são acusados pelas validações de campo.
fn validar_documento(dto: &FornecedorDto) -> Result<(), ValidationError> {
    let documento = apenas_numeros(&dto.documento);
    if documento.is_empty() {
        return Ok(());
    }

    let (tamanho, valido): (usize, fn(&str) -> bool) = match TipoFornecedor::from_i32(dto.tipo_fornecedor) {
        Some(TipoFornecedor::PessoaFisica) => (11, cpf_valido),
        Some(TipoFornecedor::PessoaJuridica) => (14, cnpj_valido),
        None => return Ok(()),
    };

    if documento.len() != tamanho {
        return Err(erro_com_mensagem(
            "documento",
            format!(
                "O campo Documento precisa ter {} caracteres e foi fornecido {}.",
                tamanho,
                documento.len()
            ),
        ));
    }
    if !valido(&documento) {
        return Err(erro_com_mensagem("documento", MSG_DOCUMENTO_INVALIDO));
    }
    Ok(())
}

impl From<Fornecedor> for FornecedorDto {
    fn from(f: Fornecedor) -> Self {
        FornecedorDto {
            id: f.id,
            nome: f.nome,
            documento: f.documento,
            tipo_fornecedor: f.tipo_fornecedor,
            endereco: f.endereco.map(EnderecoDto::from),
            ativo: f.ativo,
            produtos: f.produtos.into_iter().map(ProdutoDto::from).collect(),
        }
    }
}

/// Os produtos do DTO são somente leitura e não voltam para a entidade.
/// O endereço herda o id do fornecedor e o documento é gravado só com os dígitos.
impl From<FornecedorDto> for Fornecedor {
    fn from(dto: FornecedorDto) -> Self {
        let id = dto.id;
        Fornecedor {
            id,
            nome: dto.nome,
            documento: apenas_numeros(&dto.documento),
            tipo_fornecedor: dto.tipo_fornecedor,
            ativo: dto.ativo,
            endereco: dto.endereco.map(|e| Endereco {
                fornecedor_id: id,
                ..Endereco::from(e)
            }),
            produtos: Vec::new(),
        }
    }
}
