// src/fornecedores/endereco_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::shared::validacao::somente_digitos;

/// Endereço de um fornecedor, como está no banco de dados.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Endereco {
    pub id: Uuid,
    pub fornecedor_id: Uuid,
    pub logradouro: String,
    pub numero: String,
    pub complemento: Option<String>,
    pub cep: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
}

/// Endereço recebido e devolvido pela API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EnderecoDto {
    pub id: Uuid,
    pub fornecedor_id: Uuid,
    #[validate(length(min = 2, max = 200, message = "O campo Logradouro precisa ter entre 2 e 200 caracteres"))]
    pub logradouro: String,
    #[validate(length(min = 1, max = 50, message = "O campo Numero precisa ter entre 1 e 50 caracteres"))]
    pub numero: String,
    pub complemento: Option<String>,
    // CEP sem máscara: 8 dígitos
    #[validate(length(equal = 8, message = "O campo Cep precisa ter 8 caracteres"))]
    #[validate(custom(function = "somente_digitos", message = "O campo Cep deve conter apenas números"))]
    pub cep: String,
    #[validate(length(min = 2, max = 100, message = "O campo Bairro precisa ter entre 2 e 100 caracteres"))]
    pub bairro: String,
    #[validate(length(min = 2, max = 100, message = "O campo Cidade precisa ter entre 2 e 100 caracteres"))]
    pub cidade: String,
    #[validate(length(min = 2, max = 50, message = "O campo Estado precisa ter entre 2 e 50 caracteres"))]
    pub estado: String,
}

impl From<Endereco> for EnderecoDto {
    fn from(e: Endereco) -> Self {
        EnderecoDto {
            id: e.id,
            fornecedor_id: e.fornecedor_id,
            logradouro: e.logradouro,
            numero: e.numero,
            complemento: e.complemento,
            cep: e.cep,
            bairro: e.bairro,
            cidade: e.cidade,
            estado: e.estado,
        }
    }
}

impl From<EnderecoDto> for Endereco {
    fn from(dto: EnderecoDto) -> Self {
        Endereco {
            id: dto.id,
            fornecedor_id: dto.fornecedor_id,
            logradouro: dto.logradouro,
            numero: dto.numero,
            complemento: dto.complemento.filter(|c| !c.trim().is_empty()),
            cep: dto.cep,
            bairro: dto.bairro,
            cidade: dto.cidade,
            estado: dto.estado,
        }
    }
}
