// src/shared/shared_structs.rs

use serde::{Deserialize, Serialize};

/// Estrutura genérica para padronizar o corpo das respostas da API.
/// Em caso de sucesso carrega `data` (quando houver); em caso de falha, a lista `errors`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenericResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")] // Não serializa 'data' se for None
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> GenericResponse<T> {
    pub fn sucesso(data: Option<T>) -> Self {
        Self {
            success: true,
            data,
            errors: None,
        }
    }

    pub fn falha(errors: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            errors: Some(errors),
        }
    }
}
