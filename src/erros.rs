// src/erros.rs

use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::shared::shared_structs::GenericResponse;

/// Falhas inesperadas, fora do canal de notificações.
///
/// Nada aqui é tratado dentro dos serviços: o erro sobe com `?` até o handler
/// e o Actix converte em resposta pelo `ResponseError` abaixo.
#[derive(Debug, Error)]
pub enum ErroApi {
    #[error("erro de banco de dados: {0}")]
    Banco(#[from] sqlx::Error),

    #[error("erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("conteúdo base64 inválido: {0}")]
    Base64Invalido(#[from] base64::DecodeError),

    #[error("tarefa bloqueante cancelada")]
    TarefaBloqueante,

    #[error("falha ao ler formulário multipart: {0}")]
    Multipart(String),

    #[error("arquivo excede o limite de {limite} bytes")]
    PayloadMuitoGrande { limite: usize },
}

impl From<BlockingError> for ErroApi {
    fn from(_: BlockingError) -> Self {
        ErroApi::TarefaBloqueante
    }
}

impl From<actix_multipart::MultipartError> for ErroApi {
    fn from(e: actix_multipart::MultipartError) -> Self {
        ErroApi::Multipart(e.to_string())
    }
}

impl ResponseError for ErroApi {
    fn status_code(&self) -> StatusCode {
        match self {
            ErroApi::Multipart(_) => StatusCode::BAD_REQUEST,
            ErroApi::PayloadMuitoGrande { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let mensagem = if status.is_server_error() {
            tracing::error!("Erro interno: {:#}", self);
            "Ocorreu um erro interno no servidor.".to_string()
        } else {
            tracing::warn!("Requisição rejeitada: {}", self);
            self.to_string()
        };

        HttpResponse::build(status).json(GenericResponse::<()>::falha(vec![mensagem]))
    }
}
