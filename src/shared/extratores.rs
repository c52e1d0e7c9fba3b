// src/shared/extratores.rs

use actix_web::{error::InternalError, web, HttpResponse};

use super::shared_structs::GenericResponse;

/// Corpo JSON que não pode ser desserializado vira um 400 no mesmo formato das notificações.
pub fn json_config(limite_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limite_bytes)
        .error_handler(|err, _req| {
            tracing::debug!("Corpo JSON rejeitado: {}", err);
            let resposta = HttpResponse::BadRequest().json(GenericResponse::<()>::falha(vec![
                format!("Corpo da requisição inválido: {}", err),
            ]));
            InternalError::from_response(err, resposta).into()
        })
}

/// Identificador de rota que não é um UUID não corresponde a nenhum recurso.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        tracing::debug!("Identificador de rota inválido em {}: {}", req.path(), err);
        let resposta = HttpResponse::NotFound().json(GenericResponse::<()>::falha(vec![
            "Recurso não encontrado.".to_string(),
        ]));
        InternalError::from_response(err, resposta).into()
    })
}
