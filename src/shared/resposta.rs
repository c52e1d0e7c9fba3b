// src/shared/resposta.rs

use actix_web::{body::BoxBody, http::StatusCode, HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use super::notificador::Notificador;
use super::shared_structs::GenericResponse;

/// Status usado quando a operação termina sem notificações.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSucesso {
    /// Leituras e atualizações.
    Ok,
    /// Criação de recurso.
    Criado,
    /// Sucesso sem corpo.
    SemConteudo,
}

impl StatusSucesso {
    fn status_code(self) -> StatusCode {
        match self {
            StatusSucesso::Ok => StatusCode::OK,
            StatusSucesso::Criado => StatusCode::CREATED,
            StatusSucesso::SemConteudo => StatusCode::NO_CONTENT,
        }
    }
}

/// Resultado final de um handler, já decidido. Convertido em `HttpResponse` pelo `Responder`.
#[derive(Debug, PartialEq)]
pub enum RespostaApi<T> {
    Sucesso { status: StatusCode, dados: Option<T> },
    Falha { status: StatusCode, erros: Vec<String> },
}

impl<T> RespostaApi<T> {
    /// Ausência do recurso não é notificação: encerra a requisição com 404
    /// antes que o notificador seja consultado.
    pub fn nao_encontrado(mensagem: impl Into<String>) -> Self {
        RespostaApi::Falha {
            status: StatusCode::NOT_FOUND,
            erros: vec![mensagem.into()],
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RespostaApi::Sucesso { status, .. } | RespostaApi::Falha { status, .. } => *status,
        }
    }

    pub fn is_sucesso(&self) -> bool {
        matches!(self, RespostaApi::Sucesso { .. })
    }
}

/// Ponto único de decisão da resposta.
///
/// Os erros de modelo são encaminhados para o notificador antes de tudo, de
/// forma que erros de validação e de negócio saiam pelo mesmo canal. Sem
/// notificações o resultado é sucesso com `dados`; caso contrário é 400 com
/// as mensagens na ordem em que foram reportadas.
pub fn moldar_resposta<T>(
    notificador: &mut Notificador,
    dados: Option<T>,
    erros_modelo: Vec<String>,
    status: StatusSucesso,
) -> RespostaApi<T> {
    for erro in erros_modelo {
        notificador.notificar(erro);
    }

    if !notificador.tem_notificacao() {
        return RespostaApi::Sucesso {
            status: status.status_code(),
            dados,
        };
    }

    RespostaApi::Falha {
        status: StatusCode::BAD_REQUEST,
        erros: notificador.obter_notificacoes(),
    }
}

impl<T: Serialize> Responder for RespostaApi<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            RespostaApi::Sucesso { status, .. } if status == StatusCode::NO_CONTENT => {
                HttpResponse::NoContent().finish()
            }
            RespostaApi::Sucesso { status, dados } => {
                HttpResponse::build(status).json(GenericResponse::sucesso(dados))
            }
            RespostaApi::Falha { status, erros } => {
                tracing::debug!(status = %status, erros = ?erros, "Requisição encerrada com falha");
                HttpResponse::build(status).json(GenericResponse::<()>::falha(erros))
            }
        }
    }
}
