// src/shared/notificador.rs

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures::future::{ready, Ready};

/// Uma violação de regra de negócio reportada durante uma requisição.
/// A identidade é a posição na coleção, não existe id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notificacao {
    mensagem: String,
}

impl Notificacao {
    pub fn new(mensagem: impl Into<String>) -> Self {
        let mensagem = mensagem.into();
        debug_assert!(!mensagem.trim().is_empty(), "notificação sem mensagem");
        Self { mensagem }
    }

    pub fn mensagem(&self) -> &str {
        &self.mensagem
    }
}

/// Coletor de erros de negócio com escopo de uma única requisição.
///
/// Serviços e handlers registram aqui as violações encontradas em vez de
/// retornar erro, e seguem validando o que falta. O notificador só é
/// consultado no fim, quando a resposta é moldada (ver `shared::resposta`).
///
/// Cada requisição recebe uma instância nova através do extrator abaixo,
/// então nada vaza de uma requisição para outra.
#[derive(Debug, Default)]
pub struct Notificador {
    notificacoes: Vec<Notificacao>,
}

impl Notificador {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acrescenta uma notificação. A mensagem precisa ser não vazia.
    pub fn notificar(&mut self, mensagem: impl Into<String>) {
        let notificacao = Notificacao::new(mensagem);
        tracing::debug!(mensagem = notificacao.mensagem(), "Notificação registrada");
        self.notificacoes.push(notificacao);
    }

    pub fn tem_notificacao(&self) -> bool {
        !self.notificacoes.is_empty()
    }

    /// Mensagens acumuladas, na ordem em que foram reportadas. Não limpa a coleção.
    pub fn obter_notificacoes(&self) -> Vec<String> {
        self.notificacoes
            .iter()
            .map(|n| n.mensagem().to_string())
            .collect()
    }

    pub fn notificacoes(&self) -> &[Notificacao] {
        &self.notificacoes
    }

    /// Só é necessário quando a mesma instância é reaproveitada em um novo escopo.
    pub fn limpar(&mut self) {
        self.notificacoes.clear();
    }
}

/// Extrator do Actix Web: cada handler que declara um `Notificador` recebe uma instância vazia.
impl FromRequest for Notificador {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(_req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Notificador::new()))
    }
}
