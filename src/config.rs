// src/config.rs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ErroConfig {
    #[error("variável de ambiente obrigatória ausente: {0}")]
    VariavelAusente(&'static str),

    #[error("valor inválido para {variavel}: {valor}")]
    ValorInvalido { variavel: &'static str, valor: String },
}

/// Configuração lida uma única vez na inicialização do processo.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub porta: u16,
    /// Diretório fixo onde as imagens dos produtos são gravadas.
    pub diretorio_imagens: PathBuf,
    /// Limite do corpo das requisições de upload (JSON com base64 e multipart).
    pub limite_upload_bytes: usize,
}

impl Config {
    /// Lê as variáveis de ambiente (o `.env` já deve ter sido carregado pelo `main`).
    pub fn from_env() -> Result<Self, ErroConfig> {
        Self::from_lookup(|chave| std::env::var(chave).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ErroConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ErroConfig::VariavelAusente("DATABASE_URL"))?;

        let porta: u16 = match lookup("PORT") {
            Some(valor) => valor.parse().map_err(|_| ErroConfig::ValorInvalido {
                variavel: "PORT",
                valor,
            })?,
            None => 8080,
        };

        let limite_upload_bytes: usize = match lookup("LIMITE_UPLOAD_BYTES") {
            Some(valor) => valor.parse().map_err(|_| ErroConfig::ValorInvalido {
                variavel: "LIMITE_UPLOAD_BYTES",
                valor,
            })?,
            None => 40_000_000,
        };

        Ok(Config {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            porta,
            diretorio_imagens: lookup("DIRETORIO_IMAGENS")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("wwwroot/imagens")),
            limite_upload_bytes,
        })
    }
}
