// src/upload/upload_service.rs

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_web::web::{self, Bytes};
use base64::{engine::general_purpose::STANDARD, Engine};
use uuid::Uuid;

use crate::erros::ErroApi;
use crate::shared::notificador::Notificador;

pub const MSG_ARQUIVO_VAZIO: &str = "Arquivo de imagem vazio";
pub const MSG_ARQUIVO_AUSENTE: &str = "Forneça uma imagem para este produto!";
pub const MSG_ARQUIVO_DUPLICADO: &str = "Já existe um arquivo com este nome!";

/// Fonte do prefixo único de cada arquivo gravado.
pub trait GeradorIdentificador: Send + Sync {
    fn gerar(&self) -> String;
}

pub struct GeradorUuid;

impl GeradorIdentificador for GeradorUuid {
    fn gerar(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Arquivo recebido em um formulário multipart, já lido para a memória.
#[derive(Debug, Clone)]
pub struct ArquivoRecebido {
    pub nome_arquivo: String,
    pub conteudo: Bytes,
}

/// Grava imagens de produtos no diretório configurado, sem nunca sobrescrever.
///
/// Os métodos devolvem `Ok(Some(nome))` quando o arquivo foi gravado e
/// `Ok(None)` quando o upload foi recusado (o motivo já está no notificador).
/// `Err` fica reservado para falhas fatais: base64 malformado ou E/S.
#[derive(Clone)]
pub struct ServicoUpload {
    diretorio: PathBuf,
    gerador: Arc<dyn GeradorIdentificador>,
}

impl ServicoUpload {
    pub fn new(diretorio: impl Into<PathBuf>) -> Self {
        Self::com_gerador(diretorio, Arc::new(GeradorUuid))
    }

    pub fn com_gerador(diretorio: impl Into<PathBuf>, gerador: Arc<dyn GeradorIdentificador>) -> Self {
        Self {
            diretorio: diretorio.into(),
            gerador,
        }
    }

    pub fn diretorio(&self) -> &Path {
        &self.diretorio
    }

    /// `<prefixo único>_<nome>`. Só o último componente do nome é usado,
    /// então o arquivo nunca sai do diretório configurado.
    pub fn nome_final(&self, nome: &str) -> String {
        let nome = Path::new(nome)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{}_{}", self.gerador.gerar(), nome)
    }

    /// Upload de imagem codificada em base64 (corpo JSON).
    pub async fn salvar_base64(
        &self,
        conteudo_base64: &str,
        nome: &str,
        notificador: &mut Notificador,
    ) -> Result<Option<String>, ErroApi> {
        let conteudo = STANDARD.decode(conteudo_base64.trim())?;

        if conteudo.is_empty() {
            notificador.notificar(MSG_ARQUIVO_VAZIO);
            return Ok(None);
        }

        let nome_final = self.nome_final(nome);
        self.gravar(nome_final, Bytes::from(conteudo), notificador).await
    }

    /// Upload de arquivo vindo de formulário multipart.
    pub async fn salvar_arquivo(
        &self,
        arquivo: Option<&ArquivoRecebido>,
        notificador: &mut Notificador,
    ) -> Result<Option<String>, ErroApi> {
        let arquivo = match arquivo {
            Some(arquivo) if !arquivo.conteudo.is_empty() => arquivo,
            _ => {
                notificador.notificar(MSG_ARQUIVO_AUSENTE);
                return Ok(None);
            }
        };

        let nome_final = self.nome_final(&arquivo.nome_arquivo);
        self.gravar(nome_final, arquivo.conteudo.clone(), notificador).await
    }

    async fn gravar(
        &self,
        nome_final: String,
        conteudo: Bytes,
        notificador: &mut Notificador,
    ) -> Result<Option<String>, ErroApi> {
        let caminho = self.diretorio.join(&nome_final);

        if caminho.exists() {
            tracing::warn!(arquivo = %nome_final, "Upload recusado: arquivo já existe");
            notificador.notificar(MSG_ARQUIVO_DUPLICADO);
            return Ok(None);
        }

        let destino = caminho.clone();
        let resultado = web::block(move || gravar_novo(&destino, &conteudo)).await?;

        match resultado {
            Ok(()) => {
                tracing::info!(arquivo = %nome_final, "Imagem gravada");
                Ok(Some(nome_final))
            }
            // Outro escritor criou o arquivo entre a verificação e a escrita.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                tracing::warn!(arquivo = %nome_final, "Upload recusado: arquivo criado concorrentemente");
                notificador.notificar(MSG_ARQUIVO_DUPLICADO);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn gravar_novo(caminho: &Path, conteudo: &[u8]) -> io::Result<()> {
    let mut arquivo = OpenOptions::new().write(true).create_new(true).open(caminho)?;

    let resultado = arquivo.write_all(conteudo).and_then(|_| arquivo.sync_all());
    if let Err(e) = resultado {
        drop(arquivo);
        let _ = fs::remove_file(caminho);
        return Err(e);
    }
    Ok(())
}
