// src/fornecedores/fornecedor_service.rs

use std::sync::Arc;

use uuid::Uuid;

use super::endereco_repository::RepositorioEndereco;
use super::endereco_structs::{Endereco, EnderecoDto};
use super::fornecedor_repository::RepositorioFornecedor;
use super::fornecedor_structs::{Fornecedor, FornecedorDto};
use crate::erros::ErroApi;
use crate::shared::notificador::Notificador;
use crate::shared::validacao::{apenas_numeros, validar_e_notificar};

pub const MSG_DOCUMENTO_EM_USO: &str = "Já existe um fornecedor com este documento informado.";
pub const MSG_FORNECEDOR_COM_PRODUTOS: &str = "O fornecedor possui produtos cadastrados!";

/// Regras de negócio de fornecedores e endereços.
///
/// Nenhuma violação vira erro: tudo vai para o `Notificador` e a operação
/// simplesmente não é persistida. `Err` só para falhas fatais do repositório.
/// As regras de formato são as mesmas dos DTOs, para que a mensagem seja uma só.
#[derive(Clone)]
pub struct FornecedorService {
    fornecedores: Arc<dyn RepositorioFornecedor>,
    enderecos: Arc<dyn RepositorioEndereco>,
}

impl FornecedorService {
    pub fn new(fornecedores: Arc<dyn RepositorioFornecedor>, enderecos: Arc<dyn RepositorioEndereco>) -> Self {
        Self { fornecedores, enderecos }
    }

    /// Cadastra o fornecedor e, se houver, o endereço.
    pub async fn adicionar(&self, fornecedor: &Fornecedor, notificador: &mut Notificador) -> Result<(), ErroApi> {
        let fornecedor = sem_mascara(fornecedor);

        // Fornecedor e endereço são validados juntos, para devolver todos os erros de uma vez.
        if !validar_e_notificar(&FornecedorDto::from(fornecedor.clone()), notificador) {
            return Ok(());
        }

        if self.fornecedores.documento_em_uso(&fornecedor.documento, None).await? {
            notificador.notificar(MSG_DOCUMENTO_EM_USO);
            return Ok(());
        }

        self.fornecedores.adicionar(&fornecedor).await
    }

    pub async fn atualizar(&self, fornecedor: &Fornecedor, notificador: &mut Notificador) -> Result<(), ErroApi> {
        let fornecedor = sem_mascara(fornecedor);

        if !validar_e_notificar(&FornecedorDto::from(fornecedor.clone()), notificador) {
            return Ok(());
        }

        // O próprio fornecedor não conta como duplicado.
        if self
            .fornecedores
            .documento_em_uso(&fornecedor.documento, Some(fornecedor.id))
            .await?
        {
            notificador.notificar(MSG_DOCUMENTO_EM_USO);
            return Ok(());
        }

        self.fornecedores.atualizar(&fornecedor).await
    }

    pub async fn atualizar_endereco(&self, endereco: &Endereco, notificador: &mut Notificador) -> Result<(), ErroApi> {
        if !validar_e_notificar(&EnderecoDto::from(endereco.clone()), notificador) {
            return Ok(());
        }

        self.enderecos.atualizar(endereco).await
    }

    /// Fornecedor com produtos não pode ser removido. O endereço sai antes do fornecedor.
    pub async fn remover(&self, id: Uuid, notificador: &mut Notificador) -> Result<(), ErroApi> {
        if let Some(fornecedor) = self.fornecedores.obter_fornecedor_produtos_endereco(id).await? {
            if !fornecedor.produtos.is_empty() {
                notificador.notificar(MSG_FORNECEDOR_COM_PRODUTOS);
                return Ok(());
            }
        }

        if let Some(endereco) = self.enderecos.obter_endereco_por_fornecedor(id).await? {
            self.enderecos.remover(endereco.id).await?;
        }

        self.fornecedores.remover(id).await
    }
}

// Documento guardado e comparado só com os dígitos: "529.982.247-25" e "52998224725" são o mesmo CPF.
fn sem_mascara(fornecedor: &Fornecedor) -> Fornecedor {
    Fornecedor {
        documento: apenas_numeros(&fornecedor.documento),
        ..fornecedor.clone()
    }
}
