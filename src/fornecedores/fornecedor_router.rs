// src/fornecedores/fornecedor_router.rs

use actix_web::{delete, get, post, put, web};
use uuid::Uuid;

// Importa as structs definidas nos módulos de fornecedor e endereço
use super::endereco_structs::{Endereco, EnderecoDto};
use super::fornecedor_structs::{Fornecedor, FornecedorDto, MSG_ID_DIFERENTE};
use crate::erros::ErroApi;
// Notificações da requisição e a montagem da resposta padrão
use crate::shared::notificador::Notificador;
use crate::shared::resposta::{moldar_resposta, RespostaApi, StatusSucesso};
use crate::shared::validacao::ValidarModelo;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

const FORNECEDOR_NAO_ENCONTRADO: &str = "Fornecedor não encontrado.";
const ENDERECO_NAO_ENCONTRADO: &str = "Endereço não encontrado.";

/// Registra as rotas de fornecedores.
pub fn configurar(cfg: &mut web::ServiceConfig) {
    cfg.service(buscar_fornecedores)
        .service(buscar_fornecedor_por_id)
        .service(buscar_endereco_por_id)
        .service(cadastrar_fornecedor)
        .service(atualizar_fornecedor)
        .service(atualizar_endereco)
        .service(deletar_fornecedor);
}

/// Rota para listar todos os fornecedores.
#[get("/api/fornecedores")]
pub async fn buscar_fornecedores(
    data: web::Data<AppState>,
    mut notificador: Notificador,
) -> Result<RespostaApi<Vec<FornecedorDto>>, ErroApi> {
    // Busca todos os fornecedores e converte cada um para o DTO de resposta
    let fornecedores: Vec<FornecedorDto> = data
        .fornecedores
        .obter_todos()
        .await?
        .into_iter()
        .map(FornecedorDto::from)
        .collect();

    Ok(moldar_resposta(&mut notificador, Some(fornecedores), Vec::new(), StatusSucesso::Ok))
}

/// Rota para buscar um fornecedor, com endereço e produtos.
#[get("/api/fornecedores/{id}")]
pub async fn buscar_fornecedor_por_id(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    mut notificador: Notificador,
) -> Result<RespostaApi<FornecedorDto>, ErroApi> {
    let id = path.into_inner();

    // Carrega o fornecedor junto com o endereço e os produtos
    let Some(fornecedor) = data.fornecedores.obter_fornecedor_produtos_endereco(id).await? else {
        return Ok(RespostaApi::nao_encontrado(FORNECEDOR_NAO_ENCONTRADO));
    };

    Ok(moldar_resposta(
        &mut notificador,
        Some(FornecedorDto::from(fornecedor)),
        Vec::new(),
        StatusSucesso::Ok,
    ))
}

#[get("/api/fornecedores/obter-endereco/{id}")]
pub async fn buscar_endereco_por_id(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    mut notificador: Notificador,
) -> Result<RespostaApi<EnderecoDto>, ErroApi> {
    let Some(endereco) = data.enderecos.obter_por_id(path.into_inner()).await? else {
        return Ok(RespostaApi::nao_encontrado(ENDERECO_NAO_ENCONTRADO));
    };

    Ok(moldar_resposta(
        &mut notificador,
        Some(EnderecoDto::from(endereco)),
        Vec::new(),
        StatusSucesso::Ok,
    ))
}

/// Rota para cadastrar um fornecedor (e o endereço, se enviado).
/// Um id nulo no corpo é substituído por um novo.
#[post("/api/fornecedores")]
pub async fn cadastrar_fornecedor(
    data: web::Data<AppState>,
    item: web::Json<FornecedorDto>,
    mut notificador: Notificador,
) -> Result<RespostaApi<FornecedorDto>, ErroApi> {
    let mut fornecedor_dto = item.into_inner();

    // Erros de formato do corpo encerram a requisição com 400
    let erros_modelo = fornecedor_dto.validar();
    if !erros_modelo.is_empty() {
        return Ok(moldar_resposta(&mut notificador, Some(fornecedor_dto), erros_modelo, StatusSucesso::Criado));
    }

    // Gera os ids que não vieram no corpo; o endereço aponta para o fornecedor
    if fornecedor_dto.id.is_nil() {
        fornecedor_dto.id = Uuid::new_v4();
    }
    if let Some(endereco) = fornecedor_dto.endereco.as_mut() {
        if endereco.id.is_nil() {
            endereco.id = Uuid::new_v4();
        }
        endereco.fornecedor_id = fornecedor_dto.id;
    }

    // A resposta devolve o documento como foi gravado (só dígitos).
    let fornecedor = Fornecedor::from(fornecedor_dto);
    data.fornecedor_service.adicionar(&fornecedor, &mut notificador).await?;

    Ok(moldar_resposta(&mut notificador, Some(FornecedorDto::from(fornecedor)), Vec::new(), StatusSucesso::Criado))
}

/// Rota para atualizar os dados do fornecedor (o endereço tem rota própria).
#[put("/api/fornecedores/{id}")]
pub async fn atualizar_fornecedor(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    item: web::Json<FornecedorDto>,
    mut notificador: Notificador,
) -> Result<RespostaApi<FornecedorDto>, ErroApi> {
    let id = path.into_inner();
    let fornecedor_dto = item.into_inner();

    // O id da rota precisa ser o mesmo do corpo
    if id != fornecedor_dto.id {
        notificador.notificar(MSG_ID_DIFERENTE);
        return Ok(moldar_resposta(&mut notificador, Some(fornecedor_dto), Vec::new(), StatusSucesso::Ok));
    }

    let erros_modelo = fornecedor_dto.validar();
    if !erros_modelo.is_empty() {
        return Ok(moldar_resposta(&mut notificador, Some(fornecedor_dto), erros_modelo, StatusSucesso::Ok));
    }

    if data.fornecedores.obter_por_id(id).await?.is_none() {
        return Ok(RespostaApi::nao_encontrado(FORNECEDOR_NAO_ENCONTRADO));
    }

    let fornecedor = Fornecedor::from(fornecedor_dto);
    data.fornecedor_service.atualizar(&fornecedor, &mut notificador).await?;

    Ok(moldar_resposta(&mut notificador, Some(FornecedorDto::from(fornecedor)), Vec::new(), StatusSucesso::Ok))
}

/// Rota para atualizar o endereço de um fornecedor.
/// Divergência de id segue a mesma política da atualização do fornecedor.
#[put("/api/fornecedores/atualizar-endereco/{id}")]
pub async fn atualizar_endereco(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    item: web::Json<EnderecoDto>,
    mut notificador: Notificador,
) -> Result<RespostaApi<EnderecoDto>, ErroApi> {
    let id = path.into_inner();
    let mut endereco_dto = item.into_inner();

    if id != endereco_dto.id {
        notificador.notificar(MSG_ID_DIFERENTE);
        return Ok(moldar_resposta(&mut notificador, Some(endereco_dto), Vec::new(), StatusSucesso::Ok));
    }

    let erros_modelo = endereco_dto.validar();
    if !erros_modelo.is_empty() {
        return Ok(moldar_resposta(&mut notificador, Some(endereco_dto), erros_modelo, StatusSucesso::Ok));
    }

    let Some(atual) = data.enderecos.obter_por_id(id).await? else {
        return Ok(RespostaApi::nao_encontrado(ENDERECO_NAO_ENCONTRADO));
    };
    endereco_dto.fornecedor_id = atual.fornecedor_id;

    data.fornecedor_service
        .atualizar_endereco(&Endereco::from(endereco_dto.clone()), &mut notificador)
        .await?;

    Ok(moldar_resposta(&mut notificador, Some(endereco_dto), Vec::new(), StatusSucesso::Ok))
}

/// Rota para remover um fornecedor. Responde 204 quando removido.
#[delete("/api/fornecedores/{id}")]
pub async fn deletar_fornecedor(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    mut notificador: Notificador,
) -> Result<RespostaApi<()>, ErroApi> {
    let id = path.into_inner();

    if data.fornecedores.obter_por_id(id).await?.is_none() {
        return Ok(RespostaApi::nao_encontrado(FORNECEDOR_NAO_ENCONTRADO));
    }

    // O serviço recusa (e notifica) se o fornecedor ainda tiver produtos
    data.fornecedor_service.remover(id, &mut notificador).await?;

    Ok(moldar_resposta(&mut notificador, None, Vec::new(), StatusSucesso::SemConteudo))
}
