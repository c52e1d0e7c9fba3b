// src/produtos/produtos_router.rs

use std::collections::HashMap;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, web::BytesMut};
use futures::TryStreamExt;
use uuid::Uuid;

// Importa as structs definidas no módulo `produtos_structs` dentro da mesma pasta `produtos`
use super::produtos_structs::{Produto, ProdutoDto, ProdutoImagemDto};
use crate::erros::ErroApi;
use crate::fornecedores::fornecedor_structs::MSG_ID_DIFERENTE;
use crate::shared::notificador::Notificador;
use crate::shared::resposta::{moldar_resposta, RespostaApi, StatusSucesso};
use crate::shared::validacao::ValidarModelo;
use crate::upload::upload_service::ArquivoRecebido;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

const PRODUTO_NAO_ENCONTRADO: &str = "Produto não encontrado.";

/// Registra as rotas de produtos.
pub fn configurar(cfg: &mut web::ServiceConfig) {
    cfg.service(buscar_produtos)
        .service(buscar_produto_por_id)
        .service(cadastrar_produto_formulario)
        .service(cadastrar_produto)
        .service(atualizar_produto)
        .service(deletar_produto);
}

/// Rota para buscar todos os produtos, com o nome do fornecedor.
#[get("/api/produtos")]
pub async fn buscar_produtos(
    data: web::Data<AppState>,
    mut notificador: Notificador,
) -> Result<RespostaApi<Vec<ProdutoDto>>, ErroApi> {
    let produtos: Vec<ProdutoDto> = data
        .produtos
        .obter_produtos_fornecedores()
        .await?
        .into_iter()
        .map(ProdutoDto::from)
        .collect();

    Ok(moldar_resposta(&mut notificador, Some(produtos), Vec::new(), StatusSucesso::Ok))
}

#[get("/api/produtos/{id}")]
pub async fn buscar_produto_por_id(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    mut notificador: Notificador,
) -> Result<RespostaApi<ProdutoDto>, ErroApi> {
    let Some(produto) = data.produtos.obter_por_id(path.into_inner()).await? else {
        return Ok(RespostaApi::nao_encontrado(PRODUTO_NAO_ENCONTRADO));
    };

    Ok(moldar_resposta(&mut notificador, Some(ProdutoDto::from(produto)), Vec::new(), StatusSucesso::Ok))
}

/// Rota para cadastrar um produto com a imagem em base64 no corpo JSON.
///
/// O nome gravado é `<uuid>_<imagem>`, onde `imagem` é o nome enviado pelo cliente.
/// Se o upload for recusado o produto não é cadastrado.
#[post("/api/produtos")]
pub async fn cadastrar_produto(
    data: web::Data<AppState>,
    item: web::Json<ProdutoDto>,
    mut notificador: Notificador,
) -> Result<RespostaApi<ProdutoDto>, ErroApi> {
    let mut produto_dto = item.into_inner();
    // A imagem em base64 sai do DTO; ela nunca volta na resposta
    let imagem_upload = produto_dto.imagem_upload.take();

    let erros_modelo = produto_dto.validar();
    if !erros_modelo.is_empty() {
        return Ok(moldar_resposta(&mut notificador, Some(produto_dto), erros_modelo, StatusSucesso::Criado));
    }

    // Regras de negócio antes de tocar no disco: produto recusado não deixa imagem sem dono.
    if !data
        .produto_service
        .validar(&Produto::from(produto_dto.clone()), &mut notificador)
        .await?
    {
        return Ok(moldar_resposta(&mut notificador, Some(produto_dto), Vec::new(), StatusSucesso::Criado));
    }

    // Grava a imagem; se for recusada (vazia ou repetida) o produto não é cadastrado.
    let Some(nome_imagem) = data
        .upload
        .salvar_base64(imagem_upload.as_deref().unwrap_or_default(), &produto_dto.imagem, &mut notificador)
        .await?
    else {
        return Ok(moldar_resposta(&mut notificador, Some(produto_dto), Vec::new(), StatusSucesso::Criado));
    };

    produto_dto.imagem = nome_imagem;
    if produto_dto.id.is_nil() {
        produto_dto.id = Uuid::new_v4();
    }
    let produto = Produto::from(produto_dto);

    data.produto_service.adicionar(&produto, &mut notificador).await?;

    Ok(moldar_resposta(&mut notificador, Some(ProdutoDto::from(produto)), Vec::new(), StatusSucesso::Criado))
}

/// Rota para atualizar um produto.
///
/// O nome da imagem gravada é mantido; só muda quando uma nova imagem em
/// base64 é enviada em `imagem_upload`.
#[put("/api/produtos/{id}")]
pub async fn atualizar_produto(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    item: web::Json<ProdutoDto>,
    mut notificador: Notificador,
) -> Result<RespostaApi<ProdutoDto>, ErroApi> {
    let id = path.into_inner();
    let mut produto_dto = item.into_inner();
    let imagem_upload = produto_dto.imagem_upload.take();

    if id != produto_dto.id {
        notificador.notificar(MSG_ID_DIFERENTE);
        return Ok(moldar_resposta(&mut notificador, Some(produto_dto), Vec::new(), StatusSucesso::Ok));
    }

    let erros_modelo = produto_dto.validar();
    if !erros_modelo.is_empty() {
        return Ok(moldar_resposta(&mut notificador, Some(produto_dto), erros_modelo, StatusSucesso::Ok));
    }

    let Some(mut produto) = data.produtos.obter_por_id(id).await? else {
        return Ok(RespostaApi::nao_encontrado(PRODUTO_NAO_ENCONTRADO));
    };

    // Só estes campos mudam; fornecedor e data de cadastro ficam como estavam.
    produto.nome = produto_dto.nome.clone();
    produto.descricao = produto_dto.descricao.clone();
    produto.valor = produto_dto.valor.clone();
    produto.ativo = produto_dto.ativo;

    if !data.produto_service.validar(&produto, &mut notificador).await? {
        return Ok(moldar_resposta(&mut notificador, Some(produto_dto), Vec::new(), StatusSucesso::Ok));
    }

    // Nova imagem só quando enviada; o nome base é o informado ou o que já estava gravado.
    if let Some(imagem_upload) = imagem_upload {
        let nome_base = if produto_dto.imagem.trim().is_empty() {
            produto.imagem.clone()
        } else {
            produto_dto.imagem.clone()
        };

        let Some(nome_imagem) = data
            .upload
            .salvar_base64(&imagem_upload, &nome_base, &mut notificador)
            .await?
        else {
            return Ok(moldar_resposta(&mut notificador, Some(produto_dto), Vec::new(), StatusSucesso::Ok));
        };
        produto.imagem = nome_imagem;
    }

    data.produto_service.atualizar(&produto, &mut notificador).await?;

    Ok(moldar_resposta(&mut notificador, Some(ProdutoDto::from(produto)), Vec::new(), StatusSucesso::Ok))
}

/// Rota para cadastrar um produto por formulário multipart.
///
/// Campos de texto: `fornecedor_id`, `nome`, `descricao`, `valor`, `ativo`.
/// A imagem vem no campo de arquivo `imagem_upload` e é gravada como
/// `<uuid>_<nome original do arquivo>`.
#[post("/api/produtos/adicionar")]
pub async fn cadastrar_produto_formulario(
    data: web::Data<AppState>,
    payload: Multipart,
    mut notificador: Notificador,
) -> Result<RespostaApi<ProdutoImagemDto>, ErroApi> {
    // Lê o formulário inteiro e monta o DTO a partir dos campos de texto
    let (campos, arquivo) = ler_formulario(payload, data.limite_upload_bytes).await?;
    let (mut produto_dto, erros_modelo) = ProdutoImagemDto::from_formulario(&campos, arquivo);

    if !erros_modelo.is_empty() {
        return Ok(moldar_resposta(&mut notificador, Some(produto_dto), erros_modelo, StatusSucesso::Criado));
    }

    if !data
        .produto_service
        .validar(&Produto::from(produto_dto.clone()), &mut notificador)
        .await?
    {
        return Ok(moldar_resposta(&mut notificador, Some(produto_dto), Vec::new(), StatusSucesso::Criado));
    }

    // Arquivo ausente, vazio ou repetido: nada é gravado e o produto não é cadastrado.
    let Some(nome_imagem) = data
        .upload
        .salvar_arquivo(produto_dto.imagem_upload.as_ref(), &mut notificador)
        .await?
    else {
        return Ok(moldar_resposta(&mut notificador, Some(produto_dto), Vec::new(), StatusSucesso::Criado));
    };

    produto_dto.imagem = nome_imagem;
    if produto_dto.id.is_nil() {
        produto_dto.id = Uuid::new_v4();
    }

    data.produto_service
        .adicionar(&Produto::from(produto_dto.clone()), &mut notificador)
        .await?;

    produto_dto.imagem_upload = None;
    Ok(moldar_resposta(&mut notificador, Some(produto_dto), Vec::new(), StatusSucesso::Criado))
}

/// Rota para remover um produto. Devolve o produto removido.
#[delete("/api/produtos/{id}")]
pub async fn deletar_produto(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    mut notificador: Notificador,
) -> Result<RespostaApi<ProdutoDto>, ErroApi> {
    let id = path.into_inner();

    let Some(produto) = data.produtos.obter_por_id(id).await? else {
        return Ok(RespostaApi::nao_encontrado(PRODUTO_NAO_ENCONTRADO));
    };

    data.produto_service.remover(id).await?;

    Ok(moldar_resposta(&mut notificador, Some(ProdutoDto::from(produto)), Vec::new(), StatusSucesso::Ok))
}

/// Lê o formulário inteiro: campos de texto num mapa e o arquivo `imagem_upload` em memória.
/// O total lido não pode passar de `limite` bytes.
async fn ler_formulario(
    mut payload: Multipart,
    limite: usize,
) -> Result<(HashMap<String, String>, Option<ArquivoRecebido>), ErroApi> {
    let mut campos = HashMap::new();
    let mut arquivo = None;
    let mut total = 0usize;

    // Percorre os campos do formulário na ordem em que chegam
    while let Some(mut field) = payload.try_next().await? {
        let disposicao = field.content_disposition().clone();
        let nome_campo = disposicao.get_name().unwrap_or_default().to_string();

        let mut conteudo = BytesMut::new();
        while let Some(chunk) = field.try_next().await? {
            total += chunk.len();
            if total > limite {
                return Err(ErroApi::PayloadMuitoGrande { limite });
            }
            conteudo.extend_from_slice(&chunk);
        }

        match disposicao.get_filename() {
            Some(nome_arquivo) if nome_campo == "imagem_upload" => {
                arquivo = Some(ArquivoRecebido {
                    nome_arquivo: nome_arquivo.to_string(),
                    conteudo: conteudo.freeze(),
                });
            }
            Some(_) => {
                tracing::debug!(campo = %nome_campo, "Arquivo ignorado no formulário de produto");
            }
            None => {
                let valor = String::from_utf8_lossy(&conteudo).into_owned();
                campos.insert(nome_campo, valor);
            }
        }
    }

    Ok((campos, arquivo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::produtos::produto_service::{MSG_FORNECEDOR_INEXISTENTE, MSG_VALOR_INVALIDO};
    use crate::shared::shared_structs::GenericResponse;
    use crate::test_utils::{estado_teste, fornecedor_valido, produto_valido, RepositorioMemoria, LIMITE_TESTE};
    use crate::upload::upload_service::{MSG_ARQUIVO_AUSENTE, MSG_ARQUIVO_DUPLICADO, MSG_ARQUIVO_VAZIO};
    use actix_web::{http::StatusCode, test, App};
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde_json::{json, Value};
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    const BOUNDARY: &str = "----devio-boundary";

    fn formulario(campos: &[(&str, &str)], arquivo: Option<(&str, &[u8])>) -> Vec<u8> {
        let mut corpo = Vec::new();
        for (nome, valor) in campos {
            corpo.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                    BOUNDARY, nome, valor
                )
                .as_bytes(),
            );
        }
        if let Some((nome_arquivo, conteudo)) = arquivo {
            corpo.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"imagem_upload\"; filename=\"{}\"\r\n\
                     Content-Type: image/png\r\n\r\n",
                    BOUNDARY, nome_arquivo
                )
                .as_bytes(),
            );
            corpo.extend_from_slice(conteudo);
            corpo.extend_from_slice(b"\r\n");
        }
        corpo.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        corpo
    }

    fn corpo_produto(fornecedor_id: Uuid, imagem_upload: &str) -> Value {
        json!({
            "fornecedor_id": fornecedor_id,
            "nome": "Camiseta",
            "descricao": "Camiseta de algodão",
            "imagem": "camiseta.png",
            "imagem_upload": imagem_upload,
            "valor": "49.90",
            "ativo": true
        })
    }

    #[actix_web::test]
    async fn cadastra_produto_com_imagem_base64() {
        let dir = TempDir::new().unwrap();
        let banco = Arc::new(RepositorioMemoria::default());
        let fornecedor = fornecedor_valido();
        banco.inserir_fornecedor(fornecedor.clone());
        let app = test::init_service(
            App::new()
                .app_data(estado_teste(&banco, dir.path()))
                .configure(crate::configurar_app(LIMITE_TESTE)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/produtos")
            .set_json(corpo_produto(fornecedor.id, &STANDARD.encode(b"png")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let corpo: GenericResponse<Value> = test::read_body_json(resp).await;
        let dados = corpo.data.unwrap();
        assert_eq!(dados["imagem"], "fixo_camiseta.png");
        assert!(dados.get("imagem_upload").is_none());
        assert_eq!(fs::read(dir.path().join("fixo_camiseta.png")).unwrap(), b"png");
        assert_eq!(banco.total_produtos(), 1);
    }

    #[actix_web::test]
    async fn imagem_repetida_nao_cadastra_produto() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fixo_camiseta.png"), b"anterior").unwrap();
        let banco = Arc::new(RepositorioMemoria::default());
        let fornecedor = fornecedor_valido();
        banco.inserir_fornecedor(fornecedor.clone());
        let app = test::init_service(
            App::new()
                .app_data(estado_teste(&banco, dir.path()))
                .configure(crate::configurar_app(LIMITE_TESTE)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/produtos")
            .set_json(corpo_produto(fornecedor.id, &STANDARD.encode(b"png")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let corpo: GenericResponse<Value> = test::read_body_json(resp).await;
        assert_eq!(corpo.errors, Some(vec![MSG_ARQUIVO_DUPLICADO.to_string()]));
        assert_eq!(fs::read(dir.path().join("fixo_camiseta.png")).unwrap(), b"anterior");
        assert_eq!(banco.total_produtos(), 0);
    }

    #[actix_web::test]
    async fn imagem_vazia_retorna_400() {
        let dir = TempDir::new().unwrap();
        let banco = Arc::new(RepositorioMemoria::default());
        let fornecedor = fornecedor_valido();
        banco.inserir_fornecedor(fornecedor.clone());
        let app = test::init_service(
            App::new()
                .app_data(estado_teste(&banco, dir.path()))
                .configure(crate::configurar_app(LIMITE_TESTE)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/produtos")
            .set_json(corpo_produto(fornecedor.id, ""))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let corpo: GenericResponse<Value> = test::read_body_json(resp).await;
        assert_eq!(corpo.errors, Some(vec![MSG_ARQUIVO_VAZIO.to_string()]));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn base64_malformado_retorna_500_generico() {
        let dir = TempDir::new().unwrap();
        let banco = Arc::new(RepositorioMemoria::default());
        let fornecedor = fornecedor_valido();
        banco.inserir_fornecedor(fornecedor.clone());
        let app = test::init_service(
            App::new()
                .app_data(estado_teste(&banco, dir.path()))
                .configure(crate::configurar_app(LIMITE_TESTE)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/produtos")
            .set_json(corpo_produto(fornecedor.id, "@@@"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let corpo: GenericResponse<Value> = test::read_body_json(resp).await;
        assert_eq!(
            corpo.errors,
            Some(vec!["Ocorreu um erro interno no servidor.".to_string()])
        );
    }

    #[actix_web::test]
    async fn valor_zero_e_notificado_pelo_servico() {
        let dir = TempDir::new().unwrap();
        let banco = Arc::new(RepositorioMemoria::default());
        let fornecedor = fornecedor_valido();
        banco.inserir_fornecedor(fornecedor.clone());
        let app = test::init_service(
            App::new()
                .app_data(estado_teste(&banco, dir.path()))
                .configure(crate::configurar_app(LIMITE_TESTE)),
        )
        .await;
        let mut corpo = corpo_produto(fornecedor.id, &STANDARD.encode(b"png"));
        corpo["valor"] = json!("0");

        let req = test::TestRequest::post().uri("/api/produtos").set_json(corpo).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let corpo: GenericResponse<Value> = test::read_body_json(resp).await;
        assert_eq!(corpo.errors, Some(vec![MSG_VALOR_INVALIDO.to_string()]));
        assert_eq!(banco.total_produtos(), 0);
        // Produto recusado não deixa imagem gravada.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn formulario_com_fornecedor_inexistente_nao_grava_imagem() {
        let dir = TempDir::new().unwrap();
        let banco = Arc::new(RepositorioMemoria::default());
        let app = test::init_service(
            App::new()
                .app_data(estado_teste(&banco, dir.path()))
                .configure(crate::configurar_app(LIMITE_TESTE)),
        )
        .await;
        let fornecedor_id = Uuid::new_v4().to_string();

        let req = test::TestRequest::post()
            .uri("/api/produtos/adicionar")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(formulario(
                &[
                    ("fornecedor_id", &fornecedor_id),
                    ("nome", "Caneca"),
                    ("descricao", "Caneca de porcelana"),
                    ("valor", "25.00"),
                ],
                Some(("caneca.png", b"imagem")),
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let corpo: GenericResponse<Value> = test::read_body_json(resp).await;
        assert_eq!(corpo.errors, Some(vec![MSG_FORNECEDOR_INEXISTENTE.to_string()]));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn atualizar_com_valor_invalido_nao_troca_a_imagem() {
        let dir = TempDir::new().unwrap();
        let banco = Arc::new(RepositorioMemoria::default());
        let fornecedor = fornecedor_valido();
        banco.inserir_fornecedor(fornecedor.clone());
        let produto = produto_valido(fornecedor.id);
        banco.inserir_produto(produto.clone());
        let app = test::init_service(
            App::new()
                .app_data(estado_teste(&banco, dir.path()))
                .configure(crate::configurar_app(LIMITE_TESTE)),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/produtos/{}", produto.id))
            .set_json(json!({
                "id": produto.id,
                "fornecedor_id": fornecedor.id,
                "nome": "Camiseta",
                "descricao": "Camiseta de algodão",
                "imagem": "nova.png",
                "imagem_upload": STANDARD.encode(b"png"),
                "valor": "-1",
                "ativo": true
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
        assert_eq!(banco.produto(produto.id).unwrap().imagem, produto.imagem);
    }

    #[actix_web::test]
    async fn atualizar_com_id_divergente_retorna_400() {
        let dir = TempDir::new().unwrap();
        let banco = Arc::new(RepositorioMemoria::default());
        let app = test::init_service(
            App::new()
                .app_data(estado_teste(&banco, dir.path()))
                .configure(crate::configurar_app(LIMITE_TESTE)),
        )
        .await;
        let mut corpo = corpo_produto(Uuid::new_v4(), "");
        corpo["id"] = json!(Uuid::new_v4());

        let req = test::TestRequest::put()
            .uri(&format!("/api/produtos/{}", Uuid::new_v4()))
            .set_json(corpo)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let corpo: GenericResponse<Value> = test::read_body_json(resp).await;
        assert_eq!(corpo.errors, Some(vec![MSG_ID_DIFERENTE.to_string()]));
    }

    #[actix_web::test]
    async fn atualizar_sem_imagem_mantem_a_imagem_gravada() {
        let dir = TempDir::new().unwrap();
        let banco = Arc::new(RepositorioMemoria::default());
        let fornecedor = fornecedor_valido();
        banco.inserir_fornecedor(fornecedor.clone());
        let produto = produto_valido(fornecedor.id);
        banco.inserir_produto(produto.clone());
        let app = test::init_service(
            App::new()
                .app_data(estado_teste(&banco, dir.path()))
                .configure(crate::configurar_app(LIMITE_TESTE)),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/produtos/{}", produto.id))
            .set_json(json!({
                "id": produto.id,
                "fornecedor_id": fornecedor.id,
                "nome": "Camiseta Polo",
                "descricao": "Camiseta polo de algodão",
                "imagem": "outra.png",
                "valor": "59.90",
                "ativo": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let atualizado = banco.produto(produto.id).unwrap();
        assert_eq!(atualizado.nome, "Camiseta Polo");
        assert_eq!(atualizado.imagem, produto.imagem);
        assert!(!atualizado.ativo);
    }

    #[actix_web::test]
    async fn cadastra_produto_por_formulario() {
        let dir = TempDir::new().unwrap();
        let banco = Arc::new(RepositorioMemoria::default());
        let fornecedor = fornecedor_valido();
        banco.inserir_fornecedor(fornecedor.clone());
        let app = test::init_service(
            App::new()
                .app_data(estado_teste(&banco, dir.path()))
                .configure(crate::configurar_app(LIMITE_TESTE)),
        )
        .await;
        let fornecedor_id = fornecedor.id.to_string();

        let req = test::TestRequest::post()
            .uri("/api/produtos/adicionar")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(formulario(
                &[
                    ("fornecedor_id", &fornecedor_id),
                    ("nome", "Caneca"),
                    ("descricao", "Caneca de porcelana"),
                    ("valor", "25.00"),
                    ("ativo", "true"),
                ],
                Some(("caneca.png", b"imagem")),
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let corpo: GenericResponse<Value> = test::read_body_json(resp).await;
        assert_eq!(corpo.data.unwrap()["imagem"], "fixo_caneca.png");
        assert_eq!(fs::read(dir.path().join("fixo_caneca.png")).unwrap(), b"imagem");
        assert_eq!(banco.total_produtos(), 1);
    }

    #[actix_web::test]
    async fn formulario_sem_arquivo_retorna_400() {
        let dir = TempDir::new().unwrap();
        let banco = Arc::new(RepositorioMemoria::default());
        let fornecedor = fornecedor_valido();
        banco.inserir_fornecedor(fornecedor.clone());
        let app = test::init_service(
            App::new()
                .app_data(estado_teste(&banco, dir.path()))
                .configure(crate::configurar_app(LIMITE_TESTE)),
        )
        .await;
        let fornecedor_id = fornecedor.id.to_string();

        let req = test::TestRequest::post()
            .uri("/api/produtos/adicionar")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(formulario(
                &[
                    ("fornecedor_id", &fornecedor_id),
                    ("nome", "Caneca"),
                    ("descricao", "Caneca de porcelana"),
                    ("valor", "25.00"),
                ],
                None,
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let corpo: GenericResponse<Value> = test::read_body_json(resp).await;
        assert_eq!(corpo.errors, Some(vec![MSG_ARQUIVO_AUSENTE.to_string()]));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
        assert_eq!(banco.total_produtos(), 0);
    }

    #[actix_web::test]
    async fn remover_produto_devolve_o_produto() {
        let dir = TempDir::new().unwrap();
        let banco = Arc::new(RepositorioMemoria::default());
        let fornecedor = fornecedor_valido();
        banco.inserir_fornecedor(fornecedor.clone());
        let produto = produto_valido(fornecedor.id);
        banco.inserir_produto(produto.clone());
        let app = test::init_service(
            App::new()
                .app_data(estado_teste(&banco, dir.path()))
                .configure(crate::configurar_app(LIMITE_TESTE)),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/produtos/{}", produto.id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let corpo: GenericResponse<ProdutoDto> = test::read_body_json(resp).await;
        let dto = corpo.data.unwrap();
        assert_eq!(dto.id, produto.id);
        assert_eq!(dto.nome_fornecedor.as_deref(), Some("Acme Ltda"));
        assert_eq!(banco.total_produtos(), 0);
    }

    #[actix_web::test]
    async fn remover_produto_inexistente_retorna_404() {
        let dir = TempDir::new().unwrap();
        let banco = Arc::new(RepositorioMemoria::default());
        let app = test::init_service(
            App::new()
                .app_data(estado_teste(&banco, dir.path()))
                .configure(crate::configurar_app(LIMITE_TESTE)),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/produtos/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let corpo: GenericResponse<Value> = test::read_body_json(resp).await;
        assert_eq!(corpo.errors, Some(vec![PRODUTO_NAO_ENCONTRADO.to_string()]));
    }
}
