// src/main.rs

use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

// Importa os módulos
mod config;       // Variáveis de ambiente
mod erros;        // Erros fatais e o ResponseError
mod fornecedores; // Módulo de fornecedores e endereços
mod logging;      // Inicialização do tracing
mod produtos;     // Módulo de produtos
mod shared;       // Módulo shared
mod upload;       // Gravação das imagens
// Sem rotas: a autenticação fica fora desta API, só as regras dos DTOs são usadas
#[allow(dead_code)]
mod usuarios;     // DTOs de cadastro e login

#[cfg(test)]
mod test_utils;

use fornecedores::endereco_repository::{EnderecoRepositoryPg, RepositorioEndereco};
use fornecedores::fornecedor_repository::{FornecedorRepositoryPg, RepositorioFornecedor};
use fornecedores::fornecedor_service::FornecedorService;
use produtos::produto_repository::{ProdutoRepositoryPg, RepositorioProduto};
use produtos::produto_service::ProdutoService;
use upload::upload_service::ServicoUpload;

/// Estado compartilhado entre as rotas.
///
/// Os repositórios ficam atrás de traits para que os testes troquem o Postgres
/// por uma implementação em memória.
pub struct AppState {
    pub fornecedores: Arc<dyn RepositorioFornecedor>,
    pub enderecos: Arc<dyn RepositorioEndereco>,
    pub produtos: Arc<dyn RepositorioProduto>,
    pub fornecedor_service: FornecedorService,
    pub produto_service: ProdutoService,
    pub upload: ServicoUpload,
    /// Limite de bytes lidos de um formulário multipart.
    pub limite_upload_bytes: usize,
}

impl AppState {
    pub fn new(
        fornecedores: Arc<dyn RepositorioFornecedor>,
        enderecos: Arc<dyn RepositorioEndereco>,
        produtos: Arc<dyn RepositorioProduto>,
        upload: ServicoUpload,
        limite_upload_bytes: usize,
    ) -> Self {
        Self {
            fornecedor_service: FornecedorService::new(fornecedores.clone(), enderecos.clone()),
            produto_service: ProdutoService::new(produtos.clone(), fornecedores.clone()),
            fornecedores,
            enderecos,
            produtos,
            upload,
            limite_upload_bytes,
        }
    }
}

/// Extratores e rotas da API. O mesmo registro é usado pelo servidor e pelos testes.
pub fn configurar_app(limite_json: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(shared::extratores::json_config(limite_json))
            .app_data(shared::extratores::path_config())
            // Módulo de Fornecedores
            .configure(fornecedores::fornecedor_router::configurar)
            // Módulo de Produtos
            .configure(produtos::produtos_router::configurar);
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Carrega o .env, se existir, antes de ler a configuração
    dotenv::dotenv().ok();
    logging::init_logging();

    let config = config::Config::from_env().context("Configuração inválida")?;

    // Conecta ao banco de dados PostgreSQL usando um pool de conexões
    let db_pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Falha ao conectar ao banco PostgreSQL")?;

    // Aplica as migrações pendentes
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Falha ao aplicar as migrações")?;

    std::fs::create_dir_all(&config.diretorio_imagens).with_context(|| {
        format!(
            "Falha ao criar o diretório de imagens {}",
            config.diretorio_imagens.display()
        )
    })?;

    // Repositórios Postgres compartilhados por todas as rotas
    let fornecedores: Arc<dyn RepositorioFornecedor> = Arc::new(FornecedorRepositoryPg::new(db_pool.clone()));
    let enderecos: Arc<dyn RepositorioEndereco> = Arc::new(EnderecoRepositoryPg::new(db_pool.clone()));
    let produtos: Arc<dyn RepositorioProduto> = Arc::new(ProdutoRepositoryPg::new(db_pool));

    let app_state = web::Data::new(AppState::new(
        fornecedores,
        enderecos,
        produtos,
        ServicoUpload::new(config.diretorio_imagens.clone()),
        config.limite_upload_bytes,
    ));

    tracing::info!(
        host = %config.host,
        porta = config.porta,
        imagens = %config.diretorio_imagens.display(),
        "Iniciando API de fornecedores"
    );

    // Configura e inicia o servidor HTTP
    let limite_json = config.limite_upload_bytes;
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(configurar_app(limite_json))
    })
    .bind((config.host.as_str(), config.porta))?
    .run()
    .await?;

    Ok(())
}
