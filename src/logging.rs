// src/logging.rs

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const FILTRO_PADRAO: &str = "fornecedores_api=info,actix_web=info";

/// Inicializa o tracing no console. `RUST_LOG` tem precedência sobre o filtro padrão.
/// Os registros do middleware `Logger` do Actix (crate `log`) também passam por aqui.
pub fn init_logging() {
    let filtro = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRO_PADRAO));

    tracing_subscriber::registry()
        .with(filtro)
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();
}
