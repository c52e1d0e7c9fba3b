// src/shared/mod.rs

// Estrutura padrão do corpo das respostas
pub mod shared_structs;
// Coletor de notificações por requisição
pub mod notificador;
// Decisão única entre sucesso e falha
pub mod resposta;
// Regras de validação reaproveitadas pelos DTOs e serviços
pub mod validacao;
// Configuração dos extratores de JSON e de rota
pub mod extratores;
