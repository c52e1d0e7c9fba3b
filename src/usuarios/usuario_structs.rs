// src/usuarios/usuario_structs.rs

use serde::Deserialize;
use validator::Validate;

pub const MSG_SENHAS_DIFERENTES: &str = "As senhas não conferem.";

/// Dados de cadastro de um usuário.
/// Só o formato é conferido aqui; autenticação e armazenamento de senha ficam fora desta API.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterUser {
    #[validate(email(message = "O campo Email está no formato inválido"))]
    pub email: String,
    #[validate(length(min = 6, max = 100, message = "O campo Password precisa ter entre 6 e 100 caracteres"))]
    pub password: String,
    // A confirmação precisa ser igual à senha
    #[validate(must_match(other = "password", message = "As senhas não conferem."))]
    pub confirm_password: String,
}

/// Dados de login.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginUser {
    #[validate(email(message = "O campo Email está no formato inválido"))]
    pub email: String,
    #[validate(length(min = 6, max = 100, message = "O campo Password precisa ter entre 6 e 100 caracteres"))]
    pub password: String,
}
