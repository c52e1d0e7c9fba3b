// src/usuarios/mod.rs

// Declara o submódulo com os DTOs de cadastro e login
pub mod usuario_structs;
