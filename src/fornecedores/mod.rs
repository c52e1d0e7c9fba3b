// src/fornecedores/mod.rs

pub mod endereco_repository;
pub mod endereco_structs;
pub mod fornecedor_repository;
pub mod fornecedor_router;
pub mod fornecedor_service;
pub mod fornecedor_structs;
