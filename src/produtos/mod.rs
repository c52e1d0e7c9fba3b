// src/produtos/mod.rs

pub mod produto_repository;
pub mod produto_service;
pub mod produtos_router;
pub mod produtos_structs;
