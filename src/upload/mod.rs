// src/upload/mod.rs

// Gravação das imagens de produtos no disco
pub mod upload_service;
