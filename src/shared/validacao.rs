// src/shared/validacao.rs

use std::borrow::Cow;

use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use super::notificador::Notificador;

/// Validação de modelo (formato dos DTOs recebidos na requisição).
/// Os erros devolvidos aqui entram no mesmo canal das notificações de negócio.
pub trait ValidarModelo {
    fn validar(&self) -> Vec<String>;
}

// Todo DTO que deriva `Validate` devolve as mensagens já prontas para o `Notificador`.
impl<T: Validate> ValidarModelo for T {
    fn validar(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(erros) => mensagens_de_validacao(&erros),
        }
    }
}

/// Usado pelos serviços: cada erro de formato vira uma notificação.
pub fn validar_e_notificar<T: ValidarModelo>(modelo: &T, notificador: &mut Notificador) -> bool {
    let erros = modelo.validar();
    let valido = erros.is_empty();
    for erro in erros {
        notificador.notificar(erro);
    }
    valido
}

/// Achata os erros do `validator` numa lista de mensagens.
///
/// A ordem é estável: campos por nome, DTOs aninhados no lugar do campo que os
/// contém e as validações do struct inteiro (`__all__`) por último.
pub fn mensagens_de_validacao(erros: &ValidationErrors) -> Vec<String> {
    let mut campos: Vec<(&str, &ValidationErrorsKind)> = erros.errors().iter().map(|(campo, tipo)| (*campo, tipo)).collect();
    campos.sort_by_key(|&(campo, _)| (campo == "__all__", campo));

    let mut mensagens = Vec::new();
    for (campo, tipo) in campos {
        match tipo {
            ValidationErrorsKind::Field(lista) => {
                mensagens.extend(lista.iter().map(|erro| mensagem(campo, erro)));
            }
            ValidationErrorsKind::Struct(aninhado) => {
                mensagens.extend(mensagens_de_validacao(aninhado));
            }
            ValidationErrorsKind::List(itens) => {
                for aninhado in itens.values() {
                    mensagens.extend(mensagens_de_validacao(aninhado));
                }
            }
        }
    }
    mensagens
}

fn mensagem(campo: &str, erro: &ValidationError) -> String {
    match &erro.message {
        Some(mensagem) => mensagem.to_string(),
        None => format!("O campo {} é inválido", campo),
    }
}

/// Erro de validação com a mensagem já definida (para validações de struct).
pub fn erro_com_mensagem(codigo: &'static str, mensagem: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut erro = ValidationError::new(codigo);
    erro.message = Some(mensagem.into());
    erro
}

pub fn uuid_preenchido(id: &Uuid) -> Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::new("obrigatorio"));
    }
    Ok(())
}

pub fn somente_digitos(valor: &str) -> Result<(), ValidationError> {
    if !valor.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("somente_digitos"));
    }
    Ok(())
}

pub fn apenas_numeros(valor: &str) -> String {
    valor.chars().filter(char::is_ascii_digit).collect()
}

fn digitos(valor: &str, tamanho: usize) -> Option<Vec<u32>> {
    let digitos: Vec<u32> = apenas_numeros(valor)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digitos.len() != tamanho || digitos.iter().all(|d| *d == digitos[0]) {
        return None;
    }
    Some(digitos)
}

fn digito_verificador(digitos: &[u32], pesos: &[u32]) -> u32 {
    let soma: u32 = digitos.iter().zip(pesos).map(|(d, p)| d * p).sum();
    match soma % 11 {
        resto if resto < 2 => 0,
        resto => 11 - resto,
    }
}

/// CPF: 11 dígitos, não todos iguais, com os dois dígitos verificadores corretos.
pub fn cpf_valido(cpf: &str) -> bool {
    let Some(d) = digitos(cpf, 11) else {
        return false;
    };

    let pesos_1: Vec<u32> = (2..=10).rev().collect();
    let pesos_2: Vec<u32> = (2..=11).rev().collect();

    digito_verificador(&d[..9], &pesos_1) == d[9] && digito_verificador(&d[..10], &pesos_2) == d[10]
}

/// CNPJ: 14 dígitos, não todos iguais, com os dois dígitos verificadores corretos.
pub fn cnpj_valido(cnpj: &str) -> bool {
    let Some(d) = digitos(cnpj, 14) else {
        return false;
    };

    const PESOS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    const PESOS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

    digito_verificador(&d[..12], &PESOS_1) == d[12] && digito_verificador(&d[..13], &PESOS_2) == d[13]
}
