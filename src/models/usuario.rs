use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::status::{UsuarioRole, UsuarioStatus};

/// Patron record as returned by `/usuarios`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: String,
    pub nome: String,
    pub cpf: String,
    pub email: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub endereco: Option<String>,
    pub status: UsuarioStatus,
    pub role: UsuarioRole,
    pub data_cadastro: NaiveDate,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl Usuario {
    /// Only `ativo` patrons may receive new loans.
    pub fn pode_emprestar(&self) -> bool {
        self.status == UsuarioStatus::Ativo
    }

    pub fn is_admin(&self) -> bool {
        self.role == UsuarioRole::Admin
    }
}

/// Credentials for `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct UsuarioLogin {
    pub cpf: String,
    pub senha: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioCreate {
    pub nome: String,
    pub cpf: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UsuarioStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UsuarioRole>,
    pub senha: String,
    pub data_cadastro: NaiveDate,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UsuarioStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UsuarioRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senha: Option<String>,
}
