use serde::{Deserialize, Serialize};

use crate::domain::status::ExemplarStatus;

/// Physical copy of a work. Exactly one copy backs each non-returned loan;
/// its status tracks that relationship on the server side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exemplar {
    pub id: String,
    pub obra_id: String,
    pub codigo: String,
    pub status: ExemplarStatus,
    #[serde(default)]
    pub localizacao: Option<String>,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl Exemplar {
    pub fn disponivel(&self) -> bool {
        self.status == ExemplarStatus::Disponivel
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExemplarCreate {
    pub obra_id: String,
    pub codigo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExemplarStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizacao: Option<String>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExemplarUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obra_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExemplarStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizacao: Option<String>,
}
