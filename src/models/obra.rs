use serde::{Deserialize, Serialize};

/// Catalogued work with its copy-availability counters.
///
/// `exemplares_disponiveis` is maintained by the backend: it drops by one
/// when a copy is loaned and rises by one when a loan is returned. The
/// ledger (`domain::ledger`) cross-checks it against the loan records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Obra {
    pub id: String,
    pub titulo: String,
    pub autor: String,
    pub isbn: String,
    pub categoria_id: String,
    #[serde(default)]
    pub editora: Option<String>,
    #[serde(default)]
    pub ano_publicacao: Option<i32>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub capa: Option<String>,
    pub total_exemplares: i32,
    pub exemplares_disponiveis: i32,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl Obra {
    pub fn tem_disponibilidade(&self) -> bool {
        self.exemplares_disponiveis > 0
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObraCreate {
    pub titulo: String,
    pub autor: String,
    pub isbn: String,
    pub categoria_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editora: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ano_publicacao: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_exemplares: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemplares_disponiveis: Option<i32>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObraUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editora: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ano_publicacao: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_exemplares: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemplares_disponiveis: Option<i32>,
}
