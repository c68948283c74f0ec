use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categoria {
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub criado_em: String,
    pub atualizado_em: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaCreate {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
}
