use serde::{Deserialize, Serialize};

/// Administrator record from `/administradores`. One-to-one with a
/// `Usuario` whose role is `admin`; `nivel_acesso` runs 1 to 3.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Administrador {
    pub id: String,
    pub usuario_id: String,
    pub nivel_acesso: i32,
    pub criado_em: String,
    pub atualizado_em: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministradorCreate {
    pub usuario_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nivel_acesso: Option<i32>,
}
