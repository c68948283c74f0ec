use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::dates;
use crate::domain::status::ReservaStatus;

/// Reservation record as returned by `/reservas`.
///
/// Expiry is advisory only: an `ativa` reservation past `data_expiracao`
/// stays `ativa` until an admin acts on it. There is deliberately no
/// auto-expiry sweep in this crate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reserva {
    pub id: String,
    pub usuario_id: String,
    pub obra_id: String,
    pub data_reserva: NaiveDate,
    pub data_expiracao: NaiveDate,
    pub status: ReservaStatus,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl Reserva {
    pub fn ativa(&self) -> bool {
        self.status == ReservaStatus::Ativa
    }

    /// Display-only: still `ativa` but past its expiry date.
    pub fn expirada(&self, hoje: NaiveDate) -> bool {
        self.ativa() && dates::is_overdue(self.data_expiracao, hoje)
    }

    pub fn dias_restantes(&self, hoje: NaiveDate) -> i64 {
        dates::days_remaining(self.data_expiracao, hoje)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservaCreate {
    pub usuario_id: String,
    pub obra_id: String,
    pub data_reserva: NaiveDate,
    pub data_expiracao: NaiveDate,
    pub status: ReservaStatus,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservaStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_expiracao: Option<NaiveDate>,
}
