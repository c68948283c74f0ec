use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::dates;
use crate::domain::status::EmprestimoStatus;

/// Loan record as returned by `/emprestimos`.
///
/// The stored `status` can lag reality: the backend only flips
/// `ativo -> atrasado` when a listing endpoint happens to run its sweep.
/// Use [`Emprestimo::status_efetivo`] whenever overdue matters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emprestimo {
    pub id: String,
    pub usuario_id: String,
    pub exemplar_id: String,
    pub obra_id: String,
    pub data_emprestimo: NaiveDate,
    pub data_prevista_devolucao: NaiveDate,
    #[serde(default)]
    pub data_devolucao: Option<NaiveDate>,
    pub status: EmprestimoStatus,
    pub renovacoes: i32,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl Emprestimo {
    pub fn devolvido(&self) -> bool {
        self.data_devolucao.is_some() || self.status == EmprestimoStatus::Devolvido
    }

    /// Status recomputed from the dates, ignoring a possibly stale stored
    /// `status`.
    pub fn status_efetivo(&self, hoje: NaiveDate) -> EmprestimoStatus {
        if self.devolvido() {
            EmprestimoStatus::Devolvido
        } else if dates::is_overdue(self.data_prevista_devolucao, hoje) {
            EmprestimoStatus::Atrasado
        } else {
            EmprestimoStatus::Ativo
        }
    }

    /// Days until the due date; negative when overdue.
    pub fn dias_restantes(&self, hoje: NaiveDate) -> i64 {
        dates::days_remaining(self.data_prevista_devolucao, hoje)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmprestimoCreate {
    pub usuario_id: String,
    pub exemplar_id: String,
    pub obra_id: String,
    pub data_emprestimo: NaiveDate,
    pub data_prevista_devolucao: NaiveDate,
    pub status: EmprestimoStatus,
    pub renovacoes: i32,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmprestimoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_prevista_devolucao: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_devolucao: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmprestimoStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renovacoes: Option<i32>,
}
