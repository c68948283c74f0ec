//! Reservation lifecycle
//!
//! A reservation never touches copy counts while pending; only its approval
//! (which goes through the loan lifecycle) does. Expired-but-active
//! reservations are left alone: expiry is display state, and sweeping them
//! is deliberately not done here.

use chrono::NaiveDate;

use crate::domain::dates;
use crate::domain::status::ReservaStatus;
use crate::domain::{LendingError, LendingStore};
use crate::models::{Emprestimo, Reserva, ReservaCreate, ReservaUpdate};

use super::loan_service;

/// Place a reservation of `obra_id` for `usuario_id`, expiring one
/// reservation period from today. Reserving a currently-available work is
/// allowed.
pub async fn create_reservation(
    store: &impl LendingStore,
    usuario_id: &str,
    obra_id: &str,
    hoje: NaiveDate,
) -> Result<Reserva, LendingError> {
    if usuario_id.is_empty() || obra_id.is_empty() {
        return Err(LendingError::Validation(
            "usuário e obra são obrigatórios".to_string(),
        ));
    }

    // Both records must exist before the backend is asked to persist
    store
        .find_usuario(usuario_id)
        .await?
        .ok_or(LendingError::NotFound)?;
    store.find_obra(obra_id).await?.ok_or(LendingError::NotFound)?;

    tracing::info!(usuario_id, obra_id, "creating reservation");

    store
        .create_reserva(ReservaCreate {
            usuario_id: usuario_id.to_string(),
            obra_id: obra_id.to_string(),
            data_reserva: hoje,
            data_expiracao: dates::plus_reservation_period(hoje),
            status: ReservaStatus::Ativa,
        })
        .await
}

/// Approve a reservation: convert it into a loan and mark it `concluida`.
/// Only an `admin` patron may approve.
///
/// The loan is created first; the reservation is only completed once the
/// loan exists. Any loan-side failure (no copy, suspended patron, ledger
/// mismatch) leaves the reservation `ativa` and untouched.
pub async fn approve_reservation(
    store: &impl LendingStore,
    reserva_id: &str,
    admin_id: &str,
    hoje: NaiveDate,
) -> Result<(Emprestimo, Reserva), LendingError> {
    let admin = store
        .find_usuario(admin_id)
        .await?
        .ok_or(LendingError::NotFound)?;
    if !admin.is_admin() {
        return Err(LendingError::Validation(
            "apenas administradores podem aprovar reservas".to_string(),
        ));
    }

    let reserva = store
        .find_reserva(reserva_id)
        .await?
        .ok_or(LendingError::NotFound)?;

    if !reserva.ativa() {
        return Err(LendingError::Validation(format!(
            "reserva está {}",
            reserva.status
        )));
    }

    let emprestimo =
        loan_service::create_loan(store, &reserva.usuario_id, &reserva.obra_id, hoje).await?;

    tracing::info!(
        reserva_id,
        emprestimo_id = %emprestimo.id,
        "reservation approved into loan"
    );

    let reserva = store
        .update_reserva(
            reserva_id,
            ReservaUpdate {
                status: Some(ReservaStatus::Concluida),
                ..Default::default()
            },
        )
        .await?;

    Ok((emprestimo, reserva))
}

/// Cancel (or admin-reject) a pending reservation. Terminal states stay
/// terminal; copy counts are never involved.
pub async fn cancel_reservation(
    store: &impl LendingStore,
    reserva_id: &str,
) -> Result<Reserva, LendingError> {
    let reserva = store
        .find_reserva(reserva_id)
        .await?
        .ok_or(LendingError::NotFound)?;

    if !reserva.ativa() {
        return Err(LendingError::Validation(format!(
            "reserva está {}",
            reserva.status
        )));
    }

    tracing::info!(reserva_id, "cancelling reservation");

    store
        .update_reserva(
            reserva_id,
            ReservaUpdate {
                status: Some(ReservaStatus::Cancelada),
                ..Default::default()
            },
        )
        .await
}

/// Reservations of one patron, newest first.
pub async fn list_reservas_for_usuario(
    store: &impl LendingStore,
    usuario_id: &str,
) -> Result<Vec<Reserva>, LendingError> {
    let mut reservas: Vec<Reserva> = store
        .list_reservas()
        .await?
        .into_iter()
        .filter(|r| r.usuario_id == usuario_id)
        .collect();
    reservas.sort_by(|a, b| b.data_reserva.cmp(&a.data_reserva));
    Ok(reservas)
}
