//! Loan lifecycle - pure business logic over an injected store
//!
//! Each operation re-fetches the records it validates against, runs its
//! preconditions, then issues exactly one mutating call. The checks are
//! optimistic: the backend is the final arbiter, and its response is the
//! authoritative record.

use chrono::NaiveDate;

use crate::domain::dates::{self, MAX_RENEWALS};
use crate::domain::ledger;
use crate::domain::status::EmprestimoStatus;
use crate::domain::{LendingError, LendingStore};
use crate::models::{Emprestimo, EmprestimoCreate, EmprestimoUpdate};

/// Create a loan of `obra_id` to `usuario_id`.
///
/// Fails with `PatronSuspended` for non-`ativo` patrons, `NoCopyAvailable`
/// when the work has no free copy, and `Ledger` when the availability
/// counter disagrees with the loan records. Nothing is sent to the backend
/// unless every precondition passes.
pub async fn create_loan(
    store: &impl LendingStore,
    usuario_id: &str,
    obra_id: &str,
    hoje: NaiveDate,
) -> Result<Emprestimo, LendingError> {
    if usuario_id.is_empty() || obra_id.is_empty() {
        return Err(LendingError::Validation(
            "usuário e obra são obrigatórios".to_string(),
        ));
    }

    let usuario = store
        .find_usuario(usuario_id)
        .await?
        .ok_or(LendingError::NotFound)?;
    if !usuario.pode_emprestar() {
        return Err(LendingError::PatronSuspended);
    }

    let obra = store.find_obra(obra_id).await?.ok_or(LendingError::NotFound)?;

    let emprestimos = store.list_emprestimos().await?;
    ledger::verify_availability(&obra, &emprestimos)?;

    let exemplares = store.list_exemplares().await?;
    let exemplar = ledger::allocate_copy(&obra, &exemplares)?;

    tracing::info!(
        usuario_id,
        obra_id,
        exemplar_id = %exemplar.id,
        "creating loan"
    );

    store
        .create_emprestimo(EmprestimoCreate {
            usuario_id: usuario.id,
            exemplar_id: exemplar.id.clone(),
            obra_id: obra.id,
            data_emprestimo: hoje,
            data_prevista_devolucao: dates::plus_loan_period(hoje),
            status: EmprestimoStatus::Ativo,
            renovacoes: 0,
        })
        .await
}

/// Renew a loan: due date moves one loan period forward, renewal counter
/// goes up by one.
///
/// Overdue loans cannot be renewed, they must be returned; overdue is
/// recomputed from the due date, not read from the stored status.
pub async fn renew_loan(
    store: &impl LendingStore,
    emprestimo_id: &str,
    hoje: NaiveDate,
) -> Result<Emprestimo, LendingError> {
    let emprestimo = store
        .find_emprestimo(emprestimo_id)
        .await?
        .ok_or(LendingError::NotFound)?;

    if emprestimo.devolvido() {
        return Err(LendingError::AlreadyReturned);
    }
    if emprestimo.renovacoes >= MAX_RENEWALS {
        return Err(LendingError::RenewalLimitReached);
    }
    if dates::is_overdue(emprestimo.data_prevista_devolucao, hoje) {
        return Err(LendingError::LoanOverdue);
    }

    let nova_data = dates::plus_loan_period(emprestimo.data_prevista_devolucao);
    tracing::info!(
        emprestimo_id,
        renovacoes = emprestimo.renovacoes + 1,
        nova_data = %nova_data,
        "renewing loan"
    );

    store
        .update_emprestimo(
            emprestimo_id,
            EmprestimoUpdate {
                data_prevista_devolucao: Some(nova_data),
                renovacoes: Some(emprestimo.renovacoes + 1),
                ..Default::default()
            },
        )
        .await
}

/// Return a loan. The backend releases the copy and bumps the work's
/// availability when it sees `dataDevolucao` arrive.
pub async fn return_loan(
    store: &impl LendingStore,
    emprestimo_id: &str,
    hoje: NaiveDate,
) -> Result<Emprestimo, LendingError> {
    let emprestimo = store
        .find_emprestimo(emprestimo_id)
        .await?
        .ok_or(LendingError::NotFound)?;

    if emprestimo.devolvido() {
        return Err(LendingError::AlreadyReturned);
    }

    tracing::info!(emprestimo_id, "returning loan");

    store
        .update_emprestimo(
            emprestimo_id,
            EmprestimoUpdate {
                data_devolucao: Some(hoje),
                status: Some(EmprestimoStatus::Devolvido),
                ..Default::default()
            },
        )
        .await
}

/// Loans of one patron, newest first, with `status` recomputed from the
/// dates. The backend has no by-patron query; filtering happens here.
pub async fn list_loans_for_usuario(
    store: &impl LendingStore,
    usuario_id: &str,
    hoje: NaiveDate,
) -> Result<Vec<Emprestimo>, LendingError> {
    let mut emprestimos: Vec<Emprestimo> = store
        .list_emprestimos()
        .await?
        .into_iter()
        .filter(|e| e.usuario_id == usuario_id)
        .collect();

    for emprestimo in &mut emprestimos {
        emprestimo.status = emprestimo.status_efetivo(hoje);
    }
    emprestimos.sort_by(|a, b| b.data_emprestimo.cmp(&a.data_emprestimo));

    Ok(emprestimos)
}

/// Count loans still holding a copy (derived status `ativo` or `atrasado`).
pub fn count_open(emprestimos: &[Emprestimo]) -> usize {
    emprestimos.iter().filter(|e| !e.devolvido()).count()
}

/// Count loans that are past due and not yet returned.
pub fn count_overdue(emprestimos: &[Emprestimo], hoje: NaiveDate) -> usize {
    emprestimos
        .iter()
        .filter(|e| e.status_efetivo(hoje) == EmprestimoStatus::Atrasado)
        .count()
}
