//! Availability ledger.
//!
//! Pure accounting over fetched records: relates a work's copy counters to
//! its copies and loans, and picks the copy a new loan should take. The
//! backend owns the actual counter mutations; these checks are optimistic
//! validation run before a mutating call is issued.

use crate::models::{Emprestimo, Exemplar, Obra};

use super::errors::LendingError;

/// `0 <= exemplaresDisponiveis <= totalExemplares` must hold on every
/// record the backend hands us.
pub fn check_bounds(obra: &Obra) -> Result<(), LendingError> {
    if obra.exemplares_disponiveis < 0 || obra.exemplares_disponiveis > obra.total_exemplares {
        return Err(LendingError::Ledger(format!(
            "obra {}: {} disponiveis de {} exemplares",
            obra.id, obra.exemplares_disponiveis, obra.total_exemplares
        )));
    }
    Ok(())
}

/// Loans of this work still holding a copy.
pub fn active_loan_count(obra: &Obra, emprestimos: &[Emprestimo]) -> usize {
    emprestimos
        .iter()
        .filter(|e| e.obra_id == obra.id && !e.devolvido())
        .count()
}

/// Cross-check the availability counter against the loan records.
///
/// A mismatch means the backend data is inconsistent; it is surfaced as an
/// error, never silently corrected.
pub fn verify_availability(obra: &Obra, emprestimos: &[Emprestimo]) -> Result<(), LendingError> {
    check_bounds(obra)?;

    let ativos = active_loan_count(obra, emprestimos) as i32;
    let esperado = obra.total_exemplares - ativos;
    if esperado != obra.exemplares_disponiveis {
        tracing::warn!(
            obra_id = %obra.id,
            disponiveis = obra.exemplares_disponiveis,
            esperado,
            "availability counter disagrees with loan records"
        );
        return Err(LendingError::Ledger(format!(
            "obra {}: {} disponiveis registrados, {} esperados ({} emprestimos ativos de {} exemplares)",
            obra.id, obra.exemplares_disponiveis, esperado, ativos, obra.total_exemplares
        )));
    }
    Ok(())
}

/// Pick the copy a new loan of `obra` should take.
///
/// Requires the counter to show availability AND an actually `disponivel`
/// copy to exist. Selection is stable: creation order, id as tie-break.
pub fn allocate_copy<'a>(
    obra: &Obra,
    exemplares: &'a [Exemplar],
) -> Result<&'a Exemplar, LendingError> {
    check_bounds(obra)?;

    if !obra.tem_disponibilidade() {
        return Err(LendingError::NoCopyAvailable);
    }

    exemplares
        .iter()
        .filter(|ex| ex.obra_id == obra.id && ex.disponivel())
        .min_by(|a, b| {
            a.criado_em
                .cmp(&b.criado_em)
                .then_with(|| a.id.cmp(&b.id))
        })
        .ok_or(LendingError::NoCopyAvailable)
}
