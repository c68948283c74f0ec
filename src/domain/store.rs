//! Data-access trait for the lifecycle services.
//!
//! The services never talk HTTP directly; they run against this contract.
//! The REST client (`api::ApiClient`) is the production implementation,
//! tests use an in-memory fake. Mirrors the backend collection endpoints:
//! the backend is the source of truth, so `find_*` returning `None` means
//! the record does not exist right now, and every mutation returns the
//! authoritative record the server persisted.

use async_trait::async_trait;

use super::errors::LendingError;
use crate::models::{
    Emprestimo, EmprestimoCreate, EmprestimoUpdate, Exemplar, Obra, Reserva, ReservaCreate,
    ReservaUpdate, Usuario,
};

#[async_trait]
pub trait LendingStore: Send + Sync {
    async fn find_usuario(&self, id: &str) -> Result<Option<Usuario>, LendingError>;

    async fn find_obra(&self, id: &str) -> Result<Option<Obra>, LendingError>;

    async fn list_exemplares(&self) -> Result<Vec<Exemplar>, LendingError>;

    async fn list_emprestimos(&self) -> Result<Vec<Emprestimo>, LendingError>;

    async fn find_emprestimo(&self, id: &str) -> Result<Option<Emprestimo>, LendingError>;

    async fn create_emprestimo(
        &self,
        payload: EmprestimoCreate,
    ) -> Result<Emprestimo, LendingError>;

    async fn update_emprestimo(
        &self,
        id: &str,
        payload: EmprestimoUpdate,
    ) -> Result<Emprestimo, LendingError>;

    async fn list_reservas(&self) -> Result<Vec<Reserva>, LendingError>;

    async fn find_reserva(&self, id: &str) -> Result<Option<Reserva>, LendingError>;

    async fn create_reserva(&self, payload: ReservaCreate) -> Result<Reserva, LendingError>;

    async fn update_reserva(
        &self,
        id: &str,
        payload: ReservaUpdate,
    ) -> Result<Reserva, LendingError>;
}
