//! Typed REST client for the library backend.
//!
//! JSON over HTTP against the collection endpoints (`/usuarios`, `/obras`,
//! `/exemplares`, `/emprestimos`, `/reservas`, `/categorias`) plus
//! `/auth/login`. Implements [`LendingStore`] so the lifecycle services run
//! directly against it.

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::domain::store::LendingStore;
use crate::domain::{validation, LendingError};
use crate::models::{
    Administrador, AdministradorCreate, Categoria, CategoriaCreate, Emprestimo, EmprestimoCreate, EmprestimoUpdate, Exemplar,
    ExemplarCreate, ExemplarUpdate, Obra, ObraCreate, ObraUpdate, Reserva, ReservaCreate,
    ReservaUpdate, Usuario, UsuarioCreate, UsuarioLogin, UsuarioUpdate,
};

use super::error::error_message;

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, LendingError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| LendingError::Validation(format!("URL da API inválida: {}", e)))?;

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base.as_str().trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(StatusCode, String), LendingError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "api request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, LendingError> {
        let (status, text) = self.execute(method, path, body).await?;
        if !status.is_success() {
            return Err(LendingError::Api(error_message(status, &text)));
        }
        serde_json::from_str(&text)
            .map_err(|e| LendingError::Api(format!("resposta inesperada do servidor: {}", e)))
    }

    /// GET a single record; 404 becomes `None`, the backend owns existence.
    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, LendingError> {
        let (status, text) = self.execute(Method::GET, path, None).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LendingError::Api(error_message(status, &text)));
        }
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| LendingError::Api(format!("resposta inesperada do servidor: {}", e)))
    }

    /// Mutating call where 404 means the record is gone.
    async fn mutate_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        payload: &B,
    ) -> Result<T, LendingError> {
        let body = serde_json::to_value(payload)
            .map_err(|e| LendingError::Validation(e.to_string()))?;
        let (status, text) = self.execute(method, path, Some(body)).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(LendingError::NotFound);
        }
        if !status.is_success() {
            return Err(LendingError::Api(error_message(status, &text)));
        }
        serde_json::from_str(&text)
            .map_err(|e| LendingError::Api(format!("resposta inesperada do servidor: {}", e)))
    }

    async fn delete(&self, path: &str) -> Result<(), LendingError> {
        let (status, text) = self.execute(Method::DELETE, path, None).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(LendingError::NotFound);
        }
        if !status.is_success() {
            return Err(LendingError::Api(error_message(status, &text)));
        }
        Ok(())
    }

    // --- auth ---

    pub async fn login(&self, cpf: &str, senha: &str) -> Result<Usuario, LendingError> {
        let payload = UsuarioLogin {
            cpf: validation::clean_cpf(cpf),
            senha: senha.to_string(),
        };
        self.mutate_json(Method::POST, "/auth/login", &payload).await
    }

    pub async fn logout(&self) -> Result<(), LendingError> {
        let (status, text) = self.execute(Method::POST, "/auth/logout", None).await?;
        if !status.is_success() {
            return Err(LendingError::Api(error_message(status, &text)));
        }
        Ok(())
    }

    // --- usuarios ---

    pub async fn list_usuarios(&self) -> Result<Vec<Usuario>, LendingError> {
        self.request_json(Method::GET, "/usuarios", None).await
    }

    pub async fn get_usuario(&self, id: &str) -> Result<Option<Usuario>, LendingError> {
        self.fetch_optional(&format!("/usuarios/{}", id)).await
    }

    pub async fn create_usuario(&self, payload: &UsuarioCreate) -> Result<Usuario, LendingError> {
        if !validation::is_valid_cpf(&payload.cpf) {
            return Err(LendingError::Validation("CPF inválido".to_string()));
        }
        self.mutate_json(Method::POST, "/usuarios", payload).await
    }

    pub async fn update_usuario(
        &self,
        id: &str,
        payload: &UsuarioUpdate,
    ) -> Result<Usuario, LendingError> {
        self.mutate_json(Method::PUT, &format!("/usuarios/{}", id), payload)
            .await
    }

    pub async fn delete_usuario(&self, id: &str) -> Result<(), LendingError> {
        self.delete(&format!("/usuarios/{}", id)).await
    }

    // --- administradores ---

    pub async fn list_administradores(&self) -> Result<Vec<Administrador>, LendingError> {
        self.request_json(Method::GET, "/administradores", None).await
    }

    /// The backend refuses this unless the linked usuário carries the
    /// `admin` role.
    pub async fn create_administrador(
        &self,
        payload: &AdministradorCreate,
    ) -> Result<Administrador, LendingError> {
        self.mutate_json(Method::POST, "/administradores", payload)
            .await
    }

    // --- categorias ---

    pub async fn list_categorias(&self) -> Result<Vec<Categoria>, LendingError> {
        self.request_json(Method::GET, "/categorias", None).await
    }

    pub async fn create_categoria(
        &self,
        payload: &CategoriaCreate,
    ) -> Result<Categoria, LendingError> {
        self.mutate_json(Method::POST, "/categorias", payload).await
    }

    // --- obras ---

    pub async fn list_obras(&self) -> Result<Vec<Obra>, LendingError> {
        self.request_json(Method::GET, "/obras", None).await
    }

    pub async fn get_obra(&self, id: &str) -> Result<Option<Obra>, LendingError> {
        self.fetch_optional(&format!("/obras/{}", id)).await
    }

    pub async fn create_obra(&self, payload: &ObraCreate) -> Result<Obra, LendingError> {
        self.mutate_json(Method::POST, "/obras", payload).await
    }

    pub async fn update_obra(&self, id: &str, payload: &ObraUpdate) -> Result<Obra, LendingError> {
        self.mutate_json(Method::PUT, &format!("/obras/{}", id), payload)
            .await
    }

    pub async fn delete_obra(&self, id: &str) -> Result<(), LendingError> {
        self.delete(&format!("/obras/{}", id)).await
    }

    /// Upload a cover image as `multipart/form-data` under the `file` field.
    pub async fn upload_capa_obra(
        &self,
        id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), LendingError> {
        let url = format!("{}/obras/{}/upload-capa", self.base_url, id);
        tracing::debug!(%url, file_name, "uploading cover");

        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LendingError::NotFound);
        }
        if !status.is_success() {
            let text = response.text().await?;
            return Err(LendingError::Api(error_message(status, &text)));
        }
        Ok(())
    }

    // --- exemplares ---

    pub async fn list_exemplares(&self) -> Result<Vec<Exemplar>, LendingError> {
        self.request_json(Method::GET, "/exemplares", None).await
    }

    pub async fn create_exemplar(&self, payload: &ExemplarCreate) -> Result<Exemplar, LendingError> {
        self.mutate_json(Method::POST, "/exemplares", payload).await
    }

    pub async fn update_exemplar(
        &self,
        id: &str,
        payload: &ExemplarUpdate,
    ) -> Result<Exemplar, LendingError> {
        self.mutate_json(Method::PUT, &format!("/exemplares/{}", id), payload)
            .await
    }

    // --- emprestimos ---

    pub async fn list_emprestimos(&self) -> Result<Vec<Emprestimo>, LendingError> {
        self.request_json(Method::GET, "/emprestimos", None).await
    }

    pub async fn get_emprestimo(&self, id: &str) -> Result<Option<Emprestimo>, LendingError> {
        self.fetch_optional(&format!("/emprestimos/{}", id)).await
    }

    pub async fn create_emprestimo(
        &self,
        payload: &EmprestimoCreate,
    ) -> Result<Emprestimo, LendingError> {
        self.mutate_json(Method::POST, "/emprestimos", payload).await
    }

    pub async fn update_emprestimo(
        &self,
        id: &str,
        payload: &EmprestimoUpdate,
    ) -> Result<Emprestimo, LendingError> {
        self.mutate_json(Method::PUT, &format!("/emprestimos/{}", id), payload)
            .await
    }

    pub async fn delete_emprestimo(&self, id: &str) -> Result<(), LendingError> {
        self.delete(&format!("/emprestimos/{}", id)).await
    }

    // --- reservas ---

    pub async fn list_reservas(&self) -> Result<Vec<Reserva>, LendingError> {
        self.request_json(Method::GET, "/reservas", None).await
    }

    pub async fn get_reserva(&self, id: &str) -> Result<Option<Reserva>, LendingError> {
        self.fetch_optional(&format!("/reservas/{}", id)).await
    }

    pub async fn create_reserva(&self, payload: &ReservaCreate) -> Result<Reserva, LendingError> {
        self.mutate_json(Method::POST, "/reservas", payload).await
    }

    pub async fn update_reserva(
        &self,
        id: &str,
        payload: &ReservaUpdate,
    ) -> Result<Reserva, LendingError> {
        self.mutate_json(Method::PUT, &format!("/reservas/{}", id), payload)
            .await
    }

    pub async fn delete_reserva(&self, id: &str) -> Result<(), LendingError> {
        self.delete(&format!("/reservas/{}", id)).await
    }
}

#[async_trait]
impl LendingStore for ApiClient {
    async fn find_usuario(&self, id: &str) -> Result<Option<Usuario>, LendingError> {
        self.get_usuario(id).await
    }

    async fn find_obra(&self, id: &str) -> Result<Option<Obra>, LendingError> {
        self.get_obra(id).await
    }

    async fn list_exemplares(&self) -> Result<Vec<Exemplar>, LendingError> {
        ApiClient::list_exemplares(self).await
    }

    async fn list_emprestimos(&self) -> Result<Vec<Emprestimo>, LendingError> {
        ApiClient::list_emprestimos(self).await
    }

    async fn find_emprestimo(&self, id: &str) -> Result<Option<Emprestimo>, LendingError> {
        self.get_emprestimo(id).await
    }

    async fn create_emprestimo(
        &self,
        payload: EmprestimoCreate,
    ) -> Result<Emprestimo, LendingError> {
        ApiClient::create_emprestimo(self, &payload).await
    }

    async fn update_emprestimo(
        &self,
        id: &str,
        payload: EmprestimoUpdate,
    ) -> Result<Emprestimo, LendingError> {
        ApiClient::update_emprestimo(self, id, &payload).await
    }

    async fn list_reservas(&self) -> Result<Vec<Reserva>, LendingError> {
        ApiClient::list_reservas(self).await
    }

    async fn find_reserva(&self, id: &str) -> Result<Option<Reserva>, LendingError> {
        self.get_reserva(id).await
    }

    async fn create_reserva(&self, payload: ReservaCreate) -> Result<Reserva, LendingError> {
        ApiClient::create_reserva(self, &payload).await
    }

    async fn update_reserva(
        &self,
        id: &str,
        payload: ReservaUpdate,
    ) -> Result<Reserva, LendingError> {
        ApiClient::update_reserva(self, id, &payload).await
    }
}
