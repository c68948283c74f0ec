//! REST client behavior against a mock backend: the error-message
//! contract, 404 mapping, and a full loan creation driven over HTTP.

use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use acervo::domain::status::{EmprestimoStatus, UsuarioStatus};
use acervo::models::{AdministradorCreate, EmprestimoCreate, ObraCreate, UsuarioCreate};
use acervo::services::loan_service;
use acervo::{ApiClient, Config, LendingError};

fn client_for(server: &MockServer) -> ApiClient {
    let config = Config {
        base_url: server.uri(),
        timeout_secs: 5,
    };
    ApiClient::new(&config).expect("client built")
}

fn usuario_json(status: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "u-1",
        "nome": "Maria da Silva",
        "cpf": "52998224725",
        "email": "maria@example.com",
        "status": status,
        "role": "user",
        "dataCadastro": "2025-01-10",
        "criadoEm": "2025-01-10T09:00:00",
        "atualizadoEm": "2025-01-10T09:00:00"
    })
}

fn obra_json(disponiveis: i32) -> serde_json::Value {
    json!({
        "id": "o-1",
        "titulo": "Dom Casmurro",
        "autor": "Machado de Assis",
        "isbn": "9788535914068",
        "categoriaId": "cat-1",
        "totalExemplares": 1,
        "exemplaresDisponiveis": disponiveis,
        "criadoEm": "2025-01-01T00:00:00",
        "atualizadoEm": "2025-01-01T00:00:00"
    })
}

#[tokio::test]
async fn bare_string_error_body_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emprestimos"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!("Exemplar não está disponível")),
        )
        .mount(&server)
        .await;

    let payload = EmprestimoCreate {
        usuario_id: "u-1".to_string(),
        exemplar_id: "ex-1".to_string(),
        obra_id: "o-1".to_string(),
        data_emprestimo: "2025-06-01".parse().unwrap(),
        data_prevista_devolucao: "2025-06-15".parse().unwrap(),
        status: EmprestimoStatus::Ativo,
        renovacoes: 0,
    };
    let err = client_for(&server)
        .create_emprestimo(&payload)
        .await
        .unwrap_err();
    match err {
        LendingError::Api(msg) => assert_eq!(msg, "Exemplar não está disponível"),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn detail_variants_and_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/obras"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({
                "detail": [
                    {"msg": "campo obrigatório", "loc": ["body", "titulo"]},
                    {"detail": "valor inválido"}
                ]
            })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categorias"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/obras"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Categoria não existe"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);

    match client.list_obras().await.unwrap_err() {
        LendingError::Api(msg) => assert_eq!(msg, "campo obrigatório, valor inválido"),
        other => panic!("expected Api error, got {:?}", other),
    }

    match client.list_categorias().await.unwrap_err() {
        LendingError::Api(msg) => assert_eq!(msg, "Erro: 500"),
        other => panic!("expected Api error, got {:?}", other),
    }

    let payload = ObraCreate {
        titulo: "Dom Casmurro".to_string(),
        autor: "Machado de Assis".to_string(),
        isbn: "9788535914068".to_string(),
        categoria_id: "cat-9".to_string(),
        editora: None,
        ano_publicacao: None,
        descricao: None,
        capa: None,
        total_exemplares: Some(1),
        exemplares_disponiveis: Some(1),
    };
    match client.create_obra(&payload).await.unwrap_err() {
        LendingError::Api(msg) => assert_eq!(msg, "Categoria não existe"),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_record_is_none_on_fetch_and_not_found_on_mutate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/emprestimos/emp-9"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Empréstimo não encontrado"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/reservas/res-9"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Reserva não encontrada"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert!(client.get_emprestimo("emp-9").await.unwrap().is_none());
    assert!(matches!(
        client.delete_reserva("res-9").await.unwrap_err(),
        LendingError::NotFound
    ));
}

#[tokio::test]
async fn delete_accepts_empty_no_content_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/reservas/res-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client_for(&server).delete_reserva("res-1").await.unwrap();
}

#[tokio::test]
async fn login_cleans_cpf_and_decodes_wrapped_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"cpf": "52998224725", "senha": "s3nh4"})))
        .respond_with(
            // Wrapped status object, the backend's other serialization shape
            ResponseTemplate::new(200).set_body_json(usuario_json(json!({"value": "ativo"}))),
        )
        .mount(&server)
        .await;

    let usuario = client_for(&server)
        .login("529.982.247-25", "s3nh4")
        .await
        .unwrap();
    assert_eq!(usuario.status, UsuarioStatus::Ativo);
    assert!(usuario.pode_emprestar());
}

#[tokio::test]
async fn invalid_cpf_never_reaches_the_backend() {
    let server = MockServer::start().await;

    let payload = UsuarioCreate {
        nome: "Maria da Silva".to_string(),
        cpf: "123".to_string(),
        email: "maria@example.com".to_string(),
        telefone: None,
        endereco: None,
        status: None,
        role: None,
        senha: "s3nh4".to_string(),
        data_cadastro: "2025-01-10".parse().unwrap(),
    };
    let err = client_for(&server).create_usuario(&payload).await.unwrap_err();
    assert!(matches!(err, LendingError::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn administrador_creation_requires_admin_role_backend_side() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/administradores"))
        .and(body_json(json!({"usuarioId": "u-1"})))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            json!({"detail": "Usuário deve ter role 'admin' para ser administrador"}),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/administradores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "adm-1",
            "usuarioId": "u-9",
            "nivelAcesso": 3,
            "criadoEm": "2025-01-01T00:00:00",
            "atualizadoEm": "2025-01-01T00:00:00"
        }])))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let payload = AdministradorCreate {
        usuario_id: "u-1".to_string(),
        nivel_acesso: None,
    };
    match client.create_administrador(&payload).await.unwrap_err() {
        LendingError::Api(msg) => {
            assert_eq!(msg, "Usuário deve ter role 'admin' para ser administrador")
        }
        other => panic!("expected Api error, got {:?}", other),
    }

    let administradores = client.list_administradores().await.unwrap();
    assert_eq!(administradores.len(), 1);
    assert_eq!(administradores[0].usuario_id, "u-9");
    assert_eq!(administradores[0].nivel_acesso, 3);
}

#[tokio::test]
async fn cover_upload_posts_multipart_and_maps_missing_work() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/obras/o-1/upload-capa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"capa": "/capas/o-1.png"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/obras/o-9/upload-capa"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Obra não encontrada"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);

    client
        .upload_capa_obra("o-1", "capa.png", vec![0x89, 0x50, 0x4e, 0x47])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let upload = requests
        .iter()
        .find(|r| r.url.path() == "/obras/o-1/upload-capa")
        .unwrap();
    let content_type = upload.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let err = client
        .upload_capa_obra("o-9", "capa.png", vec![1, 2, 3])
        .await
        .unwrap_err();
    assert!(matches!(err, LendingError::NotFound));
}

#[tokio::test]
async fn loan_creation_runs_end_to_end_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/usuarios/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(usuario_json(json!("ativo"))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/obras/o-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(obra_json(1)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/emprestimos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/exemplares"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "ex-1",
            "obraId": "o-1",
            "codigo": "COD-1",
            "status": "disponivel",
            "criadoEm": "2025-01-01T00:00:00",
            "atualizadoEm": "2025-01-01T00:00:00"
        }])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/emprestimos"))
        .and(body_partial_json(json!({
            "usuarioId": "u-1",
            "exemplarId": "ex-1",
            "obraId": "o-1",
            "dataEmprestimo": "2025-06-01",
            "dataPrevistaDevolucao": "2025-06-15",
            "status": "ativo",
            "renovacoes": 0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "emp-1",
            "usuarioId": "u-1",
            "exemplarId": "ex-1",
            "obraId": "o-1",
            "dataEmprestimo": "2025-06-01",
            "dataPrevistaDevolucao": "2025-06-15",
            "dataDevolucao": null,
            "status": {"value": "ativo"},
            "renovacoes": 0,
            "criadoEm": "2025-06-01T12:00:00",
            "atualizadoEm": "2025-06-01T12:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let emprestimo =
        loan_service::create_loan(&client, "u-1", "o-1", "2025-06-01".parse().unwrap())
            .await
            .unwrap();

    assert_eq!(emprestimo.id, "emp-1");
    assert_eq!(emprestimo.status, EmprestimoStatus::Ativo);
    assert_eq!(
        emprestimo.data_prevista_devolucao,
        "2025-06-15".parse::<chrono::NaiveDate>().unwrap()
    );
}
