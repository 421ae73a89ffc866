use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing, Json, Router,
};
use tracing::debug;

use crate::api::auth::AuthUser;
use crate::models::{AppError, AppState, Employee, NewEmployee};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", routing::get(read_employees))
        .route("/", routing::post(create_employee))
        .route("/{id}", routing::get(read_employee))
        .route("/{id}", routing::put(update_employee))
        .route("/{id}", routing::delete(delete_employee))
}

/// El listado completo es lo único que pide token; el resto va abierto
async fn read_employees(
    State(app_state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<Employee>>, AppError> {
    debug!("Listado de empleados para {}", claims.sub);
    let employees = Employee::read_all(&app_state.pool).await?;
    Ok(Json(employees))
}

async fn read_employee(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, AppError> {
    Employee::read(&app_state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("employee"))
}

async fn create_employee(
    State(app_state): State<Arc<AppState>>,
    Json(new_employee): Json<NewEmployee>,
) -> Result<impl IntoResponse, AppError> {
    let employee = Employee::create(&app_state.pool, new_employee).await?;
    debug!("Empleado {} creado", employee.id);
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn update_employee(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(employee): Json<NewEmployee>,
) -> Result<impl IntoResponse, AppError> {
    // Comprobación previa; la carrera con un delete concurrente se asume
    if Employee::read(&app_state.pool, id).await?.is_none() {
        return Err(AppError::not_found("employee"));
    }

    let rows_affected = Employee::update(&app_state.pool, id, employee).await?;
    if rows_affected == 0 {
        return Err(AppError::not_found("employee"));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_employee(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let rows_affected = Employee::delete(&app_state.pool, id).await?;
    if rows_affected == 0 {
        return Err(AppError::not_found("employee"));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TokenClaims;
    use axum::body::Body;
    use axum::extract::FromRequestParts;
    use axum::http::Request;
    use sqlx::sqlite::SqlitePoolOptions;

    const SECRET: &str = "test-secret";
    const ISSUER: &str = "employees-api";

    async fn test_state() -> Arc<AppState> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::system::init_db(&pool).await.unwrap();
        Arc::new(AppState {
            pool,
            secret: SECRET.to_string(),
            issuer: ISSUER.to_string(),
        })
    }

    fn sample_employee() -> NewEmployee {
        NewEmployee {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "1".to_string(),
            age: 30,
            salary: 1000,
        }
    }

    async fn auth_user(state: &Arc<AppState>, token: &str) -> Result<AuthUser, AppError> {
        let request = Request::builder()
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        AuthUser::from_request_parts(&mut parts, state).await
    }

    #[tokio::test]
    async fn create_then_read_roundtrip() {
        let state = test_state().await;

        let response = create_employee(State(state.clone()), Json(sample_employee()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = Employee::read_all(&state.pool).await.unwrap().remove(0);
        let Json(fetched) = read_employee(State(state.clone()), Path(created.id))
            .await
            .unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "A");
        assert_eq!(fetched.email, "a@x.com");
        assert_eq!(fetched.phone, "1");
        assert_eq!(fetched.age, 30);
        assert_eq!(fetched.salary, 1000);
    }

    #[tokio::test]
    async fn read_missing_employee_is_not_found() {
        let state = test_state().await;
        let response = read_employee(State(state.clone()), Path(42)).await;
        assert!(matches!(response, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_missing_id_leaves_table_alone() {
        let state = test_state().await;
        Employee::create(&state.pool, sample_employee()).await.unwrap();
        let before = Employee::count(&state.pool).await.unwrap();

        let response = update_employee(State(state.clone()), Path(999), Json(sample_employee()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(Employee::count(&state.pool).await.unwrap(), before);
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let state = test_state().await;
        let created = Employee::create(&state.pool, sample_employee()).await.unwrap();

        let updated = NewEmployee {
            name: "B".to_string(),
            email: "b@x.com".to_string(),
            phone: "2".to_string(),
            age: 31,
            salary: 2000,
        };
        let response = update_employee(State(state.clone()), Path(created.id), Json(updated))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let Json(fetched) = read_employee(State(state.clone()), Path(created.id))
            .await
            .unwrap();
        assert_eq!(fetched.name, "B");
        assert_eq!(fetched.salary, 2000);
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let state = test_state().await;
        let created = Employee::create(&state.pool, sample_employee()).await.unwrap();

        let response = delete_employee(State(state.clone()), Path(created.id))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = delete_employee(State(state.clone()), Path(created.id))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn listing_requires_a_valid_token() {
        let state = test_state().await;
        Employee::create(&state.pool, sample_employee()).await.unwrap();

        // Sin cabecera
        let request = Request::builder().body(Body::empty()).unwrap();
        let (mut parts, _) = request.into_parts();
        let rejected = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(rejected, Err(AppError::Unauthorized(_))));

        // Token firmado con otro secreto
        let forged = TokenClaims::new("a@x.com", None, ISSUER)
            .sign("other-secret")
            .unwrap();
        assert!(auth_user(&state, &forged).await.is_err());

        // Token válido
        let token = TokenClaims::new("a@x.com", None, ISSUER)
            .sign(SECRET)
            .unwrap();
        let AuthUser(claims) = auth_user(&state, &token).await.unwrap();

        let Json(employees) = read_employees(State(state.clone()), AuthUser(claims))
            .await
            .unwrap();
        assert_eq!(employees.len(), 1);
    }
}
