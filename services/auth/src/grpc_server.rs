use tonic::{Request, Response, Status};
use uuid::Uuid;

use hamdel_proto::user::{
    GetUserByPhoneRequest, GetUserRequest, User, user_service_server::UserService,
};

use crate::domain::repository::UserRepository;
use crate::domain::types::AuthUser;
use crate::error::AuthServiceError;
use crate::state::AppState;

/// Account lookups for the other services. The chat service resolves every
/// bearer token's phone through this.
#[derive(Clone)]
pub struct AuthGrpcServer {
    pub state: AppState,
}

fn internal(e: AuthServiceError) -> Status {
    // The detail stays server-side; peers get a generic status.
    tracing::error!(error = %e, "grpc internal error");
    Status::internal("internal error")
}

fn user_to_proto(user: AuthUser) -> User {
    User {
        id: user.id.to_string(),
        username: user.username,
        phone: user.phone,
        is_banned: user.is_banned,
        is_admin: user.is_admin,
        created_at: user.created_at.to_rfc3339(),
    }
}

#[tonic::async_trait]
impl UserService for AuthGrpcServer {
    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<User>, Status> {
        let user_id = request
            .into_inner()
            .user_id
            .parse::<Uuid>()
            .map_err(|_| Status::invalid_argument("invalid user_id"))?;

        let user = self
            .state
            .user_repo()
            .find_by_id(user_id)
            .await
            .map_err(internal)?
            .ok_or_else(|| Status::not_found("user not found"))?;

        Ok(Response::new(user_to_proto(user)))
    }

    async fn get_user_by_phone(
        &self,
        request: Request<GetUserByPhoneRequest>,
    ) -> Result<Response<User>, Status> {
        let phone = request.into_inner().phone;
        if phone.trim().is_empty() {
            return Err(Status::invalid_argument("missing phone"));
        }

        let user = self
            .state
            .user_repo()
            .find_by_phone(&phone)
            .await
            .map_err(internal)?
            .ok_or_else(|| Status::not_found("user not found"))?;

        Ok(Response::new(user_to_proto(user)))
    }
}
