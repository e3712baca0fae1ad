use anyhow::Context as _;
use tonic::transport::Channel;
use uuid::Uuid;

use hamdel_proto::user::{GetUserByPhoneRequest, User, user_service_client::UserServiceClient};

use crate::domain::repository::UserPort;
use crate::domain::types::GateUser;
use crate::error::ChatServiceError;

/// gRPC client implementing `UserPort` via `user.UserService` on the auth
/// service.
#[derive(Clone)]
pub struct GrpcUserClient {
    client: UserServiceClient<Channel>,
}

impl GrpcUserClient {
    pub async fn connect(url: &str) -> Result<Self, ChatServiceError> {
        let client = UserServiceClient::connect(url.to_owned())
            .await
            .context("connect to auth gRPC")?;
        Ok(Self { client })
    }

    /// Create a client with lazy connection (connects on first RPC call).
    /// Lets this service start before the auth service is reachable.
    pub fn lazy(url: &str) -> Self {
        let channel = Channel::from_shared(url.to_owned())
            .expect("valid URI")
            .connect_lazy();
        Self {
            client: UserServiceClient::new(channel),
        }
    }
}

fn gate_user_from_proto(user: User) -> Result<GateUser, ChatServiceError> {
    let id = Uuid::parse_str(&user.id).context("user id from auth gRPC")?;
    Ok(GateUser {
        id,
        username: user.username,
        phone: user.phone,
        is_banned: user.is_banned,
        is_admin: user.is_admin,
    })
}

impl UserPort for GrpcUserClient {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<GateUser>, ChatServiceError> {
        let resp = self
            .client
            .clone()
            .get_user_by_phone(GetUserByPhoneRequest {
                phone: phone.to_owned(),
            })
            .await;
        match resp {
            Ok(resp) => Ok(Some(gate_user_from_proto(resp.into_inner())?)),
            Err(status) if status.code() == tonic::Code::NotFound => Ok(None),
            Err(status) => Err(anyhow::Error::from(status)
                .context("gRPC GetUserByPhone")
                .into()),
        }
    }
}
