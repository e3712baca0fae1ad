use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbChallengeRepository, DbChallengeResponseRepository, DbContentRepository,
    DbMessageRepository, DbRoomRepository, DbUserMoodRepository,
};
use crate::infra::grpc::GrpcUserClient;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Identity lookups against the auth service.
    pub user_client: GrpcUserClient,
    pub jwt_secret: String,
}

impl AppState {
    pub fn room_repo(&self) -> DbRoomRepository {
        DbRoomRepository {
            db: self.db.clone(),
        }
    }

    pub fn challenge_repo(&self) -> DbChallengeRepository {
        DbChallengeRepository {
            db: self.db.clone(),
        }
    }

    pub fn message_repo(&self) -> DbMessageRepository {
        DbMessageRepository {
            db: self.db.clone(),
        }
    }

    pub fn response_repo(&self) -> DbChallengeResponseRepository {
        DbChallengeResponseRepository {
            db: self.db.clone(),
        }
    }

    pub fn mood_repo(&self) -> DbUserMoodRepository {
        DbUserMoodRepository {
            db: self.db.clone(),
        }
    }

    pub fn content_repo(&self) -> DbContentRepository {
        DbContentRepository {
            db: self.db.clone(),
        }
    }
}
