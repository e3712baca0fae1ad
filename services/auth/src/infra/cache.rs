use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;
use uuid::Uuid;

use crate::domain::repository::SessionStore;
use crate::error::AuthServiceError;

/// Admin sessions live in Redis so a restart of the auth service does not
/// log every admin out. Expiry rides on the key TTL.
#[derive(Clone)]
pub struct RedisSessionStore {
    pub pool: Pool,
}

fn session_key(session_id: &str) -> String {
    format!("admin_session:{}", session_id)
}

impl SessionStore for RedisSessionStore {
    async fn set(
        &self,
        session_id: &str,
        user_id: Uuid,
        ttl_secs: u64,
    ) -> Result<(), AuthServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        let key = session_key(session_id);
        let (): () = conn
            .set_ex(&key, user_id.to_string(), ttl_secs)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<Uuid>, AuthServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        let key = session_key(session_id);
        let value: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        value
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()
            .map_err(|e| AuthServiceError::Internal(e.into()))
    }

    async fn delete(&self, session_id: &str) -> Result<(), AuthServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        let key = session_key(session_id);
        let (): () = conn
            .del(&key)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(())
    }
}
