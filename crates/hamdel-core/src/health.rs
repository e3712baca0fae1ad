use axum::http::StatusCode;

/// `GET /healthz` — the process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz` — the process accepts traffic. Both services connect their
/// stores before binding the router, so up means ready here.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_report_live() {
        assert_eq!(healthz().await, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_report_ready() {
        assert_eq!(readyz().await, StatusCode::OK);
    }
}
