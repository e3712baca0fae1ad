//! End-to-end smoke checks against a running Hamdel stack.
//!
//! # Usage
//!
//! ```bash
//! # Auth flow only
//! cargo run -p smoke -- --auth-url http://localhost:3100
//!
//! # Auth flow plus the community endpoints
//! cargo run -p smoke -- --auth-url http://localhost:3100 --chat-url http://localhost:3110
//! ```
//!
//! The verify step reads the issued code from the request-code response,
//! so the auth service must run with `EXPOSE_OTP_CODE=true`.
//!
//! Exits 0 when every step passes, exits 1 when any fail.

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::StatusCode;
use serde_json::{Value, json};

#[derive(Parser)]
#[command(about = "Run smoke checks against live Hamdel services")]
struct Args {
    /// Base URL of the auth service (e.g. http://localhost:3100)
    #[arg(long)]
    auth_url: String,

    /// Base URL of the chat service; community checks run only when given
    #[arg(long)]
    chat_url: Option<String>,

    /// Phone number to register or sign in with
    #[arg(long, default_value = "+15550100000")]
    phone: String,

    /// Password bound to the phone on first verification
    #[arg(long, default_value = "smoke-password")]
    password: String,
}

#[derive(Default)]
struct Report {
    passed: usize,
    failed: usize,
}

impl Report {
    /// Record one step. Returns whether it passed.
    fn check(&mut self, name: &str, ok: bool, detail: String) -> bool {
        if ok {
            self.passed += 1;
            println!("PASS  {name}");
        } else {
            self.failed += 1;
            println!("FAIL  {name}");
            println!("        {detail}");
        }
        ok
    }

    fn print_summary(&self) {
        println!();
        println!("{} passed, {} failed", self.passed, self.failed);
    }
}

async fn get_status(client: &reqwest::Client, url: &str) -> Result<StatusCode> {
    let resp = client.get(url).send().await.with_context(|| format!("GET {url}"))?;
    Ok(resp.status())
}

/// POST a JSON body; hand back status and parsed body (Null when not JSON).
async fn post_json(
    client: &reqwest::Client,
    url: &str,
    body: &Value,
    bearer: Option<&str>,
) -> Result<(StatusCode, Value)> {
    let mut req = client.post(url).json(body);
    if let Some(token) = bearer {
        req = req.bearer_auth(token);
    }
    let resp = req.send().await.with_context(|| format!("POST {url}"))?;
    let status = resp.status();
    let body = resp.json().await.unwrap_or(Value::Null);
    Ok((status, body))
}

async fn get_json(
    client: &reqwest::Client,
    url: &str,
    bearer: Option<&str>,
) -> Result<(StatusCode, Value)> {
    let mut req = client.get(url);
    if let Some(token) = bearer {
        req = req.bearer_auth(token);
    }
    let resp = req.send().await.with_context(|| format!("GET {url}"))?;
    let status = resp.status();
    let body = resp.json().await.unwrap_or(Value::Null);
    Ok((status, body))
}

fn str_field(body: &Value, field: &str) -> Option<String> {
    body.get(field).and_then(Value::as_str).map(str::to_owned)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = reqwest::Client::new();
    let mut report = Report::default();

    println!("Running smoke checks against {}", args.auth_url);
    println!();

    // Liveness first; nothing else is meaningful against a dead service.
    let status = get_status(&client, &format!("{}/healthz", args.auth_url)).await?;
    if !report.check(
        "auth: GET /healthz",
        status == StatusCode::OK,
        format!("status {status}"),
    ) {
        report.print_summary();
        std::process::exit(1);
    }

    // Phone verification: request a code, then trade it for tokens.
    let (status, body) = post_json(
        &client,
        &format!("{}/auth/request-code", args.auth_url),
        &json!({"phone": args.phone, "password": args.password}),
        None,
    )
    .await?;
    report.check(
        "auth: POST /auth/request-code",
        status == StatusCode::OK,
        format!("status {status}, body {body}"),
    );
    let Some(code) = str_field(&body, "code") else {
        report.check(
            "auth: issued code present in response",
            false,
            "no `code` field; is the service running with EXPOSE_OTP_CODE=true?".to_owned(),
        );
        report.print_summary();
        std::process::exit(1);
    };

    let (status, body) = post_json(
        &client,
        &format!("{}/auth/verify-code", args.auth_url),
        &json!({"phone": args.phone, "password": args.password, "code": code}),
        None,
    )
    .await?;
    report.check(
        "auth: POST /auth/verify-code",
        status == StatusCode::OK,
        format!("status {status}, body {body}"),
    );
    let access = str_field(&body, "access");
    let refresh = str_field(&body, "refresh");
    let (Some(access), Some(refresh)) = (access, refresh) else {
        report.check(
            "auth: token pair present in response",
            false,
            format!("body {body}"),
        );
        report.print_summary();
        std::process::exit(1);
    };

    // Refresh mints a new access token; an access token in the refresh
    // slot must be turned away.
    let (status, body) = post_json(
        &client,
        &format!("{}/auth/refresh", args.auth_url),
        &json!({"refresh": refresh}),
        None,
    )
    .await?;
    report.check(
        "auth: POST /auth/refresh",
        status == StatusCode::OK && str_field(&body, "access").is_some(),
        format!("status {status}, body {body}"),
    );

    let (status, body) = post_json(
        &client,
        &format!("{}/auth/refresh", args.auth_url),
        &json!({"refresh": access}),
        None,
    )
    .await?;
    report.check(
        "auth: refresh rejects an access token",
        status == StatusCode::UNAUTHORIZED,
        format!("status {status}, body {body}"),
    );

    if let Some(chat_url) = &args.chat_url {
        println!();
        println!("Running community checks against {chat_url}");
        println!();

        let status = get_status(&client, &format!("{chat_url}/healthz")).await?;
        report.check(
            "chat: GET /healthz",
            status == StatusCode::OK,
            format!("status {status}"),
        );

        let (status, body) = get_json(&client, &format!("{chat_url}/rooms"), Some(&access)).await?;
        report.check(
            "chat: GET /rooms with bearer token",
            status == StatusCode::OK && body.is_array(),
            format!("status {status}, body {body}"),
        );

        let (status, _) = get_json(&client, &format!("{chat_url}/rooms"), None).await?;
        report.check(
            "chat: GET /rooms without token is 401",
            status == StatusCode::UNAUTHORIZED,
            format!("status {status}"),
        );

        let (status, body) = post_json(
            &client,
            &format!("{chat_url}/moods"),
            &json!({"mood": "happy"}),
            Some(&access),
        )
        .await?;
        report.check(
            "chat: POST /moods",
            status == StatusCode::CREATED,
            format!("status {status}, body {body}"),
        );

        let (status, body) = get_json(
            &client,
            &format!("{chat_url}/contents/suggestions"),
            Some(&access),
        )
        .await?;
        report.check(
            "chat: GET /contents/suggestions",
            status == StatusCode::OK && body.get("contents").is_some(),
            format!("status {status}, body {body}"),
        );
    }

    report.print_summary();

    if report.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
