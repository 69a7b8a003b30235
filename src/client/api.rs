//! Requests to the Gunshi API.
//!
//! Every function returns the raw error message on failure so screens can show it as is.

use reqwasm::http::{Request, RequestCredentials, Response};
use serde::{de::DeserializeOwned, Serialize};

use gunshi::{
    formation::{editor::FormationGateway, error::FormationError},
    model::{
        api::ErrorDto,
        formation::{
            FormationBoardDto, FormationDto, FormationKey, SaveFormationDto, SavedFormationDto,
        },
        identity::{IdentityDto, SetIdentityDto},
        roster::{OfficerCountDto, OfficerEntryDto, RosterDto, SkillDto, SkillOwnershipDto},
    },
};

pub async fn get_identity() -> Result<Option<IdentityDto>, String> {
    let response = send(Request::get("/api/identity")).await?;

    match response.status() {
        200 => parse(response).await.map(Some),
        404 => Ok(None),
        _ => Err(failure(response).await),
    }
}

pub async fn set_identity(name: &str) -> Result<IdentityDto, String> {
    let body = SetIdentityDto {
        name: name.to_string(),
    };
    let response = send_json(Request::post("/api/identity"), &body).await?;

    expect_ok(response).await
}

pub async fn clear_identity() -> Result<(), String> {
    let response = send(Request::delete("/api/identity")).await?;

    match response.status() {
        200 | 204 => Ok(()),
        _ => Err(failure(response).await),
    }
}

pub async fn get_users(search: &str) -> Result<Vec<String>, String> {
    let url = if search.trim().is_empty() {
        "/api/users".to_string()
    } else {
        format!("/api/users?search={}", encode(search.trim()))
    };

    expect_ok(send(Request::get(&url)).await?).await
}

pub async fn get_owners() -> Result<Vec<String>, String> {
    expect_ok(send(Request::get("/api/owners")).await?).await
}

pub async fn get_officers() -> Result<Vec<OfficerEntryDto>, String> {
    expect_ok(send(Request::get("/api/officers")).await?).await
}

pub async fn put_owned_officers(counts: &[OfficerCountDto]) -> Result<usize, String> {
    expect_ok(send_json(Request::put("/api/officers/owned"), &counts).await?).await
}

pub async fn get_skills() -> Result<Vec<SkillDto>, String> {
    expect_ok(send(Request::get("/api/skills")).await?).await
}

pub async fn put_owned_skills(ownership: &[SkillOwnershipDto]) -> Result<usize, String> {
    expect_ok(send_json(Request::put("/api/skills/owned"), &ownership).await?).await
}

pub async fn get_roster(owner: &str) -> Result<RosterDto, String> {
    let url = format!("/api/roster/{}", encode(owner));

    expect_ok(send(Request::get(&url)).await?).await
}

pub async fn get_board(owner: &str) -> Result<FormationBoardDto, String> {
    let url = format!("/api/formations/{}", encode(owner));

    expect_ok(send(Request::get(&url)).await?).await
}

pub async fn get_formation(key: &FormationKey) -> Result<Option<FormationDto>, String> {
    let url = format!(
        "/api/formations/{}/{}/{}",
        encode(key.owner.as_str()),
        encode(key.advisor.as_str()),
        encode(&key.label)
    );
    let response = send(Request::get(&url)).await?;

    match response.status() {
        200 => parse(response).await.map(Some),
        404 => Ok(None),
        _ => Err(failure(response).await),
    }
}

pub async fn save_formation(
    key: &FormationKey,
    formation: &SaveFormationDto,
) -> Result<SavedFormationDto, String> {
    let url = format!(
        "/api/formations/{}/{}",
        encode(key.owner.as_str()),
        encode(&key.label)
    );

    expect_ok(send_json(Request::put(&url), formation).await?).await
}

/// Formation persistence through the HTTP API
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiGateway;

impl FormationGateway for ApiGateway {
    async fn load(&self, key: &FormationKey) -> Result<Option<FormationDto>, FormationError> {
        get_formation(key).await.map_err(FormationError::Backend)
    }

    async fn save(
        &self,
        key: &FormationKey,
        formation: &SaveFormationDto,
    ) -> Result<SavedFormationDto, FormationError> {
        save_formation(key, formation)
            .await
            .map_err(FormationError::Backend)
    }
}

async fn send(request: Request) -> Result<Response, String> {
    request
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))
}

async fn send_json<T: Serialize + ?Sized>(request: Request, body: &T) -> Result<Response, String> {
    let body = serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))?;

    send(request.header("Content-Type", "application/json").body(body)).await
}

async fn expect_ok<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    match response.status() {
        200 => parse(response).await,
        _ => Err(failure(response).await),
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn failure(response: Response) -> String {
    let status = response.status();

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        return format!("Request failed with status {}: {}", status, error_dto.error);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    format!("Request failed with status {}: {}", status, error_text)
}

/// Percent-encodes a path segment or query value.
fn encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
