use std::time::Duration;

use anyhow::anyhow;
use reqwest::{
    blocking::{Client, RequestBuilder},
    StatusCode,
};
use serde::de::DeserializeOwned;

use gg360_boundary::{self as json, ApiResponse, ErrorBody, Resource, StatusUpdate};
use gg360_core::{
    entities::{self as e, Id, Status},
    gateways::{Collection, Error, RedeemRequests, Result, StatusChange},
    resource::Reportable,
};

/// An entity that is stored by the platform API.
pub trait Remote: Sized {
    /// The JSON representation of the entity.
    type Json: Resource + DeserializeOwned + From<Self> + Into<Self>;
}

impl Remote for e::WasteReport {
    type Json = json::Report;
}

impl Remote for e::RecycleEntry {
    type Json = json::RecycleEntry;
}

impl Remote for e::Redeem {
    type Json = json::Redeem;
}

impl Remote for e::Event {
    type Json = json::Event;
}

impl Remote for e::Staff {
    type Json = json::Staff;
}

impl Remote for e::Article {
    type Json = json::Article;
}

impl Remote for e::User {
    type Json = json::User;
}

impl Remote for e::Volunteer {
    type Json = json::Volunteer;
}

/// A blocking client of the platform REST API.
#[derive(Debug, Clone)]
pub struct RestApi {
    base_url: String,
    client: Client,
}

impl RestApi {
    pub fn try_new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            return Err(Error::Other(anyhow!("Missing API base URL")));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(fetch_error)?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url<T: Resource>(&self) -> String {
        format!("{}{}", self.base_url, T::PATH)
    }

    fn record_url<T: Resource>(&self, id: &Id) -> String {
        format!("{}/{}", self.collection_url::<T>(), id)
    }

    fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().map_err(fetch_error)?;
        let status = response.status();
        let body = response.text().map_err(fetch_error)?;
        decode(status, &body)
    }
}

fn fetch_error(err: reqwest::Error) -> Error {
    Error::Fetch(err.to_string())
}

/// Turns a non-successful response into an error, preferring the
/// message sent by the server.
pub fn check_status(status: StatusCode, body: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message);
    log::debug!("Request failed with status {status}: {message:?}");
    match message {
        Some(message) => Err(Error::Api {
            status: status.as_u16(),
            message,
        }),
        None if status == StatusCode::NOT_FOUND => Err(Error::NotFound),
        None => Err(Error::Api {
            status: status.as_u16(),
            message: format!("Request failed with status {status}"),
        }),
    }
}

/// Decodes a wrapped or bare response body.
pub fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    check_status(status, body)?;
    let response: ApiResponse<T> =
        serde_json::from_str(body).map_err(|err| Error::Decode(err.to_string()))?;
    response.into_result().map_err(|err| Error::Api {
        status: err.http_status,
        message: err.message,
    })
}

impl<T: Remote> Collection<T> for RestApi {
    fn list(&self) -> Result<Vec<T>> {
        let url = self.collection_url::<T::Json>();
        log::debug!("GET {url}");
        let records: Vec<T::Json> = self.fetch(self.client.get(&url))?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    fn get(&self, id: &Id) -> Result<T> {
        let url = self.record_url::<T::Json>(id);
        log::debug!("GET {url}");
        let record: T::Json = self.fetch(self.client.get(&url))?;
        Ok(record.into())
    }

    fn delete(&self, id: &Id) -> Result<()> {
        let url = self.record_url::<T::Json>(id);
        log::debug!("DELETE {url}");
        let response = self.client.delete(&url).send().map_err(fetch_error)?;
        let status = response.status();
        let body = response.text().unwrap_or_default();
        check_status(status, &body)
    }
}

impl<T: Remote + Reportable> StatusChange<T> for RestApi {
    fn change_status(&self, id: &Id, status: T::Status) -> Result<T> {
        let url = format!("{}/status", self.record_url::<T::Json>(id));
        let update = StatusUpdate {
            status: status.label().to_owned(),
        };
        log::debug!("PATCH {url} {}", update.status);
        let record: T::Json = self.fetch(self.client.patch(&url).json(&update))?;
        Ok(record.into())
    }
}

impl RedeemRequests for RestApi {
    fn create_redeem(&self, new_redeem: &e::NewRedeem) -> Result<e::Redeem> {
        let url = self.collection_url::<json::Redeem>();
        log::debug!("POST {url}");
        let body = json::NewRedeem::from(new_redeem.clone());
        let record: json::Redeem = self.fetch(self.client.post(&url).json(&body))?;
        Ok(record.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> RestApi {
        RestApi::try_new("http://localhost:5000/ ", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn build_urls() {
        let api = api();
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(
            api.collection_url::<json::Report>(),
            "http://localhost:5000/api/report/reports"
        );
        assert_eq!(
            api.record_url::<json::Event>(&"e1".into()),
            "http://localhost:5000/api/events/e1"
        );
        assert_eq!(
            api.record_url::<<e::Volunteer as Remote>::Json>(&"v1".into()),
            "http://localhost:5000/api/volunteers/v1"
        );
    }

    #[test]
    fn missing_base_url() {
        assert!(matches!(
            RestApi::try_new(" / ", Duration::from_secs(1)),
            Err(Error::Other(_))
        ));
    }

    #[test]
    fn decode_wrapped_and_bare_payloads() {
        let wrapped = r#"{"success":true,"data":[{"_id":"w1","wasteType":"Glass","status":"Pending"}]}"#;
        let reports: Vec<json::Report> = decode(StatusCode::OK, wrapped).unwrap();
        let report: e::WasteReport = reports.into_iter().next().unwrap().into();
        assert_eq!(report.id.as_str(), "w1");
        assert_eq!(report.status, Some(e::ReportStatus::Pending));

        let bare = r#"[{"_id":"w2"}]"#;
        let reports: Vec<json::Report> = decode(StatusCode::OK, bare).unwrap();
        assert_eq!(reports[0].id, "w2");
    }

    #[test]
    fn unsuccessful_envelope() {
        let body = r#"{"success":false,"message":"Redeem not found"}"#;
        let err = decode::<json::Redeem>(StatusCode::OK, body).unwrap_err();
        assert!(matches!(
            err,
            Error::Api { status: 200, ref message } if message == "Redeem not found"
        ));
    }

    #[test]
    fn error_status_with_message() {
        let body = r#"{"error":"Invalid status"}"#;
        let err = decode::<json::Redeem>(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert_eq!(err.to_string(), "Invalid status");
    }

    #[test]
    fn error_status_without_message() {
        let err = decode::<json::Redeem>(StatusCode::INTERNAL_SERVER_ERROR, "<html>").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Request failed with status 500 Internal Server Error"
        );
        let err = decode::<json::Redeem>(StatusCode::NOT_FOUND, "").unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[test]
    fn undecodable_body() {
        let err = decode::<Vec<json::Report>>(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
