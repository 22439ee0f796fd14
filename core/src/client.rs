//! Stateless request builder and response parser for the to-do API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each route is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Every successful response is a 200;
//! a 400 carries the server's message as plain text.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ItemAndId, ItemRequest};

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_print_items(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/")
    }

    pub fn build_read_all(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/read")
    }

    pub fn build_create_item(&self, input: &ItemRequest) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/create", input)
    }

    pub fn build_read_item(&self, id: i64) -> HttpRequest {
        self.bare(HttpMethod::Get, &format!("/read/{id}"))
    }

    pub fn build_update_item(&self, id: i64, input: &ItemRequest) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, &format!("/update/{id}"), input)
    }

    pub fn build_delete_item(&self, id: i64) -> HttpRequest {
        self.bare(HttpMethod::Delete, &format!("/delete/{id}"))
    }

    pub fn build_delete_all(&self) -> HttpRequest {
        self.bare(HttpMethod::Delete, "/delete")
    }

    /// The numbered plain-text listing, returned verbatim.
    pub fn parse_print_items(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response)?;
        Ok(response.body)
    }

    pub fn parse_read_all(&self, response: HttpResponse) -> Result<Vec<ItemAndId>, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<ItemAndId, ApiError> {
        parse_json(response)
    }

    pub fn parse_read_item(&self, response: HttpResponse) -> Result<ItemAndId, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<ItemAndId, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<ItemAndId, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete_all(&self, response: HttpResponse) -> Result<Vec<ItemAndId>, ApiError> {
        parse_json(response)
    }

    fn bare(&self, method: HttpMethod, route: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{route}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(
        &self,
        method: HttpMethod,
        route: &str,
        input: &ItemRequest,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{route}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        400 => Err(ApiError::InvalidRequest {
            message: response.body.clone(),
        }),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
