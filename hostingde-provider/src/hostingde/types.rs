//! hosting.de JSON API envelope types

use serde::Deserialize;

use crate::types::{ApiErrorDetail, PaginatedResponse};

/// Envelope wrapping every API response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub errors: Vec<ApiError>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub warnings: Vec<String>,
    /// `success`, `pending` or `error`.
    #[serde(default)]
    pub status: String,
    pub response: Option<T>,
}

/// Error object inside the envelope.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiError {
    pub code: Option<i64>,
    pub context_object: Option<String>,
    pub context_path: Option<String>,
    pub details: Vec<ApiErrorDetail>,
    pub text: String,
    pub value: Option<String>,
}

/// Transaction ids for correlating a call with provider-side logs.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub client_transaction_id: String,
    pub server_transaction_id: String,
}

/// `response` payload of the `*Find` endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindResponse<T> {
    pub limit: u32,
    pub page: u32,
    pub total_entries: u32,
    #[allow(dead_code)]
    pub total_pages: u32,
    #[allow(dead_code)]
    #[serde(rename = "type", default)]
    pub result_type: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> FindResponse<T> {
    pub fn into_paginated(self) -> PaginatedResponse<T> {
        PaginatedResponse::new(self.data, self.page, self.limit, self.total_entries)
    }
}
