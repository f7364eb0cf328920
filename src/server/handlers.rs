//! MCP tool handlers.
//!
//! Exposes the list domain report through the rmcp `tool_router` pattern.

use crate::client::HubSpotClient;
use crate::config::Config;
use crate::error::{DomainReportError, ImportListContactsError};
use crate::repositories::contact_list_repository;
use crate::services::{DomainReport, ListDomainReport, Query};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;

/// MCP server exposing HubSpot list reports.
#[derive(Clone)]
pub struct SyncMcpServer {
    client: HubSpotClient,
    default_api_key: String,
    page_size: usize,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for SyncMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "hubspot-list-sync".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Reports on HubSpot contact lists: count list members by email domain.".into(),
            ),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListDomainReportParams {
    /// Numeric id of the HubSpot list
    list_id: String,
    /// HubSpot API key; the configured key is used when omitted
    #[serde(default)]
    api_key: Option<String>,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// Map a report failure to the MCP error the caller sees.
pub(crate) fn report_error(error: DomainReportError) -> McpError {
    match error {
        DomainReportError::InvalidListId(_) => McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(error.to_string()),
            data: None,
        },
        DomainReportError::Import(ImportListContactsError::Unexpected(e)) => {
            tracing::error!("Domain report failed: {:?}", e);
            to_mcp_error(format!("Internal server error: {}", e))
        }
        DomainReportError::Import(import) => {
            tracing::warn!(error = %import, "Domain report import failed");
            to_mcp_error(import)
        }
    }
}

#[tool_router]
impl SyncMcpServer {
    pub fn new(client: HubSpotClient, config: &Config) -> Self {
        Self {
            client,
            default_api_key: config.hubspot_api_key.clone(),
            page_size: config.page_size,
            tool_router: Self::tool_router(),
        }
    }

    /// Build the domain report for `list_id`, authenticated with `api_key`
    /// or the configured key.
    pub async fn domain_report(
        &self,
        list_id: String,
        api_key: Option<String>,
    ) -> Result<Vec<DomainReport>, DomainReportError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| self.default_api_key.clone());

        let repository = contact_list_repository(&self.client, api_key, self.page_size);
        ListDomainReport::new(repository).execute(list_id).await
    }

    #[tool(
        description = "Count the members of a HubSpot contact list by email domain. Returns rows of {domain, quantity} in the order domains first appear in the list."
    )]
    async fn list_domain_report(
        &self,
        params: Parameters<ListDomainReportParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let report = self
            .domain_report(params.list_id, params.api_key)
            .await
            .map_err(report_error)?;

        let json_response = serde_json::to_string_pretty(&report).map_err(to_mcp_error)?;
        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepositoryError;
    use anyhow::anyhow;

    #[test]
    fn test_invalid_list_id_is_invalid_params() {
        let err = report_error(DomainReportError::InvalidListId("abc".to_string()));
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Invalid list id");
    }

    #[test]
    fn test_import_failure_keeps_wrapper_message() {
        let err = report_error(DomainReportError::Import(ImportListContactsError::Import {
            cause: RepositoryError::not_found("Contact list does not exist"),
        }));
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(err.message, "Not possible import contacts of list");
    }

    #[test]
    fn test_unexpected_failure_is_internal() {
        let err = report_error(DomainReportError::Import(
            ImportListContactsError::Unexpected(anyhow!("bad page")),
        ));
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.starts_with("Internal server error"));
    }
}
