//! Integrations, marketplace and remote cache artifacts.

use super::OperationBundle;

pub(super) const BUNDLES: &[OperationBundle] = &[
    OperationBundle {
        label: "integrations",
        operations: &[
            ("int_delete", "Delete an integration configuration"),
            ("int_list", "Get configurations for the authenticated user or team"),
            ("int_gitns", "List git namespaces by provider"),
            ("int_searchRepo", "List git repositories linked to a namespace"),
            ("int_get", "Retrieve an integration configuration"),
            ("int_updateAction", "Update a deployment integration action"),
            ("mcp_integration", "Run an integration operation selected by action"),
        ],
    },
    OperationBundle {
        label: "marketplace",
        operations: &[
            ("create_marketplace_event", "Create a marketplace event"),
            ("get_marketplace_account", "Get marketplace account information"),
            ("get_marketplace_invoice", "Get marketplace invoice details"),
            ("get_marketplace_member", "Get marketplace member information"),
            ("import_marketplace_resource", "Import a marketplace resource"),
            ("submit_marketplace_billing", "Submit marketplace billing data"),
            ("submit_marketplace_invoice", "Submit a marketplace invoice"),
            ("update_marketplace_secrets", "Update marketplace resource secrets"),
            ("marketplace_sso_token_exchange", "Exchange an OAuth code for an OIDC token"),
            ("submit_marketplace_balance", "Submit prepayment balances"),
            ("marketplace_invoice_action", "Perform invoice actions such as refunds"),
            ("mcp_marketplace", "Run a marketplace operation selected by action"),
        ],
    },
    OperationBundle {
        label: "artifacts",
        operations: &[
            ("check_artifact", "Check that a cache artifact with the given hash exists"),
            ("download_artifact", "Download a cache artifact by hash"),
            ("get_artifact_status", "Check the status of remote caching"),
            ("query_artifacts", "Query information about an array of artifacts"),
            ("record_artifact_events", "Record cache usage events"),
            ("upload_artifact", "Upload a cache artifact by hash"),
            ("mcp_artifact", "Run an artifact operation selected by action"),
        ],
    },
];
