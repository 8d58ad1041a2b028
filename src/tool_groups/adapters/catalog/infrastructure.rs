//! Edge configs, secrets, environments, webhooks, log drains and vitals.

use super::OperationBundle;

pub(super) const BUNDLES: &[OperationBundle] = &[
    OperationBundle {
        label: "edge configs",
        operations: &[
            ("create_edge_config", "Create a new Edge Config"),
            ("create_edge_config_token", "Create a new Edge Config token"),
            ("list_edge_configs", "List all Edge Configs"),
            ("get_edge_config", "Get an Edge Config"),
            ("update_edge_config", "Update an Edge Config"),
            ("delete_edge_config", "Delete an Edge Config"),
            ("list_edge_config_items", "List Edge Config items"),
            ("get_edge_config_item", "Get an Edge Config item"),
            ("update_edge_config_items", "Update Edge Config items"),
            ("get_edge_config_schema", "Get an Edge Config schema"),
            ("update_edge_config_schema", "Update an Edge Config schema"),
            ("delete_edge_config_schema", "Delete an Edge Config schema"),
            ("list_edge_config_tokens", "List Edge Config tokens"),
            ("get_edge_config_token", "Get an Edge Config token"),
            ("delete_edge_config_tokens", "Delete Edge Config tokens"),
            ("list_edge_config_backups", "List Edge Config backups"),
            ("get_edge_config_backup", "Get an Edge Config backup"),
            ("mcp_edge_config", "Run an Edge Config operation selected by action"),
        ],
    },
    OperationBundle {
        label: "secrets",
        operations: &[
            ("create_secret", "Create a new secret"),
            ("update_secret_name", "Change the name of a secret"),
            ("delete_secret", "Delete a secret"),
            ("get_secret", "Get information for a specific secret"),
            ("list_secrets", "List all secrets"),
            ("mcp_secret", "Run a secret operation selected by action"),
        ],
    },
    OperationBundle {
        label: "environment variables",
        operations: &[
            ("add_env", "Add environment variables to a project"),
            ("update_env", "Update an environment variable"),
            ("delete_env", "Delete an environment variable"),
            ("get_env", "Get an environment variable"),
            ("list_env", "List all environment variables"),
            ("mcp_env", "Run an environment variable operation selected by action"),
        ],
    },
    OperationBundle {
        label: "custom environments",
        operations: &[
            ("create_environment", "Create a custom environment for a project"),
            ("delete_environment", "Remove a custom environment from a project"),
            ("get_environment", "Retrieve a custom environment"),
            ("list_environments", "List custom environments for a project"),
            ("update_environment", "Update a custom environment"),
            ("mcp_environment", "Run a custom environment operation selected by action"),
        ],
    },
    OperationBundle {
        label: "webhooks",
        operations: &[
            ("create_webhook", "Create a webhook"),
            ("delete_webhook", "Delete a webhook"),
            ("list_webhooks", "Get a list of webhooks"),
            ("get_webhook", "Get a webhook"),
            ("mcp_webhook", "Run a webhook operation selected by action"),
        ],
    },
    OperationBundle {
        label: "log drains",
        operations: &[
            ("logdrain_create", "Create a configurable log drain"),
            ("logdrain_createIntegration", "Create an integration log drain"),
            ("logdrain_delete", "Delete a configurable log drain"),
            ("logdrain_deleteIntegration", "Delete an integration log drain"),
            ("logdrain_get", "Retrieve a configurable log drain"),
            ("logdrain_list", "Retrieve a list of all log drains"),
            ("logdrain_listIntegration", "Retrieve a list of integration log drains"),
            ("mcp_logdrain", "Run a log drain operation selected by action"),
        ],
    },
    OperationBundle {
        label: "speed insights",
        operations: &[
            ("send_web_vitals", "Send web vitals data to Speed Insights"),
            ("mcp_speed_insights", "Run a Speed Insights operation selected by action"),
        ],
    },
];
