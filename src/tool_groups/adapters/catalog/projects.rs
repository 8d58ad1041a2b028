//! Projects, members, transfers and deployments.

use super::OperationBundle;

pub(super) const BUNDLES: &[OperationBundle] = &[
    OperationBundle {
        label: "projects",
        operations: &[
            ("list_projects", "List all projects"),
            ("create_project", "Create a new project with the provided configuration"),
            ("delete_project", "Delete a specific project"),
            ("get_project_domain", "Get a project domain by project id or name and domain name"),
            ("update_project", "Update an existing project"),
            ("mcp_project", "Run a project operation selected by action"),
        ],
    },
    OperationBundle {
        label: "project members",
        operations: &[
            ("add_project_member", "Add a new member to a project"),
            ("list_project_members", "List all members of a project"),
            ("remove_project_member", "Remove a member from a specific project"),
            ("mcp_project_member", "Run a project member operation selected by action"),
        ],
    },
    OperationBundle {
        label: "project transfers",
        operations: &[
            ("request_project_transfer", "Request a project transfer"),
            ("accept_project_transfer", "Accept a project transfer request"),
            ("mcp_project_transfer", "Run a project transfer operation selected by action"),
        ],
    },
    OperationBundle {
        label: "deployments",
        operations: &[
            ("list_deployments", "List deployments for a project"),
            ("promote_deployment", "Promote a deployment"),
            ("get_promotion_aliases", "Get promotion aliases"),
            ("pause_project", "Pause a project"),
            ("mcp_deployment", "Run a deployment operation selected by action"),
        ],
    },
    OperationBundle {
        label: "deployment management",
        operations: &[
            ("create_deployment", "Create a new deployment"),
            ("cancel_deployment", "Cancel a deployment which is currently building"),
            ("get_deployment", "Get a deployment by ID or URL"),
            ("delete_deployment", "Delete a deployment by ID or URL"),
            ("get_deployment_events", "Get build logs and events for a deployment"),
            ("update_deployment_integration", "Update a deployment integration action status"),
            (
                "mcp_deployment_management",
                "Run a deployment management operation selected by action",
            ),
        ],
    },
    OperationBundle {
        label: "deployment files",
        operations: &[
            ("list_deployment_files", "Get the file structure of a deployment's source"),
            ("upload_deployment_files", "Upload files required for a deployment"),
            ("get_deployment_file", "Get the contents of a specific deployment file"),
            ("list_deployment", "List deployments under the authenticated user or team"),
            ("mcp_deployment_files", "Run a deployment file operation selected by action"),
        ],
    },
];
