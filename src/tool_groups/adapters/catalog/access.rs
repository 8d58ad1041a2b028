//! Access groups, tokens, users, teams and firewall settings.

use super::OperationBundle;

pub(super) const BUNDLES: &[OperationBundle] = &[
    OperationBundle {
        label: "access groups",
        operations: &[
            ("create_access_group_project", "Create an access group project"),
            ("create_access_group", "Create a new access group"),
            ("delete_access_group_project", "Delete an access group project"),
            ("delete_access_group", "Delete an access group"),
            ("list_access_groups", "List access groups for a team, project or member"),
            ("list_access_group_members", "List members of an access group"),
            ("list_access_group_projects", "List projects of an access group"),
            ("get_access_group", "Read an access group"),
            ("get_access_group_project", "Read an access group project"),
            ("update_access_group", "Update an access group"),
            ("update_access_group_project", "Update an access group project"),
            ("mcp_access_group", "Run an access group operation selected by action"),
        ],
    },
    OperationBundle {
        label: "authentication",
        operations: &[
            ("create_auth_token", "Create a new authentication token for the current user"),
            ("delete_auth_token", "Invalidate an authentication token"),
            ("get_auth_token", "Retrieve metadata about an authentication token"),
            ("list_auth_tokens", "List the current user's authentication tokens"),
            ("sso_token_exchange", "Exchange an OAuth code for an OIDC token during SSO"),
            ("mcp_auth", "Run an authentication operation selected by action"),
        ],
    },
    OperationBundle {
        label: "users",
        operations: &[
            ("delete_user", "Delete the authenticated user"),
            ("get_user", "Get the authenticated user"),
            ("list_user_events", "List events generated by the user"),
            ("mcp_user", "Run a user operation selected by action"),
        ],
    },
    OperationBundle {
        label: "teams",
        operations: &[
            ("create_team", "Create a new team under your account"),
            ("delete_team", "Delete a team under your account"),
            ("get_team", "Get information for a specific team"),
            ("list_teams", "List all teams the authenticated user is a member of"),
            ("list_team_members", "Get a list of team members"),
            ("invite_team_member", "Invite a user to join a team"),
            ("remove_team_member", "Remove a member from a team"),
            ("update_team_member", "Update a team member's role or status"),
            ("update_team", "Update team information"),
            ("mcp_team", "Run a team operation selected by action"),
        ],
    },
    OperationBundle {
        label: "firewall and security",
        operations: &[
            ("create_firewall_bypass", "Create new system bypass rules"),
            ("delete_firewall_bypass", "Remove system bypass rules"),
            ("get_firewall_bypass", "Retrieve the system bypass rules"),
            ("get_attack_status", "Retrieve active attack data within the last 24h window"),
            ("update_attack_mode", "Update the Attack Challenge mode settings"),
            ("get_firewall_config", "Retrieve the firewall configuration"),
            ("update_firewall_config", "Update the firewall configuration"),
            ("put_firewall_config", "Set the complete firewall configuration"),
            ("mcp_security", "Run a security operation selected by action"),
        ],
    },
];
