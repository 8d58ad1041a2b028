//! Domains, registrar operations, DNS, certificates and aliases.

use super::OperationBundle;

pub(super) const BUNDLES: &[OperationBundle] = &[
    OperationBundle {
        label: "project domains",
        operations: &[
            ("add_domain", "Add a domain to a project"),
            ("remove_domain", "Remove a domain from a project"),
            ("get_domain", "Get domain information"),
            ("list_domains", "List all domains for a project"),
            ("mcp_domains", "Run a project domain operation selected by action"),
        ],
    },
    OperationBundle {
        label: "domain registry",
        operations: &[
            ("domain_check", "Check if a domain name is available for purchase"),
            ("domain_price", "Check the price to purchase a domain"),
            ("domain_config", "Get a domain's configuration"),
            ("domain_registry", "Get domain transfer info"),
            ("domain_get", "Get information for a single domain"),
            ("domain_list", "List all domains"),
            ("domain_buy", "Purchase a domain"),
            ("domain_register", "Register or transfer in a domain"),
            ("domain_remove", "Remove a domain"),
            ("domain_update", "Update or move an apex domain"),
            ("mcp_registry", "Run a domain registry operation selected by action"),
        ],
    },
    OperationBundle {
        label: "dns",
        operations: &[
            ("create_dns_record", "Create a DNS record for a domain"),
            ("delete_dns_record", "Remove an existing DNS record from a domain"),
            ("list_dns_records", "List the DNS records of a domain"),
            ("update_dns_record", "Update an existing DNS record"),
            ("mcp_dns", "Run a DNS operation selected by action"),
        ],
    },
    OperationBundle {
        label: "certificates",
        operations: &[
            ("get_cert", "Get a certificate by ID"),
            ("issue_cert", "Issue a new certificate"),
            ("remove_cert", "Remove a certificate"),
            ("upload_cert", "Upload a certificate"),
            ("mcp_certificate", "Run a certificate operation selected by action"),
        ],
    },
    OperationBundle {
        label: "aliases",
        operations: &[
            ("assign_alias", "Create a new alias for a deployment"),
            ("delete_alias", "Delete an alias with the specified ID"),
            ("get_alias", "Retrieve an alias by host name or alias ID"),
            ("list_aliases", "List aliases for the authenticated user or team"),
            ("list_deployment_aliases", "List all aliases of a deployment"),
            ("mcp_alias", "Run an alias operation selected by action"),
        ],
    },
];
