//! Keyword classifier mapping free-text queries to tool group names.
//!
//! Classification runs in two phases over an ordered rule table:
//!
//! 1. Each token of the normalized query is checked, left to right, against
//!    the keyword rules in table order. A rule matches when its keyword is a
//!    substring of the token.
//! 2. If no token matched, the fallback rules are evaluated in order against
//!    the whole normalized query; a rule matches when the query contains any
//!    of its substrings.
//!
//! Keywords overlap across groups, so table order is the tie-break policy.

/// Associates a keyword with the group it suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    /// Substring looked for inside each query token.
    pub keyword: &'static str,
    /// Group suggested when the keyword matches.
    pub group: &'static str,
}

/// Whole-query fallback for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackRule {
    /// Group suggested when any substring matches.
    pub group: &'static str,
    /// Substrings looked for in the whole normalized query.
    pub substrings: &'static [&'static str],
}

impl FallbackRule {
    fn matches(&self, normalized_query: &str) -> bool {
        self.substrings
            .iter()
            .any(|substring| normalized_query.contains(substring))
    }
}

/// Ordered, immutable classifier configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierRules {
    /// Token-level rules, evaluated in order.
    pub keywords: &'static [KeywordRule],
    /// Whole-query rules, evaluated in order when no keyword matched.
    pub fallbacks: &'static [FallbackRule],
}

const fn rule(keyword: &'static str, group: &'static str) -> KeywordRule {
    KeywordRule { keyword, group }
}

const DEFAULT_KEYWORDS: &[KeywordRule] = &[
    rule("edge_config", "infrastructure"),
    rule("secret", "infrastructure"),
    rule("env", "infrastructure"),
    rule("webhook", "infrastructure"),
    rule("logdrain", "infrastructure"),
    rule("speed_insights", "infrastructure"),
    rule("firewall", "infrastructure"),
    rule("user", "access"),
    rule("team", "access"),
    rule("auth", "access"),
    rule("access_group", "access"),
    rule("security", "access"),
    rule("project", "projects"),
    rule("list_projects", "projects"),
    rule("projects", "projects"),
    rule("deployment", "projects"),
    rule("member", "projects"),
    rule("transfer", "projects"),
    rule("show_projects", "projects"),
    rule("get_projects", "projects"),
    rule("view_projects", "projects"),
    rule("display_projects", "projects"),
    rule("fetch_projects", "projects"),
    rule("retrieve_projects", "projects"),
    rule("domain", "domains"),
    rule("dns", "domains"),
    rule("cert", "domains"),
    rule("alias", "domains"),
    rule("integration", "integrations"),
    rule("marketplace", "integrations"),
    rule("artifact", "integrations"),
];

const DEFAULT_FALLBACKS: &[FallbackRule] = &[
    FallbackRule {
        group: "infrastructure",
        substrings: &[
            "edge",
            "secret",
            "env",
            "environment",
            "webhook",
            "log",
            "speed",
            "vitals",
        ],
    },
    FallbackRule {
        group: "access",
        substrings: &["user", "team", "auth", "access", "firewall", "security"],
    },
    FallbackRule {
        group: "projects",
        substrings: &[
            "project",
            "projects",
            "list project",
            "list projects",
            "show project",
            "show projects",
            "get project",
            "get projects",
            "view project",
            "view projects",
            "display project",
            "display projects",
            "fetch project",
            "fetch projects",
            "retrieve project",
            "retrieve projects",
            "deploy",
            "member",
            "transfer",
            "file",
        ],
    },
    FallbackRule {
        group: "domains",
        substrings: &["domain", "dns", "cert", "ssl", "tls", "alias"],
    },
    FallbackRule {
        group: "integrations",
        substrings: &["integration", "marketplace", "artifact", "int_"],
    },
];

/// Rule table for the built-in tool groups.
pub const DEFAULT_CLASSIFIER_RULES: ClassifierRules = ClassifierRules {
    keywords: DEFAULT_KEYWORDS,
    fallbacks: DEFAULT_FALLBACKS,
};

/// Pure classifier over a static rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryClassifier {
    rules: ClassifierRules,
}

impl Default for QueryClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_CLASSIFIER_RULES)
    }
}

impl QueryClassifier {
    /// Creates a classifier over the given rules.
    #[must_use]
    pub const fn new(rules: ClassifierRules) -> Self {
        Self { rules }
    }

    /// Returns the rule table.
    #[must_use]
    pub const fn rules(&self) -> &ClassifierRules {
        &self.rules
    }

    /// Returns the best-guess group for `query`, or `None`.
    #[must_use]
    pub fn classify(&self, query: &str) -> Option<&'static str> {
        let normalized = query.to_lowercase();
        self.match_tokens(&normalized)
            .or_else(|| self.match_fallbacks(&normalized))
    }

    fn match_tokens(&self, normalized_query: &str) -> Option<&'static str> {
        tokenize(normalized_query).find_map(|token| {
            self.rules
                .keywords
                .iter()
                .find(|candidate| token.contains(candidate.keyword))
                .map(|candidate| candidate.group)
        })
    }

    fn match_fallbacks(&self, normalized_query: &str) -> Option<&'static str> {
        self.rules
            .fallbacks
            .iter()
            .find(|fallback| fallback.matches(normalized_query))
            .map(|fallback| fallback.group)
    }
}

/// Splits a normalized query on runs of whitespace, hyphens and underscores.
fn tokenize(normalized_query: &str) -> impl Iterator<Item = &str> {
    normalized_query
        .split(|character: char| character.is_whitespace() || matches!(character, '-' | '_'))
        .filter(|token| !token.is_empty())
}
