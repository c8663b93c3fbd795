//! Access Policy
//!
//! Ordered route table consulted for every request. The first pattern that
//! matches the path decides; paths no pattern matches require an
//! authenticated identity.
//!
//! Patterns are either exact paths or `prefix/**`, which matches the prefix
//! itself and everything beneath it.

use crate::domain::entity::identity::Identity;

pub const LOGIN_PATH: &str = "/login";
pub const ERROR_PATH: &str = "/error";
pub const ADMIN_ROLE: &str = "ADMIN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Anonymous,
    Authenticated,
    Role(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRule {
    pub pattern: &'static str,
    pub access: Access,
}

const fn rule(pattern: &'static str, access: Access) -> AccessRule {
    AccessRule { pattern, access }
}

const STANDARD_RULES: &[AccessRule] = &[
    rule("/css/**", Access::Anonymous),
    rule("/js/**", Access::Anonymous),
    rule("/images/**", Access::Anonymous),
    rule("/webjars/**", Access::Anonymous),
    rule("/favicon.ico", Access::Anonymous),
    rule(LOGIN_PATH, Access::Anonymous),
    rule(ERROR_PATH, Access::Anonymous),
    rule("/user/**", Access::Role(ADMIN_ROLE)),
];

/// Outcome of checking one request against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// No identity where one is required
    RequireLogin,
    /// Identity present but missing the role
    Forbidden,
}

/// Immutable, first-match-wins route table.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    rules: &'static [AccessRule],
    fallback: Access,
}

impl RouteTable {
    pub const fn new(rules: &'static [AccessRule], fallback: Access) -> Self {
        Self { rules, fallback }
    }

    /// Static assets, `/login` and `/error` open; `/user/**` for ADMIN;
    /// everything else for any authenticated identity.
    pub const fn standard() -> Self {
        Self::new(STANDARD_RULES, Access::Authenticated)
    }

    pub fn access_for(&self, path: &str) -> Access {
        self.rules
            .iter()
            .find(|rule| pattern_matches(rule.pattern, path))
            .map(|rule| rule.access)
            .unwrap_or(self.fallback)
    }

    pub fn decide(&self, path: &str, identity: Option<&Identity>) -> Decision {
        match (self.access_for(path), identity) {
            (Access::Anonymous, _) => Decision::Allow,
            (_, None) => Decision::RequireLogin,
            (Access::Authenticated, Some(_)) => Decision::Allow,
            (Access::Role(role), Some(identity)) if identity.has_role(role) => Decision::Allow,
            (Access::Role(_), Some(_)) => Decision::Forbidden,
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    match pattern.strip_suffix("/**") {
        Some(prefix) => {
            path == prefix
                || path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
        None => path == pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matching() {
        assert!(pattern_matches("/user/**", "/user"));
        assert!(pattern_matches("/user/**", "/user/"));
        assert!(pattern_matches("/user/**", "/user/update/3"));
        assert!(!pattern_matches("/user/**", "/users"));
        assert!(!pattern_matches("/user/**", "/username"));
        assert!(pattern_matches("/login", "/login"));
        assert!(!pattern_matches("/login", "/login/extra"));
    }
}
