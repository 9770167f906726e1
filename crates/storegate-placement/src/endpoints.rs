//! Placement endpoint resolution.
//!
//! The daemon serves admission requests for pods belonging to arbitrary
//! storage clusters, and each cluster runs its own placement service. The
//! resolver maps the owning cluster reference carried by a request to that
//! cluster's placement URL: by naming convention for multi-cluster
//! deployments, or a fixed override when there is only one cluster.

/// Default template locating a cluster's placement service by convention.
pub const DEFAULT_ENDPOINT_TEMPLATE: &str = "http://{cluster}-placement.{namespace}:2379";

/// Maps an owning cluster reference to its placement-service URL.
#[derive(Debug, Clone)]
pub enum EndpointResolver {
    /// Always use one fixed URL.
    Fixed(String),
    /// Substitute `{cluster}` and `{namespace}` into a template.
    Template(String),
}

impl EndpointResolver {
    /// Resolver that always yields `url`.
    pub fn fixed(url: impl Into<String>) -> Self {
        EndpointResolver::Fixed(url.into())
    }

    /// Resolver substituting cluster and namespace into `template`.
    pub fn from_template(template: impl Into<String>) -> Self {
        EndpointResolver::Template(template.into())
    }

    /// Placement URL for the given cluster.
    pub fn resolve(&self, cluster: &str, namespace: &str) -> String {
        match self {
            EndpointResolver::Fixed(url) => url.clone(),
            EndpointResolver::Template(template) => template
                .replace("{cluster}", cluster)
                .replace("{namespace}", namespace),
        }
    }
}
