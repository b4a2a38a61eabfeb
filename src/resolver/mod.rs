//! # Resolver
//!
//! Resolves an identifier pattern against the live registry of one object
//! kind.
//!
//! ## Resolution Flow
//!
//! ```text
//! identifier ──► classify ──► validate shape ──► fetch snapshot ──► filter
//!   "Parts|*"     Pattern      (KeyShape of K)    (registry of K)    (order kept)
//! ```
//!
//! The registry fetch is the only point where state is read. It runs under a
//! timeout; a collaborator that fails or does not answer in time surfaces as
//! `SystemError`. Results keep the registry's enumeration order and are never
//! re-sorted.

use crate::constants::DEFAULT_REGISTRY_TIMEOUT_MS;
use crate::error::{AdminError, AdminResult};
use crate::identifier::{classify, Pattern};
use crate::models::{AdminObject, ConnectorBinding, ObjectKind, Vdb};
use crate::registry::{RegistryAccess, RegistrySet};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, trace, warn};

/// Check a classified pattern against the key shape of `kind`.
///
/// `MatchAll` fits every kind. Otherwise the pattern may not have more
/// segments than the key, and an exact pattern must name the whole key
/// unless the kind allows partial exact matches.
pub fn validate_shape(pattern: &Pattern, kind: ObjectKind, identifier: &str) -> AdminResult<()> {
    let shape = kind.key_shape();
    let Some(given) = pattern.segment_count() else {
        return Ok(());
    };

    if given > shape.segments {
        return Err(AdminError::invalid(
            identifier,
            kind,
            format!(
                "{given} segments given, {kind} keys have {}",
                shape.segments
            ),
        ));
    }

    if let Pattern::Exact(_) = pattern {
        if given < shape.segments && !shape.partial_exact {
            return Err(AdminError::invalid(
                identifier,
                kind,
                format!(
                    "exact match needs all {} segments of a {kind} key, {given} given",
                    shape.segments
                ),
            ));
        }
    }

    Ok(())
}

/// Registry-backed identifier resolution.
///
/// Holds no mutable state of its own; every call reads one fresh snapshot.
#[derive(Debug, Clone)]
pub struct Resolver {
    registries: Arc<RegistrySet>,
    fetch_timeout: Duration,
}

impl Resolver {
    #[must_use]
    pub fn new(registries: Arc<RegistrySet>) -> Self {
        Self {
            registries,
            fetch_timeout: Duration::from_millis(DEFAULT_REGISTRY_TIMEOUT_MS),
        }
    }

    #[must_use]
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub fn registries(&self) -> &RegistrySet {
        &self.registries
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// Resolve `identifier` against the registry for `T`.
    ///
    /// Returns every live object of kind `T::KIND` whose key matches, in
    /// registry order. No match is an empty vector, not an error.
    #[instrument(skip(self), fields(kind = %T::KIND))]
    pub async fn resolve<T: RegistryAccess>(&self, identifier: &str) -> AdminResult<Vec<T>> {
        let pattern = classify(identifier)?;
        validate_shape(&pattern, T::KIND, identifier)?;
        self.resolve_pattern(&pattern).await
    }

    /// Filter a fresh snapshot of `T` by an already validated pattern.
    pub(crate) async fn resolve_pattern<T: RegistryAccess>(
        &self,
        pattern: &Pattern,
    ) -> AdminResult<Vec<T>> {
        let candidates = self.fetch::<T>().await?;
        let candidate_count = candidates.len();

        let matched: Vec<T> = match pattern {
            Pattern::MatchAll => candidates,
            _ => candidates
                .into_iter()
                .filter(|candidate| pattern.matches(&candidate.key()))
                .collect(),
        };

        debug!(
            kind = %T::KIND,
            pattern = %pattern,
            candidates = candidate_count,
            matched = matched.len(),
            "Resolved identifier pattern"
        );
        Ok(matched)
    }

    /// Take one snapshot of the registry for `T`.
    async fn fetch<T: RegistryAccess>(&self) -> AdminResult<Vec<T>> {
        let registry = self.registries.registry_for::<T>()?;
        trace!(
            kind = %T::KIND,
            registry = registry.registry_name(),
            "Fetching registry snapshot"
        );

        match tokio::time::timeout(self.fetch_timeout, registry.list_all()).await {
            Ok(Ok(snapshot)) => Ok(snapshot),
            Ok(Err(error)) => {
                warn!(
                    kind = %T::KIND,
                    registry = registry.registry_name(),
                    error = %error,
                    "Registry enumeration failed"
                );
                Err(error)
            }
            Err(_) => {
                let timeout_ms = u64::try_from(self.fetch_timeout.as_millis()).unwrap_or(u64::MAX);
                warn!(
                    kind = %T::KIND,
                    registry = registry.registry_name(),
                    timeout_ms,
                    "Registry enumeration timed out"
                );
                Err(AdminError::system(format!(
                    "{} registry '{}' did not answer within {timeout_ms}ms",
                    T::KIND,
                    registry.registry_name(),
                )))
            }
        }
    }

    /// Connector bindings declared by the VDBs matching `vdb_identifier`.
    ///
    /// Union of each resolved VDB's binding references, de-duplicated by
    /// binding name in first-seen order. A reference to a binding that is not
    /// live any more is skipped.
    #[instrument(skip(self))]
    pub async fn resolve_connector_bindings_in_vdb(
        &self,
        vdb_identifier: &str,
    ) -> AdminResult<Vec<ConnectorBinding>> {
        let vdbs: Vec<Vdb> = self.resolve(vdb_identifier).await?;
        if vdbs.is_empty() {
            return Ok(Vec::new());
        }

        let live_bindings = self.fetch::<ConnectorBinding>().await?;
        let by_name: HashMap<&str, &ConnectorBinding> = live_bindings
            .iter()
            .map(|binding| (binding.name.as_str(), binding))
            .collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut bindings = Vec::new();
        for vdb in &vdbs {
            for reference in &vdb.connector_bindings {
                if !seen.insert(reference.as_str()) {
                    continue;
                }
                match by_name.get(reference.as_str()) {
                    Some(binding) => bindings.push((*binding).clone()),
                    None => trace!(
                        vdb = %vdb.identifier(),
                        binding = %reference,
                        "Declared binding is not live, skipping"
                    ),
                }
            }
        }

        debug!(
            vdbs = vdbs.len(),
            bindings = bindings.len(),
            "Resolved connector bindings in VDBs"
        );
        Ok(bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdminErrorKind;
    use crate::models::{ConnectorType, Request, Session, SourceRequest};
    use crate::registry::{InMemoryRegistry, ObjectRegistry};
    use async_trait::async_trait;

    fn resolver() -> Resolver {
        let registries = RegistrySet::new()
            .with_vdbs(Arc::new(InMemoryRegistry::with_objects(
                "vdbs",
                vec![
                    Vdb::new("Parts", "1").with_binding("oracle").with_binding("text"),
                    Vdb::new("Parts", "2").with_binding("sqlserver"),
                    Vdb::new("PartsArchive", "1").with_binding("oracle"),
                    Vdb::new("Orders", "1").with_binding("text").with_binding("gone"),
                ],
            )))
            .with_connector_bindings(Arc::new(InMemoryRegistry::with_objects(
                "bindings",
                vec![
                    ConnectorBinding::new("text", "Text File"),
                    ConnectorBinding::new("oracle", "JDBC"),
                    ConnectorBinding::new("sqlserver", "JDBC"),
                ],
            )))
            .with_connector_types(Arc::new(InMemoryRegistry::with_objects(
                "types",
                vec![ConnectorType::new("JDBC"), ConnectorType::new("Text File")],
            )))
            .with_sessions(Arc::new(InMemoryRegistry::with_objects(
                "sessions",
                vec![
                    Session::new(5, "admin", "Parts", "1"),
                    Session::new(51, "etl", "Orders", "1"),
                    Session::new(6, "report", "Parts", "2"),
                ],
            )))
            .with_requests(Arc::new(InMemoryRegistry::with_objects(
                "requests",
                vec![
                    Request::new(5, 1, "SELECT * FROM parts"),
                    Request::new(5, 2, "SELECT * FROM suppliers"),
                    Request::new(51, 1, "SELECT * FROM orders"),
                ],
            )))
            .with_source_requests(Arc::new(InMemoryRegistry::with_objects(
                "source_requests",
                vec![
                    SourceRequest::new(5, 1, 0, "oracle", "SELECT a FROM t"),
                    SourceRequest::new(5, 1, 1, "text", "SELECT b FROM u"),
                    SourceRequest::new(5, 2, 0, "oracle", "SELECT c FROM v"),
                ],
            )));
        Resolver::new(Arc::new(registries))
    }

    fn identifiers<T: AdminObject>(objects: &[T]) -> Vec<String> {
        objects.iter().map(AdminObject::identifier).collect()
    }

    #[test]
    fn test_validate_shape_table() {
        let check = |raw: &str, kind| validate_shape(&classify(raw).unwrap(), kind, raw);

        assert!(check("*", ObjectKind::SourceRequest).is_ok());
        assert!(check("5", ObjectKind::Session).is_ok());
        assert!(check("Parts", ObjectKind::Vdb).is_ok());
        assert!(check("5*", ObjectKind::Request).is_ok());
        assert!(check("5|*", ObjectKind::Request).is_ok());
        assert!(check("5|1|*", ObjectKind::SourceRequest).is_ok());

        for (raw, kind) in [
            ("5", ObjectKind::Request),
            ("5|1", ObjectKind::SourceRequest),
            ("a|b", ObjectKind::ConnectorType),
            ("a|b|c", ObjectKind::ConnectorType),
            ("Parts|1|x", ObjectKind::Vdb),
            ("5|*", ObjectKind::Session),
        ] {
            let error = check(raw, kind).unwrap_err();
            assert_eq!(error.kind(), AdminErrorKind::InvalidIdentifier, "{raw} {kind}");
        }
    }

    #[tokio::test]
    async fn test_match_all_returns_registry_order() {
        let sessions: Vec<Session> = resolver().resolve("*").await.unwrap();
        assert_eq!(identifiers(&sessions), vec!["5", "51", "6"]);
    }

    #[tokio::test]
    async fn test_vdb_name_matches_every_version() {
        let resolver = resolver();

        let vdbs: Vec<Vdb> = resolver.resolve("Parts").await.unwrap();
        assert_eq!(identifiers(&vdbs), vec!["Parts|1", "Parts|2"]);

        let vdbs: Vec<Vdb> = resolver.resolve("Parts|*").await.unwrap();
        assert_eq!(identifiers(&vdbs), vec!["Parts|1", "Parts|2"]);

        let vdbs: Vec<Vdb> = resolver.resolve("Parts*").await.unwrap();
        assert_eq!(identifiers(&vdbs), vec!["Parts|1", "Parts|2", "PartsArchive|1"]);

        let vdbs: Vec<Vdb> = resolver.resolve("Parts|2").await.unwrap();
        assert_eq!(identifiers(&vdbs), vec!["Parts|2"]);
    }

    #[tokio::test]
    async fn test_request_shapes() {
        let resolver = resolver();

        let error = resolver.resolve::<Request>("5").await.unwrap_err();
        assert_eq!(error.kind(), AdminErrorKind::InvalidIdentifier);

        let requests: Vec<Request> = resolver.resolve("5|*").await.unwrap();
        assert_eq!(identifiers(&requests), vec!["5|1", "5|2"]);

        let requests: Vec<Request> = resolver.resolve("5*").await.unwrap();
        assert_eq!(identifiers(&requests), vec!["5|1", "5|2", "51|1"]);

        let requests: Vec<Request> = resolver.resolve("51|1").await.unwrap();
        assert_eq!(identifiers(&requests), vec!["51|1"]);

        let sessions: Vec<Session> = resolver.resolve("5").await.unwrap();
        assert_eq!(identifiers(&sessions), vec!["5"]);
    }

    #[tokio::test]
    async fn test_source_request_scoped_prefix() {
        let sources: Vec<SourceRequest> = resolver().resolve("5|1|*").await.unwrap();
        assert_eq!(identifiers(&sources), vec!["5|1|0", "5|1|1"]);
    }

    #[tokio::test]
    async fn test_no_match_is_empty_not_error() {
        let types: Vec<ConnectorType> = resolver().resolve("LDAP").await.unwrap();
        assert!(types.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_identifier_surfaces() {
        let error = resolver().resolve::<Vdb>("Parts|").await.unwrap_err();
        assert_eq!(error.kind(), AdminErrorKind::MalformedIdentifier);
    }

    #[tokio::test]
    async fn test_missing_registry_is_system_error() {
        let error = resolver()
            .resolve::<crate::models::Cache>("*")
            .await
            .unwrap_err();
        assert_eq!(error.kind(), AdminErrorKind::SystemError);
    }

    #[tokio::test]
    async fn test_bindings_in_single_vdb_version() {
        let bindings = resolver()
            .resolve_connector_bindings_in_vdb("Parts|1")
            .await
            .unwrap();
        assert_eq!(identifiers(&bindings), vec!["oracle", "text"]);
    }

    #[tokio::test]
    async fn test_bindings_in_vdbs_deduplicated_first_seen() {
        let bindings = resolver()
            .resolve_connector_bindings_in_vdb("*")
            .await
            .unwrap();
        assert_eq!(identifiers(&bindings), vec!["oracle", "text", "sqlserver"]);
    }

    #[tokio::test]
    async fn test_bindings_in_vdb_skips_vanished_binding() {
        let bindings = resolver()
            .resolve_connector_bindings_in_vdb("Orders")
            .await
            .unwrap();
        assert_eq!(identifiers(&bindings), vec!["text"]);
    }

    #[derive(Debug)]
    struct StalledRegistry;

    #[async_trait]
    impl ObjectRegistry<Session> for StalledRegistry {
        async fn list_all(&self) -> AdminResult<Vec<Session>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Vec::new())
        }

        fn registry_name(&self) -> &str {
            "stalled"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_registry_times_out_as_system_error() {
        let registries = RegistrySet::new().with_sessions(Arc::new(StalledRegistry));
        let resolver = Resolver::new(Arc::new(registries))
            .with_fetch_timeout(Duration::from_millis(100));

        let error = resolver.resolve::<Session>("*").await.unwrap_err();
        assert_eq!(error.kind(), AdminErrorKind::SystemError);
        assert!(error.to_string().contains("stalled"));
    }
}
