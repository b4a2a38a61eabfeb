use federation_admin::models::{ConnectorType, Session, Vdb};
use proptest::prelude::*;

/// Strategy for a single identifier segment (no delimiter, no wildcard)
pub fn segment_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]{1,8}"
}

/// Strategy for short names that share prefixes often
pub fn clustered_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Parts".to_string()),
        Just("PartsArchive".to_string()),
        Just("Par".to_string()),
        Just("Orders".to_string()),
        "[A-Za-z]{1,6}",
    ]
}

/// Strategy for generating VDB registries, name+version unique
pub fn vdb_registry_strategy() -> impl Strategy<Value = Vec<Vdb>> {
    prop::collection::btree_set((clustered_name_strategy(), 1u32..4), 0..12).prop_map(|keys| {
        keys.into_iter()
            .map(|(name, version)| Vdb::new(name, version.to_string()))
            .collect()
    })
}

/// Strategy for generating connector type registries, name unique
pub fn connector_type_registry_strategy() -> impl Strategy<Value = Vec<ConnectorType>> {
    prop::collection::btree_set(clustered_name_strategy(), 0..8)
        .prop_map(|names| names.into_iter().map(ConnectorType::new).collect())
}

/// Strategy for generating session registries, id unique
pub fn session_registry_strategy() -> impl Strategy<Value = Vec<Session>> {
    prop::collection::btree_set(0u64..120, 0..10).prop_map(|ids| {
        ids.into_iter()
            .map(|id| Session::new(id, "user", "Parts", "1"))
            .collect()
    })
}

/// Strategy for identifiers with a wildcard somewhere other than the end
pub fn misplaced_wildcard_strategy() -> impl Strategy<Value = String> {
    (segment_strategy(), segment_strategy()).prop_map(|(head, tail)| format!("{head}*{tail}"))
}
