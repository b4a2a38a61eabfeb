//! A small federation with every registry populated.

use federation_admin::catalog::{AdminClass, InMemoryDescriptorSource};
use federation_admin::config::AdminConfig;
use federation_admin::constants::DeploymentMode;
use federation_admin::models::{
    BindingState, Cache, ConnectorBinding, ConnectorType, ExtensionModule, PropertyDefinition,
    PropertyValueType, QueueWorkerPool, Request, Session, SourceRequest, SystemObject, Vdb,
    VdbStatus,
};
use federation_admin::registry::{InMemoryRegistry, RegistrySet};
use federation_admin::RegistryMonitoringAdmin;
use std::sync::Arc;

/// Handles to the registries behind a fixture admin, for mutating between calls.
pub struct Federation {
    pub admin: RegistryMonitoringAdmin,
    pub vdbs: Arc<InMemoryRegistry<Vdb>>,
    pub bindings: Arc<InMemoryRegistry<ConnectorBinding>>,
    pub sessions: Arc<InMemoryRegistry<Session>>,
}

pub fn vdbs() -> Vec<Vdb> {
    vec![
        Vdb::new("myvdb", "1")
            .with_binding("oracle")
            .with_binding("text")
            .with_model("Parts"),
        Vdb::new("myvdb", "2")
            .with_binding("sqlserver")
            .with_binding("oracle"),
        Vdb::new("myvdbArchive", "1").with_binding("ldap"),
        Vdb::new("Orders", "1")
            .with_status(VdbStatus::Inactive)
            .with_binding("text"),
    ]
}

pub fn bindings() -> Vec<ConnectorBinding> {
    vec![
        ConnectorBinding::new("oracle", "JDBC")
            .with_property("URL", "jdbc:oracle:thin:@orahost:1521:ORCL")
            .with_property("User", "parts"),
        ConnectorBinding::new("text", "Text File"),
        ConnectorBinding::new("sqlserver", "JDBC").with_state(BindingState::Closed),
        ConnectorBinding::new("ldap", "LDAP"),
    ]
}

pub fn sessions() -> Vec<Session> {
    vec![
        Session::new(5, "admin", "myvdb", "1"),
        Session::new(51, "etl", "Orders", "1"),
        Session::new(6, "report", "myvdb", "2"),
    ]
}

pub fn requests() -> Vec<Request> {
    vec![
        Request::new(5, 0, "SELECT * FROM Parts"),
        Request::new(5, 1, "SELECT * FROM Suppliers"),
        Request::new(51, 0, "SELECT * FROM Orders"),
        Request::new(6, 0, "SELECT 1"),
    ]
}

pub fn source_requests() -> Vec<SourceRequest> {
    vec![
        SourceRequest::new(5, 1, 0, "oracle", "SELECT name FROM suppliers"),
        SourceRequest::new(5, 1, 1, "text", "read suppliers.txt"),
        SourceRequest::new(51, 0, 0, "text", "read orders.txt"),
    ]
}

pub fn descriptors() -> InMemoryDescriptorSource {
    InMemoryDescriptorSource::new()
        .with_definitions(
            AdminClass::ConnectorBinding,
            vec![
                PropertyDefinition::new("URL", "Connection URL").required(),
                PropertyDefinition::new("User", "User Name").with_default("guest"),
                PropertyDefinition::new("Password", "Password").masked(),
                PropertyDefinition::new("MaxConnections", "Max Connections")
                    .with_value_type(PropertyValueType::Integer)
                    .with_default("20"),
            ],
        )
        .with_definitions(
            AdminClass::SystemObject,
            vec![PropertyDefinition::new("LogLevel", "Log Level")
                .with_allowed_values(["DEBUG", "INFO", "WARN"])
                .with_default("INFO")],
        )
        .with_definitions(
            AdminClass::Dqp,
            vec![PropertyDefinition::new("MaxThreads", "Max Threads").with_default("64")],
        )
}

pub fn federation(mode: DeploymentMode) -> Federation {
    let vdbs = Arc::new(InMemoryRegistry::with_objects("vdbs", vdbs()));
    let bindings = Arc::new(InMemoryRegistry::with_objects("connector-bindings", bindings()));
    let sessions = Arc::new(InMemoryRegistry::with_objects("sessions", sessions()));

    let registries = RegistrySet::new()
        .with_system(Arc::new(InMemoryRegistry::with_objects(
            "system",
            vec![SystemObject::new("federation", mode).with_property("LogLevel", "DEBUG")],
        )))
        .with_vdbs(vdbs.clone())
        .with_connector_bindings(bindings.clone())
        .with_connector_types(Arc::new(InMemoryRegistry::with_objects(
            "connector-types",
            vec![
                ConnectorType::new("JDBC").with_description("Generic JDBC"),
                ConnectorType::new("Text File"),
                ConnectorType::new("LDAP"),
            ],
        )))
        .with_extension_modules(Arc::new(InMemoryRegistry::with_objects(
            "extension-modules",
            vec![
                ExtensionModule::new("udf.jar", "JAR", 2048),
                ExtensionModule::new("udf-ext.jar", "JAR", 512),
            ],
        )))
        .with_queue_worker_pools(Arc::new(InMemoryRegistry::with_objects(
            "worker-pools",
            vec![
                QueueWorkerPool::new("QueryProcessorQueue"),
                QueueWorkerPool::new("ConnectorWorkQueue"),
            ],
        )))
        .with_caches(Arc::new(InMemoryRegistry::with_objects(
            "caches",
            vec![
                Cache::new("ResultSetCache", "result_set"),
                Cache::new("PreparedPlanCache", "plan"),
            ],
        )))
        .with_sessions(sessions.clone())
        .with_requests(Arc::new(InMemoryRegistry::with_objects("requests", requests())))
        .with_source_requests(Arc::new(InMemoryRegistry::with_objects(
            "source-requests",
            source_requests(),
        )));

    let admin = RegistryMonitoringAdmin::new(
        &AdminConfig::default().with_deployment_mode(mode),
        registries,
        Arc::new(descriptors()),
    );

    Federation {
        admin,
        vdbs,
        bindings,
        sessions,
    }
}
