//! Shared corpus fixture for confspec-core integration tests.
// crates/confspec-core/tests/common/mod.rs
// ============================================================================
// Module: Test Fixtures
// Description: Reference corpus used across integration suites.
// Purpose: Build one realistic corpus covering every validation rule.
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    dead_code,
    reason = "Test-only helpers; not every suite uses every item."
)]

use confspec_core::Corpus;
use confspec_core::Datatype;
use confspec_core::Dependency;
use confspec_core::NameKind;
use confspec_core::PropertyName;
use confspec_core::PropertySpec;
use confspec_core::RoleRequirement;
use confspec_core::Unit;
use confspec_core::UnitRegistry;
use confspec_core::Version;
use confspec_core::VersionRange;
use confspec_core::VersionedValue;

/// Parses a version literal.
pub fn v(input: &str) -> Version {
    input.parse().unwrap()
}

/// The memory pattern carried by the corpus data.
pub const MEMORY_PATTERN: &str =
    "(^\\p{N}+)(?:\\s*)((?:b|k|m|g|t|p|kb|mb|gb|tb|pb)\\b$)";

/// Builds the unit registry used by the reference corpus.
pub fn units() -> UnitRegistry {
    UnitRegistry::new(vec![
        Unit::new(
            "memory",
            MEMORY_PATTERN,
            vec!["1024b".to_string(), "100 mb".to_string(), "1g".to_string()],
        )
        .unwrap(),
        Unit::new("port", "^[0-9]{1,5}", vec!["8080".to_string()]).unwrap(),
        Unit::new("password", "[a-zA-Z0-9]{6,}", vec!["s3cr3tpw".to_string()]).unwrap(),
    ])
    .unwrap()
}

/// Builds the reference corpus: one property per validation rule family.
pub fn corpus() -> Corpus {
    let port = PropertySpec::new(
        vec![
            PropertyName::new("conf.integer.port.min.max", NameKind::File),
            PropertyName::new("ENV_VAR_INTEGER_PORT_MIN_MAX", NameKind::Env),
        ],
        Datatype::Integer { min: Some(0), max: Some(65_535) },
        v("0.5.0"),
    );

    let security = PropertySpec::new(
        vec![
            PropertyName::new("conf.security", NameKind::File),
            PropertyName::new("CONF_SECURITY", NameKind::Env),
        ],
        Datatype::Bool,
        v("0.5.0"),
    );

    let mut password = PropertySpec::new(
        vec![
            PropertyName::new("conf.security.password", NameKind::File),
            PropertyName::new("CONF_SECURITY_PASSWORD", NameKind::Env),
        ],
        Datatype::String { max_length: Some(64), unit: Some("password".to_string()) },
        v("0.5.0"),
    );
    password.roles = vec![
        RoleRequirement::new("role_1", true),
        RoleRequirement::new("role_2", true),
    ];
    password.depends_on = vec![Dependency::new("conf.security", "true")];

    let mut deprecated = PropertySpec::new(
        vec![PropertyName::new("conf.property.string.deprecated", NameKind::File)],
        Datatype::String { max_length: None, unit: Some("memory".to_string()) },
        v("0.1.0"),
    );
    deprecated.deprecated_since = Some(v("0.4.0"));
    deprecated.deprecated_for = vec!["conf.property.string.memory".to_string()];
    deprecated.roles = vec![RoleRequirement::new("role_4", true)];

    let mut memory = PropertySpec::new(
        vec![
            PropertyName::new("conf.property.string.memory", NameKind::File),
            PropertyName::new("PRODUCT_MEMORY", NameKind::Env),
        ],
        Datatype::String { max_length: None, unit: Some("memory".to_string()) },
        v("0.5.0"),
    );
    memory.default_values = vec![
        VersionedValue::new("512m", VersionRange::new(v("0.5.0"), Some(v("1.0.0")))),
        VersionedValue::new("1g", VersionRange::new(v("1.0.0"), None)),
    ];
    memory.recommended_values =
        vec![VersionedValue::new("2g", VersionRange::new(v("1.0.0"), None))];
    memory.roles = vec![RoleRequirement::new("role_3", true)];

    let mut allowed = PropertySpec::new(
        vec![
            PropertyName::new("conf.allowed.values", NameKind::File),
            PropertyName::new("ENV_VAR_ALLOWED_VALUES", NameKind::Env),
        ],
        Datatype::String { max_length: None, unit: None },
        v("0.1.0"),
    );
    allowed.allowed_values = Some(vec![
        "allowed_value1".to_string(),
        "allowed_value2".to_string(),
        "allowed_value3".to_string(),
    ]);

    let mut retired = PropertySpec::new(
        vec![PropertyName::new("conf.retired.option", NameKind::File)],
        Datatype::String { max_length: None, unit: None },
        v("0.1.0"),
    );
    retired.allowed_values = Some(Vec::new());

    let mut listen_address = PropertySpec::new(
        vec![PropertyName::new("conf.listen.address", NameKind::File)],
        Datatype::String { max_length: Some(253), unit: None },
        v("0.1.0"),
    );
    listen_address.restart_required = true;

    Corpus::new(
        vec![
            port,
            security,
            password,
            deprecated,
            memory,
            allowed,
            retired,
            listen_address,
        ],
        units(),
    )
    .unwrap()
}
