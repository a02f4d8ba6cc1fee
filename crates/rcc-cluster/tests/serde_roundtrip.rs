use rcc_cluster::{
    run_clustering, serde_io, ClusterConfig, InvariantKind, OracleKind, WlHashOptions,
};

use fixtures::record;

#[test]
fn outcome_roundtrips_through_json() {
    let records = vec![
        record(1, fixtures::its_single_change("C", "O")),
        record(2, fixtures::its_single_change("C", "O")),
        record(3, fixtures::its_chain_change(["C", "O", "N"])),
    ];
    let config = ClusterConfig::new(InvariantKind::VertexCount, OracleKind::Isomorphism);
    let outcome = run_clustering(records, &config).unwrap();

    let json = serde_io::outcome_to_json(&outcome).unwrap();
    let restored = serde_io::outcome_from_json(&json).unwrap();
    assert_eq!(outcome, restored);
}

#[test]
fn config_roundtrips_through_json() {
    let config = ClusterConfig::new(
        InvariantKind::VertexDegree,
        OracleKind::WlHash(WlHashOptions {
            iterations: 5,
            use_attrs: true,
        }),
    );
    let json = serde_io::config_to_json(&config).unwrap();
    let restored = serde_io::config_from_json(&json).unwrap();
    assert_eq!(config, restored);
}

#[test]
fn malformed_payloads_surface_serde_errors() {
    let err = serde_io::outcome_from_json("{not json").unwrap_err();
    assert_eq!(err.info().code, "outcome-deserialize");

    let err = serde_io::config_from_json("[]").unwrap_err();
    assert_eq!(err.info().code, "config-deserialize");
}

#[test]
fn files_roundtrip_on_disk() {
    let config = ClusterConfig::new(InvariantKind::EdgeCount, OracleKind::Isomorphism);
    let json = serde_io::config_to_json(&config).unwrap();

    let dir = std::env::temp_dir().join("rcc-serde-roundtrip");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.json");
    serde_io::write_json(&path, &json).unwrap();
    let read_back = serde_io::read_json(&path).unwrap();
    assert_eq!(json, read_back);
    std::fs::remove_file(&path).ok();
}
