use scenepool::*;

#[test]
fn test_parse_capped() {
    let config: PoolConfig = toml::from_str(
        r#"
        capacity_hint = 64
        growth = { kind = "capped", limit = 128 }
        "#,
    )
    .unwrap();
    assert_eq!(
        config,
        PoolConfig::default()
            .with_capacity_hint(64)
            .with_growth(GrowthPolicy::Capped { limit: 128 })
    );
}

#[test]
fn test_parse_defaults() {
    let config: PoolConfig = toml::from_str("capacity_hint = 16").unwrap();
    assert_eq!(config.growth, GrowthPolicy::Unbounded);

    let config: PoolConfig = toml::from_str(r#"growth = { kind = "unbounded" }"#).unwrap();
    assert_eq!(config, PoolConfig::default());
}
