use data_runtime::configs::drink::{DrinkCfg, load_default};

#[test]
fn shipped_config_matches_defaults() {
    let cfg = load_default().expect("load");
    assert_eq!(cfg, DrinkCfg::default());
}
