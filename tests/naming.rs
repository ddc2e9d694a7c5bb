use modgraph::core::naming::{to_camel_case, to_kebab_case};
use modgraph::core::ModuleId;
use std::path::PathBuf;

#[test]
fn kebab_case_splits_on_interior_uppercase() {
    assert_eq!(to_kebab_case("accountDomain"), "account-domain");
    assert_eq!(to_kebab_case("Account"), "account");
    assert_eq!(to_kebab_case("httpAPIClient"), "http-a-p-i-client");
    assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
}

#[test]
fn camel_case_joins_kebab_words() {
    assert_eq!(to_camel_case("account-domain"), "accountDomain");
    assert_eq!(to_camel_case("core"), "core");
}

#[test]
fn module_path_uses_kebab_segments() {
    let module = ModuleId::new(":account:accountDomain");
    assert_eq!(module.to_path(), PathBuf::from("account").join("account-domain"));
}

#[test]
fn module_id_adds_missing_root_prefix() {
    assert_eq!(ModuleId::new("account:account-domain").as_str(), ":account:account-domain");
    assert_eq!(ModuleId::new(":core").as_str(), ":core");
}

#[test]
fn dot_notation_converts_to_module_id() {
    let module = ModuleId::from_dot_notation("projects.account.accountDomain");
    assert_eq!(module.as_str(), ":account:account-domain");

    let module = ModuleId::from_dot_notation("features.checkoutFlow");
    assert_eq!(module.as_str(), ":features:checkout-flow");
}

#[test]
fn dot_notation_round_trips() {
    for raw in [":account:account-domain", ":core", ":feature:order-history:ui-kit"] {
        let module = ModuleId::new(raw);
        let dot = module.to_dot_notation();
        assert!(dot.starts_with("projects."));

        let back = ModuleId::from_dot_notation(&dot);
        assert!(back.as_str().starts_with(':'));
        assert_eq!(back, module, "round trip through {dot}");
    }
}
