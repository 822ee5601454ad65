use super::*;
use crate::model::{Controller, MethodDescriptor};

fn controller(identifier: &str, methods: &[&str]) -> Controller {
    methods.iter().fold(Controller::new(identifier), |c, m| {
        c.with_method(*m, MethodDescriptor::default())
    })
}

#[test]
fn test_kebab_case() {
    assert_eq!(kebab_case("UserProfile"), "user-profile");
    assert_eq!(kebab_case("exportCsv"), "export-csv");
    assert_eq!(kebab_case("HTMLParser"), "html-parser");
    assert_eq!(kebab_case("export_csv"), "export-csv");
    assert_eq!(kebab_case("  Order  Line "), "order-line");
    assert_eq!(kebab_case("v2Api"), "v2-api");
    assert_eq!(kebab_case("user2"), "user2");
    assert_eq!(kebab_case("already-kebab"), "already-kebab");
    assert_eq!(kebab_case(""), "");
    assert_eq!(kebab_case("--"), "");
}

#[test]
fn test_kebab_case_caseless_uppercase_is_stable() {
    // Mathematical bold capitals are uppercase but have no lowercase form.
    let once = kebab_case("A\u{1D400}b");
    assert_eq!(kebab_case(&once), once);
}

#[test]
fn test_php_string_literal() {
    assert_eq!(php_string_literal("post"), "'post'");
    assert_eq!(php_string_literal("Admin\\UserController"), "'Admin\\UserController'");
    assert_eq!(php_string_literal("it's"), "'it\\'s'");
    assert_eq!(php_string_literal("trailing\\"), "'trailing\\\\'");
    assert_eq!(php_string_literal("a\\\\b"), "'a\\\\\\b'");
}

#[test]
fn test_reference_style_selection() {
    assert_eq!(ReferenceStyle::from_root_namespace(None), ReferenceStyle::Tuple);
    assert_eq!(ReferenceStyle::from_root_namespace(Some("")), ReferenceStyle::Tuple);
    assert_eq!(
        ReferenceStyle::from_root_namespace(Some("App\\Http\\Controllers\\")),
        ReferenceStyle::Namespaced {
            root: "App\\Http\\Controllers".into()
        }
    );
}

#[test]
fn test_namespaced_style_strips_root_once() {
    let style = ReferenceStyle::from_root_namespace(Some("App"));
    assert_eq!(style.controller("App\\App\\PostController"), "'App\\PostController'");
    assert_eq!(style.controller("Other\\PostController"), "'Other\\PostController'");
    // Only a whole leading segment counts.
    assert_eq!(style.controller("Application\\PostController"), "'Application\\PostController'");
    assert_eq!(
        style.action("App\\PostController", "export"),
        "'PostController@export'"
    );
}

#[test]
fn test_tuple_style() {
    let style = ReferenceStyle::Tuple;
    assert_eq!(style.controller("App\\PostController"), "App\\PostController::class");
    assert_eq!(
        style.action("App\\PostController", "export"),
        "[App\\PostController::class, 'export']"
    );
}

#[test]
fn test_modifier_threshold() {
    assert_eq!(Modifier::choose(&["index"], &[]), None);
    assert_eq!(
        Modifier::choose(&["index", "show"], &["a", "b", "c"]),
        Some(Modifier::Except(vec!["a".into(), "b".into(), "c".into()]))
    );
    // Four missing switches to listing what is present, even when that list is longer.
    assert_eq!(
        Modifier::choose(&["a", "b", "c", "d", "e"], &["w", "x", "y", "z"]),
        Some(Modifier::Only(
            ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect()
        ))
    );
}

#[test]
fn test_plan_full_web_resource() {
    let plan = plan_routes(&controller("App\\PostController", &RESOURCE_METHODS));
    assert_eq!(plan.class, TrafficClass::Web);
    assert_eq!(plan.slug, "post");
    let resource = plan.resource.unwrap();
    assert_eq!(resource.methods.len(), 7);
    assert_eq!(resource.modifier, None);
    assert!(plan.explicit.is_empty());
}

#[test]
fn test_plan_missing_methods_keep_canonical_order() {
    let plan = plan_routes(&controller(
        "PostController",
        &["destroy", "update", "show", "store", "index"],
    ));
    assert_eq!(
        plan.resource.unwrap().modifier,
        Some(Modifier::Except(vec!["create".into(), "edit".into()]))
    );
}

#[test]
fn test_plan_only_lists_present_in_declaration_order() {
    let plan = plan_routes(&controller("PostController", &["show", "index"]));
    assert_eq!(
        plan.resource.unwrap().modifier,
        Some(Modifier::Only(vec!["show".into(), "index".into()]))
    );
}

#[test]
fn test_plan_api_form_actions_are_ignored() {
    let plan = plan_routes(&controller("PostController", &["index", "create", "edit"]).api_resource(true));
    assert_eq!(plan.class, TrafficClass::Api);
    assert_eq!(plan.resource.as_ref().unwrap().methods, ["index"]);
    assert!(plan.explicit.is_empty());
    assert_eq!(plan.ignored, ["create", "edit"]);
}

#[test]
fn test_plan_explicit_paths() {
    let plan = plan_routes(
        &controller("OrderLineController", &["exportCsv", "show", "preview"]),
    );
    let paths: Vec<_> = plan.explicit.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["order-line/export-csv", "order-line/preview"]);
}

#[test]
fn test_build_routes_web_with_except_and_explicit() {
    let synth = RouteSynthesizer::new(None);
    let routes = synth
        .build_routes(&controller(
            "App\\Http\\Controllers\\PostController",
            &["index", "store", "show", "update", "destroy", "publish"],
        ))
        .unwrap();
    assert_eq!(
        routes,
        "Route::resource('post', App\\Http\\Controllers\\PostController::class)->except('create', 'edit');\n\
         Route::get('post/publish', [App\\Http\\Controllers\\PostController::class, 'publish']);"
    );
}

#[test]
fn test_build_routes_api_namespaced_only() {
    let synth = RouteSynthesizer::new(Some("App\\Http\\Controllers"));
    let routes = synth
        .build_routes(
            &controller("App\\Http\\Controllers\\Api\\TagController", &["index"])
                .api_resource(true),
        )
        .unwrap();
    assert_eq!(
        routes,
        "Route::apiResource('tag', 'Api\\TagController')->only('index');"
    );
}

#[test]
fn test_build_routes_empty_controller() {
    let synth = RouteSynthesizer::new(None);
    assert_eq!(synth.build_routes(&Controller::new("EmptyController")).unwrap(), "");
}

#[test]
fn test_render_modifier() {
    assert_eq!(
        render_modifier(&Modifier::Except(vec!["create".into(), "edit".into()])),
        "->except('create', 'edit')"
    );
    assert_eq!(render_modifier(&Modifier::Only(vec!["show".into()])), "->only('show')");
}

#[test]
fn test_generator_types() {
    assert_eq!(RouteSynthesizer::new(None).types(), ["routes"]);
}

#[test]
fn test_synthesizer_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RouteSynthesizer>();
}
