//! End-to-end tests for the resolution engine, driven through the public API
//! with instrumented handlers.

use std::cell::Cell;
use std::rc::Rc;

use breeze_styles::{
    style_map, HandlerError, HandlerRegistry, ResolveError, StyleResolver, StyleValue,
    BG_OPACITY_ATTR,
};

/// A registry whose handlers count their invocations.
fn instrumented_registry() -> (HandlerRegistry, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));

    let c = calls.clone();
    let registry = HandlerRegistry::new()
        .add("rounded", move |arg| {
            c.set(c.get() + 1);
            match arg {
                Some("lg") => style_map! { "borderRadius" => 8 },
                Some(other) => match other
                    .strip_prefix('[')
                    .and_then(|r| r.strip_suffix(']'))
                    .and_then(|n| n.parse::<f64>().ok())
                {
                    Some(n) => style_map! { "borderRadius" => n },
                    None => style_map! {},
                },
                None => style_map! {},
            }
        })
        .add("bg", {
            let c = calls.clone();
            move |arg| {
                c.set(c.get() + 1);
                match arg {
                    Some(color) => style_map! { "backgroundColor" => color },
                    None => style_map! {},
                }
            }
        })
        .add("bg-opacity", {
            let c = calls.clone();
            move |arg| {
                c.set(c.get() + 1);
                match arg.and_then(|a| a.parse::<f64>().ok()) {
                    Some(pct) => style_map! { BG_OPACITY_ATTR => pct / 100.0 },
                    None => style_map! {},
                }
            }
        })
        .add("visible", {
            let c = calls.clone();
            move |_| {
                c.set(c.get() + 1);
                style_map! { "display" => "flex" }
            }
        });

    (registry, calls)
}

#[test]
fn repeated_resolution_hits_cache_without_reinvoking_handlers() {
    let (registry, calls) = instrumented_registry();
    let mut resolver = StyleResolver::new(registry);

    let first = resolver.resolve(&["rounded:lg", "bg:red"]).unwrap();
    assert_eq!(calls.get(), 2);

    let second = resolver.resolve(&["rounded:lg", "bg:red"]).unwrap();
    assert_eq!(first, second);
    assert_eq!(calls.get(), 2, "cache hit must not re-invoke handlers");
}

#[test]
fn permutations_resolve_under_distinct_keys() {
    let (registry, _) = instrumented_registry();
    let mut resolver = StyleResolver::new(registry);

    resolver.resolve(&["bg:red", "bg:blue"]).unwrap();
    resolver.resolve(&["bg:blue", "bg:red"]).unwrap();

    assert!(resolver.cache().has(&"bg:red,bg:blue".to_string()));
    assert!(resolver.cache().has(&"bg:blue,bg:red".to_string()));

    // Last token wins, so the permutations legitimately differ.
    let red_last = resolver.resolve(&["bg:blue", "bg:red"]).unwrap();
    assert_eq!(red_last.get("backgroundColor"), Some(&StyleValue::from("red")));
}

#[test]
fn unknown_tokens_resolve_like_empty_input() {
    let (registry, calls) = instrumented_registry();
    let mut resolver = StyleResolver::new(registry);

    let unknown = resolver.resolve(&["__not_a_real_token__"]).unwrap();
    let empty = resolver.resolve::<&str>(&[]).unwrap();

    assert!(unknown.is_empty());
    assert_eq!(unknown, empty);
    assert_eq!(calls.get(), 0);
}

#[test]
fn bg_opacity_composes_into_rgba() {
    let (registry, _) = instrumented_registry();
    let mut resolver = StyleResolver::new(registry);

    let styles = resolver.resolve(&["bg:red", "bg-opacity:50"]).unwrap();

    assert_eq!(
        styles.get("backgroundColor"),
        Some(&StyleValue::from("rgba(255, 0, 0, 0.5)"))
    );
    assert!(!styles.contains_key(BG_OPACITY_ATTR));
}

#[test]
fn capacity_bound_evicts_first_inserted_combination() {
    let (registry, _) = instrumented_registry();
    let mut resolver = StyleResolver::with_capacity(registry, 2);

    resolver.resolve(&["bg:red"]).unwrap();
    resolver.resolve(&["bg:green"]).unwrap();
    resolver.resolve(&["bg:blue"]).unwrap();

    assert!(!resolver.cache().has(&"bg:red".to_string()));
    assert!(resolver.cache().has(&"bg:green".to_string()));
    assert!(resolver.cache().has(&"bg:blue".to_string()));
}

#[test]
fn bare_key_handler_matches_via_full_token_fallback() {
    let (registry, calls) = instrumented_registry();
    let mut resolver = StyleResolver::new(registry);

    let styles = resolver.resolve(&["visible"]).unwrap();
    assert_eq!(styles, style_map! { "display" => "flex" });
    assert_eq!(calls.get(), 1);
}

#[test]
fn bracket_arguments_pass_through_unparsed() {
    let (registry, _) = instrumented_registry();
    let mut resolver = StyleResolver::new(registry);

    let styles = resolver.resolve(&["rounded:[17]"]).unwrap();
    assert_eq!(styles, style_map! { "borderRadius" => 17 });
}

#[test]
fn handler_failure_aborts_resolution() {
    let registry = HandlerRegistry::new()
        .add("fine", |_| style_map! { "a" => 1 })
        .add_fallible("explode", |_| Err(HandlerError::new("nope")));
    let mut resolver = StyleResolver::new(registry);

    let err = resolver.resolve(&["fine", "explode"]).unwrap_err();
    let ResolveError::Handler { token, source } = err;
    assert_eq!(token, "explode");
    assert_eq!(source.to_string(), "nope");

    // Nothing was cached for the failed combination; retrying runs again.
    assert!(resolver.cache().is_empty());
    assert!(resolver.resolve(&["fine", "explode"]).is_err());
}

#[test]
fn resolved_maps_serialize_flat() {
    let (registry, _) = instrumented_registry();
    let mut resolver = StyleResolver::new(registry);

    let styles = resolver.resolve(&["rounded:lg", "bg:navy"]).unwrap();
    let json = serde_json::to_value(&styles).unwrap();

    assert_eq!(json["borderRadius"], 8.0);
    assert_eq!(json["backgroundColor"], "navy");
}
