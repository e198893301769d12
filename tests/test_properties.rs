use objectry::api::process;
use objectry::ds::error::ObjectError;
use objectry::ds::function_object::Function;
use objectry::ds::object::{call_member, object_from, ObjectRef};
use objectry::ds::value::Value;
use objectry::processor::OverrideMap;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Container with one function per name in `functions` and one integer per
/// name in `data`.
fn container(functions: &BTreeSet<String>, data: &BTreeSet<String>) -> ObjectRef {
    let mut entries: Vec<(String, Value)> = Vec::new();
    for name in functions {
        let tag = name.clone();
        entries.push((
            name.clone(),
            Value::from(Function::new(name.as_str(), move |_, args| {
                Ok(Value::from(format!("{}:{}", tag, args.len())))
            })),
        ));
    }
    for (i, name) in data.iter().enumerate() {
        if !functions.contains(name) {
            entries.push((name.clone(), Value::from(i as i64)));
        }
    }
    object_from(entries)
}

fn snapshot(obj: &ObjectRef) -> Vec<(String, Value)> {
    obj.borrow().enumerable_entries()
}

proptest! {
    #[test]
    fn prop_overridden_members_are_fresh_and_others_untouched(
        functions in proptest::collection::btree_set("[a-h]{1,3}", 1..8),
        data in proptest::collection::btree_set("[i-p]{1,3}", 0..5),
        pick in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let obj = container(&functions, &data);
        let before = snapshot(&obj);
        let targets: BTreeSet<String> = functions
            .iter()
            .zip(pick.iter())
            .filter(|(_, chosen)| **chosen)
            .map(|(name, _)| name.clone())
            .collect();

        let mut overrides = OverrideMap::new();
        for name in &targets {
            overrides = overrides.with(name.clone(), |_, base, _| base.call(vec![]));
        }
        prop_assert!(process(&obj).override_methods(overrides).is_ok());

        for (name, old) in before {
            let now = obj.borrow().get(&name).unwrap();
            if targets.contains(&name) {
                prop_assert!(now.is_callable());
                prop_assert_ne!(now, old);
            } else {
                prop_assert_eq!(now, old);
            }
        }
    }

    #[test]
    fn prop_non_callable_member_is_rejected_and_unchanged(
        data in proptest::collection::btree_set("[i-p]{1,3}", 1..5),
        missing in "[q-z]{1,3}",
    ) {
        let obj = container(&BTreeSet::new(), &data);
        for name in data.iter().chain(std::iter::once(&missing)) {
            let before = obj.borrow().get(name);
            let err = process(&obj)
                .override_methods(OverrideMap::new().with(name.clone(), |_, _, _| Ok(Value::Undefined)))
                .err();
            prop_assert_eq!(err, Some(ObjectError::NotOverridable(name.clone())));
            prop_assert_eq!(obj.borrow().get(name), before);
        }
    }

    #[test]
    fn prop_base_forwards_call_arguments(args in proptest::collection::vec(any::<i64>(), 0..6)) {
        let obj = object_from(vec![(
            "f",
            Function::new("f", |_, args| Ok(Value::from(args.len() as i64))),
        )]);
        process(&obj)
            .override_methods(OverrideMap::new().with("f", |_, base, _| base.call(vec![])))
            .unwrap();

        let call: Vec<Value> = args.iter().copied().map(Value::from).collect();
        prop_assert_eq!(call_member(&obj, "f", call).unwrap(), Value::from(args.len() as i64));
    }

    #[test]
    fn prop_wrapper_returns_replacement_result(result in any::<i64>(), layers in 1..5usize) {
        let obj = object_from(vec![("f", Function::new("f", |_, _| Ok(Value::Null)))]);
        let processor = process(&obj);
        for _ in 0..layers {
            processor
                .override_methods(OverrideMap::new().with("f", |_, base, _| base.call(vec![])))
                .unwrap();
        }
        processor
            .override_methods(OverrideMap::new().with("f", move |_, _, _| Ok(Value::from(result))))
            .unwrap();

        prop_assert_eq!(call_member(&obj, "f", vec![]).unwrap(), Value::from(result));
    }
}
