/// Benchmark runner for member calls.
///
/// Compares a direct member call against calls through override chains of
/// increasing depth.

extern crate objectry;

use objectry::api::process;
use objectry::ds::function_object::Function;
use objectry::ds::object::{call_member, object_from, ObjectRef};
use objectry::ds::value::Value;
use objectry::processor::OverrideMap;
use std::time::{Duration, Instant};

/// A container whose `add` member sums its integer arguments.
fn adder() -> ObjectRef {
    object_from(vec![(
        "add",
        Function::new("add", |_, args| {
            Ok(Value::from(args.iter().filter_map(|v| v.as_integer()).sum::<i64>()))
        }),
    )])
}

/// Wrap `add` in `depth` pass-through overrides.
fn override_chain(depth: usize) -> ObjectRef {
    let obj = adder();
    let processor = process(&obj);
    for _ in 0..depth {
        processor
            .override_methods(OverrideMap::new().with("add", |_, base, _| base.call(vec![])))
            .expect("add is a function");
    }
    obj
}

/// Call `add` on `obj` and return the execution time.
fn run_benchmark(obj: &ObjectRef, iterations: u32) -> Duration {
    let args = vec![Value::from(1), Value::from(2), Value::from(3)];
    let start = Instant::now();

    for _ in 0..iterations {
        let _ = call_member(obj, "add", args.clone());
    }

    start.elapsed()
}

fn main() {
    println!("=======================================================");
    println!("  objectry - Member Call Benchmarks");
    println!("  Direct call vs override chains");
    println!("=======================================================\n");

    let iterations = 100_000;
    let baseline = run_benchmark(&adder(), iterations);

    println!("{:<30} {:>14} {:>10}", "Benchmark", "Time", "Slowdown");
    println!("{}", "-".repeat(56));
    println!("{:<30} {:>14?} {:>10}", "Direct call", baseline, "1.00x");

    for depth in &[1usize, 2, 4, 8] {
        let obj = override_chain(*depth);
        let sanity = call_member(&obj, "add", vec![Value::from(1), Value::from(2)]);
        assert_eq!(sanity.ok(), Some(Value::from(3)), "chain of {} broke add", depth);

        let duration = run_benchmark(&obj, iterations);
        let slowdown = duration.as_secs_f64() / baseline.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<30} {:>14?} {:>9.2}x",
            format!("Override chain (depth {})", depth),
            duration,
            slowdown
        );
    }
}
