//! Aggregation pipeline: buckets, sums, merging, reversal and flattening.

use serde_json::{json, Map, Value};
use strukt_maps::{
    deep_merge, extend_unique, flatten, insert_unique, key_of_max, keys_of_max_n, push_value,
    reverse_map, submap_by_keys, sum_num_maps, unite_maps, MapError,
};

fn object(doc: Value) -> Map<String, Value> {
    doc.as_object().unwrap().clone()
}

#[test]
fn buckets_collect_members_without_duplicates() {
    let mut index = Map::new();
    insert_unique(&mut index, "even", json!(2)).unwrap();
    insert_unique(&mut index, "even", json!(4)).unwrap();
    insert_unique(&mut index, "even", json!(2)).unwrap();
    extend_unique(&mut index, "odd", [json!(1), json!(3), json!(1)]).unwrap();
    push_value(&mut index, "odd", json!(3)).unwrap();

    assert_eq!(index["even"], json!([2, 4]));
    assert_eq!(index["odd"], json!([1, 3, 3]));
}

#[test]
fn buckets_refuse_scalar_slots() {
    let mut index = object(json!({"n": 7}));
    assert_eq!(
        push_value(&mut index, "n", json!(1)),
        Err(MapError::ExpectedArray { key: "n".into() })
    );
}

#[test]
fn shard_counts_aggregate_and_rank() {
    let shard_a = object(json!({"get": 12, "put": 3}));
    let shard_b = object(json!({"get": 8, "del": 1}));
    let totals = sum_num_maps(&[&shard_a, &shard_b], false).unwrap();
    assert_eq!(totals["get"], json!(20));
    assert_eq!(totals["put"], json!(3));
    assert_eq!(totals["del"], json!(1));

    assert_eq!(key_of_max(&totals), Some("get"));
    assert_eq!(keys_of_max_n(&totals, 2), vec!["get", "put"]);

    let shares = sum_num_maps(&[&shard_a, &shard_b], true).unwrap();
    assert_eq!(shares["put"], json!(0.125));
}

#[test]
fn layered_configuration_resolves_by_priority() {
    let defaults = json!({
        "net": {"port": 80, "timeout": 30},
        "log": {"level": "info"},
    });
    let overrides = json!({
        "net": {"port": 8080},
        "log": "off",
    });
    let resolved = deep_merge(&defaults, &overrides);
    assert_eq!(
        resolved,
        json!({
            "net": {"port": 8080, "timeout": 30},
            "log": "off",
        })
    );

    let flat = unite_maps(&[
        defaults.as_object().unwrap(),
        overrides.as_object().unwrap(),
    ]);
    assert_eq!(flat["net"], json!({"port": 8080}));
}

#[test]
fn reversal_groups_keys_under_their_value() {
    let owners = object(json!({"a.txt": "ann", "b.txt": "bob", "c.txt": "ann"}));
    let by_owner = reverse_map(&owners).unwrap();
    assert_eq!(by_owner["ann"], json!(["a.txt", "c.txt"]));
    assert_eq!(by_owner["bob"], json!(["b.txt"]));

    let nested = object(json!({"a.txt": {"owner": "ann"}}));
    assert_eq!(
        reverse_map(&nested),
        Err(MapError::UnkeyableValue { kind: "object" })
    );
}

#[test]
fn flattening_addresses_array_slots_by_index() {
    let doc = object(json!({
        "name": "probe",
        "samples": [10, 20],
        "meta": {"tags": {"env": "dev"}, "empty": {}},
    }));
    let flat = flatten(&doc, ".");
    assert_eq!(
        flat,
        object(json!({
            "name": "probe",
            "samples.0": 10,
            "samples.1": 20,
            "meta.tags.env": "dev",
        }))
    );

    let selected = submap_by_keys(&flat, &["name", "samples.1", "missing"]);
    assert_eq!(selected, object(json!({"name": "probe", "samples.1": 20})));
}
