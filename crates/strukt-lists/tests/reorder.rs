//! Queue maintenance scenario combining removal, reordering and priority.

use std::collections::HashSet;

use strukt_lists::{
    all_but, first_by_priority, first_by_priority_hashed, shift_element, shift_index, ListError,
};

#[test]
fn queue_reordering_round() {
    let mut queue = vec!["fetch", "parse", "store", "notify"];

    // Bump the last task to the front, then demote parsing to the end.
    shift_index(&mut queue, 3, 0);
    assert_eq!(queue, vec!["notify", "fetch", "parse", "store"]);
    shift_element(&mut queue, &"parse", 9).unwrap();
    assert_eq!(queue, vec!["notify", "fetch", "store", "parse"]);

    // Dropping the head leaves the rest untouched.
    let without_head = all_but(&queue, 0);
    assert_eq!(without_head, vec!["fetch", "store", "parse"]);
    assert_eq!(queue.len(), 4);
}

#[test]
fn missing_elements_leave_the_queue_intact() {
    let mut queue = vec![10, 20, 30];
    assert_eq!(
        shift_element(&mut queue, &99, 0),
        Err(ListError::ElementNotFound)
    );
    assert_eq!(queue, vec![10, 20, 30]);
}

#[test]
fn format_selection_by_preference() {
    let advertised = ["msgpack", "json"];
    let preference = ["cbor", "msgpack", "json"];
    assert_eq!(
        first_by_priority(&advertised, &preference),
        Some(&"msgpack")
    );

    let advertised: HashSet<&str> = advertised.into_iter().collect();
    assert_eq!(
        first_by_priority_hashed(&advertised, &preference),
        Some(&"msgpack")
    );
    assert_eq!(first_by_priority_hashed(&advertised, &["cbor"]), None);
}
