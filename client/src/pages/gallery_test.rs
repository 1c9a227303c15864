use super::*;

#[test]
fn result_summary_for_all() {
    assert_eq!(result_summary(8, "All"), "Showing all 8 items");
}

#[test]
fn result_summary_single_item_is_singular() {
    assert_eq!(result_summary(1, "Research"), "1 item in Research");
}

#[test]
fn result_summary_plural_items() {
    assert_eq!(result_summary(2, "Operations"), "2 items in Operations");
}

#[test]
fn result_summary_empty_category() {
    assert_eq!(result_summary(0, "Nope"), "No items in Nope");
}
