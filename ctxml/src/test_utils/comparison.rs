use crate::Node;

/// Structural equality of two subtrees: names, attribute order and values,
/// body text and child order.
pub fn compare_nodes(left: Node<'_>, right: Node<'_>) -> bool {
    if left.name() != right.name()
        || left.attributes() != right.attributes()
        || left.body_bytes() != right.body_bytes()
    {
        return false;
    }

    let mut left_children = left.children();
    let mut right_children = right.children();
    loop {
        match (left_children.next(), right_children.next()) {
            (Some(l), Some(r)) => {
                if !compare_nodes(l, r) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Asserts that two subtrees are structurally equal
///
/// # Panics
///
/// Panics if the trees differ
pub fn assert_documents_equal(left: Node<'_>, right: Node<'_>, message: &str) {
    assert!(
        compare_nodes(left, right),
        "{}\nLeft: {:?}\nRight: {:?}",
        message,
        left,
        right
    );
}
