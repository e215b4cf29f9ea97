//! Helpers shared by the unit tests.

/// Assert the stored balance factor of the node holding each listed key.
macro_rules! assert_balances {
    ($tree:ident, $($key:expr => $balance:expr),+ $(,)?) => {{
        $(
            let id = $tree.find_node(&$key).expect("key should be in the tree");
            assert_eq!($tree.arena[id].balance, $balance, "balance of {}", $key);
        )+
    }};
}
