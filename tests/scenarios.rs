use avl::{Error, Tree};
use simplelog::{Config, LevelFilter, TestLogger};

/// Routes the tree's rotation and fix-up tracing into the test output. Only the first call in a
/// test binary installs the logger.
fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn tree_of(keys: &[i32]) -> Tree<i32, i32> {
    let mut tree = Tree::new();
    for &key in keys {
        tree.insert(key, key);
    }
    tree
}

#[test]
fn ascending_insert_rotates_to_middle() {
    init_logging();
    let tree = tree_of(&[10, 20, 30]);

    // Three nodes at height two with 20 on top leaves 10 and 30 as its leaves, all level.
    assert_eq!(tree.root(), Some((&20, &20)));
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.first(), Some((&10, &10)));
    assert_eq!(tree.last(), Some((&30, &30)));
    assert!(tree.has_equal_leaf_depths());
}

#[test]
fn zig_zag_insert_rotates_to_middle() {
    init_logging();
    let tree = tree_of(&[30, 10, 20]);

    assert_eq!(tree.root(), Some((&20, &20)));
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.keys().collect::<Vec<_>>(), [&10, &20, &30]);
    assert!(tree.has_equal_leaf_depths());
}

#[test]
fn remove_smallest_of_seven() {
    init_logging();
    let mut tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(tree.remove(&1), Some(1));
    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [2, 3, 4, 5, 6, 7]);
    // 2 keeps 3 as its only child and leans right, so nothing above it rotates.
    assert_eq!(tree.root(), Some((&4, &4)));
    assert_eq!(tree.height(), 3);
    assert!(tree.has_equal_leaf_depths());
}

#[test]
fn remove_only_key_empties_tree() {
    init_logging();
    let mut tree = tree_of(&[42]);

    assert_eq!(tree.remove(&42), Some(42));
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.find(&42), None);
    assert_eq!(tree.get(&7), Err(Error::KeyNotFound));
}

#[test]
fn remove_root_of_seven_promotes_predecessor() {
    init_logging();
    let mut tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(tree.remove(&4), Some(4));
    assert_eq!(tree.root(), Some((&3, &3)));
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
}

#[test]
fn overwrite_is_not_a_second_entry() {
    let mut tree = Tree::new();
    tree.insert("k", 1);
    tree.insert("k", 1);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[&"k"], 1);
}

#[test]
fn many_operations_stay_shallow() {
    let mut tree = Tree::new();
    for key in 0..10_000 {
        tree.insert(key, key);
    }
    for key in (0..10_000).filter(|key| key % 3 != 0) {
        assert_eq!(tree.remove(&key), Some(key));
    }

    assert_eq!(tree.len(), 3334);
    // 1.44 * lg(3336) is a little under 17.
    assert!(tree.height() <= 16);
    assert!(tree.keys().all(|key| key % 3 == 0));
}

#[test]
fn error_message() {
    assert_eq!(Error::KeyNotFound.to_string(), "key not found");
}
