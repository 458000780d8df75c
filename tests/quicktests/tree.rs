use avl::{Tree, TreeError};

use std::collections::BTreeSet;

use crate::{init_logger, Op};

fn in_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut values = Vec::new();
    tree.traverse_in_order(|x| values.push(x.clone()));
    values
}

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and searches both agree on what is stored.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(x) => tree.insert(x.clone()) == set.insert(x.clone()),
        Op::Search(x) => {
            let mut hits = 0;
            let result = tree.search(x, |_| hits += 1);
            let expected = if set.is_empty() {
                Err(TreeError::EmptyTree)
            } else {
                Ok(set.contains(x))
            };
            result == expected && hits == usize::from(set.contains(x))
        }
        Op::Traverse => in_order(tree).iter().eq(set.iter()),
    })
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        init_logger();
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set) && tree.len() == set.len()
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted_and_unique(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let values = in_order(&tree);

        values.windows(2).all(|w| w[0] < w[1]) && xs.iter().all(|x| values.contains(x))
    }
}

quickcheck::quickcheck! {
    fn inserting_twice_is_inserting_once(xs: Vec<String>) -> bool {
        let once: Tree<_> = xs.iter().cloned().collect();
        let twice: Tree<_> = xs.iter().chain(xs.iter()).cloned().collect();

        in_order(&once) == in_order(&twice) && once.len() == twice.len()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x) && tree.search(x, |_| {}) == Ok(true))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn clone_is_independent(xs: Vec<i8>, more: Vec<i8>) -> bool {
        let original: Tree<_> = xs.iter().copied().collect();
        let before = in_order(&original);

        let mut copy = original.clone();
        copy.extend(more);

        in_order(&original) == before && original.len() == before.len()
    }
}

#[test]
fn empty_tree_search_reports_error() {
    init_logger();
    let tree: Tree<char> = Tree::new();
    let mut calls = 0;

    assert_eq!(tree.search(&'a', |_| calls += 1), Err(TreeError::EmptyTree));
    assert_eq!(calls, 0);
}

#[test]
fn rotation_scenarios() {
    init_logger();
    for order in [[10, 20, 30], [30, 20, 10], [30, 10, 20], [10, 30, 20]] {
        let tree: Tree<_> = order.into_iter().collect();

        let mut pre = Vec::new();
        tree.traverse_pre_order(|x| pre.push(*x));
        assert_eq!(pre, [20, 10, 30], "inserting {:?}", order);
        assert_eq!(tree.height(), 2);
    }
}

#[test]
fn demo_data() {
    init_logger();
    let tree: Tree<_> = [274, 3245, 5342, 4235].into_iter().collect();

    let mut pre = Vec::new();
    tree.traverse_pre_order(|x| pre.push(*x));
    let mut post = Vec::new();
    tree.traverse_post_order(|x| post.push(*x));

    assert_eq!(in_order(&tree), [274, 3245, 4235, 5342]);
    assert_eq!(pre.first(), Some(&3245));
    assert_eq!(post.last(), Some(&3245));
}
