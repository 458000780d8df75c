mod tree;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Search the data structure for the value
    Search(T),
    /// Compare in-order traversals
    Traverse,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Search(T::arbitrary(g)),
            2 => Op::Traverse,
            _ => unreachable!(),
        }
    }
}

/// Routes the library's `log` output through the test harness. Run with `RUST_LOG=avl=trace`
/// to see every rotation.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
