use bst_bench::container::Container;
use bst_bench::recursive::Tree;

use std::collections::{BTreeSet, HashSet};

fn tree_of<K: Ord + Copy>(xs: &[K]) -> Tree<K> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.find(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.find(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for delete in &deletes {
        tree.erase(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.find(x)) && still_present.iter().all(|x| tree.find(x))
}

#[quickcheck]
fn erase_absent_changes_nothing(xs: Vec<i8>, absent: i8) -> bool {
    let mut tree = tree_of(&xs);
    if xs.contains(&absent) {
        return true;
    }
    let before = tree.clone();
    tree.erase(&absent);

    tree == before
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    let before = tree.clone();
    for x in &xs {
        tree.insert(*x);
    }

    tree == before
}

#[quickcheck]
fn erase_everything_leaves_empty_tree(xs: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for x in &xs {
        tree.erase(x);
    }

    tree.is_empty() && tree.height() == 0 && xs.iter().all(|x| !tree.find(x))
}

#[quickcheck]
fn len_counts_unique_keys(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let unique: BTreeSet<_> = xs.iter().collect();

    tree.len() == unique.len()
}

#[quickcheck]
fn sorted_input_is_a_list(n: u8) -> bool {
    let ascending: Vec<i16> = (0..n as i16).collect();
    let descending: Vec<_> = ascending.iter().rev().copied().collect();

    tree_of(&ascending).height() == n as usize && tree_of(&descending).height() == n as usize
}

#[quickcheck]
fn agrees_with_btreeset(xs: Vec<i8>, deletes: Vec<i8>, probes: Vec<i8>) -> bool {
    fn build<C: Container<i8>>(mut container: C, xs: &[i8], deletes: &[i8]) -> C {
        for x in xs {
            container.insert(*x);
        }
        for delete in deletes {
            container.erase(delete);
        }
        container
    }

    let tree = build(Tree::new(), &xs, &deletes);
    let set = build(BTreeSet::new(), &xs, &deletes);

    probes
        .iter()
        .chain(&xs)
        .all(|x| Container::find(&tree, x) == Container::find(&set, x))
}
