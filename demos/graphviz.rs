use avltree::AvlTree;

fn main() {
    let mut tree = AvlTree::new();
    for value in [50, 20, 70, 10, 30, 60, 80, 25, 35] {
        tree.insert(value);
    }
    tree.remove(&20);

    println!("Pre-order:  {:?}", tree.preorder());
    println!("In-order:   {:?}", tree.inorder());
    println!("Post-order: {:?}", tree.postorder());
    match (tree.min(), tree.max()) {
        (Ok(min), Ok(max)) => println!("Range: {min}..={max}, height {}", tree.height()),
        (Err(err), _) | (_, Err(err)) => println!("{err}"),
    }

    // Pipe into `dot -Tpng -o tree.png` to draw the tree.
    println!("{}", tree.graphviz());
}
