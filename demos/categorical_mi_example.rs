use coinfo::estimators::mutual_information::compute_mutual_information;
use std::collections::HashMap;

fn main() {
    // Example corpus - animal species paired with pet names
    let pairs = [
        ("dog", "Chloe"),
        ("dog", "Ozzie"),
        ("cat", "Jinx"),
        ("cat", "Fritz"),
        ("cat", "Chloe"),
        ("gecko", "Remy"),
    ];

    let summary = compute_mutual_information(&pairs).unwrap();

    // Calculate I(X;Y) manually from the entropy identity to verify
    let mut x_counts = HashMap::new();
    let mut y_counts = HashMap::new();
    let mut joint_counts = HashMap::new();
    for &(x, y) in &pairs {
        *x_counts.entry(x).or_insert(0) += 1;
        *y_counts.entry(y).or_insert(0) += 1;
        *joint_counts.entry((x, y)).or_insert(0) += 1;
    }

    fn entropy<K>(counts: &HashMap<K, i32>, n: f64) -> f64 {
        counts
            .values()
            .map(|&c| {
                let p = c as f64 / n;
                -p * p.log2()
            })
            .sum()
    }

    let n = pairs.len() as f64;
    let manual_i = entropy(&x_counts, n) + entropy(&y_counts, n) - entropy(&joint_counts, n);

    println!("Corpus: {pairs:?}");
    println!("Joint distribution:\n{:?}", summary.joint);
    println!("PMI matrix (bits):\n{:?}", summary.pmi);
    println!("H(X) = {} bits", summary.hx);
    println!("H(Y) = {} bits", summary.hy);
    println!("H(X,Y) = {} bits", summary.hxy);
    println!("Comparison: Manual calculation vs. Library implementation");
    println!("  Manual: {manual_i}");
    println!("  Library: {}", summary.i_xy);
}
