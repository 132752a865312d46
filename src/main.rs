//! Prints a few sets built from A = {1, ..., 5} and B = {4, ..., 10}.

use fset::prelude::*;

fn main() {
    let a = Set::new(1..=5);
    let b = Set::new(4..=10);
    let even = Class::pred(|x: &i32| x % 2 == 0);

    println!("A:          {a}");
    println!("B:          {b}");
    println!("A ∪ B:      {}", &a + &b);
    println!("A ∩ B:      {}", &a & &b);
    println!("A \\ B:      {}", &a - &b);
    println!("|A × B|:    {}", a.product(&b).card());
    println!("even in B:  {}", even.select(b));
}
