//! Catalog listing command.

use shopcommand_core::catalog;

/// Print the seeded catalog as a table.
pub fn list() {
    let catalog = catalog::seed();

    println!(
        "{:<28} {:<10} {:<8} {:>10}  {:>6}",
        "ID", "CATEGORY", "GENDER", "PRICE", "STOCK"
    );
    for product in &catalog {
        println!(
            "{:<28} {:<10} {:<8} {:>10}  {:>6}",
            product.id,
            product.category,
            product.gender,
            product.price.display(),
            product.stock,
        );
    }
    println!();
    println!("{} products", catalog.len());
}
