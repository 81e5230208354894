//! The static seeded product catalog.
//!
//! The catalog is read-only, in-memory data built once at process start.
//! There is no product service behind it and nothing ever mutates it.

use crate::types::{Category, Gender, Price, Product, ProductId};

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: Category,
    gender: Gender,
    price_rupees: i64,
    color: &str,
    colors: &[&str],
    sizes: &[&str],
    stock: u32,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category,
        gender,
        price: Price::from_major(price_rupees),
        color: color.to_string(),
        colors: colors.iter().map(ToString::to_string).collect(),
        sizes: sizes.iter().map(ToString::to_string).collect(),
        stock,
        image: format!("/static/images/products/{id}.svg"),
    }
}

/// Build the seeded catalog in display order.
#[must_use]
pub fn seed() -> Vec<Product> {
    use Category::{Hoodies, Jackets, Jeans, Shirts, Shoes, Socks, Tees, Trousers};
    use Gender::{Men, Unisex, Women};

    vec![
        product(
            "classic-black-hoodie",
            "Classic Black Hoodie",
            Hoodies,
            Men,
            1799,
            "Black",
            &["Black", "Gray"],
            &["S", "M", "L", "XL"],
            24,
        ),
        product(
            "oversized-fleece-hoodie",
            "Oversized Fleece Hoodie",
            Hoodies,
            Unisex,
            1499,
            "Gray",
            &["Gray", "Black", "Maroon"],
            &["M", "L", "XL", "XXL"],
            8,
        ),
        product(
            "cropped-zip-hoodie",
            "Cropped Zip Hoodie",
            Hoodies,
            Women,
            2199,
            "Pink",
            &["Pink", "Cream"],
            &["XS", "S", "M", "L"],
            15,
        ),
        product(
            "slim-fit-jeans",
            "Slim Fit Jeans",
            Jeans,
            Men,
            2499,
            "Blue",
            &["Blue", "Black"],
            &["30", "32", "34", "36"],
            30,
        ),
        product(
            "high-waist-mom-jeans",
            "High-Waist Mom Jeans",
            Jeans,
            Women,
            2799,
            "Navy",
            &["Navy", "Light Blue"],
            &["26", "28", "30", "32"],
            12,
        ),
        product(
            "relaxed-taper-jeans",
            "Relaxed Taper Jeans",
            Jeans,
            Unisex,
            1999,
            "Black",
            &["Black", "Gray"],
            &["28", "30", "32", "34", "36"],
            18,
        ),
        product(
            "pleated-formal-trousers",
            "Pleated Formal Trousers",
            Trousers,
            Men,
            2299,
            "Gray",
            &["Gray", "Navy", "Black"],
            &["30", "32", "34", "36"],
            20,
        ),
        product(
            "wide-leg-trousers",
            "Wide-Leg Trousers",
            Trousers,
            Women,
            1899,
            "Beige",
            &["Beige", "Khaki", "Black"],
            &["26", "28", "30", "32"],
            9,
        ),
        product(
            "crew-socks-3-pack",
            "Crew Socks 3-Pack",
            Socks,
            Unisex,
            399,
            "White",
            &["White", "Black", "Gray"],
            &["Free Size"],
            60,
        ),
        product(
            "wool-ankle-socks",
            "Wool Ankle Socks",
            Socks,
            Unisex,
            549,
            "Gray",
            &["Gray", "Maroon", "Green"],
            &["Free Size"],
            42,
        ),
        product(
            "court-white-sneakers",
            "Court White Sneakers",
            Shoes,
            Women,
            3499,
            "White",
            &["White", "Blush"],
            &["4", "5", "6", "7", "8"],
            14,
        ),
        product(
            "retro-runner-sneakers",
            "Retro Runner Sneakers",
            Shoes,
            Men,
            2999,
            "Navy",
            &["Navy", "White", "Red"],
            &["7", "8", "9", "10", "11"],
            22,
        ),
        product(
            "chelsea-boots",
            "Chelsea Boots",
            Shoes,
            Men,
            4999,
            "Brown",
            &["Brown", "Black"],
            &["7", "8", "9", "10"],
            6,
        ),
        product(
            "essential-cotton-tee",
            "Essential Cotton Tee",
            Tees,
            Unisex,
            699,
            "White",
            &["White", "Black", "Navy"],
            &["S", "M", "L", "XL", "XXL"],
            80,
        ),
        product(
            "graphic-college-tee",
            "Graphic College Tee",
            Tees,
            Unisex,
            899,
            "Black",
            &["Black", "Maroon"],
            &["S", "M", "L", "XL"],
            35,
        ),
        product(
            "boxy-heavyweight-tee",
            "Boxy Heavyweight Tee",
            Tees,
            Men,
            1099,
            "Green",
            &["Green", "Cream", "Black"],
            &["M", "L", "XL"],
            0,
        ),
        product(
            "oxford-button-down-shirt",
            "Oxford Button-Down Shirt",
            Shirts,
            Men,
            1899,
            "Blue",
            &["Blue", "White", "Striped"],
            &["S", "M", "L", "XL"],
            26,
        ),
        product(
            "satin-blouse-shirt",
            "Satin Blouse Shirt",
            Shirts,
            Women,
            2099,
            "Cream",
            &["Cream", "Blush", "Black"],
            &["XS", "S", "M", "L"],
            11,
        ),
        product(
            "leather-biker-jacket",
            "Leather Biker Jacket",
            Jackets,
            Men,
            7999,
            "Black",
            &["Black", "Brown"],
            &["M", "L", "XL"],
            7,
        ),
        product(
            "denim-trucker-jacket",
            "Denim Trucker Jacket",
            Jackets,
            Unisex,
            3299,
            "Blue",
            &["Blue", "Black"],
            &["S", "M", "L", "XL"],
            19,
        ),
        product(
            "quilted-puffer-jacket",
            "Quilted Puffer Jacket",
            Jackets,
            Women,
            4499,
            "Maroon",
            &["Maroon", "Black", "Beige"],
            &["S", "M", "L"],
            5,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = seed();
        let mut ids: Vec<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_seed_covers_every_category() {
        use crate::types::Category;
        let catalog = seed();
        for category in [
            Category::Hoodies,
            Category::Jeans,
            Category::Trousers,
            Category::Socks,
            Category::Shoes,
            Category::Tees,
            Category::Shirts,
            Category::Jackets,
        ] {
            assert!(
                catalog.iter().any(|p| p.category == category),
                "no product seeded for {category}"
            );
        }
    }

    #[test]
    fn test_seed_primary_color_is_listed() {
        for p in seed() {
            assert!(p.colors.contains(&p.color), "{}: primary color missing", p.id);
        }
    }
}
