//! Built-in catalog served when no feed is configured or the feed fails.

use crate::config::StockPolicy;
use crate::model::product::ProductRecord;
use crate::model::raw_row::{columns, RawRow};

use super::normalize::normalize_rows;

struct SampleProduct {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    description: &'static str,
    colors: &'static str,
    images: &'static str,
    original_price: &'static str,
    selling_price: &'static str,
    stock_quantity: &'static str,
}

const SAMPLE_PRODUCTS: [SampleProduct; 4] = [
    SampleProduct {
        id: "001",
        name: "Premium Cotton Shirt",
        category: "men",
        description: "High-quality cotton shirt perfect for formal and casual occasions. Premium finishing with comfortable fit.",
        colors: "White;Blue;Black",
        images: "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=500|https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=400&h=500&fit=crop;https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=500&tint=0000ff;https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=500&tint=333333|https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=400&h=500&fit=crop&tint=333333",
        original_price: "1799",
        selling_price: "1299",
        stock_quantity: "15",
    },
    SampleProduct {
        id: "002",
        name: "Designer Kurti",
        category: "women",
        description: "Beautiful traditional kurti with contemporary design elements. Perfect for festivals and special occasions.",
        colors: "Red;Green;Pink",
        images: "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=500&tint=ff0000;https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=500&tint=008000|https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=400&h=500&fit=crop&tint=008000;https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=500&tint=ff69b4",
        original_price: "1299",
        selling_price: "899",
        stock_quantity: "3",
    },
    SampleProduct {
        id: "003",
        name: "Kids Summer T-Shirt",
        category: "kids",
        description: "Comfortable and colorful t-shirt for children. Made with soft, breathable fabric perfect for active kids.",
        colors: "Yellow;Orange;Purple",
        images: "https://images.unsplash.com/photo-1519238263530-99bdd11df2ea?w=500&tint=ffff00;https://images.unsplash.com/photo-1519238263530-99bdd11df2ea?w=500&tint=ff8c00|https://images.unsplash.com/photo-1519238263530-99bdd11df2ea?w=400&h=500&fit=crop&tint=ff8c00;https://images.unsplash.com/photo-1519238263530-99bdd11df2ea?w=500&tint=800080",
        original_price: "699",
        selling_price: "499",
        stock_quantity: "8",
    },
    SampleProduct {
        id: "004",
        name: "Luxury Formal Dress",
        category: "women",
        description: "Elegant formal dress for special occasions. Premium fabric with sophisticated design.",
        colors: "Black;Navy",
        images: "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?w=500;https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?w=500&tint=000080",
        original_price: "2999",
        selling_price: "2499",
        stock_quantity: "0",
    },
];

/// The four sample products, normalized with the given stock policy.
pub fn sample_catalog(policy: StockPolicy) -> Vec<ProductRecord> {
    let rows: Vec<RawRow> = SAMPLE_PRODUCTS.iter().map(SampleProduct::to_row).collect();
    normalize_rows(&rows, policy)
}

impl SampleProduct {
    fn to_row(&self) -> RawRow {
        RawRow::from_pairs([
            (columns::PRODUCT_ID, self.id),
            (columns::PRODUCT_NAME, self.name),
            (columns::CATEGORY, self.category),
            (columns::DESCRIPTION, self.description),
            (columns::COLORS_AVAILABLE, self.colors),
            (columns::IMAGE_URLS, self.images),
            (columns::ORIGINAL_PRICE, self.original_price),
            (columns::SELLING_PRICE, self.selling_price),
            (columns::STOCK_QUANTITY, self.stock_quantity),
        ])
    }
}
