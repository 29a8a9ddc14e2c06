pub mod filter_bar;
pub mod product_card;
pub mod site_nav;
pub mod storefront;
