pub mod product_popup_sheet;
