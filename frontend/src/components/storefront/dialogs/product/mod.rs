use common::contact::ContactOrigin;
use common::view::ProductView;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::product_card::{contact_button, image_navigation, price_block, swatch_list};
use crate::components::storefront::{Msg, StorefrontComponent};
use crate::popup_sheet::product_popup_sheet::ProductPopupSheet;

pub fn product_dialog(component: &StorefrontComponent, link: &Scope<StorefrontComponent>) -> Html {
    let popup = component.popup_product();

    html! {
        <ProductPopupSheet active={popup.is_some()} on_dismiss={link.callback(|_| Msg::ClosePopup)}>
            {
                if let Some((product, selection)) = popup {
                    let view = ProductView::detail(product, &component.config);
                    let on_select = link.callback(Msg::PopupSelection);
                    let on_contact = link.callback(|product_id| Msg::Contact {
                        product_id,
                        origin: ContactOrigin::Popup,
                    });
                    let image = selection.displayed_image(product, &component.config.popup_placeholder_image);

                    html! {
                        <div class="popup-content">
                            <button class="close-popup" id="close-popup" onclick={link.callback(|_| Msg::ClosePopup)}>
                                { "×" }
                            </button>
                            <div class="popup-image-container">
                                <img id="popup-product-image" src={image.to_string()} alt={view.name.clone()} />
                                { image_navigation(selection.navigation(product), &on_select) }
                            </div>
                            <div class="popup-info">
                                <div class="product-category">{ view.category_label.clone() }</div>
                                <h2 class="product-name">{ view.name.clone() }</h2>
                                { price_block(&view.price) }
                                {
                                    match &view.stock_badge {
                                        Some(badge) => html! {
                                            <div class="stock-info" id="popup-stock-info">
                                                <span class={classes!("stock-status", badge.css_class)}>{ badge.text.clone() }</span>
                                                <span class="stock-quantity">{ view.stock_detail.clone().unwrap_or_default() }</span>
                                            </div>
                                        },
                                        None => html! {},
                                    }
                                }
                                <p class="product-description">{ view.description.clone() }</p>
                                {
                                    if view.swatches.is_empty() {
                                        html! {}
                                    } else {
                                        html! {
                                            <div class="popup-colors">
                                                <h4>{ "Available Colors" }</h4>
                                                { swatch_list(&view.swatches, selection.group(), &on_select, "color-option popup-color") }
                                            </div>
                                        }
                                    }
                                }
                                { contact_button(view.contact, &view.id, &on_contact) }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </ProductPopupSheet>
    }
}
