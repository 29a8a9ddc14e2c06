//! A single product card with its own color/image selection.
//!
//! The card is keyed by render pass in the grid, so a fresh render pass
//! recreates it and its selection starts over at the first picture.
//!
//! The markup helpers at the bottom are shared with the detail view.

use std::rc::Rc;

use common::model::product::ProductRecord;
use common::selection::{Direction, Navigation, Selection, SelectionEvent};
use common::view::{ContactButton, PriceBlock, ProductView, StockBadge, Swatch};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Rc<ProductRecord>,
    pub view: Rc<ProductView>,
    pub placeholder: AttrValue,
    pub on_open: Callback<String>,
    pub on_contact: Callback<String>,
}

pub enum Msg {
    Select(SelectionEvent),
}

pub struct ProductCard {
    selection: Selection,
}

impl Component for ProductCard {
    type Message = Msg;
    type Properties = ProductCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            selection: Selection::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(event) => {
                let next = self.selection.apply(event, &ctx.props().product);
                let changed = next != self.selection;
                self.selection = next;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let view = &props.view;
        let link = ctx.link();
        let on_select = link.callback(Msg::Select);
        let image = self.selection.displayed_image(&props.product, &props.placeholder);

        let on_open = {
            let on_open = props.on_open.clone();
            let id = view.id.clone();
            Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
        };

        html! {
            <div class="product-card" data-product-id={view.id.clone()} data-category={view.category.clone()} onclick={on_open}>
                <div class="product-image-container">
                    <img class="product-image" src={image.to_string()} alt={view.name.clone()} loading="lazy" />
                    {
                        match &view.stock_badge {
                            Some(StockBadge { css_class, text }) => html! {
                                <div class={classes!("stock-badge", *css_class)}>{ text.clone() }</div>
                            },
                            None => html! {},
                        }
                    }
                    {
                        match &view.discount_badge {
                            Some(text) => html! { <div class="discount-badge">{ text.clone() }</div> },
                            None => html! {},
                        }
                    }
                    { image_navigation(self.selection.navigation(&props.product), &on_select) }
                </div>

                <div class="product-info">
                    <div class="product-category">{ view.category_label.clone() }</div>
                    <h3 class="product-name">{ view.name.clone() }</h3>
                    { price_block(&view.price) }
                    {
                        match &view.stock_badge {
                            Some(StockBadge { css_class, text }) => html! {
                                <div class="stock-info">
                                    <span class={classes!("stock-status", *css_class)}>{ text.clone() }</span>
                                </div>
                            },
                            None => html! {},
                        }
                    }
                    <p class="product-description">{ view.description.clone() }</p>
                    { swatch_list(&view.swatches, self.selection.group(), &on_select, "color-option") }
                    { contact_button(view.contact, &view.id, &props.on_contact) }
                </div>
            </div>
        }
    }
}

/// Arrows and dots; renders nothing for groups with a single picture.
pub fn image_navigation(navigation: Option<Navigation>, on_select: &Callback<SelectionEvent>) -> Html {
    let Some(navigation) = navigation else {
        return html! {};
    };
    let arrow = |direction: Direction| {
        let on_select = on_select.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_select.emit(SelectionEvent::Advance(direction));
        })
    };

    html! {
        <div class="image-nav">
            <div class="image-arrows">
                <button class="arrow prev-arrow" data-direction="prev" onclick={arrow(Direction::Prev)}>{ "‹" }</button>
                <button class="arrow next-arrow" data-direction="next" onclick={arrow(Direction::Next)}>{ "›" }</button>
            </div>
            <div class="nav-dots">
                {
                    for navigation.dots().map(|(index, active)| {
                        let on_select = on_select.clone();
                        let onclick = Callback::from(move |event: MouseEvent| {
                            event.stop_propagation();
                            on_select.emit(SelectionEvent::Jump(index));
                        });
                        html! {
                            <span class={classes!("nav-dot", active.then_some("active"))} data-index={index.to_string()} {onclick}></span>
                        }
                    })
                }
            </div>
        </div>
    }
}

pub fn price_block(price: &PriceBlock) -> Html {
    html! {
        <div class="price-container">
            {
                match &price.original {
                    Some(original) => html! { <span class="original-price">{ original.clone() }</span> },
                    None => html! {},
                }
            }
            <span class="selling-price">{ price.selling.clone() }</span>
            {
                match &price.discount {
                    Some(discount) => html! { <span class="discount-percentage">{ discount.clone() }</span> },
                    None => html! {},
                }
            }
        </div>
    }
}

pub fn swatch_list(
    swatches: &[Swatch],
    active_group: usize,
    on_select: &Callback<SelectionEvent>,
    class: &'static str,
) -> Html {
    if swatches.is_empty() {
        return html! {};
    }
    html! {
        <div class="color-options">
            {
                for swatches.iter().map(|swatch| {
                    let on_select = on_select.clone();
                    let index = swatch.index;
                    let onclick = Callback::from(move |event: MouseEvent| {
                        event.stop_propagation();
                        on_select.emit(SelectionEvent::SelectColor(index));
                    });
                    html! {
                        <div
                            class={classes!(class, (index == active_group).then_some("active"))}
                            data-color={swatch.token.clone()}
                            data-color-index={index.to_string()}
                            title={swatch.name.clone()}
                            {onclick}
                        ></div>
                    }
                })
            }
        </div>
    }
}

/// Disabled buttons render without a click handler.
pub fn contact_button(contact: ContactButton, product_id: &str, on_contact: &Callback<String>) -> Html {
    let onclick = contact.enabled.then(|| {
        let on_contact = on_contact.clone();
        let id = product_id.to_string();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_contact.emit(id.clone());
        })
    });
    let icon = if contact.enabled { "fab fa-whatsapp" } else { "fas fa-times" };

    html! {
        <button class="whatsapp-btn" disabled={!contact.enabled} {onclick}>
            <i class={icon}></i>
            { " " }{ contact.label }
        </button>
    }
}
