use yew::{classes, html, Component, Context, Html, Properties};

const NAV_LINKS: [(&str, &str); 3] = [
    ("#home", "Home"),
    ("#products", "Products"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct SiteNavProps {
    pub store_name: String,
}

pub enum Msg {
    ToggleMenu,
    CloseMenu,
}

/// Header navigation with the collapsible mobile menu.
pub struct SiteNav {
    menu_open: bool,
}

impl Component for SiteNav {
    type Message = Msg;
    type Properties = SiteNavProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { menu_open: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            Msg::CloseMenu => std::mem::take(&mut self.menu_open),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let active = self.menu_open.then_some("active");

        html! {
            <header class="header" id="home">
                <nav class="navbar">
                    <a class="nav-logo" href="#home">{ ctx.props().store_name.clone() }</a>
                    <ul class={classes!("nav-menu", active)}>
                        {
                            for NAV_LINKS.iter().map(|(href, label)| html! {
                                <li class="nav-item">
                                    <a class="nav-link" href={*href} onclick={link.callback(|_| Msg::CloseMenu)}>{ *label }</a>
                                </li>
                            })
                        }
                    </ul>
                    <div class={classes!("hamburger", active)} id="mobile-menu" onclick={link.callback(|_| Msg::ToggleMenu)}>
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </div>
                </nav>
            </header>
        }
    }
}
