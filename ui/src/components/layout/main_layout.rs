use yew::prelude::*;

use super::{Footer, NavBar};

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col">
            <NavBar />
            <main class="flex-1 w-full max-w-7xl mx-auto">
                {props.children.clone()}
            </main>
            <Footer />
        </div>
    }
}
