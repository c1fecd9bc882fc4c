use yew::prelude::*;
use crate::context::{SidebarContext, ThemeContext};
use crate::context::theme::ThemeMode;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let sidebar = use_context::<SidebarContext>();
    let theme = use_context::<ThemeContext>();

    let on_collapse = sidebar.as_ref().map(|ctx| {
        let toggle = ctx.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    });
    let on_theme = theme.as_ref().map(|ctx| {
        let toggle = ctx.toggle.clone();
        Callback::from(move |_: Event| toggle.emit(()))
    });
    let dark = theme.map(|ctx| ctx.mode == ThemeMode::Dark).unwrap_or(false);

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="farmer-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-none hidden lg:block">
                <button aria-label="collapse sidebar" class="btn btn-square btn-ghost" onclick={on_collapse}>
                    <i class="fas fa-bars text-xl"></i>
                </button>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                <label class="swap swap-rotate btn btn-ghost btn-circle">
                    <input id="theme-toggle" type="checkbox" checked={dark} onchange={on_theme} />
                    <i class="swap-on fill-current fas fa-sun text-xl"></i>
                    <i class="swap-off fill-current fas fa-moon text-xl"></i>
                </label>
            </div>
        </div>
    }
}
