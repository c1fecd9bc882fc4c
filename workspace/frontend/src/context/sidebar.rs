use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct SidebarContext {
    pub collapsed: bool,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct SidebarProviderProps {
    pub children: Children,
}

#[function_component(SidebarProvider)]
pub fn sidebar_provider(props: &SidebarProviderProps) -> Html {
    let collapsed = use_state(|| false);

    let toggle = {
        let collapsed = collapsed.clone();
        Callback::from(move |_: ()| {
            log::debug!("Sidebar collapsed: {}", !*collapsed);
            collapsed.set(!*collapsed);
        })
    };

    let context = SidebarContext {
        collapsed: *collapsed,
        toggle,
    };

    html! {
        <ContextProvider<SidebarContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SidebarContext>>
    }
}
