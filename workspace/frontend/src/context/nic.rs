use yew::prelude::*;
use crate::settings;

const NIC_STORAGE_KEY: &str = "nic";

/// The signed-in farmer's NIC, shared by the side menu and the pages.
#[derive(Clone, PartialEq)]
pub struct NicContext {
    pub nic: AttrValue,
    pub set_nic: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct NicProviderProps {
    pub children: Children,
}

/// Holds the NIC and mirrors every change into localStorage.
#[function_component(NicProvider)]
pub fn nic_provider(props: &NicProviderProps) -> Html {
    let nic = use_state(|| settings::load_item(NIC_STORAGE_KEY).unwrap_or_default());

    let set_nic = {
        let nic = nic.clone();
        Callback::from(move |value: String| {
            let value = value.trim().to_string();
            log::info!("NIC changed to '{}'", value);
            settings::store_item(NIC_STORAGE_KEY, &value);
            nic.set(value);
        })
    };

    let context = NicContext {
        nic: AttrValue::from((*nic).clone()),
        set_nic,
    };

    html! {
        <ContextProvider<NicContext> context={context}>
            {props.children.clone()}
        </ContextProvider<NicContext>>
    }
}
