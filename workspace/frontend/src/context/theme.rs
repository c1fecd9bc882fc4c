use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use crate::settings;

const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// daisyUI theme name
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub mode: ThemeMode,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

/// Applies the daisyUI theme to `<html>` and installs the portal-wide CSS,
/// including the weather background classes.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let mode = use_state(|| match settings::load_item(THEME_STORAGE_KEY).as_deref() {
        Some("dark") => ThemeMode::Dark,
        _ => ThemeMode::Light,
    });

    use_effect_with(*mode, |mode| {
        let applied = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|root| root.set_attribute("data-theme", mode.as_str()));
        if !matches!(applied, Some(Ok(()))) {
            log::warn!("Could not apply theme {}", mode.as_str());
        }
        || ()
    });

    let toggle = {
        let mode = mode.clone();
        Callback::from(move |_: ()| {
            let next = mode.toggled();
            settings::store_item(THEME_STORAGE_KEY, next.as_str());
            mode.set(next);
        })
    };

    let context = ThemeContext { mode: *mode, toggle };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <Global css={css!(r#"
                .farmer-sidebar {
                    background-color: #D7FBE8;
                    transition: width 0.3s;
                }
                .farmer-sidebar .menu a.active {
                    background-color: #9DF3C4;
                    color: #1f2937;
                }
                .weather-container {
                    border-radius: 1rem;
                    padding: 1.5rem;
                    transition: background 0.5s;
                }
                .sunny-bg {
                    background: linear-gradient(135deg, #fde68a, #fca5a5);
                }
                .rainy-bg {
                    background: linear-gradient(135deg, #93c5fd, #64748b);
                }
                .cloudy-bg {
                    background: linear-gradient(135deg, #e5e7eb, #9ca3af);
                }
                .default-bg {
                    background: linear-gradient(135deg, #d1fae5, #a7f3d0);
                }
                .info-box {
                    background-color: rgba(255, 255, 255, 0.6);
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                    text-align: center;
                }
            "#)} />
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}
