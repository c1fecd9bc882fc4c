use yew::prelude::*;
use std::future::Future;
use std::rc::Rc;
use crate::hooks::FetchState;
use crate::widgets::toast::ToastContext;

/// Run `fetch_fn(deps)` on mount and again whenever `deps` changes.
///
/// The returned callback re-runs the fetch with the current deps. Responses
/// are not de-duplicated: a slow earlier request may land after a later one.
/// Failures are also raised as a toast when a [`ToastContext`] is present.
#[hook]
pub fn use_fetch_with_refetch<D, T, F, Fut>(deps: D, fetch_fn: F) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    D: Clone + PartialEq + 'static,
    T: 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>();
    let fetch_fn: Rc<F> = use_memo((), move |_| fetch_fn);
    let generation = use_state(|| 0u32);

    let refetch = {
        let generation = generation.clone();
        Callback::from(move |_: ()| {
            log::debug!("Refetch requested");
            generation.set(*generation + 1);
        })
    };

    {
        let fetch_state = fetch_state.clone();
        use_effect_with((deps, *generation), move |(deps, _)| {
            fetch_state.set(FetchState::Loading);

            let fut = (*fetch_fn)(deps.clone());
            wasm_bindgen_futures::spawn_local(async move {
                match fut.await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        if let Some(toast_ctx) = toast_ctx {
                            toast_ctx.show_error(err.clone());
                        }
                        fetch_state.set(FetchState::Error(err));
                    }
                }
            });
            || ()
        });
    }

    (fetch_state, refetch)
}
