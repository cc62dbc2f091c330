// frontend_foodgram/src/router.rs
use crate::pages::technologies::Technologies;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Routable, PartialEq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/technologies")]
    Technologies,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <Switch<Route> render={switch} />
    }
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Technologies} /> },
        Route::Technologies => html! { <Technologies /> },
        Route::NotFound => html! { <h1>{ "404 - Страница не найдена" }</h1> },
    }
}
