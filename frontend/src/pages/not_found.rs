use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"Esta página no existe."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">{"Volver al inicio"}</Link<Route>>
            <style>
                {r#"
                    .not-found-page {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                    }
                    .not-found-page a {
                        color: #7EB2FF;
                    }
                "#}
            </style>
        </div>
    }
}
