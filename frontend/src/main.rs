use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod nav {
    pub mod component;
    pub mod menu;
    pub mod scroll_lock;
    pub mod state;
}
mod scroll {
    pub mod binding;
    pub mod dom;
    pub mod hooks;
    pub mod pin;
    pub mod registry;
    pub mod style;
}
mod components {
    pub mod footer;
    pub mod hero;
    pub mod horizontal_strip;
    pub mod team_grid;
    pub mod values_grid;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod legal;
    pub mod not_found;
    pub mod portfolio;
    pub mod service;
}

use nav::component::Nav;
use nav::state::Language;
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    legal::Legal,
    not_found::NotFound,
    portfolio::Portfolio,
    service::Service,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/portfolio")]
    Portfolio,
    #[at("/services/:slug")]
    Service { slug: String },
    #[at("/legal")]
    Legal,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        },
        Route::Service { slug } => {
            info!("Rendering Service page for {}", slug);
            // keyed so switching between services remounts and rebinds
            let key = slug.clone();
            html! { <Service key={key} slug={slug} /> }
        },
        Route::Legal => {
            info!("Rendering Legal page");
            html! { <Legal /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let language = use_state_eq(|| config::DEFAULT_LANGUAGE);
    let on_language_change = {
        let language = language.setter();
        Callback::from(move |next: Language| {
            info!("Language switched to {}", next.code());
            language.set(next);
        })
    };

    html! {
        <BrowserRouter>
            <ContextProvider<Language> context={*language}>
                <Nav on_language_change={on_language_change} />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
            </ContextProvider<Language>>
            <style>
                {r#"
                    html, body {
                        margin: 0;
                        background: #0c0c0e;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .forward-link {
                        text-decoration: none;
                    }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip_through_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/portfolio"), Some(Route::Portfolio));
        assert_eq!(
            Route::recognize("/services/apps"),
            Some(Route::Service { slug: "apps".into() })
        );
        assert_eq!(Route::Legal.to_path(), "/legal");
    }

    #[test]
    fn service_pages_are_keyed_by_slug() {
        use yew::virtual_dom::Key;

        let web = switch(Route::Service { slug: "web".into() });
        let apps = switch(Route::Service { slug: "apps".into() });
        assert_eq!(web.key(), Some(&Key::from("web")));
        assert_eq!(apps.key(), Some(&Key::from("apps")));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(
            Route::recognize("/no-such-page").or_else(Route::not_found_route),
            Some(Route::NotFound)
        );
    }
}
