use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <p class="footer-brand">{"estudio norte"}</p>
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                <div class="legal-links">
                    <Link<Route> to={Route::Legal}>{"Aviso legal y privacidad"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Contact}>{"Contacto"}</Link<Route>>
                </div>
                <p class="copyright">{format!("© {} estudio norte", year)}</p>
            </div>
            <style>
                {r#"
                    .site-footer {
                        padding: 4rem 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        text-align: center;
                        color: #999;
                    }
                    .site-footer a {
                        color: #7EB2FF;
                        text-decoration: none;
                    }
                    .footer-brand {
                        color: #fff;
                        font-weight: 700;
                    }
                    .legal-links {
                        margin: 1rem 0;
                    }
                    .copyright {
                        font-size: 0.85rem;
                    }
                "#}
            </style>
        </footer>
    }
}
