use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"La página que buscas no existe."}</p>
            <Link<Route> to={Route::Landing} classes="not-found-link">
                {"Volver al inicio"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    background: #0d1117;
                    color: #ffffff;
                    font-family: system-ui, sans-serif;
                }
                .not-found h1 {
                    font-size: 5rem;
                    margin: 0;
                    color: #22d3ee;
                }
                .not-found p {
                    color: #9ca3af;
                }
                .not-found-link {
                    padding: 0.75rem 2rem;
                    border-radius: 0.5rem;
                    background: #0891b2;
                    color: #ffffff;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
