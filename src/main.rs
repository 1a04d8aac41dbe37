use log::{error, info, Level};
use yew::prelude::*;

mod carousel;
mod config;
mod error;
mod reveal;
mod components {
    pub mod animated;
    pub mod backdrop;
    pub mod featured_projects;
    pub mod project_card;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let projects = use_memo(|_| config::load_projects(), ());

    match projects.as_ref() {
        Ok(projects) => html! { <Landing projects={projects.clone()} /> },
        Err(err) => {
            error!("Failed to load featured projects: {}", err);
            html! {
                <div class="min-h-screen flex items-center justify-center bg-[#EBEBEB] text-black">
                    <p>{"This page could not be loaded."}</p>
                </div>
            }
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
