use yew::prelude::*;

use crate::carousel::use_carousel;
use crate::components::project_card::ProjectCard;
use crate::config::{self, ProjectList};

const ARROW_BUTTON: &str =
    "rounded-full p-1 md:p-1.5 transition-colors disabled:opacity-50 disabled:cursor-not-allowed";

#[derive(Properties, PartialEq)]
pub struct FeaturedProjectsProps {
    pub projects: ProjectList,
}

#[function_component(FeaturedProjects)]
pub fn featured_projects(props: &FeaturedProjectsProps) -> Html {
    let carousel = use_carousel(props.projects.len(), config::SETTLE_DELAY_MS);
    let [first, second] = props.projects.pair(carousel.window);
    let is_animating = carousel.state.is_animating;
    let disabled = !carousel.state.controls_enabled();

    let on_prev = carousel.retreat.reform(|_: MouseEvent| ());
    let on_next = carousel.advance.reform(|_: MouseEvent| ());

    html! {
        <div class="relative w-full h-80 md:h-96">
            <div class="flex gap-3 md:gap-4 items-start h-full">
                <ProjectCard project={first.clone()} is_second={false} {is_animating} />
                <ProjectCard project={second.clone()} is_second={true} {is_animating} />
            </div>

            <div class="absolute bottom-0 flex gap-2" style="left: calc(65% + 10px)">
                <button
                    onclick={on_prev}
                    {disabled}
                    aria-label="Previous project"
                    class={classes!(ARROW_BUTTON, "bg-white", "text-black", "hover:bg-black", "hover:text-white")}
                >
                    {"←"}
                </button>
                <button
                    onclick={on_next}
                    {disabled}
                    aria-label="Next project"
                    class={classes!(ARROW_BUTTON, "bg-black", "text-white", "hover:bg-white", "hover:text-black")}
                >
                    {"→"}
                </button>
            </div>
        </div>
    }
}
