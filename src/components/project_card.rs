use yew::prelude::*;

use crate::components::backdrop::shaded_background;
use crate::config::{self, Project};

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    /// The trailing card of the pair is drawn shorter.
    #[prop_or_default]
    pub is_second: bool,
    #[prop_or_default]
    pub is_animating: bool,
}

pub fn card_style(image: &str, is_animating: bool) -> String {
    let (opacity, scale) = if is_animating { (0.7, 0.98) } else { (1.0, 1.0) };
    format!(
        "width: calc(50% - 8px); flex-shrink: 0; \
         background-size: cover; background-position: center; \
         {} opacity: {}; transform: scale({}); transition: all {}ms ease-in-out;",
        shaded_background(image, 0.6, false),
        opacity,
        scale,
        config::CARD_TRANSITION_MS
    )
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let height = if props.is_second { "h-64 md:h-80" } else { "h-80 md:h-96" };
    let style = card_style(&props.project.image, props.is_animating);

    html! {
        <div class={classes!("rounded-2xl", height)} {style}>
            <div class="relative z-10 p-4 md:p-6 flex flex-col justify-end h-full text-white">
                <h4 class="text-base md:text-lg font-[400] mb-2">{ props.project.title.clone() }</h4>
                <p class="text-sm md:text-base font-[300] mb-4">{ props.project.description.clone() }</p>
                <button class="bg-white text-gray-900 px-4 md:px-5 py-2 rounded-full text-sm md:text-base font-[400] hover:bg-black hover:text-white transition-colors w-fit">
                    {"Learn more"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animating_card_is_dimmed_and_shrunk() {
        let css = card_style("project1.png", true);
        assert!(css.contains("opacity: 0.7;"));
        assert!(css.contains("transform: scale(0.98);"));
        assert!(css.contains("transition: all 700ms ease-in-out;"));
    }

    #[test]
    fn settled_card_is_full_size() {
        let css = card_style("project1.png", false);
        assert!(css.contains("opacity: 1;"));
        assert!(css.contains("transform: scale(1);"));
    }
}
