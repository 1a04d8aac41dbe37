use yew::prelude::*;

use crate::config;
use crate::reveal::{stagger_tokens, use_reveal, Direction, RevealConfig, RevealStyle};

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: AttrValue,
    /// Transition delay in seconds.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub direction: Direction,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let reveal = use_reveal(RevealConfig::default());
    let style = RevealStyle::section(props.direction, props.delay).css(reveal.is_visible);

    html! {
        <div ref={reveal.node_ref} class={props.class.to_string()} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    /// Newlines become line breaks.
    pub text: AttrValue,
    #[prop_or_default]
    pub class: AttrValue,
    /// Extra inline CSS appended to the reveal style.
    #[prop_or_default]
    pub style: AttrValue,
    /// Reveal word by word instead of all at once.
    #[prop_or_default]
    pub stagger: bool,
}

#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let reveal = use_reveal(RevealConfig::default());
    let visible = reveal.is_visible;

    if !props.stagger {
        let style = format!("{} {}", RevealStyle::text().css(visible), props.style);
        let lines = props.text.lines().enumerate().map(|(i, line)| {
            html! {
                <>
                    if i > 0 { <br /> }
                    { line.to_string() }
                </>
            }
        });
        return html! {
            <div ref={reveal.node_ref} class={props.class.to_string()} {style}>
                { for lines }
            </div>
        };
    }

    let words = stagger_tokens(&props.text, config::STAGGER_STEP_SECS)
        .into_iter()
        .map(|token| {
            let style = format!(
                "display: inline-block; margin-right: 0.25rem; {} {}",
                RevealStyle::token(token.delay_secs).css(visible),
                props.style
            );
            html! {
                <>
                    if token.line_break { <br /> }
                    <span {style}>{ token.text }</span>
                </>
            }
        });

    html! {
        <div ref={reveal.node_ref} class={props.class.to_string()}>
            { for words }
        </div>
    }
}
