use chrono::Datelike;
use yew::prelude::*;

use crate::components::animated::{AnimatedSection, AnimatedText};
use crate::components::backdrop::shaded_background;
use crate::components::featured_projects::FeaturedProjects;
use crate::config::{asset_url, ProjectList};
use crate::reveal::Direction;

const SERIF: &str = "font-family: 'Playfair Display', serif;";

const FOOTER_COLUMNS: [(&str, [&str; 4]); 3] = [
    ("Our Story", ["About Us", "Our Team", "Careers", "News"]),
    (
        "What We Do",
        [
            "Residential Projects",
            "Commercial Spaces",
            "Investment Opportunities",
            "Property Management",
        ],
    ),
    ("Locations", ["New York", "Chicago", "Los Angeles", "Miami"]),
];

const STATS: [(&str, &str, &str); 3] = [
    ("50+", "Projects", "Completed"),
    ("15", "Years", "Experience"),
    ("10k", "Happy", "Homeowners"),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub projects: ProjectList,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="min-h-screen bg-[#EBEBEB] text-black tracking-tight" style="font-family: 'DM Sans', sans-serif;">
            <Nav />
            <Hero />

            <section class="py-12 md:py-20 px-6">
                <div class="max-w-7xl mx-auto md:px-36">
                    <AnimatedSection>
                        <h2 class="text-2xl md:text-3xl lg:text-4xl mb-6 md:mb-8 leading-tight">
                            {"Premier developer of residential and commercial properties with "}
                            <em class="font-normal" style={SERIF}>{"innovative"}</em>{" design, "}
                            <em class="font-normal" style={SERIF}>{"sustainable"}</em>{" practices, and "}
                            <em class="font-normal" style={SERIF}>{"exceptional"}</em>{" value"}
                        </h2>
                    </AnimatedSection>

                    <div class="grid lg:grid-cols-[1fr_2fr] gap-8">
                        <AnimatedSection direction={Direction::Left} delay={0.3}>
                            <div class="flex flex-col justify-between h-full gap-6 md:gap-0">
                                <div class="relative flex items-center gap-2">
                                    <p>{"Featured"}</p>
                                    <div class="flex-1 h-px bg-black"></div>
                                </div>
                                <div class="hidden md:block">
                                    <h2 class="text-2xl md:text-3xl lg:text-4xl tracking-tight mb-4 md:mb-6">
                                        {"Our Signature"}<br />{"Developments"}
                                    </h2>
                                    <button class="bg-black text-white px-5 py-2 rounded-full hover:bg-gray-800 transition-colors">
                                        {"View all projects ↗"}
                                    </button>
                                </div>
                            </div>
                        </AnimatedSection>

                        <AnimatedSection direction={Direction::Right} delay={0.5}>
                            <FeaturedProjects projects={props.projects.clone()} />
                        </AnimatedSection>
                    </div>
                </div>
            </section>

            <Showcase />
            <StatsAndCta />
            <Footer />
        </div>
    }
}

#[function_component(Nav)]
fn nav() -> Html {
    html! {
        <nav class="absolute top-6 md:top-10 left-0 right-0 z-50">
            <div class="max-w-7xl mx-auto flex items-center justify-between px-6 md:px-36">
                <AnimatedSection direction={Direction::Left} delay={0.2}>
                    <div class="flex items-center space-x-2">
                        <img src={asset_url("logo.png")} alt="Elevate Logo" class="w-8 h-8 md:w-10 md:h-10 object-contain" />
                        <span class="text-white font-[500] text-lg md:text-xl">{"Elevate"}</span>
                    </div>
                </AnimatedSection>
                <AnimatedSection direction={Direction::Right} delay={0.4}>
                    <div class="hidden md:flex items-center space-x-8">
                        { for ["About", "Projects", "Investment", "Contact"].iter().map(|label| html! {
                            <a href="#" class="text-white text-lg font-[300] hover:text-gray-300 transition-colors">{ *label }</a>
                        }) }
                    </div>
                </AnimatedSection>
            </div>
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="relative min-h-[75vh] sm:min-h-screen">
            <div
                class="absolute inset-0 bg-cover bg-center bg-no-repeat"
                style={shaded_background("background.png", 0.6, true)}
            />
            <div class="relative z-10 text-left text-white max-w-7xl mx-auto flex items-center">
                <div class="grid items-start gap-8 md:gap-12 pt-36 px-6 md:px-36">
                    <div>
                        <AnimatedText
                            class="text-4xl sm:text-5xl xl:text-5xl font-[300] leading-tight tracking-tight mb-4 md:mb-6"
                            text={"Building Tomorrow's\nCommunities Today"}
                        />
                        <AnimatedSection delay={0.6}>
                            <p class="text-base sm:text-lg md:text-base font-[300] leading-relaxed">
                                {"Transform your vision into reality with our premium residential and \
                                  commercial developments. We create exceptional spaces where innovation \
                                  meets tradition, uncompromising quality, delivering properties that \
                                  exceed expectations and build lasting value."}
                            </p>
                        </AnimatedSection>
                    </div>

                    <AnimatedSection delay={0.8} class="hidden md:block">
                        <div class="bg-white rounded-full shadow-2xl p-1 flex items-center">
                            { for ["Property", "Location", "Budget"].iter().map(|filter| html! {
                                <div class="relative flex-1">
                                    <select class="bg-transparent text-black px-6 py-3 rounded-full border-0 outline-none w-full">
                                        <option>{ *filter }</option>
                                    </select>
                                </div>
                            }) }
                            <button class="bg-black text-white px-8 py-3 rounded-full hover:bg-gray-800 transition-colors">
                                {"Search"}
                            </button>
                        </div>
                    </AnimatedSection>
                </div>
            </div>
        </section>
    }
}

#[function_component(Showcase)]
fn showcase() -> Html {
    html! {
        <AnimatedSection class="relative grid grid-cols-1 lg:grid-cols-2 min-h-[60vh] md:min-h-[80vh] bg-white rounded-2xl overflow-hidden my-4 mx-4 md:mx-auto">
            <AnimatedSection direction={Direction::Left} delay={0.2}>
                <div
                    class="w-full h-full min-h-[40vh] bg-cover bg-center rounded-t-2xl lg:rounded-l-2xl lg:rounded-t-none"
                    style={shaded_background("urbanToSuburban.png", 0.3, true)}
                />
            </AnimatedSection>
            <AnimatedSection direction={Direction::Right} delay={0.4} class="p-8 md:p-16 flex items-center">
                <div>
                    <AnimatedText
                        class="text-2xl md:text-3xl lg:text-4xl mb-4 md:mb-6 italic"
                        style={SERIF}
                        text={"From Urban Living to\nSuburban Dreams,"}
                    />
                    <AnimatedText
                        class="text-2xl md:text-4xl lg:text-5xl mb-4 md:mb-6 leading-tight tracking-tight"
                        stagger={true}
                        text={"We Build for\nEvery Lifestyle."}
                    />
                    <AnimatedSection delay={0.4}>
                        <p class="text-sm md:text-base font-[300] max-w-md leading-relaxed">
                            {"No matter what your vision entails, we have the expertise and resources to \
                              bring it to life. From intimate boutique developments to large-scale \
                              communities serving 500+ families or more."}
                        </p>
                    </AnimatedSection>
                </div>
            </AnimatedSection>
        </AnimatedSection>
    }
}

#[function_component(StatsAndCta)]
fn stats_and_cta() -> Html {
    html! {
        <section class="py-12 md:py-20 px-6">
            <div class="max-w-7xl mx-auto md:px-36">
                <div class="grid lg:grid-cols-[40%_60%] gap-4">
                    <AnimatedSection direction={Direction::Left} class="hidden md:block">
                        <div class="h-full bg-black text-white font-[300] p-6 rounded-2xl">
                            <h3 class="text-2xl md:text-3xl lg:text-4xl mb-4 leading-tight tracking-tight">
                                {"Ready to Start"}<br />{"Your Next"}<br />{"Chapter?"}
                            </h3>
                        </div>
                    </AnimatedSection>

                    <AnimatedSection direction={Direction::Right} delay={0.2}>
                        <div class="grid grid-cols-3 gap-4 md:gap-8 p-2 mb-4">
                            { for STATS.iter().enumerate().map(|(i, (figure, top, bottom))| html! {
                                <AnimatedSection delay={0.1 * (i + 1) as f64}>
                                    <div class="text-3xl md:text-4xl lg:text-5xl mb-2">{ *figure }</div>
                                    <p class="text-sm md:text-lg leading-tight">{ *top }<br />{ *bottom }</p>
                                </AnimatedSection>
                            }) }
                        </div>

                        <AnimatedSection delay={0.4}>
                            <div
                                class="bg-cover bg-center text-white text-center p-8 md:p-12 rounded-2xl"
                                style={shaded_background("discover.png", 0.6, true)}
                            >
                                <h3 class="text-2xl md:text-3xl font-[300] tracking-tight mb-4 md:mb-6">
                                    {"Discover your perfect"}<br />{"property today"}
                                </h3>
                                <button class="bg-white text-black px-5 py-2 rounded-full hover:bg-black hover:text-white transition-colors">
                                    {"Schedule tour"}
                                </button>
                            </div>
                        </AnimatedSection>
                    </AnimatedSection>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <AnimatedSection>
            <footer class="bg-black text-white py-12 md:py-16 px-6 rounded-t-2xl">
                <div class="max-w-7xl mx-auto md:px-36">
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                        <AnimatedSection delay={0.1}>
                            <div class="flex items-center space-x-2 mb-4">
                                <img src={asset_url("logo.png")} alt="Elevate Logo" class="w-8 h-8 object-contain" />
                                <span class="font-[500] text-lg">{"Elevate"}</span>
                            </div>
                            <div class="flex space-x-3">
                                { for ["Linkedin", "Instagram", "Facebook", "Twitter"].iter().map(|network| html! {
                                    <img src={asset_url(&format!("{}.png", network))} alt={*network} class="w-6 h-6" />
                                }) }
                            </div>
                        </AnimatedSection>

                        { for FOOTER_COLUMNS.iter().enumerate().map(|(i, (heading, links))| html! {
                            <AnimatedSection delay={0.1 * (i + 2) as f64}>
                                <h4 class="text-lg font-[400] mb-4">{ *heading }</h4>
                                <ul class="space-y-2 font-[300]">
                                    { for links.iter().map(|link| html! {
                                        <li><a href="#" class="hover:text-gray-300 transition-colors">{ *link }</a></li>
                                    }) }
                                </ul>
                            </AnimatedSection>
                        }) }
                    </div>

                    <AnimatedSection delay={0.4}>
                        <div class="pt-8 space-y-2">
                            <h4 class="text-lg font-[400] mb-4">{"Contact"}</h4>
                            <p class="text-sm md:text-base">{"Phone: (555) 123-4567"}</p>
                            <p class="text-sm md:text-base">{"Email: elevate@elevdev.com"}</p>
                            <p class="text-sm md:text-base">{"Address: 123 Development Ave, Suite 100"}</p>
                        </div>
                        <p class="text-center mt-8 md:mt-12 text-sm md:text-base">
                            { format!("© {} Elevate Development. All rights reserved.", year) }
                        </p>
                    </AnimatedSection>
                </div>
            </footer>
        </AnimatedSection>
    }
}
