// frontend_foodgram/src/pages/technologies.rs
use yew::prelude::*;

use crate::components::layout::{Container, Main};
use crate::components::meta_tags::MetaTags;
use crate::content::{Section, TECHNOLOGIES, TECHNOLOGIES_META};
use crate::styles::{technologies as class, StyleKey};

#[function_component(Technologies)]
pub fn technologies() -> Html {
    html! {
        <Main>
            <MetaTags meta={TECHNOLOGIES_META} />
            <Container>
                <h1 class={class(StyleKey::Title)}>{ TECHNOLOGIES.heading }</h1>
                <div class={class(StyleKey::Content)}>
                    { for TECHNOLOGIES.sections.iter().map(section) }
                </div>
            </Container>
        </Main>
    }
}

fn section(section: &Section) -> Html {
    html! {
        <div class={class(StyleKey::Section)}>
            <h2 class={class(StyleKey::SectionHeader)}>{ section.heading }</h2>
            <div class={class(StyleKey::Text)}>
                <ul class={class(StyleKey::List)}>
                    { for section.items.iter().map(|item| html! {
                        <li class={class(StyleKey::ListItem)}>{ *item }</li>
                    }) }
                </ul>
            </div>
        </div>
    }
}
